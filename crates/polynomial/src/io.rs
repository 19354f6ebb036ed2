// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Reading and writing polynomials as single-line text files.

use crate::errors::PolynomialError;
use crate::polynomial::Polynomial;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

impl Polynomial {
    /// Loads a polynomial from the first line of a text file.
    ///
    /// Anything after the first line is ignored. An empty file holds the zero
    /// polynomial, which is what [`Polynomial::save_to_file`] writes for it.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::IoError` if the file cannot be opened or read,
    /// and a parse error if the line is not a valid polynomial.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PolynomialError> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let mut line = String::new();
        BufReader::new(file).read_line(&mut line)?;
        debug!(path = %path.display(), line = line.trim_end(), "Read polynomial file");

        Polynomial::parse(&line)
    }

    /// Writes the canonical text form to `path`, replacing any existing file.
    ///
    /// The file contains exactly the text of `to_string()` with no trailing
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::IoError` if the file cannot be created or written.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PolynomialError> {
        let path = path.as_ref();
        let rendered = self.to_string();

        let mut file = File::create(path)?;
        file.write_all(rendered.as_bytes())?;
        file.flush()?;

        info!(path = %path.display(), terms = self.num_terms(), "Saved polynomial");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poly.txt");

        let p = Polynomial::from_exponent_map([(0, 2.0), (2, -5.0), (4, 3.0)]);
        p.save_to_file(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "2-5x2+3x4");
        assert_eq!(Polynomial::from_file(&path).unwrap(), p);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poly.txt");
        fs::write(&path, "a much longer previous content\nwith two lines").unwrap();

        Polynomial::monomial(3.0, 11).save_to_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "3x11");
    }

    #[test]
    fn test_zero_polynomial_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zero.txt");

        Polynomial::zero().save_to_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
        assert!(Polynomial::from_file(&path).unwrap().is_zero());
    }

    #[test]
    fn test_load_reads_only_first_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poly.txt");
        fs::write(&path, "3x4+2+-5x2\nnot a polynomial\n").unwrap();

        let p = Polynomial::from_file(&path).unwrap();
        assert_eq!(p.to_string(), "2-5x2+3x4");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = Polynomial::from_file(dir.path().join("missing.txt"));
        assert!(matches!(
            result,
            Err(PolynomialError::IoError(ref e)) if e.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poly.txt");
        fs::write(&path, "x5").unwrap();

        assert!(matches!(
            Polynomial::from_file(&path),
            Err(PolynomialError::ParseCoefficient { .. })
        ));
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no/such/dir/poly.txt");
        assert!(matches!(
            Polynomial::constant(2.0).save_to_file(path),
            Err(PolynomialError::IoError(_))
        ));
    }
}
