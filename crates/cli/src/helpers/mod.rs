// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use polycalc_polynomial::{Polynomial, PolynomialError};

pub mod telemetry;

/// Parse a polynomial argument given in canonical text form, e.g. `2-5x2+3x4`
pub fn parse_polynomial(s: &str) -> Result<Polynomial, PolynomialError> {
    Polynomial::parse(s)
}

/// Human readable degree, `-inf` for the zero polynomial
pub fn describe_degree(p: &Polynomial) -> String {
    match p.degree() {
        Some(degree) => degree.to_string(),
        None => "-inf".to_string(),
    }
}
