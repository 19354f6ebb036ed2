// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use polycalc_config::CliConfig;
use polycalc_polynomial::Polynomial;
use std::path::Path;

pub fn execute(config: &CliConfig, polynomial: &Polynomial, file: &Path) -> Result<()> {
    let path = config.resolve_path(file);
    polynomial
        .save_to_file(&path)
        .with_context(|| format!("Could not save polynomial to {}", path.display()))?;
    println!("Saved {polynomial} to {}", path.display());
    Ok(())
}
