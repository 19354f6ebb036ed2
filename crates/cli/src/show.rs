// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::helpers::describe_degree;
use anyhow::{Context, Result};
use polycalc_config::CliConfig;
use polycalc_polynomial::Polynomial;
use std::path::Path;
use tracing::info;

pub fn load(config: &CliConfig, file: &Path) -> Result<Polynomial> {
    let path = config.resolve_path(file);
    let polynomial = Polynomial::from_file(&path)
        .with_context(|| format!("Could not load polynomial from {}", path.display()))?;
    info!(path = %path.display(), "Loaded polynomial");
    Ok(polynomial)
}

pub fn execute(config: &CliConfig, file: &Path) -> Result<()> {
    let polynomial = load(config, file)?;
    println!("{polynomial}");
    println!("degree: {}", describe_degree(&polynomial));
    Ok(())
}
