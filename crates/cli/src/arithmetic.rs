// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use polycalc_polynomial::Polynomial;
use tracing::debug;

pub fn execute_add(left: &Polynomial, right: &Polynomial) {
    let sum = left.add(right);
    debug!(terms = sum.num_terms(), "Computed sum");
    println!("{sum}");
}

pub fn execute_mul(left: &Polynomial, right: &Polynomial) -> Result<()> {
    let product = left
        .multiply(right)
        .with_context(|| format!("Could not multiply {left} by {right}"))?;
    debug!(terms = product.num_terms(), "Computed product");
    println!("{product}");
    Ok(())
}
