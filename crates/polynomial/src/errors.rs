// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for polynomial operations.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Errors that can occur during polynomial construction, parsing and persistence.
#[derive(Debug, Error)]
pub enum PolynomialError {
    /// Coefficient and exponent slices of different lengths
    #[error("There must be exactly as many exponents ({exponents}) as coefficients ({coefficients})")]
    LengthMismatch {
        coefficients: usize,
        exponents: usize,
    },

    /// Coefficient part of a term is not a valid number
    #[error("Invalid coefficient in term '{token}': {source}")]
    ParseCoefficient {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    /// Exponent part of a term is not a valid non-negative integer
    #[error("Invalid exponent in term '{token}': {source}")]
    ParseExponent {
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// Two exponents whose sum does not fit in a `u32`
    #[error("Exponent overflow multiplying x^{left} by x^{right}")]
    ExponentOverflow { left: u32, right: u32 },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
