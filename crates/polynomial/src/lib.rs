// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! Sparse univariate polynomials with `f64` coefficients.
//!
//! ## Features
//!
//! - Sparse representation: only exponents that carry a coefficient are stored.
//! - Arithmetic: addition (with exact-zero pruning) and full convolution multiplication.
//! - Evaluation and exact root testing.
//! - Text codec: a compact canonical form such as `2-5x2+3x4` and a parser for it.
//! - Persistence: saving the canonical form to a file and loading it back.
//! - Serialization: Optional serde support with bincode integration.
//!
//! ## Numeric semantics
//!
//! All arithmetic is plain IEEE-754 double arithmetic. Zero pruning and root
//! testing use exact equality against `0.0`, never a tolerance.

pub mod codec;
pub mod errors;
pub mod io;
pub mod polynomial;

pub use errors::PolynomialError;
pub use polynomial::Polynomial;
