// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Sparse polynomial arithmetic implementation.

use crate::errors::PolynomialError;
use std::collections::{BTreeMap, HashMap};
use std::ops;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A univariate polynomial stored as a sparse map from exponent to coefficient.
///
/// The polynomial is represented as:
/// `c_0 * x^e_0 + c_1 * x^e_1 + ... + c_k * x^e_k`
///
/// Only exponents that carry a coefficient are stored. The empty map is the
/// zero polynomial. Values are immutable: [`Polynomial::add`] and
/// [`Polynomial::multiply`] return new polynomials and never touch their
/// operands.
///
/// Terms are kept in ascending exponent order, which also fixes the summation
/// order used by [`Polynomial::evaluate`].
///
/// Zero coefficients are only removed by [`Polynomial::add`]. Constructors
/// keep whatever they are given and [`Polynomial::multiply`] keeps zeros that
/// arise from cancellation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    /// Exponent to coefficient.
    terms: BTreeMap<u32, f64>,
}

impl Polynomial {
    /// Creates the zero polynomial.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates a polynomial from parallel coefficient and exponent slices.
    ///
    /// The `i`-th coefficient belongs to the `i`-th exponent. The data is
    /// copied. Zero coefficients are kept as given.
    ///
    /// If `exponents` contains duplicates the last occurrence wins; callers
    /// should not rely on this.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::LengthMismatch` if the slices differ in length.
    pub fn from_terms(coefficients: &[f64], exponents: &[u32]) -> Result<Self, PolynomialError> {
        if coefficients.len() != exponents.len() {
            return Err(PolynomialError::LengthMismatch {
                coefficients: coefficients.len(),
                exponents: exponents.len(),
            });
        }

        let terms = exponents
            .iter()
            .copied()
            .zip(coefficients.iter().copied())
            .collect();

        Ok(Self { terms })
    }

    /// Creates a polynomial from an exponent to coefficient mapping.
    ///
    /// The mapping is expected to contain no zero coefficients. This is not
    /// checked.
    pub fn from_exponent_map<I>(map: I) -> Self
    where
        I: IntoIterator<Item = (u32, f64)>,
    {
        Self {
            terms: map.into_iter().collect(),
        }
    }

    /// Creates a constant polynomial.
    pub fn constant(constant: f64) -> Self {
        Self::monomial(constant, 0)
    }

    /// Creates the single-term polynomial `coefficient * x^exponent`.
    pub fn monomial(coefficient: f64, exponent: u32) -> Self {
        Self {
            terms: BTreeMap::from([(exponent, coefficient)]),
        }
    }

    /// Returns the degree of the polynomial, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<u32> {
        self.terms.keys().next_back().copied()
    }

    /// Checks if the polynomial has no terms.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of stored terms.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Returns the coefficient stored at `exponent`, if any.
    pub fn coefficient(&self, exponent: u32) -> Option<f64> {
        self.terms.get(&exponent).copied()
    }

    /// Iterates over `(exponent, coefficient)` pairs in ascending exponent order.
    pub fn terms(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.terms.iter().map(|(e, c)| (*e, *c))
    }

    /// Returns the stored exponents in ascending order.
    pub fn exponents(&self) -> Vec<u32> {
        self.terms.keys().copied().collect()
    }

    /// Returns the stored coefficients, ordered by ascending exponent.
    pub fn coefficients(&self) -> Vec<f64> {
        self.terms.values().copied().collect()
    }

    /// Returns an owned exponent to coefficient map.
    pub fn to_exponent_map(&self) -> HashMap<u32, f64> {
        self.terms.iter().map(|(e, c)| (*e, *c)).collect()
    }

    /// Adds two polynomials together.
    ///
    /// Coefficients of equal exponents are summed and exponents present in
    /// only one operand are copied. Every resulting term whose coefficient
    /// compares equal to `0.0` is then removed. The comparison is exact, so a
    /// sum like `0.1 + 0.2 - 0.3` survives as a tiny non-zero term.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to add to `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the sum of the two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = self.terms.clone();

        for (exponent, coefficient) in &other.terms {
            terms
                .entry(*exponent)
                .and_modify(|existing| *existing += coefficient)
                .or_insert(*coefficient);
        }

        terms.retain(|_, coefficient| *coefficient != 0.0);

        Self { terms }
    }

    /// Multiplies two polynomials.
    ///
    /// Every pair of terms contributes `c1 * c2` at exponent `e1 + e2`;
    /// contributions landing on the same exponent are summed. Terms that
    /// cancel to zero are kept.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to multiply with `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the product, or
    /// [`PolynomialError::ExponentOverflow`] if two exponents sum past
    /// `u32::MAX`.
    pub fn multiply(&self, other: &Self) -> Result<Self, PolynomialError> {
        let mut terms = BTreeMap::new();

        for (&e1, c1) in &self.terms {
            for (&e2, c2) in &other.terms {
                let exponent = e1
                    .checked_add(e2)
                    .ok_or(PolynomialError::ExponentOverflow {
                        left: e1,
                        right: e2,
                    })?;
                let product = c1 * c2;
                terms
                    .entry(exponent)
                    .and_modify(|existing| *existing += product)
                    .or_insert(product);
            }
        }

        Ok(Self { terms })
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Terms are summed left to right in ascending exponent order, each
    /// computed as `coefficient * x.powf(exponent)`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .fold(0.0, |acc, (exponent, coefficient)| {
                acc + coefficient * x.powf(f64::from(*exponent))
            })
    }

    /// Checks whether `x` is a root, i.e. whether `evaluate(x)` is exactly `0.0`.
    ///
    /// No tolerance is applied: a value that is a root mathematically but
    /// evaluates to a tiny rounding residue is not reported as a root.
    pub fn has_root(&self, x: f64) -> bool {
        self.evaluate(x) == 0.0
    }
}

impl FromIterator<(u32, f64)> for Polynomial {
    fn from_iter<T: IntoIterator<Item = (u32, f64)>>(iter: T) -> Self {
        Self::from_exponent_map(iter)
    }
}

impl<'a> ops::Add<&'a Polynomial> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn add(self, other: &'a Polynomial) -> Polynomial {
        Polynomial::add(self, other)
    }
}

/// Products can overflow the exponent type, so `*` yields a `Result`.
impl<'a> ops::Mul<&'a Polynomial> for &Polynomial {
    type Output = Result<Polynomial, PolynomialError>;

    #[inline]
    fn mul(self, other: &'a Polynomial) -> Self::Output {
        self.multiply(other)
    }
}

macro_rules! impl_op {
    ($trait:ident, $method:ident, $op:tt, $output:ty) => {
        impl ops::$trait<Polynomial> for Polynomial {
            type Output = $output;

            #[inline]
            fn $method(self, other: Polynomial) -> $output {
                &self $op &other
            }
        }

        impl<'a> ops::$trait<&'a Polynomial> for Polynomial {
            type Output = $output;

            #[inline]
            fn $method(self, other: &'a Polynomial) -> $output {
                &self $op other
            }
        }

        impl ops::$trait<Polynomial> for &Polynomial {
            type Output = $output;

            #[inline]
            fn $method(self, other: Polynomial) -> $output {
                self $op &other
            }
        }
    };
}

impl_op!(Add, add, +, Polynomial);
impl_op!(Mul, mul, *, Result<Polynomial, PolynomialError>);
