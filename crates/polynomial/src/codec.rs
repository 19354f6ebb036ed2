// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Canonical text form of a polynomial.
//!
//! Terms are written in ascending exponent order with no separators other
//! than signs, e.g. `2-5x2+3x4` for `2 - 5x^2 + 3x^4`. Coefficients use the
//! `f64` `Display` form, so integral values print without a fractional part.
//!
//! The formatter elides a coefficient of exactly `1` and the exponent `1`
//! while the parser requires both parts of every `x` term. Text produced for
//! polynomials with such terms (`x5`, `3x`) does not parse back. Only
//! polynomials without elided parts round-trip.

use crate::errors::PolynomialError;
use crate::polynomial::Polynomial;
use std::collections::HashMap;
use std::fmt::{self, Write};
use std::str::FromStr;

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();

        for (exponent, coefficient) in self.terms() {
            if coefficient < 0.0 {
                write!(out, "{coefficient}")?;
            } else {
                out.push('+');
                if coefficient != 1.0 {
                    write!(out, "{coefficient}")?;
                }
            }

            if exponent != 0 {
                out.push('x');
                if exponent != 1 {
                    write!(out, "{exponent}")?;
                }
            }
        }

        f.write_str(out.strip_prefix('+').unwrap_or(&out))
    }
}

impl Polynomial {
    /// Parses the canonical text form.
    ///
    /// Every `-` is treated as the start of a negative term and the input is
    /// split on `+`. A term without `x` is a constant; any other term is
    /// split at its first `x` into a coefficient and an exponent, both of
    /// which must be present. Empty terms are skipped, so the empty string is
    /// the zero polynomial. Repeated exponents keep the last value and zero
    /// coefficients are kept.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::ParseCoefficient` or
    /// `PolynomialError::ParseExponent` for the first malformed term.
    pub fn parse(input: &str) -> Result<Self, PolynomialError> {
        let normalized = input.trim().replace('-', "+-");
        let mut terms = HashMap::new();

        for token in normalized.split('+').filter(|token| !token.is_empty()) {
            let (exponent, coefficient) = parse_term(token)?;
            terms.insert(exponent, coefficient);
        }

        Ok(Polynomial::from_exponent_map(terms))
    }
}

fn parse_term(token: &str) -> Result<(u32, f64), PolynomialError> {
    let (coefficient, exponent) = match token.split_once('x') {
        Some((coefficient, exponent)) => (coefficient, Some(exponent)),
        None => (token, None),
    };

    let coefficient = coefficient
        .parse::<f64>()
        .map_err(|source| PolynomialError::ParseCoefficient {
            token: token.to_string(),
            source,
        })?;

    let exponent = match exponent {
        Some(exponent) => exponent
            .parse::<u32>()
            .map_err(|source| PolynomialError::ParseExponent {
                token: token.to_string(),
                source,
            })?,
        None => 0,
    };

    Ok((exponent, coefficient))
}

impl FromStr for Polynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Polynomial::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn poly(coefficients: &[f64], exponents: &[u32]) -> Polynomial {
        Polynomial::from_terms(coefficients, exponents).unwrap()
    }

    #[test]
    fn test_display_ascending_order() {
        let p = Polynomial::from_exponent_map([(4, 3.0), (0, 2.0), (2, -5.0)]);
        assert_eq!(p.to_string(), "2-5x2+3x4");
    }

    #[test]
    fn test_display_zero_polynomial() {
        assert_eq!(Polynomial::zero().to_string(), "");
    }

    #[test]
    fn test_display_linear_term() {
        assert_eq!(poly(&[4.0, 3.0], &[0, 1]).to_string(), "4+3x");
        assert_eq!(poly(&[-2.0], &[1]).to_string(), "-2x");
    }

    #[test]
    fn test_display_elides_unit_coefficient() {
        assert_eq!(poly(&[1.0], &[5]).to_string(), "x5");
        assert_eq!(poly(&[2.0, 1.0], &[0, 1]).to_string(), "2+x");
        // a constant 1 leaves only its sign, which is then stripped
        assert_eq!(poly(&[1.0], &[0]).to_string(), "");
        assert_eq!(poly(&[1.0, 3.0], &[0, 2]).to_string(), "+3x2");
    }

    #[test]
    fn test_display_keeps_negative_unit_coefficient() {
        assert_eq!(poly(&[-1.0], &[3]).to_string(), "-1x3");
    }

    #[test]
    fn test_display_fractional_and_zero_coefficients() {
        assert_eq!(poly(&[0.5, -0.25], &[0, 2]).to_string(), "0.5-0.25x2");
        assert_eq!(poly(&[6.0, 0.0, 5.0], &[0, 1, 3]).to_string(), "6+0x+5x3");
    }

    #[test]
    fn test_parse() {
        let p = Polynomial::parse("3x4+2+-5x2").unwrap();
        assert_eq!(
            p.to_exponent_map(),
            HashMap::from([(4, 3.0), (0, 2.0), (2, -5.0)])
        );
        assert_eq!(p.to_string(), "2-5x2+3x4");
    }

    #[test]
    fn test_parse_leading_negative_term() {
        let p: Polynomial = "-5x2+3".parse().unwrap();
        assert_eq!(p.to_exponent_map(), HashMap::from([(2, -5.0), (0, 3.0)]));
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert!(Polynomial::parse("").unwrap().is_zero());
        assert!(Polynomial::parse("  ").unwrap().is_zero());
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let p = Polynomial::parse(" 2+3x2\n").unwrap();
        assert_eq!(p.exponents(), vec![0, 2]);
    }

    #[test]
    fn test_parse_duplicate_exponent_last_wins() {
        let p = Polynomial::parse("2+3x1+7").unwrap();
        assert_eq!(p.coefficient(0), Some(7.0));
        assert_eq!(p.coefficient(1), Some(3.0));
    }

    #[test]
    fn test_parse_keeps_zero_coefficients() {
        let p = Polynomial::parse("0x3+1").unwrap();
        assert_eq!(p.coefficient(3), Some(0.0));
    }

    #[test]
    fn test_parse_malformed_coefficient() {
        let err = Polynomial::parse("2+abcx3").unwrap_err();
        assert!(matches!(
            err,
            PolynomialError::ParseCoefficient { ref token, .. } if token == "abcx3"
        ));
    }

    #[test]
    fn test_parse_malformed_exponent() {
        assert!(matches!(
            Polynomial::parse("3x2.5"),
            Err(PolynomialError::ParseExponent { .. })
        ));
        assert!(matches!(
            Polynomial::parse("3x2x"),
            Err(PolynomialError::ParseExponent { .. })
        ));
    }

    #[test]
    fn test_round_trip_gap_unit_coefficient() {
        let p = poly(&[1.0], &[5]);
        let rendered = p.to_string();
        assert_eq!(rendered, "x5");
        assert!(matches!(
            Polynomial::parse(&rendered),
            Err(PolynomialError::ParseCoefficient { .. })
        ));
    }

    #[test]
    fn test_round_trip_gap_linear_term() {
        let rendered = poly(&[3.0], &[1]).to_string();
        assert_eq!(rendered, "3x");
        assert!(matches!(
            Polynomial::parse(&rendered),
            Err(PolynomialError::ParseExponent { .. })
        ));
    }

    #[test]
    fn test_round_trip_gap_unit_constant() {
        // the constant 1 is elided entirely and silently lost
        let p = poly(&[1.0, 3.0], &[0, 2]);
        let reparsed = Polynomial::parse(&p.to_string()).unwrap();
        assert_eq!(reparsed.exponents(), vec![2]);
        assert_ne!(reparsed, p);
    }

    fn arb_round_trippable() -> impl Strategy<Value = Polynomial> {
        // no unit coefficients and no linear terms: nothing gets elided
        prop::collection::btree_map(
            (0u32..50).prop_filter("no linear term", |e| *e != 1),
            prop_oneof![-1e6f64..-1e-6, 1e-6f64..1e6].prop_filter("no unit", |c| *c != 1.0),
            0..8,
        )
        .prop_map(Polynomial::from_exponent_map)
    }

    proptest! {
        #[test]
        fn parse_inverts_display_without_elisions(p in arb_round_trippable()) {
            let reparsed = Polynomial::parse(&p.to_string()).unwrap();
            prop_assert_eq!(reparsed, p);
        }
    }
}
