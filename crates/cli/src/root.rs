// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use polycalc_polynomial::Polynomial;

pub fn root_message(polynomial: &Polynomial, x: f64) -> String {
    if polynomial.has_root(x) {
        format!("{x} is a root of {polynomial}")
    } else {
        format!("{x} is not a root of {polynomial}")
    }
}

pub fn execute(polynomial: &Polynomial, x: f64) {
    println!("{}", root_message(polynomial, x));
}
