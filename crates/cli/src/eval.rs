// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use polycalc_config::CliConfig;
use polycalc_polynomial::Polynomial;

pub fn evaluation_lines(config: &CliConfig, polynomial: &Polynomial, points: &[f64]) -> Vec<String> {
    points
        .iter()
        .map(|x| format!("p({x}) = {}", config.format_value(polynomial.evaluate(*x))))
        .collect()
}

pub fn execute(config: &CliConfig, polynomial: &Polynomial, points: &[f64]) {
    for line in evaluation_lines(config, polynomial, points) {
        println!("{line}");
    }
}
