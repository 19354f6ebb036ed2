// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use polycalc_polynomial::Polynomial;

/// Walk through construction, addition, evaluation, root testing and
/// multiplication with fixed inputs.
pub fn demo_lines() -> Result<Vec<String>> {
    let mut lines = Vec::new();

    let p1 = Polynomial::from_terms(&[6.0, 0.0, 0.0, 5.0], &[0, 1, 2, 3])?;
    let p2 = Polynomial::from_terms(&[0.0, -2.0, 0.0, 0.0, -9.0], &[0, 1, 2, 3, 4])?;

    let s = p1.add(&p2);
    lines.push(format!("s(0.1) = {}", s.evaluate(0.1)));
    if s.has_root(1.0) {
        lines.push("1 is a root of s".to_string());
    } else {
        lines.push("1 is not a root of s".to_string());
    }

    let p6 = Polynomial::from_terms(&[3.0], &[4])?;
    let p7 = Polynomial::from_terms(&[1.0], &[7])?;
    let mult = p6.multiply(&p7)?;
    lines.push(format!("result = {mult}"));

    let mult2 = p1.multiply(&p2)?;
    lines.push(format!("result = {mult2}"));

    let p3 = Polynomial::from_terms(&[1.0, 1.0, 1.0, 1.0], &[0, 1, 2, 3])?;
    let p4 = Polynomial::from_terms(&[10.0, 5.0, 7.0, 25.0], &[0, 1, 7, 31])?;
    let p5 = p3.multiply(&p4)?;
    lines.push(format!("p5 result = {p5}"));

    Ok(lines)
}

pub fn execute() -> Result<()> {
    for line in demo_lines()? {
        println!("{line}");
    }
    Ok(())
}
