/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Crystallographic symmetry operations in `x,y,z` notation

use super::errors::{InputError, Result};
use std::fmt;
use std::str::FromStr;

/// Affine map acting on fractional coordinates: `f' = R f + t`
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetryOperation {
    rotation: [[f64; 3]; 3],
    translation: [f64; 3],
}

impl SymmetryOperation {
    /// The identity operation `x,y,z`
    pub fn identity() -> Self {
        Self {
            rotation: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            translation: [0.0; 3],
        }
    }

    /// Rotation part
    pub fn rotation(&self) -> &[[f64; 3]; 3] {
        &self.rotation
    }

    /// Translation part
    pub fn translation(&self) -> &[f64; 3] {
        &self.translation
    }

    /// Apply the operation to fractional coordinates
    pub fn apply(&self, frac: [f64; 3]) -> [f64; 3] {
        let mut out = self.translation;
        for (value, row) in out.iter_mut().zip(&self.rotation) {
            *value += row[0] * frac[0] + row[1] * frac[1] + row[2] * frac[2];
        }
        out
    }
}

impl FromStr for SymmetryOperation {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self> {
        let components: Vec<&str> = s.split(',').collect();
        if components.len() != 3 {
            return Err(InputError::InvalidSymmetry(s.to_string()));
        }

        let mut rotation = [[0.0; 3]; 3];
        let mut translation = [0.0; 3];
        for (axis, component) in components.iter().enumerate() {
            let (row, shift) = parse_component(component)
                .ok_or_else(|| InputError::InvalidSymmetry(s.to_string()))?;
            rotation[axis] = row;
            translation[axis] = shift;
        }

        Ok(Self {
            rotation,
            translation,
        })
    }
}

/// Parse one component such as `-x+y+1/2` into its rotation row and shift
fn parse_component(component: &str) -> Option<([f64; 3], f64)> {
    let expr: String = component
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    if expr.is_empty() {
        return None;
    }

    let mut row = [0.0; 3];
    let mut shift = 0.0;

    // split into signed terms, keeping each sign with its term
    let mut terms = Vec::new();
    let mut current = String::new();
    for c in expr.chars() {
        if (c == '+' || c == '-') && !current.is_empty() {
            terms.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    terms.push(current);

    for term in terms {
        let (sign, body) = match term.strip_prefix('-') {
            Some(rest) => (-1.0, rest),
            None => (1.0, term.strip_prefix('+').unwrap_or(&term)),
        };
        if body.is_empty() {
            return None;
        }

        match body.chars().last() {
            Some(var @ ('x' | 'y' | 'z')) => {
                let axis = match var {
                    'x' => 0,
                    'y' => 1,
                    _ => 2,
                };
                let coefficient = &body[..body.len() - 1];
                let coefficient = match coefficient.strip_suffix('*').unwrap_or(coefficient) {
                    "" => 1.0,
                    c => parse_rational(c)?,
                };
                row[axis] += sign * coefficient;
            }
            _ => shift += sign * parse_rational(body)?,
        }
    }

    Some((row, shift))
}

fn parse_rational(text: &str) -> Option<f64> {
    match text.split_once('/') {
        Some((num, den)) => {
            let den: f64 = den.parse().ok()?;
            if den == 0.0 {
                return None;
            }
            Some(num.parse::<f64>().ok()? / den)
        }
        None => text.parse().ok(),
    }
}

impl fmt::Display for SymmetryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = (0..3)
            .map(|axis| {
                let mut part = String::new();
                for (value, var) in self.rotation[axis].iter().zip(['x', 'y', 'z']) {
                    if *value == 0.0 {
                        continue;
                    }
                    if *value < 0.0 {
                        part.push('-');
                    } else if !part.is_empty() {
                        part.push('+');
                    }
                    if value.abs() != 1.0 {
                        part.push_str(&value.abs().to_string());
                    }
                    part.push(var);
                }
                let shift = self.translation[axis];
                if shift != 0.0 {
                    if shift > 0.0 && !part.is_empty() {
                        part.push('+');
                    }
                    part.push_str(&shift.to_string());
                }
                part
            })
            .collect();
        write!(f, "{}", parts.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity() {
        let op: SymmetryOperation = "x,y,z".parse().unwrap();
        assert_eq!(op, SymmetryOperation::identity());
        assert_eq!(op.to_string(), "x,y,z");
    }

    #[test]
    fn test_hexagonal_operation() {
        let op: SymmetryOperation = "-y, x-y, z+1/2".parse().unwrap();
        assert_eq!(op.rotation()[0], [0.0, -1.0, 0.0]);
        assert_eq!(op.rotation()[1], [1.0, -1.0, 0.0]);
        assert_eq!(op.rotation()[2], [0.0, 0.0, 1.0]);
        assert_relative_eq!(op.translation()[2], 0.5);

        let image = op.apply([0.25, 0.5, 0.1]);
        assert_relative_eq!(image[0], -0.5);
        assert_relative_eq!(image[1], -0.25);
        assert_relative_eq!(image[2], 0.6);
    }

    #[test]
    fn test_leading_translation_and_case() {
        let op: SymmetryOperation = "1/2+X, 0.5-Y, -Z".parse().unwrap();
        let image = op.apply([0.1, 0.2, 0.3]);
        assert_relative_eq!(image[0], 0.6);
        assert_relative_eq!(image[1], 0.3);
        assert_relative_eq!(image[2], -0.3);
    }

    #[test]
    fn test_invalid_operations() {
        assert!("x,y".parse::<SymmetryOperation>().is_err());
        assert!("x,y,w".parse::<SymmetryOperation>().is_err());
        assert!("x,y,z+1/0".parse::<SymmetryOperation>().is_err());
        assert!("x,,z".parse::<SymmetryOperation>().is_err());
        assert!("x,y+-,z".parse::<SymmetryOperation>().is_err());
    }
}
