/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Periodic lattice representation
//!
//! A lattice is stored as a matrix `M` whose rows are the vectors `a`, `b`,
//! `c`. Fractional coordinates `f` map to Cartesian positions as `Mᵀ f`.

use super::errors::{AtomError, Result};
use super::vector::Vector3D;
use nalgebra::{Matrix3, Vector3};
use serde::Serialize;
use std::fmt;

/// Angular tolerance in degrees when deciding whether a lattice angle is 90°
pub const ORTHOGONAL_ANGLE_TOLERANCE: f64 = 1e-5;

/// Smallest cell volume (Å³) accepted as non-degenerate
const MIN_VOLUME: f64 = 1e-8;

/// Three lattice vectors defining a periodic cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lattice {
    matrix: Matrix3<f64>,
    #[serde(skip)]
    inverse: Matrix3<f64>,
}

impl Lattice {
    /// Create a lattice from a matrix whose rows are `a`, `b` and `c`
    pub fn new(matrix: Matrix3<f64>) -> Result<Self> {
        let volume = matrix.determinant();
        if !volume.is_finite() || volume.abs() < MIN_VOLUME {
            return Err(AtomError::InvalidLattice(format!(
                "lattice vectors are degenerate (volume {volume:e})"
            )));
        }
        let inverse = matrix.try_inverse().ok_or_else(|| {
            AtomError::InvalidLattice("lattice matrix is not invertible".to_string())
        })?;
        Ok(Self { matrix, inverse })
    }

    /// Build a lattice from cell lengths (Å) and angles (degrees)
    ///
    /// Uses the setting where `c` lies along z and `a` in the xz plane:
    /// `a = (a sinβ, 0, a cosβ)`, `b = (-b sinα cosγ*, b sinα sinγ*, b cosα)`,
    /// `c = (0, 0, c)`, with γ* the reciprocal-cell angle.
    pub fn from_parameters(
        a: f64,
        b: f64,
        c: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Result<Self> {
        for (name, length) in [("a", a), ("b", b), ("c", c)] {
            if !(length.is_finite() && length > 0.0) {
                return Err(AtomError::InvalidLattice(format!(
                    "cell length {name} must be positive, got {length}"
                )));
            }
        }
        for (name, angle) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            if !(angle.is_finite() && angle > 0.0 && angle < 180.0) {
                return Err(AtomError::InvalidLattice(format!(
                    "cell angle {name} must lie in (0, 180) degrees, got {angle}"
                )));
            }
        }

        let (sin_alpha, cos_alpha) = alpha.to_radians().sin_cos();
        let (sin_beta, cos_beta) = beta.to_radians().sin_cos();
        let cos_gamma = gamma.to_radians().cos();

        let cos_gamma_star =
            ((cos_alpha * cos_beta - cos_gamma) / (sin_alpha * sin_beta)).clamp(-1.0, 1.0);
        let gamma_star = cos_gamma_star.acos();

        #[rustfmt::skip]
        let matrix = Matrix3::new(
            a * sin_beta, 0.0, a * cos_beta,
            -b * sin_alpha * gamma_star.cos(), b * sin_alpha * gamma_star.sin(), b * cos_alpha,
            0.0, 0.0, c,
        );
        Self::new(matrix)
    }

    /// Lattice matrix, one vector per row
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Lattice vector `axis` (0 = a, 1 = b, 2 = c)
    pub fn vector(&self, axis: usize) -> Vector3D {
        Vector3D::from(self.matrix.row(axis).transpose())
    }

    /// Lengths of the three lattice vectors
    pub fn abc(&self) -> [f64; 3] {
        [0, 1, 2].map(|axis| self.vector(axis).length())
    }

    /// Cell angles (alpha, beta, gamma) in degrees
    pub fn angles(&self) -> [f64; 3] {
        let [a, b, c] = [0, 1, 2].map(|axis| self.vector(axis));
        [angle_between(&b, &c), angle_between(&a, &c), angle_between(&a, &b)]
    }

    /// Cell volume in Å³
    pub fn volume(&self) -> f64 {
        self.matrix.determinant().abs()
    }

    /// Whether all three cell angles are right angles
    pub fn is_orthogonal(&self) -> bool {
        self.angles()
            .iter()
            .all(|angle| (angle - 90.0).abs() < ORTHOGONAL_ANGLE_TOLERANCE)
    }

    /// Convert fractional coordinates to a Cartesian position
    pub fn to_cartesian(&self, frac: [f64; 3]) -> Vector3D {
        Vector3D::from(self.matrix.tr_mul(&Vector3::from(frac)))
    }

    /// Convert a Cartesian position to fractional coordinates
    pub fn to_fractional(&self, position: &Vector3D) -> [f64; 3] {
        let frac = self.inverse.tr_mul(&Vector3::from(*position));
        [frac.x, frac.y, frac.z]
    }

    /// Lattice with each vector multiplied by the matching factor
    pub fn scaled(&self, factors: [usize; 3]) -> Result<Self> {
        let scale = Vector3::from(factors.map(|n| n as f64));
        Self::new(Matrix3::from_diagonal(&scale) * self.matrix)
    }
}

fn angle_between(u: &Vector3D, v: &Vector3D) -> f64 {
    let cos = (u.dot(v) / (u.length() * v.length())).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.abc();
        let [alpha, beta, gamma] = self.angles();
        write!(
            f,
            "a={a:.4} b={b:.4} c={c:.4} alpha={alpha:.2} beta={beta:.2} gamma={gamma:.2}"
        )
    }
}
