/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Supercell construction by integer replication of the unit cell

use super::errors::{AtomError, Result};
use super::structure::Structure;
use super::vector::Vector3D;
use log::debug;

/// Replicate `structure` `factors[i]` times along lattice vector `i`
///
/// Every site is copied verbatim to each lattice translation
/// `i·a + j·b + k·c` with `0 <= i < na`, `0 <= j < nb`, `0 <= k < nc`.
/// Sites are emitted site-major (all images of site 0 first), translations
/// with `i` outermost and `k` innermost. Coincident images across periodic
/// boundaries are kept.
pub fn make_supercell(structure: &Structure, factors: [usize; 3]) -> Result<Structure> {
    let [na, nb, nc] = factors;
    let site_total = na
        .checked_mul(nb)
        .and_then(|n| n.checked_mul(nc))
        .and_then(|n| n.checked_mul(structure.site_count()))
        .filter(|_| factors.iter().all(|&n| n > 0))
        .ok_or(AtomError::InvalidReplication(factors))?;

    let lattice = structure.lattice();
    let [a, b, c] = [0, 1, 2].map(|axis| lattice.vector(axis));
    let translations = lattice_translations(a, b, c, factors);

    let mut sites = Vec::with_capacity(site_total);
    for site in structure.sites() {
        sites.extend(translations.iter().map(|&t| site.translated(t)));
    }

    let supercell_lattice = lattice.scaled(factors)?;
    debug!(
        "Replicated {} sites {}x{}x{} into {} sites",
        structure.site_count(),
        factors[0],
        factors[1],
        factors[2],
        sites.len()
    );

    Ok(Structure::with_sites(
        structure.title(),
        supercell_lattice,
        sites,
    ))
}

fn lattice_translations(
    a: Vector3D,
    b: Vector3D,
    c: Vector3D,
    [na, nb, nc]: [usize; 3],
) -> Vec<Vector3D> {
    let mut translations = Vec::new();
    for i in 0..na {
        for j in 0..nb {
            for k in 0..nc {
                translations.push(a * i as f64 + b * j as f64 + c * k as f64);
            }
        }
    }
    translations
}

impl Structure {
    /// Convenience wrapper around [`make_supercell`]
    pub fn make_supercell(&self, factors: [usize; 3]) -> Result<Structure> {
        make_supercell(self, factors)
    }
}
