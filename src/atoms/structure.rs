/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Periodic structure: a lattice plus the sites it contains

use super::errors::{AtomError, Result};
use super::lattice::Lattice;
use super::site::Site;
use serde::Serialize;
use std::cmp::Ordering;

/// A periodic crystal structure
#[derive(Debug, Clone, Serialize)]
pub struct Structure {
    /// Title, taken from the CIF data block name
    title: String,
    /// Periodic cell
    lattice: Lattice,
    /// Sites in Cartesian coordinates
    sites: Vec<Site>,
}

impl Structure {
    /// Create an empty structure in the given lattice
    pub fn new(title: &str, lattice: Lattice) -> Self {
        Self {
            title: title.to_string(),
            lattice,
            sites: Vec::new(),
        }
    }

    /// Create a structure from a list of sites
    pub fn with_sites(title: &str, lattice: Lattice, sites: Vec<Site>) -> Self {
        Self {
            title: title.to_string(),
            lattice,
            sites,
        }
    }

    /// Title of the structure
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Periodic cell
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Add a site and return its index
    pub fn add_site(&mut self, site: Site) -> usize {
        self.sites.push(site);
        self.sites.len() - 1
    }

    /// All sites
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Number of sites
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Whether the structure has no sites
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Fail if the structure has no sites
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(AtomError::InvalidStructure(format!(
                "structure '{}' contains no atoms",
                self.title
            )));
        }
        Ok(())
    }

    /// Distinct element symbols in order of first appearance
    pub fn species(&self) -> Vec<&str> {
        let mut species: Vec<&str> = Vec::new();
        for site in &self.sites {
            if !species.contains(&site.symbol()) {
                species.push(site.symbol());
            }
        }
        species
    }

    /// Element counts in order of first appearance
    pub fn composition(&self) -> Vec<(&str, usize)> {
        self.species()
            .into_iter()
            .map(|symbol| {
                let count = self.sites.iter().filter(|s| s.symbol() == symbol).count();
                (symbol, count)
            })
            .collect()
    }

    /// Chemical formula with elements ordered by electronegativity, e.g. `Ti3C2F2`
    pub fn formula(&self) -> String {
        let mut composition = self.composition();
        composition.sort_by(|a, b| compare_species(a.0, b.0));
        composition
            .into_iter()
            .map(|(symbol, count)| {
                if count == 1 {
                    symbol.to_string()
                } else {
                    format!("{symbol}{count}")
                }
            })
            .collect()
    }

    /// Copy with sites stably sorted by electronegativity
    ///
    /// Elements without an electronegativity sort after all others; ties
    /// between different elements are broken by symbol.
    pub fn sorted_by_electronegativity(&self) -> Self {
        let mut sites = self.sites.clone();
        sites.sort_by(|a, b| compare_species(a.symbol(), b.symbol()));
        Self::with_sites(&self.title, self.lattice.clone(), sites)
    }
}

fn compare_species(a: &str, b: &str) -> Ordering {
    let key = |symbol: &str| {
        super::database::electronegativity(symbol).unwrap_or(f64::INFINITY)
    };
    key(a).total_cmp(&key(b)).then_with(|| a.cmp(b))
}
