/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Build a [`Structure`] from a parsed CIF data block

use super::cif::{parse_number, CifBlock};
use super::config::ReaderConfig;
use super::errors::{InputError, Result};
use super::symmetry::SymmetryOperation;
use crate::atoms::{database, Lattice, Site, Structure};
use log::{debug, warn};

const CELL_TAGS: [&str; 6] = [
    "_cell_length_a",
    "_cell_length_b",
    "_cell_length_c",
    "_cell_angle_alpha",
    "_cell_angle_beta",
    "_cell_angle_gamma",
];

const SYMOP_TAGS: [&str; 2] = [
    "_symmetry_equiv_pos_as_xyz",
    "_space_group_symop_operation_xyz",
];

const FRACT_TAGS: [&str; 3] = [
    "_atom_site_fract_x",
    "_atom_site_fract_y",
    "_atom_site_fract_z",
];

/// An asymmetric-unit site as listed in the atom-site loop
#[derive(Debug, Clone, PartialEq)]
pub struct AsymmetricSite {
    /// Site label, e.g. `Ti1`
    pub label: String,
    /// Element symbol in title case
    pub symbol: String,
    /// Fractional coordinates
    pub frac: [f64; 3],
}

/// Build the full unit cell described by `block`
pub fn build_structure(block: &CifBlock, config: &ReaderConfig) -> Result<Structure> {
    let lattice = read_lattice(block)?;
    let operations = read_symmetry_operations(block)?;
    let asymmetric = read_asymmetric_sites(block)?;
    debug!(
        "Block '{}': {} asymmetric sites, {} symmetry operations, lattice {}",
        block.name,
        asymmetric.len(),
        operations.len(),
        lattice
    );

    let mut structure = Structure::new(&block.name, lattice);
    for site in &asymmetric {
        let images = expand_site(site, &operations, config.merge_tolerance);
        for frac in images {
            let position = structure.lattice().to_cartesian(frac);
            structure.add_site(Site::with_label(&site.symbol, &site.label, position)?);
        }
    }

    structure.ensure_not_empty()?;
    Ok(structure)
}

/// Read the six cell parameters and build the lattice
pub fn read_lattice(block: &CifBlock) -> Result<Lattice> {
    let mut params = [0.0; 6];
    for (param, tag) in params.iter_mut().zip(CELL_TAGS) {
        let value = block
            .item(tag)
            .ok_or_else(|| InputError::MissingTag(tag.to_string()))?;
        *param = parse_number(value).ok_or_else(|| InputError::InvalidValue {
            tag: tag.to_string(),
            value: value.to_string(),
        })?;
    }
    let [a, b, c, alpha, beta, gamma] = params;
    Ok(Lattice::from_parameters(a, b, c, alpha, beta, gamma)?)
}

/// Read the symmetry operations, defaulting to the identity (P1)
pub fn read_symmetry_operations(block: &CifBlock) -> Result<Vec<SymmetryOperation>> {
    let Some(cif_loop) = block.find_loop(&SYMOP_TAGS) else {
        // a single operation may also be given as a plain item
        return match SYMOP_TAGS.iter().find_map(|tag| block.item(tag)) {
            Some(op) => Ok(vec![op.parse()?]),
            None => Ok(vec![SymmetryOperation::identity()]),
        };
    };

    let column = SYMOP_TAGS
        .iter()
        .find_map(|tag| cif_loop.column(tag))
        .ok_or_else(|| InputError::MissingTag(SYMOP_TAGS[0].to_string()))?;

    let operations = cif_loop
        .rows
        .iter()
        .map(|row| row[column].parse())
        .collect::<Result<Vec<SymmetryOperation>>>()?;

    if operations.is_empty() {
        return Ok(vec![SymmetryOperation::identity()]);
    }
    Ok(operations)
}

/// Read the atom-site loop
pub fn read_asymmetric_sites(block: &CifBlock) -> Result<Vec<AsymmetricSite>> {
    let cif_loop = block
        .find_loop(&FRACT_TAGS)
        .ok_or_else(|| InputError::MissingTag(FRACT_TAGS[0].to_string()))?;

    let mut fract_columns = [0usize; 3];
    for (column, tag) in fract_columns.iter_mut().zip(FRACT_TAGS) {
        *column = cif_loop
            .column(tag)
            .ok_or_else(|| InputError::MissingTag(tag.to_string()))?;
    }
    let label_column = cif_loop.column("_atom_site_label");
    let symbol_column = cif_loop.column("_atom_site_type_symbol");
    if label_column.is_none() && symbol_column.is_none() {
        return Err(InputError::MissingTag("_atom_site_type_symbol".to_string()));
    }
    let occupancy_column = cif_loop.column("_atom_site_occupancy");

    let mut sites = Vec::with_capacity(cif_loop.rows.len());
    for row in &cif_loop.rows {
        let mut frac = [0.0; 3];
        for ((value, &column), tag) in frac.iter_mut().zip(&fract_columns).zip(FRACT_TAGS) {
            *value = parse_number(&row[column]).ok_or_else(|| InputError::InvalidValue {
                tag: tag.to_string(),
                value: row[column].clone(),
            })?;
        }

        let label = label_column.map(|c| row[c].clone());
        let raw_symbol = symbol_column
            .map(|c| row[c].as_str())
            .or(label.as_deref())
            .unwrap_or_default();
        let symbol = element_from_label(raw_symbol)
            .ok_or_else(|| crate::atoms::AtomError::UnknownElement(raw_symbol.to_string()))?;
        let label = label.unwrap_or_else(|| symbol.clone());

        if let Some(occupancy) = occupancy_column.and_then(|c| parse_number(&row[c])) {
            if occupancy < 1.0 - 1e-6 {
                warn!("Site {label} has partial occupancy {occupancy}; treated as fully occupied");
            }
        }

        sites.push(AsymmetricSite {
            label,
            symbol,
            frac,
        });
    }

    Ok(sites)
}

/// Extract an element symbol from a CIF type symbol or label
///
/// Handles oxidation-state decorations (`Ti4+`) and numbered labels (`Ti1`,
/// `F2a`). A two-letter prefix wins over a one-letter one when both are
/// valid elements.
pub fn element_from_label(label: &str) -> Option<String> {
    let letters: String = label
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .take(2)
        .collect();

    if letters.len() == 2 {
        if let Some(element) = database::element(&letters) {
            return Some(element.symbol.to_string());
        }
    }
    letters
        .get(..1)
        .and_then(database::element)
        .map(|element| element.symbol.to_string())
}

/// Apply every operation to `site`, wrap into [0, 1) and drop duplicate images
pub fn expand_site(
    site: &AsymmetricSite,
    operations: &[SymmetryOperation],
    tolerance: f64,
) -> Vec<[f64; 3]> {
    let mut images: Vec<[f64; 3]> = Vec::with_capacity(operations.len());
    for op in operations {
        let image = op.apply(site.frac).map(wrap_unit);
        let duplicate = images.iter().any(|existing| {
            existing.iter().zip(&image).all(|(a, b)| {
                let d = (a - b).abs();
                d < tolerance || 1.0 - d < tolerance
            })
        });
        if !duplicate {
            images.push(image);
        }
    }
    images
}

fn wrap_unit(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    if wrapped >= 1.0 - 1e-12 {
        0.0
    } else {
        wrapped
    }
}
