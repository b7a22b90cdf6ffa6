/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Structure file input
//!
//! Reads Crystallographic Information Files into a [`Structure`]: the cell
//! parameters, the atom-site loop and the symmetry operations that generate
//! the full unit cell from the asymmetric unit.

pub mod builder;
pub mod cif;
pub mod config;
pub mod errors;
pub mod symmetry;

pub use builder::{build_structure, element_from_label, AsymmetricSite};
pub use cif::{parse_blocks, CifBlock, CifLoop};
pub use config::ReaderConfig;
pub use errors::{InputError, Result};
pub use symmetry::SymmetryOperation;

use crate::atoms::Structure;
use log::info;
use std::fs;
use std::path::Path;

/// Read a CIF file from disk
pub fn read_cif<P: AsRef<Path>>(path: P, config: &ReaderConfig) -> Result<Structure> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let structure = parse_cif_str(&text, config)?;
    info!(
        "Read {} ({} atoms, {}) from {}",
        structure.formula(),
        structure.site_count(),
        structure.lattice(),
        path.display()
    );
    Ok(structure)
}

/// Parse CIF text held in memory
pub fn parse_cif_str(text: &str, config: &ReaderConfig) -> Result<Structure> {
    let blocks = parse_blocks(text)?;

    let block = match &config.data_block {
        Some(name) => blocks
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| InputError::InvalidFormat(format!("no data block named '{name}'")))?,
        None => blocks
            .first()
            .ok_or_else(|| InputError::InvalidFormat("no data_ block found".to_string()))?,
    };

    build_structure(block, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BLOCKS: &str = "data_first
_cell_length_a 3.0
_cell_length_b 3.0
_cell_length_c 3.0
_cell_angle_alpha 90
_cell_angle_beta 90
_cell_angle_gamma 90
loop_
_atom_site_label
_atom_site_fract_x
_atom_site_fract_y
_atom_site_fract_z
Cu1 0 0 0
data_second
_cell_length_a 4.0
_cell_length_b 4.0
_cell_length_c 4.0
_cell_angle_alpha 90
_cell_angle_beta 90
_cell_angle_gamma 90
loop_
_atom_site_label
_atom_site_fract_x
_atom_site_fract_y
_atom_site_fract_z
Fe1 0 0 0
Fe2 0.5 0.5 0.5
";

    #[test]
    fn test_first_block_by_default() {
        let structure = parse_cif_str(TWO_BLOCKS, &ReaderConfig::default()).unwrap();
        assert_eq!(structure.title(), "first");
        assert_eq!(structure.site_count(), 1);
    }

    #[test]
    fn test_select_block_by_name() {
        let config = ReaderConfig {
            data_block: Some("SECOND".to_string()),
            ..ReaderConfig::default()
        };
        let structure = parse_cif_str(TWO_BLOCKS, &config).unwrap();
        assert_eq!(structure.title(), "second");
        assert_eq!(structure.site_count(), 2);
    }

    #[test]
    fn test_missing_block() {
        let config = ReaderConfig {
            data_block: Some("third".to_string()),
            ..ReaderConfig::default()
        };
        assert!(matches!(
            parse_cif_str(TWO_BLOCKS, &config),
            Err(InputError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_cif_str("# nothing here\n", &ReaderConfig::default()),
            Err(InputError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = read_cif("/definitely/not/here.cif", &ReaderConfig::default()).unwrap_err();
        assert!(matches!(err, InputError::IoError(_)));
    }
}
