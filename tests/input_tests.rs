/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use approx::assert_relative_eq;
use cif_supercell::input::{parse_cif_str, read_cif, InputError, ReaderConfig};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/ti3c2f2.cif");

#[test]
fn test_read_mxene_unit_cell() {
    let structure = read_cif(FIXTURE, &ReaderConfig::default()).unwrap();

    assert_eq!(structure.title(), "Ti3C2F2");
    assert_eq!(structure.site_count(), 7);
    assert_eq!(structure.formula(), "Ti3C2F2");
    assert_eq!(structure.species(), vec!["Ti", "C", "F"]);

    let [a, b, c] = structure.lattice().abc();
    assert_relative_eq!(a, 3.0712, epsilon = 1e-9);
    assert_relative_eq!(b, 3.0712, epsilon = 1e-9);
    assert_relative_eq!(c, 20.0, epsilon = 1e-9);
    let [alpha, beta, gamma] = structure.lattice().angles();
    assert_relative_eq!(alpha, 90.0, epsilon = 1e-6);
    assert_relative_eq!(beta, 90.0, epsilon = 1e-6);
    assert_relative_eq!(gamma, 120.0, epsilon = 1e-6);

    let labels: Vec<&str> = structure.sites().iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["Ti1", "Ti2", "Ti3", "C4", "C5", "F6", "F7"]);
}

#[test]
fn test_cartesian_positions() {
    let structure = read_cif(FIXTURE, &ReaderConfig::default()).unwrap();
    let lattice = structure.lattice();

    let ti1 = structure.sites()[0].position();
    assert_relative_eq!(ti1.z, 10.0, epsilon = 1e-9);

    let frac = lattice.to_fractional(structure.sites()[1].position());
    assert_relative_eq!(frac[0], 0.333333, epsilon = 1e-9);
    assert_relative_eq!(frac[1], 0.666667, epsilon = 1e-9);
    assert_relative_eq!(frac[2], 0.6165, epsilon = 1e-9);
}

#[test]
fn test_symmetry_expansion_of_bcc_iron() {
    let text = "\
data_Fe
_cell_length_a 2.8665
_cell_length_b 2.8665
_cell_length_c 2.8665
_cell_angle_alpha 90
_cell_angle_beta 90
_cell_angle_gamma 90
loop_
_space_group_symop_operation_xyz
'x, y, z'
'-x, -y, -z'
'x+1/2, y+1/2, z+1/2'
'-x+1/2, -y+1/2, -z+1/2'
loop_
_atom_site_label
_atom_site_fract_x
_atom_site_fract_y
_atom_site_fract_z
Fe1 0 0 0
";
    let structure = parse_cif_str(text, &ReaderConfig::default()).unwrap();
    assert_eq!(structure.site_count(), 2);
    assert_eq!(structure.formula(), "Fe2");

    let second = structure.sites()[1].position();
    assert_relative_eq!(second.x, 2.8665 / 2.0, epsilon = 1e-9);
    assert_relative_eq!(second.y, 2.8665 / 2.0, epsilon = 1e-9);
    assert_relative_eq!(second.z, 2.8665 / 2.0, epsilon = 1e-9);
}

#[test]
fn test_missing_cell_tag() {
    let text = "\
data_broken
_cell_length_a 3.0
_cell_length_b 3.0
_cell_angle_alpha 90
_cell_angle_beta 90
_cell_angle_gamma 90
loop_
_atom_site_label
_atom_site_fract_x
_atom_site_fract_y
_atom_site_fract_z
Ti1 0 0 0
";
    match parse_cif_str(text, &ReaderConfig::default()) {
        Err(InputError::MissingTag(tag)) => assert_eq!(tag, "_cell_length_c"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_structure_without_atoms() {
    let text = "\
data_empty
_cell_length_a 3.0
_cell_length_b 3.0
_cell_length_c 3.0
_cell_angle_alpha 90
_cell_angle_beta 90
_cell_angle_gamma 90
";
    assert!(parse_cif_str(text, &ReaderConfig::default()).is_err());
}

#[test]
fn test_missing_file() {
    let result = read_cif("/nonexistent/structure.cif", &ReaderConfig::default());
    assert!(matches!(result, Err(InputError::IoError(_))));
}
