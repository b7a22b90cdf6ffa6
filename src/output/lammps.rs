/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! LAMMPS data file writer (`atom_style atomic`)
//!
//! The lattice is mapped onto a restricted triclinic LAMMPS box (a along x,
//! b in the xy plane) and the Cartesian coordinates are rotated with it.
//! Sites are stably sorted by electronegativity before numbering, and atom
//! types are assigned in order of first appearance in that sorted list.

use super::errors::{OutputError, Result};
use crate::atoms::{database, Lattice, Structure, Vector3D};
use log::debug;
use nalgebra::{Matrix3, Vector3};
use std::io::Write;

/// LAMMPS atom style written by this module
pub const ATOM_STYLE: &str = "atomic";

/// Simulation box in LAMMPS' restricted triclinic form
#[derive(Debug, Clone, PartialEq)]
pub struct LammpsBox {
    /// `[lo, hi]` per axis
    pub bounds: [[f64; 2]; 3],
    /// Tilt factors `xy, xz, yz`, absent for orthogonal cells
    pub tilt: Option<[f64; 3]>,
    /// Rotation taking lattice-frame Cartesian coordinates into the box frame
    rotation: Matrix3<f64>,
}

impl LammpsBox {
    /// Map a lattice onto a LAMMPS box with its origin at zero
    pub fn from_lattice(lattice: &Lattice) -> Result<Self> {
        let [a, b, c] = lattice.abc();
        let [va, vb, vc] = [0, 1, 2].map(|axis| lattice.vector(axis));
        let a_hat = va * (1.0 / a);

        let xhi = a;
        let xy = vb.dot(&a_hat);
        let yhi = (b * b - xy * xy).sqrt();
        let xz = vc.dot(&a_hat);
        let yz = (vb.dot(&vc) - xy * xz) / yhi;
        let zhi = (c * c - xz * xz - yz * yz).sqrt();

        if !(yhi.is_finite() && zhi.is_finite()) || yhi <= 0.0 || zhi <= 0.0 {
            return Err(OutputError::InvalidBox(lattice.to_string()));
        }

        let box_matrix = Matrix3::new(xhi, 0.0, 0.0, xy, yhi, 0.0, xz, yz, zhi);
        let inverse = box_matrix
            .try_inverse()
            .ok_or_else(|| OutputError::InvalidBox(lattice.to_string()))?;
        let rotation = inverse * lattice.matrix();

        let tilt = if lattice.is_orthogonal() {
            None
        } else {
            Some([xy, xz, yz])
        };

        Ok(Self {
            bounds: [[0.0, xhi], [0.0, yhi], [0.0, zhi]],
            tilt,
            rotation,
        })
    }

    /// Express a Cartesian position in the box frame
    pub fn transform(&self, position: &Vector3D) -> Vector3D {
        Vector3D::from(self.rotation * Vector3::from(*position))
    }

    fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        for (bound, axis) in self.bounds.iter().zip(["x", "y", "z"]) {
            writeln!(writer, "{:.6} {:.6}  {axis}lo {axis}hi", bound[0], bound[1])?;
        }
        if let Some([xy, xz, yz]) = self.tilt {
            writeln!(writer, "{xy:.6} {xz:.6} {yz:.6}  xy xz yz")?;
        }
        Ok(())
    }
}

/// One atom of the `Atoms` section
#[derive(Debug, Clone, PartialEq)]
pub struct LammpsAtom {
    /// 1-based atom type
    pub type_id: usize,
    /// Position in the box frame
    pub position: Vector3D,
}

/// In-memory LAMMPS data file
#[derive(Debug, Clone)]
pub struct LammpsData {
    /// Text of the header line
    pub header: String,
    /// Simulation box
    pub lammps_box: LammpsBox,
    /// `(symbol, mass)` per atom type; type `i + 1` is entry `i`
    pub masses: Vec<(String, f64)>,
    /// Atoms in id order
    pub atoms: Vec<LammpsAtom>,
}

impl LammpsData {
    /// Convert a structure into LAMMPS data
    pub fn from_structure(structure: &Structure) -> Result<Self> {
        if structure.is_empty() {
            return Err(OutputError::InvalidStructure(
                "cannot write a LAMMPS data file without atoms".to_string(),
            ));
        }

        let sorted = structure.sorted_by_electronegativity();
        let lammps_box = LammpsBox::from_lattice(sorted.lattice())?;

        let masses = sorted
            .species()
            .into_iter()
            .map(|symbol| {
                let mass = database::atomic_weight(symbol).ok_or_else(|| {
                    OutputError::InvalidStructure(format!("no atomic weight for {symbol}"))
                })?;
                Ok((symbol.to_string(), mass))
            })
            .collect::<Result<Vec<(String, f64)>>>()?;

        let atoms = sorted
            .sites()
            .iter()
            .map(|site| {
                let type_id = masses
                    .iter()
                    .position(|(symbol, _)| symbol == site.symbol())
                    .map_or(0, |idx| idx + 1);
                LammpsAtom {
                    type_id,
                    position: lammps_box.transform(site.position()),
                }
            })
            .collect::<Vec<_>>();

        debug!(
            "LAMMPS data: {} atoms, {} types {:?}",
            atoms.len(),
            masses.len(),
            masses.iter().map(|(s, _)| s.as_str()).collect::<Vec<_>>()
        );

        Ok(Self {
            header: format!(
                "LAMMPS data file for {} written by cif-supercell",
                structure.title()
            ),
            lammps_box,
            masses,
            atoms,
        })
    }

    /// Element symbols in type order
    pub fn type_symbols(&self) -> Vec<&str> {
        self.masses.iter().map(|(symbol, _)| symbol.as_str()).collect()
    }

    /// Serialize the data file
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", self.header)?;
        writeln!(writer)?;

        let n_atoms = self.atoms.len();
        let n_types = self.masses.len();
        let width = n_atoms.max(n_types).to_string().len();
        writeln!(writer, "{n_atoms:>width$}  atoms")?;
        writeln!(writer)?;
        writeln!(writer, "{n_types:>width$}  atom types")?;
        writeln!(writer)?;

        self.lammps_box.write(&mut writer)?;
        writeln!(writer)?;

        writeln!(writer, "Masses")?;
        writeln!(writer)?;
        let masses = format_column(&self.masses.iter().map(|(_, m)| *m).collect::<Vec<_>>());
        let rows: Vec<Vec<String>> = masses.into_iter().map(|m| vec![m]).collect();
        write_table(&mut writer, &rows)?;
        writeln!(writer)?;

        writeln!(writer, "Atoms # {ATOM_STYLE}")?;
        writeln!(writer)?;
        let rows: Vec<Vec<String>> = self
            .atoms
            .iter()
            .map(|atom| {
                vec![
                    atom.type_id.to_string(),
                    format!("{:.6}", atom.position.x),
                    format!("{:.6}", atom.position.y),
                    format!("{:.6}", atom.position.z),
                ]
            })
            .collect();
        write_table(&mut writer, &rows)?;

        writer.flush()?;
        Ok(())
    }

    /// Serialize the data file into a string
    pub fn to_data_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| OutputError::InvalidStructure(e.to_string()))
    }
}

/// Write `structure` as a LAMMPS atomic-style data file
pub fn write<W: Write>(writer: W, structure: &Structure) -> Result<()> {
    LammpsData::from_structure(structure)?.write(writer)
}

/// Format floats with the fewest decimals (1 to 6) that keep every value exact
/// at six-decimal precision
fn format_column(values: &[f64]) -> Vec<String> {
    let trailing_zeros = values
        .iter()
        .map(|v| {
            let text = format!("{v:.6}");
            text.bytes().rev().take(5).take_while(|&b| b == b'0').count()
        })
        .min()
        .unwrap_or(0);
    let decimals = 6 - trailing_zeros;
    values.iter().map(|v| format!("{v:.decimals$}")).collect()
}

/// Write rows as a table with a 1-based id column
///
/// The id column is left-justified, every other column right-justified to its
/// widest entry; columns are separated by two spaces.
fn write_table<W: Write>(writer: &mut W, rows: &[Vec<String>]) -> Result<()> {
    let id_width = rows.len().to_string().len();
    let columns = rows.first().map_or(0, Vec::len);
    let widths: Vec<usize> = (0..columns)
        .map(|col| rows.iter().map(|r| r[col].len()).max().unwrap_or(0))
        .collect();

    for (idx, row) in rows.iter().enumerate() {
        let mut line = format!("{:<id_width$}", idx + 1);
        for (cell, width) in row.iter().zip(&widths) {
            line.push_str("  ");
            line.push_str(&format!("{cell:>width$}"));
        }
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Site;
    use approx::assert_relative_eq;

    fn hexagonal_cell() -> Structure {
        let lattice = Lattice::from_parameters(3.0, 3.0, 20.0, 90.0, 90.0, 120.0).unwrap();
        let sites = vec![
            Site::new("F", lattice.to_cartesian([0.0, 0.0, 0.4])).unwrap(),
            Site::new("Ti", lattice.to_cartesian([1.0 / 3.0, 2.0 / 3.0, 0.5])).unwrap(),
            Site::new("C", lattice.to_cartesian([2.0 / 3.0, 1.0 / 3.0, 0.45])).unwrap(),
            Site::new("Ti", lattice.to_cartesian([0.0, 0.0, 0.55])).unwrap(),
        ];
        Structure::with_sites("mxene", lattice, sites)
    }

    #[test]
    fn test_hexagonal_box() {
        let lattice = Lattice::from_parameters(3.0, 3.0, 20.0, 90.0, 90.0, 120.0).unwrap();
        let lammps_box = LammpsBox::from_lattice(&lattice).unwrap();

        assert_relative_eq!(lammps_box.bounds[0][1], 3.0, epsilon = 1e-10);
        let yhi = 3.0 * 3.0f64.sqrt() / 2.0;
        assert_relative_eq!(lammps_box.bounds[1][1], yhi, epsilon = 1e-10);
        assert_relative_eq!(lammps_box.bounds[2][1], 20.0, epsilon = 1e-10);

        let [xy, xz, yz] = lammps_box.tilt.unwrap();
        assert_relative_eq!(xy, -1.5, epsilon = 1e-10);
        assert_relative_eq!(xz, 0.0, epsilon = 1e-10);
        assert_relative_eq!(yz, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_orthogonal_box_has_no_tilt() {
        let lattice = Lattice::from_parameters(4.0, 5.0, 6.0, 90.0, 90.0, 90.0).unwrap();
        let lammps_box = LammpsBox::from_lattice(&lattice).unwrap();
        assert!(lammps_box.tilt.is_none());
        assert_relative_eq!(lammps_box.bounds[1][1], 5.0, epsilon = 1e-10);
    }

    #[test]
    fn test_tilt_threshold_near_right_angles() {
        let skewed = Lattice::from_parameters(4.0, 4.0, 4.0, 90.0, 90.0, 90.0001).unwrap();
        let lammps_box = LammpsBox::from_lattice(&skewed).unwrap();
        assert!(lammps_box.tilt.is_some());

        let structure = Structure::with_sites(
            "skewed",
            skewed,
            vec![Site::new("Ti", Vector3D::new(0.0, 0.0, 0.0)).unwrap()],
        );
        let text = LammpsData::from_structure(&structure)
            .unwrap()
            .to_data_string()
            .unwrap();
        assert!(text.lines().any(|l| l.ends_with("  xy xz yz")));

        let nearly_square = Lattice::from_parameters(4.0, 4.0, 4.0, 90.0, 90.0, 90.000001).unwrap();
        let lammps_box = LammpsBox::from_lattice(&nearly_square).unwrap();
        assert!(lammps_box.tilt.is_none());
    }

    #[test]
    fn test_rotation_maps_lattice_onto_box() {
        let lattice = Lattice::from_parameters(5.0, 6.0, 7.0, 80.0, 95.0, 110.0).unwrap();
        let lammps_box = LammpsBox::from_lattice(&lattice).unwrap();

        let a = lammps_box.transform(&lattice.vector(0));
        assert_relative_eq!(a.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(a.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(a.z, 0.0, epsilon = 1e-9);

        let b = lammps_box.transform(&lattice.vector(1));
        assert_relative_eq!(b.z, 0.0, epsilon = 1e-9);
        assert_relative_eq!(b.length(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_types_follow_electronegativity() {
        let data = LammpsData::from_structure(&hexagonal_cell()).unwrap();
        assert_eq!(data.type_symbols(), vec!["Ti", "C", "F"]);

        let types: Vec<usize> = data.atoms.iter().map(|a| a.type_id).collect();
        assert_eq!(types, vec![1, 1, 2, 3]);
        assert_relative_eq!(data.masses[0].1, 47.867);
    }

    #[test]
    fn test_data_file_layout() {
        let text = LammpsData::from_structure(&hexagonal_cell())
            .unwrap()
            .to_data_string()
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("LAMMPS data file for mxene"));
        assert_eq!(lines[2], "4  atoms");
        assert_eq!(lines[4], "3  atom types");
        assert_eq!(lines[6], "0.000000 3.000000  xlo xhi");
        assert_eq!(lines[7], "0.000000 2.598076  ylo yhi");
        assert_eq!(lines[8], "0.000000 20.000000  zlo zhi");
        assert_eq!(lines[9], "-1.500000 0.000000 0.000000  xy xz yz");
        assert_eq!(lines[11], "Masses");
        assert_eq!(lines[13], "1  47.867");
        assert_eq!(lines[14], "2  12.011");
        assert_eq!(lines[15], "3  18.998");
        assert_eq!(lines[17], "Atoms # atomic");
        assert_eq!(lines.len(), 19 + 4);
        assert!(lines[19].starts_with("1  1  "));
    }

    #[test]
    fn test_format_column() {
        assert_eq!(format_column(&[47.867, 12.011]), vec!["47.867", "12.011"]);
        assert_eq!(format_column(&[1.008, 15.999, 2.5]), vec!["1.008", "15.999", "2.500"]);
        assert_eq!(format_column(&[4.0, 10.0]), vec!["4.0", "10.0"]);
    }

    #[test]
    fn test_table_alignment() {
        let rows: Vec<Vec<String>> = (0..10)
            .map(|i| vec![format!("{}", i % 2 + 1), format!("{:.6}", i as f64 * 1.5)])
            .collect();
        let mut buffer = Vec::new();
        write_table(&mut buffer, &rows).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "1   1   0.000000");
        assert_eq!(lines[9], "10  2  13.500000");
    }

    #[test]
    fn test_empty_structure_is_rejected() {
        let lattice = Lattice::from_parameters(3.0, 3.0, 3.0, 90.0, 90.0, 90.0).unwrap();
        let empty = Structure::new("empty", lattice);
        assert!(matches!(
            LammpsData::from_structure(&empty),
            Err(OutputError::InvalidStructure(_))
        ));
    }
}
