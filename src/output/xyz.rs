/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! XYZ file writer

use super::errors::Result;
use crate::atoms::Structure;
use std::io::Write;

/// Write `structure` in XYZ format
///
/// Line 1 holds the atom count, line 2 the comment (newlines folded into
/// spaces), then one `symbol x y z` line per atom with six decimals.
pub fn write<W: Write>(mut writer: W, structure: &Structure, comment: &str) -> Result<()> {
    writeln!(writer, "{}", structure.site_count())?;
    writeln!(writer, "{}", comment.replace(['\r', '\n'], " "))?;
    for site in structure.sites() {
        let p = site.position();
        writeln!(writer, "{} {:.6} {:.6} {:.6}", site.symbol(), p.x, p.y, p.z)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::{Lattice, Site, Vector3D};

    #[test]
    fn test_write_xyz() {
        let lattice = Lattice::from_parameters(5.0, 5.0, 5.0, 90.0, 90.0, 90.0).unwrap();
        let sites = vec![
            Site::new("Ti", Vector3D::new(0.0, 0.0, 0.0)).unwrap(),
            Site::new("F", Vector3D::new(1.25, -0.5, 2.0)).unwrap(),
        ];
        let structure = Structure::with_sites("s", lattice, sites);

        let mut buffer = Vec::new();
        write(&mut buffer, &structure, "two\natoms").unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(
            text,
            "2\ntwo atoms\nTi 0.000000 0.000000 0.000000\nF 1.250000 -0.500000 2.000000\n"
        );
    }
}
