/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Structure output
//!
//! Emitters for the LAMMPS data, XYZ and PDB formats, the LAMMPS input
//! script template and the ZIP archiver used to bundle the results.

pub mod archive;
pub mod errors;
pub mod lammps;
pub mod pdb;
pub mod script;
pub mod xyz;

pub use archive::create_archive;
pub use errors::{OutputError, Result};
pub use lammps::{LammpsBox, LammpsData};

use log::debug;
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Kinds of file produced by a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    LammpsData,
    Xyz,
    Pdb,
    LammpsScript,
    Zip,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::LammpsData => write!(f, "LAMMPS data"),
            Format::Xyz => write!(f, "XYZ"),
            Format::Pdb => write!(f, "PDB"),
            Format::LammpsScript => write!(f, "LAMMPS input"),
            Format::Zip => write!(f, "ZIP archive"),
        }
    }
}

/// Create `path` and hand a buffered writer to `emit`
///
/// The buffer is flushed before the file is closed so write errors surface
/// here rather than on drop.
pub fn write_file<P, F>(path: P, emit: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    emit(&mut writer)?;
    writer.flush()?;
    debug!("Wrote {}", path.display());
    Ok(())
}
