/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # cif-supercell
//!
//! Builds replicated supercells from Crystallographic Information Files and
//! exports them as simulation inputs: a LAMMPS data file (`atom_style
//! atomic`), XYZ and PDB coordinate files, a LAMMPS input script template and
//! a ZIP archive bundling the four.
//!
//! The default settings convert a Ti3C2F2 MXene unit cell into a 6x6x1
//! supercell:
//!
//! ```no_run
//! use cif_supercell::{ConversionConfig, Converter};
//!
//! let report = Converter::new(ConversionConfig::default()).run("Ti3C2F2.cif")?;
//! println!("{report}");
//! # Ok::<(), cif_supercell::PipelineError>(())
//! ```

pub mod atoms;
pub mod cli;
pub mod input;
pub mod output;
pub mod pipeline;

pub use atoms::{Lattice, Site, Structure, Vector3D};
pub use input::{read_cif, ReaderConfig};
pub use pipeline::{ConversionConfig, ConversionReport, Converter, PipelineError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
