/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! CIF-to-supercell conversion pipeline
//!
//! Runs the fixed sequence of steps: read the CIF file, replicate the cell,
//! write the LAMMPS data, XYZ and PDB files and the LAMMPS input script, then
//! bundle them into a ZIP archive. Any failure stops the run; files written
//! before the failure are left in place.

pub mod config;
pub mod errors;

pub use config::{ConversionConfig, OutputPaths, DEFAULT_PREFIX, DEFAULT_REPLICATE};
pub use errors::{PipelineError, Result};

use crate::atoms::Structure;
use crate::input::read_cif;
use crate::output::{self, create_archive, lammps, pdb, script, xyz, Format};
use log::info;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A file produced by a conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrittenFile {
    pub format: Format,
    pub path: PathBuf,
}

/// Summary of a finished conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    /// CIF file that was read
    pub input: PathBuf,
    /// Data block name of the structure
    pub title: String,
    /// Reduced formula of the unit cell
    pub formula: String,
    pub unit_cell_atoms: usize,
    pub replicate: [usize; 3],
    pub supercell_atoms: usize,
    /// Element symbols in order of first appearance
    pub species: Vec<String>,
    /// Output files in the order they were written
    pub files: Vec<WrittenFile>,
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [na, nb, nc] = self.replicate;
        writeln!(f, "Input:      {}", self.input.display())?;
        writeln!(f, "Structure:  {} ({})", self.title, self.formula)?;
        writeln!(f, "Unit cell:  {} atoms", self.unit_cell_atoms)?;
        writeln!(
            f,
            "Supercell:  {} atoms ({na}x{nb}x{nc})",
            self.supercell_atoms
        )?;
        writeln!(f, "Species:    {}", self.species.join(", "))?;
        writeln!(f, "Files:")?;
        for file in &self.files {
            writeln!(f, "  {:<14} {}", file.format.to_string(), file.path.display())?;
        }
        Ok(())
    }
}

/// Runs conversions with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Output file names for the current configuration
    pub fn output_paths(&self) -> OutputPaths {
        OutputPaths::new(&self.config.output_dir, &self.config.prefix)
    }

    /// Convert `input` and write every output file
    pub fn run<P: AsRef<Path>>(&self, input: P) -> Result<ConversionReport> {
        let input = input.as_ref();
        if !input.exists() {
            return Err(PipelineError::InputNotFound(input.to_path_buf()));
        }
        self.validate_prefix()?;

        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|source| PipelineError::OutputDirectory {
            path: output_dir.clone(),
            source,
        })?;

        let unit_cell = read_cif(input, &self.config.reader)?;
        let supercell = unit_cell.make_supercell(self.config.replicate)?;
        info!(
            "Built {:?} supercell with {} atoms",
            self.config.replicate,
            supercell.site_count()
        );

        let files = self.write_outputs(&supercell)?;

        Ok(ConversionReport {
            input: input.to_path_buf(),
            title: unit_cell.title().to_string(),
            formula: unit_cell.formula(),
            unit_cell_atoms: unit_cell.site_count(),
            replicate: self.config.replicate,
            supercell_atoms: supercell.site_count(),
            species: unit_cell.species().into_iter().map(str::to_string).collect(),
            files,
        })
    }

    fn write_outputs(&self, supercell: &Structure) -> Result<Vec<WrittenFile>> {
        let prefix = &self.config.prefix;
        let paths = self.output_paths();
        let [na, nb, nc] = self.config.replicate;
        let comment = format!("{} supercell {na}x{nb}x{nc}", supercell.title());
        let data_name = format!("{prefix}.data");

        output::write_file(&paths.data, |w| lammps::write(w, supercell))?;
        output::write_file(&paths.xyz, |w| xyz::write(w, supercell, &comment))?;
        output::write_file(&paths.pdb, |w| pdb::write(w, supercell))?;
        output::write_file(&paths.script, |w| script::write(w, &data_name, prefix))?;

        let mut files = vec![
            WrittenFile {
                format: Format::LammpsData,
                path: paths.data.clone(),
            },
            WrittenFile {
                format: Format::Xyz,
                path: paths.xyz.clone(),
            },
            WrittenFile {
                format: Format::Pdb,
                path: paths.pdb.clone(),
            },
            WrittenFile {
                format: Format::LammpsScript,
                path: paths.script.clone(),
            },
        ];

        if self.config.archive {
            create_archive(&paths.archive, &paths.generated())?;
            info!("Archived outputs to {}", paths.archive.display());
            files.push(WrittenFile {
                format: Format::Zip,
                path: paths.archive,
            });
        }

        Ok(files)
    }

    fn validate_prefix(&self) -> Result<()> {
        let prefix = &self.config.prefix;
        let valid = !prefix.is_empty()
            && prefix != "."
            && prefix != ".."
            && !prefix.contains(['/', '\\']);
        if valid {
            Ok(())
        } else {
            Err(PipelineError::InvalidPrefix(prefix.clone()))
        }
    }
}
