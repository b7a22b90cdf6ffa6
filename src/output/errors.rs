/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the output writers

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing output files
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Archive error: {0}")]
    ArchiveError(#[from] zip::result::ZipError),

    #[error("Cannot archive missing file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Cannot map lattice onto a LAMMPS box: {0}")]
    InvalidBox(String),

    #[error("Invalid structure for output: {0}")]
    InvalidStructure(String),
}

/// Result type for output operations
pub type Result<T> = std::result::Result<T, OutputError>;
