/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the conversion pipeline

use crate::atoms::AtomError;
use crate::input::InputError;
use crate::output::OutputError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while running a conversion
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Cannot create output directory {}: {source}", .path.display())]
    OutputDirectory { path: PathBuf, source: io::Error },

    #[error("Invalid output prefix '{0}'")]
    InvalidPrefix(String),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Atoms(#[from] AtomError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
