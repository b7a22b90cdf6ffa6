/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for CIF input parsing

use crate::atoms::AtomError;
use std::io;
use thiserror::Error;

/// Errors that can occur while reading a structure file
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Missing required CIF item: {0}")]
    MissingTag(String),

    #[error("Invalid value for {tag}: '{value}'")]
    InvalidValue { tag: String, value: String },

    #[error("Invalid symmetry operation '{0}'")]
    InvalidSymmetry(String),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("Invalid atomic structure: {0}")]
    InvalidStructure(#[from] AtomError),
}

impl InputError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
