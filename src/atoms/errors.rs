/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("Unknown element symbol: '{0}'")]
    UnknownElement(String),

    #[error("Invalid lattice: {0}")]
    InvalidLattice(String),

    #[error(
        "Invalid replication factors {0:?}: every factor must be at least 1 \
         and the replicated atom count must fit in usize"
    )]
    InvalidReplication([usize; 3]),

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
