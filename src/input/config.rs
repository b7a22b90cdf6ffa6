/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Configuration for the CIF reader

use serde::{Deserialize, Serialize};

/// CIF reader configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Name of the data block to read (without the `data_` prefix);
    /// the first block is used when unset
    pub data_block: Option<String>,
    /// Fractional distance below which symmetry images of the same site are merged
    pub merge_tolerance: f64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            data_block: None,
            merge_tolerance: 1e-3,
        }
    }
}
