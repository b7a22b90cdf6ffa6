/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Conversion settings

use crate::input::ReaderConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default replication factors along a, b and c
pub const DEFAULT_REPLICATE: [usize; 3] = [6, 6, 1];

/// Default output file stem
pub const DEFAULT_PREFIX: &str = "ti3c2f2_6x6";

/// Settings for one CIF-to-supercell conversion
///
/// Every field has a default, so a JSON file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Replication factors along a, b and c
    pub replicate: [usize; 3],
    /// Stem shared by every output file name
    pub prefix: String,
    /// Directory receiving the output files
    pub output_dir: PathBuf,
    /// Bundle the generated files into a ZIP archive
    pub archive: bool,
    /// CIF reader settings
    pub reader: ReaderConfig,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            replicate: DEFAULT_REPLICATE,
            prefix: DEFAULT_PREFIX.to_string(),
            output_dir: PathBuf::from("."),
            archive: true,
            reader: ReaderConfig::default(),
        }
    }
}

/// File names derived from an output prefix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputPaths {
    pub data: PathBuf,
    pub xyz: PathBuf,
    pub pdb: PathBuf,
    pub script: PathBuf,
    pub archive: PathBuf,
}

impl OutputPaths {
    /// `<prefix>.data`, `<prefix>.xyz`, `<prefix>.pdb`, `in.<prefix>` and
    /// `<prefix>_files.zip` inside `dir`
    pub fn new(dir: &Path, prefix: &str) -> Self {
        Self {
            data: dir.join(format!("{prefix}.data")),
            xyz: dir.join(format!("{prefix}.xyz")),
            pdb: dir.join(format!("{prefix}.pdb")),
            script: dir.join(format!("in.{prefix}")),
            archive: dir.join(format!("{prefix}_files.zip")),
        }
    }

    /// The files that go into the archive, in archive order
    pub fn generated(&self) -> [PathBuf; 4] {
        [
            self.data.clone(),
            self.xyz.clone(),
            self.pdb.clone(),
            self.script.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let config = ConversionConfig::default();
        let paths = OutputPaths::new(&config.output_dir, &config.prefix);
        assert_eq!(paths.data, Path::new("./ti3c2f2_6x6.data"));
        assert_eq!(paths.xyz, Path::new("./ti3c2f2_6x6.xyz"));
        assert_eq!(paths.pdb, Path::new("./ti3c2f2_6x6.pdb"));
        assert_eq!(paths.script, Path::new("./in.ti3c2f2_6x6"));
        assert_eq!(paths.archive, Path::new("./ti3c2f2_6x6_files.zip"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ConversionConfig =
            serde_json::from_str(r#"{ "replicate": [2, 3, 1], "archive": false }"#).unwrap();
        assert_eq!(config.replicate, [2, 3, 1]);
        assert!(!config.archive);
        assert_eq!(config.prefix, DEFAULT_PREFIX);
        assert_eq!(config.reader, ReaderConfig::default());
    }
}
