/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! ZIP archive of the generated files

use super::errors::{OutputError, Result};
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Bundle `files` into a deflate-compressed ZIP at `archive_path`
///
/// Entries are stored under their file names. Every entry carries the ZIP
/// epoch as its timestamp so identical inputs give identical archives.
pub fn create_archive<P: AsRef<Path>>(archive_path: P, files: &[PathBuf]) -> Result<()> {
    if let Some(missing) = files.iter().find(|f| !f.is_file()) {
        return Err(OutputError::MissingFile(missing.clone()));
    }

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let archive_file = File::create(archive_path.as_ref())?;
    let mut zip = ZipWriter::new(BufWriter::new(archive_file));

    for path in files {
        let name = entry_name(path)?;
        debug!("Adding {} to archive as {name}", path.display());
        zip.start_file(name, options)?;
        let mut source = File::open(path)?;
        io::copy(&mut source, &mut zip)?;
    }

    zip.finish()?;
    Ok(())
}

fn entry_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| OutputError::MissingFile(path.to_path_buf()))
}
