/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command Line Interface (CLI) module
//!
//! Argument parsing, merging of the optional JSON configuration file and the
//! mapping of outcomes onto process exit codes: 0 on success and for
//! `--help`/`--version`, 1 for usage errors and failed conversions.

use crate::pipeline::{ConversionConfig, ConversionReport, Converter};
use anyhow::{anyhow, Context};
use clap::Parser;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "cif-supercell",
    about = "Replicate a CIF unit cell and write LAMMPS, XYZ and PDB inputs",
    version,
    author
)]
pub struct Cli {
    /// CIF file holding the unit cell
    #[arg(value_name = "CIF_FILE")]
    pub input: PathBuf,

    /// Replication factors along a, b and c [default: 6 6 1]
    #[arg(
        short = 'n',
        long,
        num_args = 3,
        value_names = ["NA", "NB", "NC"]
    )]
    pub replicate: Option<Vec<usize>>,

    /// Stem of the output file names [default: ti3c2f2_6x6]
    #[arg(short, long, value_name = "NAME")]
    pub prefix: Option<String>,

    /// Directory receiving the output files [default: .]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON file with conversion settings; flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not bundle the outputs into a ZIP archive
    #[arg(long)]
    pub no_archive: bool,

    /// Print the conversion report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Conversion settings after applying the flags on top of the config file
    pub fn conversion_config(&self) -> anyhow::Result<ConversionConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ConversionConfig::default(),
        };

        if let Some(factors) = &self.replicate {
            config.replicate = <[usize; 3]>::try_from(factors.as_slice())
                .map_err(|_| anyhow!("expected three replication factors, got {factors:?}"))?;
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if self.no_archive {
            config.archive = false;
        }

        debug!("Effective configuration: {config:?}");
        Ok(config)
    }
}

/// Load a (possibly partial) `ConversionConfig` from a JSON file
pub fn load_config(path: &Path) -> anyhow::Result<ConversionConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid config file {}", path.display()))
}

/// Run a conversion for parsed arguments
pub fn execute(cli: &Cli) -> anyhow::Result<ConversionReport> {
    let config = cli.conversion_config()?;
    let report = Converter::new(config).run(&cli.input)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("cif-supercell v{}", crate::VERSION);
        println!("-----------------------------------------------------------");
        print!("{report}");
    }
    Ok(report)
}

/// Parse the process arguments, run, and map the outcome to an exit code
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help and version are printed on stdout and are not failures
            let failed = e.use_stderr();
            if let Err(print_error) = e.print() {
                debug!("Could not print usage: {print_error}");
            }
            return if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match execute(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
