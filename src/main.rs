/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Main executable for cif-supercell

use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    cif_supercell::cli::run()
}
