/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! LAMMPS input script template
//!
//! The script is a fixed template: it references the data file and names the
//! trajectory dump, but it carries no interatomic potential. A ReaxFF
//! parameter file has to be supplied before the script can run.

use super::errors::Result;
use std::io::Write;

const TEMPLATE: &str = "\
# LAMMPS input script for a Ti3C2F2 MXene supercell
# NOTE: no interatomic potential is defined. Supply a ReaxFF parameter file
# and uncomment the pair_style / pair_coeff lines below before running.

units           real
atom_style      atomic
boundary        p p p

read_data       {data_file}

# pair_style    reaxff NULL
# pair_coeff    * * ffield.reax Ti C F
# fix           qeq all qeq/reaxff 1 0.0 10.0 1.0e-6 reaxff

neighbor        2.0 bin
neigh_modify    every 10 delay 0 check no

timestep        0.25

velocity        all create 300.0 4928459 rot yes dist gaussian
fix             nvt all nvt temp 300.0 300.0 100.0

thermo          100
thermo_style    custom step temp pe ke etotal press vol
dump            traj all atom 1000 dump.{stem}.lammpstrj

run             10000
";

/// Render the input script for a data file named `data_file`
///
/// `stem` names the trajectory dump (`dump.<stem>.lammpstrj`).
pub fn render(data_file: &str, stem: &str) -> String {
    TEMPLATE
        .replace("{data_file}", data_file)
        .replace("{stem}", stem)
}

/// Write the input script
pub fn write<W: Write>(mut writer: W, data_file: &str, stem: &str) -> Result<()> {
    writer.write_all(render(data_file, stem).as_bytes())?;
    writer.flush()?;
    Ok(())
}
