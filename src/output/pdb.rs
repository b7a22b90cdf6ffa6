/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! PDB file writer
//!
//! Emits one fixed-column `ATOM` record per site followed by `END`. Every atom
//! sits in residue 1 of chain A with the placeholder residue name `MXN`,
//! occupancy 1.00 and B-factor 0.00. No `CRYST1` record is written.

use super::errors::Result;
use crate::atoms::Structure;
use std::io::Write;

/// Residue name used for every atom
pub const RESIDUE_NAME: &str = "MXN";

const CHAIN_ID: char = 'A';
const RESIDUE_NUMBER: usize = 1;
const OCCUPANCY: f64 = 1.0;
const B_FACTOR: f64 = 0.0;

/// Largest serial number that fits the five-column field
const MAX_SERIAL: usize = 99_999;

/// Write `structure` as PDB `ATOM` records
pub fn write<W: Write>(mut writer: W, structure: &Structure) -> Result<()> {
    for (idx, site) in structure.sites().iter().enumerate() {
        let serial = idx % MAX_SERIAL + 1;
        let record = atom_record(serial, site.symbol(), site.position().to_array());
        writeln!(writer, "{record}")?;
    }
    writeln!(writer, "END")?;
    writer.flush()?;
    Ok(())
}

fn atom_record(serial: usize, symbol: &str, [x, y, z]: [f64; 3]) -> String {
    let residue = format!("{RESIDUE_NAME} {CHAIN_ID}{RESIDUE_NUMBER:>4}");
    let fields = format!("{x:>8.3}{y:>8.3}{z:>8.3}{OCCUPANCY:>6.2}{B_FACTOR:>6.2}");
    format!("ATOM  {serial:>5} {symbol:>2}   {residue}    {fields}          {symbol:>2}")
}
