/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atomic structure module
//!
//! Element data, lattices, sites and periodic structures, plus supercell
//! construction.

pub mod database;
pub mod errors;
pub mod lattice;
pub mod site;
pub mod structure;
pub mod supercell;
pub mod vector;

pub use database::ElementData;
pub use errors::{AtomError, Result};
pub use lattice::Lattice;
pub use site::Site;
pub use structure::Structure;
pub use supercell::make_supercell;
pub use vector::Vector3D;
