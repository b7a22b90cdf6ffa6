/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atomic site representation

use super::database::{self, ElementData};
use super::errors::{AtomError, Result};
use super::vector::Vector3D;
use serde::Serialize;
use std::fmt;

/// An atom placed at a Cartesian position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    /// Element symbol in title case
    symbol: String,
    /// Label from the source file, e.g. `Ti1`
    label: String,
    /// Cartesian position in Å
    position: Vector3D,
    #[serde(skip)]
    element: &'static ElementData,
}

impl Site {
    /// Create a site, resolving the element against the database
    pub fn new(symbol: &str, position: Vector3D) -> Result<Self> {
        let element = database::element(symbol)
            .ok_or_else(|| AtomError::UnknownElement(symbol.to_string()))?;

        Ok(Self {
            symbol: element.symbol.to_string(),
            label: element.symbol.to_string(),
            position,
            element,
        })
    }

    /// Create a site that keeps its label from the source file
    pub fn with_label(symbol: &str, label: &str, position: Vector3D) -> Result<Self> {
        let mut site = Self::new(symbol, position)?;
        site.label = label.to_string();
        Ok(site)
    }

    /// Element symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Source label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Cartesian position
    pub fn position(&self) -> &Vector3D {
        &self.position
    }

    /// Element properties
    pub fn element(&self) -> &'static ElementData {
        self.element
    }

    /// Copy of this site moved by `translation`
    pub fn translated(&self, translation: Vector3D) -> Self {
        let mut site = self.clone();
        site.position += translation;
        site
    }

    /// Distance to another site
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.position.distance(&other.position)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) at {}", self.label, self.symbol, self.position)
    }
}
