/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Element database
//!
//! Symbols, standard atomic weights (IUPAC 2013) and Pauling electronegativities
//! for elements H through Og. The electronegativity drives the species ordering
//! of LAMMPS data files, the weights fill their `Masses` section.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Static properties of a chemical element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementData {
    /// Atomic number (Z)
    pub atomic_number: u32,
    /// Element symbol in title case
    pub symbol: &'static str,
    /// Standard atomic weight in amu
    pub atomic_weight: f64,
    /// Pauling electronegativity, absent for most noble gases and superheavy elements
    pub electronegativity: Option<f64>,
}

impl ElementData {
    const fn new(
        atomic_number: u32,
        symbol: &'static str,
        atomic_weight: f64,
        electronegativity: Option<f64>,
    ) -> Self {
        Self {
            atomic_number,
            symbol,
            atomic_weight,
            electronegativity,
        }
    }
}

#[rustfmt::skip]
static ELEMENTS: [ElementData; 118] = [
    ElementData::new(1, "H", 1.008, Some(2.20)),
    ElementData::new(2, "He", 4.0026, None),
    ElementData::new(3, "Li", 6.94, Some(0.98)),
    ElementData::new(4, "Be", 9.0122, Some(1.57)),
    ElementData::new(5, "B", 10.81, Some(2.04)),
    ElementData::new(6, "C", 12.011, Some(2.55)),
    ElementData::new(7, "N", 14.007, Some(3.04)),
    ElementData::new(8, "O", 15.999, Some(3.44)),
    ElementData::new(9, "F", 18.998, Some(3.98)),
    ElementData::new(10, "Ne", 20.180, None),
    ElementData::new(11, "Na", 22.990, Some(0.93)),
    ElementData::new(12, "Mg", 24.305, Some(1.31)),
    ElementData::new(13, "Al", 26.982, Some(1.61)),
    ElementData::new(14, "Si", 28.085, Some(1.90)),
    ElementData::new(15, "P", 30.974, Some(2.19)),
    ElementData::new(16, "S", 32.06, Some(2.58)),
    ElementData::new(17, "Cl", 35.45, Some(3.16)),
    ElementData::new(18, "Ar", 39.95, None),
    ElementData::new(19, "K", 39.098, Some(0.82)),
    ElementData::new(20, "Ca", 40.078, Some(1.00)),
    ElementData::new(21, "Sc", 44.956, Some(1.36)),
    ElementData::new(22, "Ti", 47.867, Some(1.54)),
    ElementData::new(23, "V", 50.942, Some(1.63)),
    ElementData::new(24, "Cr", 51.996, Some(1.66)),
    ElementData::new(25, "Mn", 54.938, Some(1.55)),
    ElementData::new(26, "Fe", 55.845, Some(1.83)),
    ElementData::new(27, "Co", 58.933, Some(1.88)),
    ElementData::new(28, "Ni", 58.693, Some(1.91)),
    ElementData::new(29, "Cu", 63.546, Some(1.90)),
    ElementData::new(30, "Zn", 65.38, Some(1.65)),
    ElementData::new(31, "Ga", 69.723, Some(1.81)),
    ElementData::new(32, "Ge", 72.630, Some(2.01)),
    ElementData::new(33, "As", 74.922, Some(2.18)),
    ElementData::new(34, "Se", 78.971, Some(2.55)),
    ElementData::new(35, "Br", 79.904, Some(2.96)),
    ElementData::new(36, "Kr", 83.798, Some(3.00)),
    ElementData::new(37, "Rb", 85.468, Some(0.82)),
    ElementData::new(38, "Sr", 87.62, Some(0.95)),
    ElementData::new(39, "Y", 88.906, Some(1.22)),
    ElementData::new(40, "Zr", 91.224, Some(1.33)),
    ElementData::new(41, "Nb", 92.906, Some(1.6)),
    ElementData::new(42, "Mo", 95.95, Some(2.16)),
    ElementData::new(43, "Tc", 98.0, Some(1.9)),
    ElementData::new(44, "Ru", 101.07, Some(2.2)),
    ElementData::new(45, "Rh", 102.91, Some(2.28)),
    ElementData::new(46, "Pd", 106.42, Some(2.20)),
    ElementData::new(47, "Ag", 107.87, Some(1.93)),
    ElementData::new(48, "Cd", 112.41, Some(1.69)),
    ElementData::new(49, "In", 114.82, Some(1.78)),
    ElementData::new(50, "Sn", 118.71, Some(1.96)),
    ElementData::new(51, "Sb", 121.76, Some(2.05)),
    ElementData::new(52, "Te", 127.60, Some(2.1)),
    ElementData::new(53, "I", 126.90, Some(2.66)),
    ElementData::new(54, "Xe", 131.29, Some(2.60)),
    ElementData::new(55, "Cs", 132.91, Some(0.79)),
    ElementData::new(56, "Ba", 137.33, Some(0.89)),
    ElementData::new(57, "La", 138.91, Some(1.10)),
    ElementData::new(58, "Ce", 140.12, Some(1.12)),
    ElementData::new(59, "Pr", 140.91, Some(1.13)),
    ElementData::new(60, "Nd", 144.24, Some(1.14)),
    ElementData::new(61, "Pm", 145.0, Some(1.13)),
    ElementData::new(62, "Sm", 150.36, Some(1.17)),
    ElementData::new(63, "Eu", 151.96, Some(1.2)),
    ElementData::new(64, "Gd", 157.25, Some(1.2)),
    ElementData::new(65, "Tb", 158.93, Some(1.1)),
    ElementData::new(66, "Dy", 162.50, Some(1.22)),
    ElementData::new(67, "Ho", 164.93, Some(1.23)),
    ElementData::new(68, "Er", 167.26, Some(1.24)),
    ElementData::new(69, "Tm", 168.93, Some(1.25)),
    ElementData::new(70, "Yb", 173.05, Some(1.1)),
    ElementData::new(71, "Lu", 174.97, Some(1.27)),
    ElementData::new(72, "Hf", 178.49, Some(1.3)),
    ElementData::new(73, "Ta", 180.95, Some(1.5)),
    ElementData::new(74, "W", 183.84, Some(2.36)),
    ElementData::new(75, "Re", 186.21, Some(1.9)),
    ElementData::new(76, "Os", 190.23, Some(2.2)),
    ElementData::new(77, "Ir", 192.22, Some(2.20)),
    ElementData::new(78, "Pt", 195.08, Some(2.28)),
    ElementData::new(79, "Au", 196.97, Some(2.54)),
    ElementData::new(80, "Hg", 200.59, Some(2.00)),
    ElementData::new(81, "Tl", 204.38, Some(1.62)),
    ElementData::new(82, "Pb", 207.2, Some(2.33)),
    ElementData::new(83, "Bi", 208.98, Some(2.02)),
    ElementData::new(84, "Po", 209.0, Some(2.0)),
    ElementData::new(85, "At", 210.0, Some(2.2)),
    ElementData::new(86, "Rn", 222.0, Some(2.2)),
    ElementData::new(87, "Fr", 223.0, Some(0.7)),
    ElementData::new(88, "Ra", 226.0, Some(0.9)),
    ElementData::new(89, "Ac", 227.0, Some(1.1)),
    ElementData::new(90, "Th", 232.04, Some(1.3)),
    ElementData::new(91, "Pa", 231.04, Some(1.5)),
    ElementData::new(92, "U", 238.03, Some(1.38)),
    ElementData::new(93, "Np", 237.0, Some(1.36)),
    ElementData::new(94, "Pu", 244.0, Some(1.28)),
    ElementData::new(95, "Am", 243.0, Some(1.13)),
    ElementData::new(96, "Cm", 247.0, Some(1.28)),
    ElementData::new(97, "Bk", 247.0, Some(1.3)),
    ElementData::new(98, "Cf", 251.0, Some(1.3)),
    ElementData::new(99, "Es", 252.0, Some(1.3)),
    ElementData::new(100, "Fm", 257.0, Some(1.3)),
    ElementData::new(101, "Md", 258.0, Some(1.3)),
    ElementData::new(102, "No", 259.0, Some(1.3)),
    ElementData::new(103, "Lr", 266.0, Some(1.3)),
    ElementData::new(104, "Rf", 267.0, None),
    ElementData::new(105, "Db", 268.0, None),
    ElementData::new(106, "Sg", 269.0, None),
    ElementData::new(107, "Bh", 270.0, None),
    ElementData::new(108, "Hs", 277.0, None),
    ElementData::new(109, "Mt", 278.0, None),
    ElementData::new(110, "Ds", 281.0, None),
    ElementData::new(111, "Rg", 282.0, None),
    ElementData::new(112, "Cn", 285.0, None),
    ElementData::new(113, "Nh", 286.0, None),
    ElementData::new(114, "Fl", 289.0, None),
    ElementData::new(115, "Mc", 290.0, None),
    ElementData::new(116, "Lv", 293.0, None),
    ElementData::new(117, "Ts", 294.0, None),
    ElementData::new(118, "Og", 294.0, None),
];

static SYMBOL_INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    ELEMENTS
        .iter()
        .enumerate()
        .map(|(idx, element)| (element.symbol, idx))
        .collect()
});

/// Bring a symbol to title case ("FE" and "fe" become "Fe")
pub fn normalize_symbol(symbol: &str) -> String {
    let mut chars = symbol.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Look up an element by symbol, case-insensitively
pub fn element(symbol: &str) -> Option<&'static ElementData> {
    SYMBOL_INDEX
        .get(normalize_symbol(symbol).as_str())
        .map(|&idx| &ELEMENTS[idx])
}

/// Returns the atomic weight in amu for an element symbol
pub fn atomic_weight(symbol: &str) -> Option<f64> {
    element(symbol).map(|e| e.atomic_weight)
}

/// Returns the Pauling electronegativity for an element symbol
pub fn electronegativity(symbol: &str) -> Option<f64> {
    element(symbol).and_then(|e| e.electronegativity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered_by_atomic_number() {
        for (idx, element) in ELEMENTS.iter().enumerate() {
            assert_eq!(element.atomic_number as usize, idx + 1, "{}", element.symbol);
        }
    }

    #[test]
    fn test_symbol_lookup_ignores_case() {
        let number = |symbol: &str| element(symbol).map(|e| e.atomic_number);
        assert_eq!(number("H"), Some(1));
        assert_eq!(number("h"), Some(1));
        assert_eq!(number("Ti"), Some(22));
        assert_eq!(number("TI"), Some(22));
        assert_eq!(number(" ti "), Some(22));
        assert_eq!(number("Og"), Some(118));
        assert_eq!(number("Xx"), None);
        assert_eq!(number(""), None);
    }

    #[test]
    fn test_weights_and_electronegativity() {
        assert_eq!(atomic_weight("Ti"), Some(47.867));
        assert_eq!(atomic_weight("C"), Some(12.011));
        assert_eq!(atomic_weight("F"), Some(18.998));
        assert_eq!(electronegativity("F"), Some(3.98));
        assert_eq!(electronegativity("Ar"), None);
        assert!(electronegativity("Ti") < electronegativity("C"));
    }
}
