//! Curated lookup tables: well-known compounds with their class, reference
//! densities, typical valences, and the atomic volumes used by the density
//! estimate. All tables are compile-time constants searched by exact key.
use crate::Formula::classifier::CompoundClass;

/// Common reagents whose class overrides the structural heuristic.
/// Water is listed as a diprotic acid.
pub const KNOWN_COMPOUNDS: &[(&str, CompoundClass)] = &[
    // acids
    ("H2SO4", CompoundClass::Acid { hydrogens: 2.0 }),
    ("HCl", CompoundClass::Acid { hydrogens: 1.0 }),
    ("H3PO4", CompoundClass::Acid { hydrogens: 3.0 }),
    ("HNO3", CompoundClass::Acid { hydrogens: 1.0 }),
    ("H2CO3", CompoundClass::Acid { hydrogens: 2.0 }),
    ("CH3COOH", CompoundClass::Acid { hydrogens: 1.0 }),
    // bases
    ("NaOH", CompoundClass::Base { valence: 1.0 }),
    ("KOH", CompoundClass::Base { valence: 1.0 }),
    ("Ca(OH)2", CompoundClass::Base { valence: 2.0 }),
    ("Al(OH)3", CompoundClass::Base { valence: 3.0 }),
    ("NH4OH", CompoundClass::Base { valence: 1.0 }),
    // salts
    ("FeCl3", CompoundClass::Salt { valence: 3.0 }),
    ("CuSO4", CompoundClass::Salt { valence: 2.0 }),
    ("Al2(SO4)3", CompoundClass::Salt { valence: 3.0 }),
    ("NaCl", CompoundClass::Salt { valence: 1.0 }),
    ("KCl", CompoundClass::Salt { valence: 1.0 }),
    // special cases
    ("H2O", CompoundClass::Acid { hydrogens: 2.0 }),
    (
        "O2",
        CompoundClass::Oxidation {
            oxidation: Some(2.0),
            valence: None,
        },
    ),
    (
        "H2",
        CompoundClass::Oxidation {
            oxidation: Some(2.0),
            valence: None,
        },
    ),
    // metals
    (
        "Al",
        CompoundClass::Oxidation {
            oxidation: None,
            valence: Some(3.0),
        },
    ),
    (
        "Fe",
        CompoundClass::Oxidation {
            oxidation: None,
            valence: Some(3.0),
        },
    ),
    (
        "Cu",
        CompoundClass::Oxidation {
            oxidation: None,
            valence: Some(2.0),
        },
    ),
    (
        "Zn",
        CompoundClass::Oxidation {
            oxidation: None,
            valence: Some(2.0),
        },
    ),
];

/// Densities of common compounds at 20 °C, g/mL
pub const REFERENCE_DENSITIES: &[(&str, f64)] = &[
    ("H2O", 1.000),
    ("H2SO4", 1.840),
    ("HCl", 1.190),
    ("HNO3", 1.513),
    ("NaOH", 2.130),
    ("KOH", 2.120),
    ("CH3OH", 0.792),
    ("C2H5OH", 0.789),
    ("CH3COOH", 1.049),
    ("NH3", 0.769),
    ("CCl4", 1.594),
    ("CHCl3", 1.489),
    ("C6H6", 0.879),
    ("C6H12", 0.779),
    ("C7H8", 0.867),
    ("NaCl", 2.165),
    ("KCl", 1.984),
    ("CaCl2", 2.150),
    ("FeCl3", 2.804),
    ("CuSO4", 3.603),
    ("ZnSO4", 3.540),
    ("Al2(SO4)3", 2.672),
    ("Na2CO3", 2.540),
    ("K2CO3", 2.430),
    ("CaCO3", 2.711),
    ("Fe2O3", 5.242),
    ("CuO", 6.315),
    ("ZnO", 5.606),
    ("SiO2", 2.648),
    ("TiO2", 4.230),
];

/// Approximate atomic volumes, cm³/mol
pub const ATOMIC_VOLUMES: &[(&str, f64)] = &[
    ("H", 1.2),
    ("C", 14.0),
    ("N", 15.6),
    ("O", 14.0),
    ("F", 13.8),
    ("Cl", 22.7),
    ("Br", 27.0),
    ("I", 32.0),
    ("S", 25.2),
    ("P", 24.3),
    ("Na", 23.7),
    ("K", 45.3),
    ("Ca", 29.9),
    ("Mg", 13.9),
    ("Al", 10.0),
    ("Si", 12.1),
    ("Fe", 7.1),
    ("Cu", 7.1),
    ("Zn", 9.2),
    ("Ag", 10.3),
    ("Au", 10.2),
    ("Pt", 9.1),
    ("Hg", 14.8),
];

/// Typical valences used by the structural classifier
pub const TYPICAL_VALENCES: &[(&str, f64)] = &[
    ("H", 1.0),
    ("Na", 1.0),
    ("K", 1.0),
    ("Li", 1.0),
    ("Ag", 1.0),
    ("Mg", 2.0),
    ("Ca", 2.0),
    ("Ba", 2.0),
    ("Zn", 2.0),
    ("Cu", 2.0),
    ("Al", 3.0),
    ("Fe", 3.0),
    ("Cr", 3.0),
    ("C", 4.0),
    ("Si", 4.0),
    ("N", 3.0),
    ("P", 3.0),
    ("O", 2.0),
    ("S", 2.0),
];

/// Elements treated as metals by the structural classifier
pub const METALS: &[&str] = &["Na", "K", "Ca", "Mg", "Al", "Fe", "Cu", "Zn", "Ag", "Ba", "Li"];

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

pub fn known_compound(formula: &str) -> Option<CompoundClass> {
    lookup(KNOWN_COMPOUNDS, formula)
}

pub fn reference_density(formula: &str) -> Option<f64> {
    lookup(REFERENCE_DENSITIES, formula)
}

pub fn atomic_volume(symbol: &str) -> Option<f64> {
    lookup(ATOMIC_VOLUMES, symbol)
}

pub fn typical_valence(symbol: &str) -> Option<f64> {
    lookup(TYPICAL_VALENCES, symbol)
}

pub fn is_metal(symbol: &str) -> bool {
    METALS.contains(&symbol)
}
