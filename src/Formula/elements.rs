//! Periodic table data used by every stage of the formula engine.
//!
//! The table is a plain `const` slice, so it is initialized at compile time and
//! shared read-only by all callers. [`ElementTable`] is the handle the rest of the
//! engine receives explicitly instead of reaching for the slice directly.

/// One entry of the periodic table: symbol and standard atomic mass in g/mol
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub name: &'static str,
    pub atomic_mass: f64,
}

// Standard atomic masses, H through Pu
const ELEMENTS: &[Element] = &[
    Element {
        name: "H",
        atomic_mass: 1.008,
    },
    Element {
        name: "He",
        atomic_mass: 4.003,
    },
    Element {
        name: "Li",
        atomic_mass: 6.941,
    },
    Element {
        name: "Be",
        atomic_mass: 9.012,
    },
    Element {
        name: "B",
        atomic_mass: 10.811,
    },
    Element {
        name: "C",
        atomic_mass: 12.011,
    },
    Element {
        name: "N",
        atomic_mass: 14.007,
    },
    Element {
        name: "O",
        atomic_mass: 16.0,
    },
    Element {
        name: "F",
        atomic_mass: 18.998,
    },
    Element {
        name: "Ne",
        atomic_mass: 20.18,
    },
    Element {
        name: "Na",
        atomic_mass: 22.99,
    },
    Element {
        name: "Mg",
        atomic_mass: 24.305,
    },
    Element {
        name: "Al",
        atomic_mass: 26.982,
    },
    Element {
        name: "Si",
        atomic_mass: 28.086,
    },
    Element {
        name: "P",
        atomic_mass: 30.974,
    },
    Element {
        name: "S",
        atomic_mass: 32.065,
    },
    Element {
        name: "Cl",
        atomic_mass: 35.453,
    },
    Element {
        name: "Ar",
        atomic_mass: 39.948,
    },
    Element {
        name: "K",
        atomic_mass: 39.098,
    },
    Element {
        name: "Ca",
        atomic_mass: 40.078,
    },
    Element {
        name: "Sc",
        atomic_mass: 44.956,
    },
    Element {
        name: "Ti",
        atomic_mass: 47.867,
    },
    Element {
        name: "V",
        atomic_mass: 50.942,
    },
    Element {
        name: "Cr",
        atomic_mass: 51.996,
    },
    Element {
        name: "Mn",
        atomic_mass: 54.938,
    },
    Element {
        name: "Fe",
        atomic_mass: 55.845,
    },
    Element {
        name: "Co",
        atomic_mass: 58.933,
    },
    Element {
        name: "Ni",
        atomic_mass: 58.693,
    },
    Element {
        name: "Cu",
        atomic_mass: 63.546,
    },
    Element {
        name: "Zn",
        atomic_mass: 65.38,
    },
    Element {
        name: "Ga",
        atomic_mass: 69.723,
    },
    Element {
        name: "Ge",
        atomic_mass: 72.64,
    },
    Element {
        name: "As",
        atomic_mass: 74.922,
    },
    Element {
        name: "Se",
        atomic_mass: 78.96,
    },
    Element {
        name: "Br",
        atomic_mass: 79.904,
    },
    Element {
        name: "Kr",
        atomic_mass: 83.798,
    },
    Element {
        name: "Rb",
        atomic_mass: 85.468,
    },
    Element {
        name: "Sr",
        atomic_mass: 87.62,
    },
    Element {
        name: "Y",
        atomic_mass: 88.906,
    },
    Element {
        name: "Zr",
        atomic_mass: 91.224,
    },
    Element {
        name: "Nb",
        atomic_mass: 92.906,
    },
    Element {
        name: "Mo",
        atomic_mass: 95.96,
    },
    Element {
        name: "Tc",
        atomic_mass: 98.0,
    },
    Element {
        name: "Ru",
        atomic_mass: 101.07,
    },
    Element {
        name: "Rh",
        atomic_mass: 102.906,
    },
    Element {
        name: "Pd",
        atomic_mass: 106.42,
    },
    Element {
        name: "Ag",
        atomic_mass: 107.868,
    },
    Element {
        name: "Cd",
        atomic_mass: 112.411,
    },
    Element {
        name: "In",
        atomic_mass: 114.818,
    },
    Element {
        name: "Sn",
        atomic_mass: 118.71,
    },
    Element {
        name: "Sb",
        atomic_mass: 121.76,
    },
    Element {
        name: "Te",
        atomic_mass: 127.6,
    },
    Element {
        name: "I",
        atomic_mass: 126.904,
    },
    Element {
        name: "Xe",
        atomic_mass: 131.293,
    },
    Element {
        name: "Cs",
        atomic_mass: 132.905,
    },
    Element {
        name: "Ba",
        atomic_mass: 137.327,
    },
    Element {
        name: "La",
        atomic_mass: 138.905,
    },
    Element {
        name: "Ce",
        atomic_mass: 140.116,
    },
    Element {
        name: "Pr",
        atomic_mass: 140.908,
    },
    Element {
        name: "Nd",
        atomic_mass: 144.242,
    },
    Element {
        name: "Pm",
        atomic_mass: 145.0,
    },
    Element {
        name: "Sm",
        atomic_mass: 150.36,
    },
    Element {
        name: "Eu",
        atomic_mass: 151.964,
    },
    Element {
        name: "Gd",
        atomic_mass: 157.25,
    },
    Element {
        name: "Tb",
        atomic_mass: 158.925,
    },
    Element {
        name: "Dy",
        atomic_mass: 162.5,
    },
    Element {
        name: "Ho",
        atomic_mass: 164.93,
    },
    Element {
        name: "Er",
        atomic_mass: 167.259,
    },
    Element {
        name: "Tm",
        atomic_mass: 168.934,
    },
    Element {
        name: "Yb",
        atomic_mass: 173.054,
    },
    Element {
        name: "Lu",
        atomic_mass: 174.967,
    },
    Element {
        name: "Hf",
        atomic_mass: 178.49,
    },
    Element {
        name: "Ta",
        atomic_mass: 180.948,
    },
    Element {
        name: "W",
        atomic_mass: 183.84,
    },
    Element {
        name: "Re",
        atomic_mass: 186.207,
    },
    Element {
        name: "Os",
        atomic_mass: 190.23,
    },
    Element {
        name: "Ir",
        atomic_mass: 192.217,
    },
    Element {
        name: "Pt",
        atomic_mass: 195.084,
    },
    Element {
        name: "Au",
        atomic_mass: 196.967,
    },
    Element {
        name: "Hg",
        atomic_mass: 200.59,
    },
    Element {
        name: "Tl",
        atomic_mass: 204.383,
    },
    Element {
        name: "Pb",
        atomic_mass: 207.2,
    },
    Element {
        name: "Bi",
        atomic_mass: 208.98,
    },
    Element {
        name: "Po",
        atomic_mass: 209.0,
    },
    Element {
        name: "At",
        atomic_mass: 210.0,
    },
    Element {
        name: "Rn",
        atomic_mass: 222.0,
    },
    Element {
        name: "Fr",
        atomic_mass: 223.0,
    },
    Element {
        name: "Ra",
        atomic_mass: 226.0,
    },
    Element {
        name: "Ac",
        atomic_mass: 227.0,
    },
    Element {
        name: "Th",
        atomic_mass: 232.038,
    },
    Element {
        name: "Pa",
        atomic_mass: 231.036,
    },
    Element {
        name: "U",
        atomic_mass: 238.029,
    },
    Element {
        name: "Np",
        atomic_mass: 237.0,
    },
    Element {
        name: "Pu",
        atomic_mass: 244.0,
    },
];

/// Read-only view over a list of elements.
///
/// `ElementTable::standard()` wraps the built-in periodic table; `ElementTable::new`
/// accepts any static slice, which keeps tests free to use a reduced table.
#[derive(Debug, Clone, Copy)]
pub struct ElementTable {
    elements: &'static [Element],
}

impl ElementTable {
    pub const fn new(elements: &'static [Element]) -> Self {
        Self { elements }
    }

    /// The built-in periodic table (94 elements)
    pub const fn standard() -> Self {
        Self::new(ELEMENTS)
    }

    pub fn get(&self, symbol: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.name == symbol)
    }

    /// Atomic mass in g/mol, `None` for a symbol missing from the table
    pub fn atomic_mass(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).map(|element| element.atomic_mass)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }
}

impl Default for ElementTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_standard_table_lookup() {
        let table = ElementTable::standard();
        assert_eq!(table.len(), 94);
        assert_eq!(table.atomic_mass("H"), Some(1.008));
        assert_eq!(table.atomic_mass("O"), Some(16.0));
        assert_eq!(table.atomic_mass("Pu"), Some(244.0));
        assert!(table.contains("Cl"));
        // symbols are case sensitive
        assert!(!table.contains("CL"));
        assert!(!table.contains("Xx"));
        assert_eq!(table.atomic_mass("Xx"), None);
    }

    #[test]
    fn test_symbols_are_unique() {
        let table = ElementTable::standard();
        let symbols: HashSet<&str> = table.iter().map(|element| element.name).collect();
        assert_eq!(symbols.len(), table.len());
    }

    #[test]
    fn test_custom_table() {
        static REDUCED: &[Element] = &[Element {
            name: "C",
            atomic_mass: 12.0,
        }];
        let table = ElementTable::new(REDUCED);
        assert_eq!(table.len(), 1);
        assert!(table.contains("C"));
        assert!(!table.contains("H"));
    }
}
