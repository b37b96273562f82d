//! Compound classification.
//!
//! Classification runs in three steps, first hit wins:
//! 1. biomass empirical formula -> `Biomass`
//! 2. exact match in the known-compound table (see `reference_data`)
//! 3. structural heuristic over the element tally of the raw formula
//!
//! The heuristic tallies the formula as written, before group expansion, so
//! `Mg(OH)2` counts one hydrogen. Its decision order is fixed:
//!
//! | hydrogen | metal | oxygen | class |
//! |----------|-------|--------|-------|
//! | yes | - | - | `Acid(hydrogens)` |
//! | no | yes | yes | `Salt(metal valence)` |
//! | no | yes | no | `Oxidation(valence = metal valence)` |
//! | no | no | yes | `Oxidation(oxidation = oxygen count)` |
//! | no | no | no, other non-metals | `Oxidation(valence = non-metal valence)` |
//!
//! with `Oxidation(valence = max(metal valence, non-metal valence, hydrogens) or 1)`
//! as the fallback when every count is zero. Hydroxides reach the metal+oxygen row
//! only without hydrogen, which never happens, so `Base` comes from the known
//! compound table alone.
use crate::Formula::biomass::is_biomass;
use crate::Formula::reference_data::{is_metal, known_compound, typical_valence};
use crate::Formula::tokenizer::Tokenizer;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CompoundClass {
    Acid {
        hydrogens: f64,
    },
    Base {
        valence: f64,
    },
    Salt {
        valence: f64,
    },
    /// redox-active species; an explicit oxidation count takes precedence over valence
    Oxidation {
        oxidation: Option<f64>,
        valence: Option<f64>,
    },
    Biomass,
}

impl CompoundClass {
    pub fn kind(&self) -> &'static str {
        match self {
            CompoundClass::Acid { .. } => "acid",
            CompoundClass::Base { .. } => "base",
            CompoundClass::Salt { .. } => "salt",
            CompoundClass::Oxidation { .. } => "oxidation",
            CompoundClass::Biomass => "biomass",
        }
    }
}

impl fmt::Display for CompoundClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompoundClass::Acid { hydrogens } => write!(f, "acid ({} H)", hydrogens),
            CompoundClass::Base { valence } => write!(f, "base (valence {})", valence),
            CompoundClass::Salt { valence } => write!(f, "salt (valence {})", valence),
            CompoundClass::Oxidation {
                oxidation: Some(oxidation),
                ..
            } => write!(f, "oxidation (oxidation {})", oxidation),
            CompoundClass::Oxidation {
                valence: Some(valence),
                ..
            } => write!(f, "oxidation (valence {})", valence),
            CompoundClass::Oxidation { .. } => write!(f, "oxidation"),
            CompoundClass::Biomass => write!(f, "biomass"),
        }
    }
}

/// Aggregated element categories of a formula
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementTally {
    pub hydrogens: f64,
    pub oxygens: f64,
    pub metals: f64,
    pub non_metals: f64,
    pub metal_valence: f64,
    pub non_metal_valence: f64,
}

impl ElementTally {
    /// Tallies the lexemes of the raw formula; `None` if there are none or a count is malformed
    pub fn from_formula(formula: &str) -> Option<Self> {
        let mut tally = Self::default();
        let mut found = false;
        for lexeme in Tokenizer::new(formula) {
            let count = lexeme.count().ok()?;
            tally.add(lexeme.symbol, count);
            found = true;
        }
        found.then_some(tally)
    }

    fn add(&mut self, symbol: &str, count: f64) {
        if symbol == "H" {
            self.hydrogens += count;
        } else if symbol == "O" {
            self.oxygens += count;
            // oxygen is also a non-metal
            self.non_metals += count;
            self.non_metal_valence = self
                .non_metal_valence
                .max(typical_valence(symbol).unwrap_or(2.0));
        } else if is_metal(symbol) {
            self.metals += count;
            self.metal_valence = self
                .metal_valence
                .max(typical_valence(symbol).unwrap_or(1.0));
        } else {
            self.non_metals += count;
            self.non_metal_valence = self
                .non_metal_valence
                .max(typical_valence(symbol).unwrap_or(1.0));
        }
    }

    /// Structural decision over the tally
    pub fn decide(&self) -> CompoundClass {
        if self.hydrogens > 0.0 {
            // hydracids (HCl) and oxyacids (H2SO4) alike
            return CompoundClass::Acid {
                hydrogens: self.hydrogens,
            };
        }
        if self.metals > 0.0 {
            if self.oxygens > 0.0 {
                return CompoundClass::Salt {
                    valence: self.metal_valence,
                };
            }
            return CompoundClass::Oxidation {
                oxidation: None,
                valence: Some(self.metal_valence),
            };
        }
        if self.oxygens > 0.0 {
            return CompoundClass::Oxidation {
                oxidation: Some(self.oxygens),
                valence: None,
            };
        }
        if self.non_metals > 0.0 {
            return CompoundClass::Oxidation {
                oxidation: None,
                valence: Some(self.non_metal_valence),
            };
        }
        let max_valence = self
            .metal_valence
            .max(self.non_metal_valence)
            .max(self.hydrogens);
        CompoundClass::Oxidation {
            oxidation: None,
            valence: Some(if max_valence > 0.0 { max_valence } else { 1.0 }),
        }
    }
}

/// Known-compound table stage only
pub fn lookup_known_compound(formula: &str) -> Option<CompoundClass> {
    known_compound(formula)
}

/// Structural heuristic stage only
pub fn classify_by_structure(formula: &str) -> Option<CompoundClass> {
    ElementTally::from_formula(formula).map(|tally| tally.decide())
}

pub fn classify(formula: &str) -> Option<CompoundClass> {
    if is_biomass(formula) {
        return Some(CompoundClass::Biomass);
    }
    if let Some(class) = lookup_known_compound(formula) {
        debug!("{} found in known compounds: {}", formula, class);
        return Some(class);
    }
    let class = classify_by_structure(formula);
    debug!("{} classified by structure: {:?}", formula, class);
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oxidation(oxidation: Option<f64>, valence: Option<f64>) -> CompoundClass {
        CompoundClass::Oxidation { oxidation, valence }
    }

    #[test]
    fn test_biomass_comes_first() {
        assert_eq!(classify("CH1.8O0.5N0.2"), Some(CompoundClass::Biomass));
    }

    #[test]
    fn test_known_compounds_override_heuristic() {
        assert_eq!(classify("H2O"), Some(CompoundClass::Acid { hydrogens: 2.0 }));
        assert_eq!(classify("Ca(OH)2"), Some(CompoundClass::Base { valence: 2.0 }));
        assert_eq!(classify("NaOH"), Some(CompoundClass::Base { valence: 1.0 }));
        assert_eq!(classify("Al2(SO4)3"), Some(CompoundClass::Salt { valence: 3.0 }));
        assert_eq!(classify("CH3COOH"), Some(CompoundClass::Acid { hydrogens: 1.0 }));
        assert_eq!(classify("O2"), Some(oxidation(Some(2.0), None)));
        assert_eq!(classify("Fe"), Some(oxidation(None, Some(3.0))));
        // the heuristic alone would call NaOH an acid
        assert_eq!(
            classify_by_structure("NaOH"),
            Some(CompoundClass::Acid { hydrogens: 1.0 })
        );
    }

    #[test]
    fn test_acids() {
        assert_eq!(classify("HBr"), Some(CompoundClass::Acid { hydrogens: 1.0 }));
        assert_eq!(classify("H2S"), Some(CompoundClass::Acid { hydrogens: 2.0 }));
        assert_eq!(classify("HClO4"), Some(CompoundClass::Acid { hydrogens: 1.0 }));
        // raw tally: the group multiplier is not applied
        assert_eq!(
            classify("Mg(OH)2"),
            Some(CompoundClass::Acid { hydrogens: 1.0 })
        );
    }

    #[test]
    fn test_metal_with_oxygen_is_salt() {
        assert_eq!(classify("Na2O"), Some(CompoundClass::Salt { valence: 1.0 }));
        assert_eq!(classify("MgSO4"), Some(CompoundClass::Salt { valence: 2.0 }));
        // highest metal valence wins
        assert_eq!(classify("KAlO2"), Some(CompoundClass::Salt { valence: 3.0 }));
    }

    #[test]
    fn test_oxidation_rules() {
        // pure metal not in the known table
        assert_eq!(classify("Mg"), Some(oxidation(None, Some(2.0))));
        // metal without oxygen
        assert_eq!(classify("CaCl2"), Some(oxidation(None, Some(2.0))));
        // non-metal oxides use the oxygen count
        assert_eq!(classify("CO2"), Some(oxidation(Some(2.0), None)));
        assert_eq!(classify("SO3"), Some(oxidation(Some(3.0), None)));
        // non-metals only
        assert_eq!(classify("Cl2"), Some(oxidation(None, Some(1.0))));
        assert_eq!(classify("CCl4"), Some(oxidation(None, Some(4.0))));
        // metal not on the allowlist is a non-metal here
        assert_eq!(classify("Cr"), Some(oxidation(None, Some(3.0))));
    }

    #[test]
    fn test_fallback_when_all_counts_are_zero() {
        assert_eq!(classify("H0"), Some(oxidation(None, Some(1.0))));
        assert_eq!(classify("Al0"), Some(oxidation(None, Some(3.0))));
    }

    #[test]
    fn test_no_class_without_elements() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("123"), None);
        assert_eq!(classify("H."), None);
    }

    #[test]
    fn test_tally() {
        let tally = ElementTally::from_formula("CuSO4").unwrap();
        assert_eq!(tally.metals, 1.0);
        assert_eq!(tally.oxygens, 4.0);
        assert_eq!(tally.non_metals, 5.0);
        assert_eq!(tally.metal_valence, 2.0);
        assert_eq!(tally.non_metal_valence, 2.0);
    }

    #[test]
    fn test_serialized_form() {
        let json = serde_json::to_string(&CompoundClass::Acid { hydrogens: 2.0 }).unwrap();
        assert_eq!(json, r#"{"type":"acid","hydrogens":2.0}"#);
        assert_eq!(CompoundClass::Biomass.kind(), "biomass");
    }
}
