//! Biomass empirical formulas `CH<h>O<o>N<n>`.
//!
//! Composition is always written per mole of carbon, so the carbon count is fixed
//! at one and only the H, O and N coefficients are read from the text.
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static BIOMASS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^CH(\d+(?:\.\d*)?|\.\d+)O(\d+(?:\.\d*)?|\.\d+)N(\d+(?:\.\d*)?|\.\d+)$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiomassFormula {
    pub hydrogen: f64,
    pub oxygen: f64,
    pub nitrogen: f64,
}

impl BiomassFormula {
    /// Returns `Some` when the whole formula matches the biomass grammar
    pub fn parse(formula: &str) -> Option<Self> {
        let captures = BIOMASS_PATTERN.captures(formula)?;
        let coefficient = |i: usize| captures.get(i)?.as_str().parse::<f64>().ok();
        Some(Self {
            hydrogen: coefficient(1)?,
            oxygen: coefficient(2)?,
            nitrogen: coefficient(3)?,
        })
    }

    /// (element, count) pairs, carbon first
    pub fn composition(&self) -> [(&'static str, f64); 4] {
        [
            ("C", 1.0),
            ("H", self.hydrogen),
            ("O", self.oxygen),
            ("N", self.nitrogen),
        ]
    }
}

pub fn is_biomass(formula: &str) -> bool {
    BIOMASS_PATTERN.is_match(formula)
}
