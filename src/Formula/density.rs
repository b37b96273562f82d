//! Density lookup and estimate.
//!
//! Reference densities (20 °C) are returned as they are. For anything else the
//! density is approximated as `molar_mass / Σ(atomic_volume × count)`. This is a
//! rough additive-volume approximation that ignores packing and bonding, useful as
//! an order-of-magnitude hint only, not a physical model.
//!
//! The volume sum walks the formula as written, character by character. A
//! parenthesis ends the pending element and the number after a closing
//! parenthesis is dropped: group multipliers are not distributed over the group.
//! Earlier versions of the calculator appended those digits to the count of the last
//! element in the group (`Ca(OH)2` gave 46.3 cm³/mol, `(NH4)2` read as H42); this
//! scan gives 45.1 cm³/mol for `Ca(OH)2`.
use crate::Formula::formula_errors::FormulaError;
use crate::Formula::reference_data::{atomic_volume, reference_density};
use crate::Formula::tokenizer::parse_count;
use log::debug;
use serde::{Deserialize, Serialize};

/// Atomic volume assumed for elements missing from the volume table, cm³/mol
pub const DEFAULT_ATOMIC_VOLUME: f64 = 15.0;
pub const DEFAULT_DENSITY_DECIMALS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DensitySource {
    Reference,
    Estimated,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityEstimate {
    /// g/mL
    pub value: f64,
    pub source: DensitySource,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityEstimator {
    pub fallback_atomic_volume: f64,
    pub decimals: u32,
}

impl Default for DensityEstimator {
    fn default() -> Self {
        Self {
            fallback_atomic_volume: DEFAULT_ATOMIC_VOLUME,
            decimals: DEFAULT_DENSITY_DECIMALS,
        }
    }
}

impl DensityEstimator {
    pub fn new(fallback_atomic_volume: f64, decimals: u32) -> Self {
        Self {
            fallback_atomic_volume,
            decimals,
        }
    }

    fn contribution(&self, element: &str, count_text: &str) -> Result<f64, FormulaError> {
        let volume = atomic_volume(element).unwrap_or(self.fallback_atomic_volume);
        Ok(volume * parse_count(count_text)?)
    }

    /// Approximate molecular volume of the formula, cm³/mol
    pub fn molecular_volume(&self, formula: &str) -> Result<f64, FormulaError> {
        let mut total_volume = 0.0;
        let mut element = String::new();
        let mut number = String::new();
        for c in formula.chars() {
            if c.is_ascii_uppercase() {
                if !element.is_empty() {
                    total_volume += self.contribution(&element, &number)?;
                }
                element.clear();
                element.push(c);
                number.clear();
            } else if c.is_ascii_lowercase() {
                element.push(c);
            } else if c.is_ascii_digit() || c == '.' {
                number.push(c);
            } else if c == '(' || c == ')' {
                if !element.is_empty() {
                    total_volume += self.contribution(&element, &number)?;
                }
                element.clear();
                number.clear();
            }
        }
        if !element.is_empty() {
            total_volume += self.contribution(&element, &number)?;
        }
        Ok(total_volume)
    }

    fn round(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.decimals as i32);
        (value * factor).round() / factor
    }

    /// Estimated density ignoring the reference table, g/mL
    pub fn approximate_density(&self, formula: &str, molar_mass: f64) -> Result<f64, FormulaError> {
        let volume = self.molecular_volume(formula)?;
        if volume == 0.0 {
            return Err(FormulaError::DivisionByZero(format!(
                "molecular volume of {} is zero",
                formula
            )));
        }
        let density = self.round(molar_mass / volume);
        if !density.is_finite() || density <= 0.0 {
            return Err(FormulaError::ComputationError(format!(
                "estimated density of {} is {}",
                formula, density
            )));
        }
        debug!(
            "estimated density of {}: {} g/mL from volume {} cm3/mol",
            formula, density, volume
        );
        Ok(density)
    }

    pub fn estimate(&self, formula: &str, molar_mass: f64) -> Result<DensityEstimate, FormulaError> {
        if let Some(value) = reference_density(formula) {
            return Ok(DensityEstimate {
                value,
                source: DensitySource::Reference,
            });
        }
        Ok(DensityEstimate {
            value: self.approximate_density(formula, molar_mass)?,
            source: DensitySource::Estimated,
        })
    }
}
