//! # Compound analysis
//!
//! ## Aim
//! Single entry point turning a formula typed by a user into everything the lab
//! calculators need: molar mass, compound class, equivalent weight, equivalents per
//! mole and density.
//!
//! ## Pipeline
//! validator -> expander -> molar mass -> classifier -> equivalent weight, with the
//! density estimate computed from the same validated formula.
//!
//! ## Usage
//! ```rust
//! use ChemCalc::Formula::analysis::analyze_compound;
//! let result = analyze_compound("H2SO4").unwrap();
//! assert!((result.equivalents - 2.0).abs() < 1e-9);
//! ```
use crate::Formula::classifier::{CompoundClass, classify};
use crate::Formula::density::{DensityEstimate, DensityEstimator, DensitySource};
use crate::Formula::elements::ElementTable;
use crate::Formula::equivalents::{equivalent_weight, equivalents};
use crate::Formula::formula_errors::FormulaError;
use crate::Formula::molmass::molar_mass;
use crate::Formula::validator::check_formula;
use crate::settings::Settings;
use log::{info, warn};
use prettytable::{Table, row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub formula: String,
    /// g/mol
    pub molar_mass: f64,
    pub compound_class: CompoundClass,
    /// g/eq
    pub equivalent_weight: f64,
    pub equivalents: f64,
    /// g/mL
    pub density: f64,
    pub density_source: DensitySource,
}

impl AnalysisResult {
    pub fn density_label(&self) -> &'static str {
        match self.density_source {
            DensitySource::Reference => "(20 °C reference)",
            DensitySource::Estimated => "(approximate)",
        }
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row!["Formula", self.formula]);
        table.add_row(row!["Molar mass", format!("{:.3} g/mol", self.molar_mass)]);
        table.add_row(row!["Compound type", self.compound_class]);
        table.add_row(row![
            "Equivalent weight",
            format!("{:.2} g/eq", self.equivalent_weight)
        ]);
        table.add_row(row!["Equivalents", format!("{:.2}", self.equivalents)]);
        table.add_row(row![
            format!("Density {}", self.density_label()),
            format!("{:.3} g/mL", self.density)
        ]);
        table
    }

    pub fn pretty_print(&self) {
        self.to_table().printstd();
    }
}

/// Formula analyzer bound to an element table and a density estimator
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    elements: &'a ElementTable,
    density: DensityEstimator,
}

static STANDARD_TABLE: ElementTable = ElementTable::standard();

impl Default for Analyzer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer<'static> {
    /// Analyzer over the built-in periodic table with default density settings
    pub fn new() -> Self {
        Self {
            elements: &STANDARD_TABLE,
            density: DensityEstimator::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new().with_density_estimator(settings.density_estimator())
    }
}

impl<'a> Analyzer<'a> {
    pub fn with_elements(elements: &'a ElementTable) -> Self {
        Self {
            elements,
            density: DensityEstimator::default(),
        }
    }

    pub fn with_density_estimator(mut self, density: DensityEstimator) -> Self {
        self.density = density;
        self
    }

    pub fn check(&self, formula: &str) -> Result<(), FormulaError> {
        check_formula(formula, self.elements)
    }

    pub fn validate(&self, formula: &str) -> bool {
        self.check(formula).is_ok()
    }

    pub fn molar_mass(&self, formula: &str) -> Result<f64, FormulaError> {
        self.check(formula)?;
        molar_mass(formula, self.elements)
    }

    pub fn estimate_density(
        &self,
        formula: &str,
        molar_mass: f64,
    ) -> Result<DensityEstimate, FormulaError> {
        self.density.estimate(formula, molar_mass)
    }

    /// Full analysis of a formula; fails with the validator's error on rejected input
    pub fn analyze(&self, formula: &str) -> Result<AnalysisResult, FormulaError> {
        if let Err(err) = self.check(formula) {
            warn!("rejected formula '{}': {}", formula, err);
            return Err(err);
        }
        let molar_mass = molar_mass(formula, self.elements)?;
        let compound_class = classify(formula).ok_or_else(|| {
            FormulaError::InvalidFormula(format!("cannot classify '{}'", formula))
        })?;
        let equivalent_weight = equivalent_weight(&compound_class, molar_mass)?;
        let equivalents = equivalents(molar_mass, equivalent_weight)?;
        let density = self.density.estimate(formula, molar_mass)?;
        info!(
            "{}: M = {:.3} g/mol, {}, Eq = {:.3} g/eq",
            formula, molar_mass, compound_class, equivalent_weight
        );
        Ok(AnalysisResult {
            formula: formula.to_string(),
            molar_mass,
            compound_class,
            equivalent_weight,
            equivalents,
            density: density.value,
            density_source: density.source,
        })
    }
}

/// Syntactic check against the built-in periodic table
pub fn validate_formula(formula: &str) -> bool {
    Analyzer::new().validate(formula)
}

pub fn analyze_compound(formula: &str) -> Result<AnalysisResult, FormulaError> {
    Analyzer::new().analyze(formula)
}

/// Reference density when one is tabulated, the additive-volume estimate otherwise
pub fn estimate_density(formula: &str, molar_mass: f64) -> Result<DensityEstimate, FormulaError> {
    Analyzer::new().estimate_density(formula, molar_mass)
}
