#[allow(non_snake_case)]
pub mod Formula;
pub mod cli;
pub mod settings;

pub use Formula::analysis::{
    AnalysisResult, Analyzer, analyze_compound, estimate_density, validate_formula,
};
pub use Formula::classifier::CompoundClass;
pub use Formula::density::{DensityEstimate, DensitySource};
pub use Formula::elements::{Element, ElementTable};
pub use Formula::formula_errors::FormulaError;
pub use settings::{Settings, SettingsError};
