//! Module to calculate the atomic composition and molar mass of a chemical formula
//!
//! Two grammars are understood: ordinary formulas with (nested) parenthesized groups
//! and fractional counts, and biomass empirical formulas `CH<h>O<o>N<n>` whose
//! carbon count is always one.
use crate::Formula::biomass::BiomassFormula;
use crate::Formula::elements::ElementTable;
use crate::Formula::expander::expand;
use crate::Formula::formula_errors::FormulaError;
use crate::Formula::tokenizer::FormulaToken;
use log::debug;
use std::collections::HashMap;

/// Sum of `count * atomic_mass` over the tokens
pub fn molar_mass_of_tokens(
    tokens: &[FormulaToken],
    elements: &ElementTable,
) -> Result<f64, FormulaError> {
    let mut molar_mass = 0.0;
    for token in tokens {
        let atomic_mass = elements
            .atomic_mass(&token.element)
            .ok_or_else(|| FormulaError::UnknownElement(token.element.clone()))?;
        molar_mass += token.count * atomic_mass;
    }
    if !molar_mass.is_finite() {
        return Err(FormulaError::ComputationError(format!(
            "molar mass is not finite ({})",
            molar_mass
        )));
    }
    Ok(molar_mass)
}

// biomass formulas are expressed per mole of carbon, the text never carries a C count
fn biomass_tokens(biomass: &BiomassFormula) -> Vec<FormulaToken> {
    biomass
        .composition()
        .iter()
        .map(|(element, count)| FormulaToken::new(element, *count))
        .collect()
}

fn formula_tokens(formula: &str) -> Result<Vec<FormulaToken>, FormulaError> {
    match BiomassFormula::parse(formula) {
        Some(biomass) => Ok(biomass_tokens(&biomass)),
        None => expand(formula),
    }
}

/// Molar mass of a formula in g/mol
pub fn molar_mass(formula: &str, elements: &ElementTable) -> Result<f64, FormulaError> {
    let tokens = formula_tokens(formula)?;
    let mass = molar_mass_of_tokens(&tokens, elements)?;
    debug!("molar mass of {}: {} g/mol", formula, mass);
    Ok(mass)
}

// Function to parse a chemical formula and return a HashMap of elements and their counts.
// Groups are expanded and counts of a repeated element accumulate, so "CH3COOH" gives {"C":2, "H":4, "O":2}
pub fn parse_formula(formula: &str) -> Result<HashMap<String, f64>, FormulaError> {
    let mut counts = HashMap::new();
    for token in formula_tokens(formula)? {
        *counts.entry(token.element).or_insert(0.0) += token.count;
    }
    Ok(counts)
}

// Function to calculate the molar mass of a substance given its chemical formula
pub fn calculate_molar_mass(
    formula: &str,
    elements: &ElementTable,
) -> Result<(f64, HashMap<String, f64>), FormulaError> {
    let tokens = formula_tokens(formula)?;
    let molar_mass = molar_mass_of_tokens(&tokens, elements)?;
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.element).or_insert(0.0) += token.count;
    }
    Ok((molar_mass, counts))
}

// Function to calculate the molar mass of a vector of chemical formulas
pub fn calculate_molar_mass_of_vector_of_subs(
    vec_of_formulae: &[&str],
    elements: &ElementTable,
) -> Result<Vec<f64>, FormulaError> {
    vec_of_formulae
        .iter()
        .map(|formula| molar_mass(formula, elements))
        .collect()
}
