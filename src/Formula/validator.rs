//! Syntactic acceptance check for user-typed formulas.
//!
//! A formula is accepted when it is a biomass empirical formula, or when it uses
//! only `[A-Za-z0-9().]`, has balanced parentheses and contains at least one
//! element symbol, every one of them present in the element table.
use crate::Formula::biomass::is_biomass;
use crate::Formula::elements::ElementTable;
use crate::Formula::formula_errors::FormulaError;
use crate::Formula::tokenizer::Tokenizer;
use log::debug;

fn is_formula_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '(' || c == ')' || c == '.'
}

/// Validates a formula and reports why it was rejected
pub fn check_formula(formula: &str, elements: &ElementTable) -> Result<(), FormulaError> {
    if formula.is_empty() {
        return Err(FormulaError::InvalidFormula("empty formula".to_string()));
    }
    if is_biomass(formula) {
        return Ok(());
    }
    if let Some(bad) = formula.chars().find(|c| !is_formula_char(*c)) {
        return Err(FormulaError::InvalidFormula(format!(
            "unexpected character '{}'",
            bad
        )));
    }

    let mut depth: i64 = 0;
    for c in formula.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return Err(FormulaError::InvalidFormula(
                "closing parenthesis without opening one".to_string(),
            ));
        }
    }
    if depth != 0 {
        return Err(FormulaError::InvalidFormula(
            "unbalanced parentheses".to_string(),
        ));
    }

    let mut found = false;
    for lexeme in Tokenizer::new(formula) {
        if !elements.contains(lexeme.symbol) {
            return Err(FormulaError::InvalidFormula(format!(
                "unknown element '{}'",
                lexeme.symbol
            )));
        }
        found = true;
    }
    if !found {
        return Err(FormulaError::InvalidFormula(
            "no element symbols found".to_string(),
        ));
    }
    Ok(())
}

/// true when the formula is syntactically acceptable
pub fn validate(formula: &str, elements: &ElementTable) -> bool {
    match check_formula(formula, elements) {
        Ok(()) => true,
        Err(err) => {
            debug!("formula '{}' rejected: {}", formula, err);
            false
        }
    }
}
