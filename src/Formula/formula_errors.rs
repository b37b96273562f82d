use thiserror::Error;

/// error types of the formula engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// syntactic rejection: empty input, bad characters, unbalanced parentheses,
    /// unknown element, no element tokens
    #[error("Invalid formula: {0}")]
    InvalidFormula(String),
    /// element symbol missing from the element table after expansion
    #[error("Unknown element: {0}")]
    UnknownElement(String),
    /// non-finite or otherwise unusable numeric result
    #[error("Computation error: {0}")]
    ComputationError(String),
    #[error("Division by zero: {0}")]
    DivisionByZero(String),
}

impl FormulaError {
    /// true for errors caused by what the user typed rather than by arithmetic
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            FormulaError::InvalidFormula(_) | FormulaError::UnknownElement(_)
        )
    }
}
