//! Scanner for the element-symbol grammar shared by the whole engine.
//!
//! An element lexeme is one uppercase ASCII letter, optionally followed by one
//! lowercase letter, optionally followed by a decimal count (`digits`, at most one
//! `.`, `digits`). Anything that cannot start a lexeme is skipped, so the scanner
//! never fails; rejecting stray characters is the validator's job.
use crate::Formula::formula_errors::FormulaError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single element occurrence as it appears in the formula text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub symbol: &'a str,
    /// raw count text, empty when the count is implicit
    pub count_text: &'a str,
    /// byte offset of the symbol in the scanned text
    pub position: usize,
}

impl Lexeme<'_> {
    /// Numeric count of the lexeme, 1 when no count was written
    pub fn count(&self) -> Result<f64, FormulaError> {
        parse_count(self.count_text)
    }
}

/// Element with its (possibly fractional) number of atoms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaToken {
    pub element: String,
    pub count: f64,
}

impl FormulaToken {
    pub fn new(element: &str, count: f64) -> Self {
        Self {
            element: element.to_string(),
            count,
        }
    }
}

impl fmt::Display for FormulaToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.element, self.count)
    }
}

/// Iterator over the element lexemes of a formula
pub struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() {
            if bytes[self.pos].is_ascii_uppercase() {
                let start = self.pos;
                let symbol_end = symbol_end(self.text, start);
                let count_end = count_end(self.text, symbol_end);
                self.pos = count_end;
                return Some(Lexeme {
                    symbol: &self.text[start..symbol_end],
                    count_text: &self.text[symbol_end..count_end],
                    position: start,
                });
            }
            self.pos += 1;
        }
        None
    }
}

/// End of the element symbol starting at `start` (which must be an uppercase letter)
pub(crate) fn symbol_end(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut end = start + 1;
    if end < bytes.len() && bytes[end].is_ascii_lowercase() {
        end += 1;
    }
    end
}

/// End of the decimal count starting at `start`; equals `start` when there is none
pub(crate) fn count_end(text: &str, start: usize) -> usize {
    let bytes = text.as_bytes();
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    end
}

/// Parses count text; an empty count means one atom
pub fn parse_count(count_text: &str) -> Result<f64, FormulaError> {
    if count_text.is_empty() {
        return Ok(1.0);
    }
    count_text
        .parse::<f64>()
        .map_err(|_| FormulaError::ComputationError(format!("malformed count '{}'", count_text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<Lexeme<'_>> {
        Tokenizer::new(text).collect()
    }

    fn symbols_and_counts(text: &str) -> Vec<(&str, &str)> {
        tokenize(text)
            .iter()
            .map(|lexeme| (lexeme.symbol, lexeme.count_text))
            .collect()
    }

    #[test]
    fn test_simple_formula() {
        assert_eq!(
            symbols_and_counts("H2SO4"),
            vec![("H", "2"), ("S", ""), ("O", "4")]
        );
        assert_eq!(symbols_and_counts("NaCl"), vec![("Na", ""), ("Cl", "")]);
    }

    #[test]
    fn test_fractional_counts() {
        assert_eq!(
            symbols_and_counts("CH1.8O0.5N0.2"),
            vec![("C", ""), ("H", "1.8"), ("O", "0.5"), ("N", "0.2")]
        );
        let lexemes = tokenize("H1.8");
        assert_eq!(lexemes[0].count().unwrap(), 1.8);
    }

    #[test]
    fn test_parentheses_and_stray_characters_are_skipped() {
        assert_eq!(
            symbols_and_counts("Ca(OH)2"),
            vec![("Ca", ""), ("O", ""), ("H", "")]
        );
        assert_eq!(symbols_and_counts("2H2O"), vec![("H", "2"), ("O", "")]);
        assert!(tokenize("h2o").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_positions() {
        let lexemes = tokenize("Al2(SO4)3");
        let positions: Vec<usize> = lexemes.iter().map(|lexeme| lexeme.position).collect();
        assert_eq!(positions, vec![0, 4, 5]);
    }

    #[test]
    fn test_count_parsing() {
        assert_eq!(parse_count("").unwrap(), 1.0);
        assert_eq!(parse_count("12").unwrap(), 12.0);
        assert_eq!(parse_count(".5").unwrap(), 0.5);
        assert!(matches!(
            parse_count("."),
            Err(FormulaError::ComputationError(_))
        ));
        // only one decimal point belongs to a count
        assert_eq!(symbols_and_counts("H1.2.3"), vec![("H", "1.2")]);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(FormulaToken::new("Ca", 1.0).to_string(), "Ca1");
        assert_eq!(FormulaToken::new("H", 1.8).to_string(), "H1.8");
    }
}
