//! Expansion of parenthesized groups.
//!
//! The formula is parsed into a tree of [`FormulaNode`]s, one `Group` per matched
//! pair of parentheses with its trailing multiplier, and the tree is then flattened
//! into a list of [`FormulaToken`]s where every count is multiplied by all
//! enclosing group multipliers:
//!
//! ```text
//! Al2(SO4)3      ->  Al2 S3 O12
//! K4(Fe(CN)6)    ->  K4 Fe1 C6 N6
//! ```
//!
//! Both passes use explicit stacks, so nesting depth is bounded by memory, not by
//! the call stack. The input is expected to have passed the validator: a stray
//! `)` is ignored and groups left open at the end of the text are closed with a
//! multiplier of one.
use crate::Formula::formula_errors::FormulaError;
use crate::Formula::tokenizer::{FormulaToken, count_end, parse_count, symbol_end};

#[derive(Debug, Clone, PartialEq)]
pub enum FormulaNode {
    Element { symbol: String, count: f64 },
    Group {
        children: Vec<FormulaNode>,
        multiplier: f64,
    },
}

/// Parses a formula into its group tree
pub fn parse_tree(formula: &str) -> Result<Vec<FormulaNode>, FormulaError> {
    let bytes = formula.as_bytes();
    let mut stack: Vec<Vec<FormulaNode>> = vec![Vec::new()];
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b if b.is_ascii_uppercase() => {
                let end_of_symbol = symbol_end(formula, pos);
                let end_of_count = count_end(formula, end_of_symbol);
                let count = parse_count(&formula[end_of_symbol..end_of_count])?;
                current(&mut stack).push(FormulaNode::Element {
                    symbol: formula[pos..end_of_symbol].to_string(),
                    count,
                });
                pos = end_of_count;
            }
            b'(' => {
                stack.push(Vec::new());
                pos += 1;
            }
            b')' if stack.len() > 1 => {
                let end_of_multiplier = count_end(formula, pos + 1);
                let multiplier = parse_count(&formula[pos + 1..end_of_multiplier])?;
                close_group(&mut stack, multiplier);
                pos = end_of_multiplier;
            }
            _ => pos += 1,
        }
    }
    while stack.len() > 1 {
        close_group(&mut stack, 1.0);
    }
    Ok(stack.pop().unwrap_or_default())
}

fn current(stack: &mut Vec<Vec<FormulaNode>>) -> &mut Vec<FormulaNode> {
    if stack.is_empty() {
        stack.push(Vec::new());
    }
    let last = stack.len() - 1;
    &mut stack[last]
}

fn close_group(stack: &mut Vec<Vec<FormulaNode>>, multiplier: f64) {
    if let Some(children) = stack.pop() {
        current(stack).push(FormulaNode::Group {
            children,
            multiplier,
        });
    }
}

/// Flattens a group tree into tokens, in the order the elements are written
pub fn flatten(nodes: &[FormulaNode]) -> Vec<FormulaToken> {
    let mut tokens = Vec::new();
    // (node, product of the enclosing multipliers); pushed in reverse to keep order
    let mut pending: Vec<(&FormulaNode, f64)> = nodes.iter().rev().map(|n| (n, 1.0)).collect();
    while let Some((node, factor)) = pending.pop() {
        match node {
            FormulaNode::Element { symbol, count } => {
                tokens.push(FormulaToken::new(symbol, count * factor));
            }
            FormulaNode::Group {
                children,
                multiplier,
            } => {
                let inner = factor * multiplier;
                pending.extend(children.iter().rev().map(|child| (child, inner)));
            }
        }
    }
    tokens
}

/// Expands all groups of a formula into a flat token list
pub fn expand(formula: &str) -> Result<Vec<FormulaToken>, FormulaError> {
    let tokens = flatten(&parse_tree(formula)?);
    if let Some(token) = tokens.iter().find(|token| !token.count.is_finite()) {
        return Err(FormulaError::ComputationError(format!(
            "count of {} is not finite after expansion",
            token.element
        )));
    }
    Ok(tokens)
}

/// Text of the expanded formula.
///
/// A formula without parentheses is already expanded and is returned as written.
/// Otherwise every count of the result is written explicitly: `Ca(OH)2 -> Ca1O2H2`.
pub fn expand_to_string(formula: &str) -> Result<String, FormulaError> {
    if !formula.contains('(') {
        return Ok(formula.to_string());
    }
    let tokens = expand(formula)?;
    Ok(tokens.iter().map(|token| token.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_single_group() {
        assert_eq!(expand_to_string("Ca(OH)2").unwrap(), "Ca1O2H2");
        assert_eq!(expand_to_string("Al2(SO4)3").unwrap(), "Al2S3O12");
        assert_eq!(expand_to_string("Na(NO3)2").unwrap(), "Na1N2O6");
    }

    #[test]
    fn test_group_without_multiplier() {
        assert_eq!(expand_to_string("(NH4)Cl").unwrap(), "N1H4Cl1");
    }

    #[test]
    fn test_nested_groups() {
        assert_eq!(expand_to_string("K4(Fe(CN)6)").unwrap(), "K4Fe1C6N6");
        assert_eq!(expand_to_string("((CH3)2)3").unwrap(), "C6H18");
    }

    #[test]
    fn test_fractional_multiplier() {
        let tokens = expand("(H2O)0.5").unwrap();
        assert_eq!(
            tokens,
            vec![FormulaToken::new("H", 1.0), FormulaToken::new("O", 0.5)]
        );
    }

    #[test]
    fn test_repeated_elements_keep_their_position() {
        assert_eq!(expand_to_string("(CH3)COOH").unwrap(), "C1H3C1O1O1H1");
        let elements: Vec<String> = expand("CH3COOH")
            .unwrap()
            .into_iter()
            .map(|token| token.element)
            .collect();
        assert_eq!(elements, vec!["C", "H", "C", "O", "O", "H"]);
    }

    #[test]
    fn test_formula_without_groups_is_unchanged() {
        for formula in ["H2O", "NaCl", "CH3COOH", "CH1.8O0.5N0.2", "Al2S3O12"] {
            assert_eq!(expand_to_string(formula).unwrap(), formula);
        }
    }

    #[test]
    fn test_expansion_is_idempotent() {
        for formula in ["Ca(OH)2", "Al2(SO4)3", "K4(Fe(CN)6)", "(H2O)0.5", "H2O"] {
            let once = expand_to_string(formula).unwrap();
            assert!(!once.contains('('));
            assert_eq!(expand_to_string(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_tree_shape() {
        let tree = parse_tree("Ca(OH)2").unwrap();
        assert_eq!(tree.len(), 2);
        match &tree[1] {
            FormulaNode::Group {
                children,
                multiplier,
            } => {
                assert_eq!(*multiplier, 2.0);
                assert_eq!(children.len(), 2);
            }
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_group_contributes_nothing() {
        assert_eq!(expand_to_string("H2()3O").unwrap(), "H2O1");
    }

    #[test]
    fn test_malformed_multiplier() {
        assert!(matches!(
            expand("(OH)."),
            Err(FormulaError::ComputationError(_))
        ));
    }
}
