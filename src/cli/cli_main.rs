use crate::Formula::analysis::{AnalysisResult, Analyzer};
use crate::Formula::expander::expand_to_string;
use log::error;
use serde::Serialize;
use std::io::{self, BufRead, Write};

/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - prompts

Red (\x1b[31m) - rejected formulas and errors

Reset (\x1b[0m) - Returns to normal color after each colored section
*/

/// One line of the batch report: either a result or the reason the formula was rejected
#[derive(Debug, Serialize)]
pub struct BatchEntry<'a> {
    pub formula: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Analyzes every formula and writes either a JSON array or one table per formula.
/// Surrounding whitespace of an argument is dropped. Returns false when at least one
/// formula failed.
pub fn run_batch<W: Write>(
    analyzer: &Analyzer,
    formulas: &[String],
    json: bool,
    out: &mut W,
) -> io::Result<bool> {
    let mut entries = Vec::with_capacity(formulas.len());
    for formula in formulas {
        let formula = formula.trim();
        let entry = match analyzer.analyze(formula) {
            Ok(result) => BatchEntry {
                formula,
                result: Some(result),
                error: None,
            },
            Err(err) => {
                error!("{}: {}", formula, err);
                BatchEntry {
                    formula,
                    result: None,
                    error: Some(err.to_string()),
                }
            }
        };
        entries.push(entry);
    }
    let all_ok = entries.iter().all(|entry| entry.error.is_none());

    if json {
        let text = serde_json::to_string_pretty(&entries).map_err(io::Error::other)?;
        writeln!(out, "{}", text)?;
        return Ok(all_ok);
    }
    for entry in &entries {
        match (&entry.result, &entry.error) {
            (Some(result), _) => {
                result.to_table().print(out)?;
            }
            (None, Some(err)) => writeln!(out, "\x1b[31m{}: {}\x1b[0m", entry.formula, err)?,
            (None, None) => {}
        }
    }
    Ok(all_ok)
}

/// Interactive menu over stdin/stdout
pub fn run_interactive_menu(analyzer: &Analyzer) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    menu_loop(analyzer, &mut stdin.lock(), &mut stdout.lock())
}

pub fn menu_loop<R: BufRead, W: Write>(
    analyzer: &Analyzer,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        show_main_menu(out)?;
        let Some(choice) = get_user_input(input)? else {
            writeln!(out, "Goodbye!")?;
            return Ok(());
        };

        match choice.trim() {
            "1" => analyze_menu(analyzer, input, out)?,
            "2" => validate_menu(analyzer, input, out)?,
            "3" => expand_menu(analyzer, input, out)?,
            "4" => density_menu(analyzer, input, out)?,
            "0" => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
}

fn show_main_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\x1b[34m\n ChemCalc: molar mass, compound type, equivalent weight and density \n \x1b[0m"
    )?;
    writeln!(out, "\x1b[33m1. Analyze compound\x1b[0m")?;
    writeln!(out, "\x1b[33m2. Validate formula\x1b[0m")?;
    writeln!(out, "\x1b[33m3. Expand formula\x1b[0m")?;
    writeln!(out, "\x1b[33m4. Estimate density\x1b[0m")?;
    writeln!(out, "\x1b[33m0. Exit\x1b[0m")?;
    write!(out, "\x1b[36mEnter your choice: \x1b[0m")?;
    out.flush()
}

/// None at end of input
fn get_user_input<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn ask_formula<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<String>> {
    write!(out, "\x1b[36mEnter formula: \x1b[0m")?;
    out.flush()?;
    Ok(get_user_input(input)?.map(|line| line.trim().to_string()))
}

fn analyze_menu<R: BufRead, W: Write>(
    analyzer: &Analyzer,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(formula) = ask_formula(input, out)? else {
        return Ok(());
    };
    match analyzer.analyze(&formula) {
        Ok(result) => {
            result.to_table().print(out)?;
        }
        Err(err) => writeln!(out, "\x1b[31m{}\x1b[0m", err)?,
    }
    Ok(())
}

fn validate_menu<R: BufRead, W: Write>(
    analyzer: &Analyzer,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(formula) = ask_formula(input, out)? else {
        return Ok(());
    };
    match analyzer.check(&formula) {
        Ok(()) => writeln!(out, "{} is a valid formula", formula),
        Err(err) => writeln!(out, "\x1b[31m{}\x1b[0m", err),
    }
}

fn expand_menu<R: BufRead, W: Write>(
    analyzer: &Analyzer,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(formula) = ask_formula(input, out)? else {
        return Ok(());
    };
    let expanded = analyzer
        .check(&formula)
        .and_then(|_| expand_to_string(&formula));
    match expanded {
        Ok(expanded) => writeln!(out, "{} -> {}", formula, expanded),
        Err(err) => writeln!(out, "\x1b[31m{}\x1b[0m", err),
    }
}

fn density_menu<R: BufRead, W: Write>(
    analyzer: &Analyzer,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(formula) = ask_formula(input, out)? else {
        return Ok(());
    };
    let estimate = analyzer
        .molar_mass(&formula)
        .and_then(|molar_mass| analyzer.estimate_density(&formula, molar_mass));
    match estimate {
        Ok(estimate) => writeln!(
            out,
            "density of {}: {:.3} g/mL ({:?})",
            formula, estimate.value, estimate.source
        ),
        Err(err) => writeln!(out, "\x1b[31m{}\x1b[0m", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_menu(script: &str) -> String {
        let analyzer = Analyzer::new();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        menu_loop(&analyzer, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_menu_exit() {
        let output = run_menu("0\n");
        assert!(output.contains("1. Analyze compound"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_menu_ends_at_end_of_input() {
        let output = run_menu("");
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_menu_analyze_and_expand() {
        let output = run_menu("1\n  H2SO4 \n3\nAl2(SO4)3\n0\n");
        assert!(output.contains("Equivalent weight"));
        assert!(output.contains("1.840 g/mL"));
        assert!(output.contains("Al2(SO4)3 -> Al2S3O12"));
    }

    #[test]
    fn test_menu_validate_and_density() {
        let output = run_menu("2\nXx2\n2\nNaCl\n4\nCO2\n9\n0\n");
        assert!(output.contains("Invalid formula"));
        assert!(output.contains("NaCl is a valid formula"));
        assert!(output.contains("density of CO2: 1.048 g/mL (Estimated)"));
        assert!(output.contains("Invalid choice"));
    }

    #[test]
    fn test_batch_json() {
        let analyzer = Analyzer::new();
        let formulas = vec!["H2O".to_string(), "Xx2".to_string()];
        let mut out = Vec::new();
        let all_ok = run_batch(&analyzer, &formulas, true, &mut out).unwrap();
        assert!(!all_ok);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["result"]["compound_class"]["type"], "acid");
        assert_eq!(entries[0]["result"]["density_source"], "reference");
        assert!(entries[1]["error"].as_str().unwrap().starts_with("Invalid formula"));
        assert!(entries[1].get("result").is_none());
    }

    #[test]
    fn test_batch_tables() {
        let analyzer = Analyzer::new();
        let formulas = vec![" Ca(OH)2\n".to_string()];
        let mut out = Vec::new();
        assert!(run_batch(&analyzer, &formulas, false, &mut out).unwrap());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Ca(OH)2"));
        assert!(!text.contains("Invalid formula"));
        assert!(text.contains("(approximate)"));
    }
}
