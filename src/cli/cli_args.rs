use clap::Parser;
use std::path::PathBuf;

use crate::settings::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(
    name = "chemcalc",
    about = "Molar mass, compound type, equivalent weight and density of chemical formulas",
    version
)]
pub struct Cli {
    /// Formulas to analyze (interactive menu if omitted)
    #[arg(value_name = "FORMULA")]
    pub formulas: Vec<String>,

    /// Print results as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Settings file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Override the log level from the settings file
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write the effective settings to the settings file and exit
    #[arg(long)]
    pub write_config: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formulas_and_flags() {
        let cli = Cli::parse_from(["chemcalc", "H2O", "Ca(OH)2", "--json"]);
        assert_eq!(cli.formulas, vec!["H2O", "Ca(OH)2"]);
        assert!(cli.json);
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert_eq!(cli.log_level, None);
        assert!(!cli.write_config);
    }

    #[test]
    fn test_no_formulas_means_interactive() {
        let cli = Cli::parse_from(["chemcalc", "-c", "my.json", "--log-level", "debug"]);
        assert!(cli.formulas.is_empty());
        assert_eq!(cli.config, PathBuf::from("my.json"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_write_config_flag() {
        let cli = Cli::parse_from(["chemcalc", "--write-config", "--log-level", "warn"]);
        assert!(cli.write_config);
        assert!(cli.formulas.is_empty());
    }
}
