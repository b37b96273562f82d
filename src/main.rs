use ChemCalc::Formula::analysis::Analyzer;
use ChemCalc::cli::cli_args;
use ChemCalc::cli::cli_main::{run_batch, run_interactive_menu};
use ChemCalc::settings::Settings;
use log::{error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io;
use std::process::ExitCode;

pub fn main() -> ExitCode {
    let cli = cli_args::parse();

    let mut settings = match Settings::load(&cli.config) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("cannot load {}: {}", cli.config.display(), err);
            return ExitCode::from(2);
        }
    };
    if let Some(level) = cli.log_level {
        settings.log_level = level;
    }
    let level = match settings.level_filter() {
        Ok(level) => level,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    };
    if let Err(err) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("logger not initialized: {}", err);
    }
    info!("settings: {:?}", settings);

    if cli.write_config {
        return match settings.save(&cli.config) {
            Ok(()) => {
                info!("settings written to {}", cli.config.display());
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!("cannot write {}: {}", cli.config.display(), err);
                ExitCode::from(2)
            }
        };
    }

    let analyzer = Analyzer::from_settings(&settings);
    if cli.formulas.is_empty() {
        return match run_interactive_menu(&analyzer) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!("menu aborted: {}", err);
                ExitCode::FAILURE
            }
        };
    }
    let stdout = io::stdout();
    match run_batch(&analyzer, &cli.formulas, cli.json, &mut stdout.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("cannot write report: {}", err);
            ExitCode::FAILURE
        }
    }
}
