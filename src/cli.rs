/// command line arguments of the chemcalc binary
pub mod cli_args;
/// batch report and interactive menu
pub mod cli_main;
