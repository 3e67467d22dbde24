use ChemBalancer::Utils::logger::init_logger;
use ChemBalancer::cli::cli_main::{load_config, parse_args, run_batch, run_interactive_menu};
use log::LevelFilter;
use std::process::ExitCode;

pub fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!(
                "usage: ChemBalancer [--json] [--verbose] [--config <file>] [--weight <formula>] [\"H2 + O2 -> H2O\" ...]"
            );
            return ExitCode::from(2);
        }
    };
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            init_logger(LevelFilter::Warn);
            log::error!("{}", e);
            return ExitCode::from(2);
        }
    };
    init_logger(config.level_filter().unwrap_or(LevelFilter::Warn));

    if args.is_interactive() {
        run_interactive_menu(config);
        return ExitCode::SUCCESS;
    }
    if run_batch(&args, config) == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
