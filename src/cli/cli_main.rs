use super::cli_examples::examples_menu;
use crate::Chemistry::balancer::EquationBalancer;
use crate::Chemistry::formatting::{format_chemical_formula, format_molecular_weight, format_number};
use crate::Chemistry::molmass::{calculate_molar_mass, percent_composition};
use crate::Chemistry::output::{pretty_print_result, weight_table};
use crate::settings::{BalancerConfig, ConfigError};
use log::{LevelFilter, error};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("option {0} expects a value")]
    MissingValue(String),
    #[error("unknown option {0}")]
    UnknownOption(String),
}

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CliArgs {
    pub equations: Vec<String>,
    pub weights: Vec<String>,
    pub json: bool,
    pub verbose: bool,
    pub config_path: Option<String>,
}

impl CliArgs {
    /// nothing to balance or weigh: the interactive menu is shown
    pub fn is_interactive(&self) -> bool {
        self.equations.is_empty() && self.weights.is_empty()
    }
}

/// parses everything after the program name
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs, CliError> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => parsed.json = true,
            "--verbose" | "-v" => parsed.verbose = true,
            "--weight" | "-w" => {
                let formula = args.next().ok_or(CliError::MissingValue(arg.clone()))?;
                parsed.weights.push(formula);
            }
            "--config" | "-c" => {
                let path = args.next().ok_or(CliError::MissingValue(arg.clone()))?;
                parsed.config_path = Some(path);
            }
            option if option.starts_with("--") => {
                return Err(CliError::UnknownOption(option.to_string()));
            }
            _ => parsed.equations.push(arg.clone()),
        }
    }
    Ok(parsed)
}

/// the config file if given, defaults otherwise; `--verbose` overrides the log level
pub fn load_config(args: &CliArgs) -> Result<BalancerConfig, ConfigError> {
    let mut config = match &args.config_path {
        Some(path) => BalancerConfig::from_json_file(path)?,
        None => BalancerConfig::default(),
    };
    if args.verbose {
        config.log_level = LevelFilter::Debug.to_string();
    }
    Ok(config)
}

/// Balances and weighs everything from the arguments. Returns the number of failures.
pub fn run_batch(args: &CliArgs, config: BalancerConfig) -> usize {
    let balancer = EquationBalancer::with_config(config);
    let mut failures = 0;
    for equation in &args.equations {
        match balancer.balance(equation) {
            Ok(result) if args.json => match result.to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    error!("cannot serialize result: {}", e);
                    failures += 1;
                }
            },
            Ok(result) => pretty_print_result(&result),
            Err(e) => {
                failures += 1;
                if args.json {
                    match serde_json::to_string_pretty(&e) {
                        Ok(json) => println!("{}", json),
                        Err(err) => error!("cannot serialize error: {}", err),
                    }
                } else {
                    print_error(equation, &e.to_string(), e.suggestion.as_deref());
                }
            }
        }
    }
    for formula in &args.weights {
        if !print_weight(formula) {
            failures += 1;
        }
    }
    failures
}

fn print_error(input: &str, message: &str, suggestion: Option<&str>) {
    println!("\x1b[31m{}: {}\x1b[0m", input, message);
    if let Some(suggestion) = suggestion {
        println!("\x1b[33mhint: {}\x1b[0m", suggestion);
    }
}

fn print_weight(formula: &str) -> bool {
    let weighed = calculate_molar_mass(formula)
        .and_then(|mw| percent_composition(formula).map(|composition| (mw, composition)));
    match weighed {
        Ok((mw, composition)) => {
            println!(
                "{}: {}",
                format_chemical_formula(formula),
                format_molecular_weight(mw.weight)
            );
            weight_table(&mw).printstd();
            for (symbol, percent) in composition {
                println!("{}: {} %", symbol, format_number(percent, 2));
            }
            true
        }
        Err(e) => {
            print_error(formula, &e.to_string(), None);
            false
        }
    }
}

pub fn run_interactive_menu(config: BalancerConfig) {
    let balancer = EquationBalancer::with_config(config);
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => {
                print!("\x1b[36mEquation: \x1b[0m");
                let _ = io::stdout().flush();
                let equation = get_user_input();
                match balancer.balance(equation.trim()) {
                    Ok(result) => pretty_print_result(&result),
                    Err(e) => print_error(equation.trim(), &e.to_string(), e.suggestion.as_deref()),
                }
            }
            "2" => {
                print!("\x1b[36mFormula: \x1b[0m");
                let _ = io::stdout().flush();
                print_weight(get_user_input().trim());
            }
            "3" => examples_menu(&balancer),
            "0" | "" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - prompts

Red (\x1b[31m) - errors
*/
fn show_main_menu() {
    println!("\x1b[34m\n ChemBalancer: balancing of chemical equations\n \x1b[0m");
    println!("\x1b[33m1. Balance an equation\x1b[0m");
    println!("\x1b[33m2. Molecular weight\x1b[0m");
    println!("\x1b[33m3. Examples\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    let _ = io::stdout().flush();
}

/// an empty string on end of input or read failure
pub(crate) fn get_user_input() -> String {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_line(&mut input) {
        error!("failed to read input: {}", e);
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let parsed = parse_args(args(&["--json", "H2 + O2 -> H2O", "-w", "H2O", "Fe + O2 = Fe2O3"]))
            .unwrap();
        assert!(parsed.json);
        assert!(!parsed.verbose);
        assert_eq!(parsed.equations, vec!["H2 + O2 -> H2O", "Fe + O2 = Fe2O3"]);
        assert_eq!(parsed.weights, vec!["H2O"]);
        assert!(!parsed.is_interactive());

        assert!(parse_args(Vec::new()).unwrap().is_interactive());
        assert_eq!(
            parse_args(args(&["--config"])),
            Err(CliError::MissingValue("--config".to_string()))
        );
        assert_eq!(
            parse_args(args(&["--fast"])),
            Err(CliError::UnknownOption("--fast".to_string()))
        );
    }

    #[test]
    fn test_load_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"strict": false}}"#).unwrap();
        let path = file.path().to_string_lossy().to_string();
        let parsed = parse_args(args(&["--config", &path, "--verbose"])).unwrap();
        let config = load_config(&parsed).unwrap();
        assert!(!config.strict);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_run_batch_counts_failures() {
        let parsed = parse_args(args(&[
            "--json",
            "H2 + O2 -> H2O",
            "Xx + O2 -> XxO2",
            "--weight",
            "Ca(OH)2",
            "--weight",
            "Qq",
        ]))
        .unwrap();
        assert_eq!(run_batch(&parsed, BalancerConfig::default()), 2);
    }
}
