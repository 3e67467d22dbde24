use super::cli_main::get_user_input;
use crate::Chemistry::balancer::EquationBalancer;
use crate::Chemistry::output::pretty_print_result;
use std::io::{self, Write};

pub const EXAMPLE_EQUATIONS: [(&str, &str); 6] = [
    ("Water synthesis", "H2 + O2 → H2O"),
    ("Methane combustion", "CH4 + O2 → CO2 + H2O"),
    ("Rusting of iron", "Fe + O2 → Fe2O3"),
    ("Neutralization", "Ca(OH)2 + HCl → CaCl2 + H2O"),
    ("Glucose oxidation", "C6H12O6(s) + O2(g) -> CO2(g) + H2O(l)"),
    (
        "Permanganate titration",
        "KMnO4 + HCl -> KCl + MnCl2 + H2O + Cl2",
    ),
];

pub fn examples_menu(balancer: &EquationBalancer) {
    loop {
        println!("\n=== Examples ===");
        for (i, (name, equation)) in EXAMPLE_EQUATIONS.iter().enumerate() {
            println!("{}. {}: {}", i + 1, name, equation);
        }
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        let choice = get_user_input();
        let choice = choice.trim();
        if choice == "0" || choice.is_empty() {
            break;
        }
        match choice.parse::<usize>() {
            Ok(n) if (1..=EXAMPLE_EQUATIONS.len()).contains(&n) => {
                match balancer.balance(EXAMPLE_EQUATIONS[n - 1].1) {
                    Ok(result) => pretty_print_result(&result),
                    Err(e) => println!("{}", e),
                }
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_balance() {
        let balancer = EquationBalancer::new();
        for (name, equation) in EXAMPLE_EQUATIONS {
            assert!(balancer.balance(equation).is_ok(), "{}", name);
        }
        let result = balancer.balance(EXAMPLE_EQUATIONS[5].1).unwrap();
        assert_eq!(result.coefficients, vec![2, 16, 2, 2, 8, 5]);
    }
}
