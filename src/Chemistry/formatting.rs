//! Text formatting of formulas, equations and weights.
use crate::Chemistry::equation_parser::{ParsedCompound, ParsedEquation};

pub const DISPLAY_ARROW: &str = "→";

/// "2H2O(l)": the coefficient is written only when it is greater than 1
pub fn format_compound(compound: &ParsedCompound) -> String {
    let coefficient = if compound.coefficient > 1 {
        compound.coefficient.to_string()
    } else {
        String::new()
    };
    let state = compound.state.map(|s| s.to_string()).unwrap_or_default();
    format!("{}{}{}", coefficient, compound.formula, state)
}

pub fn format_equation(equation: &ParsedEquation) -> String {
    let side = |compounds: &[ParsedCompound]| {
        compounds
            .iter()
            .map(format_compound)
            .collect::<Vec<_>>()
            .join(" + ")
    };
    format!(
        "{} {} {}",
        side(&equation.reactants),
        DISPLAY_ARROW,
        side(&equation.products)
    )
}

fn subscript(digit: char) -> char {
    match digit {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        other => other,
    }
}

/// H2O → H₂O
pub fn format_chemical_formula(formula: &str) -> String {
    formula.chars().map(subscript).collect()
}

/// subscripts every formula of an equation but keeps leading coefficients as they are:
/// "2H2 + O2 → 2H2O" → "2H₂ + O₂ → 2H₂O"
pub fn format_chemical_equation(equation: &str) -> String {
    let mut out = String::with_capacity(equation.len());
    // digits at the start of a token are coefficients
    let mut token_start = true;
    for c in equation.chars() {
        if c.is_ascii_digit() && !token_start {
            out.push(subscript(c));
        } else {
            out.push(c);
        }
        if c.is_whitespace() || c == '+' || c == '>' || c == '=' || c == '→' {
            token_start = true;
        } else if !c.is_ascii_digit() {
            token_start = false;
        }
    }
    out
}

pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

pub fn format_molecular_weight(weight: f64) -> String {
    format!("{} g/mol", format_number(weight, 3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chemistry::equation_parser::parse_equation;

    #[test]
    fn test_format_equation() {
        let eq = parse_equation("2H2(g) + O2(g) = 2H2O(l)").unwrap();
        assert_eq!(format_equation(&eq), "2H2(g) + O2(g) → 2H2O(l)");
        let eq = parse_equation("1Fe + O2 -> Fe2O3").unwrap();
        assert_eq!(format_equation(&eq), "Fe + O2 → Fe2O3");
    }

    #[test]
    fn test_subscripts() {
        assert_eq!(format_chemical_formula("Ca(OH)2"), "Ca(OH)₂");
        assert_eq!(format_chemical_formula("C6H12O6"), "C₆H₁₂O₆");
        assert_eq!(
            format_chemical_equation("2H2 + O2 → 2H2O"),
            "2H₂ + O₂ → 2H₂O"
        );
        assert_eq!(
            format_chemical_equation("4Fe + 3O2 -> 2Fe2O3"),
            "4Fe + 3O₂ -> 2Fe₂O₃"
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(format_number(74.09268, 2), "74.09");
        assert_eq!(format_molecular_weight(74.09268), "74.093 g/mol");
    }
}
