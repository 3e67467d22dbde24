//! Two-phase validation of an equation.
//!
//! [`validate_equation_string`] looks at the raw text before parsing,
//! [`validate_equation`] at the parsed structure before solving. Both return a
//! [`ValidationReport`]; the report fails if it holds at least one issue of
//! [`Severity::Error`]. Warnings and infos never stop the balancer.
use crate::Chemistry::equation_parser::{ParsedEquation, split_sides, unique_elements};
use crate::Chemistry::errors::{EquationError, ErrorCode};
use crate::Chemistry::periodic_table::is_valid_element;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid whitespace regex"));
static DIGITS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid digits regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    fn error(code: ErrorCode, message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }
    fn warning(code: ErrorCode, message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }
    fn info(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            code,
            message: message.into(),
            suggestion: None,
        }
    }
}

impl From<&ValidationIssue> for EquationError {
    fn from(issue: &ValidationIssue) -> Self {
        EquationError::new(issue.code, issue.message.clone(), issue.suggestion.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(|i| i.severity == Severity::Error)
    }
    pub fn first_error(&self) -> Option<&ValidationIssue> {
        self.issues.iter().find(|i| i.severity == Severity::Error)
    }
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(move |i| i.severity == severity)
    }
    /// everything that is not an error
    pub fn notices(&self) -> Vec<ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity != Severity::Error)
            .cloned()
            .collect()
    }
    fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }
}

pub fn validate_equation_string(equation: &str) -> ValidationReport {
    let mut report = ValidationReport::default();

    if equation.trim().is_empty() {
        report.push(ValidationIssue::error(
            ErrorCode::Empty,
            "Equation cannot be empty",
            "Enter a chemical equation like H2 + O2 → H2O",
        ));
        return report;
    }

    let has_arrow = equation.contains('→') || equation.contains("->") || equation.contains('=');
    if !has_arrow {
        report.push(ValidationIssue::error(
            ErrorCode::MissingArrow,
            "Equation must contain an arrow (→, ->, or =)",
            "Use →, ->, or = to separate reactants from products",
        ));
    }

    let sides = split_sides(equation);
    if sides.len() != 2 && has_arrow {
        report.push(ValidationIssue::error(
            ErrorCode::InvalidArrowCount,
            "Equation must have exactly one arrow separating reactants and products",
            "Remove extra arrows and use only one (→, ->, or =)",
        ));
    }

    if has_arrow && sides[0].trim().is_empty() {
        report.push(ValidationIssue::error(
            ErrorCode::EmptyReactants,
            "Reactants side cannot be empty",
            "Enter at least one reactant before the arrow",
        ));
    }
    if sides.len() >= 2 && sides[1].trim().is_empty() {
        report.push(ValidationIssue::error(
            ErrorCode::EmptyProducts,
            "Products side cannot be empty",
            "Enter at least one product after the arrow",
        ));
    }

    if let Some(position) = unbalanced_parenthesis(equation) {
        report.push(ValidationIssue::error(
            ErrorCode::UnbalancedParentheses,
            format!("Unbalanced parenthesis at position {}", position),
            "Check that every '(' has a matching ')'",
        ));
    }

    if sides.len() == 2 {
        let reactant_side = sides[0].trim();
        let product_side = sides[1].trim();
        if !reactant_side.contains('+') && MULTI_SPACE.is_match(reactant_side) {
            report.push(ValidationIssue::warning(
                ErrorCode::MissingReactantSeparator,
                "Multiple reactants detected without + separator",
                "Use + to separate compounds, e.g., H2 + O2",
            ));
        }
        if !product_side.contains('+') && MULTI_SPACE.is_match(product_side) {
            report.push(ValidationIssue::warning(
                ErrorCode::MissingProductSeparator,
                "Multiple products detected without + separator",
                "Use + to separate compounds, e.g., CO2 + H2O",
            ));
        }
    }
    report
}

// character position of the first ')' without a partner or of the last unclosed '('
fn unbalanced_parenthesis(text: &str) -> Option<usize> {
    let mut open = Vec::new();
    for (position, c) in text.chars().enumerate() {
        match c {
            '(' => open.push(position),
            ')' => {
                if open.pop().is_none() {
                    return Some(position);
                }
            }
            _ => {}
        }
    }
    open.pop()
}

pub fn validate_equation(parsed: &ParsedEquation) -> ValidationReport {
    let mut report = ValidationReport::default();

    if parsed.reactants.is_empty() {
        report.push(ValidationIssue::error(
            ErrorCode::NoReactants,
            "Equation must have at least one reactant",
            "Add at least one compound before the arrow",
        ));
    }
    if parsed.products.is_empty() {
        report.push(ValidationIssue::error(
            ErrorCode::NoProducts,
            "Equation must have at least one product",
            "Add at least one compound after the arrow",
        ));
    }

    for compound in parsed.compounds() {
        if compound.elements.is_empty() {
            report.push(ValidationIssue::error(
                ErrorCode::EmptyCompound,
                format!("\"{}\" contains no element symbols", compound.formula),
                "Element symbols start with an uppercase letter (e.g., H, He, Li)",
            ));
        }
    }

    for element in unique_elements(parsed) {
        if !is_valid_element(&element) {
            report.push(ValidationIssue::error(
                ErrorCode::UnknownElement,
                format!("Unknown element: \"{}\"", element),
                element_suggestion(&element),
            ));
        }
    }

    let reactant_elements: BTreeSet<&str> = parsed
        .reactants
        .iter()
        .flat_map(|c| c.elements.iter().map(|el| el.symbol.as_str()))
        .collect();
    let product_elements: BTreeSet<&str> = parsed
        .products
        .iter()
        .flat_map(|c| c.elements.iter().map(|el| el.symbol.as_str()))
        .collect();
    for element in reactant_elements.difference(&product_elements) {
        report.push(ValidationIssue::warning(
            ErrorCode::ElementOnlyInReactants,
            format!("Element \"{}\" appears in reactants but not in products", element),
            format!("Make sure \"{}\" is included on both sides of the equation", element),
        ));
    }
    for element in product_elements.difference(&reactant_elements) {
        report.push(ValidationIssue::warning(
            ErrorCode::ElementOnlyInProducts,
            format!("Element \"{}\" appears in products but not in reactants", element),
            format!("Make sure \"{}\" is included on both sides of the equation", element),
        ));
    }

    for compound in &parsed.reactants {
        if compound.coefficient == 0 {
            report.push(ValidationIssue::error(
                ErrorCode::ZeroCoefficientReactant,
                format!("Reactant \"{}\" has a coefficient of 0", compound.formula),
                "Remove the leading 0 from the compound",
            ));
        }
    }
    for compound in &parsed.products {
        if compound.coefficient == 0 {
            report.push(ValidationIssue::error(
                ErrorCode::ZeroCoefficientProduct,
                format!("Product \"{}\" has a coefficient of 0", compound.formula),
                "Remove the leading 0 from the compound",
            ));
        }
    }

    if parsed.compounds().any(|c| c.coefficient > 1) {
        report.push(ValidationIssue::info(
            ErrorCode::InputCoefficientIgnored,
            "Coefficients given in the input are recomputed by the balancer",
        ));
    }
    report
}

/// best-effort hint for a symbol missing from the periodic table
pub fn element_suggestion(element: &str) -> String {
    let typo = match element.to_uppercase().as_str() {
        "CL" => Some("Did you mean Cl (Chlorine)?"),
        "CO" => Some("Did you mean Co (Cobalt) or CO (Carbon monoxide)?"),
        "MG" => Some("Did you mean Mg (Magnesium)?"),
        "MN" => Some("Did you mean Mn (Manganese)?"),
        "AL" => Some("Did you mean Al (Aluminum)?"),
        "ZN" => Some("Did you mean Zn (Zinc)?"),
        "AG" => Some("Did you mean Ag (Silver)?"),
        "AU" => Some("Did you mean Au (Gold)?"),
        "FE" => Some("Did you mean Fe (Iron)?"),
        "CU" => Some("Did you mean Cu (Copper)?"),
        "NA" => Some("Did you mean Na (Sodium)?"),
        _ => None,
    };
    if let Some(typo) = typo {
        return typo.to_string();
    }
    if DIGITS_ONLY.is_match(element) {
        return "Elements should start with a letter, not a number".to_string();
    }
    if element.starts_with(|c: char| c.is_ascii_lowercase()) {
        return "Element symbols start with an uppercase letter (e.g., H, He, Li)".to_string();
    }
    let mut chars = element.chars();
    if let (Some(first), Some(second)) = (chars.next(), chars.next()) {
        // "Xx": maybe two separate one-letter symbols were meant
        let first = first.to_string();
        let second = second.to_uppercase().to_string();
        if chars.next().is_none() && is_valid_element(&first) && is_valid_element(&second) {
            return format!(
                "Did you mean {}{} ({} and {} as separate elements)?",
                first, second, first, second
            );
        }
    }
    "Check the spelling or use the periodic table to find the correct element symbol".to_string()
}
