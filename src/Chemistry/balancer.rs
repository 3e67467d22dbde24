//! Balancing of a chemical equation given as text.
//!
//! The pipeline: string validation → parsing → structure validation → atom
//! matrix → null space → integer normalization → coefficients applied back to
//! the equation → step trace → molar masses → reaction type.
//!
//! # Examples
//! ```
//! use ChemBalancer::Chemistry::balancer::balance;
//! let result = balance("Fe + O2 → Fe2O3").unwrap();
//! assert_eq!(result.balanced, "4Fe + 3O2 → 2Fe2O3");
//! assert_eq!(result.coefficients, vec![4, 3, 2]);
//! ```
use crate::Chemistry::atom_matrix::AtomMatrix;
use crate::Chemistry::equation_parser::{ParsedEquation, count_element_on_side, parse_equation};
use crate::Chemistry::errors::EquationError;
use crate::Chemistry::formatting::format_equation;
use crate::Chemistry::molmass::{MolecularWeight, calculate_molar_mass};
use crate::Chemistry::reaction_classifier::{ReactionType, classify};
use crate::Chemistry::solver::{normalize, solve_matrix, verify};
use crate::Chemistry::validator::{
    ValidationIssue, ValidationReport, validate_equation, validate_equation_string,
};
use crate::settings::BalancerConfig;
use log::{debug, info, warn};
use serde::Serialize;

/// one entry of the explanation of how the equation was balanced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Vec<Vec<i64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<Vec<u64>>,
}

impl Step {
    fn text(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            matrix: None,
            coefficients: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub reaction_type: ReactionType,
    pub reaction_description: String,
    pub molecular_weights: Vec<MolecularWeight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancedResult {
    pub original: String,
    pub balanced: String,
    pub coefficients: Vec<u64>,
    /// row labels of the atom matrix, sorted
    pub elements: Vec<String>,
    pub steps: Vec<Step>,
    pub metadata: Metadata,
    /// non-fatal validation issues (warnings and infos)
    pub warnings: Vec<ValidationIssue>,
}

impl BalancedResult {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Stateless balancer; the only thing it holds is its configuration.
#[derive(Debug, Clone, Default)]
pub struct EquationBalancer {
    pub config: BalancerConfig,
}

impl EquationBalancer {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_config(config: BalancerConfig) -> Self {
        Self { config }
    }

    pub fn balance(&self, equation: &str) -> Result<BalancedResult, EquationError> {
        let string_report = validate_equation_string(equation);
        fail_on_error(&string_report)?;

        let parsed = parse_equation(equation)?;

        let structure_report = validate_equation(&parsed);
        fail_on_error(&structure_report)?;
        let mut warnings = string_report.notices();
        warnings.extend(structure_report.notices());
        for issue in &warnings {
            debug!("{:?} {}: {}", issue.severity, issue.code, issue.message);
        }

        let matrix = AtomMatrix::build(&parsed);
        debug!("atom matrix:\n{}", matrix);
        let raw = solve_matrix(&matrix, &self.config)?;
        let coefficients = normalize(&raw, &self.config)?;
        match verify(&matrix, &coefficients) {
            Ok(()) => {}
            Err(err) if self.config.strict => return Err(err.into()),
            Err(err) => warn!("coefficients {:?} do not balance: {}", coefficients, err),
        }

        let balanced_equation = apply_coefficients(&parsed, &coefficients);
        let original = format_equation(&parsed);
        let balanced = format_equation(&balanced_equation);
        let steps = generate_steps(&parsed, &balanced_equation, &matrix, &coefficients);
        let molecular_weights = parsed
            .compounds()
            .map(|compound| {
                calculate_molar_mass(&compound.formula).unwrap_or_else(|err| {
                    warn!("cannot weigh {}: {}", compound.formula, err);
                    MolecularWeight::placeholder(&compound.formula, compound.elements.clone())
                })
            })
            .collect();
        let reaction = classify(&parsed);

        info!("balanced {} as {}", original, balanced);
        Ok(BalancedResult {
            original,
            balanced,
            coefficients,
            elements: matrix.elements.clone(),
            steps,
            metadata: Metadata {
                reaction_type: reaction.reaction_type,
                reaction_description: reaction.description,
                molecular_weights,
            },
            warnings,
        })
    }
}

/// balances with the default configuration
pub fn balance(equation: &str) -> Result<BalancedResult, EquationError> {
    EquationBalancer::new().balance(equation)
}

fn fail_on_error(report: &ValidationReport) -> Result<(), EquationError> {
    match report.first_error() {
        Some(issue) => Err(issue.into()),
        None => Ok(()),
    }
}

/// copy of the equation with coefficients in reactant-then-product order
pub fn apply_coefficients(parsed: &ParsedEquation, coefficients: &[u64]) -> ParsedEquation {
    let mut balanced = parsed.clone();
    let compounds = balanced
        .reactants
        .iter_mut()
        .chain(balanced.products.iter_mut());
    for (compound, &coefficient) in compounds.zip(coefficients) {
        compound.coefficient = coefficient as usize;
    }
    balanced
}

fn generate_steps(
    original: &ParsedEquation,
    balanced: &ParsedEquation,
    matrix: &AtomMatrix,
    coefficients: &[u64],
) -> Vec<Step> {
    let elements = &matrix.elements;
    let side_counts = |equation: &ParsedEquation, element: &str| {
        (
            count_element_on_side(&equation.reactants, element),
            count_element_on_side(&equation.products, element),
        )
    };
    let mut steps = Vec::with_capacity(4);

    // 1) atom counts of the input
    let original_counts: Vec<(usize, usize)> =
        elements.iter().map(|el| side_counts(original, el)).collect();
    let count_list = elements
        .iter()
        .zip(&original_counts)
        .map(|(el, (r, p))| format!("{}: {} (reactants) vs {} (products)", el, r, p))
        .collect::<Vec<_>>()
        .join("\n");
    let already_balanced = original_counts.iter().all(|(r, p)| r == p);
    let verdict = if already_balanced {
        "The atom counts already match on both sides."
    } else {
        "The equation is not balanced because atom counts don't match."
    };
    steps.push(Step::text(
        "Count atoms on each side",
        format!("Original equation atom counts:\n{}\n\n{}", count_list, verdict),
    ));

    // 2) elements out of balance
    let imbalanced: Vec<String> = elements
        .iter()
        .zip(&original_counts)
        .filter(|(_, (r, p))| r != p)
        .map(|(el, (r, p))| format!("{}: {} → {}", el, r, p))
        .collect();
    let description = if imbalanced.is_empty() {
        "No imbalanced elements: every element already has the same count on both sides."
            .to_string()
    } else {
        format!(
            "Imbalanced elements:\n{}\n\nThese elements need coefficients to balance.",
            imbalanced.join("\n")
        )
    };
    steps.push(Step::text("Identify imbalanced elements", description));

    // 3) matrix and its solution
    let coefficient_list = coefficients
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    steps.push(Step {
        title: "Build atom matrix and solve".to_string(),
        description: format!(
            "Atom matrix (reactants positive, products negative):\n{}\nSolving using Gaussian elimination gives coefficients: [{}]",
            matrix, coefficient_list
        ),
        matrix: Some(matrix.to_rows()),
        coefficients: Some(coefficients.to_vec()),
    });

    // 4) verification with the final coefficients
    let mut all_match = true;
    let verify_list = elements
        .iter()
        .map(|el| {
            let (r, p) = side_counts(balanced, el);
            if r == p {
                format!("{}: {} = {} ✓", el, r, p)
            } else {
                all_match = false;
                format!("{}: {} ≠ {} ✗", el, r, p)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    let conclusion = if all_match {
        "All atoms are balanced! The equation satisfies the law of conservation of mass."
    } else {
        "Some atoms are not balanced: the equation could not be balanced as written."
    };
    steps.push(Step::text(
        "Verify balance",
        format!("Final atom counts:\n{}\n\n{}", verify_list, conclusion),
    ));
    steps
}
