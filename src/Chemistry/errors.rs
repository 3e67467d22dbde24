//! Error types of the balancing pipeline.
//!
//! Every stage has its own error enum. All of them are converted into an
//! [`EquationError`], the code/message/suggestion triple that front-ends render.
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Machine-readable codes for everything the validator or the pipeline can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Empty,
    MissingArrow,
    InvalidArrowCount,
    EmptyReactants,
    EmptyProducts,
    UnbalancedParentheses,
    MissingReactantSeparator,
    MissingProductSeparator,
    NoReactants,
    NoProducts,
    EmptyCompound,
    UnknownElement,
    ElementOnlyInReactants,
    ElementOnlyInProducts,
    ZeroCoefficientReactant,
    ZeroCoefficientProduct,
    InputCoefficientIgnored,
    MalformedFormula,
    MalformedEquation,
    NoSolution,
    Unbalanceable,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Empty => "EMPTY",
            ErrorCode::MissingArrow => "MISSING_ARROW",
            ErrorCode::InvalidArrowCount => "INVALID_ARROW_COUNT",
            ErrorCode::EmptyReactants => "EMPTY_REACTANTS",
            ErrorCode::EmptyProducts => "EMPTY_PRODUCTS",
            ErrorCode::UnbalancedParentheses => "UNBALANCED_PARENTHESES",
            ErrorCode::MissingReactantSeparator => "MISSING_REACTANT_SEPARATOR",
            ErrorCode::MissingProductSeparator => "MISSING_PRODUCT_SEPARATOR",
            ErrorCode::NoReactants => "NO_REACTANTS",
            ErrorCode::NoProducts => "NO_PRODUCTS",
            ErrorCode::EmptyCompound => "EMPTY_COMPOUND",
            ErrorCode::UnknownElement => "UNKNOWN_ELEMENT",
            ErrorCode::ElementOnlyInReactants => "ELEMENT_ONLY_IN_REACTANTS",
            ErrorCode::ElementOnlyInProducts => "ELEMENT_ONLY_IN_PRODUCTS",
            ErrorCode::ZeroCoefficientReactant => "ZERO_COEFFICIENT_REACTANT",
            ErrorCode::ZeroCoefficientProduct => "ZERO_COEFFICIENT_PRODUCT",
            ErrorCode::InputCoefficientIgnored => "INPUT_COEFFICIENT_IGNORED",
            ErrorCode::MalformedFormula => "MALFORMED_FORMULA",
            ErrorCode::MalformedEquation => "MALFORMED_EQUATION",
            ErrorCode::NoSolution => "NO_SOLUTION",
            ErrorCode::Unbalanceable => "UNBALANCEABLE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The error returned to callers of the balancer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("[{code}] {message}")]
pub struct EquationError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl EquationError {
    pub fn new(code: ErrorCode, message: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            code,
            message: message.into(),
            suggestion,
        }
    }
}

/// errors of the formula and equation parsers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed formula '{formula}' at position {position}: {reason}")]
    MalformedFormula {
        formula: String,
        position: usize,
        reason: String,
    },
    #[error("malformed equation: {0}")]
    MalformedEquation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightError {
    #[error("unknown element: {0}")]
    UnknownElement(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// failures of the null-space solve and the integer normalization
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("the atom matrix has no non-trivial null space")]
    NoNullSpace,
    #[error("the solution vector is zero everywhere")]
    AllZero,
    #[error("coefficient of compound #{index} normalizes to zero")]
    ZeroCoefficient { index: usize },
    #[error("no multiplier up to {max_multiplier} turns the solution into integers")]
    NoIntegerRatio { max_multiplier: u64 },
    #[error("the equation has {dimension} independent balancings")]
    MultipleSolutions { dimension: usize },
    #[error("element {element} is not conserved: {reactants} on the left, {products} on the right")]
    NotConserved {
        element: String,
        reactants: i64,
        products: i64,
    },
}

impl From<ParseError> for EquationError {
    fn from(err: ParseError) -> Self {
        match &err {
            ParseError::MalformedFormula { .. } => EquationError::new(
                ErrorCode::MalformedFormula,
                err.to_string(),
                Some("Check that every '(' has a matching ')'".to_string()),
            ),
            ParseError::MalformedEquation(_) => EquationError::new(
                ErrorCode::MalformedEquation,
                err.to_string(),
                Some("Use the format: reactants → products".to_string()),
            ),
        }
    }
}

impl From<SolverError> for EquationError {
    fn from(err: SolverError) -> Self {
        match &err {
            SolverError::MultipleSolutions { dimension } => EquationError::new(
                ErrorCode::NoSolution,
                format!(
                    "The equation has no unique balancing: {} independent reactions are combined in it",
                    dimension
                ),
                Some(
                    "Split it into separate reactions that each balance in only one way"
                        .to_string(),
                ),
            ),
            SolverError::NoIntegerRatio { .. } => EquationError::new(
                ErrorCode::NoSolution,
                format!("The equation cannot be balanced with small integers: {}", err),
                Some("Increase max_multiplier in the configuration".to_string()),
            ),
            SolverError::NoNullSpace | SolverError::AllZero | SolverError::ZeroCoefficient { .. } => {
                EquationError::new(
                    ErrorCode::NoSolution,
                    format!("The equation cannot be balanced: {}", err),
                    Some(
                        "Check that every compound is written correctly and that the reaction is possible"
                            .to_string(),
                    ),
                )
            }
            SolverError::NotConserved { element, .. } => EquationError::new(
                ErrorCode::Unbalanceable,
                format!("The equation cannot be balanced: {}", err),
                Some(format!(
                    "Make sure \"{}\" is included on both sides of the equation",
                    element
                )),
            ),
        }
    }
}

impl From<WeightError> for EquationError {
    fn from(err: WeightError) -> Self {
        match err {
            WeightError::UnknownElement(symbol) => EquationError::new(
                ErrorCode::UnknownElement,
                format!("Unknown element: \"{}\"", symbol),
                Some(
                    "Check the spelling or use the periodic table to find the correct element symbol"
                        .to_string(),
                ),
            ),
            WeightError::Parse(parse) => parse.into(),
        }
    }
}
