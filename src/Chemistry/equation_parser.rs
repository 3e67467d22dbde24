//! Splitting of an equation string into reactants and products.
//!
//! Accepted arrows are `→`, `->` and `=`. Each side is split on `+`, and every
//! compound token may carry a leading coefficient and a trailing state mark:
//! "2H2O(l)" is { formula: "H2O", coefficient: 2, state: l }.
use crate::Chemistry::errors::ParseError;
use crate::Chemistry::formula_parser::{ElementCount, MAX_COUNT, parse_formula};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

pub const CANONICAL_ARROW: &str = "->";

static ARROWS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"→|=").expect("valid arrow regex"));
static LEADING_COEFFICIENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)").expect("valid coefficient regex"));
static STATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((s|l|g|aq)\)$").expect("valid state regex"));

/// physical state mark of a compound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalState {
    S,
    L,
    G,
    Aq,
}

impl PhysicalState {
    pub fn from_mark(mark: &str) -> Option<Self> {
        match mark {
            "s" => Some(PhysicalState::S),
            "l" => Some(PhysicalState::L),
            "g" => Some(PhysicalState::G),
            "aq" => Some(PhysicalState::Aq),
            _ => None,
        }
    }
    pub fn as_str(&self) -> &'static str {
        match self {
            PhysicalState::S => "s",
            PhysicalState::L => "l",
            PhysicalState::G => "g",
            PhysicalState::Aq => "aq",
        }
    }
}

impl fmt::Display for PhysicalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.as_str())
    }
}

/// one compound of an equation side
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedCompound {
    pub formula: String,
    pub elements: Vec<ElementCount>,
    pub coefficient: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PhysicalState>,
}

impl ParsedCompound {
    pub fn count_of(&self, symbol: &str) -> usize {
        self.elements
            .iter()
            .find(|el| el.symbol == symbol)
            .map(|el| el.count)
            .unwrap_or(0)
    }
    pub fn contains(&self, symbol: &str) -> bool {
        self.elements.iter().any(|el| el.symbol == symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedEquation {
    pub reactants: Vec<ParsedCompound>,
    pub products: Vec<ParsedCompound>,
}

impl ParsedEquation {
    /// reactants first, then products
    pub fn compounds(&self) -> impl Iterator<Item = &ParsedCompound> {
        self.reactants.iter().chain(self.products.iter())
    }
    pub fn len(&self) -> usize {
        self.reactants.len() + self.products.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// replaces every arrow variant with "->" and splits on it
pub fn split_sides(equation: &str) -> Vec<String> {
    let normalized = ARROWS.replace_all(equation, CANONICAL_ARROW);
    normalized
        .split(CANONICAL_ARROW)
        .map(|side| side.to_string())
        .collect()
}

pub fn parse_equation(equation: &str) -> Result<ParsedEquation, ParseError> {
    let sides = split_sides(equation);
    if sides.len() < 2 {
        return Err(ParseError::MalformedEquation(
            "no arrow (→, -> or =) found".to_string(),
        ));
    }
    if sides.len() > 2 {
        return Err(ParseError::MalformedEquation(format!(
            "expected one arrow, found {}",
            sides.len() - 1
        )));
    }
    let reactants = parse_side(&sides[0])?;
    let products = parse_side(&sides[1])?;
    Ok(ParsedEquation {
        reactants,
        products,
    })
}

/// "2H2 + O2(g)" → two compounds; empty tokens are dropped
pub fn parse_side(side: &str) -> Result<Vec<ParsedCompound>, ParseError> {
    side.split('+')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_compound)
        .collect()
}

pub fn parse_compound(token: &str) -> Result<ParsedCompound, ParseError> {
    let mut formula = token.trim();
    let mut coefficient = 1;
    if let Some(cap) = LEADING_COEFFICIENT.captures(formula) {
        let digits = &cap[1];
        coefficient = digits
            .parse::<usize>()
            .ok()
            .filter(|&c| c <= MAX_COUNT)
            .ok_or_else(|| ParseError::MalformedFormula {
                formula: token.to_string(),
                position: 0,
                reason: "coefficient is too large".to_string(),
            })?;
        formula = formula[digits.len()..].trim();
    }
    let mut state = None;
    if let Some(cap) = STATE.captures(formula) {
        state = PhysicalState::from_mark(&cap[1]);
        let start = cap.get(0).map(|m| m.start()).unwrap_or(formula.len());
        formula = formula[..start].trim();
    }
    let elements = parse_formula(formula)?;
    Ok(ParsedCompound {
        formula: formula.to_string(),
        elements,
        coefficient,
        state,
    })
}

/// all element symbols of the equation, sorted alphabetically
pub fn unique_elements(equation: &ParsedEquation) -> Vec<String> {
    let set: BTreeSet<&str> = equation
        .compounds()
        .flat_map(|c| c.elements.iter().map(|el| el.symbol.as_str()))
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// total number of atoms of `symbol` on one side, taking coefficients into account;
/// saturates at `usize::MAX`
pub fn count_element_on_side(compounds: &[ParsedCompound], symbol: &str) -> usize {
    compounds
        .iter()
        .map(|c| c.count_of(symbol).saturating_mul(c.coefficient))
        .fold(0, usize::saturating_add)
}
