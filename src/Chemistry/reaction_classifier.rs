//! Coarse classification of a reaction by the shape of its equation.
//!
//! Rules are tried in order, first match wins:
//! combustion, synthesis, decomposition, single replacement, double replacement.
use crate::Chemistry::equation_parser::ParsedEquation;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReactionType {
    Synthesis,
    Decomposition,
    SingleReplacement,
    DoubleReplacement,
    Combustion,
    Unknown,
}

impl ReactionType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ReactionType::Synthesis => "Synthesis",
            ReactionType::Decomposition => "Decomposition",
            ReactionType::SingleReplacement => "Single Replacement",
            ReactionType::DoubleReplacement => "Double Replacement",
            ReactionType::Combustion => "Combustion",
            ReactionType::Unknown => "Unknown",
        }
    }
    pub fn description(&self) -> &'static str {
        match self {
            ReactionType::Combustion => {
                "Combustion reaction - a substance reacts with oxygen to produce carbon dioxide and water, releasing energy."
            }
            ReactionType::Synthesis => {
                "Synthesis (Combination) reaction - two or more substances combine to form a single product."
            }
            ReactionType::Decomposition => {
                "Decomposition reaction - a single compound breaks down into two or more simpler substances."
            }
            ReactionType::SingleReplacement => {
                "Single Replacement reaction - one element replaces another element in a compound."
            }
            ReactionType::DoubleReplacement => {
                "Double Replacement reaction - the positive and negative ions of two compounds switch places."
            }
            ReactionType::Unknown => "Complex or unclassified reaction type.",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionInfo {
    #[serde(rename = "type")]
    pub reaction_type: ReactionType,
    pub description: String,
}

pub fn classify(equation: &ParsedEquation) -> ReactionInfo {
    let reaction_type = classify_type(equation);
    ReactionInfo {
        reaction_type,
        description: reaction_type.description().to_string(),
    }
}

fn classify_type(equation: &ParsedEquation) -> ReactionType {
    let n_reactants = equation.reactants.len();
    let n_products = equation.products.len();

    let oxygen_in_reactants = equation.reactants.iter().any(|c| c.contains("O"));
    let has_co2 = equation.products.iter().any(|c| c.formula == "CO2");
    let has_water = equation
        .products
        .iter()
        .any(|c| c.formula == "H2O" || c.formula == "HOH");
    if oxygen_in_reactants && has_co2 && has_water {
        return ReactionType::Combustion;
    }
    if n_reactants >= 2 && n_products == 1 {
        return ReactionType::Synthesis;
    }
    if n_reactants == 1 && n_products >= 2 {
        return ReactionType::Decomposition;
    }
    if n_reactants == 2 && n_products == 2 {
        let single_element = equation
            .reactants
            .iter()
            .filter(|c| c.elements.len() == 1)
            .count();
        if single_element == 1 {
            return ReactionType::SingleReplacement;
        }
        let multi_element = equation
            .reactants
            .iter()
            .filter(|c| c.elements.len() >= 2)
            .count();
        if multi_element == 2 {
            return ReactionType::DoubleReplacement;
        }
    }
    ReactionType::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chemistry::equation_parser::parse_equation;

    fn kind(equation: &str) -> ReactionType {
        classify(&parse_equation(equation).unwrap()).reaction_type
    }

    #[test]
    fn test_classification() {
        assert_eq!(kind("CH4 + O2 -> CO2 + H2O"), ReactionType::Combustion);
        assert_eq!(kind("C3H8 + O2 -> CO2 + HOH"), ReactionType::Combustion);
        assert_eq!(kind("H2 + O2 -> H2O"), ReactionType::Synthesis);
        assert_eq!(kind("CaCO3 -> CaO + CO2"), ReactionType::Decomposition);
        assert_eq!(kind("Zn + CuSO4 -> ZnSO4 + Cu"), ReactionType::SingleReplacement);
        assert_eq!(
            kind("AgNO3 + NaCl -> AgCl + NaNO3"),
            ReactionType::DoubleReplacement
        );
        assert_eq!(kind("H2 + Cl2 -> HCl + Cl"), ReactionType::Unknown);
        assert_eq!(kind("C2H6O -> CH3OCH3"), ReactionType::Unknown);
    }

    #[test]
    fn test_combustion_takes_precedence() {
        // would be a decomposition by shape, but CO2 + H2O with oxygen on the left wins
        assert_eq!(kind("H2CO3 -> CO2 + H2O"), ReactionType::Combustion);
    }

    #[test]
    fn test_serialization_and_names() {
        let info = classify(&parse_equation("Zn + CuSO4 -> ZnSO4 + Cu").unwrap());
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "single-replacement");
        assert_eq!(ReactionType::DoubleReplacement.to_string(), "Double Replacement");
    }
}
