/// Module to calculate the molar mass and the mass composition of a chemical formula
use crate::Chemistry::errors::WeightError;
use crate::Chemistry::formula_parser::{ElementCount, parse_formula};
use crate::Chemistry::periodic_table::atomic_mass;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MolecularWeight {
    pub compound: String,
    /// g/mol
    pub weight: f64,
    pub breakdown: Vec<ElementCount>,
}

impl MolecularWeight {
    /// stand-in used when a compound cannot be weighed
    pub fn placeholder(compound: &str, breakdown: Vec<ElementCount>) -> Self {
        Self {
            compound: compound.to_string(),
            weight: 0.0,
            breakdown,
        }
    }
}

// Function to calculate the molar mass of a substance given its chemical formula
pub fn calculate_molar_mass(formula: &str) -> Result<MolecularWeight, WeightError> {
    let breakdown = parse_formula(formula)?;
    let mut weight = 0.0;
    for el in &breakdown {
        let mass =
            atomic_mass(&el.symbol).ok_or_else(|| WeightError::UnknownElement(el.symbol.clone()))?;
        weight += mass * el.count as f64;
    }
    Ok(MolecularWeight {
        compound: formula.to_string(),
        weight,
        breakdown,
    })
}

/// mass percent of every element, in the order of the breakdown
pub fn percent_composition(formula: &str) -> Result<Vec<(String, f64)>, WeightError> {
    let molecular_weight = calculate_molar_mass(formula)?;
    let total = molecular_weight.weight;
    molecular_weight
        .breakdown
        .iter()
        .map(|el| {
            let mass = atomic_mass(&el.symbol)
                .ok_or_else(|| WeightError::UnknownElement(el.symbol.clone()))?;
            let percent = if total > 0.0 {
                mass * el.count as f64 / total * 100.0
            } else {
                0.0
            };
            Ok((el.symbol.clone(), percent))
        })
        .collect()
}
