/// Table of the 118 chemical elements: symbol, name, atomic number, standard atomic mass and category.
/// Lookups are case-sensitive: "Co" is cobalt, "CO" is carbon and oxygen.
pub mod periodic_table;
/// Parsing of a single chemical formula (e.g. "K4(Fe(CN)6)") into element counts.
/// Parenthesized groups are multiplied by the number after them and may be nested;
/// the order of elements is the order of their first appearance.
pub mod formula_parser;
/// Parsing of a whole equation: arrow normalization ("→", "=", "->"), splitting of sides on " + ",
/// leading coefficients and physical states "(s)", "(l)", "(g)", "(aq)".
pub mod equation_parser;
/// Checks of the raw equation string and of the parsed equation. Produces a report of
/// errors, warnings and infos; each error carries a code, a message and a suggestion.
pub mod validator;
/// The atom matrix: one row per element (sorted), one column per compound,
/// reactant entries positive, product entries negative.
pub mod atom_matrix;
/// eng
/// Balancing as linear algebra: the null space of the atom matrix is found by Gauss-Jordan
/// elimination to reduced row echelon form, then its first vector is turned into the smallest
/// positive integers.
/// ----------------------------------------------------------------
/// Constants of the numerical part (zero threshold, integer tolerance, multiplier search limit)
/// are taken from [`crate::settings::BalancerConfig`].
pub mod solver;
/// Rule-based classification: combustion, synthesis, decomposition, single and double replacement.
pub mod reaction_classifier;
/// Molar mass and mass percent composition of a formula.
pub mod molmass;
/// Text formatting: equations, Unicode subscripts, numbers and weights.
pub mod formatting;
/// # Examples
/// ```
/// use ChemBalancer::Chemistry::balancer::balance;
/// let result = balance("CH4 + O2 → CO2 + H2O").unwrap();
/// assert_eq!(result.balanced, "CH4 + 2O2 → CO2 + 2H2O");
/// ```
pub mod balancer;
/// Console tables of a balanced result
pub mod output;
pub mod errors;
mod balancer_tests;
