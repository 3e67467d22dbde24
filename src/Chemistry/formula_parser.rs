//! Module to parse a chemical formula into its atomic composition
//!
//! Handles two-letter element symbols, multi-digit counts, nested parentheses
//! like Ca(OH)2, Al2(SO4)3 or K4(Fe(CN)6) and a trailing physical-state mark
//! like (s), (l), (g), (aq).
use crate::Chemistry::errors::ParseError;
use log::debug;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static STATE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((s|l|g|aq)\)\s*$").expect("valid state regex"));

/// upper bound for any subscript, group multiplier, coefficient or accumulated count
pub const MAX_COUNT: usize = u32::MAX as usize;

/// number of atoms of one element in a formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementCount {
    pub symbol: String,
    pub count: usize,
}

impl ElementCount {
    pub fn new(symbol: &str, count: usize) -> Self {
        Self {
            symbol: symbol.to_string(),
            count,
        }
    }
}

/// removes a trailing (s), (l), (g) or (aq) mark
pub fn strip_state_mark(formula: &str) -> &str {
    match STATE_SUFFIX.find(formula) {
        Some(found) => formula[..found.start()].trim_end(),
        None => formula,
    }
}

/// Parses a formula and returns element counts in order of first appearance.
/// The same element met several times (e.g. in different groups) is summed up.
pub fn parse_formula(formula: &str) -> Result<Vec<ElementCount>, ParseError> {
    let cleaned = strip_state_mark(formula.trim());
    let chars: Vec<char> = cleaned.chars().collect();
    let mut counts: Vec<ElementCount> = Vec::new();
    parse_group(&chars, 0, 1, cleaned, &mut counts)?;
    debug!("parsed formula {} into {:?}", formula, counts);
    Ok(counts)
}

fn malformed(formula: &str, position: usize, reason: &str) -> ParseError {
    ParseError::MalformedFormula {
        formula: formula.to_string(),
        position,
        reason: reason.to_string(),
    }
}

// reads a run of digits starting at `start`, returns (value, position after the run)
fn read_number(
    chars: &[char],
    start: usize,
    offset: usize,
    formula: &str,
) -> Result<(Option<usize>, usize), ParseError> {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    if end == start {
        return Ok((None, end));
    }
    let digits: String = chars[start..end].iter().collect();
    let value = digits
        .parse::<usize>()
        .ok()
        .filter(|&v| v <= MAX_COUNT)
        .ok_or_else(|| malformed(formula, offset + start, "count is too large"))?;
    Ok((Some(value), end))
}

/// `a * b` if it stays within [`MAX_COUNT`]
fn bounded_mul(a: usize, b: usize) -> Option<usize> {
    a.checked_mul(b).filter(|&v| v <= MAX_COUNT)
}

fn add_count(
    counts: &mut Vec<ElementCount>,
    symbol: &str,
    count: usize,
    formula: &str,
    position: usize,
) -> Result<(), ParseError> {
    match counts.iter_mut().find(|el| el.symbol == symbol) {
        Some(existing) => {
            existing.count = existing
                .count
                .checked_add(count)
                .filter(|&v| v <= MAX_COUNT)
                .ok_or_else(|| malformed(formula, position, "count is too large"))?;
        }
        None => counts.push(ElementCount::new(symbol, count)),
    }
    Ok(())
}

// `chars` is the group body, `offset` its position in the whole formula (for error reporting),
// `multiplier` the product of all enclosing group multipliers
fn parse_group(
    chars: &[char],
    offset: usize,
    multiplier: usize,
    formula: &str,
    counts: &mut Vec<ElementCount>,
) -> Result<(), ParseError> {
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '(' {
            // find matching closing bracket
            let mut depth = 1;
            let mut j = i + 1;
            while j < chars.len() {
                match chars[j] {
                    '(' => depth += 1,
                    ')' => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                }
                j += 1;
            }
            if depth != 0 {
                return Err(malformed(formula, offset + i, "unmatched '('"));
            }
            let (group_multiplier, after) = read_number(chars, j + 1, offset, formula)?;
            let group_multiplier = group_multiplier.unwrap_or(1);
            let inner = bounded_mul(multiplier, group_multiplier)
                .ok_or_else(|| malformed(formula, offset + j, "count is too large"))?;
            parse_group(&chars[i + 1..j], offset + i + 1, inner, formula, counts)?;
            i = after;
        } else if c == ')' {
            return Err(malformed(formula, offset + i, "unmatched ')'"));
        } else if c.is_ascii_uppercase() {
            let mut symbol = c.to_string();
            i += 1;
            if i < chars.len() && chars[i].is_ascii_lowercase() {
                symbol.push(chars[i]);
                i += 1;
            }
            let (count, after) = read_number(chars, i, offset, formula)?;
            let count = bounded_mul(count.unwrap_or(1), multiplier)
                .ok_or_else(|| malformed(formula, offset + i, "count is too large"))?;
            add_count(counts, &symbol, count, formula, offset + i)?;
            i = after;
        } else {
            debug!(
                "skipping unexpected character '{}' at position {} of {}",
                c,
                offset + i,
                formula
            );
            i += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn as_map(counts: Vec<ElementCount>) -> HashMap<String, usize> {
        counts.into_iter().map(|el| (el.symbol, el.count)).collect()
    }

    #[test]
    fn test_parse_formula() {
        let expected_counts = HashMap::from([
            ("C".to_string(), 6),
            ("H".to_string(), 8),
            ("O".to_string(), 6),
        ]);
        assert_eq!(as_map(parse_formula("C6H8O6").unwrap()), expected_counts);

        let expected_counts = HashMap::from([
            ("Na".to_string(), 1),
            ("N".to_string(), 2),
            ("O".to_string(), 6),
        ]);
        assert_eq!(as_map(parse_formula("Na(NO3)2").unwrap()), expected_counts);

        let expected_counts = HashMap::from([("H".to_string(), 2), ("O".to_string(), 1)]);
        assert_eq!(as_map(parse_formula("H2O").unwrap()), expected_counts);

        let expected_counts = HashMap::from([
            ("C".to_string(), 5),
            ("H".to_string(), 7),
            ("O".to_string(), 2),
        ]);
        assert_eq!(as_map(parse_formula("C5H6OOH").unwrap()), expected_counts);
    }

    #[test]
    fn test_first_appearance_order() {
        let counts = parse_formula("Ca(OH)2").unwrap();
        assert_eq!(
            counts,
            vec![
                ElementCount::new("Ca", 1),
                ElementCount::new("O", 2),
                ElementCount::new("H", 2),
            ]
        );
    }

    #[test]
    fn test_nested_groups() {
        let counts = as_map(parse_formula("K4(Fe(CN)6)").unwrap());
        assert_eq!(counts["K"], 4);
        assert_eq!(counts["Fe"], 1);
        assert_eq!(counts["C"], 6);
        assert_eq!(counts["N"], 6);

        let counts = as_map(parse_formula("Al2(SO4)3").unwrap());
        assert_eq!(counts["Al"], 2);
        assert_eq!(counts["S"], 3);
        assert_eq!(counts["O"], 12);

        let counts = as_map(parse_formula("((CH3)2)3").unwrap());
        assert_eq!(counts["C"], 6);
        assert_eq!(counts["H"], 18);
    }

    #[test]
    fn test_state_mark_is_removed() {
        assert_eq!(strip_state_mark("H2O(l)"), "H2O");
        assert_eq!(strip_state_mark("NaCl(aq)"), "NaCl");
        assert_eq!(strip_state_mark("Ca(OH)2"), "Ca(OH)2");
        let counts = as_map(parse_formula("CO2(g)").unwrap());
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["O"], 2);
    }

    #[test]
    fn test_unmatched_parentheses() {
        let err = parse_formula("Ca(OH2").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedFormula { position: 2, .. }
        ));
        assert!(parse_formula("CaOH)2").is_err());
        assert!(parse_formula("K4(Fe(CN)6").is_err());
    }

    #[test]
    fn test_oversized_counts() {
        let err = parse_formula("H9999999999999999999").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedFormula { position: 1, .. }
        ));
        // each factor fits, the product does not
        assert!(parse_formula("(H70000)70000").is_err());
        assert!(parse_formula(&format!("H{}H1", MAX_COUNT)).is_err());
        assert_eq!(
            parse_formula(&format!("H{}", MAX_COUNT)).unwrap()[0].count,
            MAX_COUNT
        );
    }

    #[test]
    fn test_unknown_symbols_are_kept() {
        let counts = as_map(parse_formula("XxO2").unwrap());
        assert_eq!(counts["Xx"], 1);
        assert_eq!(counts["O"], 2);
        // lowercase without a leading capital is not a symbol
        assert!(parse_formula("h2o").unwrap().is_empty());
    }
}
