/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Chemistry::balancer::{EquationBalancer, apply_coefficients, balance};
    use crate::Chemistry::equation_parser::{count_element_on_side, parse_equation, unique_elements};
    use crate::Chemistry::errors::ErrorCode;
    use crate::Chemistry::reaction_classifier::ReactionType;
    use crate::Chemistry::validator::Severity;
    use crate::settings::BalancerConfig;
    use approx::assert_relative_eq;
    use gcd::Gcd;

    const EQUATIONS: [&str; 12] = [
        "H2 + O2 → H2O",
        "CH4 + O2 → CO2 + H2O",
        "Fe + O2 → Fe2O3",
        "Ca(OH)2 + HCl → CaCl2 + H2O",
        "C3H8 + O2 -> CO2 + H2O",
        "Al + O2 = Al2O3",
        "KClO3 -> KCl + O2",
        "Zn + HCl -> ZnCl2 + H2",
        "AgNO3 + NaCl -> AgCl + NaNO3",
        "Al2(SO4)3 + Ca(OH)2 -> Al(OH)3 + CaSO4",
        "K4(Fe(CN)6) + KMnO4 + H2SO4 -> KHSO4 + Fe2(SO4)3 + MnSO4 + HNO3 + CO2 + H2O",
        "C6H12O6(s) + O2(g) -> CO2(g) + H2O(l)",
    ];

    #[test]
    fn test_scenario_hydrogen_oxygen() {
        let result = balance("H2 + O2 → H2O").unwrap();
        assert_eq!(result.balanced, "2H2 + O2 → 2H2O");
        assert_eq!(result.original, "H2 + O2 → H2O");
        assert_eq!(result.coefficients, vec![2, 1, 2]);
        assert_eq!(result.metadata.reaction_type, ReactionType::Synthesis);
    }

    #[test]
    fn test_scenario_methane_combustion() {
        let result = balance("CH4 + O2 → CO2 + H2O").unwrap();
        assert_eq!(result.balanced, "CH4 + 2O2 → CO2 + 2H2O");
        assert_eq!(result.metadata.reaction_type, ReactionType::Combustion);
    }

    #[test]
    fn test_scenario_iron_oxide() {
        let result = balance("Fe + O2 → Fe2O3").unwrap();
        assert_eq!(result.balanced, "4Fe + 3O2 → 2Fe2O3");
    }

    #[test]
    fn test_scenario_calcium_hydroxide() {
        let result = balance("Ca(OH)2 + HCl → CaCl2 + H2O").unwrap();
        assert_eq!(result.balanced, "Ca(OH)2 + 2HCl → CaCl2 + 2H2O");
        let weight = &result.metadata.molecular_weights[0];
        assert_eq!(weight.compound, "Ca(OH)2");
        assert_relative_eq!(weight.weight, 74.09, epsilon = 1e-2);
    }

    #[test]
    fn test_scenario_empty() {
        let err = balance("").unwrap_err();
        assert_eq!(err.code, ErrorCode::Empty);
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_scenario_unknown_element() {
        let err = balance("Xx + O2 → XxO2").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownElement);
        assert!(err.message.contains("Xx"));
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_string_errors_come_first() {
        assert_eq!(balance("H2 + O2").unwrap_err().code, ErrorCode::MissingArrow);
        assert_eq!(
            balance("A -> B -> C").unwrap_err().code,
            ErrorCode::InvalidArrowCount
        );
        assert_eq!(
            balance("Ca(OH2 + HCl -> CaCl2 + H2O").unwrap_err().code,
            ErrorCode::UnbalancedParentheses
        );
        assert_eq!(
            balance("0H2 + O2 -> H2O").unwrap_err().code,
            ErrorCode::ZeroCoefficientReactant
        );
    }

    #[test]
    fn test_oversized_numbers_are_rejected() {
        let err = balance("9999999999999999999H2 + O2 -> H2O").unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedFormula);
        let err = balance("H9999999999999999999 + O2 -> H2O").unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedFormula);
        assert!(err.message.contains("too large"));

        // large but bounded coefficients still balance
        let result = balance("4000000000H2 + O2 -> H2O").unwrap();
        assert_eq!(result.coefficients, vec![2, 1, 2]);
        assert!(result.steps[0].description.contains("H: 8000000000 (reactants) vs 2 (products)"));
    }

    #[test]
    fn test_several_independent_balancings() {
        let err = balance("H2 + O2 -> H2O + H2O2").unwrap_err();
        assert_eq!(err.code, ErrorCode::NoSolution);
        assert!(err.message.contains("no unique balancing"));
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_conservation_for_all() {
        for equation in EQUATIONS {
            let result = balance(equation).unwrap();
            let parsed = parse_equation(equation).unwrap();
            let balanced = apply_coefficients(&parsed, &result.coefficients);
            for element in unique_elements(&parsed) {
                assert_eq!(
                    count_element_on_side(&balanced.reactants, &element),
                    count_element_on_side(&balanced.products, &element),
                    "{} in {}",
                    element,
                    equation
                );
            }
        }
    }

    #[test]
    fn test_minimal_integers() {
        for equation in EQUATIONS {
            let result = balance(equation).unwrap();
            let divisor = result
                .coefficients
                .iter()
                .copied()
                .reduce(|a, b| a.gcd(b))
                .unwrap();
            assert_eq!(divisor, 1, "{}: {:?}", equation, result.coefficients);
            assert!(result.coefficients.iter().all(|&c| c >= 1));
        }
    }

    #[test]
    fn test_large_coefficients() {
        let result = balance(EQUATIONS[10]).unwrap();
        assert_eq!(
            result.coefficients,
            vec![10, 122, 299, 162, 5, 122, 60, 60, 188]
        );
    }

    #[test]
    fn test_idempotence() {
        let first = balance("Ca(OH)2 + HCl → CaCl2 + H2O").unwrap();
        let second = balance(&first.balanced).unwrap();
        assert_eq!(second.coefficients, first.coefficients);
        assert_eq!(second.balanced, first.balanced);
        assert_eq!(second.original, first.balanced);
        // input coefficients are reported as recomputed
        assert!(
            second
                .warnings
                .iter()
                .any(|w| w.code == ErrorCode::InputCoefficientIgnored && w.severity == Severity::Info)
        );
    }

    #[test]
    fn test_determinism() {
        for equation in EQUATIONS {
            assert_eq!(balance(equation).unwrap(), balance(equation).unwrap());
        }
    }

    #[test]
    fn test_states_survive() {
        let result = balance("C6H12O6(s) + O2(g) -> CO2(g) + H2O(l)").unwrap();
        assert_eq!(result.balanced, "C6H12O6(s) + 6O2(g) → 6CO2(g) + 6H2O(l)");
        assert_eq!(result.metadata.reaction_type, ReactionType::Combustion);
    }

    #[test]
    fn test_steps() {
        let result = balance("H2 + O2 → H2O").unwrap();
        let titles: Vec<&str> = result.steps.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Count atoms on each side",
                "Identify imbalanced elements",
                "Build atom matrix and solve",
                "Verify balance",
            ]
        );
        assert!(result.steps[0].description.contains("H: 2 (reactants) vs 2 (products)"));
        assert!(result.steps[1].description.contains("O: 2 → 1"));
        assert_eq!(
            result.steps[2].matrix,
            Some(vec![vec![2, 0, -2], vec![0, 2, -1]])
        );
        assert_eq!(result.steps[2].coefficients, Some(vec![2, 1, 2]));
        assert!(result.steps[3].description.contains("O: 2 = 2 ✓"));
        assert!(result.steps[3].description.contains("All atoms are balanced"));
    }

    #[test]
    fn test_one_sided_element_strict_and_lenient() {
        // N appears only on the left: a warning first, then no valid solution
        let err = balance("N2 + H2 -> H2O").unwrap_err();
        assert!(matches!(
            err.code,
            ErrorCode::NoSolution | ErrorCode::Unbalanceable
        ));

        let lenient = EquationBalancer::with_config(BalancerConfig::lenient());
        let result = lenient.balance("N2 + H2 -> H2O").unwrap();
        assert!(result.coefficients.iter().all(|&c| c >= 1));
        assert!(result.steps[3].description.contains("✗"));
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.code == ErrorCode::ElementOnlyInReactants)
        );
    }

    #[test]
    fn test_json_output() {
        let result = balance("Zn + HCl -> ZnCl2 + H2").unwrap();
        let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(json["balanced"], "Zn + 2HCl → ZnCl2 + H2");
        assert_eq!(json["metadata"]["reactionType"], "single-replacement");
        assert_eq!(json["coefficients"][1], 2);
        assert_eq!(json["steps"].as_array().unwrap().len(), 4);
        assert_eq!(json["metadata"]["molecularWeights"][0]["compound"], "Zn");
    }
}
