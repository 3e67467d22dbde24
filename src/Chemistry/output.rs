use crate::Chemistry::balancer::BalancedResult;
use crate::Chemistry::formatting::{format_chemical_equation, format_molecular_weight};
use crate::Chemistry::molmass::MolecularWeight;
use prettytable::{Cell, Table, row};

////////////////////////INPUT/OUTPUT////////////////////////////////////////////////////////

/// table of compounds: coefficient, formula, molar mass
pub fn compounds_table(result: &BalancedResult) -> Table {
    let mut table = Table::new();
    table.add_row(row!["#", "coefficient", "compound", "molar mass"]);
    for (i, (coefficient, mw)) in result
        .coefficients
        .iter()
        .zip(&result.metadata.molecular_weights)
        .enumerate()
    {
        table.add_row(row![
            i + 1,
            coefficient,
            mw.compound,
            format_molecular_weight(mw.weight)
        ]);
    }
    table
}

/// the atom matrix of the solve step, one row per element
pub fn matrix_table(result: &BalancedResult) -> Option<Table> {
    let step = result.steps.iter().find(|s| s.matrix.is_some())?;
    let rows = step.matrix.as_ref()?;
    let mut table = Table::new();
    let mut header = row!["element"];
    for mw in &result.metadata.molecular_weights {
        header.add_cell(Cell::new(&mw.compound));
    }
    table.add_row(header);
    for (element, values) in result.elements.iter().zip(rows) {
        let mut line = row![element];
        for v in values {
            line.add_cell(Cell::new(&v.to_string()));
        }
        table.add_row(line);
    }
    Some(table)
}

pub fn weight_table(mw: &MolecularWeight) -> Table {
    let mut table = Table::new();
    table.add_row(row!["element", "count"]);
    for el in &mw.breakdown {
        table.add_row(row![el.symbol, el.count]);
    }
    table.add_row(row!["total", format_molecular_weight(mw.weight)]);
    table
}

/// Prints the balanced equation, its tables and the step trace to the console
pub fn pretty_print_result(result: &BalancedResult) {
    println!("__________BALANCED EQUATION__________");
    println!("original: {}", format_chemical_equation(&result.original));
    println!("balanced: {}", format_chemical_equation(&result.balanced));
    println!(
        "reaction type: {} - {}",
        result.metadata.reaction_type, result.metadata.reaction_description
    );
    compounds_table(result).printstd();
    if let Some(table) = matrix_table(result) {
        table.printstd();
    }
    for (i, step) in result.steps.iter().enumerate() {
        println!("\nStep {}: {}", i + 1, step.title);
        println!("{}", step.description);
    }
    for issue in &result.warnings {
        println!("[{:?}] {}", issue.severity, issue.message);
    }
    println!("_____________________________________________________________");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chemistry::balancer::balance;
    use crate::Chemistry::molmass::calculate_molar_mass;

    #[test]
    fn test_tables() {
        let result = balance("CH4 + O2 -> CO2 + H2O").unwrap();
        let table = compounds_table(&result);
        assert_eq!(table.len(), 5);
        let rendered = table.to_string();
        assert!(rendered.contains("CH4"));
        assert!(rendered.contains("g/mol"));

        let matrix = matrix_table(&result).unwrap();
        // header + C, H, O
        assert_eq!(matrix.len(), 4);
        let rendered = matrix.to_string();
        assert!(rendered.contains("-2"));
        assert!(rendered.contains("H2O"));
    }

    #[test]
    fn test_weight_table() {
        let mw = calculate_molar_mass("Ca(OH)2").unwrap();
        let table = weight_table(&mw);
        assert_eq!(table.len(), 5);
        assert!(table.to_string().contains("74.09"));
    }
}
