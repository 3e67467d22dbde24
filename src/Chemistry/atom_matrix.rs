//! Signed element composition matrix of an equation.
//!
//! Rows are elements (sorted alphabetically), columns are compounds (reactants
//! then products). Reactant counts are positive, product counts negative, so a
//! coefficient vector `x` conserves every element exactly when `A·x = 0`.
use crate::Chemistry::equation_parser::{ParsedEquation, unique_elements};
use nalgebra::DMatrix;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct AtomMatrix {
    pub elements: Vec<String>,
    pub n_reactants: usize,
    pub data: DMatrix<i64>,
}

impl AtomMatrix {
    pub fn build(equation: &ParsedEquation) -> Self {
        let elements = unique_elements(equation);
        let n_reactants = equation.reactants.len();
        let columns: Vec<_> = equation.compounds().collect();
        let data = DMatrix::from_fn(elements.len(), columns.len(), |row, col| {
            let count = i64::try_from(columns[col].count_of(&elements[row])).unwrap_or(i64::MAX);
            if col < n_reactants { count } else { -count }
        });
        Self {
            elements,
            n_reactants,
            data,
        }
    }
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }
    pub fn row(&self, i: usize) -> Vec<i64> {
        self.data.row(i).iter().copied().collect()
    }
    /// row-major snapshot, used by the step trace and JSON output
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        (0..self.nrows()).map(|i| self.row(i)).collect()
    }
    pub fn to_f64(&self) -> DMatrix<f64> {
        self.data.map(|v| v as f64)
    }
    /// A·x for an integer coefficient vector; zero everywhere means balanced.
    /// Arithmetic saturates at the i64 range.
    pub fn residual(&self, coefficients: &[u64]) -> Vec<i64> {
        (0..self.nrows())
            .map(|i| {
                self.data
                    .row(i)
                    .iter()
                    .zip(coefficients)
                    .map(|(&a, &x)| a.saturating_mul(as_signed(x)))
                    .fold(0, i64::saturating_add)
            })
            .collect()
    }
    pub fn is_satisfied_by(&self, coefficients: &[u64]) -> bool {
        coefficients.len() == self.ncols() && self.residual(coefficients).iter().all(|&r| r == 0)
    }
    /// (reactant atoms, product atoms) of row `i` for the given coefficients
    pub fn side_totals(&self, i: usize, coefficients: &[u64]) -> (i64, i64) {
        let mut reactants: i64 = 0;
        let mut products: i64 = 0;
        for (col, (&a, &x)) in self.data.row(i).iter().zip(coefficients).enumerate() {
            let atoms = a.saturating_mul(as_signed(x));
            if col < self.n_reactants {
                reactants = reactants.saturating_add(atoms);
            } else {
                products = products.saturating_sub(atoms);
            }
        }
        (reactants, products)
    }
}

fn as_signed(x: u64) -> i64 {
    i64::try_from(x).unwrap_or(i64::MAX)
}

impl fmt::Display for AtomMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            let row: Vec<String> = self.row(i).iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}: [{}]", element, row.join(", "))?;
        }
        Ok(())
    }
}
