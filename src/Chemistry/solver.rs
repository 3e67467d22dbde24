//! Stoichiometric coefficients from the null space of the atom matrix.
//!
//! The matrix is brought to reduced row echelon form by Gauss-Jordan
//! elimination with partial pivoting. Each non-pivot column gives one null
//! space basis vector; the first one is used. The real-valued vector is then
//! scaled to the smallest positive integers by [`normalize`].
use crate::Chemistry::atom_matrix::AtomMatrix;
use crate::Chemistry::equation_parser::ParsedEquation;
use crate::Chemistry::errors::SolverError;
use crate::settings::BalancerConfig;
use gcd::Gcd;
use log::{debug, warn};
use nalgebra::{DMatrix, DVector};

/// Reduced row echelon form of `matrix` and the pivot column of every non-zero row.
/// Entries with magnitude below `eps` are treated as zero.
pub fn reduced_row_echelon(matrix: &DMatrix<f64>, eps: f64) -> (DMatrix<f64>, Vec<usize>) {
    let mut m = matrix.clone();
    let (nrows, ncols) = m.shape();
    let mut pivots = Vec::new();
    let mut row = 0;
    for col in 0..ncols {
        if row >= nrows {
            break;
        }
        // partial pivoting: largest magnitude in this column
        let mut best = row;
        for r in row + 1..nrows {
            if m[(r, col)].abs() > m[(best, col)].abs() {
                best = r;
            }
        }
        if m[(best, col)].abs() < eps {
            for r in row..nrows {
                m[(r, col)] = 0.0;
            }
            continue;
        }
        m.swap_rows(row, best);
        let pivot = m[(row, col)];
        for c in 0..ncols {
            m[(row, c)] /= pivot;
        }
        for r in 0..nrows {
            if r == row {
                continue;
            }
            let factor = m[(r, col)];
            if factor == 0.0 {
                continue;
            }
            for c in 0..ncols {
                let v = m[(row, c)];
                m[(r, c)] -= factor * v;
            }
            m[(r, col)] = 0.0;
        }
        pivots.push(col);
        row += 1;
    }
    (m, pivots)
}

/// basis of the null space, one vector per free (non-pivot) column
pub fn null_space(matrix: &DMatrix<f64>, eps: f64) -> Vec<DVector<f64>> {
    let ncols = matrix.ncols();
    let (rref, pivots) = reduced_row_echelon(matrix, eps);
    debug!("rref: {} pivots: {:?}", rref, pivots);
    (0..ncols)
        .filter(|col| !pivots.contains(col))
        .map(|free| {
            let mut v = DVector::zeros(ncols);
            v[free] = 1.0;
            for (i, &p) in pivots.iter().enumerate() {
                v[p] = -rref[(i, free)];
            }
            v
        })
        .collect()
}

/// Raw coefficients of an equation: the absolute values of the first null space vector.
pub fn solve(equation: &ParsedEquation, config: &BalancerConfig) -> Result<Vec<f64>, SolverError> {
    let matrix = AtomMatrix::build(equation);
    solve_matrix(&matrix, config)
}

pub fn solve_matrix(matrix: &AtomMatrix, config: &BalancerConfig) -> Result<Vec<f64>, SolverError> {
    let cols = matrix.ncols();
    // two compounds in 1:1 ratio, e.g. an isomerisation
    if cols == 2 && matrix.is_satisfied_by(&[1, 1]) {
        debug!("two compounds balanced 1:1, skipping elimination");
        return Ok(vec![1.0, 1.0]);
    }
    let basis = null_space(&matrix.to_f64(), config.zero_epsilon);
    if basis.len() > 1 {
        // every basis vector is zero on the other free columns
        if config.strict {
            return Err(SolverError::MultipleSolutions {
                dimension: basis.len(),
            });
        }
        debug!(
            "null space has dimension {}, using the first basis vector",
            basis.len()
        );
    }
    match basis.into_iter().next() {
        Some(v) => {
            let raw: Vec<f64> = v.iter().map(|x| x.abs()).collect();
            debug!("raw null vector: {:?}", raw);
            Ok(raw)
        }
        None if config.strict => Err(SolverError::NoNullSpace),
        None => {
            warn!("atom matrix has full column rank, falling back to all-ones coefficients");
            Ok(vec![1.0; cols])
        }
    }
}

/// Scales a non-negative real vector to the smallest positive integers with the same ratios.
pub fn normalize(raw: &[f64], config: &BalancerConfig) -> Result<Vec<u64>, SolverError> {
    let cleaned: Vec<f64> = raw
        .iter()
        .map(|&c| if c.abs() < config.zero_epsilon { 0.0 } else { c.abs() })
        .collect();

    let min = cleaned
        .iter()
        .copied()
        .filter(|&c| c > 0.0)
        .fold(f64::INFINITY, f64::min);
    if !min.is_finite() {
        if config.strict {
            return Err(SolverError::AllZero);
        }
        warn!("all coefficients are zero, returning ones");
        return Ok(vec![1; raw.len()]);
    }
    let ratios: Vec<f64> = cleaned.iter().map(|c| c / min).collect();

    let is_integer = |x: f64| (x - x.round()).abs() < config.integer_tolerance;
    let multiplier = match (1..=config.max_multiplier)
        .find(|&mult| ratios.iter().all(|&r| is_integer(r * mult as f64)))
    {
        Some(mult) => mult,
        None if config.strict => {
            return Err(SolverError::NoIntegerRatio {
                max_multiplier: config.max_multiplier,
            });
        }
        None => {
            warn!(
                "no multiplier up to {} turns {:?} into integers, rounding",
                config.max_multiplier, ratios
            );
            1
        }
    };
    let scaled: Vec<u64> = ratios
        .iter()
        .map(|&r| (r * multiplier as f64).round() as u64)
        .collect();

    let divisor = scaled
        .iter()
        .copied()
        .filter(|&n| n > 0)
        .reduce(|a, b| a.gcd(b))
        .unwrap_or(1);
    let reduced: Vec<u64> = scaled.iter().map(|n| n / divisor.max(1)).collect();

    if config.strict {
        if let Some(index) = reduced.iter().position(|&n| n == 0) {
            return Err(SolverError::ZeroCoefficient { index });
        }
        Ok(reduced)
    } else {
        Ok(reduced.into_iter().map(|n| n.max(1)).collect())
    }
}

/// checks A·x = 0 and names the first element that is not conserved
pub fn verify(matrix: &AtomMatrix, coefficients: &[u64]) -> Result<(), SolverError> {
    for (i, element) in matrix.elements.iter().enumerate() {
        let (reactants, products) = matrix.side_totals(i, coefficients);
        if reactants != products {
            return Err(SolverError::NotConserved {
                element: element.clone(),
                reactants,
                products,
            });
        }
    }
    Ok(())
}
