//! Reading a reduced augmented matrix back as a linear system.

use itertools::Itertools;
use std::fmt::Display;

use crate::matrix::matrix_dense::DenseMatrix;
use crate::rings::scalar::Scalar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionSet {
    Unique,
    /// Coefficient columns without a pivot, 0-based.
    Infinite { free_columns: Vec<usize> },
    /// Rows reading `0 = c` with `c != 0`.
    Inconsistent { rows: Vec<usize> },
}

impl Display for SolutionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionSet::Unique => write!(f, "unique solution"),
            SolutionSet::Infinite { free_columns } => write!(
                f,
                "infinitely many solutions, free variables: {}",
                free_columns.iter().map(|c| format!("x{}", c + 1)).join(", ")
            ),
            SolutionSet::Inconsistent { rows } => write!(
                f,
                "no solution, inconsistent rows: {}",
                rows.iter().map(|r| (r + 1).to_string()).join(", ")
            ),
        }
    }
}

/// Leading coefficient column of every row, `None` for zero rows.
pub fn pivot_columns<T: Scalar>(matrix: &DenseMatrix<T>) -> Vec<Option<usize>> {
    let coefficients = matrix.coefficient_cols();
    (0..matrix.rows)
        .map(|r| matrix.row(r)[..coefficients].iter().position(|x| !x.is_zero()))
        .collect()
}

pub fn rank<T: Scalar>(matrix: &DenseMatrix<T>) -> usize {
    pivot_columns(matrix).iter().flatten().count()
}

pub fn free_columns<T: Scalar>(matrix: &DenseMatrix<T>) -> Vec<usize> {
    let pivots = pivot_columns(matrix);
    (0..matrix.coefficient_cols())
        .filter(|c| !pivots.contains(&Some(*c)))
        .collect()
}

pub fn inconsistent_rows<T: Scalar>(matrix: &DenseMatrix<T>) -> Vec<usize> {
    (0..matrix.rows)
        .filter(|&r| {
            matrix.is_zero_row(r) && matrix.row(r).last().map_or(false, |x| !x.is_zero())
        })
        .collect()
}

/// Expects a matrix in RREF. An inconsistent row outranks free columns.
pub fn classify<T: Scalar>(matrix: &DenseMatrix<T>) -> SolutionSet {
    let rows = inconsistent_rows(matrix);
    if !rows.is_empty() {
        return SolutionSet::Inconsistent { rows };
    }

    let free_columns = free_columns(matrix);
    if free_columns.is_empty() {
        SolutionSet::Unique
    } else {
        SolutionSet::Infinite { free_columns }
    }
}

/// Augmented entry of every row, in row order.
pub fn variable_assignments<T: Scalar>(matrix: &DenseMatrix<T>) -> Vec<T> {
    (0..matrix.rows)
        .filter_map(|r| matrix.row(r).last().cloned())
        .collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
