//! Whole-matrix normalization passes.
//!
//! Every pass walks the rows top to bottom and, where it needs a row's pivot,
//! tracks the pivot column confirmed for the previous row.

use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::DenseMatrix;
use crate::reduce::primitives::{
    find_any_pivot_candidate, find_any_pivot_row, find_pivot_row, find_trailing_pivot, is_pivot,
    swap_row,
};
use crate::rings::scalar::Scalar;
use num_traits::Inv;

/// Which way the matrix is currently being looked at.
///
/// Through `reverse_matrix` the coefficient columns are flipped, so the leading
/// entry of a row becomes its trailing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    Forward,
    Reversed,
}

fn locate_pivot<T: Scalar>(row: &[T], last: Option<usize>, sweep: Sweep) -> Option<usize> {
    match sweep {
        Sweep::Forward => find_any_pivot_candidate(row, last),
        Sweep::Reversed => find_trailing_pivot(row),
    }
}

/// Moves every row whose coefficients are all zero to the bottom, keeping the
/// relative order of both groups.
pub fn push_zero_rows_to_end<T: Scalar>(matrix: &mut DenseMatrix<T>) {
    let rows = matrix.rows;
    let stop = rows * 2;

    let mut index = 0;
    let mut settled = 0;
    let mut steps = 0;

    // Rows above `index` are known non-zero and a removal never touches them,
    // so the scan resumes in place instead of from the top.
    while index < rows - settled && steps < stop {
        steps += 1;
        if matrix.is_zero_row(index) {
            matrix.move_row_to_end(index);
            settled += 1;
        } else {
            index += 1;
        }
    }
}

/// Brings a usable pivot row into each position. An exact match (a row whose
/// leading entry sits right after the previous pivot, or the leftmost such
/// column) wins over any row passing the relaxed test.
pub fn auto_swap<T: Scalar>(matrix: &mut DenseMatrix<T>) {
    let coefficients = matrix.coefficient_cols();
    let mut last = None;

    for r in 0..matrix.rows {
        let first_target = last.map_or(0, |c: usize| c + 1);
        for target in first_target..coefficients {
            if is_pivot(matrix.row(r), target) {
                break;
            }
            if let Some(pivot_row) = find_pivot_row(matrix, target) {
                swap_row(matrix, r, pivot_row);
                break;
            }
        }

        if find_any_pivot_candidate(matrix.row(r), last).is_none() {
            if let Some(pivot_row) = find_any_pivot_row(matrix, r, last) {
                swap_row(matrix, r, pivot_row);
            }
        }

        if let Some(pivot) = find_any_pivot_candidate(matrix.row(r), last) {
            last = Some(pivot);
        }
    }
}

/// Scales each row with a pivot so that the pivot becomes 1.
pub fn auto_scale<T: Scalar>(matrix: &mut DenseMatrix<T>, sweep: Sweep) {
    let mut last = None;

    for r in 0..matrix.rows {
        let Some(pivot) = locate_pivot(matrix.row(r), last, sweep) else {
            continue;
        };
        let value = matrix.at(r, pivot);
        if !value.is_one() {
            matrix.scale_row(r, &value.inv());
        }
        last = Some(pivot);
    }
}

/// Zeroes the pivot column of each row in every row below it.
pub fn auto_eliminate<T: Scalar>(matrix: &mut DenseMatrix<T>, sweep: Sweep) {
    let rows = matrix.rows;
    let mut last = None;

    for r in 0..rows.saturating_sub(1) {
        let Some(pivot) = locate_pivot(matrix.row(r), last, sweep) else {
            continue;
        };
        last = Some(pivot);

        let pivot_inverse = matrix.at(r, pivot).inv();
        for c in r + 1..rows {
            let value = matrix.at(c, pivot);
            if !value.is_zero() {
                let factor = -(value * pivot_inverse.clone());
                matrix.add_scaled_row(c, r, &factor);
            }
        }
    }
}

/// Reverses the row order and the coefficient columns of every row. The
/// augmented column stays last.
pub fn reverse_matrix<T: Scalar>(matrix: &mut DenseMatrix<T>) {
    let coefficients = matrix.coefficient_cols();
    let mut cells = Vec::with_capacity(matrix.cells.len());

    for r in (0..matrix.rows).rev() {
        let row = matrix.row(r);
        cells.extend(row[..coefficients].iter().rev().cloned());
        cells.extend(row[coefficients..].iter().cloned());
    }
    matrix.cells = cells;
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
