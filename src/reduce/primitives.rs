//! Row-level building blocks of the reduction passes.
//!
//! A `row` slice always includes the augmented column as its last entry; that
//! column is never a pivot candidate.

use crate::matrix::matrix_dense::DenseMatrix;
use crate::rings::scalar::Scalar;

pub fn swap_row<T: Scalar>(matrix: &mut DenseMatrix<T>, a: usize, b: usize) {
    matrix.swap_rows(a, b);
}

/// `row[index]` is nonzero and everything left of it is zero.
pub fn is_pivot<T: Scalar>(row: &[T], index: usize) -> bool {
    match row.get(index) {
        Some(value) if !value.is_zero() => row[..index].iter().all(|x| x.is_zero()),
        _ => false,
    }
}

/// First row, scanning from the top, whose leading entry sits exactly at `column`.
pub fn find_pivot_row<T: Scalar>(matrix: &DenseMatrix<T>, column: usize) -> Option<usize> {
    (0..matrix.rows).find(|&r| is_pivot(matrix.row(r), column))
}

/// Relaxed pivot test. `last` is the most recently confirmed pivot column
/// (`None` when no pivot has been confirmed yet). The row qualifies only when it
/// is zero up to and including `last`; its candidate is then the first nonzero
/// coefficient after `last`.
pub fn find_any_pivot_candidate<T: Scalar>(row: &[T], last: Option<usize>) -> Option<usize> {
    let start = last.map_or(0, |c| c + 1);
    let coefficients = row.len().saturating_sub(1);

    if start > coefficients || row[..start].iter().any(|x| !x.is_zero()) {
        return None;
    }
    (start..coefficients).find(|&c| !row[c].is_zero())
}

pub fn find_any_pivot_row<T: Scalar>(
    matrix: &DenseMatrix<T>,
    start_row: usize,
    last: Option<usize>,
) -> Option<usize> {
    (start_row..matrix.rows).find(|&r| find_any_pivot_candidate(matrix.row(r), last).is_some())
}

/// Last nonzero coefficient. Seen through `reverse_matrix`, this is where the
/// leading entry of the unreversed row ends up.
pub fn find_trailing_pivot<T: Scalar>(row: &[T]) -> Option<usize> {
    let coefficients = row.len().saturating_sub(1);
    (0..coefficients).rev().find(|&c| !row[c].is_zero())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
