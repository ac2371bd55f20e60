//! Bordered, column-aligned rendering of matrices for the terminal.

use itertools::Itertools;
use std::fmt::Display;
use std::io::{self, Write};

use crate::matrix::matrix_dense::DenseMatrix;
use crate::reduce::analysis::variable_assignments;
use crate::rings::fraction::Fraction;
use crate::rings::scalar::Scalar;

/// Right-justifies `number` to `pad` characters. Longer values are left as is.
pub fn pad_number(number: impl Display, pad: usize) -> String {
    format!("{:>pad$}", number.to_string())
}

/// Width of the widest rendered entry.
pub fn matrix_pad<T: Scalar>(matrix: &DenseMatrix<T>) -> usize {
    matrix
        .cells
        .iter()
        .map(|x| x.to_string().chars().count())
        .max()
        .unwrap_or(0)
}

/// One `| a b c |` line per row. In augmented mode the last column is prefixed
/// with `:`.
pub fn format_matrix<T: Scalar>(matrix: &DenseMatrix<T>, augmented: bool) -> String {
    let pad = matrix_pad(matrix);
    let mut result = String::new();

    for r in 0..matrix.rows {
        result.push_str("| ");
        for (c, value) in matrix.row(r).iter().enumerate() {
            if augmented && c == matrix.cols - 1 {
                result.push(':');
            }
            result.push_str(&pad_number(value, pad));
            result.push(' ');
        }
        result.push_str("|\n");
    }
    result
}

pub fn print_matrix<T: Scalar>(out: &mut impl Write, matrix: &DenseMatrix<T>) -> io::Result<()> {
    out.write_all(format_matrix(matrix, false).as_bytes())
}

pub fn print_augmented_matrix<T: Scalar>(
    out: &mut impl Write,
    matrix: &DenseMatrix<T>,
) -> io::Result<()> {
    out.write_all(format_matrix(matrix, true).as_bytes())
}

/// `x1 = 6`, `x2 = 2.5`, ... one line per row, numbered from 1.
pub fn format_assignments(matrix: &DenseMatrix<Fraction>) -> String {
    variable_assignments(matrix)
        .iter()
        .enumerate()
        .map(|(i, value)| format!("x{} = {}\n", i + 1, value.to_f64()))
        .join("")
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
