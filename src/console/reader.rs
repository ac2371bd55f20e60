//! Interactive matrix input: one comma separated row per line, closed by `END`.

use std::io::{BufRead, Write};

use crate::error::{ReadError, RowError};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::DenseMatrix;
use crate::rings::fraction::Fraction;

pub const END_COMMAND: &str = "END";

fn is_end(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(END_COMMAND)
}

/// Parses `1, -5/2, 0.25`. `expected` is the width of the rows read so far.
pub fn parse_row(line: &str, expected: Option<usize>) -> Result<Vec<Fraction>, RowError> {
    let row = line
        .split(',')
        .map(|token| {
            token.parse::<Fraction>().map_err(|source| RowError::InvalidToken {
                token: token.trim().to_owned(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match expected {
        Some(expected) if expected != row.len() => Err(RowError::ColumnMismatch {
            expected,
            got: row.len(),
        }),
        _ => Ok(row),
    }
}

/// Reads rows until `END` (any case) or end of input. A rejected row discards
/// everything read so far; the user is told why and starts over.
pub fn read_matrix<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
) -> Result<Option<DenseMatrix<Fraction>>, ReadError> {
    writeln!(output, "Enter a new matrix:")?;

    let mut lines: Vec<Vec<Fraction>> = Vec::new();
    for line in input.lines() {
        let line = line?;
        if is_end(&line) {
            break;
        }

        match parse_row(&line, lines.first().map(|l| l.len())) {
            Ok(row) => lines.push(row),
            Err(err) => {
                log::debug!("rejected row {line:?}: {err:?}");
                writeln!(output, "{err}")?;
                lines.clear();
            }
        }
    }

    if lines.is_empty() {
        writeln!(output, "No matrix was read.")?;
        return Ok(None);
    }

    Ok(Some(DenseMatrix::from_list(lines)?))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
