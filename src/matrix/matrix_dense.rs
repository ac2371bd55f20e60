use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;
use crate::rings::scalar::Scalar;

/// Row-major augmented matrix. The last column is the right-hand side, the
/// others are coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: Scalar> Matrix<T> for DenseMatrix<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let cols = lines.first().map_or(0, |l| l.len());
        let rows = lines.len();

        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(MatrixError::Ragged {
                row,
                expected: cols,
                got: line.len(),
            });
        }

        Ok(DenseMatrix {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn is_rref(&self) -> bool {
        let coefficients = self.coefficient_cols();
        let mut lead = None;

        for i in 0..self.rows {
            let row = &self.row(i)[..coefficients];
            let pivot_col_opt = row.iter().position(|x| !x.is_zero());

            match pivot_col_opt {
                None => {
                    for r in i + 1..self.rows {
                        if !self.is_zero_row(r) {
                            return false;
                        }
                    }
                    break;
                }
                Some(pivot_col) => {
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);

                    if !row[pivot_col].is_one() {
                        return false;
                    }

                    for r in 0..self.rows {
                        if r != i && !self.at(r, pivot_col).is_zero() {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col].clone()
    }
}

impl<T: Scalar> DenseMatrix<T> {
    /// Number of columns left of the augmented one.
    pub fn coefficient_cols(&self) -> usize {
        self.cols.saturating_sub(1)
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// True when every coefficient of the row is zero, whatever the augmented entry.
    pub fn is_zero_row(&self, row: usize) -> bool {
        self.row(row)[..self.coefficient_cols()]
            .iter()
            .all(|x| x.is_zero())
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    pub fn move_row_to_end(&mut self, row: usize) {
        let line: Vec<T> = self
            .cells
            .drain(row * self.cols..(row + 1) * self.cols)
            .collect();
        self.cells.extend(line);
    }

    pub fn scale_row(&mut self, row: usize, factor: &T) {
        for cell in &mut self.cells[row * self.cols..(row + 1) * self.cols] {
            *cell = factor.clone() * cell.clone();
        }
    }

    /// `row[target] += factor * row[source]`
    pub fn add_scaled_row(&mut self, target: usize, source: usize, factor: &T) {
        for k in 0..self.cols {
            let delta = factor.clone() * self.at(source, k);
            let cell = &mut self.cells[target * self.cols + k];
            *cell = cell.clone() + delta;
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
