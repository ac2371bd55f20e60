use crate::error::MatrixError;

pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self, MatrixError>;
    fn to_list(&self) -> Vec<Vec<T>>;

    /// `(rows, cols)`, the augmented column included.
    fn shape(&self) -> (usize, usize);
    fn is_rref(&self) -> bool;
    fn at(&self, row: usize, col: usize) -> T;
}
