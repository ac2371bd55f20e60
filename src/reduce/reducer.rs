use crate::matrix::matrix_dense::DenseMatrix;
use crate::reduce::passes::{
    auto_eliminate, auto_scale, auto_swap, push_zero_rows_to_end, reverse_matrix, Sweep,
};
use crate::rings::scalar::Scalar;

pub const DEFAULT_MAX_ROUNDS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceConfig {
    /// Upper bound on forward+backward rounds while looking for a fixed point.
    pub max_rounds: usize,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        ReduceConfig {
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reduction<T> {
    pub matrix: DenseMatrix<T>,
    /// Rounds executed, the last (unchanged) one included.
    pub rounds: usize,
    pub converged: bool,
}

/// Top to bottom: pivots into place, scaled, and cleared below.
pub fn forward_pass<T: Scalar>(matrix: &mut DenseMatrix<T>) {
    push_zero_rows_to_end(matrix);
    auto_swap(matrix);
    auto_scale(matrix, Sweep::Forward);
    auto_eliminate(matrix, Sweep::Forward);

    auto_swap(matrix);
    push_zero_rows_to_end(matrix);
    auto_scale(matrix, Sweep::Forward);
}

/// Bottom to top: the reversed view turns upward elimination into the same
/// downward sweep, then the forward clean-up runs once more.
pub fn backward_pass<T: Scalar>(matrix: &mut DenseMatrix<T>) {
    reverse_matrix(matrix);
    auto_eliminate(matrix, Sweep::Reversed);
    auto_scale(matrix, Sweep::Reversed);

    reverse_matrix(matrix);
    auto_swap(matrix);
    push_zero_rows_to_end(matrix);
    auto_eliminate(matrix, Sweep::Forward);
    auto_scale(matrix, Sweep::Forward);
    push_zero_rows_to_end(matrix);
}

pub fn reduce<T: Scalar>(matrix: DenseMatrix<T>) -> DenseMatrix<T> {
    reduce_with(matrix, &ReduceConfig::default()).matrix
}

/// Runs rounds until one leaves the matrix unchanged. A single round does not
/// always reach RREF, even on square systems.
pub fn reduce_with<T: Scalar>(mut matrix: DenseMatrix<T>, config: &ReduceConfig) -> Reduction<T> {
    log::debug!(
        "reducing {}x{} matrix, at most {} rounds",
        matrix.rows,
        matrix.cols,
        config.max_rounds
    );

    for round in 1..=config.max_rounds {
        let before = matrix.clone();
        forward_pass(&mut matrix);
        backward_pass(&mut matrix);

        if matrix == before {
            log::debug!("fixed point reached after {round} rounds");
            return Reduction {
                matrix,
                rounds: round,
                converged: true,
            };
        }
        log::trace!("round {round}: {:?}", matrix.cells);
    }

    log::warn!(
        "no fixed point after {} rounds, returning the last matrix",
        config.max_rounds
    );
    Reduction {
        matrix,
        rounds: config.max_rounds,
        converged: false,
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix::Matrix;
    use crate::matrix::matrix_dense::tests::fractions;
    use crate::rings::fraction::Fraction;
    use num_traits::Zero;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn parsed(lines: Vec<Vec<&str>>) -> DenseMatrix<Fraction> {
        DenseMatrix::from_list(
            lines
                .into_iter()
                .map(|l| l.into_iter().map(|x| x.parse().unwrap()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_reduce_square_systems() {
        let cases = vec![
            (
                vec![vec![45, -5, -40, 100], vec![-5, 35, -10, 0], vec![-40, -10, 65, 0]],
                vec![vec![1, 0, 0, 6], vec![0, 1, 0, 2], vec![0, 0, 1, 4]],
            ),
            (
                vec![vec![1, -2, 1, 0], vec![0, 2, -8, 8], vec![5, 0, -5, 10]],
                vec![vec![1, 0, 0, 1], vec![0, 1, 0, 0], vec![0, 0, 1, -1]],
            ),
            (
                vec![vec![1, 2, 3, 1], vec![2, 4, 7, 2], vec![3, 7, 11, 8]],
                vec![vec![1, 0, 0, -9], vec![0, 1, 0, 5], vec![0, 0, 1, 0]],
            ),
        ];

        for (input, expected) in cases {
            let reduced = reduce(fractions(input));
            assert_eq!(reduced, fractions(expected));
            assert!(reduced.is_rref());
        }
    }

    #[test]
    fn test_reduce_rational_solutions() {
        let reduced = reduce(fractions(vec![
            vec![10, -8, 0, 40],
            vec![-8, 20, -6, 0],
            vec![0, -6, 10, -20],
        ]));
        assert_eq!(
            reduced,
            parsed(vec![
                vec!["1", "0", "0", "28/5"],
                vec!["0", "1", "0", "2"],
                vec!["0", "0", "1", "-4/5"],
            ])
        );

        let reduced = reduce(fractions(vec![vec![6, -5, 10], vec![-5, 17, -30]]));
        assert_eq!(
            reduced,
            parsed(vec![vec!["1", "0", "20/77"], vec!["0", "1", "-130/77"]])
        );
    }

    #[test]
    fn test_reduce_free_variable() {
        let reduced = reduce(fractions(vec![
            vec![1, 0, -1, 0, 1],
            vec![0, 1, 2, -1, 3],
            vec![1, 1, 3, -1, 7],
        ]));
        assert_eq!(
            reduced,
            parsed(vec![
                vec!["1", "0", "0", "0", "5/2"],
                vec!["0", "1", "0", "-1", "0"],
                vec!["0", "0", "1", "0", "3/2"],
            ])
        );
    }

    #[test]
    fn test_reduce_with_zero_rows() {
        let reduced = reduce(fractions(vec![
            vec![1, 2, 0, 4],
            vec![2, 1, -7, 1],
            vec![-1, 3, 6, 2],
            vec![3, 1, -11, 1],
            vec![2, 2, -2, 6],
        ]));
        assert_eq!(
            reduced,
            fractions(vec![
                vec![1, 0, 0, 4],
                vec![0, 1, 0, 0],
                vec![0, 0, 1, 1],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ])
        );

        let reduced = reduce(fractions(vec![
            vec![2, -1, 3, 9],
            vec![1, 1, 1, 2],
            vec![3, 0, -1, 1],
            vec![2, 1, -2, -3],
        ]));
        assert_eq!(
            reduced,
            fractions(vec![
                vec![1, 0, 0, 1],
                vec![0, 1, 0, -1],
                vec![0, 0, 1, 2],
                vec![0, 0, 0, 0],
            ])
        );
    }

    #[test]
    fn test_reduce_rank_deficient_wide() {
        let reduced = reduce(fractions(vec![
            vec![1, 2, 7, 1, -1, -15],
            vec![1, 1, 3, 1, 0, -6],
            vec![3, 2, 5, -1, 9, 19],
            vec![1, -1, -5, 2, 0, 5],
        ]));
        assert_eq!(
            reduced,
            fractions(vec![
                vec![1, 0, -1, 0, 3, 10],
                vec![0, 1, 4, 0, -1, -9],
                vec![0, 0, 0, 1, -2, -7],
                vec![0, 0, 0, 0, 0, 0],
            ])
        );

        let reduced = reduce(fractions(vec![
            vec![2, 1, 5, 1, 5, 1],
            vec![1, 1, 3, 1, 6, -1],
            vec![-1, 1, -1, 0, 4, -3],
            vec![-3, 2, -4, -4, -7, 0],
            vec![3, -1, 5, 2, 2, 3],
        ]));
        assert_eq!(
            reduced,
            fractions(vec![
                vec![1, 0, 2, 0, -1, 2],
                vec![0, 1, 1, 0, 3, -1],
                vec![0, 0, 0, 1, 4, -2],
                vec![0, 0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0],
            ])
        );
    }

    #[test]
    fn test_reduce_needs_more_than_one_round() {
        let input = fractions(vec![
            vec![-1, 1, 1, 1, 0],
            vec![2, -1, 0, 2, 0],
            vec![1, 0, -1, 0, 1],
            vec![0, 0, -1, 2, 1],
        ]);

        let mut once = input.clone();
        forward_pass(&mut once);
        backward_pass(&mut once);
        assert_eq!(
            once,
            parsed(vec![
                vec!["1", "0", "0", "0", "2/7"],
                vec!["0", "1", "0", "8", "2"],
                vec!["0", "0", "1", "-2", "-1"],
                vec!["0", "0", "0", "1", "1/7"],
            ])
        );
        assert!(!once.is_rref());

        let reduction = reduce_with(input, &ReduceConfig::default());
        assert!(reduction.converged);
        assert_eq!(reduction.rounds, 3);
        assert_eq!(
            reduction.matrix,
            parsed(vec![
                vec!["1", "0", "0", "0", "2/7"],
                vec!["0", "1", "0", "0", "6/7"],
                vec!["0", "0", "1", "0", "-5/7"],
                vec!["0", "0", "0", "1", "1/7"],
            ])
        );
    }

    #[test]
    fn test_reduce_wide_system() {
        let reduced = reduce(fractions(vec![vec![0, 2, 0, 5, 5, 5], vec![-2, -1, 0, 5, 0, -2]]));
        assert_eq!(
            reduced,
            parsed(vec![
                vec!["1", "0", "0", "-15/4", "-5/4", "-1/4"],
                vec!["0", "1", "0", "5/2", "5/2", "5/2"],
            ])
        );
    }

    #[test]
    fn test_reduce_inconsistent_system() {
        let reduced = reduce(fractions(vec![vec![1, 1, 2], vec![2, 2, 5]]));
        assert_eq!(reduced, fractions(vec![vec![1, 1, 2], vec![0, 0, 1]]));
        assert!(reduced.is_rref());
    }

    #[test]
    fn test_reduce_degenerate_shapes() {
        let empty = fractions(vec![]);
        assert_eq!(reduce(empty.clone()), empty);

        let rhs_only = fractions(vec![vec![3], vec![0], vec![5]]);
        assert_eq!(reduce(rhs_only.clone()), rhs_only);

        let zeros = fractions(vec![vec![0, 0, 0], vec![0, 0, 0]]);
        assert_eq!(reduce(zeros.clone()), zeros);

        assert_eq!(reduce(fractions(vec![vec![4, 2]])), parsed(vec![vec!["1", "1/2"]]));
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let reduced = reduce(fractions(vec![
            vec![1, 2, 7, 1, -1, -15],
            vec![1, 1, 3, 1, 0, -6],
            vec![3, 2, 5, -1, 9, 19],
            vec![1, -1, -5, 2, 0, 5],
        ]));
        let reduction = reduce_with(reduced.clone(), &ReduceConfig::default());
        assert_eq!(reduction.rounds, 1);
        assert_eq!(reduction.matrix, reduced);
    }

    #[test]
    fn test_reduce_round_limit() {
        let input = fractions(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let reduction = reduce_with(input.clone(), &ReduceConfig { max_rounds: 0 });
        assert_eq!(reduction.matrix, input);
        assert!(!reduction.converged);
        assert_eq!(reduction.rounds, 0);
    }

    // Gauss-Jordan over every column, the augmented one included. Two matrices
    // span the same row space iff this gives the same result for both.
    fn canonical_row_space(matrix: &DenseMatrix<Fraction>) -> Vec<Vec<Fraction>> {
        let mut lines = matrix.to_list();
        let mut lead = 0;
        for col in 0..matrix.cols {
            let Some(pivot) = (lead..lines.len()).find(|&r| !lines[r][col].is_zero()) else {
                continue;
            };
            lines.swap(lead, pivot);
            let inverse = num_traits::Inv::inv(lines[lead][col].clone());
            lines[lead] = lines[lead].iter().map(|x| x.clone() * inverse.clone()).collect();
            for r in 0..lines.len() {
                if r != lead && !lines[r][col].is_zero() {
                    let factor = -lines[r][col].clone();
                    let source = lines[lead].clone();
                    lines[r] = lines[r]
                        .iter()
                        .zip(source)
                        .map(|(a, b)| a.clone() + factor.clone() * b)
                        .collect();
                }
            }
            lead += 1;
        }
        lines
    }

    #[test]
    fn test_reduce_random_matrices() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let values = [0, 0, 0, 1, -1, 2, -2, 3, 5, 7];

        for _ in 0..400 {
            let rows = rng.gen_range(1..=7);
            let cols = rng.gen_range(1..=8);
            let mut lines: Vec<Vec<i64>> = (0..rows)
                .map(|_| (0..cols).map(|_| values[rng.gen_range(0..values.len())]).collect())
                .collect();
            if rows > 2 && rng.gen_bool(0.5) {
                lines[rows - 1] = lines[0].iter().zip(&lines[1]).map(|(a, b)| a + b).collect();
            }

            let input = fractions(lines);
            let reduction = reduce_with(input.clone(), &ReduceConfig::default());
            let reduced = reduction.matrix;

            assert!(reduction.converged, "{input:?}");
            assert!(reduced.is_rref(), "{input:?} -> {reduced:?}");
            assert_eq!(reduced.shape(), input.shape());
            assert_eq!(canonical_row_space(&reduced), canonical_row_space(&input));
            assert_eq!(reduce(reduced.clone()), reduced);
        }
    }
}
