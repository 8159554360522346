use serde::{Deserialize, Serialize};
use std::fmt;

/// Arc cost scalar. Integer costs keep reduction and bound comparisons exact.
pub type Cost = u64;

/// Sentinel for a forbidden arc (self-loop or excluded edge). A quarter of the
/// `u64` range so that accumulating a handful of sentinels can never wrap.
pub const INF: Cost = u64::MAX / 4;

/// Square cost matrix over `n` nodes, `cost(i, j)` for every ordered pair.
///
/// Flattened row-major storage for cache locality.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    n: usize,
    values: Vec<Cost>,
}

impl Matrix {
    /// Builds a matrix from nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self, SolveError> {
        let n = rows.len();
        let mut values = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(SolveError::NotSquare {
                    row: i,
                    expected: n,
                    found: row.len(),
                });
            }
            values.extend(row);
        }
        Ok(Matrix { n, values })
    }

    /// An `n` x `n` matrix with every entry set to `value`.
    pub fn filled(n: usize, value: Cost) -> Self {
        Matrix {
            n,
            values: vec![value; n * n],
        }
    }

    #[inline(always)]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> Cost {
        self.values[i * self.n + j]
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, value: Cost) {
        self.values[i * self.n + j] = value;
    }

    /// Checks the solver preconditions: at least two nodes and a finite cost
    /// for every ordered off-diagonal pair. Diagonal entries are exempt, the
    /// solvers overwrite them with [`INF`] before searching.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.n < 2 {
            return Err(SolveError::TooSmall { n: self.n });
        }
        for i in 0..self.n {
            for j in 0..self.n {
                if i != j && self.get(i, j) >= INF {
                    return Err(SolveError::InfiniteCost { from: i, to: j });
                }
            }
        }
        Ok(())
    }
}

/// A Hamiltonian circuit: `nodes` starts at node 0 and lists every node
/// exactly once; `cost` is the total including the closing arc back to 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub nodes: Vec<usize>,
    pub cost: Cost,
}

/// Sums `cost(seq[i], seq[i + 1])` circularly over `nodes`.
pub fn circuit_cost(matrix: &Matrix, nodes: &[usize]) -> Cost {
    let mut total = 0;
    for (i, &from) in nodes.iter().enumerate() {
        let to = nodes[(i + 1) % nodes.len()];
        total += matrix.get(from, to);
    }
    total
}

/// Input rejections shared by all solvers in the workspace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    TooSmall {
        n: usize,
    },
    InfiniteCost {
        from: usize,
        to: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::NotSquare {
                row,
                expected,
                found,
            } => write!(
                f,
                "matrix is not square: row {row} has {found} entries, expected {expected}"
            ),
            SolveError::TooSmall { n } => {
                write!(f, "instance has {n} nodes, need at least 2")
            }
            SolveError::InfiniteCost { from, to } => {
                write!(f, "cost({from}, {to}) is not finite")
            }
        }
    }
}

impl std::error::Error for SolveError {}
