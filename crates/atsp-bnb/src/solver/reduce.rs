use atsp_core::{Cost, Matrix, INF};

use super::types::{ArcChoice, Smallest};

/// Row/column reduction. Subtracts each row's and then each column's minimum
/// finite value from its finite entries and returns the summed minima, a valid
/// lower bound on completing the subproblem this matrix represents. Forbidden
/// entries stay at [`INF`]. Idempotent: a second call returns 0.
///
/// A row or column with no finite entry at all contributes [`INF`] to the
/// returned bound, so the caller prunes the subproblem as hopeless.
pub fn reduce(matrix: &mut Matrix) -> Cost {
    let n = matrix.n();
    let mut total: Cost = 0;

    for row in 0..n {
        let mut min = INF;
        for col in 0..n {
            min = min.min(matrix.get(row, col));
        }
        if min == 0 {
            continue;
        }
        if min >= INF {
            total = total.saturating_add(INF);
            continue;
        }
        for col in 0..n {
            let value = matrix.get(row, col);
            if value < INF {
                matrix.set(row, col, value - min);
            }
        }
        total = total.saturating_add(min);
    }

    for col in 0..n {
        let mut min = INF;
        for row in 0..n {
            min = min.min(matrix.get(row, col));
        }
        if min == 0 {
            continue;
        }
        if min >= INF {
            total = total.saturating_add(INF);
            continue;
        }
        for row in 0..n {
            let value = matrix.get(row, col);
            if value < INF {
                matrix.set(row, col, value - min);
            }
        }
        total = total.saturating_add(min);
    }

    total
}

/// Picks the zero entry whose exclusion would inflate the lower bound the
/// most: minimum cost first, then maximum opportunity cost, earliest entry in
/// row-major order on remaining ties.
pub fn select_arc(matrix: &Matrix) -> ArcChoice {
    let n = matrix.n();
    let (row_min, col_min) = two_smallest(matrix);

    let mut best = ArcChoice {
        row: 0,
        col: 0,
        cost: INF,
        opportunity_cost: 0,
    };

    for row in 0..n {
        for col in 0..n {
            let cost = matrix.get(row, col);
            if cost > best.cost {
                continue;
            }

            // Opportunity cost: the cheapest way out of this row and into
            // this column if this entry were forbidden.
            let row_alt = if cost == row_min[row].first {
                row_min[row].second
            } else {
                row_min[row].first
            };
            let col_alt = if cost == col_min[col].first {
                col_min[col].second
            } else {
                col_min[col].first
            };
            let opportunity_cost = row_alt.saturating_add(col_alt);

            if cost < best.cost || opportunity_cost > best.opportunity_cost {
                best = ArcChoice {
                    row,
                    col,
                    cost,
                    opportunity_cost,
                };
            }
        }
    }

    best
}

/// First and second smallest value of every row and every column.
fn two_smallest(matrix: &Matrix) -> (Vec<Smallest>, Vec<Smallest>) {
    let n = matrix.n();
    let mut rows = Vec::with_capacity(n);
    let mut cols = Vec::with_capacity(n);

    for row in 0..n {
        let mut min = Smallest {
            first: INF,
            second: INF,
        };
        for col in 0..n {
            let value = matrix.get(row, col);
            if value < min.first {
                min.second = min.first;
                min.first = value;
            } else if value < min.second {
                min.second = value;
            }
        }
        rows.push(min);
    }

    for col in 0..n {
        let mut min = Smallest {
            first: INF,
            second: INF,
        };
        for row in 0..n {
            let value = matrix.get(row, col);
            if value < min.first {
                min.second = min.first;
                min.first = value;
            } else if value < min.second {
                min.second = value;
            }
        }
        cols.push(min);
    }

    (rows, cols)
}
