pub mod context;
pub mod feasibility;
pub mod reduce;
pub mod types;

use atsp_core::{Cost, Matrix, SolveError, Tour, INF};

use context::SearchContext;
use feasibility::{exclude_feasible, include_feasible};
use reduce::{reduce, select_arc};

/// Minimum-cost Hamiltonian circuit over `matrix` by branch and bound with
/// reduced-matrix lower bounds.
///
/// `matrix.get(i, j)` is the cost of travelling from node `i` to node `j`;
/// diagonal entries are ignored. Returns the circuit as the node sequence
/// starting at node 0 plus its total cost. Worst-case exponential time, as
/// inherent to the problem.
pub fn solve(matrix: &Matrix) -> Result<Tour, SolveError> {
    matrix.validate()?;

    let n = matrix.n();
    let mut work = matrix.clone();
    for i in 0..n {
        work.set(i, i, INF); // no standing still
    }

    let rows: Vec<usize> = (0..n).collect();
    let cols: Vec<usize> = (0..n).collect();
    let mut ctx = SearchContext::new(n);

    search(&mut ctx, &rows, &cols, work, 0);

    // A complete matrix always has a circuit, so the search must have
    // committed an incumbent.
    debug_assert!(ctx.best_bound < INF);
    let nodes = reconstruct(&ctx.best_successor, 0);
    debug_assert_eq!(nodes.len(), n);

    Ok(Tour {
        nodes,
        cost: ctx.best_bound,
    })
}

/// One level of the branch-and-bound recursion.
///
/// `rows`/`cols` map the compressed matrix back to original node ids and
/// always have equal length. The matrix is owned by this frame: the include
/// branch recurses on a shrunk copy, the exclude branch forbids one entry in
/// place and recurses on the rest of this frame's copy, so no sibling ever
/// observes either mutation.
fn search(
    ctx: &mut SearchContext,
    rows: &[usize],
    cols: &[usize],
    mut matrix: Matrix,
    bound: Cost,
) {
    if bound >= ctx.best_bound {
        return;
    }

    let bound = bound.saturating_add(reduce(&mut matrix));
    if bound >= ctx.best_bound {
        return;
    }

    let arc = select_arc(&matrix);
    let from = rows[arc.row];
    let to = cols[arc.col];

    if rows.len() == 1 {
        // The single remaining entry is the forced closing arc.
        let total = bound.saturating_add(arc.cost);
        if total < ctx.best_bound {
            ctx.commit_incumbent(total, from, to);
        }
        return;
    }

    let can_include = include_feasible(&ctx.partial, from, to);
    let can_exclude = exclude_feasible(&ctx.partial, from, to);
    if !can_include && !can_exclude {
        // Dead end: neither committing nor forbidding the arc leaves a
        // completable circuit. Backtrack.
        return;
    }

    if can_include {
        let (sub_rows, sub_cols, sub_matrix) = shrink(rows, cols, &matrix, arc.row, arc.col);
        ctx.partial[from] = Some(to);
        search(
            ctx,
            &sub_rows,
            &sub_cols,
            sub_matrix,
            bound.saturating_add(arc.cost),
        );
        ctx.partial[from] = None;
    }

    if can_exclude {
        if arc.opportunity_cost.saturating_add(bound) >= ctx.best_bound {
            return;
        }
        matrix.set(arc.row, arc.col, INF);
        search(ctx, rows, cols, matrix, bound);
    }
}

/// Copy of the matrix and index sets with the included arc's row and column
/// removed.
fn shrink(
    rows: &[usize],
    cols: &[usize],
    matrix: &Matrix,
    skip_row: usize,
    skip_col: usize,
) -> (Vec<usize>, Vec<usize>, Matrix) {
    let sub_rows: Vec<usize> = rows
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != skip_row)
        .map(|(_, &node)| node)
        .collect();
    let sub_cols: Vec<usize> = cols
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != skip_col)
        .map(|(_, &node)| node)
        .collect();

    let mut sub_matrix = Matrix::filled(sub_rows.len(), 0);
    let mut si = 0;
    for i in 0..rows.len() {
        if i == skip_row {
            continue;
        }
        let mut sj = 0;
        for j in 0..cols.len() {
            if j == skip_col {
                continue;
            }
            sub_matrix.set(si, sj, matrix.get(i, j));
            sj += 1;
        }
        si += 1;
    }

    (sub_rows, sub_cols, sub_matrix)
}

/// Unrolls the best-known successor map into the circuit's node order,
/// starting at `start`. Visited entries are cleared as they are consumed, so
/// a malformed map can cut the walk short but never loop it forever.
fn reconstruct(successor: &[Option<usize>], start: usize) -> Vec<usize> {
    let mut links = successor.to_vec();
    let mut path = Vec::with_capacity(links.len());
    let mut current = start;

    loop {
        path.push(current);
        match links[current].take() {
            Some(next) if next != start => current = next,
            _ => break,
        }
    }

    path
}
