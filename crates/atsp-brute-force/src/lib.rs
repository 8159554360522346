use atsp_core::{Cost, Matrix, SolveError, Tour, INF};

/// Exact minimum-cost Hamiltonian circuit by Held-Karp dynamic programming.
///
/// States are (subset of nodes `1..n` visited, last node); node 0 anchors the
/// circuit. O(2^n · n²) time and O(2^n · n) memory, so this is the ground
/// truth for small instances rather than a general-purpose solver.
pub fn solve(matrix: &Matrix) -> Result<Tour, SolveError> {
    matrix.validate()?;

    let n = matrix.n();
    let m = n - 1; // free nodes, node id = index + 1
    let full = (1usize << m) - 1;

    // Flattened tables indexed mask-major: slot = mask * m + last.
    let mut best: Vec<Cost> = vec![INF; (full + 1) * m];
    let mut parent = vec![usize::MAX; (full + 1) * m];

    for last in 0..m {
        best[(1 << last) * m + last] = matrix.get(0, last + 1);
    }

    for mask in 1..=full {
        for last in 0..m {
            if mask & (1 << last) == 0 {
                continue;
            }
            let cur = best[mask * m + last];
            if cur >= INF {
                continue;
            }
            for next in 0..m {
                if mask & (1 << next) != 0 {
                    continue;
                }
                let slot = (mask | (1 << next)) * m + next;
                let cand = cur + matrix.get(last + 1, next + 1);
                if cand < best[slot] {
                    best[slot] = cand;
                    parent[slot] = last;
                }
            }
        }
    }

    // Close the circuit back to node 0.
    let mut total = INF;
    let mut end = 0;
    for last in 0..m {
        let cand = best[full * m + last] + matrix.get(last + 1, 0);
        if cand < total {
            total = cand;
            end = last;
        }
    }

    let mut nodes = Vec::with_capacity(n);
    let mut mask = full;
    let mut last = end;
    while mask != 0 {
        nodes.push(last + 1);
        let prev = parent[mask * m + last];
        mask &= !(1 << last);
        if mask != 0 {
            last = prev;
        }
    }
    nodes.push(0);
    nodes.reverse();

    Ok(Tour { nodes, cost: total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use atsp_core::circuit_cost;

    fn matrix(rows: Vec<Vec<Cost>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    /// Minimum circuit cost by direct permutation enumeration.
    fn enumerate_optimum(m: &Matrix) -> Cost {
        fn go(m: &Matrix, seq: &mut Vec<usize>, used: &mut [bool], best: &mut Cost) {
            if seq.len() == m.n() {
                *best = (*best).min(circuit_cost(m, seq));
                return;
            }
            for next in 1..m.n() {
                if !used[next] {
                    used[next] = true;
                    seq.push(next);
                    go(m, seq, used, best);
                    seq.pop();
                    used[next] = false;
                }
            }
        }
        let mut best = INF;
        let mut used = vec![false; m.n()];
        used[0] = true;
        go(m, &mut vec![0], &mut used, &mut best);
        best
    }

    #[test]
    fn four_node_reference_instance() {
        let m = matrix(vec![
            vec![0, 10, 15, 20],
            vec![5, 0, 9, 10],
            vec![6, 13, 0, 12],
            vec![8, 8, 9, 0],
        ]);
        let tour = solve(&m).unwrap();
        assert_eq!(tour.cost, 35);
        assert_eq!(circuit_cost(&m, &tour.nodes), 35);
    }

    #[test]
    fn two_node_instance_has_the_only_circuit() {
        let m = matrix(vec![vec![0, 5], vec![7, 0]]);
        let tour = solve(&m).unwrap();
        assert_eq!(tour.nodes, vec![0, 1]);
        assert_eq!(tour.cost, 12);
    }

    #[test]
    fn matches_permutation_enumeration() {
        // Deterministic but irregular costs.
        let n = 7;
        let mut m = Matrix::filled(n, 0);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    m.set(i, j, ((i as Cost + 3) * (j as Cost + 7) * 13) % 41 + 1);
                }
            }
        }
        let tour = solve(&m).unwrap();
        assert_eq!(tour.cost, enumerate_optimum(&m));
        assert_eq!(circuit_cost(&m, &tour.nodes), tour.cost);
    }

    #[test]
    fn tour_visits_every_node_once() {
        let m = matrix(vec![
            vec![0, 2, 9, 10, 4],
            vec![1, 0, 6, 4, 8],
            vec![15, 7, 0, 8, 3],
            vec![6, 3, 12, 0, 9],
            vec![10, 4, 8, 5, 0],
        ]);
        let tour = solve(&m).unwrap();
        let mut seen = vec![false; 5];
        for &node in &tour.nodes {
            assert!(!seen[node]);
            seen[node] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(tour.nodes[0], 0);
    }

    #[test]
    fn rejects_invalid_instances() {
        let single = matrix(vec![vec![0]]);
        assert!(matches!(
            solve(&single),
            Err(SolveError::TooSmall { n: 1 })
        ));
    }

    #[test]
    fn solves_a_json_fixture() {
        let m: Matrix = serde_json::from_str(
            r#"{"n":3,"values":[0,1,4,2,0,1,1,3,0]}"#,
        )
        .unwrap();
        let tour = solve(&m).unwrap();
        assert_eq!(tour.cost, 3);
        assert_eq!(tour.nodes, vec![0, 1, 2]);
    }
}
