//! Degree and subtour constraints over the tentative partial path.
//!
//! Both predicates work in original node coordinates. The union-find is
//! rebuilt from the committed arcs on every call; the partial path never
//! exceeds n arcs, so the scratch structure stays small.

/// Root of `idx` in the scratch forest. No path compression, the forest is
/// discarded after one check.
fn find(group: &[usize], mut idx: usize) -> usize {
    while group[idx] != idx {
        idx = group[idx];
    }
    idx
}

/// Whether committing the arc `from -> to` keeps the partial path a set of
/// disjoint simple chains: `from` must have no successor yet, `to` must not
/// already be somebody's successor, and the arc must not close a cycle while
/// other nodes remain uncovered.
///
/// Panics if the already-committed arcs themselves contain a cycle. That can
/// only happen through a bug in this module, never through caller input.
pub fn include_feasible(partial: &[Option<usize>], from: usize, to: usize) -> bool {
    let n = partial.len();

    if partial[from].is_some() {
        return false;
    }
    if partial.iter().any(|&succ| succ == Some(to)) {
        return false;
    }

    let mut group: Vec<usize> = (0..n).collect();
    for (node, succ) in partial.iter().enumerate() {
        let Some(succ) = *succ else { continue };

        let low = node.min(succ);
        let high = node.max(succ);
        let mut low_group = find(&group, low);
        let mut high_group = find(&group, high);

        if low_group == high_group {
            panic!("partial path contains a premature cycle through nodes {low} and {high}");
        }
        if low_group > high_group {
            std::mem::swap(&mut low_group, &mut high_group);
        }
        group[high_group] = low_group;
    }

    find(&group, from) != find(&group, to)
}

/// Whether forbidding the arc `from -> to` still leaves a way to complete the
/// circuit: `from` must have some other feasible destination and `to` some
/// other feasible source, otherwise the exclusion strands a node.
pub fn exclude_feasible(partial: &[Option<usize>], from: usize, to: usize) -> bool {
    let n = partial.len();

    let from_has_alternative =
        (0..n).any(|dest| dest != to && include_feasible(partial, from, dest));
    if !from_has_alternative {
        return false;
    }

    (0..n).any(|source| source != from && include_feasible(partial, source, to))
}
