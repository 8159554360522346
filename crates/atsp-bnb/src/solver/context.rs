use atsp_core::{Cost, INF};
use log::debug;

/// Mutable search state threaded through the recursion, scoped to one
/// top-level `solve` call.
pub struct SearchContext {
    /// Tentative successor per node along the current include-branch stack.
    /// Entries are assigned before an include recursion and rolled back to
    /// `None` when it returns.
    pub partial: Vec<Option<usize>>,

    /// Best complete circuit found so far, as a successor map.
    pub best_successor: Vec<Option<usize>>,

    /// Cost of the incumbent circuit; the global pruning bound.
    pub best_bound: Cost,
}

impl SearchContext {
    pub fn new(n: usize) -> Self {
        SearchContext {
            partial: vec![None; n],
            best_successor: vec![None; n],
            best_bound: INF,
        }
    }

    /// Records a strictly better complete circuit: the current partial path
    /// plus the forced final arc. Caller checks `bound < self.best_bound`.
    pub fn commit_incumbent(&mut self, bound: Cost, final_from: usize, final_to: usize) {
        self.best_bound = bound;
        self.best_successor.copy_from_slice(&self.partial);
        self.best_successor[final_from] = Some(final_to);
        debug!("new incumbent circuit, cost {bound}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_copies_partial_and_adds_final_arc() {
        let mut ctx = SearchContext::new(3);
        ctx.partial[0] = Some(1);
        ctx.partial[1] = Some(2);
        ctx.commit_incumbent(10, 2, 0);

        assert_eq!(ctx.best_bound, 10);
        assert_eq!(ctx.best_successor, vec![Some(1), Some(2), Some(0)]);
        // The partial path itself is untouched.
        assert_eq!(ctx.partial, vec![Some(1), Some(2), None]);
    }

    #[test]
    fn later_commit_replaces_earlier_incumbent() {
        let mut ctx = SearchContext::new(2);
        ctx.commit_incumbent(20, 0, 1);
        ctx.partial[0] = Some(1);
        ctx.commit_incumbent(12, 1, 0);
        assert_eq!(ctx.best_bound, 12);
        assert_eq!(ctx.best_successor, vec![Some(1), Some(0)]);
    }
}
