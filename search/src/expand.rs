//! Candidate generation: every block reversal of the working permutation.
//!
//! One mutable working buffer serves the whole expansion. Each candidate is
//! produced by the apply/snapshot/undo pattern: the reversal is applied
//! through a [`revsort_kernel::ReversalScope`], the resulting permutation is
//! snapshotted while the scope is alive, and dropping the scope restores the
//! buffer before the next candidate. The buffer is bit-identical before and
//! after a full enumeration.

use revsort_kernel::{Permutation, ReversalMove};

/// A prospective child state: the move, the snapshot it produces, and the
/// heuristic recomputed fresh on that snapshot.
///
/// Candidates carry no cost or lineage — the search loop owns those when it
/// decides which candidates become arena nodes.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub mv: ReversalMove,
    pub values: Permutation,
    pub h: u32,
}

/// Enumerate all `C(n, 2)` reversal candidates of `working`, in ascending
/// `(from, to)` order.
#[must_use]
pub fn enumerate_candidates(working: &mut Permutation) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(ReversalMove::count(working.len()));
    for mv in ReversalMove::enumerate(working.len()) {
        let scope = working.reversed_scope(mv);
        let values = scope.state().clone();
        let h = values.heuristic();
        candidates.push(Candidate { mv, values, h });
        // scope drops here, undoing the reversal
    }
    candidates
}
