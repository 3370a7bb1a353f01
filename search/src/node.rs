//! Core search node and frontier ordering key.

use std::hash::{Hash, Hasher};

use revsort_kernel::{Permutation, ReversalMove};

/// Stable identifier of a node inside the search arena.
///
/// Nodes are appended to the arena in creation order and never removed, so
/// the arena index doubles as the creation-order counter.
pub type NodeId = usize;

/// An immutable state node discovered during search.
///
/// Nodes live in the arena owned by [`crate::SearchResult`]; lineage is
/// expressed through `parent` indices rather than shared pointers, and the
/// whole arena is dropped at once when the result goes out of scope. Nothing
/// is mutated after construction.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Arena index (equals creation order).
    pub id: NodeId,
    /// Parent arena index (`None` for the root).
    pub parent: Option<NodeId>,
    /// Immutable snapshot of the permutation at this node.
    pub values: Permutation,
    /// Path cost: number of reversals from the root.
    pub g: u32,
    /// Heuristic estimate, computed once from the snapshot's breakpoints.
    pub h: u32,
    /// The reversal that produced this node from its parent (`None` for the
    /// root). Display-only; never part of equality.
    pub producing_move: Option<ReversalMove>,
}

impl SearchNode {
    /// `f = g + h`, the primary frontier ordering component.
    #[must_use]
    pub fn f(&self) -> u32 {
        self.g + self.h
    }

    /// The frontier extraction key for this node.
    #[must_use]
    pub fn key(&self) -> FrontierKey {
        FrontierKey {
            f: self.f(),
            h: self.h,
            creation_order: self.id,
        }
    }
}

/// Equality is by permutation content ONLY — `g`, `h`, lineage, and the
/// producing move are deliberately ignored. Two nodes reached by different
/// paths to the same permutation are the same state, which is what lets the
/// visited table suppress re-discovery.
impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl Eq for SearchNode {}

/// Hash agrees with the content-only equality above.
impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

/// The frontier ordering key: `(f, h, creation_order)`.
///
/// Lower `f` first; on an `f` tie, the lower heuristic estimate wins
/// (biasing toward states estimated closer to the goal); creation order
/// settles what remains, making extraction fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f: u32,
    pub h: u32,
    pub creation_order: NodeId,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f
            .cmp(&other.f)
            .then(self.h.cmp(&other.h))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
