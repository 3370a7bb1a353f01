//! Search entry point and expansion loop.
//!
//! Plain A* over permutation states: pop the best `(f, h)` node, goal-test
//! it, expand every block reversal, and keep only first discoveries of each
//! permutation. The visited table is never updated after first insertion —
//! a later, cheaper path to an already-seen state is discarded. This keeps
//! the table write-once at the cost of textbook re-opening semantics; the
//! heuristic is consistent for this move set, so in practice solutions come
//! out optimal (the acceptance suite cross-checks small sizes by exhaustive
//! breadth-first search).
//!
//! There is no expansion budget, frontier cap, or visited eviction: memory
//! grows with the number of distinct permutations discovered, and a caller
//! wanting a bounded search must wrap the call externally.

use revsort_kernel::Permutation;

use crate::expand::enumerate_candidates;
use crate::frontier::BestFirstFrontier;
use crate::node::{NodeId, SearchNode};

/// Effort counters accumulated by one search run.
///
/// Observable only — nothing here feeds back into expansion decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Pop-and-expand cycles executed.
    pub iterations: u64,
    /// Child candidates generated across all expansions.
    pub generated: u64,
    /// Candidates discarded because their content was already discovered.
    pub duplicates_suppressed: u64,
    /// Distinct permutations discovered (visited-table size).
    pub visited_states: usize,
    /// High-water mark of the open heap.
    pub frontier_high_water: usize,
}

/// Result of a search execution.
///
/// Owns the node arena: every discovered node, goal ancestors included,
/// lives here until the whole result is dropped. `goal` is `None` when the
/// frontier emptied without reaching the goal — a normal outcome, not an
/// error (for valid puzzles it is only reachable if the caller aborted the
/// state space externally, but the engine handles it defensively).
#[derive(Debug)]
pub struct SearchResult {
    /// Arena index of the goal node, if one was reached.
    pub goal: Option<NodeId>,
    /// All nodes created during the search, indexed by [`NodeId`].
    pub nodes: Vec<SearchNode>,
    /// Effort counters.
    pub stats: SearchStats,
}

impl SearchResult {
    /// Returns `true` if the search terminated on the goal state.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.goal.is_some()
    }
}

/// Run A* from `initial` until the goal is reached or the frontier empties.
///
/// The root is seeded with `g = 0` and a fresh heuristic; children cost
/// `parent.g + 1` each. Expansion order is fully deterministic: the frontier
/// key is `(f, h, creation order)` and candidates are generated in ascending
/// `(from, to)` order.
#[must_use]
pub fn search(initial: Permutation) -> SearchResult {
    let mut frontier = BestFirstFrontier::new();
    let mut nodes: Vec<SearchNode> = Vec::new();
    let mut working = initial.clone();
    let mut stats = SearchStats::default();

    let root = SearchNode {
        id: 0,
        parent: None,
        values: initial,
        g: 0,
        h: working.heuristic(),
        producing_move: None,
    };
    tracing::debug!(n = root.values.len(), h = root.h, "seeding search");
    frontier.push(&root);
    nodes.push(root);

    let goal = loop {
        let Some(current_id) = frontier.pop() else {
            tracing::debug!(
                iterations = stats.iterations,
                "frontier exhausted without reaching the goal"
            );
            break None;
        };
        stats.iterations += 1;

        working.clone_from(&nodes[current_id].values);
        if working.is_sorted() {
            // Resolve through the visited table; content keying makes this
            // the identical node that was just popped.
            break frontier.visited_id(&working);
        }

        let parent_g = nodes[current_id].g;
        for candidate in enumerate_candidates(&mut working) {
            stats.generated += 1;
            let child = SearchNode {
                id: nodes.len(),
                parent: Some(current_id),
                values: candidate.values,
                g: parent_g + 1,
                h: candidate.h,
                producing_move: Some(candidate.mv),
            };
            if frontier.push(&child) {
                nodes.push(child);
            } else {
                stats.duplicates_suppressed += 1;
            }
        }

        tracing::trace!(
            iteration = stats.iterations,
            expanded = current_id,
            f = nodes[current_id].f(),
            open = frontier.len(),
            visited = frontier.visited_count(),
            "expanded node"
        );
    };

    stats.visited_states = frontier.visited_count();
    stats.frontier_high_water = frontier.high_water();
    if let Some(goal_id) = goal {
        tracing::debug!(
            goal = goal_id,
            moves = nodes[goal_id].g,
            iterations = stats.iterations,
            visited = stats.visited_states,
            "goal reached"
        );
    }

    SearchResult { goal, nodes, stats }
}
