//! Path reconstruction: walk parent references from goal back to root.

use revsort_kernel::{Permutation, ReversalMove};

use crate::node::NodeId;
use crate::search::SearchResult;

/// One state along the solution, root first.
#[derive(Debug, Clone)]
pub struct PathStep {
    /// The reversal that produced this state (`None` for the root step).
    pub mv: Option<ReversalMove>,
    /// The permutation after the move.
    pub values: Permutation,
    /// Path cost at this step.
    pub g: u32,
    /// Heuristic estimate at this step.
    pub h: u32,
}

/// The ordered root-to-goal solution, plus the search-effort headline
/// number callers report alongside it.
#[derive(Debug, Clone)]
pub struct SolutionPath {
    steps: Vec<PathStep>,
    visited_states: usize,
}

impl SolutionPath {
    /// All steps, root first. The first step carries no move.
    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Number of moves (one fewer than the number of steps).
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.steps.len() - 1
    }

    /// The move sequence alone, in application order.
    #[must_use]
    pub fn moves(&self) -> Vec<ReversalMove> {
        self.steps.iter().filter_map(|step| step.mv).collect()
    }

    /// Distinct permutations discovered while finding this path.
    #[must_use]
    pub fn visited_states(&self) -> usize {
        self.visited_states
    }
}

/// Reconstruct the solution from a finished search, or `None` if the search
/// did not reach the goal.
///
/// Follows `parent` indices from the goal to the node with no parent, then
/// reverses the chain so the root comes first.
#[must_use]
pub fn reconstruct(result: &SearchResult) -> Option<SolutionPath> {
    let goal = result.goal?;

    let mut chain: Vec<NodeId> = Vec::new();
    let mut cursor = Some(goal);
    while let Some(id) = cursor {
        chain.push(id);
        cursor = result.nodes[id].parent;
    }
    chain.reverse();

    let steps = chain
        .into_iter()
        .map(|id| {
            let node = &result.nodes[id];
            PathStep {
                mv: node.producing_move,
                values: node.values.clone(),
                g: node.g,
                h: node.h,
            }
        })
        .collect();

    Some(SolutionPath {
        steps,
        visited_states: result.stats.visited_states,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search, SearchStats};

    #[test]
    fn unreached_goal_reconstructs_to_none() {
        let result = SearchResult {
            goal: None,
            nodes: Vec::new(),
            stats: SearchStats::default(),
        };
        assert!(reconstruct(&result).is_none());
    }

    #[test]
    fn root_goal_yields_single_step_zero_moves() {
        let result = search(Permutation::sorted(4));
        let path = reconstruct(&result).unwrap();
        assert_eq!(path.move_count(), 0);
        assert_eq!(path.steps().len(), 1);
        assert!(path.steps()[0].mv.is_none());
        assert!(path.steps()[0].values.is_sorted());
    }

    #[test]
    fn steps_run_root_first_with_unit_cost_increments() {
        let initial = Permutation::from_values(vec![1, 3, 6, 4, 2, 5]).unwrap();
        let result = search(initial.clone());
        let path = reconstruct(&result).unwrap();

        assert_eq!(path.steps()[0].values, initial, "path must start at the root");
        assert!(path.steps().last().unwrap().values.is_sorted());
        #[allow(clippy::cast_possible_truncation)]
        for (i, step) in path.steps().iter().enumerate() {
            assert_eq!(step.g, i as u32, "g must count moves from the root");
            assert_eq!(step.mv.is_none(), i == 0, "only the root lacks a move");
        }
    }

    #[test]
    fn replaying_the_moves_reaches_the_goal() {
        let initial = Permutation::from_values(vec![2, 5, 3, 1, 4]).unwrap();
        let result = search(initial.clone());
        let path = reconstruct(&result).unwrap();

        let mut replay = initial;
        for mv in path.moves() {
            replay.reverse_block(mv);
        }
        assert!(replay.is_sorted(), "move list must actually sort the input");
    }

    #[test]
    fn visited_states_mirrors_search_stats() {
        let initial = Permutation::from_values(vec![3, 1, 2]).unwrap();
        let result = search(initial);
        let path = reconstruct(&result).unwrap();
        assert_eq!(path.visited_states(), result.stats.visited_states);
    }
}
