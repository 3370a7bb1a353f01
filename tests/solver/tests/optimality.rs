//! Optimality cross-check against exhaustive breadth-first search.
//!
//! For every permutation of the small sizes, the engine's move count must
//! equal the true optimal reversal distance. The reference distances come
//! from one BFS per size, flooding out from the sorted state: a reversal is
//! its own inverse, so distance-from-goal equals distance-to-goal.

use std::collections::{HashMap, VecDeque};

use revsort_kernel::{Permutation, ReversalMove};
use revsort_search::path::reconstruct;
use revsort_search::search::search;
use solver_tests::permutations;

fn optimal_distances(n: usize) -> HashMap<Vec<u32>, usize> {
    let goal = Permutation::sorted(n);
    let mut distances: HashMap<Vec<u32>, usize> = HashMap::new();
    distances.insert(goal.values().to_vec(), 0);

    let mut queue = VecDeque::from([goal]);
    while let Some(state) = queue.pop_front() {
        let depth = distances[state.values()];
        for mv in ReversalMove::enumerate(n) {
            let mut next = state.clone();
            next.reverse_block(mv);
            if !distances.contains_key(next.values()) {
                distances.insert(next.values().to_vec(), depth + 1);
                queue.push_back(next);
            }
        }
    }
    distances
}

fn assert_engine_optimal_for(n: usize) {
    let distances = optimal_distances(n);
    for values in permutations(n) {
        let initial = Permutation::from_values(values.clone()).unwrap();
        let result = search(initial.clone());
        let path = reconstruct(&result).unwrap_or_else(|| {
            panic!("engine failed to solve {initial} (n = {n})");
        });

        let optimal = distances[&values];
        assert_eq!(
            path.move_count(),
            optimal,
            "suboptimal solution for {initial}: got {}, optimal {optimal}",
            path.move_count()
        );

        // The path must also be real: replay it.
        let mut replay = initial;
        for mv in path.moves() {
            replay.reverse_block(mv);
        }
        assert!(replay.is_sorted());
    }
}

#[test]
fn engine_is_optimal_for_all_permutations_up_to_five() {
    for n in 1..=5 {
        assert_engine_optimal_for(n);
    }
}

#[test]
fn engine_is_optimal_for_all_permutations_of_six() {
    assert_engine_optimal_for(6);
}
