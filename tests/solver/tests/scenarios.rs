//! End-to-end scenario tests.
//!
//! - SCRAMBLED-SIX: `[1,3,6,4,2,5]` is not the goal, solves, and replays
//!   to the identity.
//! - SORTED-THREE: `[1,2,3]` terminates at the root with zero moves.
//! - DESCENDING-FOUR: `[4,3,2,1]` solves in exactly one move, `(1, 4)`.
//! - SEEDED-RANDOM: a seeded random request is reproducible end to end.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use revsort_harness::{run, PuzzleSource, SolveOutcome, SolveRequest};
use revsort_kernel::Permutation;
use revsort_search::path::reconstruct;
use revsort_search::search::search;

// --- SCRAMBLED-SIX ---

#[test]
fn scrambled_six_solves_and_replays_to_identity() {
    let initial = Permutation::from_values(vec![1, 3, 6, 4, 2, 5]).unwrap();
    assert!(!initial.is_sorted(), "scenario input must start unsorted");

    let result = search(initial.clone());
    assert!(result.is_goal_reached(), "engine must terminate with a goal node");

    let path = reconstruct(&result).unwrap();
    let mut replay = initial;
    for mv in path.moves() {
        replay.reverse_block(mv);
    }
    assert_eq!(replay.values(), &[1, 2, 3, 4, 5, 6]);
}

// --- SORTED-THREE ---

#[test]
fn sorted_three_terminates_immediately_with_zero_moves() {
    let initial = Permutation::from_values(vec![1, 2, 3]).unwrap();
    let result = search(initial);

    assert!(result.is_goal_reached());
    assert_eq!(result.stats.iterations, 1, "root pop only");

    let path = reconstruct(&result).unwrap();
    assert_eq!(path.move_count(), 0);
}

// --- DESCENDING-FOUR ---

#[test]
fn descending_four_solves_in_exactly_one_full_reversal() {
    let initial = Permutation::from_values(vec![4, 3, 2, 1]).unwrap();
    let result = search(initial);

    let path = reconstruct(&result).unwrap();
    assert_eq!(path.move_count(), 1);
    let mv = path.moves()[0];
    assert_eq!((mv.from(), mv.to()), (1, 4));
}

// --- SEEDED-RANDOM ---

#[test]
fn seeded_random_request_is_reproducible_end_to_end() {
    let request = SolveRequest {
        size: 7,
        source: PuzzleSource::Random { seed: Some(2024) },
    };

    let first = run(&request).unwrap();
    let second = run(&request).unwrap();
    assert_eq!(first.initial, second.initial);

    // The instance the runner built is the one the seed dictates.
    let expected = Permutation::random(7, &mut ChaCha8Rng::seed_from_u64(2024));
    assert_eq!(first.initial, expected);

    let (SolveOutcome::Solved(a), SolveOutcome::Solved(b)) = (&first.outcome, &second.outcome)
    else {
        panic!("random 7-puzzles are always solvable");
    };
    assert_eq!(a.moves(), b.moves(), "identical instance, identical solution");
}
