//! Harness runner: validate a request, run the engine, time it.
//!
//! # Pipeline
//!
//! ```text
//! SolveRequest → validate/instantiate puzzle
//!   → search() → reconstruct() → SolveReport (path or exhaustion + timing)
//! ```

use std::fmt;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use revsort_kernel::{Permutation, PermutationError};
use revsort_search::path::reconstruct;
use revsort_search::search::search;
use revsort_search::{SearchStats, SolutionPath};

/// Where the puzzle values come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleSource {
    /// Caller-supplied values, validated against the declared size.
    Explicit(Vec<u32>),
    /// A generated instance; a fixed seed makes it reproducible, no seed
    /// draws one from OS entropy.
    Random { seed: Option<u64> },
}

/// A complete solve request: the puzzle size plus its value source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRequest {
    pub size: usize,
    pub source: PuzzleSource,
}

/// Error during request validation.
///
/// Everything past validation is infallible: the engine itself has no error
/// path, and exhaustion is reported through [`SolveOutcome`], not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The puzzle requires `size >= 1`.
    InvalidSize,
    /// Explicit values disagree with the declared size.
    SizeMismatch { expected: usize, actual: usize },
    /// Explicit values are not a permutation of `1..=size`.
    InvalidPermutation(PermutationError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize => write!(f, "puzzle size must be at least 1"),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "expected {expected} values, got {actual}")
            }
            Self::InvalidPermutation(err) => write!(f, "invalid permutation: {err}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPermutation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PermutationError> for RunError {
    fn from(err: PermutationError) -> Self {
        Self::InvalidPermutation(err)
    }
}

/// How the search ended.
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    /// Goal reached; the reconstructed root-to-goal path.
    Solved(SolutionPath),
    /// Frontier emptied first. Normal, not an error.
    Exhausted,
}

/// Everything the caller asked for: the instance, the outcome, the effort
/// counters, and the wall-clock time the search took.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub initial: Permutation,
    pub outcome: SolveOutcome,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

impl SolveReport {
    /// Returns `true` if a solution path was found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, SolveOutcome::Solved(_))
    }
}

/// Validate the request, build the puzzle instance, and run the search.
///
/// # Errors
///
/// Returns [`RunError`] when the request is malformed — before any search
/// machinery is touched. A finished-but-goalless search is NOT an error;
/// see [`SolveOutcome::Exhausted`].
pub fn run(request: &SolveRequest) -> Result<SolveReport, RunError> {
    let initial = instantiate(request)?;
    tracing::debug!(size = initial.len(), initial = %initial, "starting solve");

    let started = Instant::now();
    let result = search(initial.clone());
    let elapsed = started.elapsed();

    let outcome = match reconstruct(&result) {
        Some(path) => {
            tracing::debug!(
                moves = path.move_count(),
                visited = path.visited_states(),
                ?elapsed,
                "solved"
            );
            SolveOutcome::Solved(path)
        }
        None => {
            tracing::debug!(iterations = result.stats.iterations, "search exhausted");
            SolveOutcome::Exhausted
        }
    };

    Ok(SolveReport {
        initial,
        outcome,
        stats: result.stats,
        elapsed,
    })
}

fn instantiate(request: &SolveRequest) -> Result<Permutation, RunError> {
    if request.size == 0 {
        return Err(RunError::InvalidSize);
    }
    match &request.source {
        PuzzleSource::Explicit(values) => {
            if values.len() != request.size {
                return Err(RunError::SizeMismatch {
                    expected: request.size,
                    actual: values.len(),
                });
            }
            Ok(Permutation::from_values(values.clone())?)
        }
        PuzzleSource::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
                None => ChaCha8Rng::from_entropy(),
            };
            Ok(Permutation::random(request.size, &mut rng))
        }
    }
}
