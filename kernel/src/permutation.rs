//! `Permutation`: the puzzle carrier.
//!
//! A `Permutation` is an ordered sequence of the distinct integers `1..=n`.
//! The only mutation is [`Permutation::reverse_block`]; everything else is
//! read-only. Search bookkeeping takes immutable snapshots (clones) of the
//! carrier, so the one mutable working copy never aliases a stored node.
//!
//! # Equality semantics
//!
//! `Permutation` derives `Eq` and `Hash` over its values. Two instances are
//! equal exactly when they hold the same sequence — this is what the search
//! layer's visited table keys on.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::moves::ReversalMove;

/// Rejection reasons for caller-supplied values that are not a permutation
/// of `1..=n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    /// No values at all; the puzzle requires `n >= 1`.
    Empty,
    /// A value outside `1..=len`.
    OutOfRange { value: u32, len: usize },
    /// A value that appears more than once.
    Duplicate { value: u32 },
}

impl fmt::Display for PermutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "permutation must contain at least one value"),
            Self::OutOfRange { value, len } => {
                write!(f, "value {value} is outside 1..={len}")
            }
            Self::Duplicate { value } => write!(f, "value {value} appears more than once"),
        }
    }
}

impl std::error::Error for PermutationError {}

/// An ordered sequence of the distinct integers `1..=n`.
///
/// Invariant: the values are always exactly the set `{1..=n}`. Construction
/// enforces it ([`Permutation::from_values`] validates, the other
/// constructors produce it by definition) and block reversal preserves it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    values: Vec<u32>,
}

impl Permutation {
    /// The identity permutation `1, 2, .., n` (the goal state).
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`; the puzzle requires `n >= 1`.
    #[must_use]
    pub fn sorted(n: usize) -> Self {
        assert!(n >= 1, "puzzle size must be at least 1");
        #[allow(clippy::cast_possible_truncation)]
        let values = (1..=n as u32).collect();
        Self { values }
    }

    /// A uniformly random permutation of `1..=n`, driven by the caller's
    /// generator so instances are reproducible under a fixed seed.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`; the puzzle requires `n >= 1`.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut permutation = Self::sorted(n);
        permutation.values.shuffle(rng);
        permutation
    }

    /// Adopt caller-supplied values after checking they form a permutation
    /// of `1..=values.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`PermutationError`] when the values are empty, contain an
    /// out-of-range entry, or repeat an entry.
    pub fn from_values(values: Vec<u32>) -> Result<Self, PermutationError> {
        if values.is_empty() {
            return Err(PermutationError::Empty);
        }
        let len = values.len();
        let mut seen = vec![false; len];
        for &value in &values {
            if value == 0 || value as usize > len {
                return Err(PermutationError::OutOfRange { value, len });
            }
            if seen[value as usize - 1] {
                return Err(PermutationError::Duplicate { value });
            }
            seen[value as usize - 1] = true;
        }
        Ok(Self { values })
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True only for the (unconstructible) empty carrier; present to keep
    /// `len` honest for clippy and callers alike.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the sequence.
    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Reverse the block `[mv.from(), mv.to()]` in place.
    ///
    /// Applying the same move twice restores the original sequence.
    ///
    /// # Panics
    ///
    /// Panics if `mv.to()` exceeds the length. The search engine only
    /// produces moves from [`ReversalMove::enumerate`], which are always in
    /// bounds; an out-of-bounds move here is a programming error.
    pub fn reverse_block(&mut self, mv: ReversalMove) {
        assert!(
            mv.to() <= self.values.len(),
            "reversal block {mv} exceeds permutation length {}",
            self.values.len()
        );
        self.values[mv.from() - 1..mv.to()].reverse();
    }

    /// Apply `mv` for the lifetime of the returned scope; the reversal is
    /// undone when the scope drops, on every exit path. Snapshot the state
    /// through [`ReversalScope::state`] between the two halves.
    pub fn reversed_scope(&mut self, mv: ReversalMove) -> ReversalScope<'_> {
        self.reverse_block(mv);
        ReversalScope { permutation: self, mv }
    }

    /// True iff `values[i] == i + 1` at every position.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.values
            .iter()
            .enumerate()
            .all(|(i, &value)| value as usize == i + 1)
    }

    /// Count of adjacent positions whose values are not consecutive
    /// integers (differ by exactly 1 in either direction).
    ///
    /// No boundary sentinels: only interior adjacencies count, so a
    /// descending run like `4 3 2 1` has zero breakpoints.
    #[must_use]
    pub fn breakpoints(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let count = self
            .values
            .windows(2)
            .filter(|pair| pair[0].abs_diff(pair[1]) != 1)
            .count() as u32;
        count
    }

    /// Heuristic lower bound on the reversals still needed:
    /// `breakpoints() / 2`, since one reversal removes at most two
    /// breakpoints. Zero does not imply sorted.
    #[must_use]
    pub fn heuristic(&self) -> u32 {
        self.breakpoints() / 2
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for value in &self.values {
            write!(f, " {value}")?;
        }
        write!(f, " >")
    }
}

/// RAII scope for the apply/snapshot/undo pattern.
///
/// Construction applied the reversal; drop re-applies it (reversal is an
/// involution), restoring the underlying permutation no matter how the
/// scope is exited.
pub struct ReversalScope<'a> {
    permutation: &'a mut Permutation,
    mv: ReversalMove,
}

impl ReversalScope<'_> {
    /// The permutation with the reversal applied.
    #[must_use]
    pub fn state(&self) -> &Permutation {
        self.permutation
    }

    /// The move this scope applied.
    #[must_use]
    pub fn applied_move(&self) -> ReversalMove {
        self.mv
    }
}

impl Drop for ReversalScope<'_> {
    fn drop(&mut self) {
        self.permutation.reverse_block(self.mv);
    }
}
