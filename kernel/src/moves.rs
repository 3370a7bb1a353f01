//! The block-reversal operator: a 1-based inclusive index pair.

use std::fmt;

/// A single block reversal: reverse the contiguous range `[from, to]`
/// (1-based, inclusive) of a permutation.
///
/// `from < to` always holds; a one-element block would be a no-op and is
/// not a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReversalMove {
    from: usize,
    to: usize,
}

impl ReversalMove {
    /// Construct a move over the 1-based inclusive range `[from, to]`.
    ///
    /// # Panics
    ///
    /// Panics if `from < 1` or `from >= to`. Upper-bound validity is checked
    /// against a concrete permutation by [`crate::Permutation::reverse_block`].
    #[must_use]
    pub fn new(from: usize, to: usize) -> Self {
        assert!(from >= 1, "reversal bounds are 1-based");
        assert!(from < to, "reversal block must span at least two positions");
        Self { from, to }
    }

    /// First position of the block (1-based, inclusive).
    #[must_use]
    pub const fn from(&self) -> usize {
        self.from
    }

    /// Last position of the block (1-based, inclusive).
    #[must_use]
    pub const fn to(&self) -> usize {
        self.to
    }

    /// Enumerate every legal move for a permutation of length `len`, in
    /// ascending `(from, to)` order. Lengths 0 and 1 have no legal moves.
    pub fn enumerate(len: usize) -> impl Iterator<Item = ReversalMove> {
        (1..len).flat_map(move |from| (from + 1..=len).map(move |to| ReversalMove { from, to }))
    }

    /// Number of legal moves for a permutation of length `len`: `C(len, 2)`.
    #[must_use]
    pub const fn count(len: usize) -> usize {
        len * len.saturating_sub(1) / 2
    }
}

impl fmt::Display for ReversalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.from, self.to)
    }
}
