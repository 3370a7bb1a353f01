//! Revsort Kernel: the block-reversal puzzle domain.
//!
//! A puzzle instance is a permutation of the integers `1..=n`; the single
//! legal operation reverses a contiguous block of it. The kernel owns that
//! domain and nothing else: the carrier type, the reversal operator, the
//! goal test, and the breakpoint heuristic.
//!
//! # API Surface
//!
//! - [`Permutation`] -- the puzzle carrier: construction (sorted, random,
//!   validated caller input), in-place block reversal, goal test,
//!   breakpoint count and heuristic
//! - [`ReversalMove`] -- a 1-based inclusive `(from, to)` block, plus the
//!   enumeration of every legal move for a given length
//!
//! # Module Dependency Direction
//!
//! `moves` ← `permutation`. The kernel depends on nothing internal above it;
//! the search and harness layers build on this crate, never the reverse.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod moves;
pub mod permutation;

pub use moves::ReversalMove;
pub use permutation::{Permutation, PermutationError, ReversalScope};
