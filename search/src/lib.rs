//! Revsort Search: informed best-first search over the block-reversal puzzle.
//!
//! This crate is the engine. It depends only on `revsort_kernel` — it does
//! NOT depend on `revsort_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! revsort_kernel  ←  revsort_search  ←  revsort_harness
//! (puzzle domain)    (frontier, nodes)   (runner, reports, CLI)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`] — immutable arena-resident state node; equality and
//!   hashing are by permutation content only
//! - [`FrontierKey`] — the `(f, h, creation order)` extraction key
//! - [`BestFirstFrontier`] — priority heap plus the visited table
//! - [`search`](search::search) — the A* loop; [`SearchResult`] carries the
//!   node arena and [`SearchStats`]
//! - [`SolutionPath`] — root-to-goal move sequence reconstructed from
//!   parent references

#![forbid(unsafe_code)]

pub mod expand;
pub mod frontier;
pub mod node;
pub mod path;
pub mod search;

pub use frontier::BestFirstFrontier;
pub use node::{FrontierKey, NodeId, SearchNode};
pub use path::{PathStep, SolutionPath};
pub use search::{SearchResult, SearchStats};
