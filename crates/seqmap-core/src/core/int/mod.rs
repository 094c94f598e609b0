//! # Integer Index-Set Primitives
//!
//! Compact representations of subsets of a totally ordered integer domain,
//! used throughout the crate to answer "which sequence positions" and "which
//! structural element positions" without materializing per-element
//! collections.
//!
//! - [`Interval`] - a contiguous half-open run `[start, end)`.
//! - [`SortedIndices`] - a sparse, sorted array of scattered indices.
//! - [`IndexSet`] - a closed union of the two, supporting membership,
//!   iteration, union, and subtraction.
//!
//! The set operations keep results in the interval representation whenever
//! the outcome is contiguous, which keeps the hot selection paths
//! allocation-free.

pub mod interval;
pub mod set;
pub mod sorted;

pub use interval::Interval;
pub use set::IndexSet;
pub use sorted::SortedIndices;
