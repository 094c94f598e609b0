//! # Seqmap Core Library
//!
//! An index-mapping core between the two coordinate spaces of a biomolecular
//! structure viewer: *structural* space (atoms and coarse elements grouped
//! into units and residues) and *sequence* space (one linear ordering of
//! residue positions per chain, with gaps where the structure is missing).
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction,
//! keeping the mapping logic free of any UI or rendering concern.
//!
//! - **[`core`]: The Foundation.** Immutable-after-load data models (the
//!   atomic and coarse hierarchies, per-entity sequences, the missing-residue
//!   registry), compact integer index sets, and the selection/query types
//!   exchanged with the 3D scene.
//!
//! - **[`panel`]: The Public API.** One [`panel::SequenceView`] per displayed
//!   chain. It propagates 3D selections to sequence positions (deduplicating
//!   atom-granular events to one callback per residue) and builds structural
//!   selections back from sequence positions, through the same per-kind
//!   resolution rules in both directions.
//!
//! Everything is single-threaded and synchronous: the mapping paths perform
//! no I/O, take no locks, and are bounded by one pass over the selection or
//! the sequence length.

pub mod core;
pub mod panel;
