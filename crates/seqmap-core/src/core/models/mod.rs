//! # Structural Model Store
//!
//! Data structures describing what was solved: the atomic and coarse
//! hierarchies, the units instantiated from them, per-entity sequences, and
//! the registry of residues missing from the structure.
//!
//! ## Key Components
//!
//! - [`atomic`] - Atom and residue rows with the per-atom residue segmentation
//! - [`coarse`] - Sphere and gaussian element tables with sequence spans
//! - [`sequence`] - Per-entity linear sequences and the index ↔ id bijection
//! - [`missing`] - Lookup of residues without physical coordinates
//! - [`unit`] - Spatial chain instances tagged with their representation kind
//! - [`model`] - The complete, immutable-after-load data store
//! - [`structure`] - A model plus its units, with parent-identity comparison
//! - [`ids`] - Stable slotmap handles for entities and units
//!
//! Everything here is written once while a file is loaded and only read
//! afterwards; the mapping layer in [`crate::panel`] never mutates it.

pub mod atomic;
pub mod coarse;
pub mod ids;
pub mod missing;
pub mod model;
pub mod sequence;
pub mod structure;
pub mod unit;
