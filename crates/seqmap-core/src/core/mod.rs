//! # Core Module
//!
//! The foundation layer: stateless data models and primitives with no
//! knowledge of the sequence panel built on top of them.
//!
//! - **Index sets** ([`int`]) - Compact subsets of integer domains
//! - **Model store** ([`models`]) - Atomic/coarse hierarchies, units,
//!   sequences, and the missing-residue registry
//! - **Selection** ([`selection`]) - Loci, element references, and the
//!   residue query engine
//! - **Utilities** ([`utils`]) - Residue-code lookup tables

pub mod int;
pub mod models;
pub mod selection;
pub mod utils;
