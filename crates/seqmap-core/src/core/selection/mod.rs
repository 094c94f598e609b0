//! # Selection Layer
//!
//! The boundary types between the 3D scene and the sequence panel.
//!
//! - [`element`] - Borrowed references to single structural elements with
//!   kind-aware attribute access
//! - [`loci`] - Opaque selections: nothing, a whole structure, or per-unit
//!   element position sets
//! - [`query`] - The two-predicate query engine that turns residue filters
//!   back into selections

pub mod element;
pub mod loci;
pub mod query;

pub use element::ElementRef;
pub use loci::{Loci, UnitIndices};
pub use query::{ResidueQuery, StructureSelection};
