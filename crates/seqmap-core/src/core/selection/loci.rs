use crate::core::int::IndexSet;
use crate::core::models::ids::UnitId;
use crate::core::models::structure::Structure;
use std::sync::Arc;

/// The element positions selected within one unit.
#[derive(Debug, Clone)]
pub struct UnitIndices {
    /// The unit the positions index into.
    pub unit: UnitId,
    /// Selected element positions, in ascending order.
    pub indices: IndexSet,
}

/// An opaque selection over structural elements.
///
/// Loci are consumed and produced at the boundary between the 3D scene and
/// the sequence panel; this crate never persists them. A selection is either
/// nothing, a whole structure, or a collection of per-unit element position
/// sets. The structure handle identifies the parent for the identity check in
/// the propagation path; a selection originating from an unrelated structure
/// is an expected no-op, not an error.
#[derive(Debug, Clone)]
pub enum Loci {
    /// The empty selection.
    Empty,
    /// The whole structure.
    Structure {
        /// The selected structure.
        structure: Arc<Structure>,
    },
    /// Specific elements, grouped by unit.
    Elements {
        /// The structure the elements belong to.
        structure: Arc<Structure>,
        /// Per-unit selected element positions.
        elements: Vec<UnitIndices>,
    },
}

impl Loci {
    /// Returns `true` if the selection selects nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Loci::Empty => true,
            Loci::Structure { .. } => false,
            Loci::Elements { elements, .. } => elements.iter().all(|e| e.indices.is_empty()),
        }
    }

    /// The structure the selection refers to, if any.
    pub fn structure(&self) -> Option<&Arc<Structure>> {
        match self {
            Loci::Empty => None,
            Loci::Structure { structure } | Loci::Elements { structure, .. } => Some(structure),
        }
    }
}
