use crate::core::models::ids::{EntityId, UnitId};
use thiserror::Error;

/// Errors raised while binding a sequence view to a structure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// The unit id does not name a unit of the given structure.
    #[error("unit not found in structure: {unit:?}")]
    UnitNotFound {
        /// The offending unit id.
        unit: UnitId,
    },
    /// The unit's entity has no sequence in the model.
    #[error("no sequence for entity {entity:?}")]
    SequenceNotFound {
        /// The offending entity id.
        entity: EntityId,
    },
}
