use super::atomic::AtomicHierarchy;
use super::coarse::CoarseHierarchy;
use super::ids::EntityId;
use super::missing::MissingResidues;
use super::sequence::Sequence;
use slotmap::SlotMap;
use std::sync::Arc;

/// One biological polymer within a model, carrying its linear sequence.
#[derive(Debug, Clone)]
pub struct Entity {
    sequence: Arc<Sequence>,
}

impl Entity {
    /// The entity's sequence.
    pub fn sequence(&self) -> &Arc<Sequence> {
        &self.sequence
    }
}

/// The structural data store for one model: atomic and coarse hierarchies,
/// entity sequences, and the missing-residue registry.
///
/// A model is mutated only while it is being loaded; afterwards it is shared
/// behind an `Arc` and treated as immutable for the lifetime of every
/// structure and sequence view built over it.
#[derive(Debug, Default)]
pub struct Model {
    model_num: i32,
    atomic: AtomicHierarchy,
    coarse: CoarseHierarchy,
    entities: SlotMap<EntityId, Entity>,
    missing: MissingResidues,
}

impl Model {
    /// Creates an empty model with the given model number.
    pub fn new(model_num: i32) -> Self {
        Self {
            model_num,
            ..Self::default()
        }
    }

    /// The model number (e.g., the NMR model index).
    pub const fn model_num(&self) -> i32 {
        self.model_num
    }

    /// The atomic hierarchy.
    pub fn atomic(&self) -> &AtomicHierarchy {
        &self.atomic
    }

    /// Mutable access to the atomic hierarchy, for loading.
    pub fn atomic_mut(&mut self) -> &mut AtomicHierarchy {
        &mut self.atomic
    }

    /// The coarse hierarchy.
    pub fn coarse(&self) -> &CoarseHierarchy {
        &self.coarse
    }

    /// Mutable access to the coarse hierarchy, for loading.
    pub fn coarse_mut(&mut self) -> &mut CoarseHierarchy {
        &mut self.coarse
    }

    /// The missing-residue registry.
    pub fn missing(&self) -> &MissingResidues {
        &self.missing
    }

    /// Mutable access to the missing-residue registry, for loading.
    pub fn missing_mut(&mut self) -> &mut MissingResidues {
        &mut self.missing
    }

    /// Registers an entity with its sequence and returns its id.
    pub fn add_entity(&mut self, sequence: Sequence) -> EntityId {
        self.entities.insert(Entity {
            sequence: Arc::new(sequence),
        })
    }

    /// The sequence of `entity`, if the entity exists.
    pub fn sequence(&self, entity: EntityId) -> Option<&Arc<Sequence>> {
        self.entities.get(entity).map(Entity::sequence)
    }

    /// Returns an iterator over all entities in the model.
    pub fn entities_iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    #[test]
    fn add_entity_makes_the_sequence_retrievable() {
        let mut model = Model::new(1);
        let entity = model.add_entity(Sequence::from_codes(vec!['M', 'K'], 0));
        let sequence = model.sequence(entity).unwrap();
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.code(0), Some('M'));
    }

    #[test]
    fn sequence_lookup_fails_for_foreign_entity_id() {
        let model = Model::new(1);
        let dangling = EntityId::from(KeyData::from_ffi(7));
        assert!(model.sequence(dangling).is_none());
    }

    #[test]
    fn model_num_is_preserved() {
        assert_eq!(Model::new(3).model_num(), 3);
    }
}
