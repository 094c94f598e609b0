use super::ids::UnitId;
use super::model::Model;
use super::unit::Unit;
use slotmap::SlotMap;
use std::sync::Arc;

/// A structure: a shared, immutable [`Model`] plus the set of units
/// instantiated from it.
///
/// Structures are assembled once and then shared behind an `Arc`; loci and
/// sequence views hold non-owning-in-spirit handles (the `Arc` only keeps the
/// data alive, nothing mutates through it).
#[derive(Debug)]
pub struct Structure {
    model: Arc<Model>,
    units: SlotMap<UnitId, Unit>,
}

impl Structure {
    /// Creates a structure over a model with no units yet.
    pub fn new(model: Arc<Model>) -> Self {
        Self {
            model,
            units: SlotMap::with_key(),
        }
    }

    /// The underlying model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Adds a unit and returns its id.
    pub fn add_unit(&mut self, unit: Unit) -> UnitId {
        self.units.insert(unit)
    }

    /// The unit with the given id, if it exists.
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id)
    }

    /// Returns an iterator over all units in the structure.
    pub fn units_iter(&self) -> impl Iterator<Item = (UnitId, &Unit)> {
        self.units.iter()
    }

    /// The number of units.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Tests whether two structures descend from the same parent model.
    ///
    /// This is an identity comparison (shared ownership of the same model),
    /// not a structural one: two independently loaded copies of the same file
    /// are *not* parents of each other. Selections carried between unrelated
    /// structures are routine when several structures are open at once, and
    /// this test is what turns them into silent no-ops.
    pub fn same_parent(a: &Structure, b: &Structure) -> bool {
        Arc::ptr_eq(&a.model, &b.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sequence::Sequence;
    use crate::core::models::unit::UnitKind;
    use slotmap::KeyData;

    fn model_with_entity() -> (Arc<Model>, crate::core::models::ids::EntityId) {
        let mut model = Model::new(1);
        let entity = model.add_entity(Sequence::from_codes(vec!['A', 'G'], 0));
        (Arc::new(model), entity)
    }

    #[test]
    fn units_are_retrievable_by_id() {
        let (model, entity) = model_with_entity();
        let mut structure = Structure::new(model);
        let id = structure.add_unit(Unit::new(UnitKind::Atomic, entity, "A", vec![0, 1]));
        assert_eq!(structure.unit(id).unwrap().chain_label, "A");
        assert_eq!(structure.unit_count(), 1);
        assert!(structure.unit(UnitId::from(KeyData::from_ffi(99))).is_none());
    }

    #[test]
    fn same_parent_holds_for_shared_model_only() {
        let (model, entity) = model_with_entity();
        let mut a = Structure::new(Arc::clone(&model));
        let b = Structure::new(Arc::clone(&model));
        a.add_unit(Unit::new(UnitKind::Atomic, entity, "A", vec![]));

        assert!(Structure::same_parent(&a, &b));

        let (other_model, _) = model_with_entity();
        let c = Structure::new(other_model);
        assert!(!Structure::same_parent(&a, &c));
    }
}
