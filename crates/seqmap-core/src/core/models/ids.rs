use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to an entity (one biological polymer) within a model.
    pub struct EntityId;
    /// Stable handle to a unit (one spatial instance of a chain) within a
    /// structure.
    pub struct UnitId;
}
