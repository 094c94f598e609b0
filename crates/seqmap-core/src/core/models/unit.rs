use super::ids::EntityId;
use std::fmt;

/// The structural representation a unit is built from.
///
/// This is a closed set: the sequence-index resolver matches exhaustively
/// over it, so a new representation cannot be added without the compiler
/// pointing at every site that must learn about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Fully atomic representation; elements are atom rows.
    Atomic,
    /// Coarse spheres; elements are sphere rows, each spanning one or more
    /// residues.
    Spheres,
    /// Coarse gaussians; elements are gaussian rows, each spanning one or
    /// more residues.
    Gaussians,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                UnitKind::Atomic => "Atomic",
                UnitKind::Spheres => "Spheres",
                UnitKind::Gaussians => "Gaussians",
            }
        )
    }
}

/// One spatial instance of a chain: a kind tag plus the model rows that make
/// up the instance.
///
/// Element positions within a unit are what loci index; the rows they map to
/// index the model's atomic or coarse tables depending on `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// The representation this unit is built from.
    pub kind: UnitKind,
    /// The entity whose sequence the unit's residues map into.
    pub entity: EntityId,
    /// Label of the chain instance.
    pub chain_label: String,
    pub(crate) elements: Vec<usize>,
}

impl Unit {
    /// Creates a unit over the given model rows.
    pub fn new(kind: UnitKind, entity: EntityId, chain_label: &str, elements: Vec<usize>) -> Self {
        Self {
            kind,
            entity,
            chain_label: chain_label.to_string(),
            elements,
        }
    }

    /// The model rows of the unit, in element-position order.
    pub fn elements(&self) -> &[usize] {
        &self.elements
    }

    /// The model row at element position `position`, if in range.
    pub fn element(&self, position: usize) -> Option<usize> {
        self.elements.get(position).copied()
    }

    /// The number of elements in the unit.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the unit has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    #[test]
    fn element_lookup_is_positional() {
        let entity = EntityId::from(KeyData::from_ffi(1));
        let unit = Unit::new(UnitKind::Atomic, entity, "A", vec![10, 11, 12]);
        assert_eq!(unit.element(0), Some(10));
        assert_eq!(unit.element(2), Some(12));
        assert_eq!(unit.element(3), None);
        assert_eq!(unit.len(), 3);
    }

    #[test]
    fn unit_kind_displays_its_name() {
        assert_eq!(UnitKind::Atomic.to_string(), "Atomic");
        assert_eq!(UnitKind::Spheres.to_string(), "Spheres");
        assert_eq!(UnitKind::Gaussians.to_string(), "Gaussians");
    }
}
