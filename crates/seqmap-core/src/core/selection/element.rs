use crate::core::models::coarse::CoarseElement;
use crate::core::models::ids::{EntityId, UnitId};
use crate::core::models::structure::Structure;
use crate::core::models::unit::{Unit, UnitKind};

/// A borrowed reference to one structural element: a unit plus an element
/// position within it.
///
/// The accessors dispatch on the unit's kind, so callers can ask for sequence
/// attributes without caring whether the element is an atom, a sphere, or a
/// gaussian. References are only valid for the duration of a call; nothing
/// here extends the structure's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    structure: &'a Structure,
    unit_id: UnitId,
    unit: &'a Unit,
    position: usize,
}

impl<'a> ElementRef<'a> {
    /// Creates a reference to the element at `position` within the unit, or
    /// `None` if the unit or position does not exist.
    pub fn new(structure: &'a Structure, unit_id: UnitId, position: usize) -> Option<Self> {
        let unit = structure.unit(unit_id)?;
        (position < unit.len()).then_some(Self {
            structure,
            unit_id,
            unit,
            position,
        })
    }

    /// The id of the unit the element belongs to.
    pub const fn unit_id(&self) -> UnitId {
        self.unit_id
    }

    /// The unit the element belongs to.
    pub const fn unit(&self) -> &'a Unit {
        self.unit
    }

    /// The element position within the unit.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The representation kind of the owning unit.
    pub const fn kind(&self) -> UnitKind {
        self.unit.kind
    }

    /// The model row the element maps to (an atom row for atomic units, a
    /// coarse element row otherwise).
    pub fn element_row(&self) -> usize {
        self.unit.elements[self.position]
    }

    /// The entity whose sequence the element maps into.
    pub const fn entity(&self) -> EntityId {
        self.unit.entity
    }

    /// The chain label of the owning unit.
    pub fn chain_label(&self) -> &'a str {
        &self.unit.chain_label
    }

    /// The atomic residue row owning this element.
    ///
    /// `None` for coarse units, whose elements have no atomic residue rows.
    pub fn residue_row(&self) -> Option<usize> {
        match self.unit.kind {
            UnitKind::Atomic => self.structure.model().atomic().residue_of(self.element_row()),
            UnitKind::Spheres | UnitKind::Gaussians => None,
        }
    }

    /// The label sequence id of the owning atomic residue.
    ///
    /// `None` for coarse units.
    pub fn seq_id(&self) -> Option<isize> {
        let row = self.residue_row()?;
        self.structure
            .model()
            .atomic()
            .residue(row)
            .map(|r| r.seq_id)
    }

    /// The first sequence id covered by a coarse element.
    ///
    /// `None` for atomic units.
    pub fn seq_id_begin(&self) -> Option<isize> {
        self.coarse_attr(|e| e.seq_id_begin)
    }

    /// The last sequence id covered by a coarse element.
    ///
    /// `None` for atomic units.
    pub fn seq_id_end(&self) -> Option<isize> {
        self.coarse_attr(|e| e.seq_id_end)
    }

    fn coarse_attr(&self, f: impl Fn(&CoarseElement) -> isize) -> Option<isize> {
        let coarse = self.structure.model().coarse();
        let table = match self.unit.kind {
            UnitKind::Atomic => return None,
            UnitKind::Spheres => &coarse.spheres,
            UnitKind::Gaussians => &coarse.gaussians,
        };
        table.element(self.element_row()).map(f)
    }
}
