use super::ids::EntityId;
use nalgebra::Point3;

/// An atom row in the atomic hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates an atom with the given name and position.
    pub fn new(name: &str, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            position,
        }
    }
}

/// A residue row in the atomic hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomicResidue {
    /// Three-letter residue name (e.g., "ALA").
    pub name: String,
    /// 1-based label sequence id within the entity's sequence.
    pub seq_id: isize,
    /// Label of the chain the residue belongs to.
    pub chain_label: String,
    /// The entity whose sequence this residue maps into.
    pub entity: EntityId,
}

/// Column-oriented storage for the atomic representation: residue rows, atom
/// rows, and the per-atom segmentation that names each atom's owning residue
/// row.
///
/// The segmentation is what lets atom-granular selection events be collapsed
/// to one event per residue.
#[derive(Debug, Clone, Default)]
pub struct AtomicHierarchy {
    residues: Vec<AtomicResidue>,
    atoms: Vec<Atom>,
    residue_of: Vec<usize>,
}

impl AtomicHierarchy {
    /// Creates an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a residue row and returns its row index.
    pub fn add_residue(
        &mut self,
        name: &str,
        seq_id: isize,
        chain_label: &str,
        entity: EntityId,
    ) -> usize {
        let row = self.residues.len();
        self.residues.push(AtomicResidue {
            name: name.to_string(),
            seq_id,
            chain_label: chain_label.to_string(),
            entity,
        });
        row
    }

    /// Appends an atom belonging to the residue at `residue_row`.
    ///
    /// Returns the new atom row, or `None` if `residue_row` does not exist.
    pub fn add_atom(&mut self, residue_row: usize, atom: Atom) -> Option<usize> {
        if residue_row >= self.residues.len() {
            return None;
        }
        let row = self.atoms.len();
        self.atoms.push(atom);
        self.residue_of.push(residue_row);
        Some(row)
    }

    /// The atom at `row`, if it exists.
    pub fn atom(&self, row: usize) -> Option<&Atom> {
        self.atoms.get(row)
    }

    /// The residue at `row`, if it exists.
    pub fn residue(&self, row: usize) -> Option<&AtomicResidue> {
        self.residues.get(row)
    }

    /// The residue row owning the atom at `atom_row`, if it exists.
    pub fn residue_of(&self, atom_row: usize) -> Option<usize> {
        self.residue_of.get(atom_row).copied()
    }

    /// The number of atom rows.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// The number of residue rows.
    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn dummy_entity() -> EntityId {
        EntityId::from(KeyData::from_ffi(1))
    }

    #[test]
    fn atoms_are_segmented_by_residue_row() {
        let mut h = AtomicHierarchy::new();
        let r0 = h.add_residue("GLY", 1, "A", dummy_entity());
        let r1 = h.add_residue("ALA", 2, "A", dummy_entity());

        let a0 = h.add_atom(r0, Atom::new("N", Point3::origin())).unwrap();
        let a1 = h.add_atom(r0, Atom::new("CA", Point3::origin())).unwrap();
        let a2 = h.add_atom(r1, Atom::new("CA", Point3::origin())).unwrap();

        assert_eq!(h.residue_of(a0), Some(r0));
        assert_eq!(h.residue_of(a1), Some(r0));
        assert_eq!(h.residue_of(a2), Some(r1));
        assert_eq!(h.atom_count(), 3);
        assert_eq!(h.residue_count(), 2);
    }

    #[test]
    fn add_atom_rejects_unknown_residue_row() {
        let mut h = AtomicHierarchy::new();
        assert!(h.add_atom(0, Atom::new("N", Point3::origin())).is_none());
    }

    #[test]
    fn residue_rows_carry_seq_id_and_chain() {
        let mut h = AtomicHierarchy::new();
        let row = h.add_residue("LYS", 42, "B", dummy_entity());
        let residue = h.residue(row).unwrap();
        assert_eq!(residue.seq_id, 42);
        assert_eq!(residue.chain_label, "B");
        assert_eq!(residue.name, "LYS");
    }
}
