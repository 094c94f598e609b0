use super::element::ElementRef;
use super::loci::{Loci, UnitIndices};
use crate::core::int::{IndexSet, SortedIndices};
use crate::core::models::ids::UnitId;
use crate::core::models::structure::Structure;
use crate::core::models::unit::Unit;
use std::sync::Arc;
use tracing::trace;

/// The result of running a query: matching element positions grouped by
/// unit, still tied to the structure they were found in.
#[derive(Debug, Clone)]
pub struct StructureSelection {
    structure: Arc<Structure>,
    elements: Vec<UnitIndices>,
}

impl StructureSelection {
    /// Returns `true` if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.elements.iter().all(|e| e.indices.is_empty())
    }

    /// The matching element positions, grouped by unit.
    pub fn elements(&self) -> &[UnitIndices] {
        &self.elements
    }

    /// Converts the selection into loci, collapsing an empty result to
    /// [`Loci::Empty`].
    pub fn into_loci(self) -> Loci {
        if self.is_empty() {
            Loci::Empty
        } else {
            Loci::Elements {
                structure: self.structure,
                elements: self.elements,
            }
        }
    }
}

/// A two-predicate structural query: a unit filter and a per-element residue
/// filter.
///
/// The query walks every unit that passes the unit test and collects the
/// element positions whose [`ElementRef`] passes the element test. Both
/// predicates are plain closures so callers can capture whatever residue
/// attributes they filter on.
pub struct ResidueQuery<U, E>
where
    U: Fn(UnitId, &Unit) -> bool,
    E: Fn(&ElementRef<'_>) -> bool,
{
    unit_test: U,
    element_test: E,
}

impl<U, E> ResidueQuery<U, E>
where
    U: Fn(UnitId, &Unit) -> bool,
    E: Fn(&ElementRef<'_>) -> bool,
{
    /// Creates a query from its two predicates.
    pub fn new(unit_test: U, element_test: E) -> Self {
        Self {
            unit_test,
            element_test,
        }
    }

    /// Runs the query against a structure.
    ///
    /// An empty result is a valid outcome (e.g., querying for a residue that
    /// is missing from the structure), not an error.
    pub fn run(&self, structure: &Arc<Structure>) -> StructureSelection {
        let mut elements = Vec::new();
        for (unit_id, unit) in structure.units_iter() {
            if !(self.unit_test)(unit_id, unit) {
                continue;
            }
            let mut hits = Vec::new();
            for position in 0..unit.len() {
                if let Some(element) = ElementRef::new(structure, unit_id, position)
                    && (self.element_test)(&element)
                {
                    hits.push(position);
                }
            }
            if !hits.is_empty() {
                elements.push(UnitIndices {
                    unit: unit_id,
                    indices: IndexSet::from(SortedIndices::from_sorted(hits)),
                });
            }
        }
        trace!(
            units = elements.len(),
            matched = elements.iter().map(|e| e.indices.len()).sum::<usize>(),
            "residue query executed"
        );
        StructureSelection {
            structure: Arc::clone(structure),
            elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atomic::Atom;
    use crate::core::models::model::Model;
    use crate::core::models::sequence::Sequence;
    use crate::core::models::unit::UnitKind;
    use nalgebra::Point3;
    use std::sync::Arc;

    fn two_residue_structure() -> (Arc<Structure>, UnitId) {
        let mut model = Model::new(1);
        let entity = model.add_entity(Sequence::from_codes(vec!['G', 'A'], 0));
        let r0 = model.atomic_mut().add_residue("GLY", 1, "A", entity);
        let r1 = model.atomic_mut().add_residue("ALA", 2, "A", entity);
        let mut rows = Vec::new();
        for (row, names) in [(r0, ["N", "CA"]), (r1, ["N", "CA"])] {
            for name in names {
                rows.push(
                    model
                        .atomic_mut()
                        .add_atom(row, Atom::new(name, Point3::origin()))
                        .unwrap(),
                );
            }
        }
        let mut structure = Structure::new(Arc::new(model));
        let unit = structure.add_unit(Unit::new(UnitKind::Atomic, entity, "A", rows));
        (Arc::new(structure), unit)
    }

    #[test]
    fn query_collects_matching_positions_per_unit() {
        let (structure, unit) = two_residue_structure();
        let query = ResidueQuery::new(
            move |id, _| id == unit,
            |el| el.seq_id() == Some(2),
        );
        let selection = query.run(&structure);
        assert!(!selection.is_empty());
        assert_eq!(selection.elements().len(), 1);
        let group = &selection.elements()[0];
        assert_eq!(group.unit, unit);
        assert_eq!(group.indices.iter().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn query_with_no_matches_yields_empty_loci() {
        let (structure, unit) = two_residue_structure();
        let query = ResidueQuery::new(
            move |id, _| id == unit,
            |el| el.seq_id() == Some(99),
        );
        let loci = query.run(&structure).into_loci();
        assert!(matches!(loci, Loci::Empty));
    }

    #[test]
    fn unit_filter_excludes_whole_units() {
        let (structure, _) = two_residue_structure();
        let query = ResidueQuery::new(|_, _| false, |_| true);
        assert!(query.run(&structure).is_empty());
    }
}
