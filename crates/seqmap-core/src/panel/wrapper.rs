use super::color::{Color, PanelTheme};
use super::error::PanelError;
use crate::core::int::{IndexSet, Interval, SortedIndices};
use crate::core::models::ids::UnitId;
use crate::core::models::sequence::Sequence;
use crate::core::models::structure::Structure;
use crate::core::models::unit::UnitKind;
use crate::core::selection::{ElementRef, Loci, ResidueQuery};
use std::sync::Arc;
use tracing::debug;

/// Maps one displayed chain between structural space and sequence space.
///
/// A view binds a (structure, unit) pair to the unit's entity sequence and
/// precomputes the observed-position set. It is created when a chain enters
/// the sequence panel and discarded when it leaves; the structural data it
/// reads is immutable for its whole lifetime, so every operation is a pure,
/// reentrant computation.
///
/// The two directions of the mapping are:
///
/// - [`each_residue`](Self::each_residue) - 3D selection to sequence
///   positions, one callback per distinct residue touched;
/// - [`get_loci`](Self::get_loci) - sequence position to structural
///   selection, via a residue query over the bound unit.
#[derive(Debug)]
pub struct SequenceView {
    structure: Arc<Structure>,
    unit: UnitId,
    sequence: Arc<Sequence>,
    observed: IndexSet,
    model_num: i32,
    chain_label: String,
    theme: PanelTheme,
}

impl SequenceView {
    /// Binds a view to one unit of a structure, with the default theme.
    pub fn new(structure: Arc<Structure>, unit: UnitId) -> Result<Self, PanelError> {
        Self::with_theme(structure, unit, PanelTheme::default())
    }

    /// Binds a view to one unit of a structure.
    ///
    /// Resolves the unit's entity sequence and chain label, then computes the
    /// observed set once: the full `[0, len)` interval minus the indices whose
    /// sequence ids the model reports as missing. Residues absent from the
    /// structure have no elements to select, so this set is exactly what a
    /// whole-structure selection highlights.
    pub fn with_theme(
        structure: Arc<Structure>,
        unit: UnitId,
        theme: PanelTheme,
    ) -> Result<Self, PanelError> {
        let u = structure.unit(unit).ok_or(PanelError::UnitNotFound { unit })?;
        let entity = u.entity;
        let sequence = structure
            .model()
            .sequence(entity)
            .cloned()
            .ok_or(PanelError::SequenceNotFound { entity })?;
        let chain_label = u.chain_label.clone();
        let model_num = structure.model().model_num();

        let length = sequence.len();
        let missing: Vec<usize> = (0..length)
            .filter(|&i| {
                structure
                    .model()
                    .missing()
                    .has(model_num, &chain_label, sequence.seq_id(i))
            })
            .collect();
        debug!(
            chain = %chain_label,
            length,
            missing = missing.len(),
            "sequence view bound"
        );
        let observed = IndexSet::from(Interval::of_bounds(0, length))
            .subtract(&IndexSet::from(SortedIndices::from_sorted(missing)));

        Ok(Self {
            structure,
            unit,
            sequence,
            observed,
            model_num,
            chain_label,
            theme,
        })
    }

    /// The number of sequence positions.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns `true` if the bound sequence has no positions.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// The unit this view is bound to.
    pub const fn unit(&self) -> UnitId {
        self.unit
    }

    /// The chain label of the bound unit.
    pub fn chain_label(&self) -> &str {
        &self.chain_label
    }

    /// The set of sequence indices whose residues have physical coordinates.
    pub const fn observed(&self) -> &IndexSet {
        &self.observed
    }

    /// The biological sequence id at sequence index `index`.
    pub fn seq_id(&self, index: usize) -> isize {
        self.sequence.seq_id(index)
    }

    /// The one-letter residue code at sequence index `index`, if in range.
    pub fn residue_label(&self, index: usize) -> Option<char> {
        self.sequence.code(index)
    }

    /// The display color for the residue at sequence index `index`: the
    /// theme's missing color when the residue lacks coordinates, the observed
    /// color otherwise.
    pub fn residue_color(&self, index: usize) -> Color {
        if self
            .structure
            .model()
            .missing()
            .has(self.model_num, &self.chain_label, self.seq_id(index))
        {
            self.theme.missing
        } else {
            self.theme.observed
        }
    }

    /// Propagates a structural selection to sequence positions.
    ///
    /// Walks the selection and invokes `apply` once per distinct residue
    /// touched, passing the residue's sequence-index set. Returns `true` iff
    /// `apply` returned `true` at least once.
    ///
    /// Selections are atom-granular, so consecutive hits on the same residue
    /// are collapsed before `apply` is invoked; `apply` typically marks panel
    /// state and may be expensive. A whole-structure selection short-circuits
    /// to a single `apply` over the precomputed observed set. Selections from
    /// a different parent structure are an expected no-op: the result is
    /// `false` and `apply` is never invoked.
    pub fn each_residue<F>(&self, loci: &Loci, mut apply: F) -> bool
    where
        F: FnMut(&IndexSet) -> bool,
    {
        let mut changed = false;
        match loci {
            Loci::Empty => {}
            Loci::Structure { structure } => {
                if !Structure::same_parent(structure, &self.structure) {
                    return false;
                }
                if apply(&self.observed) {
                    changed = true;
                }
            }
            Loci::Elements {
                structure,
                elements,
            } => {
                if !Structure::same_parent(structure, &self.structure) {
                    return false;
                }
                for group in elements {
                    // Loci may span several units; only the bound one counts.
                    if group.unit != self.unit {
                        continue;
                    }
                    let mut prev_residue: Option<usize> = None;
                    group.indices.for_each(|position| {
                        let Some(element) = ElementRef::new(&self.structure, group.unit, position)
                        else {
                            return;
                        };
                        // One apply per residue, not one per atom.
                        let key = element.residue_row().unwrap_or_else(|| element.element_row());
                        if prev_residue == Some(key) {
                            return;
                        }
                        if let Some(range) = sequence_indices(&element) {
                            if apply(&IndexSet::from(range)) {
                                changed = true;
                            }
                            prev_residue = Some(key);
                        }
                    });
                }
            }
        }
        changed
    }

    /// Builds the structural selection for one sequence position.
    ///
    /// Runs a residue query restricted to the bound unit, matching atomic
    /// residues by exact sequence id and coarse elements by span containment.
    /// A sequence id with no matching elements (a missing residue, or an id
    /// outside the sequence entirely) yields [`Loci::Empty`], which is a
    /// valid outcome, not a failure.
    pub fn get_loci(&self, seq_id: isize) -> Loci {
        let unit = self.unit;
        let query = ResidueQuery::new(
            move |id, _| id == unit,
            move |element| match element.kind() {
                UnitKind::Atomic => element.seq_id() == Some(seq_id),
                UnitKind::Spheres | UnitKind::Gaussians => {
                    element.seq_id_begin().is_some_and(|begin| begin <= seq_id)
                        && element.seq_id_end().is_some_and(|end| end >= seq_id)
                }
            },
        );
        query.run(&self.structure).into_loci()
    }
}

/// Resolves one structural element to the interval of sequence indices it
/// covers.
///
/// Atomic elements map to the singleton of their residue's sequence id;
/// coarse elements map to the inclusive span their row declares. Sequence ids
/// are 1-based, sequence indices 0-based. Returns `None` only when the
/// element's rows are inconsistent with the model tables.
fn sequence_indices(element: &ElementRef<'_>) -> Option<Interval> {
    match element.kind() {
        UnitKind::Atomic => {
            let seq_id = element.seq_id()?;
            let index = usize::try_from(seq_id - 1).ok()?;
            Some(Interval::of_singleton(index))
        }
        UnitKind::Spheres | UnitKind::Gaussians => {
            let begin = usize::try_from(element.seq_id_begin()? - 1).ok()?;
            let end = usize::try_from(element.seq_id_end()? - 1).ok()?;
            Some(Interval::of_range(begin, end))
        }
    }
}
