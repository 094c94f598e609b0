use super::ids::EntityId;
use nalgebra::Point3;

/// One coarse-grained element (a sphere or a gaussian) standing in for a run
/// of consecutive residues.
#[derive(Debug, Clone, PartialEq)]
pub struct CoarseElement {
    /// Center of the element in Angstroms.
    pub position: Point3<f64>,
    /// Radius (spheres) or spatial extent (gaussians) in Angstroms.
    pub radius: f64,
    /// First sequence id covered, 1-based inclusive.
    pub seq_id_begin: isize,
    /// Last sequence id covered, 1-based inclusive.
    pub seq_id_end: isize,
    /// Label of the chain the element belongs to.
    pub chain_label: String,
    /// The entity whose sequence this element maps into.
    pub entity: EntityId,
}

impl CoarseElement {
    /// Creates a coarse element covering `[seq_id_begin, seq_id_end]`.
    pub fn new(
        position: Point3<f64>,
        radius: f64,
        seq_id_begin: isize,
        seq_id_end: isize,
        chain_label: &str,
        entity: EntityId,
    ) -> Self {
        Self {
            position,
            radius,
            seq_id_begin,
            seq_id_end,
            chain_label: chain_label.to_string(),
            entity,
        }
    }
}

/// Row storage for one coarse representation.
#[derive(Debug, Clone, Default)]
pub struct CoarseElements {
    elements: Vec<CoarseElement>,
}

impl CoarseElements {
    /// Appends an element row and returns its row index.
    pub fn add_element(&mut self, element: CoarseElement) -> usize {
        let row = self.elements.len();
        self.elements.push(element);
        row
    }

    /// The element at `row`, if it exists.
    pub fn element(&self, row: usize) -> Option<&CoarseElement> {
        self.elements.get(row)
    }

    /// The number of element rows.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if there are no element rows.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// The coarse representations of a model: spheres and gaussians, stored as
/// two independent element tables with identical row shape.
#[derive(Debug, Clone, Default)]
pub struct CoarseHierarchy {
    /// Sphere elements.
    pub spheres: CoarseElements,
    /// Gaussian elements.
    pub gaussians: CoarseElements,
}
