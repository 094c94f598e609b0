use std::fmt;

/// A sparse subset of an integer domain stored as a sorted, deduplicated
/// array of indices.
///
/// This is the representation of choice when the member indices are scattered
/// (e.g. the rows of missing residues within an otherwise observed sequence).
/// Membership tests are binary searches; iteration is a slice walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SortedIndices {
    indices: Vec<usize>,
}

impl SortedIndices {
    /// Creates an empty set.
    pub const fn new() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Creates a set from indices that are already sorted in strictly
    /// ascending order.
    ///
    /// The precondition is checked in debug builds only.
    pub fn from_sorted(indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self { indices }
    }

    /// Creates a set from indices in any order, sorting and deduplicating.
    pub fn from_unsorted(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// The number of member indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Tests membership by binary search.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// The smallest member, if any.
    pub fn first(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    /// The largest member, if any.
    pub fn last(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// The members as a sorted slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    /// Iterates the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

impl fmt::Display for SortedIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, v) in self.indices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_unsorted_sorts_and_deduplicates() {
        let s = SortedIndices::from_unsorted(vec![5, 1, 3, 1, 5]);
        assert_eq!(s.as_slice(), &[1, 3, 5]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn contains_finds_only_members() {
        let s = SortedIndices::from_sorted(vec![2, 6, 9]);
        assert!(s.contains(2));
        assert!(s.contains(6));
        assert!(s.contains(9));
        assert!(!s.contains(0));
        assert!(!s.contains(5));
        assert!(!s.contains(10));
    }

    #[test]
    fn first_and_last_report_the_extremes() {
        let s = SortedIndices::from_sorted(vec![4, 8, 15]);
        assert_eq!(s.first(), Some(4));
        assert_eq!(s.last(), Some(15));
        assert_eq!(SortedIndices::new().first(), None);
    }

    #[test]
    fn iter_yields_ascending_order() {
        let s = SortedIndices::from_unsorted(vec![9, 0, 4]);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 4, 9]);
    }

    #[test]
    fn empty_set_behaves() {
        let s = SortedIndices::new();
        assert!(s.is_empty());
        assert!(!s.contains(0));
        assert_eq!(s.iter().count(), 0);
    }
}
