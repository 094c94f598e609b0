use super::interval::Interval;
use super::sorted::SortedIndices;

/// A set of indices over a totally ordered integer domain, stored in the most
/// compact of two representations.
///
/// Contiguous runs stay as an [`Interval`]; scattered members fall back to a
/// [`SortedIndices`] array. The set operations normalize their results back to
/// an interval whenever the outcome is contiguous, so the common cases
/// (a fully observed sequence, a single residue) never allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSet {
    /// A contiguous run of indices.
    Interval(Interval),
    /// A sparse, sorted collection of indices.
    Sorted(SortedIndices),
}

impl IndexSet {
    /// Creates the empty set.
    pub const fn empty() -> Self {
        Self::Interval(Interval::empty())
    }

    /// The number of member indices.
    pub fn len(&self) -> usize {
        match self {
            Self::Interval(iv) => iv.len(),
            Self::Sorted(s) => s.len(),
        }
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Interval(iv) => iv.is_empty(),
            Self::Sorted(s) => s.is_empty(),
        }
    }

    /// Tests whether `index` is a member.
    pub fn contains(&self, index: usize) -> bool {
        match self {
            Self::Interval(iv) => iv.contains(index),
            Self::Sorted(s) => s.contains(index),
        }
    }

    /// The smallest member, if any.
    pub fn min(&self) -> Option<usize> {
        match self {
            Self::Interval(iv) => (!iv.is_empty()).then_some(iv.start()),
            Self::Sorted(s) => s.first(),
        }
    }

    /// The largest member, if any.
    pub fn max(&self) -> Option<usize> {
        match self {
            Self::Interval(iv) => (!iv.is_empty()).then(|| iv.end() - 1),
            Self::Sorted(s) => s.last(),
        }
    }

    /// Invokes `f` for every member in ascending order.
    pub fn for_each(&self, mut f: impl FnMut(usize)) {
        match self {
            Self::Interval(iv) => iv.iter().for_each(&mut f),
            Self::Sorted(s) => s.iter().for_each(&mut f),
        }
    }

    /// Iterates the members in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        match self {
            Self::Interval(iv) => Iter::Interval(iv.iter()),
            Self::Sorted(s) => Iter::Sorted(s.as_slice().iter()),
        }
    }

    /// Returns the union of two sets.
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let mut merged: Vec<usize> = Vec::with_capacity(self.len() + other.len());
        let mut a = self.iter().peekable();
        let mut b = other.iter().peekable();
        loop {
            match (a.peek(), b.peek()) {
                (Some(&x), Some(&y)) => {
                    let next = if x <= y {
                        if x == y {
                            b.next();
                        }
                        a.next()
                    } else {
                        b.next()
                    };
                    if let Some(v) = next {
                        merged.push(v);
                    }
                }
                (Some(_), None) => merged.extend(a.by_ref()),
                (None, Some(_)) => merged.extend(b.by_ref()),
                (None, None) => break,
            }
        }
        Self::normalized(merged)
    }

    /// Returns the members of `self` that are not members of `other`.
    ///
    /// When nothing is removed the receiver's representation is returned
    /// unchanged, so subtracting a disjoint set from an interval stays an
    /// interval and allocates nothing.
    pub fn subtract(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        // Disjoint ranges cannot intersect, skip the scan.
        if let (Some(lo), Some(hi), Some(olo), Some(ohi)) =
            (self.min(), self.max(), other.min(), other.max())
            && (ohi < lo || olo > hi)
        {
            return self.clone();
        }

        let mut removed_any = false;
        let mut kept: Vec<usize> = Vec::with_capacity(self.len());
        self.for_each(|v| {
            if other.contains(v) {
                removed_any = true;
            } else {
                kept.push(v);
            }
        });
        if !removed_any {
            return self.clone();
        }
        Self::normalized(kept)
    }

    // Picks the compact representation for a sorted, deduplicated vector.
    fn normalized(indices: Vec<usize>) -> Self {
        match (indices.first(), indices.last()) {
            (Some(&first), Some(&last)) if last - first + 1 == indices.len() => {
                Self::Interval(Interval::of_bounds(first, last + 1))
            }
            (None, _) | (_, None) => Self::empty(),
            _ => Self::Sorted(SortedIndices::from_sorted(indices)),
        }
    }
}

impl From<Interval> for IndexSet {
    fn from(interval: Interval) -> Self {
        Self::Interval(interval)
    }
}

impl From<SortedIndices> for IndexSet {
    fn from(sorted: SortedIndices) -> Self {
        Self::Sorted(sorted)
    }
}

/// Iterator over the members of an [`IndexSet`], ascending.
pub enum Iter<'a> {
    /// Walks a contiguous run.
    Interval(std::ops::Range<usize>),
    /// Walks a sparse array.
    Sorted(std::slice::Iter<'a, usize>),
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Self::Interval(r) => r.next(),
            Self::Sorted(it) => it.next().copied(),
        }
    }
}
