use std::fmt;
use std::ops::Range;

/// A contiguous, half-open range `[start, end)` over a totally ordered
/// integer domain.
///
/// Intervals are the compact representation for a run of consecutive
/// indices: a single atomic residue maps to a singleton interval, a coarse
/// element maps to a multi-residue one. An interval with `end <= start` is
/// empty and normalized to `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: usize,
    end: usize,
}

impl Interval {
    /// Creates the empty interval.
    pub const fn empty() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Creates the half-open interval `[start, end)`.
    ///
    /// If `end < start` the result is the empty interval.
    pub fn of_bounds(start: usize, end: usize) -> Self {
        if end < start {
            Self { start, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Creates the interval containing exactly one index.
    pub const fn of_singleton(index: usize) -> Self {
        Self {
            start: index,
            end: index + 1,
        }
    }

    /// Creates the interval covering `[min, max]` with inclusive bounds.
    ///
    /// If `max < min` the result is the empty interval.
    pub fn of_range(min: usize, max: usize) -> Self {
        if max < min {
            Self {
                start: min,
                end: min,
            }
        } else {
            Self {
                start: min,
                end: max + 1,
            }
        }
    }

    /// The inclusive lower bound.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// The exclusive upper bound.
    pub const fn end(&self) -> usize {
        self.end
    }

    /// The number of indices contained.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the interval contains no indices.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Tests whether `index` lies inside the interval.
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Iterates the contained indices in ascending order.
    pub fn iter(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_bounds_is_half_open() {
        let iv = Interval::of_bounds(2, 5);
        assert_eq!(iv.len(), 3);
        assert!(iv.contains(2));
        assert!(iv.contains(4));
        assert!(!iv.contains(5));
        assert_eq!(iv.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn of_bounds_normalizes_inverted_bounds_to_empty() {
        let iv = Interval::of_bounds(5, 2);
        assert!(iv.is_empty());
        assert_eq!(iv.len(), 0);
        assert!(!iv.contains(3));
    }

    #[test]
    fn of_singleton_contains_exactly_one_index() {
        let iv = Interval::of_singleton(7);
        assert_eq!(iv.len(), 1);
        assert!(iv.contains(7));
        assert!(!iv.contains(6));
        assert!(!iv.contains(8));
    }

    #[test]
    fn of_range_is_inclusive_on_both_ends() {
        let iv = Interval::of_range(4, 7);
        assert_eq!(iv.iter().collect::<Vec<_>>(), vec![4, 5, 6, 7]);
        assert!(iv.contains(4));
        assert!(iv.contains(7));
        assert!(!iv.contains(8));
    }

    #[test]
    fn of_range_with_inverted_bounds_is_empty() {
        assert!(Interval::of_range(7, 4).is_empty());
    }

    #[test]
    fn empty_interval_contains_nothing() {
        let iv = Interval::empty();
        assert!(iv.is_empty());
        assert_eq!(iv.iter().count(), 0);
    }
}
