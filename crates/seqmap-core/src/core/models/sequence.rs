use crate::core::utils::codes::one_letter_code;

/// The linear sequence of one entity: an ordered, 0-based list of one-letter
/// residue codes plus an integer offset.
///
/// Sequence index `i` corresponds to the biological sequence id
/// `offset + i + 1`; the mapping is a pure, order-preserving bijection on
/// `[0, len)`. A `Sequence` is immutable once built and owned by the model;
/// views share it by reference counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    codes: Vec<char>,
    offset: isize,
}

impl Sequence {
    /// Creates a sequence from one-letter codes.
    pub fn from_codes(codes: Vec<char>, offset: isize) -> Self {
        Self { codes, offset }
    }

    /// Creates a sequence from three-letter residue names, translating each
    /// through the standard code table (unknown names become `'X'`).
    pub fn from_residue_names<'a, I>(names: I, offset: isize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            codes: names.into_iter().map(one_letter_code).collect(),
            offset,
        }
    }

    /// The number of residue positions.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if the sequence has no positions.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The offset between sequence indices and biological sequence ids.
    pub const fn offset(&self) -> isize {
        self.offset
    }

    /// The one-letter code at sequence index `index`, if in range.
    pub fn code(&self, index: usize) -> Option<char> {
        self.codes.get(index).copied()
    }

    /// The biological sequence id for sequence index `index`.
    pub const fn seq_id(&self, index: usize) -> isize {
        self.offset + index as isize + 1
    }

    /// The sequence index for a biological sequence id, if it falls within
    /// `[0, len)`.
    pub fn index_of(&self, seq_id: isize) -> Option<usize> {
        let index = seq_id - self.offset - 1;
        (index >= 0 && (index as usize) < self.codes.len()).then_some(index as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_id_is_offset_plus_index_plus_one() {
        let seq = Sequence::from_codes(vec!['M', 'K', 'V'], 0);
        assert_eq!(seq.seq_id(0), 1);
        assert_eq!(seq.seq_id(2), 3);

        let shifted = Sequence::from_codes(vec!['A', 'G'], 10);
        assert_eq!(shifted.seq_id(0), 11);
        assert_eq!(shifted.seq_id(1), 12);
    }

    #[test]
    fn seq_id_is_strictly_increasing() {
        let seq = Sequence::from_codes(vec!['A'; 8], -3);
        for i in 1..seq.len() {
            assert!(seq.seq_id(i) > seq.seq_id(i - 1));
        }
    }

    #[test]
    fn index_of_inverts_seq_id_within_range() {
        let seq = Sequence::from_codes(vec!['A'; 5], 7);
        for i in 0..seq.len() {
            assert_eq!(seq.index_of(seq.seq_id(i)), Some(i));
        }
        assert_eq!(seq.index_of(seq.seq_id(0) - 1), None);
        assert_eq!(seq.index_of(seq.seq_id(4) + 1), None);
    }

    #[test]
    fn from_residue_names_translates_codes() {
        let seq = Sequence::from_residue_names(["MET", "LYS", "LIG"], 0);
        assert_eq!(seq.code(0), Some('M'));
        assert_eq!(seq.code(1), Some('K'));
        assert_eq!(seq.code(2), Some('X'));
        assert_eq!(seq.code(3), None);
    }
}
