use std::collections::{HashMap, HashSet};

/// Registry of residues that lack physical coordinates in the solved
/// structure, keyed by (model number, chain label, sequence id).
///
/// Built once while the model is loaded, then only queried. The sequence
/// panel uses it to compute the observed-position complement and to pick the
/// "missing" color for unresolved positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingResidues {
    by_chain: HashMap<String, HashSet<(i32, isize)>>,
}

impl MissingResidues {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a residue as missing.
    pub fn insert(&mut self, model_num: i32, chain_label: &str, seq_id: isize) {
        self.by_chain
            .entry(chain_label.to_string())
            .or_default()
            .insert((model_num, seq_id));
    }

    /// Tests whether the residue identified by (model number, chain label,
    /// sequence id) is missing from the structure.
    pub fn has(&self, model_num: i32, chain_label: &str, seq_id: isize) -> bool {
        self.by_chain
            .get(chain_label)
            .is_some_and(|s| s.contains(&(model_num, seq_id)))
    }

    /// Returns `true` if no residue is recorded as missing.
    pub fn is_empty(&self) -> bool {
        self.by_chain.values().all(HashSet::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_matches_only_inserted_keys() {
        let mut missing = MissingResidues::new();
        missing.insert(1, "A", 3);
        missing.insert(1, "A", 7);
        missing.insert(2, "B", 3);

        assert!(missing.has(1, "A", 3));
        assert!(missing.has(1, "A", 7));
        assert!(missing.has(2, "B", 3));

        assert!(!missing.has(1, "A", 4));
        assert!(!missing.has(2, "A", 3));
        assert!(!missing.has(1, "B", 3));
    }

    #[test]
    fn empty_registry_reports_nothing_missing() {
        let missing = MissingResidues::new();
        assert!(missing.is_empty());
        assert!(!missing.has(1, "A", 1));
    }
}
