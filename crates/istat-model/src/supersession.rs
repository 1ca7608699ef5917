//! The old-code → new-code reference table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ReconError, Result};

/// Mapping from a superseded code to its single successor.
///
/// Many old codes may share one successor (merges); one old code must never
/// have two different successors. The map is read-only reference data: the
/// resolver never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupersessionMap {
    entries: BTreeMap<String, String>,
}

impl SupersessionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map from raw `(old, new)` pairs.
    ///
    /// Rejects blank codes and a key paired with two different successors.
    /// Exact duplicate pairs are tolerated; caller tables routinely repeat
    /// rows across recording periods.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut entries = BTreeMap::new();
        for (old, new) in pairs {
            let old = old.into();
            let new = new.into();
            if old.trim().is_empty() || new.trim().is_empty() {
                return Err(ReconError::InvalidInput(
                    "supersession entry with blank code".to_string(),
                ));
            }
            match entries.get(&old) {
                Some(existing) if existing != &new => {
                    return Err(ReconError::InvalidInput(format!(
                        "code '{old}' has two successors: '{existing}' and '{new}'"
                    )));
                }
                _ => {
                    entries.insert(old, new);
                }
            }
        }
        Ok(Self { entries })
    }

    /// Successor of `code`, if the code was superseded.
    pub fn successor_of(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(old, new)| (old.as_str(), new.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_pairs() {
        let map = SupersessionMap::from_pairs([("A", "B"), ("B", "C")]).unwrap();
        assert_eq!(map.successor_of("A"), Some("B"));
        assert_eq!(map.successor_of("C"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn duplicate_identical_pairs_are_tolerated() {
        let map = SupersessionMap::from_pairs([("A", "B"), ("A", "B")]).unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn conflicting_successors_are_rejected() {
        let err = SupersessionMap::from_pairs([("A", "B"), ("A", "C")]).unwrap_err();
        assert!(matches!(err, ReconError::InvalidInput(_)));
    }

    #[test]
    fn blank_codes_are_rejected() {
        let err = SupersessionMap::from_pairs([("", "B")]).unwrap_err();
        assert!(matches!(err, ReconError::InvalidInput(_)));
    }
}
