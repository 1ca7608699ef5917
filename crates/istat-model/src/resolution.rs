//! Per-code resolution records produced by the resolver.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a code relative to a reference valid set.
///
/// The three states are disjoint: exactly one holds for every input code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeStatus {
    /// Member of the current valid set.
    Valid,
    /// Not currently valid, but the supersession chain made progress.
    Changed,
    /// No resolvable path: absent from the map, or the chain went nowhere.
    Suppressed,
}

/// Outcome of resolving a single code.
///
/// `changed` and `suppressed` are mutually exclusive; both are false exactly
/// when the original code was already valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The code after following the supersession chain (the input code when
    /// no progress was possible).
    pub resolved: String,
    pub changed: bool,
    pub suppressed: bool,
}

impl Resolution {
    /// Record for a code that is already in the valid set.
    pub fn valid(code: impl Into<String>) -> Self {
        Self {
            resolved: code.into(),
            changed: false,
            suppressed: false,
        }
    }

    /// Record for a code whose chain reached a different terminus.
    pub fn changed(terminus: impl Into<String>) -> Self {
        Self {
            resolved: terminus.into(),
            changed: true,
            suppressed: false,
        }
    }

    /// Record for a code with no resolvable path.
    pub fn suppressed(code: impl Into<String>) -> Self {
        Self {
            resolved: code.into(),
            changed: false,
            suppressed: true,
        }
    }

    pub fn status(&self) -> CodeStatus {
        if self.changed {
            CodeStatus::Changed
        } else if self.suppressed {
            CodeStatus::Suppressed
        } else {
            CodeStatus::Valid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_keep_flags_exclusive() {
        for record in [
            Resolution::valid("001001"),
            Resolution::changed("001002"),
            Resolution::suppressed("099999"),
        ] {
            assert!(!(record.changed && record.suppressed));
        }
    }

    #[test]
    fn status_maps_flags() {
        assert_eq!(Resolution::valid("A").status(), CodeStatus::Valid);
        assert_eq!(Resolution::changed("B").status(), CodeStatus::Changed);
        assert_eq!(Resolution::suppressed("C").status(), CodeStatus::Suppressed);
    }
}
