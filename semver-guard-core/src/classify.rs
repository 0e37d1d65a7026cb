//! Severity verdicts and the classification reduction

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::diff::Change;

/// Required semantic-version bump, totally ordered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SemVerType {
    None,
    Patch,
    Minor,
    Major,
}

impl fmt::Display for SemVerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "NONE"),
            Self::Patch => write!(f, "PATCH"),
            Self::Minor => write!(f, "MINOR"),
            Self::Major => write!(f, "MAJOR"),
        }
    }
}

/// Reduce a change list to the single verdict describing it.
///
/// Pure maximum over the per-change severities; an empty list means the two
/// versions are indistinguishable and yields [`SemVerType::None`]. There is
/// deliberately no short-circuiting: callers want the full change list for
/// diagnostics even though only the maximum decides the verdict.
pub fn classify(changes: &[Change]) -> SemVerType {
    changes
        .iter()
        .map(|change| change.severity)
        .max()
        .unwrap_or(SemVerType::None)
}
