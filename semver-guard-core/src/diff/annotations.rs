//! Annotation diff, applied uniformly to classes and members
//!
//! The asymmetry is intentional: annotations are extra contractual
//! information a consumer may rely on (deprecation markers, nullability,
//! serialization hints). Adding information cannot break anyone; withdrawing
//! it can silently change consumer-visible guarantees, so removal is
//! classified as breaking.

use std::collections::BTreeSet;

use super::{Change, ChangeKind, Location};

/// Emit the symmetric difference of two annotation-name sets.
pub(crate) fn diff_annotations(
    original: &BTreeSet<String>,
    changed: &BTreeSet<String>,
    location: &Location,
    changes: &mut Vec<Change>,
) {
    for added in changed.difference(original) {
        changes.push(Change::with_annotation(
            ChangeKind::AnnotationAdded,
            location.clone(),
            added.clone(),
        ));
    }
    for removed in original.difference(changed) {
        changes.push(Change::with_annotation(
            ChangeKind::AnnotationRemoved,
            location.clone(),
            removed.clone(),
        ));
    }
}
