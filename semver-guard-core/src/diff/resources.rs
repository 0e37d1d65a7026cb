//! Resource diff for non-class archive entries
//!
//! A new resource is not a new capability of the versioned API surface, so
//! additions stay at PATCH. Removal is classified conservatively: consumers
//! may load resources by path at runtime, and a missing one fails late.

use std::collections::BTreeMap;

use super::{Change, ChangeKind, Location};
use crate::model::Fingerprint;

pub(super) fn diff_resources(
    original: &BTreeMap<String, Fingerprint>,
    changed: &BTreeMap<String, Fingerprint>,
    changes: &mut Vec<Change>,
) {
    for (path, fingerprint) in original {
        let location = Location::Resource { path: path.clone() };
        match changed.get(path) {
            None => changes.push(Change::new(ChangeKind::ResourceRemoved, location)),
            Some(counterpart) if counterpart != fingerprint => {
                changes.push(Change::new(ChangeKind::ResourceContentChanged, location));
            }
            Some(_) => {}
        }
    }
    for path in changed.keys() {
        if !original.contains_key(path) {
            changes.push(Change::new(
                ChangeKind::ResourceAdded,
                Location::Resource { path: path.clone() },
            ));
        }
    }
}
