//! API differ
//!
//! Walks two [`ApiModel`]s and produces an ordered list of typed [`Change`]
//! records. The compatibility policy is directional and deliberately
//! asymmetric: taking something away from consumers is breaking, giving them
//! something new is not. The whole policy lives in one severity table,
//! [`ChangeKind::severity`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classify::SemVerType;
use crate::model::{ApiModel, ClassDescriptor};

mod annotations;
mod members;
mod resources;

pub(crate) use annotations::diff_annotations;

/// What kind of difference was detected
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    ClassAdded,
    ClassRemoved,
    MemberAdded,
    MemberRemoved,
    VisibilityWidened,
    VisibilityNarrowed,
    AnnotationAdded,
    AnnotationRemoved,
    ImplementationChanged,
    ResourceAdded,
    ResourceRemoved,
    ResourceContentChanged,
}

impl ChangeKind {
    /// The severity table. Removals and narrowings break consumers (MAJOR),
    /// additions and widenings extend the contract (MINOR), everything that
    /// leaves the structural surface untouched is PATCH.
    pub const fn severity(self) -> SemVerType {
        match self {
            Self::ClassRemoved
            | Self::MemberRemoved
            | Self::VisibilityNarrowed
            | Self::AnnotationRemoved
            | Self::ResourceRemoved => SemVerType::Major,
            Self::ClassAdded
            | Self::MemberAdded
            | Self::VisibilityWidened
            | Self::AnnotationAdded => SemVerType::Minor,
            Self::ImplementationChanged | Self::ResourceAdded | Self::ResourceContentChanged => {
                SemVerType::Patch
            }
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClassAdded => write!(f, "Class added"),
            Self::ClassRemoved => write!(f, "Class removed"),
            Self::MemberAdded => write!(f, "Member added"),
            Self::MemberRemoved => write!(f, "Member removed"),
            Self::VisibilityWidened => write!(f, "Visibility widened"),
            Self::VisibilityNarrowed => write!(f, "Visibility narrowed"),
            Self::AnnotationAdded => write!(f, "Annotation added"),
            Self::AnnotationRemoved => write!(f, "Annotation removed"),
            Self::ImplementationChanged => write!(f, "Implementation changed"),
            Self::ResourceAdded => write!(f, "Resource added"),
            Self::ResourceRemoved => write!(f, "Resource removed"),
            Self::ResourceContentChanged => write!(f, "Resource content changed"),
        }
    }
}

/// Where a change was detected
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Class { class: String },
    Member { class: String, signature: String },
    Resource { path: String },
}

impl Location {
    /// The class name this location belongs to, if any
    pub fn class_name(&self) -> Option<&str> {
        match self {
            Self::Class { class } | Self::Member { class, .. } => Some(class),
            Self::Resource { .. } => None,
        }
    }

    /// The member signature at this location, if any
    pub fn member_signature(&self) -> Option<&str> {
        match self {
            Self::Member { signature, .. } => Some(signature),
            _ => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class { class } => write!(f, "{class}"),
            Self::Member { class, signature } => write!(f, "{class}#{signature}"),
            Self::Resource { path } => write!(f, "{path}"),
        }
    }
}

/// One detected difference between two artifact versions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Change {
    pub kind: ChangeKind,
    pub location: Location,
    /// Annotation identity for annotation changes, so suppression rules can
    /// match it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    /// Assigned at detection time from the severity table
    pub severity: SemVerType,
}

impl Change {
    pub fn new(kind: ChangeKind, location: Location) -> Self {
        Self {
            kind,
            location,
            annotation: None,
            severity: kind.severity(),
        }
    }

    pub fn with_annotation(kind: ChangeKind, location: Location, annotation: String) -> Self {
        Self {
            kind,
            location,
            annotation: Some(annotation),
            severity: kind.severity(),
        }
    }
}

/// How additions and removals outside the API-visible surface are reported
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HiddenChangePolicy {
    /// Record them as implementation changes (PATCH), keeping the report
    /// auditable
    #[default]
    Record,
    /// Treat them as invisible
    Ignore,
}

/// Knobs for a diff run, passed explicitly so independent checks can run
/// concurrently with different settings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffOptions {
    pub hidden_changes: HiddenChangePolicy,
}

/// Compute the ordered difference between two API models.
///
/// Classes are visited in name order: first everything present in `original`
/// (removed or retained), then the additions, then the resources. Calling
/// this twice on the same inputs yields the identical list.
pub fn diff(original: &ApiModel, changed: &ApiModel, options: &DiffOptions) -> Vec<Change> {
    let mut changes = Vec::new();

    for (name, class) in &original.classes {
        match changed.classes.get(name) {
            Some(counterpart) => diff_retained_class(name, class, counterpart, options, &mut changes),
            None => diff_missing_class(name, class, ChangeKind::ClassRemoved, options, &mut changes),
        }
    }
    for (name, class) in &changed.classes {
        if !original.classes.contains_key(name) {
            diff_missing_class(name, class, ChangeKind::ClassAdded, options, &mut changes);
        }
    }

    resources::diff_resources(&original.resources, &changed.resources, &mut changes);
    changes
}

/// A class present on only one side: report it when API-visible, otherwise
/// apply the hidden-change policy.
fn diff_missing_class(
    name: &str,
    class: &ClassDescriptor,
    kind: ChangeKind,
    options: &DiffOptions,
    changes: &mut Vec<Change>,
) {
    let location = Location::Class {
        class: name.to_string(),
    };
    if class.visibility.is_api_visible() {
        changes.push(Change::new(kind, location));
    } else if options.hidden_changes == HiddenChangePolicy::Record {
        changes.push(Change::new(ChangeKind::ImplementationChanged, location));
    }
}

fn diff_retained_class(
    name: &str,
    original: &ClassDescriptor,
    changed: &ClassDescriptor,
    options: &DiffOptions,
    changes: &mut Vec<Change>,
) {
    let before = changes.len();
    let location = Location::Class {
        class: name.to_string(),
    };

    let was_visible = original.visibility.is_api_visible();
    let is_visible = changed.visibility.is_api_visible();
    if !was_visible && is_visible {
        changes.push(Change::new(ChangeKind::VisibilityWidened, location.clone()));
    } else if was_visible && !is_visible {
        changes.push(Change::new(ChangeKind::VisibilityNarrowed, location.clone()));
    }
    if was_visible || is_visible {
        diff_annotations(&original.annotations, &changed.annotations, &location, changes);
    }

    members::diff_members(name, &original.fields, &changed.fields, options, changes);
    members::diff_members(name, &original.methods, &changed.methods, options, changes);

    // Only the fingerprint is left to tell an implementation-only change
    // apart from no change at all.
    if changes.len() == before
        && original.implementation_fingerprint != changed.implementation_fingerprint
    {
        changes.push(Change::new(ChangeKind::ImplementationChanged, location));
    }
}
