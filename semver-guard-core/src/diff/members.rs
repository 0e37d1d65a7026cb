//! Member-level diff for fields, methods, and constructors
//!
//! Members are compared by signature key only. A changed parameter list or
//! return type is therefore an independent removal plus addition, never a
//! "modified" record. Combined with the implicit-constructor normalization in
//! the model, replacing the compiler-generated no-argument constructor with a
//! parameterized one is literally a removal (MAJOR) plus an addition (MINOR).

use std::collections::BTreeMap;

use super::{diff_annotations, Change, ChangeKind, DiffOptions, HiddenChangePolicy, Location};
use crate::model::MemberDescriptor;

/// Compare one signature-keyed member map (fields or methods) of a class
/// present in both versions.
pub(super) fn diff_members(
    class: &str,
    original: &BTreeMap<String, MemberDescriptor>,
    changed: &BTreeMap<String, MemberDescriptor>,
    options: &DiffOptions,
    changes: &mut Vec<Change>,
) {
    for (signature, member) in original {
        match changed.get(signature) {
            Some(counterpart) => {
                diff_retained_member(class, signature, member, counterpart, changes);
            }
            None => diff_missing_member(
                class,
                signature,
                member,
                ChangeKind::MemberRemoved,
                options,
                changes,
            ),
        }
    }
    for (signature, member) in changed {
        if !original.contains_key(signature) {
            diff_missing_member(
                class,
                signature,
                member,
                ChangeKind::MemberAdded,
                options,
                changes,
            );
        }
    }
}

fn member_location(class: &str, signature: &str) -> Location {
    Location::Member {
        class: class.to_string(),
        signature: signature.to_string(),
    }
}

fn diff_missing_member(
    class: &str,
    signature: &str,
    member: &MemberDescriptor,
    kind: ChangeKind,
    options: &DiffOptions,
    changes: &mut Vec<Change>,
) {
    let location = member_location(class, signature);
    if member.visibility.is_api_visible() {
        changes.push(Change::new(kind, location));
    } else if options.hidden_changes == HiddenChangePolicy::Record {
        changes.push(Change::new(ChangeKind::ImplementationChanged, location));
    }
}

fn diff_retained_member(
    class: &str,
    signature: &str,
    original: &MemberDescriptor,
    changed: &MemberDescriptor,
    changes: &mut Vec<Change>,
) {
    let before = changes.len();
    let location = member_location(class, signature);

    let was_visible = original.visibility.is_api_visible();
    let is_visible = changed.visibility.is_api_visible();
    if !was_visible && is_visible {
        changes.push(Change::new(ChangeKind::VisibilityWidened, location.clone()));
    } else if was_visible && !is_visible {
        changes.push(Change::new(ChangeKind::VisibilityNarrowed, location.clone()));
    }

    // Annotations on members nobody can see carry no contract.
    if was_visible || is_visible {
        diff_annotations(&original.annotations, &changed.annotations, &location, changes);
    }

    if changes.len() == before && original.body_fingerprint != changed.body_fingerprint {
        changes.push(Change::new(ChangeKind::ImplementationChanged, location));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::SemVerType;
    use crate::model::Visibility;

    fn member(visibility: Visibility) -> MemberDescriptor {
        MemberDescriptor::new(visibility)
    }

    fn with_body(visibility: Visibility, body: &str) -> MemberDescriptor {
        let mut member = MemberDescriptor::new(visibility);
        member.body_fingerprint = Some(body.to_string());
        member
    }

    fn run(
        original: &[(&str, MemberDescriptor)],
        changed: &[(&str, MemberDescriptor)],
        options: &DiffOptions,
    ) -> Vec<Change> {
        let original: BTreeMap<String, MemberDescriptor> = original
            .iter()
            .map(|(signature, member)| (signature.to_string(), member.clone()))
            .collect();
        let changed: BTreeMap<String, MemberDescriptor> = changed
            .iter()
            .map(|(signature, member)| (signature.to_string(), member.clone()))
            .collect();

        let mut changes = Vec::new();
        diff_members("com.example.A", &original, &changed, options, &mut changes);
        changes
    }

    #[test]
    fn test_removed_public_member_is_major() {
        let changes = run(
            &[("doWork()V", member(Visibility::Public))],
            &[],
            &DiffOptions::default(),
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::MemberRemoved);
        assert_eq!(changes[0].severity, SemVerType::Major);
        assert_eq!(
            changes[0].location.member_signature(),
            Some("doWork()V")
        );
    }

    #[test]
    fn test_added_protected_member_is_minor() {
        let changes = run(
            &[],
            &[("doWork()V", member(Visibility::Protected))],
            &DiffOptions::default(),
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::MemberAdded);
        assert_eq!(changes[0].severity, SemVerType::Minor);
    }

    #[test]
    fn test_added_private_member_recorded_as_patch() {
        let changes = run(
            &[],
            &[("hidden()V", member(Visibility::Private))],
            &DiffOptions::default(),
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::ImplementationChanged);
        assert_eq!(changes[0].severity, SemVerType::Patch);
    }

    #[test]
    fn test_added_private_member_ignored_under_ignore_policy() {
        let options = DiffOptions {
            hidden_changes: HiddenChangePolicy::Ignore,
        };
        let changes = run(&[], &[("hidden()V", member(Visibility::Private))], &options);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_visibility_widening_is_minor() {
        let changes = run(
            &[("doWork()V", member(Visibility::Private))],
            &[("doWork()V", member(Visibility::Public))],
            &DiffOptions::default(),
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::VisibilityWidened);
        assert_eq!(changes[0].severity, SemVerType::Minor);
    }

    #[test]
    fn test_visibility_narrowing_is_major() {
        let changes = run(
            &[("doWork()V", member(Visibility::Public))],
            &[("doWork()V", member(Visibility::PackagePrivate))],
            &DiffOptions::default(),
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::VisibilityNarrowed);
        assert_eq!(changes[0].severity, SemVerType::Major);
    }

    #[test]
    fn test_body_change_alone_is_patch() {
        let changes = run(
            &[("doWork()V", with_body(Visibility::Public, "b1"))],
            &[("doWork()V", with_body(Visibility::Public, "b2"))],
            &DiffOptions::default(),
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::ImplementationChanged);
        assert_eq!(changes[0].severity, SemVerType::Patch);
    }

    #[test]
    fn test_body_change_not_reported_when_annotations_changed() {
        let mut annotated = with_body(Visibility::Public, "b2");
        annotated.annotations.insert("java.lang.Deprecated".to_string());

        let changes = run(
            &[("doWork()V", with_body(Visibility::Public, "b1"))],
            &[("doWork()V", annotated)],
            &DiffOptions::default(),
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::AnnotationAdded);
    }

    #[test]
    fn test_annotations_on_hidden_members_are_not_contractual() {
        let mut annotated = member(Visibility::Private);
        annotated.annotations.insert("java.lang.Deprecated".to_string());

        let changes = run(
            &[("hidden()V", member(Visibility::Private))],
            &[("hidden()V", annotated)],
            &DiffOptions::default(),
        );
        assert!(changes.is_empty());
    }

    #[test]
    fn test_hidden_body_change_is_still_patch() {
        let changes = run(
            &[("hidden()V", with_body(Visibility::Private, "b1"))],
            &[("hidden()V", with_body(Visibility::Private, "b2"))],
            &DiffOptions::default(),
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::ImplementationChanged);
    }

    #[test]
    fn test_overload_addition_is_independent_of_existing_signature() {
        let changes = run(
            &[("doWork()V", member(Visibility::Public))],
            &[
                ("doWork()V", member(Visibility::Public)),
                ("doWork(I)V", member(Visibility::Public)),
            ],
            &DiffOptions::default(),
        );
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::MemberAdded);
    }
}
