//! End-to-end engine scenarios over hand-built API models
//!
//! Each scenario mirrors a real source-level edit to a single class (or
//! resource) and checks the verdict in the forward direction and, where the
//! policy is directional, with original and changed swapped.

use std::collections::BTreeSet;

use semver_guard_core::{
    ApiModel, ClassDescriptor, ClassKind, DiffOptions, HiddenChangePolicy, MemberDescriptor,
    SemVerChecker, SemVerType, SuppressionRules, Visibility,
};

fn class_with_fingerprint(fingerprint: &str) -> ClassDescriptor {
    let mut class = ClassDescriptor::new(Visibility::Public, ClassKind::Class);
    class.superclass = Some("java.lang.Object".to_string());
    class.implementation_fingerprint = fingerprint.to_string();
    class
}

fn method(visibility: Visibility, body: &str) -> MemberDescriptor {
    let mut member = MemberDescriptor::new(visibility);
    member.body_fingerprint = Some(body.to_string());
    member
}

fn field(visibility: Visibility) -> MemberDescriptor {
    let mut member = MemberDescriptor::new(visibility);
    member.is_static = true;
    member.is_final = true;
    member
}

fn annotated(mut member: MemberDescriptor, annotation: &str) -> MemberDescriptor {
    member.annotations.insert(annotation.to_string());
    member
}

fn model_with(class: ClassDescriptor) -> ApiModel {
    let mut model = ApiModel::new();
    model.add_class("com.example.ClassA", class);
    model
}

fn check(original: &ApiModel, changed: &ApiModel) -> SemVerType {
    SemVerChecker::new(original.clone(), changed.clone(), SuppressionRules::empty())
        .determine_semver_type()
}

fn check_reversed(original: &ApiModel, changed: &ApiModel) -> SemVerType {
    check(changed, original)
}

#[test]
fn unchanged_artifact_requires_no_bump() {
    let mut class = class_with_fingerprint("v1");
    class
        .methods
        .insert("somethingYouShouldSee()V".to_string(), method(Visibility::Public, "b1"));
    let model = model_with(class);

    assert_eq!(check(&model, &model.clone()), SemVerType::None);
}

#[test]
fn added_annotation_to_method() {
    let mut original_class = class_with_fingerprint("v1");
    original_class
        .methods
        .insert("somethingYouShouldSee()V".to_string(), method(Visibility::Public, "b1"));

    let mut changed_class = class_with_fingerprint("v2");
    changed_class.methods.insert(
        "somethingYouShouldSee()V".to_string(),
        annotated(method(Visibility::Public, "b1"), "java.lang.Deprecated"),
    );

    let original = model_with(original_class);
    let changed = model_with(changed_class);

    assert_eq!(check(&original, &changed), SemVerType::Minor);
    assert_eq!(check_reversed(&original, &changed), SemVerType::Major);
}

#[test]
fn class_not_in_changed() {
    let mut class = class_with_fingerprint("v1");
    class
        .methods
        .insert("somethingYouShouldNotSee()V".to_string(), method(Visibility::Private, "b1"));

    let original = model_with(class);
    let changed = ApiModel::new();

    assert_eq!(check(&original, &changed), SemVerType::Major);
}

#[test]
fn added_private_method() {
    let mut original_class = class_with_fingerprint("v1");
    original_class
        .methods
        .insert("somethingYouShouldNotSee()V".to_string(), method(Visibility::Private, "b1"));

    let mut changed_class = class_with_fingerprint("v2");
    changed_class
        .methods
        .insert("somethingYouShouldNotSee()V".to_string(), method(Visibility::Private, "b1"));
    changed_class
        .methods
        .insert("somethingElseYouShouldNotSee()V".to_string(), method(Visibility::Private, "b2"));

    let original = model_with(original_class);
    let changed = model_with(changed_class);

    assert_eq!(check(&original, &changed), SemVerType::Patch);

    // The verdict holds under both hidden-change policies: when the addition
    // itself is ignored, the class fingerprint still tells PATCH.
    let ignoring = SemVerChecker::new(original.clone(), changed.clone(), SuppressionRules::empty())
        .with_options(DiffOptions {
            hidden_changes: HiddenChangePolicy::Ignore,
        });
    assert_eq!(ignoring.determine_semver_type(), SemVerType::Patch);
}

#[test]
fn added_public_method() {
    let mut original_class = class_with_fingerprint("v1");
    original_class
        .methods
        .insert("somethingYouShouldNotSee()V".to_string(), method(Visibility::Private, "b1"));

    let mut changed_class = original_class.clone();
    changed_class.implementation_fingerprint = "v2".to_string();
    changed_class
        .methods
        .insert("somethingPublic()V".to_string(), method(Visibility::Public, "b2"));

    let original = model_with(original_class);
    let changed = model_with(changed_class);

    assert_eq!(check(&original, &changed), SemVerType::Minor);
    assert_eq!(check_reversed(&original, &changed), SemVerType::Major);
}

#[test]
fn added_public_static_field() {
    let original_class = class_with_fingerprint("v1");

    let mut changed_class = class_with_fingerprint("v2");
    changed_class.fields.insert(
        "SOMETHING:Ljava/lang/String;".to_string(),
        field(Visibility::Public),
    );

    let original = model_with(original_class);
    let changed = model_with(changed_class);

    assert_eq!(check(&original, &changed), SemVerType::Minor);
}

#[test]
fn added_constructor_with_param() {
    // The original class declares no constructor, so the model carries the
    // implicit no-argument one. Declaring only a parameterized constructor
    // removes it: a removal plus an addition, and the removal dominates.
    let original = model_with(class_with_fingerprint("v1"));

    let mut changed_class = class_with_fingerprint("v2");
    changed_class
        .methods
        .insert("<init>(I)V".to_string(), method(Visibility::Public, "c1"));
    let changed = model_with(changed_class);

    assert_eq!(check(&original, &changed), SemVerType::Major);
}

#[test]
fn added_constructor_with_param_and_default() {
    let original = model_with(class_with_fingerprint("v1"));

    let mut changed_class = class_with_fingerprint("v2");
    changed_class
        .methods
        .insert("<init>()V".to_string(), method(Visibility::Public, "c0"));
    changed_class
        .methods
        .insert("<init>(I)V".to_string(), method(Visibility::Public, "c1"));
    let changed = model_with(changed_class);

    assert_eq!(check(&original, &changed), SemVerType::Minor);
    assert_eq!(check_reversed(&original, &changed), SemVerType::Major);
}

#[test]
fn added_manual_constructor() {
    // Writing out `public ClassA() { super(); }` keeps the signature but the
    // compiled body differs from the implicit constructor.
    let original = model_with(class_with_fingerprint("v1"));

    let mut changed_class = class_with_fingerprint("v2");
    changed_class
        .methods
        .insert("<init>()V".to_string(), method(Visibility::Public, "c0"));
    let changed = model_with(changed_class);

    assert_eq!(check(&original, &changed), SemVerType::Patch);
    assert_eq!(check_reversed(&original, &changed), SemVerType::Patch);
}

#[test]
fn added_manual_constructor_with_annotation() {
    let original = model_with(class_with_fingerprint("v1"));

    let mut changed_class = class_with_fingerprint("v2");
    changed_class.methods.insert(
        "<init>()V".to_string(),
        annotated(method(Visibility::Public, "c0"), "java.lang.Deprecated"),
    );
    let changed = model_with(changed_class);

    assert_eq!(check(&original, &changed), SemVerType::Minor);
    assert_eq!(check_reversed(&original, &changed), SemVerType::Major);
}

#[test]
fn widened_method_visibility() {
    let mut original_class = class_with_fingerprint("v1");
    original_class
        .methods
        .insert("doWork()V".to_string(), method(Visibility::PackagePrivate, "b1"));

    let mut changed_class = class_with_fingerprint("v2");
    changed_class
        .methods
        .insert("doWork()V".to_string(), method(Visibility::Public, "b1"));

    let original = model_with(original_class);
    let changed = model_with(changed_class);

    assert_eq!(check(&original, &changed), SemVerType::Minor);
    assert_eq!(check_reversed(&original, &changed), SemVerType::Major);
}

#[test]
fn added_resource_file() {
    let mut original = ApiModel::new();
    original.add_resource("META-INF/MANIFEST.MF", "m1".to_string());

    let mut changed = original.clone();
    changed.add_resource("resource.txt", "r1".to_string());

    assert_eq!(check(&original, &changed), SemVerType::Patch);
    assert_eq!(check_reversed(&original, &changed), SemVerType::Major);
}

#[test]
fn changed_resource_file() {
    let mut original = ApiModel::new();
    original.add_resource("resource.txt", "r1".to_string());

    let mut changed = ApiModel::new();
    changed.add_resource("resource.txt", "r2".to_string());

    assert_eq!(check(&original, &changed), SemVerType::Patch);
    assert_eq!(check_reversed(&original, &changed), SemVerType::Patch);
}

#[test]
fn suppressed_class_removal_is_invisible_to_the_verdict() {
    let original = model_with(class_with_fingerprint("v1"));
    let changed = ApiModel::new();
    let rules = SuppressionRules::new(&["^com\\.example\\.".to_string()], &[], &[]).unwrap();

    let checker = SemVerChecker::new(original, changed, rules);
    let report = checker.check();
    assert_eq!(report.semver_type, SemVerType::None);
    assert!(report.changes.is_empty());
}

#[test]
fn suppressed_annotation_removal_leaves_the_body_signal() {
    let mut original_class = class_with_fingerprint("v1");
    original_class.methods.insert(
        "doWork()V".to_string(),
        annotated(
            method(Visibility::Public, "b1"),
            "javax.annotation.processing.Generated",
        ),
    );

    let mut changed_class = class_with_fingerprint("v2");
    changed_class
        .methods
        .insert("doWork()V".to_string(), method(Visibility::Public, "b1"));

    let rules = SuppressionRules::new(&[], &[], &["Generated$".to_string()]).unwrap();
    let checker = SemVerChecker::new(model_with(original_class), model_with(changed_class), rules);

    // Without the rule the removal would be MAJOR; with it only the
    // class-level fingerprint difference is left... which is itself muted
    // because the annotation change was detected before suppression ran.
    let report = checker.check();
    assert_eq!(report.semver_type, SemVerType::None);
}

#[test]
fn hidden_members_never_dominate_a_visible_change() {
    let mut original_class = class_with_fingerprint("v1");
    original_class
        .methods
        .insert("hidden()V".to_string(), method(Visibility::Private, "b1"));

    let mut changed_class = class_with_fingerprint("v2");
    changed_class
        .methods
        .insert("visible()V".to_string(), method(Visibility::Public, "b2"));

    let original = model_with(original_class);
    let changed = model_with(changed_class);

    // Hidden removal records PATCH, visible addition records MINOR.
    assert_eq!(check(&original, &changed), SemVerType::Minor);
}

#[test]
fn annotation_sets_compare_as_sets() {
    let mut original_class = class_with_fingerprint("v1");
    original_class.annotations = BTreeSet::from([
        "java.lang.Deprecated".to_string(),
        "java.lang.FunctionalInterface".to_string(),
    ]);

    let mut changed_class = class_with_fingerprint("v1");
    changed_class.annotations = BTreeSet::from([
        "java.lang.FunctionalInterface".to_string(),
        "java.lang.Deprecated".to_string(),
    ]);

    assert_eq!(
        check(&model_with(original_class), &model_with(changed_class)),
        SemVerType::None
    );
}
