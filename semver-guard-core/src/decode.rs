//! Class-file decoding collaborator
//!
//! Maps one compiled class, as parsed by the `cafebabe` class-file library,
//! onto a [`ClassDescriptor`]. Bytecode-level well-formedness is the
//! library's concern; this module only shapes its output. All cafebabe types
//! stay behind this boundary.

use cafebabe::attributes::{AttributeData, AttributeInfo};
use cafebabe::{ClassAccessFlags, FieldAccessFlags, MethodAccessFlags};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{CheckError, CheckResult};
use crate::model::{
    fingerprint_of, ClassDescriptor, ClassKind, Fingerprint, MemberDescriptor, Visibility,
};

/// Decode one class entry into its dotted name and descriptor.
pub fn decode_class(entry: &str, bytes: &[u8]) -> CheckResult<(String, ClassDescriptor)> {
    let class_file = cafebabe::parse_class(bytes).map_err(|error| CheckError::Decode {
        path: entry.to_string(),
        reason: error.to_string(),
    })?;

    let name = dotted(&class_file.this_class);
    let descriptor = ClassDescriptor {
        visibility: class_visibility(class_file.access_flags),
        kind: class_kind(class_file.access_flags),
        superclass: class_file.super_class.as_deref().map(dotted),
        interfaces: class_file
            .interfaces
            .iter()
            .map(|interface| dotted(interface))
            .collect(),
        annotations: annotation_names(&class_file.attributes),
        fields: decode_fields(&class_file.fields),
        methods: decode_methods(&class_file.methods),
        implementation_fingerprint: fingerprint_of(bytes),
    };
    Ok((name, descriptor))
}

fn decode_fields(fields: &[cafebabe::FieldInfo]) -> BTreeMap<String, MemberDescriptor> {
    fields
        .iter()
        .map(|field| {
            let signature = format!("{}:{}", field.name, field.descriptor);
            let member = MemberDescriptor {
                visibility: field_visibility(field.access_flags),
                is_static: field.access_flags.contains(FieldAccessFlags::STATIC),
                is_final: field.access_flags.contains(FieldAccessFlags::FINAL),
                annotations: annotation_names(&field.attributes),
                body_fingerprint: None,
            };
            (signature, member)
        })
        .collect()
}

fn decode_methods(methods: &[cafebabe::MethodInfo]) -> BTreeMap<String, MemberDescriptor> {
    methods
        .iter()
        .map(|method| {
            let signature = format!("{}{}", method.name, method.descriptor);
            let member = MemberDescriptor {
                visibility: method_visibility(method.access_flags),
                is_static: method.access_flags.contains(MethodAccessFlags::STATIC),
                is_final: method.access_flags.contains(MethodAccessFlags::FINAL),
                annotations: annotation_names(&method.attributes),
                body_fingerprint: body_fingerprint(&method.attributes),
            };
            (signature, member)
        })
        .collect()
}

/// Top-level class files only carry the PUBLIC bit; nested visibility lives
/// in the InnerClasses attribute, which is not part of this model.
fn class_visibility(flags: ClassAccessFlags) -> Visibility {
    if flags.contains(ClassAccessFlags::PUBLIC) {
        Visibility::Public
    } else {
        Visibility::PackagePrivate
    }
}

fn class_kind(flags: ClassAccessFlags) -> ClassKind {
    if flags.contains(ClassAccessFlags::ANNOTATION) {
        ClassKind::Annotation
    } else if flags.contains(ClassAccessFlags::INTERFACE) {
        ClassKind::Interface
    } else if flags.contains(ClassAccessFlags::ENUM) {
        ClassKind::Enum
    } else {
        ClassKind::Class
    }
}

fn field_visibility(flags: FieldAccessFlags) -> Visibility {
    if flags.contains(FieldAccessFlags::PUBLIC) {
        Visibility::Public
    } else if flags.contains(FieldAccessFlags::PROTECTED) {
        Visibility::Protected
    } else if flags.contains(FieldAccessFlags::PRIVATE) {
        Visibility::Private
    } else {
        Visibility::PackagePrivate
    }
}

fn method_visibility(flags: MethodAccessFlags) -> Visibility {
    if flags.contains(MethodAccessFlags::PUBLIC) {
        Visibility::Public
    } else if flags.contains(MethodAccessFlags::PROTECTED) {
        Visibility::Protected
    } else if flags.contains(MethodAccessFlags::PRIVATE) {
        Visibility::Private
    } else {
        Visibility::PackagePrivate
    }
}

/// Runtime-visible and runtime-invisible annotations both count: retention
/// does not change what source-level contract the annotation expressed.
fn annotation_names(attributes: &[AttributeInfo]) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for attribute in attributes {
        match &attribute.data {
            AttributeData::RuntimeVisibleAnnotations(annotations)
            | AttributeData::RuntimeInvisibleAnnotations(annotations) => {
                for annotation in annotations {
                    names.insert(annotation_name(&annotation.type_descriptor));
                }
            }
            _ => {}
        }
    }
    names
}

fn body_fingerprint(attributes: &[AttributeInfo]) -> Option<Fingerprint> {
    attributes.iter().find_map(|attribute| match &attribute.data {
        AttributeData::Code(code) => Some(fingerprint_of(code.code.as_ref())),
        _ => None,
    })
}

/// `Ljava/lang/Deprecated;` -> `java.lang.Deprecated`
fn annotation_name(descriptor: &str) -> String {
    descriptor
        .strip_prefix('L')
        .and_then(|rest| rest.strip_suffix(';'))
        .unwrap_or(descriptor)
        .replace('/', ".")
}

/// `com/example/A` -> `com.example.A`
fn dotted(binary_name: &str) -> String {
    binary_name.replace('/', ".")
}
