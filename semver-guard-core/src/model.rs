//! Structural API model of one artifact version
//!
//! An [`ApiModel`] is an immutable snapshot built once per check run from the
//! artifact collaborators and discarded after classification. All maps are
//! ordered so that two traversals of the same pair of models always visit
//! entries in the same order.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};

/// Lowercase hex SHA-256 over some content, used to detect non-structural
/// changes without comparing raw bytes.
pub type Fingerprint = String;

/// Reserved JVM name for constructors.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// Signature of the implicit no-argument constructor.
pub const IMPLICIT_CONSTRUCTOR: &str = "<init>()V";

/// Hash arbitrary content into a [`Fingerprint`]
pub fn fingerprint_of(bytes: &[u8]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Declared visibility of a class or member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Visibility {
    /// Whether this visibility is part of the externally consumable contract
    pub const fn is_api_visible(self) -> bool {
        matches!(self, Self::Public | Self::Protected)
    }
}

/// What sort of type a class entry declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

/// One field, method, or constructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    /// Annotation type names present on the member, dotted form
    pub annotations: BTreeSet<String>,
    /// Hash of the compiled instructions; `None` for fields and bodyless
    /// methods
    pub body_fingerprint: Option<Fingerprint>,
}

impl MemberDescriptor {
    /// A plain member with no annotations and no body
    pub fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            is_static: false,
            is_final: false,
            annotations: BTreeSet::new(),
            body_fingerprint: None,
        }
    }
}

/// One class, interface, enum, or annotation type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub visibility: Visibility,
    pub kind: ClassKind,
    /// Referenced supertype names, retained for reporting only
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
    pub annotations: BTreeSet<String>,
    /// Fields keyed by `name:descriptor`
    pub fields: BTreeMap<String, MemberDescriptor>,
    /// Methods and constructors keyed by `name(params)return` JVM signature
    pub methods: BTreeMap<String, MemberDescriptor>,
    /// Hash over the whole class file, used only when no structural change
    /// was detected
    pub implementation_fingerprint: Fingerprint,
}

impl ClassDescriptor {
    pub fn new(visibility: Visibility, kind: ClassKind) -> Self {
        Self {
            visibility,
            kind,
            superclass: None,
            interfaces: Vec::new(),
            annotations: BTreeSet::new(),
            fields: BTreeMap::new(),
            methods: BTreeMap::new(),
            implementation_fingerprint: Fingerprint::new(),
        }
    }

    fn declares_constructor(&self) -> bool {
        self.methods
            .keys()
            .any(|signature| signature.starts_with(CONSTRUCTOR_NAME))
    }
}

/// Structural snapshot of one artifact version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiModel {
    /// Fully-qualified dotted class name -> descriptor
    pub classes: BTreeMap<String, ClassDescriptor>,
    /// Resource path -> content fingerprint, class entries excluded
    pub resources: BTreeMap<String, Fingerprint>,
}

impl ApiModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a class, normalizing implicit members into explicit entries.
    ///
    /// A class that declares no constructor gets the implicit no-argument
    /// constructor materialized with the class's own visibility, so the
    /// differ never has to special-case compiler-generated members.
    pub fn add_class(&mut self, name: impl Into<String>, mut class: ClassDescriptor) {
        if class.kind == ClassKind::Class && !class.declares_constructor() {
            class.methods.insert(
                IMPLICIT_CONSTRUCTOR.to_string(),
                MemberDescriptor::new(class.visibility),
            );
        }
        self.classes.insert(name.into(), class);
    }

    pub fn add_resource(&mut self, path: impl Into<String>, fingerprint: Fingerprint) {
        self.resources.insert(path.into(), fingerprint);
    }
}
