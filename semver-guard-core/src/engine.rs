//! The diff & classification engine
//!
//! Composes differ, suppression, and classifier behind the single entry point
//! external callers use. The engine holds no hidden state: swapping original
//! and changed flips exactly what the directional rules flip, and running the
//! same check twice yields the identical report.

use serde::Serialize;
use std::path::Path;

use crate::artifact;
use crate::classify::{classify, SemVerType};
use crate::diff::{diff, Change, DiffOptions};
use crate::error::CheckResult;
use crate::model::ApiModel;
use crate::suppress::{suppress, SuppressionRules};

/// Verdict plus the surviving change list, for reporting
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub semver_type: SemVerType,
    pub changes: Vec<Change>,
}

/// Compatibility checker for one pair of artifact versions
pub struct SemVerChecker {
    original: ApiModel,
    changed: ApiModel,
    rules: SuppressionRules,
    options: DiffOptions,
}

impl SemVerChecker {
    /// Build a checker from already-materialized models.
    pub fn new(original: ApiModel, changed: ApiModel, rules: SuppressionRules) -> Self {
        Self {
            original,
            changed,
            rules,
            options: DiffOptions::default(),
        }
    }

    /// Build a checker by loading both artifacts from disk.
    pub fn from_paths(
        original: &Path,
        changed: &Path,
        rules: SuppressionRules,
    ) -> CheckResult<Self> {
        Ok(Self::new(
            artifact::load_artifact(original)?,
            artifact::load_artifact(changed)?,
            rules,
        ))
    }

    pub fn with_options(mut self, options: DiffOptions) -> Self {
        self.options = options;
        self
    }

    /// The minimum semantic-version bump honestly describing the change.
    pub fn determine_semver_type(&self) -> SemVerType {
        self.check().semver_type
    }

    /// Full report: verdict plus every change that survived suppression.
    pub fn check(&self) -> CheckReport {
        let detected = diff(&self.original, &self.changed, &self.options);
        let surviving = suppress(detected, &self.rules);
        let semver_type = classify(&surviving);
        tracing::debug!(
            changes = surviving.len(),
            verdict = %semver_type,
            "classified api difference"
        );
        CheckReport {
            semver_type,
            changes: surviving,
        }
    }
}
