//! Suppression rules
//!
//! Pattern-based filters that drop specific changes before classification, so
//! a suppressed change can never influence the verdict. Three independent
//! lists: class-name patterns matched against the class of a location, member
//! patterns matched against member signatures, annotation patterns matched
//! against the annotation identity a change carries. Patterns are regexes and
//! are compiled when the rule set is built; a pattern that does not compile
//! fails the whole run.

use regex::Regex;

use crate::diff::Change;
use crate::error::{CheckError, CheckResult};

/// Compiled suppression patterns for one check run
#[derive(Debug, Clone, Default)]
pub struct SuppressionRules {
    classes: Vec<Regex>,
    members: Vec<Regex>,
    annotations: Vec<Regex>,
}

impl SuppressionRules {
    /// Compile three pattern lists into a rule set.
    pub fn new(
        classes: &[String],
        members: &[String],
        annotations: &[String],
    ) -> CheckResult<Self> {
        Ok(Self {
            classes: compile(classes)?,
            members: compile(members)?,
            annotations: compile(annotations)?,
        })
    }

    /// A rule set that suppresses nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.members.is_empty() && self.annotations.is_empty()
    }

    fn suppresses(&self, change: &Change) -> bool {
        if let Some(class) = change.location.class_name() {
            if self.classes.iter().any(|pattern| pattern.is_match(class)) {
                return true;
            }
        }
        if let Some(signature) = change.location.member_signature() {
            if self.members.iter().any(|pattern| pattern.is_match(signature)) {
                return true;
            }
        }
        if let Some(annotation) = &change.annotation {
            if self
                .annotations
                .iter()
                .any(|pattern| pattern.is_match(annotation))
            {
                return true;
            }
        }
        false
    }
}

fn compile(patterns: &[String]) -> CheckResult<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|error| CheckError::Configuration {
                reason: format!("invalid suppression pattern `{pattern}`: {error}"),
            })
        })
        .collect()
}

/// Drop every change matched by the rules, preserving order.
///
/// Must run before classification, never after: a filtered-out change must
/// not influence severity.
pub fn suppress(changes: Vec<Change>, rules: &SuppressionRules) -> Vec<Change> {
    if rules.is_empty() {
        return changes;
    }
    changes
        .into_iter()
        .filter(|change| !rules.suppresses(change))
        .collect()
}
