// Copyright 2025 Kindly Software Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Configuration for `SemverGuard`
//!
//! Declarative TOML describing what a check should ignore and how it should
//! treat changes outside the API-visible surface. Configuration sources are
//! checked in order:
//! 1. Explicit path handed to [`Configuration::resolve`] (highest precedence)
//! 2. Environment variable `SEMVER_GUARD_CONFIG`
//! 3. `semver-guard.toml` in the current directory
//! 4. Built-in defaults (nothing suppressed, hidden changes recorded)
//!
//! # Example
//!
//! ```toml
//! [suppress]
//! classes = ["^com\\.example\\.internal\\."]
//! members = ["^toString\\(\\)"]
//! annotations = ["Generated$"]
//!
//! [policy]
//! hidden_changes = "record"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::diff::{DiffOptions, HiddenChangePolicy};
use crate::error::{CheckError, CheckResult};
use crate::suppress::SuppressionRules;

/// Environment variable naming an alternative configuration file
pub const CONFIG_ENV_VAR: &str = "SEMVER_GUARD_CONFIG";

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "semver-guard.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    pub suppress: SuppressConfig,
    pub policy: PolicyConfig,
}

/// The three independent suppression pattern lists
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuppressConfig {
    /// Regexes matched against fully-qualified class names
    pub classes: Vec<String>,
    /// Regexes matched against member signatures
    pub members: Vec<String>,
    /// Regexes matched against annotation type names
    pub annotations: Vec<String>,
}

/// Policy knobs forwarded to the differ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub hidden_changes: HiddenChangePolicy,
}

impl Configuration {
    /// Load and parse one configuration file.
    pub fn load(path: &Path) -> CheckResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|error| CheckError::Configuration {
            reason: format!("cannot read {}: {error}", path.display()),
        })?;
        toml::from_str(&raw).map_err(|error| CheckError::Configuration {
            reason: format!("{}: {error}", path.display()),
        })
    }

    /// Resolve configuration from the standard sources.
    pub fn resolve(explicit: Option<&Path>) -> CheckResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load(Path::new(&path));
        }
        let default = Path::new(DEFAULT_CONFIG_FILE);
        if default.exists() {
            return Self::load(default);
        }
        Ok(Self::default())
    }

    /// Compile the suppression sections into a rule set.
    pub fn suppression_rules(&self) -> CheckResult<SuppressionRules> {
        SuppressionRules::new(
            &self.suppress.classes,
            &self.suppress.members,
            &self.suppress.annotations,
        )
    }

    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            hidden_changes: self.policy.hidden_changes,
        }
    }
}
