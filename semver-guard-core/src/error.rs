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
//! Error taxonomy for compatibility checks
//!
//! Every variant is fatal for the check that raised it: an unreadable artifact
//! or a malformed class file invalidates the whole artifact pair, and a broken
//! suppression pattern invalidates the run before any artifact is opened. The
//! diff and classification stages themselves operate on already-validated
//! models and cannot fail.

use std::io;
use thiserror::Error;

/// Type alias for Result with `CheckError`
pub type CheckResult<T> = Result<T, CheckError>;

/// Fatal errors raised while preparing a compatibility check
#[derive(Error, Debug)]
pub enum CheckError {
    /// Artifact or configuration file could not be read from disk.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A class entry (or the archive container itself) did not decode.
    /// No partial model is produced for the artifact pair.
    #[error("malformed class data in {path}: {reason}")]
    Decode { path: String, reason: String },

    /// Configuration is unusable, e.g. a suppression pattern failed to
    /// compile. Raised at startup, never silently ignored.
    #[error("configuration error: {reason}")]
    Configuration { reason: String },
}
