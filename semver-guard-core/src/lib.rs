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
//! `SemverGuard` core library
//!
//! Inspects two versions of a compiled JVM artifact and determines the
//! minimum semantic-version bump (PATCH, MINOR, MAJOR) that honestly
//! describes the difference in their public API surface. Exposes the engine
//! for use by the CLI and build tooling.

pub mod artifact;
pub mod classify;
pub mod config;
pub mod decode;
pub mod diff;
pub mod engine;
pub mod error;
pub mod model;
pub mod suppress;

pub use classify::{classify, SemVerType};
pub use config::Configuration;
pub use diff::{diff, Change, ChangeKind, DiffOptions, HiddenChangePolicy, Location};
pub use engine::{CheckReport, SemVerChecker};
pub use error::{CheckError, CheckResult};
pub use model::{
    ApiModel, ClassDescriptor, ClassKind, Fingerprint, MemberDescriptor, Visibility,
};
pub use suppress::{suppress, SuppressionRules};
