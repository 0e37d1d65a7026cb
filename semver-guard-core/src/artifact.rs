//! Archive collaborator
//!
//! Opens one artifact (a jar or any zip container), routes class entries to
//! the decoder and fingerprints everything else as a resource, producing the
//! [`ApiModel`] the engine consumes. Directory entries carry no content and
//! module descriptors are neither consumable API nor path-addressed
//! resources, so both are skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::decode;
use crate::error::{CheckError, CheckResult};
use crate::model::{fingerprint_of, ApiModel};

/// Build the structural model of one artifact version.
pub fn load_artifact(path: &Path) -> CheckResult<ApiModel> {
    let display_path = path.display().to_string();
    let file = File::open(path).map_err(|source| CheckError::Io {
        path: display_path.clone(),
        source,
    })?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|error| archive_error(&display_path, error))?;

    let mut model = ApiModel::new();
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|error| archive_error(&display_path, error))?;
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut bytes).map_err(|source| CheckError::Io {
            path: format!("{display_path}!{name}"),
            source,
        })?;

        if is_class_entry(&name) {
            if is_module_descriptor(&name) {
                tracing::debug!(entry = %name, "skipping module descriptor");
                continue;
            }
            let (class_name, descriptor) = decode::decode_class(&name, &bytes)?;
            model.add_class(class_name, descriptor);
        } else {
            model.add_resource(name, fingerprint_of(&bytes));
        }
    }

    tracing::debug!(
        artifact = %display_path,
        classes = model.classes.len(),
        resources = model.resources.len(),
        "artifact model built"
    );
    Ok(model)
}

fn is_class_entry(name: &str) -> bool {
    name.ends_with(".class")
}

fn is_module_descriptor(name: &str) -> bool {
    name == "module-info.class" || name.ends_with("/module-info.class")
}

fn archive_error(path: &str, error: zip::result::ZipError) -> CheckError {
    match error {
        zip::result::ZipError::Io(source) => CheckError::Io {
            path: path.to_string(),
            source,
        },
        other => CheckError::Decode {
            path: path.to_string(),
            reason: other.to_string(),
        },
    }
}
