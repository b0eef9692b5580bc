//! Dataset persistence: whole-document JSON writes with atomic replace.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::error::DatasetError;

/// Atomically replace the dataset file with `value`.
///
/// Only JSON objects are accepted; anything else is rejected before the
/// filesystem is touched. The document is pretty-printed with keys in the
/// order received so the on-disk file stays human-diffable. The write goes
/// through a temp file plus rename, so a crash mid-write cannot corrupt the
/// previous dataset and a concurrent reader sees either the old or the new
/// complete file.
pub fn save_dataset(path: &Path, value: &Value) -> Result<(), DatasetError> {
    if !value.is_object() {
        return Err(DatasetError::InvalidPayload);
    }
    let mut buf = serde_json::to_string_pretty(value)
        .context("serialize dataset")
        .map_err(DatasetError::Storage)?;
    buf.push('\n');
    write_atomic(path, &buf).map_err(DatasetError::Storage)?;
    debug!(path = %path.display(), bytes = buf.len(), "dataset saved");
    Ok(())
}

/// Read and parse the dataset file.
pub fn load_dataset(path: &Path) -> Result<Value> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read dataset {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse dataset {}", path.display()))
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("dataset path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp dataset {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace dataset {}", path.display()))?;
    Ok(())
}
