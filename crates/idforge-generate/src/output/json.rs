use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::ExportError;
use crate::output::normalize_filename;

pub const DEFAULT_JSON_FILENAME: &str = "export.json";

/// Serialize data as 2-space-indented JSON text. Empty arrays are legal.
pub fn json_string<T: Serialize + ?Sized>(data: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Write data as a JSON file under `out_dir` and return the written path.
pub fn export_json<T: Serialize + ?Sized>(
    out_dir: &Path,
    data: &T,
    filename: Option<&str>,
) -> Result<PathBuf, ExportError> {
    let content = json_string(data)?;
    let filename = normalize_filename(filename.unwrap_or(DEFAULT_JSON_FILENAME), "json");
    let path = out_dir.join(filename);
    std::fs::write(&path, content)?;
    Ok(path)
}
