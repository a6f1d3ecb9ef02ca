pub mod csv;
pub mod json;

pub use csv::{CsvOptions, DEFAULT_CSV_FILENAME, csv_string, export_csv};
pub use json::{DEFAULT_JSON_FILENAME, export_json, json_string};

/// Prefix applied when a filename is missing its extension.
const FILE_TAG: &str = "idforge";

/// Enforce the expected extension, tag-prefixing names that lack it.
pub(crate) fn normalize_filename(name: &str, extension: &str) -> String {
    let suffix = format!(".{extension}");
    if name.ends_with(&suffix) {
        name.to_string()
    } else {
        format!("{FILE_TAG}_{name}{suffix}")
    }
}
