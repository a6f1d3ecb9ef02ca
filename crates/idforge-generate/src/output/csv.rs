use std::path::{Path, PathBuf};

use idforge_core::Tabular;

use crate::errors::ExportError;
use crate::output::normalize_filename;

pub const DEFAULT_CSV_FILENAME: &str = "export.csv";

/// Options for a CSV export.
#[derive(Debug, Clone, Default)]
pub struct CsvOptions {
    /// Output filename; defaults to `export.csv`.
    pub filename: Option<String>,
    /// Header row; defaults to the first record's field names.
    pub headers: Option<Vec<String>>,
}

/// Serialize records to CSV text.
///
/// Cells are quoted only when they contain a comma or a double quote
/// (internal quotes doubled); rows are newline-joined with no trailing
/// terminator. Empty input is an error: a CSV file without a header row is
/// meaningless.
pub fn csv_string<T: Tabular>(
    records: &[T],
    headers: Option<&[String]>,
) -> Result<String, ExportError> {
    let first = records.first().ok_or(ExportError::EmptyData)?;

    let headers: Vec<String> = match headers {
        Some(headers) => headers.to_vec(),
        None => first
            .field_names()
            .iter()
            .map(|name| name.to_string())
            .collect(),
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(&headers)?;
    for record in records {
        let row: Vec<String> = headers
            .iter()
            .map(|header| record.field(header).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    let mut content = String::from_utf8_lossy(&bytes).into_owned();
    if content.ends_with('\n') {
        content.pop();
    }
    Ok(content)
}

/// Write records as a CSV file under `out_dir` and return the written path.
///
/// The write is fire-and-forget: no confirmation beyond the `Ok` path.
pub fn export_csv<T: Tabular>(
    out_dir: &Path,
    records: &[T],
    options: &CsvOptions,
) -> Result<PathBuf, ExportError> {
    let content = csv_string(records, options.headers.as_deref())?;
    let filename = normalize_filename(
        options.filename.as_deref().unwrap_or(DEFAULT_CSV_FILENAME),
        "csv",
    );
    let path = out_dir.join(filename);
    std::fs::write(&path, content)?;
    Ok(path)
}
