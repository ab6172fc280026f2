use crate::file_creation::file_creation_error::FileCreationError;
use crate::file_creation::json_format::JsonFormat;
use crate::log_processing::parse_report::ParseReport;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes the parsed matches into a pretty-printed JSON string.
///
/// # Arguments
///
/// * `reports` - One report per parsed source.
///
/// # Returns
///
/// A `Result` containing the JSON string if successful, or a `FileCreationError` if serialization fails.
pub fn generate_json(reports: &[ParseReport]) -> Result<String, FileCreationError> {
    Ok(serde_json::to_string_pretty(&JsonFormat::from_reports(reports))?)
}

/// Writes the JSON summary, followed by a newline, to any writer.
pub fn write_json<W: Write>(writer: W, reports: &[ParseReport]) -> Result<(), FileCreationError> {
    let json_output = generate_json(reports)?;

    let mut writer = BufWriter::new(writer);
    writer.write_all(json_output.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

/// Creates a JSON file from the parsed matches and writes it to the specified filename.
///
/// # Arguments
///
/// * `filename` - The path to the file where the JSON will be written.
/// * `reports` - One report per parsed source.
///
/// # Returns
///
/// A `Result` indicating success or failure. Errors are represented by `FileCreationError`.
pub fn create_json_file(filename: &Path, reports: &[ParseReport]) -> Result<(), FileCreationError> {
    let file = File::create(filename).map_err(|source| FileCreationError::FileCreation {
        path: filename.to_path_buf(),
        source,
    })?;

    write_json(file, reports)
}
