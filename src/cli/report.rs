//! Rendering resolved pairs for output

use std::fs;
use std::path::Path;

use clap::ValueEnum;

use crate::error::{OutpathError, OutpathResult};
use crate::paths::InputOutputPair;

/// Report formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One `input -> output` line per pair
    #[default]
    #[value(name = "text")]
    Text,
    /// JSON array of `{"inputPath", "outputPath"}` objects
    #[value(name = "json")]
    Json,
}

/// Render the pairs in the requested format. Text output ends with a newline
/// unless there are no pairs.
pub fn render_report(pairs: &[InputOutputPair], format: ReportFormat) -> OutpathResult<String> {
    match format {
        ReportFormat::Text => Ok(pairs
            .iter()
            .map(|pair| format!("{} -> {}\n", pair.input_path, pair.output_path))
            .collect()),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(pairs)
                .map_err(|e| OutpathError::serialization(e.to_string()))?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write a rendered report to `path`, creating missing parent directories.
pub fn write_report_file(path: &Path, report: &str) -> OutpathResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| OutpathError::io(e.to_string(), Some(parent.to_path_buf())))?;
    }
    fs::write(path, report).map_err(|e| OutpathError::io(e.to_string(), Some(path.to_path_buf())))
}
