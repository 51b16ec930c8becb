//! JSON export of plan reports

use std::path::Path;

use crate::compliance::report::PlanReport;
use crate::io::error::{PlannerError, Result, file_system_error};

/// Serialise a report as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialisation fails
pub fn report_to_json(report: &PlanReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| PlannerError::ReportExport {
        path: "<memory>".into(),
        source: e,
    })
}

/// Write a report to `output_path` as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory or the file cannot be created
/// - Serialisation or writing fails
pub fn export_report(report: &PlanReport, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    let json = report_to_json(report)?;
    std::fs::write(output_path, format!("{json}\n"))
        .map_err(|e| file_system_error(output_path, "write report", e))?;

    tracing::debug!(path = %output_path.display(), "saved report");
    Ok(())
}
