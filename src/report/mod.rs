//! # Report Module
//!
//! Rendering of audit and remediation results: a prettytable view with a
//! colored summary block, or JSON for machine consumption.

mod json_view;
mod summary_view;
mod table_view;

pub use summary_view::render_summary;

use crate::audit::AuditReport;
use crate::config::types::{OutputConfig, ReportFormat};
use crate::error::Result;
use crate::remediate::RemediationReport;

/// Apply the configured color preference. `color = false` forces plain
/// output everywhere; `true` leaves terminal auto-detection in place.
pub fn apply_color_preference(output: &OutputConfig) {
    if !output.color {
        colored::control::set_override(false);
    }
}

/// Render an audit report in the requested format
pub fn render_audit(report: &AuditReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Table => {
            let mut output = table_view::render_records(report);
            output.push_str(&summary_view::render_summary(report));
            Ok(output)
        }
        ReportFormat::Json => json_view::render_audit_json(report),
    }
}

/// Render a remediation report in the requested format
pub fn render_remediation(report: &RemediationReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Table => Ok(summary_view::render_remediation_summary(report)),
        ReportFormat::Json => json_view::render_remediation_json(report),
    }
}
