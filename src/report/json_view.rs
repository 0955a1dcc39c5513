//! JSON output for machine consumption

use crate::audit::AuditReport;
use crate::error::Result;
use crate::remediate::RemediationReport;

pub fn render_audit_json(report: &AuditReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_remediation_json(report: &RemediationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
