//! Aggregate summary blocks

use crate::audit::AuditReport;
use crate::classifier::{Eligibility, Status};
use crate::remediate::RemediationReport;
use colored::Colorize;

const STATUS_ORDER: &[Status] = &[
    Status::Enabled,
    Status::Disabled,
    Status::RegionNotSupported,
    Status::SkuNotSupported,
    Status::RequiresNewPlan,
    Status::AseNotZoneRedundant,
    Status::AseStatusUnknown,
    Status::MaxZonesUnknown,
    Status::MaxZonesZero,
    Status::RequiresNewEnvironment,
    Status::StatusUnknown,
];

/// Render the aggregate-count block for an audit run
pub fn render_summary(report: &AuditReport) -> String {
    let counts = &report.counts;
    let mut output = String::new();

    output.push_str(&format!(
        "\n{} {}\n",
        "▶".bright_blue(),
        "ZONE REDUNDANCY AUDIT SUMMARY".bright_white().bold()
    ));
    output.push_str(&format!("{}\n", "─".repeat(50).dimmed()));

    output.push_str(&format!(
        "{} Resources classified: {}\n",
        "│".dimmed(),
        counts.classified.to_string().yellow()
    ));

    for status in STATUS_ORDER {
        if let Some(n) = counts.by_status.get(status) {
            output.push_str(&format!(
                "{}   {:<26} {}\n",
                "│".dimmed(),
                status.label(),
                n
            ));
        }
    }

    let actionable = counts.actionable();
    output.push_str(&format!(
        "{} Eligible for conversion: {}\n",
        "│".dimmed(),
        actionable.to_string().cyan().bold()
    ));
    if let Some(n) = counts.by_eligibility.get(&Eligibility::RequiresUpgrade) {
        output.push_str(&format!(
            "{}   of which need a capacity raise: {}\n",
            "│".dimmed(),
            n
        ));
    }

    if counts.invalid_input > 0 || counts.wrong_subscription > 0 {
        output.push_str(&format!(
            "{} Malformed input lines: {}\n",
            "│".dimmed(),
            (counts.invalid_input + counts.wrong_subscription)
                .to_string()
                .red()
        ));
    }
    if counts.fetch_failures > 0 {
        output.push_str(&format!(
            "{} Fetch failures: {}\n",
            "│".dimmed(),
            counts.fetch_failures.to_string().red()
        ));
    }

    output.push_str(&format!(
        "{} Audited at: {}\n",
        "│".dimmed(),
        report.audited_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("{}\n", "─".repeat(50).dimmed()));
    output
}

/// Render the outcome block for a remediation run
pub fn render_remediation_summary(report: &RemediationReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n{} {}\n",
        "▶".bright_blue(),
        "REMEDIATION SUMMARY".bright_white().bold()
    ));
    output.push_str(&format!("{}\n", "─".repeat(50).dimmed()));

    output.push_str(&format!(
        "{} Updated: {}\n",
        "│".dimmed(),
        report.updated.len().to_string().green().bold()
    ));
    for update in &report.updated {
        match update.target_capacity {
            Some(capacity) => output.push_str(&format!(
                "{}   {} (capacity → {})\n",
                "│".dimmed(),
                update.id,
                capacity
            )),
            None => output.push_str(&format!("{}   {}\n", "│".dimmed(), update.id)),
        }
    }

    if !report.failed.is_empty() {
        output.push_str(&format!(
            "{} Failed: {}\n",
            "│".dimmed(),
            report.failed.len().to_string().red().bold()
        ));
        for failure in &report.failed {
            output.push_str(&format!(
                "{}   {}: {}\n",
                "│".dimmed(),
                failure.update.id,
                failure.reason
            ));
        }
    }

    if !report.skipped.is_empty() {
        output.push_str(&format!(
            "{} Skipped: {}\n",
            "│".dimmed(),
            report.skipped.len()
        ));
        for skip in &report.skipped {
            output.push_str(&format!(
                "{}   {} ({})\n",
                "│".dimmed(),
                skip.id,
                skip.reason
            ));
        }
    }

    output.push_str(&format!("{}\n", "─".repeat(50).dimmed()));
    output
}
