//! Per-resource table output

use crate::audit::{AuditReport, RecordOutcome};
use crate::classifier::{Eligibility, Status};
use colored::Colorize;
use prettytable::{Table, format, row};

pub fn render_records(report: &AuditReport) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row![
        b => "Resource", "Kind", "Region", "SKU", "Capacity", "Zones", "Status", "Eligibility"
    ]);

    for outcome in &report.records {
        match outcome {
            RecordOutcome::Classified(record) => {
                let attrs = &record.attributes;
                table.add_row(row![
                    record.id.to_string(),
                    record.id.kind.label(),
                    attrs.location,
                    attrs.sku_name.as_deref().unwrap_or("-"),
                    attrs
                        .sku_capacity
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "-".into()),
                    format_zones(attrs.maximum_zones, attrs.current_zones_utilized),
                    colorize_status(record.result.status),
                    colorize_eligibility(record.result.eligibility),
                ]);
            }
            RecordOutcome::InvalidId { input, reason } => {
                table.add_row(row![
                    truncate(input, 40),
                    "-",
                    "-",
                    "-",
                    "-",
                    "-",
                    "Invalid ID".red().bold().to_string(),
                    reason,
                ]);
            }
            RecordOutcome::WrongSubscription {
                input,
                subscription,
            } => {
                table.add_row(row![
                    truncate(input, 40),
                    "-",
                    "-",
                    "-",
                    "-",
                    "-",
                    "Wrong subscription".red().bold().to_string(),
                    format!("subscription {}", subscription),
                ]);
            }
            RecordOutcome::FetchFailed { input, reason } => {
                table.add_row(row![
                    truncate(input, 40),
                    "-",
                    "-",
                    "-",
                    "-",
                    "-",
                    "Fetch failed".red().bold().to_string(),
                    truncate(reason, 60),
                ]);
            }
        }
    }

    format!("{}\n", table)
}

fn format_zones(maximum: Option<u32>, current: Option<u32>) -> String {
    match (current, maximum) {
        (Some(c), Some(m)) => format!("{}/{}", c, m),
        (None, Some(m)) => format!("-/{}", m),
        _ => "-".into(),
    }
}

fn colorize_status(status: Status) -> String {
    let label = status.label();
    match status {
        Status::Enabled => label.green().bold().to_string(),
        Status::Disabled => label.yellow().to_string(),
        Status::StatusUnknown | Status::AseStatusUnknown | Status::MaxZonesUnknown => {
            label.dimmed().to_string()
        }
        _ => label.red().to_string(),
    }
}

fn colorize_eligibility(eligibility: Eligibility) -> String {
    let label = eligibility.label();
    match eligibility {
        Eligibility::AlreadyEnabled => label.green().to_string(),
        Eligibility::Eligible | Eligibility::RequiresUpgrade => label.cyan().bold().to_string(),
        Eligibility::Ineligible => label.red().to_string(),
        Eligibility::Unknown => label.dimmed().to_string(),
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
