use crate::audit::{self, AuditOptions};
use crate::azure::AzCli;
use crate::cli::OutputFormat;
use crate::config::types::{Config, ReportFormat};
use crate::remediate::{execute_remediation, plan_remediation};
use crate::report;
use colored::Colorize;
use std::path::PathBuf;

pub async fn handle_remediate(
    config: &Config,
    id_file: PathBuf,
    dry_run: bool,
    yes: bool,
    min_capacity: Option<u32>,
    subscription: Option<String>,
    format: Option<OutputFormat>,
) -> crate::Result<()> {
    let entries = audit::read_resource_list(&id_file)?;
    let policy = super::effective_policy(config);
    let az = AzCli::new(&config.azure.command);
    az.check_available().await?;

    // Progress goes to stderr so report output stays pipeable.
    eprintln!(
        "🔍 Auditing {} resources before remediation",
        entries.len()
    );
    let options = AuditOptions {
        expected_subscription: subscription.or_else(|| config.azure.subscription.clone()),
    };
    let audit_report = audit::run_audit(&az, &policy, &entries, &options).await;

    let floor = min_capacity.unwrap_or(config.remediation.min_capacity);
    let (planned, skipped) = plan_remediation(&audit_report, floor);

    if planned.is_empty() {
        println!("Nothing to remediate: no eligible resources found.");
        for skip in &skipped {
            println!("  {} {} ({})", "skipped".dimmed(), skip.id, skip.reason);
        }
        return Ok(());
    }

    println!(
        "\n{} {} update(s) planned:",
        "▶".bright_blue(),
        planned.len()
    );
    for update in &planned {
        match update.target_capacity {
            Some(capacity) => println!(
                "  {} (enable zone redundancy, capacity → {})",
                update.id, capacity
            ),
            None => println!("  {} (enable zone redundancy)", update.id),
        }
    }

    if dry_run {
        println!("\n{} dry run; no updates issued", "✓".green());
        return Ok(());
    }

    if !yes {
        let confirmed = inquire::Confirm::new("Apply these updates?")
            .with_default(false)
            .prompt()
            .unwrap_or(false);
        if !confirmed {
            println!("Aborted; no updates issued.");
            return Ok(());
        }
    }

    let remediation_report = execute_remediation(&az, planned, skipped).await;

    let report_format: ReportFormat = format.map(Into::into).unwrap_or(config.output.format);
    let rendered = report::render_remediation(&remediation_report, report_format)?;
    println!("{}", rendered);

    if !remediation_report.failed.is_empty() {
        log::error!(
            "{} update(s) failed; re-run audit to see current state",
            remediation_report.failed.len()
        );
        std::process::exit(1);
    }

    Ok(())
}
