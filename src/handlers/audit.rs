use crate::audit::{self, AuditOptions};
use crate::azure::AzCli;
use crate::cli::OutputFormat;
use crate::config::types::{Config, ReportFormat};
use crate::report;
use std::path::PathBuf;

pub async fn handle_audit(
    config: &Config,
    id_file: PathBuf,
    format: Option<OutputFormat>,
    json: bool,
    output: Option<PathBuf>,
    subscription: Option<String>,
) -> crate::Result<()> {
    let entries = audit::read_resource_list(&id_file)?;
    // Progress goes to stderr so `--json` output stays pipeable.
    eprintln!(
        "🔍 Auditing {} resources from {}",
        entries.len(),
        id_file.display()
    );

    let policy = super::effective_policy(config);
    let az = AzCli::new(&config.azure.command);
    az.check_available().await?;

    let options = AuditOptions {
        expected_subscription: subscription.or_else(|| config.azure.subscription.clone()),
    };
    let audit_report = audit::run_audit(&az, &policy, &entries, &options).await;

    let report_format = if json {
        ReportFormat::Json
    } else {
        format.map(Into::into).unwrap_or(config.output.format)
    };
    let rendered = report::render_audit(&audit_report, report_format)?;

    if let Some(output_path) = output {
        std::fs::write(&output_path, &rendered)?;
        eprintln!("Report saved to: {}", output_path.display());
    } else {
        println!("{}", rendered);
    }

    Ok(())
}
