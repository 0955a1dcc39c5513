use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::types::ReportFormat;

#[derive(Parser)]
#[command(name = "zone-ctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Audit Azure App Service resources for zone redundancy")]
#[command(long_about = "Audits hosting plans and App Service Environments for zone-redundancy \
eligibility against the configured region and SKU capability lists, and optionally remediates \
eligible resources by enabling the flag through the Azure CLI.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify every resource in an ID file and report eligibility
    Audit {
        /// File with one fully-qualified resource ID per line
        #[arg(value_name = "ID_FILE")]
        id_file: PathBuf,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Shorthand for --format json
        #[arg(short, long, conflicts_with = "format")]
        json: bool,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Expected subscription; IDs outside it are reported as malformed
        #[arg(long, value_name = "SUBSCRIPTION_ID")]
        subscription: Option<String>,
    },

    /// Enable zone redundancy on every eligible resource in an ID file
    Remediate {
        /// File with one fully-qualified resource ID per line
        #[arg(value_name = "ID_FILE")]
        id_file: PathBuf,

        /// Show planned updates without calling the control plane
        #[arg(long)]
        dry_run: bool,

        /// Skip the interactive confirmation
        #[arg(short, long)]
        yes: bool,

        /// Instance-count floor applied on conversion (never lowers capacity)
        #[arg(long, value_name = "COUNT")]
        min_capacity: Option<u32>,

        /// Expected subscription; IDs outside it are reported as malformed
        #[arg(long, value_name = "SUBSCRIPTION_ID")]
        subscription: Option<String>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show the effective eligibility policy
    Policy {
        /// Output the policy as JSON
        #[arg(short, long)]
        json: bool,

        /// Write the effective configuration to the global config file
        #[arg(long)]
        save: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => ReportFormat::Table,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

impl Cli {
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
