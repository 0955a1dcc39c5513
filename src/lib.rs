//! # Zoneaudit CLI
//!
//! A Rust-based command-line application that audits Azure App Service
//! hosting plans and App Service Environments for zone-redundancy
//! eligibility and optionally remediates eligible resources.
//!
//! ## Features
//!
//! - **Eligibility Classification**: Pure decision engine mapping observed
//!   resource attributes to a status and an eligibility verdict
//! - **Injectable Policy**: Region and SKU capability lists live in
//!   configuration, not code
//! - **Fail-forward Batching**: One malformed or unfetchable record never
//!   blocks the rest of the list
//! - **Remediation**: Flips the zone-redundancy flag through the Azure CLI,
//!   raising capacity to the configured floor and never lowering it
//!
//! ## Example
//!
//! ```rust
//! use zoneaudit_cli::classifier::{
//!     classify_plan, EligibilityPolicy, ResourceAttributes, TriState,
//! };
//!
//! let policy = EligibilityPolicy::default();
//! let attrs = ResourceAttributes {
//!     location: "eastus".into(),
//!     sku_name: Some("P1v3".into()),
//!     sku_capacity: Some(3),
//!     zone_redundant: TriState::False,
//!     maximum_zones: Some(3),
//!     current_zones_utilized: None,
//!     environment: None,
//! };
//! let result = classify_plan(&policy, &attrs);
//! println!("{} / {}", result.status.label(), result.eligibility.label());
//! ```

pub mod audit;
pub mod azure;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod remediate;
pub mod report;

// Re-export commonly used types and functions
pub use classifier::{
    ClassificationResult, Eligibility, EligibilityPolicy, ResourceAttributes, Status, TriState,
    classify_environment, classify_plan,
};
pub use error::{Result, ZoneAuditError};
pub use handlers::{handle_audit, handle_policy, handle_remediate};

use cli::Commands;
use config::types::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn run_command(command: Commands, config: &Config) -> Result<()> {
    report::apply_color_preference(&config.output);

    match command {
        Commands::Audit {
            id_file,
            format,
            json,
            output,
            subscription,
        } => handlers::handle_audit(config, id_file, format, json, output, subscription).await,
        Commands::Remediate {
            id_file,
            dry_run,
            yes,
            min_capacity,
            subscription,
            format,
        } => {
            handlers::handle_remediate(
                config,
                id_file,
                dry_run,
                yes,
                min_capacity,
                subscription,
                format,
            )
            .await
        }
        Commands::Policy { json, save } => handlers::handle_policy(config, json, save),
    }
}
