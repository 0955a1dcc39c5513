use crate::classifier::policy::{DEFAULT_ZONE_CAPABLE_REGIONS, DEFAULT_ZONE_CAPABLE_SKUS};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub policy: PolicyConfig,
    pub azure: AzureConfig,
    pub output: OutputConfig,
    pub remediation: RemediationConfig,
}

/// Eligibility policy data. Provider capability lists change over time, so
/// they live here rather than in code; a `[policy]` table in the config file
/// replaces the built-in lists wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub zone_capable_regions: Vec<String>,
    pub zone_capable_skus: Vec<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig {
            zone_capable_regions: DEFAULT_ZONE_CAPABLE_REGIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            zone_capable_skus: DEFAULT_ZONE_CAPABLE_SKUS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Azure CLI invocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureConfig {
    /// Binary used to reach the control plane
    pub command: String,
    /// Expected subscription; records outside it are reported as malformed
    /// input instead of being fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
}

impl Default for AzureConfig {
    fn default() -> Self {
        AzureConfig {
            command: "az".to_string(),
            subscription: None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: ReportFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: ReportFormat::Table,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Table,
    Json,
}

/// Remediation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemediationConfig {
    /// Instance-count floor applied when flipping the flag; capacity below
    /// the floor is raised to exactly the floor and never lowered
    pub min_capacity: u32,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        RemediationConfig { min_capacity: 2 }
    }
}
