//! Error types for the zone-redundancy audit CLI.

use thiserror::Error;

/// Top-level error type for all CLI operations
#[derive(Debug, Error)]
pub enum ZoneAuditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Azure CLI error: {0}")]
    Azure(#[from] AzureError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors loading or parsing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    ParsingFailed(String),

    #[error("failed to read configuration file '{path}': {reason}")]
    ReadFailed { path: String, reason: String },
}

/// Errors reading the resource ID input file
#[derive(Debug, Error)]
pub enum InputError {
    #[error("resource list '{path}' could not be read: {reason}")]
    UnreadableList { path: String, reason: String },

    #[error("resource list '{path}' contains no resource IDs")]
    EmptyList { path: String },
}

/// Failures talking to the Azure control plane through the `az` CLI.
///
/// These are collaborator failures, reported per record. They are distinct
/// from fields that come back absent in an otherwise successful response;
/// absent fields classify as "unknown", they are not errors.
#[derive(Debug, Error)]
pub enum AzureError {
    #[error("'{command}' is not available on PATH; install the Azure CLI and run 'az login'")]
    CliUnavailable { command: String },

    #[error("failed to launch '{command}': {reason}")]
    SpawnFailed { command: String, reason: String },

    #[error("az exited with {status} while fetching '{id}': {stderr}")]
    FetchFailed {
        id: String,
        status: i32,
        stderr: String,
    },

    #[error("az exited with {status} while updating '{id}': {stderr}")]
    UpdateFailed {
        id: String,
        status: i32,
        stderr: String,
    },

    #[error("az returned unparsable JSON for '{id}': {reason}")]
    MalformedResponse { id: String, reason: String },
}

/// Convenience result type used throughout the crate
pub type Result<T> = std::result::Result<T, ZoneAuditError>;
