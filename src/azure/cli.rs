//! Control-plane access through the Azure CLI.
//!
//! The auditor never speaks HTTP itself; every read and write goes through
//! `az`, which owns authentication and API versioning. Failures here
//! (missing binary, non-zero exit, unparsable output) are collaborator
//! errors reported per record, never folded into the classifier's "unknown"
//! branches.

use crate::azure::resource_id::ResourceId;
use crate::azure::types::RawResource;
use crate::classifier::ResourceAttributes;
use crate::error::AzureError;
use std::process::Stdio;
use tokio::process::Command;

/// Seam between the audit pipeline and the control plane. Tests substitute
/// an in-memory implementation.
pub trait AttributeSource {
    fn fetch(
        &self,
        id: &ResourceId,
    ) -> impl Future<Output = Result<ResourceAttributes, AzureError>>;
}

/// Seam for the remediating update call
pub trait ResourceUpdater {
    /// Flip the zone-redundancy flag, optionally setting a new instance
    /// count in the same call.
    fn enable_zone_redundancy(
        &self,
        id: &ResourceId,
        capacity: Option<u32>,
    ) -> impl Future<Output = Result<(), AzureError>>;
}

/// Production implementation shelling out to the `az` binary
#[derive(Debug, Clone)]
pub struct AzCli {
    command: String,
}

impl AzCli {
    pub fn new(command: impl Into<String>) -> Self {
        AzCli {
            command: command.into(),
        }
    }

    /// Probe for the binary before starting a batch, so a missing install
    /// surfaces once instead of per record.
    pub async fn check_available(&self) -> Result<(), AzureError> {
        let output = Command::new(&self.command)
            .arg("version")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match output {
            Ok(out) if out.status.success() => Ok(()),
            _ => Err(AzureError::CliUnavailable {
                command: self.command.clone(),
            }),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<std::process::Output, AzureError> {
        Command::new(&self.command)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| AzureError::SpawnFailed {
                command: self.command.clone(),
                reason: e.to_string(),
            })
    }
}

impl AttributeSource for AzCli {
    async fn fetch(&self, id: &ResourceId) -> Result<ResourceAttributes, AzureError> {
        log::debug!("fetching {}", id.raw());
        let output = self
            .run(&["resource", "show", "--ids", id.raw(), "--output", "json"])
            .await?;

        if !output.status.success() {
            return Err(AzureError::FetchFailed {
                id: id.raw().to_string(),
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let raw: RawResource = serde_json::from_slice(&output.stdout).map_err(|e| {
            AzureError::MalformedResponse {
                id: id.raw().to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(raw.into_attributes())
    }
}

impl ResourceUpdater for AzCli {
    async fn enable_zone_redundancy(
        &self,
        id: &ResourceId,
        capacity: Option<u32>,
    ) -> Result<(), AzureError> {
        let mut args: Vec<String> = vec![
            "resource".into(),
            "update".into(),
            "--ids".into(),
            id.raw().into(),
            "--set".into(),
            "properties.zoneRedundant=true".into(),
        ];
        if let Some(capacity) = capacity {
            args.push("--set".into());
            args.push(format!("sku.capacity={}", capacity));
        }
        args.push("--output".into());
        args.push("none".into());

        log::info!("updating {} (capacity: {:?})", id.raw(), capacity);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let output = self.run(&arg_refs).await?;

        if !output.status.success() {
            return Err(AzureError::UpdateFailed {
                id: id.raw().to_string(),
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}
