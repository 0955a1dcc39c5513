//! ARM resource ID parsing.
//!
//! IDs follow a fixed, provider-defined path shape:
//! `/subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.Web/{type}/{name}`.
//! A malformed ID is an input problem, reported per record and kept entirely
//! outside classification.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The two resource kinds the auditor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResourceKind {
    /// `Microsoft.Web/serverfarms`
    HostingPlan,
    /// `Microsoft.Web/hostingEnvironments`
    HostingEnvironment,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::HostingPlan => "Hosting plan",
            ResourceKind::HostingEnvironment => "Environment",
        }
    }
}

/// A parsed, fully-qualified resource identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceId {
    pub subscription: String,
    pub resource_group: String,
    pub name: String,
    pub kind: ResourceKind,
    raw: String,
}

impl ResourceId {
    /// Parse a fully-qualified ARM ID. Fixed path segments are matched
    /// case-insensitively; the subscription, group and name segments keep
    /// their original casing.
    pub fn parse(id: &str) -> Result<Self, ResourceIdError> {
        let trimmed = id.trim();
        let segments: Vec<&str> = trimmed.split('/').collect();

        // ["", "subscriptions", sub, "resourceGroups", rg,
        //  "providers", "Microsoft.Web", type, name]
        if segments.len() != 9 || !segments[0].is_empty() {
            return Err(ResourceIdError::InvalidFormat {
                id: trimmed.to_string(),
            });
        }

        let fixed_ok = segments[1].eq_ignore_ascii_case("subscriptions")
            && segments[3].eq_ignore_ascii_case("resourcegroups")
            && segments[5].eq_ignore_ascii_case("providers")
            && segments[6].eq_ignore_ascii_case("microsoft.web");
        if !fixed_ok {
            return Err(ResourceIdError::InvalidFormat {
                id: trimmed.to_string(),
            });
        }

        let kind = if segments[7].eq_ignore_ascii_case("serverfarms") {
            ResourceKind::HostingPlan
        } else if segments[7].eq_ignore_ascii_case("hostingenvironments") {
            ResourceKind::HostingEnvironment
        } else {
            return Err(ResourceIdError::UnsupportedResourceType {
                id: trimmed.to_string(),
                resource_type: segments[7].to_string(),
            });
        };

        if segments[2].is_empty() || segments[4].is_empty() || segments[8].is_empty() {
            return Err(ResourceIdError::InvalidFormat {
                id: trimmed.to_string(),
            });
        }

        Ok(ResourceId {
            subscription: segments[2].to_string(),
            resource_group: segments[4].to_string(),
            name: segments[8].to_string(),
            kind,
            raw: trimmed.to_string(),
        })
    }

    /// The identifier as given, for passing back to `az --ids`
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn in_subscription(&self, subscription: &str) -> bool {
        self.subscription.eq_ignore_ascii_case(subscription)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource_group, self.name)
    }
}

/// Signalled for unparsable identifiers, distinctly from classification and
/// from control-plane failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResourceIdError {
    #[error("'{id}' is not a fully-qualified Microsoft.Web resource ID")]
    InvalidFormat { id: String },

    #[error("'{id}' has unsupported resource type '{resource_type}'")]
    UnsupportedResourceType { id: String, resource_type: String },
}
