//! # Azure Module
//!
//! Collaborators around the classifier: ARM resource ID parsing, attribute
//! fetches through the `az` CLI, and the remediating update call.

pub mod cli;
pub mod resource_id;
pub mod types;

pub use cli::{AttributeSource, AzCli, ResourceUpdater};
pub use resource_id::{ResourceId, ResourceIdError, ResourceKind};
pub use types::RawResource;
