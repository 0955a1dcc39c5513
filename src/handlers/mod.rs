// Handler modules
pub mod audit;
pub mod policy;
pub mod remediate;

// Re-export all handler functions
pub use audit::handle_audit;
pub use policy::handle_policy;
pub use remediate::handle_remediate;

use crate::classifier::EligibilityPolicy;
use crate::config::types::Config;

/// Build the effective policy from configuration
pub fn effective_policy(config: &Config) -> EligibilityPolicy {
    EligibilityPolicy::new(
        &config.policy.zone_capable_regions,
        &config.policy.zone_capable_skus,
    )
}
