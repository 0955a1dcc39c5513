//! # Classifier Module
//!
//! The eligibility decision engine. Given the observed attributes of a
//! hosting plan or App Service Environment, `classify_plan` and
//! `classify_environment` derive a status and an eligibility verdict against
//! the configured [`EligibilityPolicy`].
//!
//! Both functions are pure and total: every input combination yields exactly
//! one result, absent fields take the "unknown" branch of the relevant
//! tri-state, and nothing here performs I/O or signals errors. Rule order
//! matters — later rules assume the earlier ones did not match.

pub mod policy;

pub use policy::{EligibilityPolicy, normalize};

use serde::{Deserialize, Serialize};

/// Three-valued boolean. Control-plane responses routinely omit the
/// zone-redundancy flag on older resources; an absent value is a first-class
/// "unknown" outcome, not an error and not `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriState {
    True,
    False,
    Unknown,
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => TriState::True,
            Some(false) => TriState::False,
            None => TriState::Unknown,
        }
    }
}

/// Reference to the App Service Environment containing an isolated-tier plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentRef {
    /// Resource ID of the environment, when the control plane reported one
    pub id: Option<String>,
    pub zone_redundant: TriState,
}

/// Observed attributes of one resource, as returned by the control plane.
///
/// One record per query; classification never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAttributes {
    pub location: String,
    /// Pricing tier name; hosting plans only
    pub sku_name: Option<String>,
    /// Instance count; hosting plans only
    pub sku_capacity: Option<u32>,
    pub zone_redundant: TriState,
    /// Number of zones the resource can span; absent or 0 means the
    /// control plane reports no zone support
    pub maximum_zones: Option<u32>,
    /// Informational only; never consulted by the decision rules
    pub current_zones_utilized: Option<u32>,
    /// Containing environment, for plans on isolated tiers
    pub environment: Option<EnvironmentRef>,
}

impl ResourceAttributes {
    fn environment_zone_redundant(&self) -> TriState {
        self.environment
            .as_ref()
            .map(|e| e.zone_redundant)
            .unwrap_or(TriState::Unknown)
    }
}

/// Classification status, covering both resource kinds.
///
/// Plan classification produces the first eight variants; environment
/// classification produces the region/zone/enable variants plus the
/// environment-specific ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    RegionNotSupported,
    SkuNotSupported,
    RequiresNewPlan,
    AseNotZoneRedundant,
    AseStatusUnknown,
    MaxZonesUnknown,
    MaxZonesZero,
    RequiresNewEnvironment,
    Enabled,
    Disabled,
    StatusUnknown,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::RegionNotSupported => "Region not supported",
            Status::SkuNotSupported => "SKU not supported",
            Status::RequiresNewPlan => "Requires new plan",
            Status::AseNotZoneRedundant => "ASE not zone redundant",
            Status::AseStatusUnknown => "ASE status unknown",
            Status::MaxZonesUnknown => "Maximum zones unknown",
            Status::MaxZonesZero => "Zones not available",
            Status::RequiresNewEnvironment => "Requires new environment",
            Status::Enabled => "Enabled",
            Status::Disabled => "Disabled",
            Status::StatusUnknown => "Status unknown",
        }
    }
}

/// Eligibility verdict accompanying every status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Eligibility {
    AlreadyEnabled,
    Eligible,
    /// Eligible, but the instance count is below the conversion floor and
    /// must be raised when the flag is flipped
    RequiresUpgrade,
    Ineligible,
    Unknown,
}

impl Eligibility {
    pub fn label(&self) -> &'static str {
        match self {
            Eligibility::AlreadyEnabled => "Already enabled",
            Eligibility::Eligible => "Eligible",
            Eligibility::RequiresUpgrade => "Eligible (capacity raise)",
            Eligibility::Ineligible => "Ineligible",
            Eligibility::Unknown => "Unknown",
        }
    }

    /// Whether remediation may act on a record with this verdict
    pub fn is_actionable(&self) -> bool {
        matches!(self, Eligibility::Eligible | Eligibility::RequiresUpgrade)
    }
}

/// Result of classifying one resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub status: Status,
    pub eligibility: Eligibility,
}

impl ClassificationResult {
    fn new(status: Status, eligibility: Eligibility) -> Self {
        ClassificationResult { status, eligibility }
    }
}

/// Minimum instance count a zone-redundant deployment requires. Plans below
/// this are still convertible, but conversion implies raising capacity.
pub const ZONE_REDUNDANT_MIN_CAPACITY: u32 = 2;

/// Classify a hosting plan.
///
/// First matching rule wins; the precedence is load-bearing because later
/// rules assume the earlier ones failed (e.g. by the time zone counts are
/// inspected, the region and SKU are known to be supported).
pub fn classify_plan(
    policy: &EligibilityPolicy,
    attrs: &ResourceAttributes,
) -> ClassificationResult {
    if !policy.region_supported(&attrs.location) {
        return ClassificationResult::new(Status::RegionNotSupported, Eligibility::Ineligible);
    }

    let sku = attrs.sku_name.as_deref().unwrap_or("");
    if !policy.sku_supported(sku) {
        return ClassificationResult::new(Status::SkuNotSupported, Eligibility::Ineligible);
    }

    // A single-zone footprint cannot be converted in place; only a
    // redeployment into a multi-zone scale unit helps.
    if attrs.maximum_zones == Some(1) {
        return ClassificationResult::new(Status::RequiresNewPlan, Eligibility::Ineligible);
    }

    let isolated = policy.is_isolated_v2(sku);
    let env_zr = attrs.environment_zone_redundant();

    // Isolated-v2 plans inherit the zonal footprint of their environment.
    if isolated && env_zr == TriState::False {
        return ClassificationResult::new(Status::AseNotZoneRedundant, Eligibility::Ineligible);
    }
    if isolated && env_zr == TriState::Unknown {
        return ClassificationResult::new(Status::AseStatusUnknown, Eligibility::Unknown);
    }

    match attrs.zone_redundant {
        TriState::True => ClassificationResult::new(Status::Enabled, Eligibility::AlreadyEnabled),
        TriState::False => {
            // Region and SKU support are guaranteed by rules 1-2; the
            // isolated-v2 environment is known zone-redundant by rules 4-5.
            let zones_ok = attrs.maximum_zones.is_some_and(|z| z > 1);
            let eligibility = if zones_ok {
                match attrs.sku_capacity {
                    Some(c) if c < ZONE_REDUNDANT_MIN_CAPACITY => Eligibility::RequiresUpgrade,
                    _ => Eligibility::Eligible,
                }
            } else {
                Eligibility::Ineligible
            };
            ClassificationResult::new(Status::Disabled, eligibility)
        }
        TriState::Unknown => {
            ClassificationResult::new(Status::StatusUnknown, Eligibility::Unknown)
        }
    }
}

/// Classify a standalone App Service Environment. No SKU dimension here;
/// the zone count and the flag itself decide.
pub fn classify_environment(
    policy: &EligibilityPolicy,
    attrs: &ResourceAttributes,
) -> ClassificationResult {
    if !policy.region_supported(&attrs.location) {
        return ClassificationResult::new(Status::RegionNotSupported, Eligibility::Ineligible);
    }

    let zones = match attrs.maximum_zones {
        None => {
            return ClassificationResult::new(Status::MaxZonesUnknown, Eligibility::Unknown);
        }
        Some(z) => z,
    };
    if zones == 0 {
        return ClassificationResult::new(Status::MaxZonesZero, Eligibility::Ineligible);
    }
    if zones == 1 {
        return ClassificationResult::new(Status::RequiresNewEnvironment, Eligibility::Ineligible);
    }

    match attrs.zone_redundant {
        TriState::True => ClassificationResult::new(Status::Enabled, Eligibility::AlreadyEnabled),
        TriState::False => {
            // Region support and zones > 1 are guaranteed by the rules above.
            ClassificationResult::new(Status::Disabled, Eligibility::Eligible)
        }
        TriState::Unknown => {
            ClassificationResult::new(Status::StatusUnknown, Eligibility::Unknown)
        }
    }
}
