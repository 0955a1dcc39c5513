//! Injectable eligibility policy: which regions and SKUs support zonal
//! deployment.
//!
//! The region and SKU lists are provider capability data that changes over
//! time, so they are plain configuration (see `config::PolicyConfig`) rather
//! than compiled-in constants. The defaults below track the published Azure
//! capability lists at the time of release.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Regions with availability-zone support
pub const DEFAULT_ZONE_CAPABLE_REGIONS: &[&str] = &[
    "australiaeast",
    "brazilsouth",
    "canadacentral",
    "centralindia",
    "centralus",
    "eastasia",
    "eastus",
    "eastus2",
    "francecentral",
    "germanywestcentral",
    "israelcentral",
    "italynorth",
    "japaneast",
    "japanwest",
    "koreacentral",
    "mexicocentral",
    "newzealandnorth",
    "northeurope",
    "norwayeast",
    "polandcentral",
    "qatarcentral",
    "southafricanorth",
    "southcentralus",
    "southeastasia",
    "spaincentral",
    "swedencentral",
    "switzerlandnorth",
    "uaenorth",
    "uksouth",
    "westeurope",
    "westus2",
    "westus3",
];

/// SKU tiers that accept the zone-redundant flag
pub const DEFAULT_ZONE_CAPABLE_SKUS: &[&str] = &[
    // Premium v2
    "P1v2", "P2v2", "P3v2",
    // Premium v3
    "P0v3", "P1v3", "P2v3", "P3v3",
    // Premium memory-optimized v3
    "P1mv3", "P2mv3", "P3mv3", "P4mv3", "P5mv3",
    // Elastic Premium (Functions)
    "EP1", "EP2", "EP3",
    // Isolated v2 (App Service Environment v3)
    "I1v2", "I2v2", "I3v2", "I4v2", "I5v2", "I6v2",
    "I1mv2", "I2mv2", "I3mv2", "I4mv2", "I5mv2",
];

// Isolated v2 tiers ("I1v2", "I1m v2", ...) route through an extra check on
// the containing App Service Environment.
static ISOLATED_V2_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^i\d+m?v2$").unwrap());

/// Normalize a region or SKU identifier for comparison: matching is case-
/// and whitespace-insensitive, so "East US", "eastus" and "EASTUS" are the
/// same region.
pub fn normalize(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// The static decision tables the classifier consults.
#[derive(Debug, Clone)]
pub struct EligibilityPolicy {
    regions: HashSet<String>,
    skus: HashSet<String>,
}

impl EligibilityPolicy {
    /// Build a policy from explicit region and SKU lists. Entries are
    /// normalized on the way in.
    pub fn new<R, S>(regions: R, skus: S) -> Self
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        EligibilityPolicy {
            regions: regions.into_iter().map(|r| normalize(r.as_ref())).collect(),
            skus: skus.into_iter().map(|s| normalize(s.as_ref())).collect(),
        }
    }

    pub fn region_supported(&self, location: &str) -> bool {
        self.regions.contains(&normalize(location))
    }

    pub fn sku_supported(&self, sku_name: &str) -> bool {
        self.skus.contains(&normalize(sku_name))
    }

    pub fn is_isolated_v2(&self, sku_name: &str) -> bool {
        ISOLATED_V2_PATTERN.is_match(&normalize(sku_name))
    }

    /// Sorted views for the `policy` subcommand output.
    pub fn regions(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.regions.iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    pub fn skus(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.skus.iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        EligibilityPolicy::new(DEFAULT_ZONE_CAPABLE_REGIONS, DEFAULT_ZONE_CAPABLE_SKUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_case_and_whitespace() {
        assert_eq!(normalize("East US"), "eastus");
        assert_eq!(normalize("EASTUS"), "eastus");
        assert_eq!(normalize("  P1 v3 "), "p1v3");
    }

    #[test]
    fn test_region_matching_is_insensitive() {
        let policy = EligibilityPolicy::default();
        assert!(policy.region_supported("East US"));
        assert!(policy.region_supported("eastus"));
        assert!(policy.region_supported("EASTUS"));
        assert!(!policy.region_supported("westus"));
    }

    #[test]
    fn test_isolated_v2_pattern() {
        let policy = EligibilityPolicy::default();
        assert!(policy.is_isolated_v2("I1v2"));
        assert!(policy.is_isolated_v2("i3V2"));
        assert!(policy.is_isolated_v2("I2m v2"));
        assert!(!policy.is_isolated_v2("I1"));
        assert!(!policy.is_isolated_v2("P1v2"));
        assert!(!policy.is_isolated_v2("I1v3"));
    }

    #[test]
    fn test_custom_lists_replace_defaults() {
        let policy = EligibilityPolicy::new(["customregion"], ["X1"]);
        assert!(policy.region_supported("Custom Region"));
        assert!(!policy.region_supported("eastus"));
        assert!(policy.sku_supported("x1"));
        assert!(!policy.sku_supported("P1v3"));
    }
}
