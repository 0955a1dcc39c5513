//! Raw control-plane JSON as `az resource show` returns it, and the mapping
//! into classifier input.
//!
//! Every field is optional on purpose: older resources and older API
//! versions omit the zone fields, and an absent field must land in the
//! "unknown" branch of the classifier, never in an error path.

use crate::classifier::{EnvironmentRef, ResourceAttributes, TriState};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResource {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub sku: Option<RawSku>,
    #[serde(default)]
    pub properties: Option<RawProperties>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSku {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProperties {
    #[serde(default)]
    pub zone_redundant: Option<bool>,
    #[serde(default)]
    pub maximum_number_of_zones: Option<u32>,
    #[serde(default)]
    pub current_number_of_zones_utilized: Option<u32>,
    #[serde(default)]
    pub hosting_environment_profile: Option<RawEnvironmentProfile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEnvironmentProfile {
    #[serde(default)]
    pub id: Option<String>,
}

impl RawResource {
    /// Flatten the raw response into classifier input. The nested
    /// environment starts out Unknown; the audit pipeline resolves it with a
    /// second fetch when the plan's tier requires one.
    pub fn into_attributes(self) -> ResourceAttributes {
        let properties = self.properties.unwrap_or_default();
        let sku = self.sku.unwrap_or_default();
        let environment = properties
            .hosting_environment_profile
            .map(|profile| EnvironmentRef {
                id: profile.id,
                zone_redundant: TriState::Unknown,
            });

        ResourceAttributes {
            location: self.location.unwrap_or_default(),
            sku_name: sku.name,
            sku_capacity: sku.capacity,
            zone_redundant: TriState::from(properties.zone_redundant),
            maximum_zones: properties.maximum_number_of_zones,
            current_zones_utilized: properties.current_number_of_zones_utilized,
            environment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_plan_response() {
        let raw: RawResource = serde_json::from_str(
            r#"{
                "location": "East US",
                "sku": { "name": "P1v3", "capacity": 3 },
                "properties": {
                    "zoneRedundant": false,
                    "maximumNumberOfZones": 3,
                    "currentNumberOfZonesUtilized": 1
                }
            }"#,
        )
        .unwrap();
        let attrs = raw.into_attributes();
        assert_eq!(attrs.location, "East US");
        assert_eq!(attrs.sku_name.as_deref(), Some("P1v3"));
        assert_eq!(attrs.sku_capacity, Some(3));
        assert_eq!(attrs.zone_redundant, TriState::False);
        assert_eq!(attrs.maximum_zones, Some(3));
        assert_eq!(attrs.current_zones_utilized, Some(1));
        assert!(attrs.environment.is_none());
    }

    #[test]
    fn test_absent_fields_map_to_unknown() {
        let raw: RawResource = serde_json::from_str(r#"{ "location": "eastus" }"#).unwrap();
        let attrs = raw.into_attributes();
        assert_eq!(attrs.zone_redundant, TriState::Unknown);
        assert_eq!(attrs.maximum_zones, None);
        assert_eq!(attrs.sku_name, None);
    }

    #[test]
    fn test_environment_profile_starts_unknown() {
        let raw: RawResource = serde_json::from_str(
            r#"{
                "location": "centralus",
                "sku": { "name": "I1v2" },
                "properties": {
                    "hostingEnvironmentProfile": {
                        "id": "/subscriptions/s/resourceGroups/g/providers/Microsoft.Web/hostingEnvironments/ase1"
                    }
                }
            }"#,
        )
        .unwrap();
        let attrs = raw.into_attributes();
        let env = attrs.environment.unwrap();
        assert!(env.id.unwrap().ends_with("/ase1"));
        assert_eq!(env.zone_redundant, TriState::Unknown);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let raw: RawResource = serde_json::from_str(
            r#"{
                "id": "/x",
                "name": "plan",
                "location": "eastus",
                "tags": { "env": "prod" },
                "properties": { "zoneRedundant": true, "numberOfSites": 4 }
            }"#,
        )
        .unwrap();
        assert_eq!(raw.into_attributes().zone_redundant, TriState::True);
    }
}
