//! # Remediation Module
//!
//! Turns an audit report into update calls: every Eligible or
//! RequiresUpgrade record gets `zoneRedundant=true`, raising the instance
//! count to the configured floor where it is known to be below it. Capacity
//! is never lowered. Everything else is skipped with a reason, and one
//! failed update never stops the rest of the batch.

use crate::audit::AuditReport;
use crate::azure::{ResourceId, ResourceKind, ResourceUpdater};
use crate::classifier::Eligibility;
use serde::Serialize;

/// One planned update call
#[derive(Debug, Clone, Serialize)]
pub struct PlannedUpdate {
    pub id: ResourceId,
    /// New instance count to set alongside the flag; `None` leaves the
    /// current capacity untouched
    pub target_capacity: Option<u32>,
}

/// A record remediation will not touch, and why
#[derive(Debug, Clone, Serialize)]
pub struct SkippedRecord {
    pub id: ResourceId,
    pub eligibility: Eligibility,
    pub reason: &'static str,
}

/// Result of executing (or dry-running) the planned updates
#[derive(Debug, Clone, Default, Serialize)]
pub struct RemediationReport {
    pub updated: Vec<PlannedUpdate>,
    pub failed: Vec<FailedUpdate>,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedUpdate {
    pub update: PlannedUpdate,
    pub reason: String,
}

/// Derive the update calls an audit report justifies.
///
/// Only classified records are considered; malformed or unfetchable records
/// already carry their own outcome and are not remediation candidates.
pub fn plan_remediation(
    report: &AuditReport,
    min_capacity: u32,
) -> (Vec<PlannedUpdate>, Vec<SkippedRecord>) {
    let mut planned = Vec::new();
    let mut skipped = Vec::new();

    for record in report.records.iter().filter_map(|r| r.classified()) {
        let eligibility = record.result.eligibility;
        if !eligibility.is_actionable() {
            let reason = match eligibility {
                Eligibility::AlreadyEnabled => "already zone redundant",
                Eligibility::Ineligible => "not eligible for conversion",
                Eligibility::Unknown => "state unknown; refusing to act",
                Eligibility::Eligible | Eligibility::RequiresUpgrade => unreachable!(),
            };
            skipped.push(SkippedRecord {
                id: record.id.clone(),
                eligibility,
                reason,
            });
            continue;
        }

        // Floor-only capacity semantics: raise a known below-floor count to
        // exactly the floor, otherwise leave capacity alone.
        let target_capacity = match record.id.kind {
            ResourceKind::HostingPlan => record
                .attributes
                .sku_capacity
                .filter(|&c| c < min_capacity)
                .map(|_| min_capacity),
            ResourceKind::HostingEnvironment => None,
        };

        planned.push(PlannedUpdate {
            id: record.id.clone(),
            target_capacity,
        });
    }

    (planned, skipped)
}

/// Execute planned updates sequentially, fail-forward.
pub async fn execute_remediation<U: ResourceUpdater>(
    updater: &U,
    planned: Vec<PlannedUpdate>,
    skipped: Vec<SkippedRecord>,
) -> RemediationReport {
    let mut report = RemediationReport {
        skipped,
        ..Default::default()
    };

    for update in planned {
        match updater
            .enable_zone_redundancy(&update.id, update.target_capacity)
            .await
        {
            Ok(()) => report.updated.push(update),
            Err(e) => {
                log::error!("update failed for '{}': {}", update.id.raw(), e);
                report.failed.push(FailedUpdate {
                    update,
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditCounts, ClassifiedRecord, RecordOutcome};
    use crate::classifier::{ClassificationResult, ResourceAttributes, Status, TriState};
    use chrono::Utc;

    fn record(
        id: &str,
        capacity: Option<u32>,
        status: Status,
        eligibility: Eligibility,
    ) -> RecordOutcome {
        RecordOutcome::Classified(ClassifiedRecord {
            id: ResourceId::parse(id).unwrap(),
            attributes: ResourceAttributes {
                location: "eastus".into(),
                sku_name: Some("P1v3".into()),
                sku_capacity: capacity,
                zone_redundant: TriState::False,
                maximum_zones: Some(3),
                current_zones_utilized: None,
                environment: None,
            },
            result: ClassificationResult { status, eligibility },
        })
    }

    fn report(records: Vec<RecordOutcome>) -> AuditReport {
        let mut counts = AuditCounts::default();
        for r in &records {
            counts.record(r);
        }
        AuditReport {
            audited_at: Utc::now(),
            records,
            counts,
        }
    }

    const PLAN_A: &str =
        "/subscriptions/s/resourceGroups/g/providers/Microsoft.Web/serverfarms/a";
    const PLAN_B: &str =
        "/subscriptions/s/resourceGroups/g/providers/Microsoft.Web/serverfarms/b";
    const ASE: &str =
        "/subscriptions/s/resourceGroups/g/providers/Microsoft.Web/hostingEnvironments/ase";

    #[test]
    fn test_below_floor_capacity_is_raised_to_exactly_the_floor() {
        let report = report(vec![record(
            PLAN_A,
            Some(1),
            Status::Disabled,
            Eligibility::RequiresUpgrade,
        )]);
        let (planned, skipped) = plan_remediation(&report, 2);
        assert!(skipped.is_empty());
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].target_capacity, Some(2));
    }

    #[test]
    fn test_capacity_is_never_lowered() {
        let report = report(vec![record(
            PLAN_A,
            Some(5),
            Status::Disabled,
            Eligibility::Eligible,
        )]);
        let (planned, _) = plan_remediation(&report, 2);
        assert_eq!(planned[0].target_capacity, None);
    }

    #[test]
    fn test_unknown_capacity_is_left_alone() {
        let report = report(vec![record(
            PLAN_A,
            None,
            Status::Disabled,
            Eligibility::Eligible,
        )]);
        let (planned, _) = plan_remediation(&report, 2);
        assert_eq!(planned[0].target_capacity, None);
    }

    #[test]
    fn test_environments_never_get_a_capacity() {
        let report = report(vec![record(
            ASE,
            Some(1),
            Status::Disabled,
            Eligibility::Eligible,
        )]);
        let (planned, _) = plan_remediation(&report, 2);
        assert_eq!(planned[0].target_capacity, None);
    }

    #[test]
    fn test_non_actionable_records_are_skipped_with_reasons() {
        let report = report(vec![
            record(PLAN_A, Some(3), Status::Enabled, Eligibility::AlreadyEnabled),
            record(PLAN_B, Some(3), Status::RegionNotSupported, Eligibility::Ineligible),
            record(ASE, None, Status::StatusUnknown, Eligibility::Unknown),
        ]);
        let (planned, skipped) = plan_remediation(&report, 2);
        assert!(planned.is_empty());
        assert_eq!(skipped.len(), 3);
        assert_eq!(skipped[0].reason, "already zone redundant");
    }

    #[test]
    fn test_invalid_and_failed_records_are_not_candidates() {
        let report = report(vec![
            RecordOutcome::InvalidId {
                input: "garbage".into(),
                reason: "bad".into(),
            },
            RecordOutcome::FetchFailed {
                input: PLAN_A.into(),
                reason: "timeout".into(),
            },
        ]);
        let (planned, skipped) = plan_remediation(&report, 2);
        assert!(planned.is_empty());
        assert!(skipped.is_empty());
    }
}
