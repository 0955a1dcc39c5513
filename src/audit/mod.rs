//! # Audit Module
//!
//! The sequential audit pipeline: parse each resource ID, fetch its
//! attributes, resolve the nested environment where the tier demands it, and
//! classify. One bad record never aborts the batch; malformed input,
//! fetch failures and classification outcomes stay in disjoint buckets so
//! the summary counters never conflate them.

pub mod input;

pub use input::read_resource_list;

use crate::azure::{AttributeSource, ResourceId, ResourceKind};
use crate::classifier::{
    ClassificationResult, Eligibility, EligibilityPolicy, ResourceAttributes, Status, TriState,
    classify_environment, classify_plan,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Options applied to one audit run
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    /// When set, records outside this subscription are reported as input
    /// errors and never fetched
    pub expected_subscription: Option<String>,
}

/// A successfully classified resource
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedRecord {
    pub id: ResourceId,
    pub attributes: ResourceAttributes,
    pub result: ClassificationResult,
}

/// Terminal outcome for one input line.
///
/// The non-`Classified` variants are the error classes of the pipeline:
/// malformed input and collaborator failures. They are never counted as
/// classifications.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecordOutcome {
    Classified(ClassifiedRecord),
    InvalidId { input: String, reason: String },
    WrongSubscription { input: String, subscription: String },
    FetchFailed { input: String, reason: String },
}

impl RecordOutcome {
    pub fn classified(&self) -> Option<&ClassifiedRecord> {
        match self {
            RecordOutcome::Classified(record) => Some(record),
            _ => None,
        }
    }
}

/// Aggregate counters. Per-record classification is order-insensitive, so
/// these combine with a plain associative, commutative merge.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditCounts {
    pub classified: usize,
    pub by_status: HashMap<Status, usize>,
    pub by_eligibility: HashMap<Eligibility, usize>,
    pub invalid_input: usize,
    pub wrong_subscription: usize,
    pub fetch_failures: usize,
}

impl AuditCounts {
    pub fn record(&mut self, outcome: &RecordOutcome) {
        match outcome {
            RecordOutcome::Classified(record) => {
                self.classified += 1;
                *self.by_status.entry(record.result.status).or_default() += 1;
                *self
                    .by_eligibility
                    .entry(record.result.eligibility)
                    .or_default() += 1;
            }
            RecordOutcome::InvalidId { .. } => self.invalid_input += 1,
            RecordOutcome::WrongSubscription { .. } => self.wrong_subscription += 1,
            RecordOutcome::FetchFailed { .. } => self.fetch_failures += 1,
        }
    }

    pub fn merge(mut self, other: AuditCounts) -> AuditCounts {
        self.classified += other.classified;
        for (status, n) in other.by_status {
            *self.by_status.entry(status).or_default() += n;
        }
        for (eligibility, n) in other.by_eligibility {
            *self.by_eligibility.entry(eligibility).or_default() += n;
        }
        self.invalid_input += other.invalid_input;
        self.wrong_subscription += other.wrong_subscription;
        self.fetch_failures += other.fetch_failures;
        self
    }

    /// Records remediation could act on
    pub fn actionable(&self) -> usize {
        self.by_eligibility
            .iter()
            .filter(|(e, _)| e.is_actionable())
            .map(|(_, n)| n)
            .sum()
    }
}

/// Full result of one audit run
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub audited_at: DateTime<Utc>,
    pub records: Vec<RecordOutcome>,
    pub counts: AuditCounts,
}

/// Run the audit over a list of raw resource IDs.
///
/// Fail-forward: every entry produces exactly one outcome and processing
/// always continues to the next entry.
pub async fn run_audit<S: AttributeSource>(
    source: &S,
    policy: &EligibilityPolicy,
    entries: &[String],
    options: &AuditOptions,
) -> AuditReport {
    let mut records = Vec::with_capacity(entries.len());
    let mut counts = AuditCounts::default();

    for entry in entries {
        let outcome = audit_one(source, policy, entry, options).await;
        counts.record(&outcome);
        records.push(outcome);
    }

    AuditReport {
        audited_at: Utc::now(),
        records,
        counts,
    }
}

async fn audit_one<S: AttributeSource>(
    source: &S,
    policy: &EligibilityPolicy,
    entry: &str,
    options: &AuditOptions,
) -> RecordOutcome {
    let id = match ResourceId::parse(entry) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("skipping malformed ID '{}': {}", entry, e);
            return RecordOutcome::InvalidId {
                input: entry.to_string(),
                reason: e.to_string(),
            };
        }
    };

    if let Some(expected) = &options.expected_subscription {
        if !id.in_subscription(expected) {
            return RecordOutcome::WrongSubscription {
                input: entry.to_string(),
                subscription: id.subscription.clone(),
            };
        }
    }

    let mut attributes = match source.fetch(&id).await {
        Ok(attributes) => attributes,
        Err(e) => {
            log::warn!("fetch failed for '{}': {}", entry, e);
            return RecordOutcome::FetchFailed {
                input: entry.to_string(),
                reason: e.to_string(),
            };
        }
    };

    let result = match id.kind {
        ResourceKind::HostingPlan => {
            resolve_environment(source, policy, &mut attributes).await;
            classify_plan(policy, &attributes)
        }
        ResourceKind::HostingEnvironment => classify_environment(policy, &attributes),
    };

    RecordOutcome::Classified(ClassifiedRecord {
        id,
        attributes,
        result,
    })
}

/// Resolve the nested environment flag for isolated-v2 plans with a second
/// fetch. Any failure along the way leaves the tri-state Unknown: the plan
/// fetch itself succeeded, so an unresolvable environment is a data gap for
/// classification, not a record failure.
async fn resolve_environment<S: AttributeSource>(
    source: &S,
    policy: &EligibilityPolicy,
    attributes: &mut ResourceAttributes,
) {
    let sku = attributes.sku_name.as_deref().unwrap_or("");
    if !policy.is_isolated_v2(sku) {
        return;
    }

    let Some(environment) = attributes.environment.as_mut() else {
        return;
    };
    if environment.zone_redundant != TriState::Unknown {
        return;
    }
    let Some(env_id) = environment.id.as_deref() else {
        return;
    };

    let parsed = match ResourceId::parse(env_id) {
        Ok(parsed) if parsed.kind == ResourceKind::HostingEnvironment => parsed,
        _ => {
            log::warn!("unrecognized environment reference '{}'", env_id);
            return;
        }
    };

    match source.fetch(&parsed).await {
        Ok(env_attrs) => environment.zone_redundant = env_attrs.zone_redundant,
        Err(e) => log::warn!("environment fetch failed for '{}': {}", env_id, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(status: Status, eligibility: Eligibility) -> RecordOutcome {
        RecordOutcome::Classified(ClassifiedRecord {
            id: ResourceId::parse(
                "/subscriptions/s/resourceGroups/g/providers/Microsoft.Web/serverfarms/p",
            )
            .unwrap(),
            attributes: ResourceAttributes {
                location: "eastus".into(),
                sku_name: Some("P1v3".into()),
                sku_capacity: None,
                zone_redundant: TriState::False,
                maximum_zones: Some(3),
                current_zones_utilized: None,
                environment: None,
            },
            result: ClassificationResult { status, eligibility },
        })
    }

    #[test]
    fn test_counts_keep_error_classes_disjoint() {
        let mut counts = AuditCounts::default();
        counts.record(&classified(Status::Disabled, Eligibility::Eligible));
        counts.record(&RecordOutcome::InvalidId {
            input: "x".into(),
            reason: "bad".into(),
        });
        counts.record(&RecordOutcome::FetchFailed {
            input: "y".into(),
            reason: "timeout".into(),
        });

        assert_eq!(counts.classified, 1);
        assert_eq!(counts.invalid_input, 1);
        assert_eq!(counts.fetch_failures, 1);
        assert_eq!(counts.by_status.get(&Status::Disabled), Some(&1));
        // Errors never leak into classification buckets.
        assert_eq!(counts.by_status.values().sum::<usize>(), 1);
    }

    #[test]
    fn test_merge_is_commutative() {
        let mut a = AuditCounts::default();
        a.record(&classified(Status::Disabled, Eligibility::Eligible));
        a.record(&classified(Status::Enabled, Eligibility::AlreadyEnabled));
        let mut b = AuditCounts::default();
        b.record(&classified(Status::Disabled, Eligibility::RequiresUpgrade));
        b.record(&RecordOutcome::FetchFailed {
            input: "y".into(),
            reason: "timeout".into(),
        });

        let ab = a.clone().merge(b.clone());
        let ba = b.merge(a);
        assert_eq!(ab.classified, ba.classified);
        assert_eq!(ab.fetch_failures, ba.fetch_failures);
        assert_eq!(ab.by_status, ba.by_status);
        assert_eq!(ab.by_eligibility, ba.by_eligibility);
        assert_eq!(ab.actionable(), 2);
    }
}
