//! Run state for the generation orchestrator.

use crate::{Platform, PlatformStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Opaque identifier for one generation run.
///
/// Consumers compare run ids to recognize updates from a superseded run;
/// there is no cancellation signal for in-flight calls.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct RunId(Uuid);

impl RunId {
    /// Mint a fresh run id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

/// One platform's failure within a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFailure {
    /// The platform whose call failed
    pub platform: Platform,
    /// Error message for that platform
    pub message: String,
}

/// Live state for one user-initiated generation attempt.
///
/// Owned exclusively by the orchestrator for the run's duration. The status
/// map's keys exactly equal the requested platforms; the run is complete
/// when every status is terminal.
///
/// # Examples
///
/// ```
/// use castmark_core::{GenerationRun, Platform, PlatformStatus, RunId};
///
/// let mut run = GenerationRun::pending(RunId::new(), &[Platform::YouTube]);
/// assert!(!run.is_complete());
/// run.record(Platform::YouTube, PlatformStatus::succeeded(serde_json::json!({})));
/// assert!(run.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRun {
    /// Run identifier
    pub id: RunId,
    /// Platforms requested for this run, in selection order
    pub requested: Vec<Platform>,
    /// Status per requested platform
    pub status: BTreeMap<Platform, PlatformStatus>,
    /// When the run was dispatched
    pub started_at: DateTime<Utc>,
}

impl GenerationRun {
    /// Create a run with every requested platform already `Pending`.
    pub fn pending(id: RunId, platforms: &[Platform]) -> Self {
        let status = platforms
            .iter()
            .map(|p| (*p, PlatformStatus::Pending))
            .collect();
        Self {
            id,
            requested: platforms.to_vec(),
            status,
            started_at: Utc::now(),
        }
    }

    /// Record a platform's status transition.
    ///
    /// Only requested platforms have entries; a key outside the requested
    /// set is ignored rather than inserted.
    pub fn record(&mut self, platform: Platform, status: PlatformStatus) {
        if let Some(slot) = self.status.get_mut(&platform) {
            *slot = status;
        }
    }

    /// Whether every requested platform has reached a terminal status.
    pub fn is_complete(&self) -> bool {
        self.status.values().all(PlatformStatus::is_terminal)
    }

    /// Build the merged outcome from the current statuses.
    ///
    /// Results hold only the succeeded platforms' payloads; failures carry
    /// one entry per failed platform.
    pub fn outcome(&self) -> RunOutcome {
        let mut results = BTreeMap::new();
        let mut failures = Vec::new();
        for (platform, status) in &self.status {
            match status {
                PlatformStatus::Succeeded { result } => {
                    results.insert(*platform, result.clone());
                }
                PlatformStatus::Failed { message } => {
                    failures.push(PlatformFailure {
                        platform: *platform,
                        message: message.clone(),
                    });
                }
                _ => {}
            }
        }
        RunOutcome {
            run_id: self.id,
            results,
            failures,
        }
    }
}

/// The merged result set of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// The run this outcome belongs to
    pub run_id: RunId,
    /// Succeeded platforms' payloads
    pub results: BTreeMap<Platform, serde_json::Value>,
    /// Per-platform error messages, possibly empty
    pub failures: Vec<PlatformFailure>,
}

impl RunOutcome {
    /// Whether at least one platform succeeded.
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_id_round_trips_through_json() {
        let id = RunId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: RunId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn status_keys_match_requested_platforms() {
        let run = GenerationRun::pending(RunId::new(), &[Platform::YouTube, Platform::Podcast]);
        assert_eq!(run.status.len(), 2);
        assert!(run.status.contains_key(&Platform::YouTube));
        assert!(run.status.contains_key(&Platform::Podcast));
    }

    #[test]
    fn record_ignores_unrequested_platform() {
        let mut run = GenerationRun::pending(RunId::new(), &[Platform::YouTube]);
        run.record(Platform::Social, PlatformStatus::failed("stray"));
        assert_eq!(run.status.len(), 1);
    }

    #[test]
    fn outcome_partitions_successes_and_failures() {
        let mut run = GenerationRun::pending(RunId::new(), &[Platform::YouTube, Platform::Podcast]);
        run.record(
            Platform::YouTube,
            PlatformStatus::succeeded(serde_json::json!({"titles": ["A"]})),
        );
        run.record(Platform::Podcast, PlatformStatus::failed("boom"));
        let outcome = run.outcome();
        assert_eq!(outcome.results.len(), 1);
        assert!(outcome.results.contains_key(&Platform::YouTube));
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].platform, Platform::Podcast);
    }
}
