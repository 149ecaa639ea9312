//! Persisted record of a past generation run.

use crate::{Platform, RunOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One saved generation, as shown in the history panel.
///
/// Created only from a run that produced at least one success; mutated only
/// by rename (sets or clears `custom_title`) or delete.
///
/// # Examples
///
/// ```
/// use castmark_core::{EpisodeInput, GenerationRun, HistoryEntry, Platform, PlatformStatus, RunId};
///
/// let mut run = GenerationRun::pending(RunId::new(), &[Platform::YouTube]);
/// run.record(Platform::YouTube, PlatformStatus::succeeded(serde_json::json!({})));
/// let input = EpisodeInput::builder().episode_number("7").transcript("...").build().unwrap();
/// let entry = HistoryEntry::from_outcome(&run.outcome(), &input);
/// assert_eq!(entry.display_title(), "Ep. 7");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Opaque entry identifier
    pub id: String,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
    /// Episode number at generation time, possibly empty
    pub episode_number: String,
    /// Episode topic at generation time, possibly empty
    pub episode_topic: String,
    /// User-set title override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
    /// Platforms that succeeded in the run
    pub platforms: Vec<Platform>,
    /// Succeeded platforms' payloads
    pub results: BTreeMap<Platform, serde_json::Value>,
}

impl HistoryEntry {
    /// Build an entry from a completed run's outcome and the episode input.
    ///
    /// Callers must only do this for outcomes with at least one success;
    /// the history store never sees empty result sets.
    pub fn from_outcome(outcome: &RunOutcome, input: &crate::EpisodeInput) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            episode_number: input.episode_number().clone().unwrap_or_default(),
            episode_topic: input.episode_topic().clone().unwrap_or_default(),
            custom_title: None,
            platforms: outcome.results.keys().copied().collect(),
            results: outcome.results.clone(),
        }
    }

    /// The title shown in the history list.
    ///
    /// The custom title wins; otherwise "Ep. N · Topic", then whichever of
    /// the two exists, then a placeholder.
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.custom_title {
            return title.clone();
        }
        match (
            self.episode_number.is_empty(),
            self.episode_topic.is_empty(),
        ) {
            (false, false) => format!("Ep. {} · {}", self.episode_number, self.episode_topic),
            (false, true) => format!("Ep. {}", self.episode_number),
            (true, false) => self.episode_topic.clone(),
            (true, true) => "Untitled Episode".to_string(),
        }
    }
}
