//! The generation run orchestrator.

use crate::validate_input;
use castmark_core::{
    EpisodeInput, GenerationRequest, GenerationRun, HistoryEntry, Platform, PlatformStatus, RunId,
    RunOutcome,
};
use castmark_error::{CastmarkResult, GenerationError, GenerationErrorKind};
use castmark_interface::{ContentDriver, HistoryStore};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};

/// Progress notification from an in-flight run.
///
/// Consumers filter on `run_id` to ignore updates from a superseded run;
/// dispatching a new run does not cancel the previous one's calls.
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    /// One platform changed status.
    Status {
        /// The run this update belongs to
        run_id: RunId,
        /// The platform that changed
        platform: Platform,
        /// Its new status
        status: PlatformStatus,
    },
    /// Every platform settled; the run is over.
    Complete {
        /// The merged run outcome
        outcome: RunOutcome,
        /// The history entry written for this run, if any platform succeeded
        /// and the write went through
        entry: Option<HistoryEntry>,
    },
}

/// Handle to an in-flight generation run.
///
/// Events arrive in dispatch-then-settle order: one `Pending` status per
/// platform up front, one terminal status per platform as calls return, and
/// a single `Complete` at the end.
pub struct RunHandle {
    id: RunId,
    events: mpsc::UnboundedReceiver<RunEvent>,
    join: JoinHandle<(RunOutcome, Option<HistoryEntry>)>,
}

impl RunHandle {
    /// The run's identifier.
    pub fn id(&self) -> RunId {
        self.id
    }

    /// Receive the next event, or `None` once the run has finished and all
    /// events were consumed.
    pub async fn next_event(&mut self) -> Option<RunEvent> {
        self.events.recv().await
    }

    /// Wait for the run to finish, discarding any unconsumed events.
    pub async fn wait(self) -> CastmarkResult<(RunOutcome, Option<HistoryEntry>)> {
        drop(self.events);
        self.join.await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::Upstream(format!(
                "run task aborted: {e}"
            )))
            .into()
        })
    }
}

/// Fans one episode input out to every selected platform concurrently.
///
/// Holds the generation and persistence boundaries as shared trait objects,
/// so one orchestrator serves any number of runs.
#[derive(Clone)]
pub struct Orchestrator {
    driver: Arc<dyn ContentDriver>,
    history: Arc<dyn HistoryStore>,
}

impl Orchestrator {
    /// Create an orchestrator over the given driver and history store.
    pub fn new(driver: Arc<dyn ContentDriver>, history: Arc<dyn HistoryStore>) -> Self {
        Self { driver, history }
    }

    /// Validate the input and start a run, returning immediately.
    ///
    /// Each selected platform gets exactly one concurrent provider call; a
    /// failure on one platform never interrupts the others. After every
    /// platform settles, a run with at least one success is appended to
    /// history exactly once.
    #[tracing::instrument(skip(self, input), fields(platforms = platforms.len()))]
    pub fn dispatch(
        &self,
        input: EpisodeInput,
        platforms: &[Platform],
    ) -> CastmarkResult<RunHandle> {
        validate_input(&input, platforms)?;

        // Selection order is preserved; repeats collapse to one call.
        let mut selected: Vec<Platform> = Vec::with_capacity(platforms.len());
        for platform in platforms {
            if !selected.contains(platform) {
                selected.push(*platform);
            }
        }

        let id = RunId::new();
        let run = GenerationRun::pending(id, &selected);
        let (tx, rx) = mpsc::unbounded_channel();

        for platform in &selected {
            // Receiver may already be gone when the caller only waits.
            let _ = tx.send(RunEvent::Status {
                run_id: id,
                platform: *platform,
                status: PlatformStatus::Pending,
            });
        }

        tracing::info!(run_id = %id, platforms = selected.len(), "Dispatching generation run");

        let driver = Arc::clone(&self.driver);
        let history = Arc::clone(&self.history);
        let join = tokio::spawn(supervise(driver, history, run, input, tx));

        Ok(RunHandle {
            id,
            events: rx,
            join,
        })
    }

    /// Dispatch a run and wait for its outcome.
    pub async fn run(
        &self,
        input: EpisodeInput,
        platforms: &[Platform],
    ) -> CastmarkResult<(RunOutcome, Option<HistoryEntry>)> {
        self.dispatch(input, platforms)?.wait().await
    }
}

async fn supervise(
    driver: Arc<dyn ContentDriver>,
    history: Arc<dyn HistoryStore>,
    mut run: GenerationRun,
    input: EpisodeInput,
    tx: mpsc::UnboundedSender<RunEvent>,
) -> (RunOutcome, Option<HistoryEntry>) {
    let mut calls = JoinSet::new();
    for platform in run.requested.clone() {
        let driver = Arc::clone(&driver);
        let request = GenerationRequest::new(platform, input.clone());
        calls.spawn(async move {
            let status = match driver.generate(&request).await {
                Ok(result) => PlatformStatus::succeeded(result),
                Err(e) => PlatformStatus::failed(e.to_string()),
            };
            (platform, status)
        });
    }

    while let Some(joined) = calls.join_next().await {
        match joined {
            Ok((platform, status)) => {
                tracing::debug!(
                    run_id = %run.id,
                    platform = %platform,
                    succeeded = status.result().is_some(),
                    "Platform settled"
                );
                run.record(platform, status.clone());
                let _ = tx.send(RunEvent::Status {
                    run_id: run.id,
                    platform,
                    status,
                });
            }
            Err(e) => {
                tracing::error!(run_id = %run.id, error = %e, "Generation task failed to join");
            }
        }
    }

    let outcome = run.outcome();
    let entry = if outcome.has_results() {
        let entry = HistoryEntry::from_outcome(&outcome, &input);
        match history.append(entry).await {
            Ok(saved) => Some(saved),
            Err(e) => {
                // The outcome still stands; only the record is lost.
                tracing::warn!(run_id = %run.id, error = %e, "Failed to save run to history");
                None
            }
        }
    } else {
        None
    };

    tracing::info!(
        run_id = %run.id,
        succeeded = outcome.results.len(),
        failed = outcome.failures.len(),
        "Run complete"
    );
    let _ = tx.send(RunEvent::Complete {
        outcome: outcome.clone(),
        entry: entry.clone(),
    });
    (outcome, entry)
}
