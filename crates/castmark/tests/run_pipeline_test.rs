//! End-to-end run pipeline over a real file-backed history.

use castmark::{
    CastmarkResult, ContentDriver, EpisodeInput, FileHistory, GenerationRequest, HistoryStore,
    Orchestrator, Platform, ShortClip,
};
use std::sync::Arc;
use tempfile::TempDir;

struct CannedDriver;

#[async_trait::async_trait]
impl ContentDriver for CannedDriver {
    async fn generate(&self, request: &GenerationRequest) -> CastmarkResult<serde_json::Value> {
        Ok(serde_json::json!({
            "platform": request.platform().to_string(),
            "episode": request.input().episode_number(),
        }))
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }

    fn model_name(&self) -> &str {
        "test-model"
    }
}

fn input() -> EpisodeInput {
    EpisodeInput::builder()
        .episode_number("19")
        .episode_topic("Trade deadline meltdown")
        .transcript("word ".repeat(80))
        .clips(vec![ShortClip::new("rant", "that fourth quarter though")])
        .build()
        .unwrap()
}

#[tokio::test]
async fn full_run_lands_in_history_file() {
    let dir = TempDir::new().unwrap();
    let history = Arc::new(FileHistory::new(dir.path().join("history.json")).unwrap());
    let orchestrator = Orchestrator::new(Arc::new(CannedDriver), history.clone());

    let (outcome, entry) = orchestrator
        .run(input(), &Platform::all())
        .await
        .unwrap();

    assert_eq!(outcome.results.len(), 4);
    assert!(outcome.failures.is_empty());

    let entry = entry.unwrap();
    assert_eq!(entry.display_title(), "Ep. 19 · Trade deadline meltdown");

    // The entry written during the run is what a fresh load sees.
    let loaded = history.load().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], entry);
    assert_eq!(loaded[0].platforms.len(), 4);
}

#[tokio::test]
async fn second_run_stacks_on_top() {
    let dir = TempDir::new().unwrap();
    let history = Arc::new(FileHistory::new(dir.path().join("history.json")).unwrap());
    let orchestrator = Orchestrator::new(Arc::new(CannedDriver), history.clone());

    orchestrator
        .run(input(), &[Platform::YouTube])
        .await
        .unwrap();
    let (_, second) = orchestrator
        .run(input(), &[Platform::Podcast])
        .await
        .unwrap();

    let loaded = history.load().await.unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0], second.unwrap());
}
