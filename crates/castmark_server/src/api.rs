//! Routes, request/response bodies, and error mapping.

use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use castmark_core::{
    EpisodeInput, GenerationRequest, HistoryEntry, Platform, PlatformFailure, ShortClip,
};
use castmark_error::{CastmarkError, CastmarkErrorKind, GenerationErrorKind, HistoryErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Build the API router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/generate", post(generate))
        .route("/api/run", post(run))
        .route("/api/history", get(list_history))
        .route("/api/history/:id", delete(delete_history).patch(rename_history))
        .with_state(state)
}

/// An error response: a status code, a message, and optionally the raw
/// model output when JSON parsing failed.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    raw: Option<String>,
}

impl ApiError {
    fn bad_request(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: error.into(),
            raw: None,
        }
    }
}

impl From<CastmarkError> for ApiError {
    fn from(err: CastmarkError) -> Self {
        let (status, error, raw) = match err.kind() {
            CastmarkErrorKind::Validation(e) => {
                (StatusCode::BAD_REQUEST, e.kind.to_string(), None)
            }
            CastmarkErrorKind::Generation(e) => match &e.kind {
                GenerationErrorKind::InvalidResponse { raw, .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Model returned invalid JSON".to_string(),
                    Some(raw.clone()),
                ),
                kind => (StatusCode::INTERNAL_SERVER_ERROR, kind.to_string(), None),
            },
            CastmarkErrorKind::History(e) => match &e.kind {
                HistoryErrorKind::NotFound(id) => (
                    StatusCode::NOT_FOUND,
                    format!("History entry not found: {id}"),
                    None,
                ),
                kind => (StatusCode::INTERNAL_SERVER_ERROR, kind.to_string(), None),
            },
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string(), None),
        };
        Self { status, error, raw }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, error = %self.error, "Returning error response");
        let mut body = serde_json::json!({ "error": self.error });
        if let Some(raw) = self.raw {
            body["raw"] = serde_json::Value::String(raw);
        }
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct ClipBody {
    #[serde(default)]
    label: String,
    transcript: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody {
    platform: String,
    #[serde(default)]
    episode_number: Option<String>,
    #[serde(default)]
    episode_topic: Option<String>,
    episode_transcript: String,
    #[serde(default)]
    short_clips: Vec<ClipBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RunBody {
    platforms: Vec<String>,
    #[serde(default)]
    episode_number: Option<String>,
    #[serde(default)]
    episode_topic: Option<String>,
    episode_transcript: String,
    #[serde(default)]
    short_clips: Vec<ClipBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenameBody {
    #[serde(default)]
    custom_title: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunResponse {
    run_id: String,
    results: BTreeMap<Platform, serde_json::Value>,
    failures: Vec<PlatformFailure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    history_entry: Option<HistoryEntry>,
}

fn parse_platform(name: &str) -> Result<Platform, ApiError> {
    Platform::from_str(name).map_err(|_| ApiError::bad_request(format!("Unknown platform: {name}")))
}

fn episode_input(
    episode_number: Option<String>,
    episode_topic: Option<String>,
    transcript: String,
    clips: Vec<ClipBody>,
) -> Result<EpisodeInput, ApiError> {
    let mut builder = EpisodeInput::builder();
    builder.transcript(transcript);
    if let Some(number) = episode_number {
        builder.episode_number(number);
    }
    if let Some(topic) = episode_topic {
        builder.episode_topic(topic);
    }
    builder.clips(
        clips
            .into_iter()
            .map(|c| ShortClip::new(c.label, c.transcript))
            .collect::<Vec<_>>(),
    );
    builder
        .build()
        .map_err(|e| ApiError::bad_request(e.to_string()))
}

/// `POST /api/generate`: one platform, one provider call, no history write.
#[tracing::instrument(skip_all)]
async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateBody>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    // A missing or malformed body is the caller's fault.
    let Json(body) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let platform = parse_platform(&body.platform)?;
    if body.episode_transcript.trim().is_empty() {
        return Err(ApiError::bad_request("Transcript is required"));
    }
    let input = episode_input(
        body.episode_number,
        body.episode_topic,
        body.episode_transcript,
        body.short_clips,
    )?;
    let request = GenerationRequest::new(platform, input);
    let result = state.driver().generate(&request).await?;
    Ok(Json(serde_json::json!({ "result": result })))
}

/// `POST /api/run`: validate, fan out to every platform, save on success.
#[tracing::instrument(skip_all)]
async fn run(
    State(state): State<AppState>,
    payload: Result<Json<RunBody>, JsonRejection>,
) -> Result<Json<RunResponse>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let platforms = body
        .platforms
        .iter()
        .map(|name| parse_platform(name))
        .collect::<Result<Vec<_>, _>>()?;
    let input = episode_input(
        body.episode_number,
        body.episode_topic,
        body.episode_transcript,
        body.short_clips,
    )?;
    let (outcome, entry) = state.orchestrator().run(input, &platforms).await?;
    Ok(Json(RunResponse {
        run_id: outcome.run_id.to_string(),
        results: outcome.results,
        failures: outcome.failures,
        history_entry: entry,
    }))
}

/// `GET /api/history`: all saved entries, newest first.
async fn list_history(State(state): State<AppState>) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    let entries = state.history().load().await?;
    Ok(Json(entries))
}

/// `DELETE /api/history/:id`
async fn delete_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.history().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `PATCH /api/history/:id`: set or clear the custom title.
async fn rename_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RenameBody>, JsonRejection>,
) -> Result<Json<HistoryEntry>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let entry = state.history().rename(&id, body.custom_title).await?;
    Ok(Json(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use castmark_core::{GenerationRun, PlatformStatus, RunId};
    use castmark_error::{CastmarkResult, GenerationError, HistoryError};
    use castmark_interface::{ContentDriver, HistoryStore};
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    struct FakeDriver {
        invalid_json: bool,
    }

    #[async_trait::async_trait]
    impl ContentDriver for FakeDriver {
        async fn generate(&self, request: &GenerationRequest) -> CastmarkResult<serde_json::Value> {
            if self.invalid_json {
                return Err(GenerationError::new(GenerationErrorKind::InvalidResponse {
                    message: "expected value at line 1".to_string(),
                    raw: "Sorry, I can't.".to_string(),
                })
                .into());
            }
            if *request.platform() == Platform::Thumbnail {
                return Err(GenerationError::new(GenerationErrorKind::Upstream(
                    "API error 529: overloaded".to_string(),
                ))
                .into());
            }
            Ok(serde_json::json!({"platform": request.platform().to_string()}))
        }

        fn provider_name(&self) -> &'static str {
            "fake"
        }

        fn model_name(&self) -> &str {
            "test-model"
        }
    }

    #[derive(Default)]
    struct FakeStore {
        entries: Mutex<Vec<HistoryEntry>>,
    }

    #[async_trait::async_trait]
    impl HistoryStore for FakeStore {
        async fn load(&self) -> CastmarkResult<Vec<HistoryEntry>> {
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn append(&self, entry: HistoryEntry) -> CastmarkResult<HistoryEntry> {
            self.entries.lock().unwrap().insert(0, entry.clone());
            Ok(entry)
        }

        async fn delete(&self, id: &str) -> CastmarkResult<()> {
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|e| e.id != id);
            if entries.len() == before {
                return Err(
                    HistoryError::new(HistoryErrorKind::NotFound(id.to_string())).into(),
                );
            }
            Ok(())
        }

        async fn rename(
            &self,
            id: &str,
            custom_title: Option<String>,
        ) -> CastmarkResult<HistoryEntry> {
            let mut entries = self.entries.lock().unwrap();
            let entry = entries
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| HistoryError::new(HistoryErrorKind::NotFound(id.to_string())))?;
            entry.custom_title = custom_title.filter(|t| !t.trim().is_empty());
            Ok(entry.clone())
        }
    }

    fn test_app(invalid_json: bool) -> (Router, Arc<FakeStore>) {
        let store = Arc::new(FakeStore::default());
        let state = AppState::new(Arc::new(FakeDriver { invalid_json }), store.clone());
        (app(state), store)
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn transcript() -> String {
        "word ".repeat(60)
    }

    fn seeded_entry() -> HistoryEntry {
        let mut run = GenerationRun::pending(RunId::new(), &[Platform::YouTube]);
        run.record(
            Platform::YouTube,
            PlatformStatus::succeeded(serde_json::json!({})),
        );
        let input = EpisodeInput::builder()
            .episode_number("2")
            .transcript("words")
            .build()
            .unwrap();
        HistoryEntry::from_outcome(&run.outcome(), &input)
    }

    #[tokio::test]
    async fn generate_returns_result() {
        let (app, _) = test_app(false);
        let response = app
            .oneshot(post_json(
                "/api/generate",
                serde_json::json!({
                    "platform": "youtube",
                    "episodeNumber": "19",
                    "episodeTranscript": transcript(),
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["result"]["platform"], "youtube");
    }

    #[tokio::test]
    async fn generate_rejects_unknown_platform() {
        let (app, _) = test_app(false);
        let response = app
            .oneshot(post_json(
                "/api/generate",
                serde_json::json!({
                    "platform": "tiktok",
                    "episodeTranscript": transcript(),
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Unknown platform: tiktok");
    }

    #[tokio::test]
    async fn generate_rejects_missing_transcript_field() {
        let (app, _) = test_app(false);
        let response = app
            .oneshot(post_json(
                "/api/generate",
                serde_json::json!({"platform": "youtube"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn run_rejects_missing_platforms_field() {
        let (app, _) = test_app(false);
        let response = app
            .oneshot(post_json(
                "/api/run",
                serde_json::json!({"episodeTranscript": transcript()}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn generate_rejects_blank_transcript() {
        let (app, _) = test_app(false);
        let response = app
            .oneshot(post_json(
                "/api/generate",
                serde_json::json!({"platform": "youtube", "episodeTranscript": "  "}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn generate_surfaces_raw_text_on_invalid_model_json() {
        let (app, _) = test_app(true);
        let response = app
            .oneshot(post_json(
                "/api/generate",
                serde_json::json!({
                    "platform": "podcast",
                    "episodeTranscript": transcript(),
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Model returned invalid JSON");
        assert_eq!(json["raw"], "Sorry, I can't.");
    }

    #[tokio::test]
    async fn run_reports_partial_failure_and_saves() {
        let (app, store) = test_app(false);
        let response = app
            .oneshot(post_json(
                "/api/run",
                serde_json::json!({
                    "platforms": ["youtube", "thumbnail"],
                    "episodeTopic": "Trade deadline",
                    "episodeTranscript": transcript(),
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["results"]["youtube"].is_object());
        assert_eq!(json["failures"][0]["platform"], "thumbnail");
        assert_eq!(json["historyEntry"]["episodeTopic"], "Trade deadline");
        assert_eq!(store.entries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn run_rejects_short_transcript() {
        let (app, store) = test_app(false);
        let response = app
            .oneshot(post_json(
                "/api/run",
                serde_json::json!({
                    "platforms": ["youtube"],
                    "episodeTranscript": "too short",
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn history_list_returns_saved_entries() {
        let (app, store) = test_app(false);
        store.entries.lock().unwrap().push(seeded_entry());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["episodeNumber"], "2");
    }

    #[tokio::test]
    async fn history_delete_missing_is_not_found() {
        let (app, _) = test_app(false);
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/history/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn run_persists_to_a_file_backed_history() {
        let dir = tempfile::TempDir::new().unwrap();
        let history = Arc::new(
            castmark_history::FileHistory::new(dir.path().join("history.json")).unwrap(),
        );
        let state = AppState::new(Arc::new(FakeDriver { invalid_json: false }), history);
        let app = app(state);

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/run",
                serde_json::json!({
                    "platforms": ["youtube"],
                    "episodeNumber": "7",
                    "episodeTranscript": transcript(),
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["episodeNumber"], "7");
    }

    #[tokio::test]
    async fn history_rename_sets_custom_title() {
        let (app, store) = test_app(false);
        let entry = seeded_entry();
        let id = entry.id.clone();
        store.entries.lock().unwrap().push(entry);

        let response = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/api/history/{id}"))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({"customTitle": "Deadline special"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["customTitle"], "Deadline special");
    }
}
