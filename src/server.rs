use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::core::extract::resolve_video_input;
use crate::core::transcript::TranscriptService;
use crate::error::TranscriptError;

#[derive(Clone)]
pub struct AppState {
    pub transcripts: Arc<TranscriptService>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub transcript: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/transcript/{video_id}", get(get_transcript))
        .with_state(state)
}

pub async fn run(state: AppState, port: u16) -> anyhow::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("transcript proxy listening on port {port}");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

/// `GET /api/transcript/{video_id}` — the path segment may be a raw 11-character
/// video ID or a full YouTube URL; extraction is applied here either way.
async fn get_transcript(
    State(state): State<AppState>,
    Path(video_input): Path<String>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let Some(video_id) = resolve_video_input(&video_input) else {
        error!(input = %video_input, "could not resolve a video id");
        return Err(ApiError::from(TranscriptError::Fetch(format!(
            "could not resolve a video id from `{video_input}`"
        ))));
    };

    info!(video_id = %video_id, "fetching transcript");

    match state.transcripts.fetch_transcript(&video_id).await {
        Ok(transcript) => {
            info!(
                video_id = %video_id,
                transcript_len = transcript.len(),
                "transcript fetched"
            );
            Ok(Json(TranscriptResponse { transcript }))
        }
        Err(err) => {
            error!(video_id = %video_id, error = %err, "transcript fetch failed");
            Err(ApiError::from(err))
        }
    }
}

/// Client-facing rendition of the transcript error taxonomy. The `error` code
/// strings are a stable contract; the messages are advisory.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<TranscriptError> for ApiError {
    fn from(err: TranscriptError) -> Self {
        let (status, code, message) = match err {
            TranscriptError::NotAvailable => (
                StatusCode::NOT_FOUND,
                "No transcript available",
                "The video does not have a transcript or it is empty".to_string(),
            ),
            TranscriptError::Unavailable => (
                StatusCode::NOT_FOUND,
                "Video unavailable",
                "This video is not available or has been removed".to_string(),
            ),
            TranscriptError::Disabled => (
                StatusCode::NOT_FOUND,
                "Transcripts disabled",
                "Transcripts are disabled for this video".to_string(),
            ),
            TranscriptError::TooManyRequests => (
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests",
                "Rate limit exceeded. Please try again later.".to_string(),
            ),
            TranscriptError::Fetch(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch transcript",
                message,
            ),
        };
        Self {
            status,
            code,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({
                "error": self.code,
                "message": self.message,
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transcript::{CaptionSegment, CaptionSource};
    use async_trait::async_trait;

    struct StubSource(Result<Vec<CaptionSegment>, TranscriptError>);

    #[async_trait]
    impl CaptionSource for StubSource {
        async fn fetch_segments(
            &self,
            _video_id: &str,
        ) -> Result<Vec<CaptionSegment>, TranscriptError> {
            self.0.clone()
        }
    }

    fn state_with(result: Result<Vec<CaptionSegment>, TranscriptError>) -> AppState {
        AppState {
            transcripts: Arc::new(TranscriptService::new(Arc::new(StubSource(result)))),
        }
    }

    fn segments(texts: &[&str]) -> Vec<CaptionSegment> {
        texts
            .iter()
            .map(|text| CaptionSegment {
                text: text.to_string(),
                start: 0.0,
                duration: 0.0,
            })
            .collect()
    }

    async fn call(
        result: Result<Vec<CaptionSegment>, TranscriptError>,
        path: &str,
    ) -> Result<Json<TranscriptResponse>, ApiError> {
        get_transcript(State(state_with(result)), Path(path.to_string())).await
    }

    #[tokio::test]
    async fn success_round_trip_body() {
        let response = call(Ok(segments(&["a", "b", "c"])), "dQw4w9WgXcQ")
            .await
            .expect("success");
        let body = serde_json::to_string(&response.0).expect("serialize");
        assert_eq!(body, r#"{"transcript":"a b c"}"#);
    }

    #[tokio::test]
    async fn full_url_works_as_path_segment() {
        let response = call(
            Ok(segments(&["hello"])),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        )
        .await
        .expect("success");
        assert_eq!(response.0.transcript, "hello");
    }

    #[tokio::test]
    async fn empty_transcript_is_a_404_not_an_empty_200() {
        let err = call(Ok(vec![]), "dQw4w9WgXcQ").await.expect_err("error");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "No transcript available");
    }

    #[tokio::test]
    async fn unresolvable_input_is_a_generic_failure() {
        let err = call(Ok(segments(&["x"])), "definitely not a video")
            .await
            .expect_err("error");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "Failed to fetch transcript");
    }

    #[test]
    fn taxonomy_maps_to_exact_status_and_code_pairs() {
        let cases = [
            (
                TranscriptError::NotAvailable,
                StatusCode::NOT_FOUND,
                "No transcript available",
            ),
            (
                TranscriptError::Unavailable,
                StatusCode::NOT_FOUND,
                "Video unavailable",
            ),
            (
                TranscriptError::Disabled,
                StatusCode::NOT_FOUND,
                "Transcripts disabled",
            ),
            (
                TranscriptError::TooManyRequests,
                StatusCode::TOO_MANY_REQUESTS,
                "Too many requests",
            ),
            (
                TranscriptError::Fetch("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch transcript",
            ),
        ];

        for (err, status, code) in cases {
            let api = ApiError::from(err);
            assert_eq!(api.status(), status);
            assert_eq!(api.code(), code);
        }
    }

    #[tokio::test]
    async fn fetch_errors_pass_the_underlying_message_through() {
        let response = ApiError::from(TranscriptError::Fetch("connection reset".to_string()))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(body["error"], "Failed to fetch transcript");
        assert_eq!(body["message"], "connection reset");
    }
}
