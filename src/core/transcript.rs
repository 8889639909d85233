use std::sync::Arc;

use async_trait::async_trait;
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::core::extract::VideoId;
use crate::error::TranscriptError;

/// One caption unit as delivered by the upstream provider, ordered by playback
/// time. The proxy contract only cares about `text`.
#[derive(Debug, Clone)]
pub struct CaptionSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Seam over the upstream caption provider. Production uses
/// [`YouTubeCaptionSource`]; tests substitute a stub.
#[async_trait]
pub trait CaptionSource: Send + Sync {
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<CaptionSegment>, TranscriptError>;
}

pub struct YouTubeCaptionSource {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl YouTubeCaptionSource {
    pub fn new(languages: Vec<String>) -> Result<Self, TranscriptError> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TranscriptError::Fetch(e.to_string()))?;
        Ok(Self { api, languages })
    }
}

#[async_trait]
impl CaptionSource for YouTubeCaptionSource {
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<CaptionSegment>, TranscriptError> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let fetched = self
            .api
            .fetch_transcript(video_id, &languages, false)
            .await
            .map_err(|e| classify_fetch_error(&e.to_string()))?;

        Ok(fetched
            .snippets
            .into_iter()
            .map(|snippet| CaptionSegment {
                text: html_escape::decode_html_entities(&snippet.text).into_owned(),
                start: snippet.start,
                duration: snippet.duration,
            })
            .collect())
    }
}

/// Reduce a provider error to the client-facing taxonomy. The provider reports
/// failures as opaque messages, so classification keys on the message text; an
/// unrecognized message passes through verbatim as `Fetch`.
pub(crate) fn classify_fetch_error(message: &str) -> TranscriptError {
    let msg = message.to_ascii_lowercase();
    if msg.contains("too many requests")
        || msg.contains("429")
        || (msg.contains("ip") && msg.contains("block"))
    {
        TranscriptError::TooManyRequests
    } else if msg.contains("disabled") {
        TranscriptError::Disabled
    } else if msg.contains("unavailable") || msg.contains("no longer available") {
        TranscriptError::Unavailable
    } else if msg.contains("no transcript") || msg.contains("no captions") {
        TranscriptError::NotAvailable
    } else {
        TranscriptError::Fetch(message.to_string())
    }
}

#[derive(Clone)]
pub struct TranscriptService {
    source: Arc<dyn CaptionSource>,
}

impl TranscriptService {
    pub fn new(source: Arc<dyn CaptionSource>) -> Self {
        Self { source }
    }

    /// Fetch all caption segments for a video and reduce them to a single
    /// plain-text transcript: segment texts joined by one ASCII space, in
    /// original order, trimmed. An empty or whitespace-only result is reported
    /// as `NotAvailable`, never as a successful empty transcript.
    pub async fn fetch_transcript(&self, video_id: &VideoId) -> Result<String, TranscriptError> {
        let segments = self.source.fetch_segments(video_id.as_str()).await?;

        let joined = segments
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let transcript = joined.trim();

        if transcript.is_empty() {
            return Err(TranscriptError::NotAvailable);
        }
        Ok(transcript.to_string())
    }
}
