use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the upstream caption provider, reduced to the small set the
/// HTTP surface promises to clients. Everything the provider can report lands in
/// exactly one of these rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    /// The video has no caption track, or the track reduced to an empty string.
    #[error("the video does not have a transcript or it is empty")]
    NotAvailable,

    /// The video itself does not exist or has been removed.
    #[error("this video is not available or has been removed")]
    Unavailable,

    /// Captions exist but the uploader disabled them.
    #[error("transcripts are disabled for this video")]
    Disabled,

    /// The upstream provider rate-limited this server.
    #[error("rate limit exceeded")]
    TooManyRequests,

    /// Anything else: network, parse, unknown provider failure.
    #[error("failed to fetch transcript: {0}")]
    Fetch(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid video URL or ID: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    #[error(transparent)]
    OpenAi(#[from] async_openai::error::OpenAIError),
}
