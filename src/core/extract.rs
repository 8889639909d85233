use std::sync::LazyLock;

use derive_more::Display;
use regex::Regex;

pub const VIDEO_ID_LEN: usize = 11;

/// An 11-character YouTube video identifier drawn from `[A-Za-z0-9_-]`.
/// Obtained through extraction, never assembled by callers.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tried in order; the first pattern whose candidate run is exactly 11
// characters wins. Watch-style URLs take precedence over bare paths, and
// youtu.be shortlinks come last.
static ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r#"youtube\.com/[^\s"]*[?&]v=([0-9A-Za-z_-]+)"#,
        r"youtube\.com/embed/([0-9A-Za-z_-]+)",
        r"youtube\.com/v/([0-9A-Za-z_-]+)",
        r"youtube\.com/shorts/([0-9A-Za-z_-]+)",
        r#"youtube\.com/[^\s"/]+/[^\s"]+/([0-9A-Za-z_-]+)"#,
        r"youtu\.be/([0-9A-Za-z_-]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("video id pattern"))
    .collect()
});

/// Extract a video ID from arbitrary URL text.
///
/// This is a substring search, not a full-string parse: missing schemes, extra
/// whitespace and surrounding prose are all fine as long as one recognized
/// marker is present. Each capture is the maximal run of ID-alphabet characters
/// after the marker, so an ID is never taken as a prefix of a longer token.
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    for pattern in ID_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(input) {
            let candidate = &captures[1];
            if candidate.len() == VIDEO_ID_LEN {
                return Some(VideoId(candidate.to_string()));
            }
        }
    }
    None
}

/// Accept either a bare 11-character video ID or anything `extract_video_id`
/// understands. The HTTP endpoint and the CLI both take "raw ID or full URL".
pub fn resolve_video_input(input: &str) -> Option<VideoId> {
    let trimmed = input.trim();
    if trimmed.len() == VIDEO_ID_LEN && trimmed.chars().all(is_id_char) {
        return Some(VideoId(trimmed.to_string()));
    }
    extract_video_id(trimmed)
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_')
}
