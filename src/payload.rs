use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::language_utils;
use crate::session::TrackSlot;

// @module: Intercepted subtitle payload boundary

// @const: URL shapes that look like subtitle requests
static SUBTITLE_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(sub|subtitle|captions?|\.vtt|\.srt)").unwrap());

/// Raw subtitle document handed over by the network-interception
/// collaborator. `url` and `content_type` feed the format and language
/// heuristics only; `text` is the document body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtitlePayload {
    pub url: String,

    pub text: String,

    #[serde(default)]
    pub content_type: String,
}

impl SubtitlePayload {
    pub fn new(
        url: impl Into<String>,
        text: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        SubtitlePayload {
            url: url.into(),
            text: text.into(),
            content_type: content_type.into(),
        }
    }

    /// Whether a request plausibly carries subtitles, judged from its URL
    /// and content type alone.
    pub fn looks_like_subtitle(url: &str, content_type: &str) -> bool {
        if url.is_empty() {
            return false;
        }
        let lowered = content_type.to_lowercase();
        SUBTITLE_URL_PATTERN.is_match(url) || lowered.contains("vtt") || lowered.contains("srt")
    }

    /// Format hint string for the reader: `".vtt"` when the URL or content
    /// type names WebVTT, `".srt"` otherwise.
    pub fn format_hint(&self) -> &'static str {
        if self.url.to_lowercase().contains(".vtt") || self.content_type.to_lowercase().contains("vtt")
        {
            ".vtt"
        } else {
            ".srt"
        }
    }

    /// Decide which language slot this payload belongs to by looking for
    /// the configured language codes in the URL. Primary wins when the URL
    /// somehow names both. `None` when the URL names neither.
    pub fn detect_slot(&self, primary_language: &str, secondary_language: &str) -> Option<TrackSlot> {
        if language_utils::url_mentions_language(&self.url, primary_language) {
            Some(TrackSlot::Primary)
        } else if language_utils::url_mentions_language(&self.url, secondary_language) {
            Some(TrackSlot::Secondary)
        } else {
            None
        }
    }
}
