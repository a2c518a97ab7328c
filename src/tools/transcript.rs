//! YouTube transcript retrieval.
//!
//! Extracts the video ID locally, then fetches the watch page to discover
//! caption tracks and downloads the timedtext XML for the preferred language.
//! Malformed URLs fail before any network traffic.

use super::ToolError;
use regex::Regex;
use serde::Deserialize;
use std::time::Duration;

/// Default timeout for transcript-related HTTP requests.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Returned when the input matches none of the recognized URL shapes.
const EXTRACTION_FAILURE: &str =
    "Could not extract video ID from the provided URL. Please provide a valid YouTube URL.";

/// A caption track entry from the watch page player config.
#[derive(Debug, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode", default)]
    language_code: Option<String>,
}

/// Client for fetching YouTube video transcripts.
pub struct TranscriptClient {
    http: reqwest::Client,
    video_id_regex: Regex,
    language: String,
}

impl TranscriptClient {
    /// Create a client preferring caption tracks in `language` (e.g. "en").
    pub fn new(language: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        // Matches various YouTube URL formats and bare video IDs. The ID is
        // anchored to exactly 11 characters so trailing query parameters are
        // never absorbed into it.
        let video_id_regex = Regex::new(
            r"(?x)
            (?:
                # Full YouTube URLs
                (?:https?://)?
                (?:www\.)?
                (?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/)
                ([a-zA-Z0-9_-]{11})
            )
            |
            # Bare video ID (11 characters)
            ^([a-zA-Z0-9_-]{11})$
        ",
        )
        .expect("Invalid regex");

        Self {
            http,
            video_id_regex,
            language: language.to_string(),
        }
    }

    /// Extract the video ID from a YouTube URL or bare ID.
    fn extract_video_id(&self, input: &str) -> Option<String> {
        let caps = self.video_id_regex.captures(input.trim())?;

        // Try group 1 (URL format) then group 2 (bare ID)
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    }

    /// Fetch the transcript for a video URL and return it as labeled text.
    pub async fn fetch(&self, url: &str) -> Result<String, ToolError> {
        let video_id = self
            .extract_video_id(url)
            .ok_or_else(|| ToolError::MalformedInput(EXTRACTION_FAILURE.to_string()))?;

        let watch_url = format!("https://www.youtube.com/watch?v={}", video_id);
        let page = self
            .http
            .get(&watch_url)
            .send()
            .await
            .map_err(|e| downstream(format!("request failed: {}", e)))?
            .text()
            .await
            .map_err(|e| downstream(format!("invalid response: {}", e)))?;

        let tracks = parse_caption_tracks(&page)
            .ok_or_else(|| downstream(format!("no captions available for video {}", video_id)))?;

        let track = tracks
            .iter()
            .find(|t| t.language_code.as_deref() == Some(self.language.as_str()))
            .or_else(|| tracks.first())
            .ok_or_else(|| downstream(format!("no caption tracks for video {}", video_id)))?;

        let xml = self
            .http
            .get(&track.base_url)
            .send()
            .await
            .map_err(|e| downstream(format!("caption download failed: {}", e)))?
            .text()
            .await
            .map_err(|e| downstream(format!("invalid caption response: {}", e)))?;

        let transcript = parse_timedtext(&xml);
        if transcript.is_empty() {
            return Err(downstream(format!("empty transcript for video {}", video_id)));
        }

        Ok(format!("Transcript for video {}:\n\n{}", video_id, transcript))
    }
}

fn downstream(message: String) -> ToolError {
    ToolError::Downstream(format!("retrieving transcript: {}", message))
}

/// Locate and deserialize the `captionTracks` array embedded in the watch
/// page player config. Track objects contain no nested arrays, so a
/// non-greedy match to the first `]` captures the whole array.
fn parse_caption_tracks(page: &str) -> Option<Vec<CaptionTrack>> {
    let re = Regex::new(r#""captionTracks":(\[.*?\])"#).expect("Invalid regex");
    let raw = re.captures(page)?.get(1)?.as_str();
    serde_json::from_str(raw).ok()
}

/// Flatten timedtext XML into a single line of decoded text.
fn parse_timedtext(xml: &str) -> String {
    let re = Regex::new(r"(?s)<text[^>]*>(.*?)</text>").expect("Invalid regex");

    re.captures_iter(xml)
        .map(|caps| decode_entities(caps[1].trim()))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode the XML entities YouTube uses in caption text.
fn decode_entities(text: &str) -> String {
    text.replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id() {
        let client = TranscriptClient::new("en");

        // Test various URL formats
        assert_eq!(
            client.extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            client.extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            client.extract_video_id("https://youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            client.extract_video_id("https://youtube.com/v/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            client.extract_video_id("dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );

        // Test invalid inputs
        assert_eq!(client.extract_video_id("not-a-video-id"), None);
        assert_eq!(client.extract_video_id(""), None);
    }

    #[test]
    fn test_extract_video_id_ignores_query_parameters() {
        let client = TranscriptClient::new("en");
        assert_eq!(
            client.extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10s"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[tokio::test]
    async fn test_fetch_rejects_malformed_url_without_network() {
        let client = TranscriptClient::new("en");
        let err = client.fetch("https://example.com/video").await.unwrap_err();
        assert_eq!(err.to_string(), format!("Error: {}", EXTRACTION_FAILURE));
    }

    #[test]
    fn test_parse_caption_tracks() {
        let page = r#"...,"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc","languageCode":"en","name":{"simpleText":"English"}},{"baseUrl":"https://www.youtube.com/api/timedtext?v=abc&lang=de","languageCode":"de"}]}},..."#;

        let tracks = parse_caption_tracks(page).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].language_code.as_deref(), Some("en"));
        // serde_json resolves the & escape during deserialization
        assert!(tracks[1].base_url.ends_with("&lang=de"));
    }

    #[test]
    fn test_parse_caption_tracks_absent() {
        assert!(parse_caption_tracks("<html>no captions here</html>").is_none());
    }

    #[test]
    fn test_parse_timedtext() {
        let xml = r#"<?xml version="1.0"?><transcript>
            <text start="0.0" dur="2.5">Never gonna give</text>
            <text start="2.5" dur="2.0">you up &amp; let you down</text>
            <text start="4.5" dur="1.0">it&#39;s true</text>
        </transcript>"#;

        assert_eq!(
            parse_timedtext(xml),
            "Never gonna give you up & let you down it's true"
        );
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("a &amp; b"), "a & b");
        assert_eq!(decode_entities("&quot;hi&quot;"), "\"hi\"");
        assert_eq!(decode_entities("&lt;tag&gt;"), "<tag>");
    }
}
