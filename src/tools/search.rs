//! Web search via the DuckDuckGo Instant Answer API.
//!
//! The Instant Answer API is keyless, which keeps this adapter runnable
//! without any search credentials configured.

use super::ToolError;
use std::time::Duration;

/// Client for keyless web search.
pub struct SearchClient {
    http: reqwest::Client,
    max_results: usize,
}

impl SearchClient {
    /// Create a search client returning at most `max_results` related topics.
    pub fn new(max_results: usize, timeout_seconds: u64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { http, max_results }
    }

    /// Search the web and return a labeled, numbered result list.
    pub async fn search(&self, query: &str) -> Result<String, ToolError> {
        let response = self
            .http
            .get("https://api.duckduckgo.com/")
            .query(&[
                ("q", query),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .send()
            .await
            .map_err(|e| downstream(format!("request failed: {}", e)))?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| downstream(format!("invalid response: {}", e)))?;

        Ok(format_results(&json, query, self.max_results))
    }
}

fn downstream(message: String) -> ToolError {
    ToolError::Downstream(format!("retrieving search information: {}", message))
}

/// Format an Instant Answer response as a numbered result list.
fn format_results(json: &serde_json::Value, query: &str, max_results: usize) -> String {
    let mut sections = Vec::new();

    if let Some(summary) = json["Abstract"].as_str().filter(|s| !s.is_empty()) {
        sections.push(format!("Summary: {}", summary));
    }

    if let Some(topics) = json["RelatedTopics"].as_array() {
        let mut entries = Vec::new();
        for topic in topics {
            if entries.len() >= max_results {
                break;
            }
            if let (Some(text), Some(url)) = (topic["Text"].as_str(), topic["FirstURL"].as_str()) {
                entries.push(format!("{}. {}\n   {}", entries.len() + 1, text, url));
            }
        }
        if !entries.is_empty() {
            sections.push(entries.join("\n"));
        }
    }

    if sections.is_empty() {
        format!(
            "No search results found for '{}'. Please try a different search term.",
            query
        )
    } else {
        format!(
            "Search results for '{}':\n\n{}",
            query,
            sections.join("\n\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_results_with_abstract_and_topics() {
        let response = json!({
            "Abstract": "Rust is a systems programming language.",
            "RelatedTopics": [
                { "Text": "Rust (programming language)", "FirstURL": "https://example.org/rust" },
                { "Text": "Cargo", "FirstURL": "https://example.org/cargo" }
            ]
        });

        let result = format_results(&response, "rust", 5);
        assert!(result.starts_with("Search results for 'rust':"));
        assert!(result.contains("Summary: Rust is a systems programming language."));
        assert!(result.contains("1. Rust (programming language)"));
        assert!(result.contains("2. Cargo"));
    }

    #[test]
    fn test_format_results_caps_at_max() {
        let topics: Vec<_> = (0..10)
            .map(|i| json!({ "Text": format!("topic {}", i), "FirstURL": "https://example.org" }))
            .collect();
        let response = json!({ "Abstract": "", "RelatedTopics": topics });

        let result = format_results(&response, "q", 3);
        assert!(result.contains("3. topic 2"));
        assert!(!result.contains("4. topic 3"));
    }

    #[test]
    fn test_format_results_empty() {
        let response = json!({ "Abstract": "", "RelatedTopics": [] });
        let result = format_results(&response, "nothing", 5);
        assert_eq!(
            result,
            "No search results found for 'nothing'. Please try a different search term."
        );
    }

    #[test]
    fn test_format_results_skips_grouped_topics() {
        // Disambiguation groups carry "Topics" instead of "Text"/"FirstURL".
        let response = json!({
            "RelatedTopics": [
                { "Topics": [ { "Text": "nested", "FirstURL": "https://example.org" } ] },
                { "Text": "flat", "FirstURL": "https://example.org/flat" }
            ]
        });

        let result = format_results(&response, "q", 5);
        assert!(result.contains("1. flat"));
        assert!(!result.contains("nested"));
    }
}
