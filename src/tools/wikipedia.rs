//! Wikipedia lookup via the MediaWiki query API.

use super::ToolError;
use std::time::Duration;

/// Default timeout for Wikipedia API requests.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for retrieving article summaries from Wikipedia.
pub struct WikipediaClient {
    http: reqwest::Client,
    language: String,
}

impl WikipediaClient {
    /// Create a client querying the Wikipedia edition for `language` (e.g. "en").
    pub fn new(language: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            language: language.to_string(),
        }
    }

    /// Look up a topic and return a labeled plain-text summary.
    pub async fn lookup(&self, topic: &str) -> Result<String, ToolError> {
        let url = format!("https://{}.wikipedia.org/w/api.php", self.language);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("action", "query"),
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("format", "json"),
                ("titles", topic),
            ])
            .send()
            .await
            .map_err(|e| downstream(format!("request failed: {}", e)))?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| downstream(format!("invalid response: {}", e)))?;

        Ok(summarize(&json, topic))
    }
}

fn downstream(message: String) -> ToolError {
    ToolError::Downstream(format!("retrieving Wikipedia information: {}", message))
}

/// Build the tool output from a MediaWiki extracts response.
///
/// The `pages` object is keyed by page ID; a missing page is reported under
/// the sentinel ID "-1" with a `missing` marker.
fn summarize(json: &serde_json::Value, topic: &str) -> String {
    let extract = json["query"]["pages"]
        .as_object()
        .and_then(|pages| pages.values().next())
        .filter(|page| page.get("missing").is_none())
        .and_then(|page| page["extract"].as_str())
        .filter(|text| !text.is_empty());

    match extract {
        Some(text) => format!("Wikipedia information for '{}':\n\n{}", topic, text),
        None => format!(
            "No Wikipedia information found for '{}'. Please try a different search term.",
            topic
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summarize_found_page() {
        let response = json!({
            "query": {
                "pages": {
                    "9228": {
                        "pageid": 9228,
                        "title": "Edvard Grieg",
                        "extract": "Edvard Grieg was a Norwegian composer."
                    }
                }
            }
        });

        let result = summarize(&response, "Edvard Grieg");
        assert!(result.starts_with("Wikipedia information for 'Edvard Grieg':"));
        assert!(result.contains("Norwegian composer"));
    }

    #[test]
    fn test_summarize_missing_page() {
        let response = json!({
            "query": {
                "pages": {
                    "-1": { "title": "Xyzzyplugh", "missing": "" }
                }
            }
        });

        let result = summarize(&response, "Xyzzyplugh");
        assert_eq!(
            result,
            "No Wikipedia information found for 'Xyzzyplugh'. Please try a different search term."
        );
    }

    #[test]
    fn test_summarize_empty_extract() {
        let response = json!({
            "query": { "pages": { "5": { "extract": "" } } }
        });

        let result = summarize(&response, "Blank");
        assert!(result.starts_with("No Wikipedia information found"));
    }
}
