//! Tool adapters exposing external capabilities to the agent.
//!
//! Each adapter takes a single string input and produces a single
//! human-readable string, labeled with its source. Failures are typed as
//! [`ToolError`] and only stringified at the dispatch boundary, so the agent
//! runtime always receives a plain string and never a propagated error.

mod attachments;
mod python;
mod search;
mod transcript;
mod wikipedia;

pub use attachments::AttachmentStore;
pub use python::PythonRunner;
pub use search::SearchClient;
pub use transcript::TranscriptClient;
pub use wikipedia::WikipediaClient;

use thiserror::Error;

/// Failure taxonomy for tool adapters.
///
/// The `Display` strings are part of the external contract: the agent runtime
/// receives them verbatim as tool output when an adapter fails.
#[derive(Error, Debug)]
pub enum ToolError {
    /// A file derived from a question identifier does not exist.
    #[error("File {0} not found.")]
    NotFound(String),

    /// The input could not be interpreted; no external call was made.
    #[error("Error: {0}")]
    MalformedInput(String),

    /// A subprocess exceeded its wall-clock timeout.
    #[error("Error: execution timed out after {0} seconds")]
    Timeout(u64),

    /// An external API or library call failed.
    #[error("Error {0}")]
    Downstream(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_is_exact() {
        let err = ToolError::NotFound("Q42.xlsx".to_string());
        assert_eq!(err.to_string(), "File Q42.xlsx not found.");
    }

    #[test]
    fn test_failure_messages_start_with_error() {
        let timeout = ToolError::Timeout(30);
        assert!(timeout.to_string().starts_with("Error"));
        assert!(timeout.to_string().contains("30 seconds"));

        let downstream = ToolError::Downstream("retrieving transcript: boom".to_string());
        assert_eq!(
            downstream.to_string(),
            "Error retrieving transcript: boom"
        );

        let malformed = ToolError::MalformedInput("bad url".to_string());
        assert_eq!(malformed.to_string(), "Error: bad url");
    }
}
