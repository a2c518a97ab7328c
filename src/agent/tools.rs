//! Tool definitions and dispatch for the agent system.

use crate::config::Settings;
use crate::error::{Result, SvarError};
use crate::tools::{
    AttachmentStore, PythonRunner, SearchClient, ToolError, TranscriptClient, WikipediaClient,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Available tools for the agent.
///
/// Each variant is registered under its snake_case name and carries the
/// single string argument its adapter accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ToolCall {
    /// Look up a topic on Wikipedia.
    GetWikipediaInfo { topic: String },

    /// Execute a Python file and capture its output.
    ExecutePythonFile { file_path: String },

    /// Read the Python file attached to a question.
    GetQuestionPythonContents { question_id: String },

    /// Read the Excel file attached to a question.
    GetQuestionExcelContents { question_id: String },

    /// Fetch the transcript of a YouTube video.
    GetYoutubeTranscript { url: String },

    /// Search the web.
    GetWebSearchInfo { query: String },
}

impl ToolCall {
    /// The registered name of this tool.
    pub fn name(&self) -> &'static str {
        match self {
            ToolCall::GetWikipediaInfo { .. } => "get_wikipedia_info",
            ToolCall::ExecutePythonFile { .. } => "execute_python_file",
            ToolCall::GetQuestionPythonContents { .. } => "get_question_python_contents",
            ToolCall::GetQuestionExcelContents { .. } => "get_question_excel_contents",
            ToolCall::GetYoutubeTranscript { .. } => "get_youtube_transcript",
            ToolCall::GetWebSearchInfo { .. } => "get_web_search_info",
        }
    }
}

/// Tool execution context owning the adapter clients.
///
/// Adapters are independent: no shared cache, connection pool, or state
/// exists between them, and each call is self-contained.
pub struct ToolContext {
    wikipedia: WikipediaClient,
    search: SearchClient,
    transcript: TranscriptClient,
    python: PythonRunner,
    attachments: AttachmentStore,
}

impl ToolContext {
    /// Build the adapter clients from settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            wikipedia: WikipediaClient::new(&settings.wikipedia.language),
            search: SearchClient::new(
                settings.search.max_results,
                settings.search.timeout_seconds,
            ),
            transcript: TranscriptClient::new(&settings.transcript.language),
            python: PythonRunner::new(
                &settings.execution.python_bin,
                settings.execution.timeout_seconds,
            ),
            attachments: AttachmentStore::new(&settings.attachments_dir()),
        }
    }

    /// Execute a tool call, returning the typed result.
    pub async fn execute(&self, tool: &ToolCall) -> std::result::Result<String, ToolError> {
        match tool {
            ToolCall::GetWikipediaInfo { topic } => self.wikipedia.lookup(topic).await,
            ToolCall::ExecutePythonFile { file_path } => self.python.execute(file_path).await,
            ToolCall::GetQuestionPythonContents { question_id } => {
                self.attachments.python_contents(question_id).await
            }
            ToolCall::GetQuestionExcelContents { question_id } => {
                self.attachments.excel_contents(question_id).await
            }
            ToolCall::GetYoutubeTranscript { url } => self.transcript.fetch(url).await,
            ToolCall::GetWebSearchInfo { query } => self.search.search(query).await,
        }
    }

    /// Execute a tool call and flatten the result into the string contract
    /// the agent runtime expects. Failures are returned as their `Display`
    /// text; nothing propagates to the caller.
    pub async fn dispatch(&self, tool: &ToolCall) -> String {
        info!("Executing {} tool", tool.name());

        match self.execute(tool).await {
            Ok(output) => output,
            Err(e) => e.to_string(),
        }
    }
}

/// Get OpenAI function/tool definitions for the agent.
pub fn tool_definitions() -> Vec<async_openai::types::ChatCompletionTool> {
    use async_openai::types::{ChatCompletionTool, ChatCompletionToolType, FunctionObject};

    fn single_string_tool(name: &str, description: &str, arg: &str, arg_desc: &str) -> ChatCompletionTool {
        let mut properties = serde_json::Map::new();
        properties.insert(
            arg.to_string(),
            serde_json::json!({ "type": "string", "description": arg_desc }),
        );

        ChatCompletionTool {
            r#type: ChatCompletionToolType::Function,
            function: FunctionObject {
                name: name.to_string(),
                description: Some(description.to_string()),
                parameters: Some(serde_json::json!({
                    "type": "object",
                    "properties": properties,
                    "required": [arg]
                })),
                strict: None,
            },
        }
    }

    vec![
        single_string_tool(
            "get_wikipedia_info",
            "Retrieves information from Wikipedia about a given topic or query. \
             Input should be a topic name or search query.",
            "topic",
            "The topic or search query",
        ),
        single_string_tool(
            "execute_python_file",
            "Executes a given Python file and returns its stdout and stderr output \
             as a string. Input should be the path to a .py file.",
            "file_path",
            "Path to the .py file to execute",
        ),
        single_string_tool(
            "get_question_python_contents",
            "Returns the contents of the attached Python file with the same name \
             as the question ID.",
            "question_id",
            "The question identifier",
        ),
        single_string_tool(
            "get_question_excel_contents",
            "Given a question ID string, returns the contents of the Excel file \
             with the same name as the question ID.",
            "question_id",
            "The question identifier",
        ),
        single_string_tool(
            "get_youtube_transcript",
            "Retrieves the transcript of a YouTube video. Input should be a \
             YouTube video URL (e.g., https://www.youtube.com/watch?v=VIDEO_ID).",
            "url",
            "The YouTube video URL",
        ),
        single_string_tool(
            "get_web_search_info",
            "Retrieves information from a web search about a given topic or query. \
             Input should be a search term or topic.",
            "query",
            "The search query",
        ),
    ]
}

/// Parse a tool call from the OpenAI response format.
pub fn parse_tool_call(name: &str, arguments: &str) -> Result<ToolCall> {
    let args: serde_json::Value = serde_json::from_str(arguments)
        .map_err(|e| SvarError::Agent(format!("Invalid tool arguments: {}", e)))?;

    let required = |key: &str| -> Result<String> {
        args[key]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| SvarError::Agent(format!("Missing '{}' argument", key)))
    };

    match name {
        "get_wikipedia_info" => Ok(ToolCall::GetWikipediaInfo {
            topic: required("topic")?,
        }),
        "execute_python_file" => Ok(ToolCall::ExecutePythonFile {
            file_path: required("file_path")?,
        }),
        "get_question_python_contents" => Ok(ToolCall::GetQuestionPythonContents {
            question_id: required("question_id")?,
        }),
        "get_question_excel_contents" => Ok(ToolCall::GetQuestionExcelContents {
            question_id: required("question_id")?,
        }),
        "get_youtube_transcript" => Ok(ToolCall::GetYoutubeTranscript {
            url: required("url")?,
        }),
        "get_web_search_info" => Ok(ToolCall::GetWebSearchInfo {
            query: required("query")?,
        }),
        _ => Err(SvarError::Agent(format!("Unknown tool: {}", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context_with_attachments(dir: &std::path::Path) -> ToolContext {
        let mut settings = Settings::default();
        settings.general.attachments_dir = dir.to_string_lossy().to_string();
        ToolContext::new(&settings)
    }

    #[test]
    fn test_parse_wikipedia_tool() {
        let tool = parse_tool_call("get_wikipedia_info", r#"{"topic": "Rust"}"#).unwrap();
        match tool {
            ToolCall::GetWikipediaInfo { topic } => assert_eq!(topic, "Rust"),
            _ => panic!("Expected GetWikipediaInfo tool"),
        }
    }

    #[test]
    fn test_parse_excel_tool() {
        let tool =
            parse_tool_call("get_question_excel_contents", r#"{"question_id": "Q42"}"#).unwrap();
        match tool {
            ToolCall::GetQuestionExcelContents { question_id } => assert_eq!(question_id, "Q42"),
            _ => panic!("Expected GetQuestionExcelContents tool"),
        }
    }

    #[test]
    fn test_parse_missing_argument() {
        let result = parse_tool_call("get_youtube_transcript", r#"{}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_unknown_tool() {
        let result = parse_tool_call("list_models", r#"{}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_tool_names_match_definitions() {
        let registered: Vec<String> = tool_definitions()
            .into_iter()
            .map(|t| t.function.name)
            .collect();

        for call in [
            ToolCall::GetWikipediaInfo { topic: String::new() },
            ToolCall::ExecutePythonFile { file_path: String::new() },
            ToolCall::GetQuestionPythonContents { question_id: String::new() },
            ToolCall::GetQuestionExcelContents { question_id: String::new() },
            ToolCall::GetYoutubeTranscript { url: String::new() },
            ToolCall::GetWebSearchInfo { query: String::new() },
        ] {
            assert!(registered.contains(&call.name().to_string()));
        }
        assert_eq!(registered.len(), 6);
    }

    #[tokio::test]
    async fn test_dispatch_missing_excel_returns_exact_string() {
        let dir = TempDir::new().unwrap();
        let context = context_with_attachments(dir.path());

        let result = context
            .dispatch(&ToolCall::GetQuestionExcelContents {
                question_id: "Q42".to_string(),
            })
            .await;

        assert_eq!(result, "File Q42.xlsx not found.");
    }

    #[tokio::test]
    async fn test_dispatch_malformed_youtube_url_returns_literal_message() {
        let dir = TempDir::new().unwrap();
        let context = context_with_attachments(dir.path());

        let result = context
            .dispatch(&ToolCall::GetYoutubeTranscript {
                url: "https://vimeo.com/12345".to_string(),
            })
            .await;

        assert_eq!(
            result,
            "Error: Could not extract video ID from the provided URL. \
             Please provide a valid YouTube URL."
        );
    }
}
