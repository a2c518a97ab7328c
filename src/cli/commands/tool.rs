//! Tool command - invoke a single adapter directly.
//!
//! Exposes the registered name → (string-in, string-out) contract for
//! humans: the same dispatch path the agent uses, without an LLM in front.

use crate::agent::{ToolCall, ToolContext};
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the tool command.
pub async fn run_tool(name: &str, input: &str, settings: Settings) -> Result<()> {
    preflight::check(Operation::Tool, &settings)?;

    let tool = match tool_from_input(name, input) {
        Some(tool) => tool,
        None => {
            Output::error(&format!("Unknown tool: {}", name));
            Output::info("Available tools:");
            for registered in registered_names() {
                println!("  {}", registered);
            }
            anyhow::bail!("unknown tool: {}", name);
        }
    };

    let context = ToolContext::new(&settings);
    let result = context.dispatch(&tool).await;

    println!("{}", result);
    Ok(())
}

/// Map a registered tool name and its single string input to a `ToolCall`.
fn tool_from_input(name: &str, input: &str) -> Option<ToolCall> {
    let input = input.to_string();
    match name {
        "get_wikipedia_info" => Some(ToolCall::GetWikipediaInfo { topic: input }),
        "execute_python_file" => Some(ToolCall::ExecutePythonFile { file_path: input }),
        "get_question_python_contents" => {
            Some(ToolCall::GetQuestionPythonContents { question_id: input })
        }
        "get_question_excel_contents" => {
            Some(ToolCall::GetQuestionExcelContents { question_id: input })
        }
        "get_youtube_transcript" => Some(ToolCall::GetYoutubeTranscript { url: input }),
        "get_web_search_info" => Some(ToolCall::GetWebSearchInfo { query: input }),
        _ => None,
    }
}

fn registered_names() -> [&'static str; 6] {
    [
        "get_wikipedia_info",
        "execute_python_file",
        "get_question_python_contents",
        "get_question_excel_contents",
        "get_youtube_transcript",
        "get_web_search_info",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_from_input_maps_all_registered_names() {
        for name in registered_names() {
            let tool = tool_from_input(name, "x").expect("registered name should map");
            assert_eq!(tool.name(), name);
        }
    }

    #[test]
    fn test_tool_from_input_rejects_unknown() {
        assert!(tool_from_input("get_huggingface_models", "x").is_none());
    }

    #[tokio::test]
    async fn test_run_tool_needs_no_api_key() {
        // Attachment tools run locally; the command succeeds and reports
        // the missing file as its result string
        let dir = tempfile::TempDir::new().unwrap();
        let mut settings = Settings::default();
        settings.general.attachments_dir = dir.path().to_string_lossy().to_string();

        let result = run_tool("get_question_excel_contents", "Q42", settings).await;
        assert!(result.is_ok());
    }
}
