//! Agent system for question answering with tool calling.
//!
//! Provides an LLM agent that selects among six registered tool adapters
//! (Wikipedia, web search, YouTube transcript, Python execution, and
//! question-attachment reads) to answer free-form questions.

mod runner;
mod tools;

pub use runner::{Agent, AgentResponse, ToolCallRecord};
pub use tools::{parse_tool_call, tool_definitions, ToolCall, ToolContext};
