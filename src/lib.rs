//! Svar - Question Answering with Tools
//!
//! A CLI agent that answers questions using web search, Wikipedia lookups,
//! YouTube transcripts, and files attached to a question.
//!
//! The name "Svar" comes from the Norwegian/Scandinavian word for "answer."
//!
//! # Overview
//!
//! Svar registers six tool adapters with an OpenAI tool-calling agent:
//!
//! - Wikipedia lookup for encyclopedic facts
//! - Web search (keyless DuckDuckGo Instant Answers)
//! - YouTube transcript retrieval
//! - Python script execution with a wall-clock timeout
//! - Python and Excel attachment reads keyed by question ID
//!
//! Every adapter shares one contract: a single string in, a single labeled
//! string out. Failures are typed internally ([`tools::ToolError`]) and
//! stringified once at the dispatch boundary, so the agent runtime never
//! sees a propagated error.
//!
//! # Architecture
//!
//! - `config` - Configuration management
//! - `tools` - The tool adapters and their failure taxonomy
//! - `agent` - Tool registration, dispatch, and the agent loop
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use svar::agent::{Agent, ToolContext};
//! use svar::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let tools = ToolContext::new(&settings);
//!     let agent = Agent::new(tools, &settings.agent.model);
//!
//!     let response = agent.run("Who composed Peer Gynt?", None).await?;
//!     println!("{}", response.content);
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod openai;
pub mod tools;

pub use error::{Result, SvarError};
