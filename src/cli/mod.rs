//! CLI module for Svar.

pub mod commands;
mod output;
pub mod preflight;

pub use output::{truncate, Output};

use clap::{Parser, Subcommand};

/// Svar - a question-answering agent
///
/// A CLI agent that answers questions using web search, Wikipedia, YouTube
/// transcripts, and attached files. The name "Svar" comes from the
/// Norwegian/Scandinavian word for "answer."
#[derive(Parser, Debug)]
#[command(name = "svar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Svar and verify system requirements
    Init,

    /// Check system requirements and configuration
    Doctor,

    /// Ask a question and let the agent answer it with tools
    Ask {
        /// The question to answer
        question: String,

        /// Question identifier for attachment lookup (e.g. "Q42")
        #[arg(short, long)]
        question_id: Option<String>,

        /// LLM model to use
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Invoke a single tool directly by its registered name
    Tool {
        /// Registered tool name (e.g. "get_wikipedia_info")
        name: String,

        /// The tool's single string input
        input: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
