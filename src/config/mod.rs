//! Configuration module for Svar.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    AgentSettings, ExecutionSettings, GeneralSettings, SearchSettings, Settings,
    TranscriptSettings, WikipediaSettings,
};
