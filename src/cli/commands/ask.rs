//! Ask command implementation.

use crate::agent::{Agent, ToolContext};
use crate::cli::preflight::{self, Operation};
use crate::cli::{truncate, Output};
use crate::config::Settings;
use anyhow::Result;

/// Run the ask command.
pub async fn run_ask(
    question: &str,
    question_id: Option<String>,
    model: Option<String>,
    settings: Settings,
) -> Result<()> {
    // Pre-flight checks
    if let Err(e) = preflight::check(Operation::Ask, &settings) {
        Output::error(&format!("{}", e));
        Output::info("Run 'svar doctor' for detailed diagnostics.");
        return Err(e.into());
    }

    let model = model.unwrap_or_else(|| settings.agent.model.clone());

    // Tell the agent which attachments apply, if any
    let context = question_id
        .as_ref()
        .map(|id| format!("The question ID is: {}", id));

    let tool_context = ToolContext::new(&settings);

    let agent = Agent::new(tool_context, &model)
        .with_max_iterations(settings.agent.max_iterations);

    let spinner = Output::spinner("Agent working...");

    match agent.run(question, context.as_deref()).await {
        Ok(response) => {
            spinner.finish_and_clear();

            // Show the agent's answer
            println!("\n{}\n", response.content);

            // Show tool calls summary
            if !response.tool_calls.is_empty() {
                Output::header(&format!("Tool calls ({})", response.tool_calls.len()));
                for call in &response.tool_calls {
                    Output::info(&format!("  {} {}", call.name, truncate(&call.arguments, 60)));
                }
                println!();
            }

            Output::info(&format!(
                "Completed in {} iteration(s)",
                response.iterations
            ));
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Agent failed: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
