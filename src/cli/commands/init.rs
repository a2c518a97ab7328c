//! Init command - interactive first-run setup.

use crate::cli::Output;
use crate::config::Settings;
use console::style;
use std::io::{self, Write};

/// Run the init command for first-time setup.
pub fn run_init(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Svar Setup");
    println!();
    println!("Welcome to Svar! Let's make sure everything is configured correctly.\n");

    // Step 1: Check the Python interpreter
    println!("{}", style("Step 1: Checking prerequisites").bold().cyan());
    println!();

    let python_bin = &settings.execution.python_bin;
    if std::process::Command::new(python_bin)
        .arg("--version")
        .output()
        .is_err()
    {
        Output::warning(&format!("{} was not found on your PATH.", python_bin));
        println!();
        println!("  Only the execute_python_file tool needs it; everything else works without.");
        println!(
            "  {} {}",
            style("→").dim(),
            style("Install Python or set execution.python_bin in the config").dim()
        );
        println!();

        if !prompt_continue("Continue anyway?")? {
            println!();
            Output::info("Setup cancelled. Install Python and run 'svar init' again.");
            return Ok(());
        }
    } else {
        Output::success(&format!("{} is installed!", python_bin));
    }

    println!();

    // Step 2: Check API key
    println!("{}", style("Step 2: Checking API configuration").bold().cyan());
    println!();

    if std::env::var("OPENAI_API_KEY").is_err() {
        Output::warning("OPENAI_API_KEY environment variable is not set.");
        println!();
        println!("  Svar requires an OpenAI API key to run the agent.");
        println!(
            "  Get your API key from: {}",
            style("https://platform.openai.com/api-keys").underlined()
        );
        println!();
        println!("  Set it in your shell configuration (~/.bashrc, ~/.zshrc, etc.):");
        println!("  {}", style("export OPENAI_API_KEY='sk-...'").green());
        println!();

        if !prompt_continue("Continue without API key?")? {
            println!();
            Output::info("Setup cancelled. Set your API key and run 'svar init' again.");
            return Ok(());
        }
    } else {
        Output::success("OpenAI API key is configured!");
    }

    println!();

    // Step 3: Create directories
    println!("{}", style("Step 3: Setting up directories").bold().cyan());
    println!();

    let data_dir = settings.data_dir();
    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)?;
        Output::success(&format!("Created data directory: {}", data_dir.display()));
    } else {
        Output::info(&format!("Data directory exists: {}", data_dir.display()));
    }

    println!();

    // Step 4: Create config file
    println!("{}", style("Step 4: Configuration file").bold().cyan());
    println!();

    let config_path = Settings::default_config_path();
    if config_path.exists() {
        Output::info(&format!("Config file exists: {}", config_path.display()));
    } else if prompt_continue("Create default configuration file?")? {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        settings.save_to(&config_path)?;
        Output::success(&format!("Created config file: {}", config_path.display()));
        println!();
        println!("  Edit your config with: {}", style("svar config edit").green());
    } else {
        Output::info("Skipped config file creation. Using defaults.");
    }

    println!();

    // Summary
    println!("{}", style("Setup Complete!").bold().green());
    println!();
    println!("Next steps:");
    println!("  {} Check system status", style("svar doctor").cyan());
    println!(
        "  {} Ask your first question",
        style("svar ask \"<question>\"").cyan()
    );
    println!(
        "  {} Try a tool directly",
        style("svar tool get_wikipedia_info \"Rust\"").cyan()
    );
    println!();
    println!("For more help: {}", style("svar --help").cyan());

    Ok(())
}

/// Prompt user for yes/no confirmation.
fn prompt_continue(message: &str) -> io::Result<bool> {
    print!("{} {} ", style("?").cyan(), message);
    print!("{} ", style("[y/N]").dim());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_lowercase() == "y" || input.trim().to_lowercase() == "yes")
}
