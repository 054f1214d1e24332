//! specforge - interactive idea-to-specification assistant
//!
//! CLI entry point.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result, bail};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;

use specforge::cli::Cli;
use specforge::config::Config;
use specforge::llm;
use specforge::session::InterviewSession;

fn setup_logging(verbose: bool) -> Result<()> {
    // Log to a file, never stdout - the terminal belongs to the interview
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("specforge")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("specforge.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

/// Obtain the idea text from the CLI argument, a file, or an interactive prompt
fn obtain_idea(cli: &Cli) -> Result<String> {
    if let Some(path) = &cli.file {
        let text =
            fs::read_to_string(path).context(format!("Failed to read idea from {}", path.display()))?;
        let text = text.trim();
        if text.is_empty() {
            bail!("Idea file {} is empty", path.display());
        }
        return Ok(text.to_string());
    }

    if let Some(idea) = &cli.idea {
        let idea = idea.trim();
        if idea.is_empty() {
            bail!("Idea must not be empty");
        }
        return Ok(idea.to_string());
    }

    let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
    println!("{}", "Describe your idea in one line:".bright_cyan());

    match rl.readline(&format!("{} ", ">".bright_green())) {
        Ok(line) => {
            let idea = line.trim();
            if idea.is_empty() {
                bail!("Idea must not be empty");
            }
            Ok(idea.to_string())
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => bail!("No idea entered"),
        Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate()?;

    info!(
        "specforge loaded config: provider={}, model={}",
        config.llm.provider, config.llm.model
    );

    let idea = obtain_idea(&cli)?;
    let output_dir = cli.output_dir.clone().unwrap_or_else(|| config.output.spec_dir.clone());

    let client = llm::create_client(&config.llm).context("Failed to create completion client")?;

    let mut session = InterviewSession::new(client);
    session.run_interactive(&idea, &output_dir).await?;

    Ok(())
}
