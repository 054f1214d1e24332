//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// specforge - idea-to-specification assistant
#[derive(Parser, Debug)]
#[command(
    name = "specforge",
    about = "Interactive assistant that turns an idea into a developer-ready specification",
    version,
    after_help = "Logs are written to: ~/.local/share/specforge/logs/specforge.log"
)]
pub struct Cli {
    /// The idea to develop into a specification (prompted for if omitted)
    #[arg(value_name = "IDEA")]
    pub idea: Option<String>,

    /// Read the idea from a file instead of the command line
    #[arg(short, long, value_name = "PATH", conflicts_with = "idea")]
    pub file: Option<PathBuf>,

    /// Directory where the specification file is written
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
