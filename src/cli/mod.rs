// src/cli/mod.rs — CLI definition (clap derive)

pub mod doctor;
pub mod evaluate;
pub mod input;
pub mod progress;

use clap::{Parser, Subcommand};

use crate::infra::config::Config;

#[derive(Parser)]
#[command(
    name = "hackjudge",
    about = "Pre-screen a hackathon idea with a local model",
    version
)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Inference server base URL (overrides config)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Model identifier (overrides config)
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Request timeout in milliseconds, 0 for none (overrides config)
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate an idea and print the critique as JSON
    Evaluate(EvaluateArgs),
    /// List the suggested hackathon themes
    Themes,
    /// Check that the inference server is reachable and has the model
    Doctor,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct EvaluateArgs {
    /// Idea title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Hackathon theme (any string; see `hackjudge themes`)
    #[arg(long)]
    pub theme: Option<String>,

    /// Idea description
    #[arg(short, long, conflicts_with_all = ["description_file", "stdin"])]
    pub description: Option<String>,

    /// Read the description from a file
    #[arg(long, conflicts_with = "stdin")]
    pub description_file: Option<String>,

    /// Read the description from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Prompt for any field not given on the command line
    #[arg(short, long)]
    pub interactive: bool,

    /// Skip the required-field and score-format checks
    #[arg(long)]
    pub lenient: bool,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref endpoint) = self.endpoint {
            config.inference.endpoint = endpoint.clone();
        }
        if let Some(ref model) = self.model {
            config.inference.model = model.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.inference.timeout_ms = timeout_ms;
        }
    }
}
