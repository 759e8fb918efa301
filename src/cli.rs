//! CLI interface for the resume matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Score how well a resume matches a job description")]
#[command(
    long_about = "Analyze resume compatibility with a job description using embeddings, \
                  a skill taxonomy, and experience/education heuristics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to the resume as plain text
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to the job description as plain text
        #[arg(short, long)]
        job: PathBuf,

        /// Embedding model directory (overrides the configured model)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Use the deterministic hashing embedder instead of a model
        #[arg(long)]
        no_model: bool,

        /// Emit the raw analysis result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the skill categories and canonical labels the matcher detects
    Skills,

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}
