//! CLI argument definitions for the `mnemo` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Batched multi-provider completion dispatcher.
///
/// API keys are read from the environment: ANTHROPIC_API_KEY,
/// OPENAI_API_KEY, GEMINI_API_KEY. Without an explicit --provider the
/// first configured provider in that order handles the call.
#[derive(Debug, Parser)]
#[command(name = "mnemo", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Provider override (anthropic, openai, google).
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// Model override.
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Completion token budget.
    #[arg(long, global = true)]
    pub max_tokens: Option<u32>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Send a single prompt and print the completion text.
    Complete {
        /// The prompt to send.
        prompt: String,
    },

    /// Dispatch a file of prompts (one per line) as a windowed batch.
    ///
    /// Prints one JSON value per line: the completion text on success,
    /// `{"error": "..."}` on failure, in input order. Progress goes to
    /// stderr.
    Batch {
        /// File with one prompt per line; blank lines are skipped.
        file: PathBuf,

        /// Maximum simultaneously in-flight requests.
        #[arg(long, default_value_t = 5)]
        concurrency: usize,

        /// Pause between consecutive windows, in milliseconds.
        #[arg(long, default_value_t = 200)]
        delay_ms: u64,
    },

    /// Print the per-provider model tier table.
    Models,
}
