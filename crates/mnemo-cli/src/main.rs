//! mnemo CLI entry point.
//!
//! Binary name: `mnemo`
//!
//! Parses CLI arguments, loads credentials from the environment, builds the
//! dispatcher over the three vendor adapters, and runs the requested
//! command.

mod cli;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mnemo_core::dispatcher::Dispatcher;
use mnemo_core::{catalog, resolver};
use mnemo_infra::credentials::credentials_from_env;
use mnemo_infra::llm::default_registry;
use mnemo_types::dispatch::CallOptions;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info,mnemo=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let mut options = CallOptions {
        provider: cli.provider,
        model: cli.model,
        ..CallOptions::default()
    };
    if let Some(max_tokens) = cli.max_tokens {
        options.max_tokens = max_tokens;
    }

    match cli.command {
        Commands::Complete { prompt } => {
            let dispatcher = Dispatcher::new(default_registry(), credentials_from_env());
            let text = dispatcher.call(&prompt, &options).await?;
            println!("{text}");
        }

        Commands::Batch {
            file,
            concurrency,
            delay_ms,
        } => {
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let prompts: Vec<String> = contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            if prompts.is_empty() {
                anyhow::bail!("no prompts in {}", file.display());
            }

            options.concurrency = concurrency;
            options.delay_ms = delay_ms;

            let dispatcher = Dispatcher::new(default_registry(), credentials_from_env());
            let mut rx = dispatcher.progress().subscribe();
            let printer = tokio::spawn(async move {
                while let Ok(progress) = rx.recv().await {
                    eprintln!("{}/{} prompts completed", progress.completed, progress.total);
                }
            });

            let results = dispatcher.batch_call(&prompts, &options).await;
            printer.abort();

            for item in &results {
                println!("{}", serde_json::to_string(item)?);
            }

            let failed = results.iter().filter(|item| item.is_failure()).count();
            if failed > 0 {
                tracing::warn!(failed, total = results.len(), "batch finished with failures");
            }
        }

        Commands::Models => {
            for provider in resolver::PROVIDER_PRIORITY {
                let table = catalog::tiers(provider);
                println!("{provider}:");
                println!("  cheap: {}", table.cheap);
                println!("  mid:   {}", table.mid);
                println!("  best:  {}", table.best);
            }
        }
    }

    Ok(())
}
