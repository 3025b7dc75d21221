use clap::Parser;
use colored::*;
use seqrank::cli::{Cli, Commands};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging with SEQRANK_LOG environment variable support
    let log_level = std::env::var("SEQRANK_LOG").unwrap_or_else(|_| "warn".to_string());

    // Logs go to stderr; stdout is reserved for emitted records
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<seqrank::SeqrankError>() {
            Some(seqrank::SeqrankError::Config(_)) => 2,
            Some(seqrank::SeqrankError::Io(_)) => 3,
            Some(seqrank::SeqrankError::Parse(_)) => 4,
            Some(seqrank::SeqrankError::InvalidInput(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    seqrank::utils::parallel::configure_thread_pool(cli.threads)
        .map_err(|e| anyhow::anyhow!("Failed to initialize thread pool: {}", e))?;

    if cli.verbose > 0 {
        eprintln!("Using {} threads", rayon::current_num_threads());
    }

    match cli.command {
        Commands::Sort(args) => seqrank::cli::commands::sort::run(args),
        Commands::Stats(args) => seqrank::cli::commands::stats::run(args),
    }
}
