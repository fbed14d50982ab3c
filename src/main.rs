use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;
use vireo::cli::{Cli, Commands};

fn main() {
    // Initialize logging with VIREO_LOG environment variable support
    let log_level = std::env::var("VIREO_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<vireo::VireoError>() {
            Some(vireo::VireoError::Config(_)) => 2,
            Some(vireo::VireoError::Io(_)) => 3,
            Some(vireo::VireoError::Parse(_)) | Some(vireo::VireoError::Csv(_)) => 4,
            Some(vireo::VireoError::Vocabulary(_)) => 5,
            Some(vireo::VireoError::Http(_)) | Some(vireo::VireoError::Service(_)) => 6,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => vireo::config::load_config(path)?,
        None => vireo::config::Config::default(),
    };

    if cli.verbose > 0 {
        eprintln!("Using config: {:?}", config);
    }

    match cli.command {
        Commands::Split(args) => vireo::cli::commands::split::run(args, &config),
        Commands::Geography(args) => vireo::cli::commands::geography::run(args, &config),
        Commands::Taxon(args) => vireo::cli::commands::taxon::run(args, &config),
    }
}
