use crate::config::Config;
use crate::dwc::splitter::split_text_file;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Args)]
pub struct SplitArgs {
    /// Delimited text file to split
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Directory for the chunk files (defaults from config)
    #[arg(short, long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Maximum number of data rows per chunk file (defaults from config)
    #[arg(short, long, value_name = "ROWS")]
    pub chunk_size: Option<usize>,
}

pub fn run(args: SplitArgs, config: &Config) -> anyhow::Result<()> {
    use crate::cli::output::*;

    let workspace = args
        .workspace
        .unwrap_or_else(|| PathBuf::from(&config.splitter.workspace));
    let chunk_size = args.chunk_size.unwrap_or(config.splitter.chunk_size);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Splitting {}...", args.input.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let report = split_text_file(&args.input, &workspace, chunk_size)?;
    pb.finish_and_clear();

    success(&format!(
        "Split {} rows into {} chunks of {} or less in {}",
        report.rows,
        report.chunks,
        chunk_size,
        workspace.display()
    ));
    tree_item(false, "Pattern", Some(&format!("{}-<n>", report.file_pattern)));
    tree_item(false, "Extension", Some(&report.file_ext));
    tree_item(true, "Rows", Some(&report.rows.to_string()));

    Ok(())
}
