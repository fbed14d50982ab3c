use crate::config::Config;
use crate::dwc::vocabulary::collect_geography;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct GeographyArgs {
    /// Darwin Core CSV file to mine for geography values
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Geography vocabulary file to append to (defaults from config)
    #[arg(short = 'o', long = "vocab", value_name = "FILE")]
    pub vocabulary: Option<PathBuf>,
}

pub fn run(args: GeographyArgs, config: &Config) -> anyhow::Result<()> {
    use crate::cli::output::*;

    let vocabulary = args
        .vocabulary
        .or_else(|| config.vocabulary.geography_file.as_ref().map(PathBuf::from))
        .ok_or_else(|| {
            crate::VireoError::Config(
                "no vocabulary file given: pass -o/--vocab or set vocabulary.geography_file"
                    .to_string(),
            )
        })?;

    let report = collect_geography(&args.input, &vocabulary)?;

    if report.added_values.is_empty() {
        success(&format!(
            "No new geography values; {} is up to date",
            vocabulary.display()
        ));
        return Ok(());
    }

    success(&format!(
        "Added {} new geography values to {}",
        report.added_values.len(),
        vocabulary.display()
    ));
    let last = report.added_values.len() - 1;
    for (i, value) in report.added_values.iter().enumerate() {
        tree_item(i == last, value, None);
    }

    Ok(())
}
