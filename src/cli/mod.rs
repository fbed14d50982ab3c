pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "vireo",
    version,
    about = "Darwin Core data preparation utilities for biodiversity workflows",
    long_about = "Vireo prepares Darwin Core occurrence data for curation workflows: \
                  splitting large delimited files into header-carrying chunks, collecting \
                  distinct geography combinations into a controlled vocabulary, and \
                  resolving taxon names against the WoRMS Aphia name services."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML configuration file with fallback defaults
    #[arg(long, value_name = "FILE", global = true, env = "VIREO_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a delimited text file into fixed-size chunks with headers
    Split(commands::split::SplitArgs),

    /// Collect distinct geography combinations into a vocabulary file
    Geography(commands::geography::GeographyArgs),

    /// Look up a taxon name in the WoRMS registry
    Taxon(commands::taxon::TaxonArgs),
}
