pub mod cli;
pub mod config;
pub mod dwc;
pub mod worms;

pub use crate::dwc::splitter::split_text_file;
pub use crate::dwc::vocabulary::collect_geography;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VireoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service error: {0}")]
    Service(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, VireoError>;
