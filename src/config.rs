use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub splitter: SplitterConfig,
    pub vocabulary: VocabularyConfig,
    pub worms: WormsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Directory where chunk files are written
    pub workspace: String,
    /// Maximum number of data rows per chunk file
    pub chunk_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Default geography vocabulary file
    pub geography_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WormsConfig {
    /// Base URL for the WoRMS Aphia REST service
    pub base_url: String,
    /// Restrict lookups to marine taxa
    pub marine_only: bool,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            splitter: SplitterConfig {
                workspace: "./workspace".to_string(),
                chunk_size: 10_000,
            },
            vocabulary: VocabularyConfig {
                geography_file: None, // Must be given on the command line
            },
            worms: WormsConfig {
                base_url: crate::worms::WORMS_REST_URL.to_string(),
                marine_only: false,
                timeout_secs: 30,
            },
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::VireoError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::VireoError::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), crate::VireoError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| crate::VireoError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
