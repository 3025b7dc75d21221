use crate::bio::fasta::DEFAULT_LINE_WIDTH;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub sort: SortDefaults,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SortDefaults {
    /// Inclusive lower abundance bound.
    pub min_size: u64,
    /// Inclusive upper abundance bound (absent = no upper bound).
    pub max_size: Option<u64>,
    /// Emit at most this many records (absent = all).
    pub top_n: Option<u64>,
}

impl Default for SortDefaults {
    fn default() -> Self {
        Self {
            min_size: 0,
            max_size: None,
            top_n: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Sequence line width; 0 writes each sequence on a single line.
    pub fasta_width: usize,
    /// Append `;size=N;` annotations to emitted headers.
    pub sizeout: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            fasta_width: DEFAULT_LINE_WIDTH,
            sizeout: false,
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::SeqrankError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::SeqrankError::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}
