pub mod bio;
pub mod cli;
pub mod core;
pub mod utils;

pub use crate::bio::store::SequenceStore;
pub use crate::core::pipeline::{run_sort, SortOptions, SortSummary};
pub use crate::core::relabel::RelabelPolicy;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqrankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SeqrankError>;
