pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "seqrank",
    version,
    about = "Abundance-ranked sorting and relabeling of FASTA records",
    long_about = "Seqrank orders FASTA records by their abundance annotations, \
                  restricts them to an abundance window, reports the median \
                  abundance, and rewrites headers under verbatim, prefix, or \
                  digest labeling schemes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Number of threads to use (0 = all available)
    #[arg(short = 'j', long, default_value = "0", global = true)]
    pub threads: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort records by abundance and relabel them
    Sort(commands::sort::SortArgs),

    /// Show abundance and length statistics for a FASTA file
    Stats(commands::stats::StatsArgs),
}
