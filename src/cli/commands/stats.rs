use crate::bio::store::SequenceStore;
use crate::core::rank::{self, AbundanceRange};
use crate::utils::progress::spinner;
use clap::Args;
use colored::*;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Input FASTA file (.gz supported)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Serialize)]
pub struct AbundanceStats {
    pub records: usize,
    pub total_bases: u64,
    pub min_length: usize,
    pub mean_length: f64,
    pub max_length: usize,
    pub min_abundance: u64,
    pub mean_abundance: f64,
    pub max_abundance: u64,
    pub median_abundance: f64,
}

impl AbundanceStats {
    pub fn calculate(store: &SequenceStore) -> Self {
        let records = store.records();
        let count = records.len();

        let total_bases: u64 = records.par_iter().map(|r| r.len() as u64).sum();
        let total_abundance: u64 = records.par_iter().map(|r| r.abundance).sum();

        // Median comes from the same ranking the sort pipeline uses.
        let mut entries = rank::collect_in_range(store, AbundanceRange::default());
        rank::rank(store, &mut entries);
        let median_abundance = rank::median_abundance(&entries);

        Self {
            records: count,
            total_bases,
            min_length: records.iter().map(|r| r.len()).min().unwrap_or(0),
            mean_length: if count == 0 {
                0.0
            } else {
                total_bases as f64 / count as f64
            },
            max_length: records.iter().map(|r| r.len()).max().unwrap_or(0),
            min_abundance: records.iter().map(|r| r.abundance).min().unwrap_or(0),
            mean_abundance: if count == 0 {
                0.0
            } else {
                total_abundance as f64 / count as f64
            },
            max_abundance: records.iter().map(|r| r.abundance).max().unwrap_or(0),
            median_abundance,
        }
    }
}

pub fn run(args: StatsArgs) -> anyhow::Result<()> {
    let pb = spinner(&format!("Reading {}", args.input.display()));
    let store = SequenceStore::from_fasta_file(&args.input)?;
    pb.finish_and_clear();

    let stats = AbundanceStats::calculate(&store);

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
        _ => print_text(&stats),
    }

    Ok(())
}

fn print_text(stats: &AbundanceStats) {
    println!("{}", "Abundance Report".bold());
    println!("  Records:      {}", stats.records);
    println!("  Total bases:  {}", stats.total_bases);
    println!(
        "  Length (min/mean/max):    {} / {:.1} / {}",
        stats.min_length, stats.mean_length, stats.max_length
    );
    println!(
        "  Abundance (min/mean/max): {} / {:.1} / {}",
        stats.min_abundance, stats.mean_abundance, stats.max_abundance
    );
    println!("  Median abundance:         {:.0}", stats.median_abundance);
}
