use crate::bio::fasta;
use crate::bio::store::SequenceStore;
use crate::core::config::{load_config, Config};
use crate::core::pipeline::{run_sort, SortOptions};
use crate::core::rank::AbundanceRange;
use crate::core::relabel::RelabelPolicy;
use crate::utils::progress::spinner;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Input FASTA file (.gz supported)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output FASTA file (.gz supported); stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Minimum abundance to keep (inclusive)
    #[arg(long, value_name = "N")]
    pub min_size: Option<u64>,

    /// Maximum abundance to keep (inclusive)
    #[arg(long, value_name = "N")]
    pub max_size: Option<u64>,

    /// Emit at most N records
    #[arg(long, value_name = "N")]
    pub top_n: Option<u64>,

    /// Relabel output with this prefix plus a 1-based counter
    #[arg(long, value_name = "PREFIX", group = "relabeling")]
    pub relabel: Option<String>,

    /// Relabel output with the SHA-1 digest of each sequence
    #[arg(long, group = "relabeling")]
    pub relabel_sha1: bool,

    /// Relabel output with the MD5 digest of each sequence
    #[arg(long, group = "relabeling")]
    pub relabel_md5: bool,

    /// Append ;size=N; annotations to emitted headers
    #[arg(long)]
    pub sizeout: bool,

    /// Sequence line width (0 = single line)
    #[arg(long, value_name = "COLS")]
    pub fasta_width: Option<usize>,

    /// Suppress the median abundance report
    #[arg(long)]
    pub quiet: bool,

    /// Configuration file with defaults
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: SortArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    let range = AbundanceRange::new(
        args.min_size.unwrap_or(config.sort.min_size),
        args.max_size.or(config.sort.max_size).unwrap_or(u64::MAX),
    )?;
    let top = args.top_n.or(config.sort.top_n);
    let sizeout = args.sizeout || config.output.sizeout;
    let width = args.fasta_width.unwrap_or(config.output.fasta_width);
    let policy = relabel_policy(&args);

    // Open the sink before touching the input: a bad output path must fail
    // before any work is done.
    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => fasta::open_output(path)?,
        None => Box::new(std::io::BufWriter::new(std::io::stdout())),
    };

    let pb = spinner(&format!("Reading {}", args.input.display()));
    let store = SequenceStore::from_fasta_file(&args.input)?.with_line_width(width);
    pb.finish_and_clear();
    info!(records = store.len(), "input loaded");

    let options = SortOptions {
        range,
        top,
        policy,
        sizeout,
    };
    let summary = run_sort(&store, &options, &mut writer)?;
    writer.flush()?;

    if !args.quiet {
        eprintln!("Median abundance: {:.0}", summary.median);
    }
    info!(
        passed = summary.passed,
        median = summary.median,
        "wrote {} of {} records",
        summary.written,
        summary.total
    );

    Ok(())
}

fn relabel_policy(args: &SortArgs) -> RelabelPolicy {
    if let Some(prefix) = &args.relabel {
        RelabelPolicy::Prefix(prefix.clone())
    } else if args.relabel_sha1 {
        RelabelPolicy::Sha1
    } else if args.relabel_md5 {
        RelabelPolicy::Md5
    } else {
        RelabelPolicy::Verbatim
    }
}
