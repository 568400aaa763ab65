// cli.rs is used only by the binary.
#![allow(dead_code)]
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sprig-rs",
    about = "Classify sequencing reads against a k-mer transcript graph",
    version
)]
pub struct Args {
    /// Transcriptome FASTA, one record per isoform
    pub transcriptome: PathBuf,

    /// Reads FASTA with `id/isoform;mate1:S-E;mate2:S-E` headers
    pub reads: PathBuf,

    /// k-mer length
    #[arg(short = 'k', long = "kmer-len", default_value_t = 31, value_parser = clap::value_parser!(u32).range(1..))]
    pub k: u32,

    /// Output TSV path
    #[arg(short = 'o', long = "out", value_name = "TSV")]
    pub out_tsv: PathBuf,

    /// Classify with the contig-skipping traversal instead of the plain scan
    #[arg(long)]
    pub skip: bool,

    /// Skip mode: stop intersecting after this many distinct nodes per read
    #[arg(long, value_name = "N")]
    pub max_visited: Option<usize>,

    /// Print expected vs. actual read substrings instead of classifying
    #[arg(long)]
    pub verify: bool,

    /// Suppress progress output and set logging level to WARN
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
