mod classify;
mod cli;
mod error;
mod fasta;
mod graph;
mod pipeline;
mod types;
mod verify;

use anyhow::Result;
use clap::Parser;
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    // Initialize tracing subscriber
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if args.quiet {
            EnvFilter::new("warn")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let transcripts = fasta::load_transcriptome(&args.transcriptome)?;
    let reads = fasta::load_reads(&args.reads)?;

    if args.verify {
        verify::print_expected_reads(&transcripts, &reads);
        return Ok(());
    }

    let graph = graph::build_graph(&transcripts, args.k as usize)?;
    tracing::info!(
        isoforms = graph.isoform_count(),
        distinct_kmers = graph.node_count(),
        k = graph.k(),
        "transcript graph built"
    );

    let stats = pipeline::run(&args, &graph, &reads)?;
    tracing::info!(
        total_reads = stats.total_reads,
        classified_reads = stats.classified_reads,
        unclassified_reads = stats.unclassified_reads,
        "sprig-rs: classification complete"
    );
    Ok(())
}
