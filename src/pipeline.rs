// pipeline.rs is used only by the binary.
#![allow(dead_code)]
use crate::classify::{Classifier, ClassifyConfig};
use crate::cli::Args;
use crate::fasta::ReadRecord;
use crate::graph::KmerGraph;
use anyhow::Result;
use std::fs::File;

#[derive(Debug, Default)]
pub struct Stats {
    pub total_reads: u64,
    pub classified_reads: u64,
    pub unclassified_reads: u64,
}

/// Classify every read against the frozen graph and write one TSV row per
/// read: read id, ground-truth isoform, compatible-isoform count,
/// comma-joined compatible isoform names.
pub fn run(args: &Args, graph: &KmerGraph, reads: &[ReadRecord]) -> Result<Stats> {
    let out = File::create(&args.out_tsv)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_writer(out);
    writer.write_record(["read_id", "true_isoform", "n_compatible", "compatible_isoforms"])?;

    let config = ClassifyConfig {
        skip: args.skip,
        max_visited: args.max_visited,
    };
    let classifier = Classifier::with_config(graph, config);

    let mut stats = Stats::default();
    for read in reads {
        let class = classifier.classify(&read.sequence)?;
        stats.total_reads += 1;
        if class.is_empty() {
            stats.unclassified_reads += 1;
        } else {
            stats.classified_reads += 1;
        }

        let mut names = graph.isoform_names(&class);
        names.sort_unstable();
        let count = class.len().to_string();
        let joined = names.join(",");
        writer.write_record([
            read.read_id.as_str(),
            read.isoform_name.as_str(),
            count.as_str(),
            joined.as_str(),
        ])?;
    }
    writer.flush()?;

    Ok(stats)
}
