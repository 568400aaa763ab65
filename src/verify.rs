// verify.rs is used only by the binary (manual inspection path).
#![allow(dead_code)]
use crate::fasta::{ReadRecord, TranscriptRecord};
use crate::types::{HashMap, HashMapExt};

fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

fn substring(seq: &[u8], start: usize, end: usize) -> &[u8] {
    let end = end.min(seq.len());
    let start = start.min(end);
    &seq[start..end]
}

/// Print, for each read, the substrings its mate coordinates select from the
/// ground-truth isoform (mate 1 on the forward strand, mate 2 on the reverse
/// complement) next to the sequence actually observed, for eyeball
/// comparison.
pub fn print_expected_reads(transcripts: &[TranscriptRecord], reads: &[ReadRecord]) {
    let mut strands: HashMap<&str, (&[u8], Vec<u8>)> = HashMap::new();
    for tx in transcripts {
        strands.insert(
            tx.isoform_name.as_str(),
            (tx.sequence.as_slice(), reverse_complement(&tx.sequence)),
        );
    }

    for read in reads {
        println!("Read ID: {}", read.read_id);
        let Some((forward, reverse)) = strands.get(read.isoform_name.as_str()) else {
            println!("  isoform {} not present in the transcriptome", read.isoform_name);
            continue;
        };
        println!("Expected read:");
        println!("Mate 1:");
        println!(
            "{}",
            String::from_utf8_lossy(substring(forward, read.mate1_start, read.mate1_end))
        );
        println!("Mate 2:");
        println!(
            "{}",
            String::from_utf8_lossy(substring(reverse, read.mate2_start, read.mate2_end))
        );
        println!("Actual read sequence:");
        println!("{}", String::from_utf8_lossy(&read.sequence));
    }
}
