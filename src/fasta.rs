use anyhow::{anyhow, Result};
use needletail::parse_fastx_file;
use regex::Regex;
use std::path::Path;

/// One transcriptome record: the isoform name (FASTA header) and its
/// sequence, uppercased.
#[derive(Debug, Clone)]
pub struct TranscriptRecord {
    pub isoform_name: String,
    pub sequence: Vec<u8>,
}

/// One simulated read. The isoform name and mate coordinates are the
/// simulation ground truth, kept for reporting and verification; the
/// classifier never consumes them.
#[derive(Debug, Clone)]
pub struct ReadRecord {
    pub read_id: String,
    pub isoform_name: String,
    pub mate1_start: usize,
    pub mate1_end: usize,
    pub mate2_start: usize,
    pub mate2_end: usize,
    pub sequence: Vec<u8>,
}

pub fn load_transcriptome(path: &Path) -> Result<Vec<TranscriptRecord>> {
    let mut reader = parse_fastx_file(path)
        .map_err(|e| anyhow!("failed to open transcriptome FASTA {}: {}", path.display(), e))?;
    let mut records = Vec::new();

    while let Some(result) = reader.next() {
        let record = result.map_err(|e| anyhow!("failed to parse FASTA record: {}", e))?;
        let isoform_name = std::str::from_utf8(record.id()).unwrap_or("").to_string();
        records.push(TranscriptRecord {
            isoform_name,
            sequence: normalized(&record.seq()),
        });
    }

    Ok(records)
}

/// Parse reads from a FASTA-like file whose headers carry the ground truth:
/// `read_id/isoform_name;mate1:START-END;mate2:START-END`. Records with a
/// header that does not match this layout are skipped with a warning.
pub fn load_reads(path: &Path) -> Result<Vec<ReadRecord>> {
    let header_re = Regex::new(r"^(\S+)/(\S+);mate1:(\d+)-(\d+);mate2:(\d+)-(\d+)$")?;
    let mut reader = parse_fastx_file(path)
        .map_err(|e| anyhow!("failed to open reads FASTA {}: {}", path.display(), e))?;
    let mut records = Vec::new();

    while let Some(result) = reader.next() {
        let record = result.map_err(|e| anyhow!("failed to parse read record: {}", e))?;
        let header = std::str::from_utf8(record.id()).unwrap_or("").to_string();
        let Some(caps) = header_re.captures(&header) else {
            tracing::warn!(header = %header, "read header does not match expected layout, skipping");
            continue;
        };
        records.push(ReadRecord {
            read_id: caps[1].to_string(),
            isoform_name: caps[2].to_string(),
            mate1_start: caps[3].parse()?,
            mate1_end: caps[4].parse()?,
            mate2_start: caps[5].parse()?,
            mate2_end: caps[6].parse()?,
            sequence: normalized(&record.seq()),
        });
    }

    Ok(records)
}

fn normalized(seq: &[u8]) -> Vec<u8> {
    let mut out = seq.to_vec();
    for b in &mut out {
        *b = b.to_ascii_uppercase();
    }
    out
}
