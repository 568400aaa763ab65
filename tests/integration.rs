/// End-to-end tests running the sprig-rs binary on small FASTA inputs
/// written to a scratch directory.
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// ── helpers ──────────────────────────────────────────────────────────────────

fn sprig_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sprig-rs"))
}

const TRANSCRIPTOME: &str = ">iso1\nAAACCCGGG\n>iso2\nTTTAAACCC\n";

const READS: &str = concat!(
    ">r1/iso1;mate1:0-6;mate2:0-6\nAAACCC\n",
    ">r2/iso1;mate1:0-6;mate2:0-6\nAAATTT\n",
    ">not a parseable header\nAAACCC\n",
);

fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let transcriptome = dir.join("transcriptome.fasta");
    let reads = dir.join("reads.fasta");
    fs::write(&transcriptome, TRANSCRIPTOME).expect("write transcriptome");
    fs::write(&reads, READS).expect("write reads");
    (transcriptome, reads)
}

fn run_binary(transcriptome: &Path, reads: &Path, out: &Path, extra: &[&str]) {
    let status = Command::new(sprig_bin())
        .arg(transcriptome)
        .arg(reads)
        .args(["-k", "3", "-o"])
        .arg(out)
        .arg("-q")
        .args(extra)
        .status()
        .expect("failed to spawn sprig-rs");
    assert!(status.success(), "sprig-rs exited with status {status}");
}

// ── tests ─────────────────────────────────────────────────────────────────────

/// Full run: build the graph, classify both well-formed reads, skip the
/// malformed header, and emit one TSV row per read.
#[test]
fn classifies_reads_end_to_end() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let (transcriptome, reads) = write_inputs(dir.path());
    let out = dir.path().join("classifications.tsv");

    run_binary(&transcriptome, &reads, &out, &[]);

    let tsv = fs::read_to_string(&out).expect("read output TSV");
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(
        lines,
        vec![
            "read_id\ttrue_isoform\tn_compatible\tcompatible_isoforms",
            // AAACCC lies in the region iso1 and iso2 share
            "r1\tiso1\t2\tiso1,iso2",
            // AAT is in no transcript, so the read is unclassifiable
            "r2\tiso1\t0\t",
        ]
    );
}

/// `--skip` must produce byte-identical output to the default scan.
#[test]
fn skip_mode_matches_scan_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let (transcriptome, reads) = write_inputs(dir.path());
    let scan_out = dir.path().join("scan.tsv");
    let skip_out = dir.path().join("skip.tsv");

    run_binary(&transcriptome, &reads, &scan_out, &[]);
    run_binary(&transcriptome, &reads, &skip_out, &["--skip"]);

    let scan = fs::read_to_string(&scan_out).expect("read scan TSV");
    let skip = fs::read_to_string(&skip_out).expect("read skip TSV");
    assert_eq!(scan, skip, "skip mode changed the classifications");
}

/// `--verify` prints the mate substrings selected from the ground-truth
/// isoform: mate 1 from the forward strand, mate 2 from the reverse
/// complement.
#[test]
fn verify_prints_expected_substrings() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let transcriptome = dir.path().join("transcriptome.fasta");
    let reads = dir.path().join("reads.fasta");
    fs::write(&transcriptome, TRANSCRIPTOME).expect("write transcriptome");
    fs::write(&reads, ">r1/iso1;mate1:0-3;mate2:0-3\nAAACCC\n").expect("write reads");
    let out = dir.path().join("ignored.tsv");

    let output = Command::new(sprig_bin())
        .arg(&transcriptome)
        .arg(&reads)
        .args(["-k", "3", "-o"])
        .arg(&out)
        .args(["-q", "--verify"])
        .output()
        .expect("failed to spawn sprig-rs");
    assert!(output.status.success(), "sprig-rs exited with {}", output.status);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Read ID: r1",
            "Expected read:",
            "Mate 1:",
            // iso1[0..3] on the forward strand
            "AAA",
            "Mate 2:",
            // revcomp("AAACCCGGG") = "CCCGGGTTT"; [0..3]
            "CCC",
            "Actual read sequence:",
            "AAACCC",
        ]
    );
}
