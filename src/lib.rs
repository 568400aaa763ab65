//! sprig-rs: k-mer transcript graphs and pseudoalignment-style read
//! classification.
//!
//! Build a graph from a transcriptome (one node per distinct k-mer, each
//! carrying the set of isoforms containing it), then classify reads by
//! intersecting the equivalence classes of their k-mer windows.
//!
//! # Library usage
//!
//! ```
//! use sprig_rs::{Classifier, KmerGraphBuilder};
//!
//! # fn main() -> Result<(), sprig_rs::SprigError> {
//! let mut builder = KmerGraphBuilder::new(3);
//! builder.add_transcript(b"AAACCCGGG", "iso1")?;
//! let graph = builder.build();
//!
//! let classifier = Classifier::new(&graph);
//! let class = classifier.classify(b"AAACCC")?;
//! assert!(class.contains(graph.isoform_id("iso1").unwrap()));
//! # Ok(())
//! # }
//! ```

// Internal modules — not part of the public API.
pub(crate) mod cli;
pub(crate) mod pipeline;
pub(crate) mod types;
pub(crate) mod verify;

// Public modules — stable API surface.
pub mod classify;
pub mod error;
pub mod fasta;
pub mod graph;

// Flat re-exports for the most commonly used public types.
pub use classify::{Classifier, ClassifyConfig};
pub use error::SprigError;
pub use fasta::{ReadRecord, TranscriptRecord};
pub use graph::{build_graph, GraphNode, IsoformSet, KmerGraph, KmerGraphBuilder};
pub use types::{IsoformId, NodeId};
