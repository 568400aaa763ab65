use crate::error::SprigError;
use crate::graph::{IsoformSet, KmerGraph};
use crate::types::{HashSet, HashSetExt, IsoformId, NodeId};

/// How [`Classifier::classify`] walks a read.
#[derive(Debug, Clone, Default)]
pub struct ClassifyConfig {
    /// Use the contig-skipping traversal instead of the plain per-window
    /// scan. Both produce the same result; skipping trades per-window hash
    /// lookups for cheaper contig hops.
    pub skip: bool,
    /// Skip mode only: stop after intersecting this many distinct nodes and
    /// return the running class as-is. `None` leaves the traversal bounded
    /// only by the number of distinct k-mers in the graph.
    pub max_visited: Option<usize>,
}

/// Classifies a read against a frozen [`KmerGraph`] by intersecting the
/// equivalence classes of its k-mer windows.
#[derive(Debug, Clone)]
pub struct Classifier<'g> {
    graph: &'g KmerGraph,
    config: ClassifyConfig,
}

impl<'g> Classifier<'g> {
    pub fn new(graph: &'g KmerGraph) -> Self {
        Self {
            graph,
            config: ClassifyConfig::default(),
        }
    }

    pub fn with_config(graph: &'g KmerGraph, config: ClassifyConfig) -> Self {
        Self { graph, config }
    }

    /// The set of isoforms whose sequence contains every overlapping k-mer
    /// window of `read`.
    ///
    /// Returns the empty set as soon as a window is absent from the index:
    /// the read touches sequence no transcript has, so it is unclassifiable.
    /// A non-empty result is a conservative pseudoalignment call; membership
    /// does not require the read to be one contiguous substring of the
    /// isoform.
    pub fn classify(&self, read: &[u8]) -> Result<IsoformSet, SprigError> {
        if self.config.skip {
            self.classify_skipping(read)
        } else {
            self.classify_scan(read)
        }
    }

    /// Plain scan: one index lookup per window, seed with the first class,
    /// intersect through the rest. Cost is proportional to read length times
    /// class width.
    fn classify_scan(&self, read: &[u8]) -> Result<IsoformSet, SprigError> {
        let k = self.check_read_length(read)?;
        let mut class: Option<IsoformSet> = None;
        for window in read.windows(k) {
            let Some(node) = self.graph.node_for_kmer(window) else {
                return Ok(IsoformSet::default());
            };
            let node_class = self.graph.node(node).equivalence_class();
            match class.as_mut() {
                None => class = Some(node_class.clone()),
                Some(class) => class.intersect_with(node_class),
            }
        }
        Ok(class.unwrap_or_default())
    }

    /// Contig-skipping traversal. Starting from the read's first matched
    /// node, follow the contig recorded for that node's anchor isoform:
    /// while the read agrees with the contig, the next node comes from an
    /// integer-keyed position lookup plus a k-byte compare instead of
    /// hashing the window. On divergence, fall back to the index and re-seed
    /// the cursor from the new node's anchor.
    ///
    /// A per-call seen set keeps every node from being intersected more than
    /// once, so repeated k-mers (cycles in the graph) add no work and the
    /// intersection effort is bounded by the number of distinct nodes even
    /// on pathological reads.
    fn classify_skipping(&self, read: &[u8]) -> Result<IsoformSet, SprigError> {
        let k = self.check_read_length(read)?;
        let cap = self.config.max_visited.unwrap_or(usize::MAX);
        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut class: Option<IsoformSet> = None;
        let mut cursor: Option<(IsoformId, u32)> = None;

        for window in read.windows(k) {
            let node = match self.follow_cursor(&mut cursor, window) {
                Some(node) => node,
                None => match self.graph.node_for_kmer(window) {
                    Some(node) => {
                        cursor = Some(self.graph.node(node).anchor());
                        node
                    }
                    None => return Ok(IsoformSet::default()),
                },
            };
            if !seen.insert(node) {
                continue;
            }
            let node_class = self.graph.node(node).equivalence_class();
            match class.as_mut() {
                None => class = Some(node_class.clone()),
                Some(class) => class.intersect_with(node_class),
            }
            if seen.len() >= cap {
                break;
            }
        }
        Ok(class.unwrap_or_default())
    }

    /// Advance the contig cursor if the next recorded node's k-mer matches
    /// `window`; otherwise clear it so the caller falls back to the index.
    fn follow_cursor(
        &self,
        cursor: &mut Option<(IsoformId, u32)>,
        window: &[u8],
    ) -> Option<NodeId> {
        let (isoform, position) = (*cursor)?;
        let next = position + 1;
        if next >= self.graph.contig_length(isoform) {
            *cursor = None;
            return None;
        }
        let Some(candidate) = self.graph.contig_node(isoform, next) else {
            *cursor = None;
            return None;
        };
        if self.graph.node(candidate).kmer() != window {
            *cursor = None;
            return None;
        }
        *cursor = Some((isoform, next));
        Some(candidate)
    }

    fn check_read_length(&self, read: &[u8]) -> Result<usize, SprigError> {
        let k = self.graph.k();
        if read.len() < k {
            return Err(SprigError::InvalidInput {
                what: "read",
                len: read.len(),
                k,
            });
        }
        Ok(k)
    }
}
