use crate::error::SprigError;
use crate::fasta::TranscriptRecord;
use crate::types::{HashMap, HashMapExt, HashSet, HashSetExt, IsoformId, NodeId};
use bitvec::vec::BitVec;

/// Dense set of interned isoform ids, one bit per isoform.
///
/// Intersection runs word-wise over the backing storage, so narrowing a
/// running equivalence class costs one AND per machine word rather than a
/// general set operation.
#[derive(Debug, Clone, Default)]
pub struct IsoformSet {
    bits: BitVec,
}

impl IsoformSet {
    pub(crate) fn insert(&mut self, id: IsoformId) {
        let idx = id as usize;
        if idx >= self.bits.len() {
            self.bits.resize(idx + 1, false);
        }
        self.bits.set(idx, true);
    }

    pub fn contains(&self, id: IsoformId) -> bool {
        self.bits.get(id as usize).is_some_and(|bit| *bit)
    }

    /// Keep only the isoforms present in both sets.
    pub fn intersect_with(&mut self, other: &IsoformSet) {
        if self.bits.len() > other.bits.len() {
            self.bits.truncate(other.bits.len());
        }
        let rhs = other.bits.as_raw_slice();
        for (word, other_word) in self.bits.as_raw_mut_slice().iter_mut().zip(rhs) {
            *word &= *other_word;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Contained isoform ids in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = IsoformId> + '_ {
        self.bits.iter_ones().map(|idx| idx as IsoformId)
    }
}

// Trailing zero bits are not significant, so equality compares members, not
// backing length.
impl PartialEq for IsoformSet {
    fn eq(&self, other: &Self) -> bool {
        self.bits.iter_ones().eq(other.bits.iter_ones())
    }
}

impl Eq for IsoformSet {}

impl FromIterator<IsoformId> for IsoformSet {
    fn from_iter<I: IntoIterator<Item = IsoformId>>(iter: I) -> Self {
        let mut set = Self::default();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// One vertex of the graph: a distinct k-mer, the isoforms whose sequence
/// contains it, and the deduplicated set of successor nodes (one edge per
/// transition, however many isoforms and positions produce it). Successor
/// edges may form cycles when sequence is repetitive.
#[derive(Debug, Clone)]
pub struct GraphNode {
    kmer: Vec<u8>,
    class: IsoformSet,
    successors: HashSet<NodeId>,
    anchor: (IsoformId, u32),
}

impl GraphNode {
    pub fn kmer(&self) -> &[u8] {
        &self.kmer
    }

    pub fn equivalence_class(&self) -> &IsoformSet {
        &self.class
    }

    pub fn successors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.successors.iter().copied()
    }

    /// The occurrence that created this node, used to seed contig-following
    /// during skip classification.
    pub(crate) fn anchor(&self) -> (IsoformId, u32) {
        self.anchor
    }
}

/// Accumulates transcripts into a shared k-mer graph, then freezes it into a
/// [`KmerGraph`]. Nodes are created lazily, equivalence classes only grow,
/// and a rejected transcript leaves the graph untouched.
#[derive(Debug)]
pub struct KmerGraphBuilder {
    k: usize,
    nodes: Vec<GraphNode>,
    kmer_to_node: HashMap<Vec<u8>, NodeId>,
    contig_position: HashMap<(IsoformId, u32), NodeId>,
    contig_length: HashMap<IsoformId, u32>,
    isoform_names: Vec<String>,
    name_to_id: HashMap<String, IsoformId>,
}

impl KmerGraphBuilder {
    /// Panics if `k` is zero.
    pub fn new(k: usize) -> Self {
        assert!(k >= 1, "k-mer length must be at least 1");
        Self {
            k,
            nodes: Vec::new(),
            kmer_to_node: HashMap::new(),
            contig_position: HashMap::new(),
            contig_length: HashMap::new(),
            isoform_names: Vec::new(),
            name_to_id: HashMap::new(),
        }
    }

    fn intern_isoform(&mut self, name: &str) -> IsoformId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        let id = self.isoform_names.len() as IsoformId;
        self.name_to_id.insert(name.to_string(), id);
        self.isoform_names.push(name.to_string());
        id
    }

    fn get_or_create_node(&mut self, kmer: &[u8], isoform: IsoformId, offset: u32) -> NodeId {
        if let Some(&id) = self.kmer_to_node.get(kmer) {
            return id;
        }
        let id = self.nodes.len() as NodeId;
        self.nodes.push(GraphNode {
            kmer: kmer.to_vec(),
            class: IsoformSet::default(),
            successors: HashSet::new(),
            anchor: (isoform, offset),
        });
        self.kmer_to_node.insert(kmer.to_vec(), id);
        id
    }

    /// Slide a window of length k across every offset of `sequence` and fold
    /// each window into the shared graph under `isoform_name`: add the
    /// isoform to the window's equivalence class, link the previous window's
    /// node to it, and record the node's position in the isoform's contig.
    ///
    /// Adding the same transcript twice is idempotent: equivalence classes
    /// have set semantics and repeated transitions dedup to one edge.
    pub fn add_transcript(
        &mut self,
        sequence: &[u8],
        isoform_name: &str,
    ) -> Result<(), SprigError> {
        if sequence.len() < self.k {
            return Err(SprigError::InvalidInput {
                what: "transcript",
                len: sequence.len(),
                k: self.k,
            });
        }

        let isoform = self.intern_isoform(isoform_name);
        let mut prev: Option<NodeId> = None;
        let mut length: u32 = 0;
        for (offset, kmer) in sequence.windows(self.k).enumerate() {
            let offset = offset as u32;
            let node = self.get_or_create_node(kmer, isoform, offset);
            self.nodes[node as usize].class.insert(isoform);
            if let Some(prev) = prev {
                self.nodes[prev as usize].successors.insert(node);
            }
            self.contig_position.insert((isoform, offset), node);
            length = offset + 1;
            prev = Some(node);
        }
        self.contig_length.insert(isoform, length);
        Ok(())
    }

    /// Freeze the accumulated state into an immutable graph.
    pub fn build(self) -> KmerGraph {
        KmerGraph {
            k: self.k,
            nodes: self.nodes,
            kmer_to_node: self.kmer_to_node,
            contig_position: self.contig_position,
            contig_length: self.contig_length,
            isoform_names: self.isoform_names,
            name_to_id: self.name_to_id,
        }
    }
}

/// The frozen k-mer transcript graph. Built once by [`KmerGraphBuilder`],
/// then read-only: classification takes `&KmerGraph` and nothing mutates the
/// node arena after the freeze.
#[derive(Debug)]
pub struct KmerGraph {
    k: usize,
    nodes: Vec<GraphNode>,
    kmer_to_node: HashMap<Vec<u8>, NodeId>,
    contig_position: HashMap<(IsoformId, u32), NodeId>,
    contig_length: HashMap<IsoformId, u32>,
    isoform_names: Vec<String>,
    name_to_id: HashMap<String, IsoformId>,
}

impl KmerGraph {
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of distinct k-mers in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn isoform_count(&self) -> usize {
        self.isoform_names.len()
    }

    pub fn node(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id as usize]
    }

    pub fn node_for_kmer(&self, kmer: &[u8]) -> Option<NodeId> {
        self.kmer_to_node.get(kmer).copied()
    }

    pub fn isoform_id(&self, name: &str) -> Option<IsoformId> {
        self.name_to_id.get(name).copied()
    }

    pub fn isoform_name(&self, id: IsoformId) -> &str {
        &self.isoform_names[id as usize]
    }

    /// Resolve a set of ids to names, in id (first-seen) order.
    pub fn isoform_names(&self, set: &IsoformSet) -> Vec<&str> {
        set.iter().map(|id| self.isoform_name(id)).collect()
    }

    /// Number of k-mer positions recorded for `isoform` (0 if unknown).
    pub fn contig_length(&self, isoform: IsoformId) -> u32 {
        self.contig_length.get(&isoform).copied().unwrap_or(0)
    }

    /// Node recorded at `offset` within `isoform`'s ordered k-mer sequence.
    pub fn contig_node(&self, isoform: IsoformId, offset: u32) -> Option<NodeId> {
        self.contig_position.get(&(isoform, offset)).copied()
    }
}

/// Build a frozen graph from a transcriptome.
pub fn build_graph(transcripts: &[TranscriptRecord], k: usize) -> Result<KmerGraph, SprigError> {
    let mut builder = KmerGraphBuilder::new(k);
    for tx in transcripts {
        builder.add_transcript(&tx.sequence, &tx.isoform_name)?;
    }
    Ok(builder.build())
}
