/// Dense index of an isoform, assigned in first-seen order during the build.
pub type IsoformId = u32;
/// Index of a node in the graph arena.
pub type NodeId = u32;

// AHash-backed maps and sets instead of the default SipHash ones.
// Import with `use crate::types::{HashMap, HashSet}`, plus `HashMapExt` /
// `HashSetExt` for `::new()` and `::with_capacity()`.
pub(crate) type HashMap<K, V> = ahash::HashMap<K, V>;
pub(crate) type HashSet<K> = ahash::HashSet<K>;
pub(crate) use ahash::HashMapExt;
pub(crate) use ahash::HashSetExt;
