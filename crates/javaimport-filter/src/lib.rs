//! javaimport-filter: Prefix-set regex synthesis and the package path filter.

pub mod path_filter;
pub mod trie;

pub use path_filter::PathFilter;
pub use trie::{TrieCompiler, TrieNode, NEVER_MATCH};
