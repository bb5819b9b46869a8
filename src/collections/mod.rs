//! Collections for frequency counting over token sequences.
//!
//! - `trie`: prefix trie of shingle counts with single-branch compaction

pub mod trie;

pub use trie::{Count, MultiBranch, Node, ShingleTrie, SingleBranch, TriePosition, TrieStats};
