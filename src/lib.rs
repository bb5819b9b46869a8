//! # `shingle_trie` - Shingle Frequency Trie
//!
//! A memory-lean prefix trie that accumulates occurrence counts over token
//! sequences ("shingles"). It is the counting substrate of entropy-based
//! lexical segmentation: callers window a corpus into n-grams, insert each one
//! with its multiplicity, then read back the count of any prefix and the
//! counts of its continuations.
//!
//! ## Representation
//!
//! Natural-language n-gram tries are dominated by long single-continuation
//! tails. Each trie position therefore has two forms:
//!
//! 1. **Single branch** (`SingleBranch<T, C>`):
//!    - One inline node, no container
//!    - Used while only one token has been observed after a prefix
//!
//! 2. **Multi branch** (`MultiBranch<T, C>`):
//!    - Token-indexed `HashMap` of nodes
//!    - Entered the first time a second distinct token appears
//!
//! Promotion happens in place at the diverging position only and is never
//! reversed. Ownership is strictly tree-shaped: each position is owned by the
//! node above it and dropping the trie drops everything.
//!
//! ## Counting rules
//!
//! - Inserting a shingle adds its count to every prefix on its path.
//! - Counts are fixed-width unsigned integers (`u32` by default) and saturate
//!   at their maximum.
//! - A zero count still records the path.
//!
//! ## Example
//!
//! ```rust
//! use shingle_trie::ShingleTrie;
//!
//! let mut trie: ShingleTrie<&str> = ShingleTrie::new();
//! trie.insert(&["le", "petit", "chat"], 1);
//! trie.insert(&["le", "petit", "chien"], 1);
//! trie.insert(&["le", "gros", "chien"], 1);
//!
//! assert_eq!(trie.count(&["le"]), Some(3));
//! assert_eq!(trie.count(&["le", "petit"]), Some(2));
//! assert_eq!(trie.count(&["la"]), None);
//! assert_eq!(trie.children(&["le", "petit"]).len(), 2);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;

pub use collections::{Count, MultiBranch, Node, ShingleTrie, SingleBranch, TriePosition, TrieStats};

// Compile-time assertions for memory layout optimizations
const _: () = {
    use core::mem;

    // A position is never larger than an inline node plus its tag; the
    // multi-branch map lives behind a pointer.
    assert!(
        mem::size_of::<TriePosition<u32, u32>>() <= mem::size_of::<Node<u32, u32>>() + mem::size_of::<usize>()
    );

    // The continuation link is a single nullable pointer.
    assert!(mem::size_of::<Option<Box<TriePosition<u32, u32>>>>() == mem::size_of::<usize>());
};
