//! Shingle counting trie.
//!
//! A prefix tree over token sequences where every node stores how often its
//! prefix was observed. A position keeps its only continuation inline
//! ([`SingleBranch`]) until a second distinct token shows up, at which point
//! it is promoted in place to a token-indexed map ([`MultiBranch`]).

pub mod count;
pub mod node;
pub mod position;
pub mod single;
pub mod multi;
pub mod map;
pub mod iter;

pub use count::Count;
pub use node::Node;
pub use position::TriePosition;
pub use single::SingleBranch;
pub use multi::MultiBranch;
pub use map::{ShingleTrie, TrieStats};
pub use iter::{Children, Iter};
