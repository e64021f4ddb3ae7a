//! A compressed prefix tree (radix trie) based map implementation.
//!
//! This crate provides a `RadixTrie`, a key-value data structure that stores
//! string keys in a compressed prefix tree: keys sharing a common prefix
//! share the edges that spell it, inserts split edges on partial overlap,
//! and deletes merge single-child nodes back together.
//!
//! # Features
//!
//! - Exact lookups in O(k) where k is the key length
//! - Case-insensitive fuzzy prefix search
//! - Lazy, ordered traversal (entries, keys, values)
//! - Entry API for efficient in-place updates

mod entry;
mod error;
mod iter;
mod node;
mod radix_trie;

pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use error::InvalidKeyError;
pub use iter::{Drain, Entries, FuzzyGet, IntoIter, Keys, Values};
pub use radix_trie::RadixTrie;

#[cfg(test)]
mod proptest_radix;
