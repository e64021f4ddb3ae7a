use std::error::Error;
use std::fmt;

/// The error returned when an empty key is passed to a mutating operation.
///
/// Empty keys are rejected rather than silently ignored: an empty key can
/// never be stored, so accepting one would make the operation an invisible
/// no-op.
///
/// # Examples
///
/// ```
/// # use radixtrie::RadixTrie;
/// let mut trie = RadixTrie::new();
/// assert!(trie.add("", 1).is_err());
/// assert!(trie.add("a", 1).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidKeyError;

impl fmt::Display for InvalidKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key must be a non-empty string")
    }
}

impl Error for InvalidKeyError {}
