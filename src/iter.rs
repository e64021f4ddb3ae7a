use crate::RadixTrie;
use crate::node::Node;

/// A lazy iterator over the key-value pairs of a `RadixTrie`.
///
/// Entries come out depth-first, pre-order, in child-insertion order; each
/// full key is rebuilt by concatenating edge labels from the root. A node's
/// own value is yielded before its children are visited.
///
/// This struct is created by the [`entries`] method on [`RadixTrie`].
///
/// [`entries`]: RadixTrie::entries
pub struct Entries<'a, V> {
    pub(crate) stack: Vec<(String, &'a Node<V>)>,
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, node)) = self.stack.pop() {
            // Children are pushed in reverse so the first-inserted edge is
            // popped first.
            for (label, child) in node.children.iter().rev() {
                self.stack.push((format!("{key}{label}"), child));
            }
            if let Some(value) = &node.value {
                return Some((key, value));
            }
        }
        None
    }
}

/// An iterator over the keys of a `RadixTrie`.
///
/// This struct is created by the [`keys`] method on [`RadixTrie`].
///
/// [`keys`]: RadixTrie::keys
pub struct Keys<'a, V> {
    pub(crate) inner: Entries<'a, V>,
}

impl<V> Iterator for Keys<'_, V> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// An iterator over the values of a `RadixTrie`.
///
/// This struct is created by the [`values`] method on [`RadixTrie`].
///
/// [`values`]: RadixTrie::values
pub struct Values<'a, V> {
    pub(crate) inner: Entries<'a, V>,
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// A lazy iterator over entries whose keys case-insensitively start with a
/// query string.
///
/// Matching happens edge by edge on lower-cased labels, so subtrees that
/// cannot contain a hit are skipped without being walked. Entries come out in
/// the same depth-first, child-insertion order as [`Entries`].
///
/// This struct is created by the [`fuzzy_get`] method on [`RadixTrie`].
///
/// [`fuzzy_get`]: RadixTrie::fuzzy_get
pub struct FuzzyGet<'a, V> {
    // Each frame carries the still-unmatched, lower-cased remainder of the
    // query for its subtree; an empty remainder means everything below
    // matches.
    pub(crate) stack: Vec<(String, String, &'a Node<V>)>,
}

impl<'a, V> Iterator for FuzzyGet<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, query, node)) = self.stack.pop() {
            for (label, child) in node.children.iter().rev() {
                let full_key = format!("{key}{label}");
                if query.is_empty() {
                    self.stack.push((full_key, String::new(), child));
                    continue;
                }
                let label_lower = label.to_lowercase();
                if let Some(rest) = query.strip_prefix(label_lower.as_str()) {
                    // The edge matches exactly or is a prefix of the query;
                    // descend with whatever is left of the query.
                    self.stack.push((full_key, rest.to_string(), child));
                } else if label_lower.starts_with(query.as_str()) {
                    // The edge extends past the query: everything below is a
                    // hit.
                    self.stack.push((full_key, String::new(), child));
                }
                // No overlap at all: the subtree is skipped.
            }
            if query.is_empty() {
                if let Some(value) = &node.value {
                    return Some((key, value));
                }
            }
        }
        None
    }
}

/// An owning iterator over the key-value pairs of a `RadixTrie`.
///
/// This struct is created when a `RadixTrie` is consumed using `into_iter()`.
pub struct IntoIter<V> {
    pub(crate) stack: Vec<(String, Node<V>)>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((key, node)) = self.stack.pop() {
            let Node { value, children } = node;
            for (label, child) in children.into_iter().rev() {
                self.stack.push((format!("{key}{label}"), child));
            }
            if let Some(value) = value {
                return Some((key, value));
            }
        }
        None
    }
}

/// A draining iterator over the key-value pairs of a `RadixTrie`.
///
/// The trie is emptied up front; dropping the iterator early still leaves
/// the trie empty.
///
/// This struct is created by the [`drain`] method on [`RadixTrie`].
///
/// [`drain`]: RadixTrie::drain
pub struct Drain<V> {
    pub(crate) inner: IntoIter<V>,
}

impl<V> Iterator for Drain<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<V> IntoIterator for RadixTrie<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    /// Consumes the trie into an iterator yielding owned key-value pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1).unwrap();
    /// trie.add("b", 2).unwrap();
    ///
    /// for (key, value) in trie {
    ///     println!("{key}: {value}");
    /// }
    /// ```
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            stack: vec![(String::new(), self.root)],
        }
    }
}

impl<'a, V> IntoIterator for &'a RadixTrie<V> {
    type Item = (String, &'a V);
    type IntoIter = Entries<'a, V>;

    /// Returns an iterator over references to the key-value pairs of the
    /// trie.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1).unwrap();
    /// trie.add("b", 2).unwrap();
    ///
    /// for (key, value) in &trie {
    ///     println!("{key}: {value}");
    /// }
    /// ```
    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
