/// A single node of the radix trie.
///
/// A node holds a value iff some inserted key ends exactly here. Children are
/// kept in insertion order as `(edge label, child)` pairs; the compression
/// invariant guarantees that no two sibling labels share a first character,
/// so at most one child can overlap any given key.
#[derive(Clone, Debug)]
pub(crate) struct Node<V> {
    pub(crate) value: Option<V>,
    pub(crate) children: Vec<(String, Node<V>)>,
}

/// Byte length of the longest common `char` prefix of `a` and `b`.
///
/// Comparing whole characters keeps edge splits on UTF-8 boundaries.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    let mut len = 0;
    let mut other = b.chars();
    for c in a.chars() {
        match other.next() {
            Some(o) if o == c => len += c.len_utf8(),
            _ => break,
        }
    }
    len
}

impl<V> Node<V> {
    pub(crate) fn new() -> Self {
        Node {
            value: None,
            children: Vec::new(),
        }
    }

    fn leaf(value: V) -> Self {
        Node {
            value: Some(value),
            children: Vec::new(),
        }
    }

    /// Inserts `key` into the subtree rooted at this node, returning the
    /// previous value if the key was already present.
    ///
    /// `key` must be non-empty; the caller validates. At most one edge split
    /// happens per call: the overlapping sibling is unique, and a split
    /// finishes the insertion without further recursion.
    pub(crate) fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let overlap = self
            .children
            .iter()
            .position(|(label, _)| common_prefix_len(label, key) > 0);

        let Some(idx) = overlap else {
            // No edge shares a prefix with the key: fresh leaf.
            self.children.push((key.to_string(), Node::leaf(value)));
            return None;
        };

        let prefix_len = common_prefix_len(&self.children[idx].0, key);

        if prefix_len == self.children[idx].0.len() {
            let child = &mut self.children[idx].1;
            if prefix_len == key.len() {
                // Exact edge match: overwrite the value, children untouched.
                return child.value.replace(value);
            }
            // The edge is a strict prefix of the key: descend with the rest.
            return child.insert(&key[prefix_len..], value);
        }

        // Partial overlap: split the edge at the common prefix. The existing
        // child is re-homed under a new intermediate node, keeping its slot
        // so sibling insertion order is preserved.
        let (old_label, old_child) = std::mem::replace(
            &mut self.children[idx],
            (key[..prefix_len].to_string(), Node::new()),
        );
        let intermediate = &mut self.children[idx].1;
        intermediate
            .children
            .push((old_label[prefix_len..].to_string(), old_child));
        if prefix_len == key.len() {
            // The key ends exactly at the split point.
            intermediate.value = Some(value);
        } else {
            intermediate
                .children
                .push((key[prefix_len..].to_string(), Node::leaf(value)));
        }
        None
    }

    /// Walks edge labels to the node whose root-to-node path spells `key`.
    pub(crate) fn find(&self, key: &str) -> Option<&Node<V>> {
        if key.is_empty() {
            return Some(self);
        }
        for (label, child) in &self.children {
            if let Some(rest) = key.strip_prefix(label.as_str()) {
                return child.find(rest);
            }
        }
        None
    }

    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut Node<V>> {
        if key.is_empty() {
            return Some(self);
        }
        for (label, child) in &mut self.children {
            if let Some(rest) = key.strip_prefix(label.as_str()) {
                return child.find_mut(rest);
            }
        }
        None
    }

    /// Removes `key` from the subtree rooted at this node, returning the
    /// evicted value. Restores the compaction invariant before returning.
    pub(crate) fn remove(&mut self, key: &str) -> Option<V> {
        let idx = self
            .children
            .iter()
            .position(|(label, _)| common_prefix_len(label, key) > 0)?;

        if self.children[idx].0 == key {
            if self.children[idx].1.children.is_empty() {
                // Leaf terminus: unlink the whole edge.
                let (_, leaf) = self.children.remove(idx);
                return leaf.value;
            }
            // The node is a shared prefix of other keys: clear the value only.
            let evicted = self.children[idx].1.value.take();
            if evicted.is_some() {
                self.compact_child(idx);
            }
            return evicted;
        }

        let label_len = self.children[idx].0.len();
        if !key.starts_with(self.children[idx].0.as_str()) {
            // The overlap is partial in both directions: the key is absent.
            return None;
        }
        let evicted = self.children[idx].1.remove(&key[label_len..]);
        if evicted.is_some() {
            self.compact_child(idx);
        }
        evicted
    }

    /// Merges `children[idx]` with its sole child if it holds no value,
    /// concatenating the two edge labels. A delete touches one edge, so it
    /// can leave at most one such redundant node behind.
    fn compact_child(&mut self, idx: usize) {
        let needs_merge = {
            let (_, node) = &self.children[idx];
            node.value.is_none() && node.children.len() == 1
        };
        if !needs_merge {
            return;
        }
        let (prefix, mut node) = self.children.remove(idx);
        if let Some((suffix, grandchild)) = node.children.pop() {
            self.children
                .insert(idx, (format!("{prefix}{suffix}"), grandchild));
        }
    }
}

#[cfg(test)]
impl<V> Node<V> {
    /// Asserts the compression and compaction invariants over the subtree.
    pub(crate) fn assert_invariants(&self, is_root: bool) {
        let mut first_chars = std::collections::HashSet::new();
        for (label, child) in &self.children {
            assert!(!label.is_empty(), "empty edge label");
            let first = label.chars().next().unwrap();
            assert!(
                first_chars.insert(first),
                "sibling edges share a common prefix starting with {first:?}"
            );
            child.assert_invariants(false);
        }
        if is_root {
            assert!(self.value.is_none(), "root node must not hold a value");
        } else {
            assert!(
                self.value.is_some() || self.children.len() >= 2,
                "redundant valueless node with {} children",
                self.children.len()
            );
        }
    }
}
