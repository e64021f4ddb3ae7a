use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::entry::{Entry, OccupiedEntry, VacantEntry};
use crate::error::InvalidKeyError;
use crate::iter::{Drain, Entries, FuzzyGet, IntoIter, Keys, Values};
use crate::node::Node;

/// A `RadixTrie` is a key-value data structure that stores string keys in a
/// compressed prefix tree.
///
/// Keys sharing a common prefix share the edges that spell it, so the number
/// of nodes is bounded by the number of stored keys rather than by their
/// total length. Inserts split edges on partial overlap; deletes merge the
/// resulting single-child nodes back together.
///
/// # Features
///
/// - Exact lookups in O(k) where k is the key length
/// - Case-insensitive fuzzy prefix search
/// - Lazy, ordered traversal (entries, keys, values)
/// - Entry API for in-place updates
///
/// Traversal iterators borrow the trie, so the borrow checker rejects
/// mutation while one is outstanding.
///
/// # Examples
///
/// ```
/// use radixtrie::RadixTrie;
///
/// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
/// let mut trie = RadixTrie::new();
///
/// // Insert key-value pairs; `add` chains.
/// trie.add("apple", 1)?.add("banana", 2)?.add("cherry", 3)?;
///
/// // Check if a key exists
/// assert!(trie.has("apple"));
/// assert!(!trie.has("grape"));
///
/// // Get a value
/// assert_eq!(trie.get("banana"), Some(&2));
///
/// // Update a value
/// trie.add("apple", 10)?;
/// assert_eq!(trie.get("apple"), Some(&10));
///
/// // Remove a value
/// assert_eq!(trie.remove("cherry")?, Some(3));
/// assert_eq!(trie.get("cherry"), None);
///
/// // Iterate over key-value pairs
/// for (key, value) in trie.entries() {
///     println!("{key}: {value}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct RadixTrie<V> {
    pub(crate) root: Node<V>,
    pub(crate) size: usize,
}

impl<V> Default for RadixTrie<V> {
    /// Creates a new empty `RadixTrie`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let trie: RadixTrie<i32> = Default::default();
    /// assert!(trie.is_empty());
    /// ```
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RadixTrie<V> {
    /// Creates a new empty `RadixTrie`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let trie: RadixTrie<i32> = RadixTrie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        RadixTrie {
            root: Node::new(),
            size: 0,
        }
    }

    /// Returns the number of stored keys.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.add("a", 1).unwrap();
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// assert!(trie.is_empty());
    ///
    /// trie.add("a", 1).unwrap();
    /// assert!(!trie.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes all keys from the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1).unwrap();
    /// trie.add("b", 2).unwrap();
    ///
    /// trie.clear();
    /// assert!(trie.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.root = Node::new();
        self.size = 0;
    }

    /// Associates `value` with `key`, splitting an existing edge if the key
    /// partially overlaps it.
    ///
    /// If the key is already present only its value is overwritten; the
    /// subtree below it is untouched. Returns `&mut Self` so calls can be
    /// chained.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyError`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie = RadixTrie::new();
    /// trie.add("foo", 5)?.add("foos", 9)?;
    ///
    /// assert_eq!(trie.get("foo"), Some(&5));
    /// assert_eq!(trie.get("foos"), Some(&9));
    /// # Ok(())
    /// # }
    /// ```
    pub fn add<K: AsRef<str>>(&mut self, key: K, value: V) -> Result<&mut Self, InvalidKeyError> {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(InvalidKeyError);
        }
        if self.root.insert(key, value).is_none() {
            self.size += 1;
        }
        Ok(self)
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// A node reached by an exact edge match but holding no value is a pure
    /// branch and reports `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1).unwrap();
    /// assert_eq!(trie.get("a"), Some(&1));
    /// assert_eq!(trie.get("b"), None);
    /// ```
    pub fn get<K: AsRef<str>>(&self, key: K) -> Option<&V> {
        self.root
            .find(key.as_ref())
            .and_then(|node| node.value.as_ref())
    }

    /// Returns a mutable reference to the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1).unwrap();
    ///
    /// if let Some(value) = trie.get_mut("a") {
    ///     *value = 10;
    /// }
    ///
    /// assert_eq!(trie.get("a"), Some(&10));
    /// ```
    pub fn get_mut<K: AsRef<str>>(&mut self, key: K) -> Option<&mut V> {
        self.root
            .find_mut(key.as_ref())
            .and_then(|node| node.value.as_mut())
    }

    /// Returns `true` if the trie stores a value for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1).unwrap();
    /// assert!(trie.has("a"));
    /// assert!(!trie.has("b"));
    /// ```
    pub fn has<K: AsRef<str>>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if the trie stores a value for `key`.
    ///
    /// Alias for [`has`](RadixTrie::has) under the conventional map name.
    pub fn contains_key<K: AsRef<str>>(&self, key: K) -> bool {
        self.has(key)
    }

    /// Removes `key` from the trie, returning the stored value if the key
    /// was present.
    ///
    /// If the removed terminus is a shared prefix of other keys the node
    /// stays and only its value is cleared; otherwise the edge is unlinked
    /// and any node left valueless with a single child is merged with it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyError`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1)?;
    ///
    /// assert_eq!(trie.remove("a")?, Some(1));
    /// assert_eq!(trie.remove("a")?, None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn remove<K: AsRef<str>>(&mut self, key: K) -> Result<Option<V>, InvalidKeyError> {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(InvalidKeyError);
        }
        let evicted = self.root.remove(key);
        if evicted.is_some() {
            self.size -= 1;
        }
        Ok(evicted)
    }

    /// Removes `key` from the trie; a no-op if the key is absent.
    ///
    /// Chainable variant of [`remove`](RadixTrie::remove) that discards the
    /// evicted value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyError`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1)?.add("b", 2)?;
    ///
    /// trie.delete("a")?.delete("missing")?;
    ///
    /// assert_eq!(trie.get("a"), None);
    /// assert_eq!(trie.get("b"), Some(&2));
    /// # Ok(())
    /// # }
    /// ```
    pub fn delete<K: AsRef<str>>(&mut self, key: K) -> Result<&mut Self, InvalidKeyError> {
        self.remove(key)?;
        Ok(self)
    }

    /// Returns an entry representing `key` in the trie.
    ///
    /// The entry can be used to insert, remove, or modify the value
    /// associated with the key with a single up-front lookup.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyError`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::{Entry, RadixTrie};
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie = RadixTrie::new();
    ///
    /// // Insert a value if the key doesn't exist
    /// trie.entry("a")?.or_insert(1);
    ///
    /// // Update a value if the key exists
    /// if let Entry::Occupied(mut occupied) = trie.entry("a")? {
    ///     *occupied.get_mut() += 10;
    /// }
    ///
    /// assert_eq!(trie.get("a"), Some(&11));
    /// # Ok(())
    /// # }
    /// ```
    pub fn entry<K: AsRef<str>>(&mut self, key: K) -> Result<Entry<'_, V>, InvalidKeyError> {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(InvalidKeyError);
        }
        let key = key.to_string();
        if self.has(&key) {
            Ok(Entry::Occupied(OccupiedEntry { trie: self, key }))
        } else {
            Ok(Entry::Vacant(VacantEntry { trie: self, key }))
        }
    }

    /// Returns a lazy iterator over every entry whose key case-insensitively
    /// starts with `query`.
    ///
    /// An empty query matches every stored key. Entries come out in the same
    /// depth-first, child-insertion order as [`entries`](RadixTrie::entries),
    /// and subtrees that cannot contain a hit are never walked.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie = RadixTrie::new();
    /// trie.add("bar", 15)?.add("barstool", 16)?.add("baz", 17)?;
    ///
    /// let hits: Vec<(String, &i32)> = trie.fuzzy_get("BAR").collect();
    /// assert_eq!(hits, vec![("bar".to_string(), &15), ("barstool".to_string(), &16)]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn fuzzy_get(&self, query: &str) -> FuzzyGet<'_, V> {
        FuzzyGet {
            stack: vec![(String::new(), query.to_lowercase(), &self.root)],
        }
    }

    /// Returns a lazy iterator over the key-value pairs of the trie.
    ///
    /// Entries come out depth-first, pre-order, in child-insertion order.
    /// Each call yields a fresh iterator over the live structure.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1).unwrap();
    /// trie.add("b", 2).unwrap();
    ///
    /// for (key, value) in trie.entries() {
    ///     println!("{key}: {value}");
    /// }
    /// ```
    pub fn entries(&self) -> Entries<'_, V> {
        Entries {
            stack: vec![(String::new(), &self.root)],
        }
    }

    /// Returns a lazy iterator over the key-value pairs of the trie.
    ///
    /// Alias for [`entries`](RadixTrie::entries) under the conventional map
    /// name.
    pub fn iter(&self) -> Entries<'_, V> {
        self.entries()
    }

    /// Returns an iterator over the keys of the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1).unwrap();
    /// trie.add("b", 2).unwrap();
    ///
    /// for key in trie.keys() {
    ///     println!("Key: {key}");
    /// }
    /// ```
    pub fn keys(&self) -> Keys<'_, V> {
        Keys {
            inner: self.entries(),
        }
    }

    /// Returns an iterator over the values of the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1).unwrap();
    /// trie.add("b", 2).unwrap();
    ///
    /// for value in trie.values() {
    ///     println!("Value: {value}");
    /// }
    /// ```
    pub fn values(&self) -> Values<'_, V> {
        Values {
            inner: self.entries(),
        }
    }

    /// Applies `f` to every key-value pair, in the same order as
    /// [`entries`](RadixTrie::entries).
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1).unwrap();
    /// trie.add("ab", 2).unwrap();
    ///
    /// let mut seen = Vec::new();
    /// trie.for_each(|key, value| seen.push(format!("{key}={value}")));
    /// assert_eq!(seen, vec!["a=1", "ab=2"]);
    /// ```
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &V),
    {
        for (key, value) in self.entries() {
            f(&key, value);
        }
    }

    /// Empties the trie, returning an iterator over the removed pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1).unwrap();
    /// trie.add("b", 2).unwrap();
    ///
    /// let drained: Vec<(String, i32)> = trie.drain().collect();
    /// assert_eq!(drained.len(), 2);
    /// assert!(trie.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<V> {
        self.size = 0;
        let root = std::mem::replace(&mut self.root, Node::new());
        Drain {
            inner: IntoIter {
                stack: vec![(String::new(), root)],
            },
        }
    }
}

impl<V, K: AsRef<str>, U: Into<V>, const N: usize> From<[(K, U); N]> for RadixTrie<V> {
    /// # Panics
    ///
    /// Panics if any key in the array is empty.
    fn from(array: [(K, U); N]) -> Self {
        let mut trie = RadixTrie::new();
        trie.extend(array);
        trie
    }
}

impl<V, K, U> From<&[(K, U)]> for RadixTrie<V>
where
    K: AsRef<str> + Clone,
    U: Into<V> + Clone,
{
    /// # Panics
    ///
    /// Panics if any key in the slice is empty.
    fn from(slice: &[(K, U)]) -> Self {
        let mut trie = RadixTrie::new();
        trie.extend(slice.iter().cloned());
        trie
    }
}

impl<V> From<HashMap<String, V>> for RadixTrie<V> {
    /// # Panics
    ///
    /// Panics if any key in the map is empty.
    fn from(map: HashMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<V> From<BTreeMap<String, V>> for RadixTrie<V> {
    /// # Panics
    ///
    /// Panics if any key in the map is empty.
    fn from(map: BTreeMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<V> From<RadixTrie<V>> for HashMap<String, V> {
    fn from(trie: RadixTrie<V>) -> Self {
        trie.into_iter().collect()
    }
}

impl<V, K: AsRef<str>, U: Into<V>> Extend<(K, U)> for RadixTrie<V> {
    /// # Panics
    ///
    /// Panics if any key in the iterator is empty.
    fn extend<I: IntoIterator<Item = (K, U)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value.into())
                .expect("bulk construction requires non-empty keys");
        }
    }
}

impl<V, K, U> FromIterator<(K, U)> for RadixTrie<V>
where
    K: AsRef<str>,
    U: Into<V>,
{
    /// # Panics
    ///
    /// Panics if any key in the iterator is empty.
    fn from_iter<I: IntoIterator<Item = (K, U)>>(iter: I) -> Self {
        let mut trie = RadixTrie::new();
        trie.extend(iter);
        trie
    }
}

impl<V: Clone> Clone for RadixTrie<V> {
    fn clone(&self) -> Self {
        RadixTrie {
            root: self.root.clone(),
            size: self.size,
        }
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for RadixTrie<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map_debug = f.debug_map();

        for (key, value) in self.entries() {
            map_debug.entry(&key, value);
        }

        map_debug.finish()
    }
}

impl<V: PartialEq> PartialEq for RadixTrie<V> {
    /// Two tries are equal when they store the same keys with equal values;
    /// insertion order does not matter.
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }

        let mut lhs: Vec<_> = self.entries().collect();
        let mut rhs: Vec<_> = other.entries().collect();
        lhs.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));
        rhs.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));

        lhs == rhs
    }
}

impl<V: Eq> Eq for RadixTrie<V> {}

impl<V: Hash> Hash for RadixTrie<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);

        let mut entries: Vec<_> = self.entries().collect();
        entries.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));

        for (key, value) in entries {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<V, Q: ?Sized> Index<&Q> for RadixTrie<V>
where
    Q: AsRef<str>,
{
    type Output = V;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).expect("no entry found for key")
    }
}

impl<V, Q: ?Sized> IndexMut<&Q> for RadixTrie<V>
where
    Q: AsRef<str>,
{
    fn index_mut(&mut self, key: &Q) -> &mut Self::Output {
        self.get_mut(key).expect("no entry found for key")
    }
}
