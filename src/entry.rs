use crate::RadixTrie;

/// Represents an entry in a `RadixTrie` which may either be vacant or
/// occupied.
///
/// This is part of the `Entry API` and is used to insert, inspect, or update
/// a key's value in place.
///
/// # Examples
///
/// ```
/// use radixtrie::{Entry, RadixTrie};
///
/// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
/// let mut trie = RadixTrie::new();
///
/// match trie.entry("a")? {
///     Entry::Vacant(entry) => {
///         entry.insert(1);
///     }
///     Entry::Occupied(entry) => {
///         *entry.into_mut() += 1;
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub enum Entry<'a, V> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, V>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, V>),
}

/// A view into an occupied entry in a `RadixTrie`.
///
/// It is part of the [`Entry`] API.
pub struct OccupiedEntry<'a, V> {
    pub(crate) trie: &'a mut RadixTrie<V>,
    pub(crate) key: String,
}

/// A view into a vacant entry in a `RadixTrie`.
///
/// It is part of the [`Entry`] API.
pub struct VacantEntry<'a, V> {
    pub(crate) trie: &'a mut RadixTrie<V>,
    pub(crate) key: String,
}

impl<'a, V> Entry<'a, V> {
    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &str {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }

    /// Returns a reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1)?;
    ///
    /// if let Some(value) = trie.entry("a")?.get() {
    ///     assert_eq!(*value, 1);
    /// }
    /// assert_eq!(trie.entry("b")?.get(), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get(&self) -> Option<&V> {
        match self {
            Entry::Occupied(entry) => Some(entry.get()),
            Entry::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to the value in the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1)?;
    ///
    /// if let Some(value) = trie.entry("a")?.get_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(trie.get("a"), Some(&2));
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_mut(&mut self) -> Option<&mut V> {
        match self {
            Entry::Occupied(entry) => Some(entry.get_mut()),
            Entry::Vacant(_) => None,
        }
    }

    /// Ensures a value is in the entry by inserting the default if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie = RadixTrie::new();
    ///
    /// trie.entry("a")?.or_default();
    /// assert_eq!(trie.get("a"), Some(&0));
    /// # Ok(())
    /// # }
    /// ```
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(V::default()),
        }
    }

    /// Ensures a value is in the entry by inserting the given value if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie = RadixTrie::new();
    ///
    /// trie.entry("a")?.or_insert(1);
    /// assert_eq!(trie.get("a"), Some(&1));
    ///
    /// *trie.entry("a")?.or_insert(10) += 1;
    /// assert_eq!(trie.get("a"), Some(&2));
    /// # Ok(())
    /// # }
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Ensures a value is in the entry by computing the default from a
    /// closure if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie: RadixTrie<String> = RadixTrie::new();
    ///
    /// trie.entry("a")?.or_insert_with(|| "hello".to_string());
    /// assert_eq!(trie.get("a"), Some(&"hello".to_string()));
    /// # Ok(())
    /// # }
    /// ```
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Ensures a value is in the entry by computing the default from the key
    /// if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie: RadixTrie<usize> = RadixTrie::new();
    ///
    /// trie.entry("hello")?.or_insert_with_key(|key| key.len());
    /// assert_eq!(trie.get("hello"), Some(&5));
    /// # Ok(())
    /// # }
    /// ```
    pub fn or_insert_with_key<F: FnOnce(&str) -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let value = default(entry.key());
                entry.insert(value)
            }
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential insert.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::RadixTrie;
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1)?;
    ///
    /// trie.entry("a")?.and_modify(|value| *value += 1).or_insert(0);
    /// assert_eq!(trie.get("a"), Some(&2));
    ///
    /// trie.entry("b")?.and_modify(|value| *value += 1).or_insert(0);
    /// assert_eq!(trie.get("b"), Some(&0));
    /// # Ok(())
    /// # }
    /// ```
    pub fn and_modify<F: FnOnce(&mut V)>(mut self, f: F) -> Self {
        if let Entry::Occupied(entry) = &mut self {
            f(entry.get_mut());
        }
        self
    }
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Returns the key of this entry.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns a reference to the value in the entry.
    pub fn get(&self) -> &V {
        self.trie
            .get(&self.key)
            .expect("occupied entry key is present")
    }

    /// Returns a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        self.trie
            .get_mut(&self.key)
            .expect("occupied entry key is present")
    }

    /// Converts the entry into a mutable reference to its value, bound to
    /// the lifetime of the trie.
    pub fn into_mut(self) -> &'a mut V {
        self.trie
            .get_mut(&self.key)
            .expect("occupied entry key is present")
    }

    /// Replaces the value in the entry, returning the old value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::{Entry, RadixTrie};
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1)?;
    ///
    /// if let Entry::Occupied(mut entry) = trie.entry("a")? {
    ///     assert_eq!(entry.insert(2), 1);
    /// }
    /// assert_eq!(trie.get("a"), Some(&2));
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(&mut self, value: V) -> V {
        std::mem::replace(self.get_mut(), value)
    }

    /// Removes the entry from the trie, returning its value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::{Entry, RadixTrie};
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie = RadixTrie::new();
    /// trie.add("a", 1)?;
    ///
    /// if let Entry::Occupied(entry) = trie.entry("a")? {
    ///     assert_eq!(entry.remove(), 1);
    /// }
    /// assert!(!trie.has("a"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn remove(self) -> V {
        let value = self
            .trie
            .root
            .remove(&self.key)
            .expect("occupied entry key is present");
        self.trie.size -= 1;
        value
    }
}

impl<'a, V> VacantEntry<'a, V> {
    /// Returns the key that would be used on insert.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Inserts a value into the entry, returning a mutable reference to it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use radixtrie::{Entry, RadixTrie};
    /// # fn main() -> Result<(), radixtrie::InvalidKeyError> {
    /// let mut trie = RadixTrie::new();
    ///
    /// if let Entry::Vacant(entry) = trie.entry("a")? {
    ///     let value = entry.insert(1);
    ///     *value += 1;
    /// }
    /// assert_eq!(trie.get("a"), Some(&2));
    /// # Ok(())
    /// # }
    /// ```
    pub fn insert(self, value: V) -> &'a mut V {
        if self.trie.root.insert(&self.key, value).is_none() {
            self.trie.size += 1;
        }
        self.trie
            .get_mut(&self.key)
            .expect("freshly inserted key is present")
    }
}
