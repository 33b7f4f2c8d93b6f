use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Index;
use core::ops::IndexMut;

use crate::error::Error;
use crate::error::Result;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;
use crate::hasher::KeyHasher;

/// A key-to-value map stored in an open-addressing [`HashTable`].
///
/// `HashMap<K, V, H>` owns its keys and values and hashes keys with the
/// caller-supplied hash function `H`. There is no default hash function: the
/// map cannot be constructed without one.
///
/// Operations come in two flavours:
///
/// - strict ([`insert`], [`remove`], [`get_value`]) return an [`Error`] when
///   the key is already present or missing;
/// - permissive ([`set`], [`unset`], [`get`]) never fail.
///
/// [`insert`]: HashMap::insert
/// [`remove`]: HashMap::remove
/// [`get_value`]: HashMap::get_value
/// [`set`]: HashMap::set
/// [`unset`]: HashMap::unset
/// [`get`]: HashMap::get
///
/// # Examples
///
/// ```rust
/// use perturb_hash::Error;
/// use perturb_hash::HashMap;
///
/// let mut map = HashMap::with_hasher(|k: &u32| *k as u64);
/// map.insert(1, "one").unwrap();
/// assert_eq!(map.insert(1, "uno"), Err(Error::DuplicateKey));
///
/// map.set(1, "uno");
/// assert_eq!(map[&1], "uno");
/// ```
pub struct HashMap<K, V, H> {
    table: HashTable<(K, V)>,
    hasher: H,
}

impl<K, V, H> Debug for HashMap<K, V, H>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map()
            .entries(self.table.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<K, V, H> Clone for HashMap<K, V, H>
where
    K: Clone,
    V: Clone,
    H: KeyHasher<K> + Clone,
{
    /// Copies the map by re-inserting every entry into a table of the same
    /// size.
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone_with(|(k, _)| self.hasher.hash_key(k)),
            hasher: self.hasher.clone(),
        }
    }
}

impl<K, V, H, H2> PartialEq<HashMap<K, V, H2>> for HashMap<K, V, H>
where
    K: Eq,
    V: PartialEq,
    H: KeyHasher<K>,
    H2: KeyHasher<K>,
{
    /// Maps are equal when they hold the same keys mapped to equal values,
    /// regardless of slot layout or hash function.
    fn eq(&self, other: &HashMap<K, V, H2>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V, H> Eq for HashMap<K, V, H>
where
    K: Eq,
    V: Eq,
    H: KeyHasher<K>,
{
}

impl<K, V, H> HashMap<K, V, H>
where
    K: Eq,
    H: KeyHasher<K>,
{
    /// Creates an empty map with eight slots and the given hash function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use perturb_hash::HashMap;
    /// # use perturb_hash::hasher::BuildHasherFn;
    /// #
    /// # struct SimpleHasher;
    /// # impl BuildHasher for SimpleHasher {
    /// #     type Hasher = SipHasher;
    /// #
    /// #     fn build_hasher(&self) -> Self::Hasher {
    /// #         SipHasher::new()
    /// #     }
    /// # }
    /// #
    /// let map: HashMap<i32, String, _> = HashMap::with_hasher(BuildHasherFn(SimpleHasher));
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 8);
    /// ```
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            table: HashTable::new(),
            hasher,
        }
    }

    /// Creates an empty map that holds at least `capacity` entries before it
    /// has to grow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use perturb_hash::HashMap;
    /// let map: HashMap<u64, u64, _> = HashMap::with_capacity_and_hasher(100, |k: &u64| *k);
    /// assert!(map.growth_threshold() >= 100);
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hasher: H) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hasher,
        }
    }

    /// Returns the hash function.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of slots in the underlying table.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the entry count at or above which the next insert grows the
    /// map.
    pub fn growth_threshold(&self) -> usize {
        self.table.growth_threshold()
    }

    /// Removes every entry, keeping the allocated slots.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Grows the map, if needed, so that `additional` more entries fit
    /// without another rebuild.
    pub fn reserve(&mut self, additional: usize) {
        let hasher = &self.hasher;
        self.table
            .reserve(additional, |(k, _)| hasher.hash_key(k));
    }

    /// Inserts a new key-value pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] and leaves the contents unchanged if `key`
    /// is already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use perturb_hash::Error;
    /// # use perturb_hash::HashMap;
    /// let mut map = HashMap::with_hasher(|k: &&str| k.len() as u64);
    /// assert_eq!(map.insert("a", 1), Ok(()));
    /// assert_eq!(map.insert("a", 2), Err(Error::DuplicateKey));
    /// assert_eq!(map.get(&"a"), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        match self.entry(key) {
            Entry::Occupied(_) => Err(Error::DuplicateKey),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// Removes `key`, returning its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if `key` is not present.
    pub fn remove(&mut self, key: &K) -> Result<V> {
        self.unset(key).ok_or(Error::MissingKey)
    }

    /// Inserts or overwrites the value for `key`, returning the previous
    /// value if there was one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use perturb_hash::HashMap;
    /// let mut map = HashMap::with_hasher(|k: &u8| *k as u64);
    /// assert_eq!(map.set(37, "a"), None);
    /// assert_eq!(map.set(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.entry(key) {
            Entry::Occupied(mut entry) => Some(entry.insert(value)),
            Entry::Vacant(entry) => {
                entry.insert(value);
                None
            }
        }
    }

    /// Removes `key` if present, returning its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use perturb_hash::HashMap;
    /// let mut map = HashMap::with_hasher(|k: &u8| *k as u64);
    /// map.set(1, "a");
    /// assert_eq!(map.unset(&1), Some("a"));
    /// assert_eq!(map.unset(&1), None);
    /// ```
    pub fn unset(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes `key` if present, returning the stored key and its value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hasher.hash_key(key);
        self.table.remove(hash, |(k, _)| k == key)
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns a reference to the value for `key`, if present.
    pub fn get(&self, key: &K) -> Option<&V> {
        let hash = self.hasher.hash_key(key);
        self.table.find(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value for `key`, if present.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hasher.hash_key(key);
        self.table
            .find_mut(hash, |(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if `key` is not present. Unlike
    /// `map[&key] = ..`, this never creates an entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use perturb_hash::Error;
    /// # use perturb_hash::HashMap;
    /// let mut map = HashMap::with_hasher(|k: &u8| *k as u64);
    /// map.set(1, 10);
    /// assert_eq!(map.get_value(&1), Ok(&10));
    /// assert_eq!(map.get_value(&2), Err(Error::MissingKey));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn get_value(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(Error::MissingKey)
    }

    /// Mutable variant of [`get_value`](HashMap::get_value).
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingKey`] if `key` is not present.
    pub fn get_value_mut(&mut self, key: &K) -> Result<&mut V> {
        self.get_mut(key).ok_or(Error::MissingKey)
    }

    /// Returns the value for `key`, first inserting `V::default()` if the key
    /// is missing. This is what `map[&key]` does in a mutable context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use perturb_hash::HashMap;
    /// let mut counts = HashMap::<&str, u32, _>::with_hasher(|w: &&str| w.len() as u64);
    /// for word in ["a", "b", "a"] {
    ///     *counts.get_or_insert_default(&word) += 1;
    /// }
    /// counts[&"c"] += 5;
    ///
    /// assert_eq!(counts[&"a"], 2);
    /// assert_eq!(counts[&"b"], 1);
    /// assert_eq!(counts[&"c"], 5);
    /// ```
    pub fn get_or_insert_default(&mut self, key: &K) -> &mut V
    where
        K: Clone,
        V: Default,
    {
        let hash = self.hasher.hash_key(key);
        let hasher = &self.hasher;
        match self
            .table
            .entry(hash, |(k, _)| k == key, |(k, _)| hasher.hash_key(k))
        {
            TableEntry::Occupied(entry) => &mut entry.into_mut().1,
            TableEntry::Vacant(entry) => &mut entry.insert((key.clone(), V::default())).1,
        }
    }

    /// Gets the given key's entry for in-place manipulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use perturb_hash::HashMap;
    /// let mut map = HashMap::with_hasher(|k: &u32| *k as u64);
    ///
    /// map.entry(1).or_insert("a");
    /// map.entry(2).or_insert("b");
    /// map.entry(1).or_insert("c");
    ///
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), Some(&"b"));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let hash = self.hasher.hash_key(&key);
        let hasher = &self.hasher;
        match self
            .table
            .entry(hash, |(k, _)| k == &key, |(k, _)| hasher.hash_key(k))
        {
            TableEntry::Occupied(entry) => Entry::Occupied(OccupiedEntry { entry }),
            TableEntry::Vacant(entry) => Entry::Vacant(VacantEntry { entry, key }),
        }
    }

    /// Returns an iterator over the entries in slot order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns a freshly built vector of every key, in slot order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use perturb_hash::HashMap;
    /// let mut map = HashMap::with_hasher(|k: &u32| *k as u64);
    /// map.set(3, "c");
    /// map.set(1, "a");
    ///
    /// let mut keys = map.keys();
    /// keys.sort();
    /// assert_eq!(keys, [1, 3]);
    /// ```
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Returns a freshly built vector of every value, in slot order.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Removes every entry, yielding them in slot order.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            inner: self.table.drain(),
        }
    }

    /// Collects layout statistics of the underlying table.
    #[cfg(feature = "stats")]
    pub fn stats(&self) -> crate::TableStats {
        self.table.stats(|(k, _)| self.hasher.hash_key(k))
    }
}

impl<K, V, H> Index<&K> for HashMap<K, V, H>
where
    K: Eq,
    H: KeyHasher<K>,
{
    type Output = V;

    /// Returns the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not present. Use [`HashMap::get_value`] for a
    /// fallible lookup.
    fn index(&self, key: &K) -> &V {
        match self.get_value(key) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<K, V, H> IndexMut<&K> for HashMap<K, V, H>
where
    K: Eq + Clone,
    V: Default,
    H: KeyHasher<K>,
{
    /// Returns the value for `key`, inserting `V::default()` first if the key
    /// is missing.
    fn index_mut(&mut self, key: &K) -> &mut V {
        self.get_or_insert_default(key)
    }
}

impl<K, V, H> Extend<(K, V)> for HashMap<K, V, H>
where
    K: Eq,
    H: KeyHasher<K>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<'a, K, V, H> IntoIterator for &'a HashMap<K, V, H>
where
    K: Eq,
    H: KeyHasher<K>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, H> IntoIterator for HashMap<K, V, H> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

/// A view into a single entry in the map, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashMap`].
///
/// [`entry`]: HashMap::entry
pub enum Entry<'a, K, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Inserts a default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    V: Default,
{
    /// Inserts the default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in the map.
pub struct VacantEntry<'a, K, V> {
    entry: crate::hash_table::VacantEntry<'a, (K, V)>,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Gets a reference to the key that would be used when inserting a value.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Take ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the value into the map and returns a mutable reference to it.
    pub fn insert(self, value: V) -> &'a mut V {
        &mut self.entry.insert((self.key, value)).1
    }
}

/// A view into an occupied entry in the map.
pub struct OccupiedEntry<'a, K, V> {
    entry: crate::hash_table::OccupiedEntry<'a, (K, V)>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &K {
        &self.entry.get().0
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.entry.get().1
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entry.get_mut().1
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.entry.into_mut().1
    }

    /// Overwrites the value in place and returns the old one.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(&mut self.entry.get_mut().1, value)
    }

    /// Removes the entry, leaving a tombstone, and returns the value.
    pub fn remove(self) -> V {
        self.entry.remove().1
    }

    /// Removes the entry and returns the key and value.
    pub fn remove_entry(self) -> (K, V) {
        self.entry.remove()
    }
}

/// An iterator over the key-value pairs of a `HashMap`.
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// A draining iterator over the key-value pairs of a `HashMap`.
pub struct Drain<'a, K, V> {
    inner: crate::hash_table::Drain<'a, (K, V)>,
}

impl<K, V> Iterator for Drain<'_, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// An owning iterator over the key-value pairs of a `HashMap`.
pub struct IntoIter<K, V> {
    inner: crate::hash_table::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
