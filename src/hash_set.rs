use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::Error;
use crate::error::Result;
use crate::hash_table::Entry;
use crate::hash_table::HashTable;
use crate::hasher::KeyHasher;

/// A set of owned elements stored in an open-addressing [`HashTable`].
///
/// Elements are hashed with the caller-supplied hash function `H` and compared
/// with `Eq`. Strict operations ([`insert`](HashSet::insert),
/// [`remove`](HashSet::remove)) report duplicates and missing elements as
/// errors; permissive ones ([`add`](HashSet::add),
/// [`discard`](HashSet::discard)) just report whether anything changed.
///
/// # Examples
///
/// ```rust
/// use perturb_hash::Error;
/// use perturb_hash::HashSet;
///
/// let mut set = HashSet::with_hasher(|v: &i32| *v as u64);
/// set.insert(1).unwrap();
/// assert_eq!(set.insert(1), Err(Error::DuplicateElement));
/// assert!(!set.add(1));
///
/// assert_eq!(set.remove(&1), Ok(1));
/// assert!(!set.discard(&1));
/// ```
pub struct HashSet<T, H> {
    table: HashTable<T>,
    hasher: H,
}

impl<T, H, H2> PartialEq<HashSet<T, H2>> for HashSet<T, H>
where
    T: Eq,
    H: KeyHasher<T>,
    H2: KeyHasher<T>,
{
    fn eq(&self, other: &HashSet<T, H2>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|v| other.contains(v))
    }
}

impl<T, H> Eq for HashSet<T, H>
where
    T: Eq,
    H: KeyHasher<T>,
{
}

impl<T, H> Debug for HashSet<T, H>
where
    T: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.table.iter()).finish()
    }
}

impl<T, H> Clone for HashSet<T, H>
where
    T: Clone,
    H: KeyHasher<T> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone_with(|v| self.hasher.hash_key(v)),
            hasher: self.hasher.clone(),
        }
    }
}

impl<T, H> HashSet<T, H>
where
    T: Eq,
    H: KeyHasher<T>,
{
    /// Creates an empty set with eight slots and the given hash function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use perturb_hash::HashSet;
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
    /// let set: HashSet<i32, _> = HashSet::with_hasher(BuildHasherFn(SimpleHasher));
    /// assert!(set.is_empty());
    /// ```
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            table: HashTable::new(),
            hasher,
        }
    }

    /// Creates an empty set that holds at least `capacity` elements before it
    /// has to grow.
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

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of slots in the underlying table.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the element count at or above which the next insert grows the
    /// set.
    pub fn growth_threshold(&self) -> usize {
        self.table.growth_threshold()
    }

    /// Removes every element, keeping the allocated slots.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Grows the set, if needed, so that `additional` more elements fit
    /// without another rebuild.
    pub fn reserve(&mut self, additional: usize) {
        let hasher = &self.hasher;
        self.table.reserve(additional, |v| hasher.hash_key(v));
    }

    /// Inserts a new element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateElement`] if an equal element is already
    /// present. The set's contents are left unchanged.
    pub fn insert(&mut self, value: T) -> Result<()> {
        if self.add(value) {
            Ok(())
        } else {
            Err(Error::DuplicateElement)
        }
    }

    /// Removes and returns the element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingElement`] if no such element is present.
    pub fn remove(&mut self, value: &T) -> Result<T> {
        self.take(value).ok_or(Error::MissingElement)
    }

    /// Adds `value` if it is not already present. Returns whether the set
    /// changed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use perturb_hash::HashSet;
    /// let mut set = HashSet::with_hasher(|v: &&str| v.len() as u64);
    /// assert!(set.add("a"));
    /// assert!(!set.add("a"));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        let hash = self.hasher.hash_key(&value);
        let hasher = &self.hasher;
        match self
            .table
            .entry(hash, |v| v == &value, |v| hasher.hash_key(v))
        {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }

    /// Removes `value` if present. Returns whether the set changed.
    pub fn discard(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes and returns the element equal to `value`, if any.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let hash = self.hasher.hash_key(value);
        self.table.remove(hash, |v| v == value)
    }

    /// Returns `true` if the set contains `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns a reference to the stored element equal to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T> {
        let hash = self.hasher.hash_key(value);
        self.table.find(hash, |v| v == value)
    }

    /// Returns an iterator over the elements in slot order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns a freshly built vector of every element, in slot order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use perturb_hash::HashSet;
    /// let mut set = HashSet::with_hasher(|v: &u8| *v as u64);
    /// set.extend([3, 1, 2]);
    ///
    /// let mut elements = set.elements();
    /// elements.sort();
    /// assert_eq!(elements, [1, 2, 3]);
    /// ```
    pub fn elements(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Removes every element, yielding them in slot order.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain {
            inner: self.table.drain(),
        }
    }

    /// Collects layout statistics of the underlying table.
    #[cfg(feature = "stats")]
    pub fn stats(&self) -> crate::TableStats {
        self.table.stats(|v| self.hasher.hash_key(v))
    }
}

impl<T, H> Extend<T> for HashSet<T, H>
where
    T: Eq,
    H: KeyHasher<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T, H> IntoIterator for &'a HashSet<T, H>
where
    T: Eq,
    H: KeyHasher<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, H> IntoIterator for HashSet<T, H> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.table.into_iter(),
        }
    }
}

/// An iterator over the elements of a `HashSet`.
pub struct Iter<'a, T> {
    inner: crate::hash_table::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// A draining iterator over the elements of a `HashSet`.
pub struct Drain<'a, T> {
    inner: crate::hash_table::Drain<'a, T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// An owning iterator over the elements of a `HashSet`.
pub struct IntoIter<T> {
    inner: crate::hash_table::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
