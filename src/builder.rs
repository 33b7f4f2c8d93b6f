use crate::error::Error;
use crate::error::Result;
use crate::hash_map::HashMap;
use crate::hash_set::HashSet;
use crate::hasher::KeyHasher;

/// Collects the construction parameters of a [`HashMap`] or [`HashSet`].
///
/// The hash function is the one required parameter: building without one
/// fails with [`Error::MissingHashFunction`].
///
/// # Examples
///
/// ```rust
/// use perturb_hash::Builder;
/// use perturb_hash::Error;
///
/// let map = Builder::new()
///     .with_capacity(100)
///     .with_hasher(|k: &u32| *k as u64)
///     .build_map::<u32, String>()
///     .unwrap();
/// assert!(map.growth_threshold() >= 100);
///
/// let missing = Builder::<fn(&u32) -> u64>::new().build_set::<u32>();
/// assert_eq!(missing.err(), Some(Error::MissingHashFunction));
/// ```
#[derive(Debug, Clone)]
pub struct Builder<H> {
    capacity: Option<usize>,
    hasher: Option<H>,
}

impl<H> Default for Builder<H> {
    fn default() -> Self {
        Self {
            capacity: None,
            hasher: None,
        }
    }
}

impl<H> Builder<H> {
    /// Creates a builder for an eight-slot table with no hash function yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sizes the table so that `min_elements` entries fit without growing.
    pub fn with_capacity(mut self, min_elements: usize) -> Self {
        self.capacity = Some(min_elements);
        self
    }

    /// Sets the hash function.
    pub fn with_hasher(mut self, hasher: H) -> Self {
        self.hasher = Some(hasher);
        self
    }

    /// Builds an empty [`HashMap`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingHashFunction`] if no hash function was set.
    pub fn build_map<K, V>(self) -> Result<HashMap<K, V, H>>
    where
        K: Eq,
        H: KeyHasher<K>,
    {
        let hasher = self.hasher.ok_or(Error::MissingHashFunction)?;
        Ok(match self.capacity {
            Some(capacity) => HashMap::with_capacity_and_hasher(capacity, hasher),
            None => HashMap::with_hasher(hasher),
        })
    }

    /// Builds an empty [`HashSet`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingHashFunction`] if no hash function was set.
    pub fn build_set<T>(self) -> Result<HashSet<T, H>>
    where
        T: Eq,
        H: KeyHasher<T>,
    {
        let hasher = self.hasher.ok_or(Error::MissingHashFunction)?;
        Ok(match self.capacity {
            Some(capacity) => HashSet::with_capacity_and_hasher(capacity, hasher),
            None => HashSet::with_hasher(hasher),
        })
    }
}
