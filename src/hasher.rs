use core::hash::BuildHasher;
use core::hash::Hash;

/// A caller-supplied hash function from keys to unsigned integers.
///
/// Any `Fn(&K) -> u64` closure or function item is a `KeyHasher<K>`, so most
/// callers never name this trait:
///
/// ```rust
/// use perturb_hash::HashSet;
///
/// fn hash_u32(v: &u32) -> u64 {
///     (*v as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
/// }
///
/// let mut set = HashSet::with_hasher(hash_u32);
/// set.add(7);
/// assert!(set.contains(&7));
/// ```
///
/// Types that already implement [`Hash`] can reuse any [`BuildHasher`] via
/// [`BuildHasherFn`].
pub trait KeyHasher<K: ?Sized> {
    /// Hashes `key`. Equal keys must produce equal hashes.
    fn hash_key(&self, key: &K) -> u64;
}

impl<K, F> KeyHasher<K> for F
where
    K: ?Sized,
    F: Fn(&K) -> u64,
{
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        self(key)
    }
}

/// Adapts a [`BuildHasher`] into a [`KeyHasher`] for every `K: Hash`.
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
/// let mut map = HashMap::with_hasher(BuildHasherFn(SimpleHasher));
/// map.set("answer".to_string(), 42);
/// assert_eq!(map.get(&"answer".to_string()), Some(&42));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildHasherFn<S>(pub S);

impl<K, S> KeyHasher<K> for BuildHasherFn<S>
where
    K: Hash + ?Sized,
    S: BuildHasher,
{
    #[inline]
    fn hash_key(&self, key: &K) -> u64 {
        self.0.hash_one(key)
    }
}

/// A randomly seeded [`foldhash`](https://docs.rs/foldhash) hasher usable for
/// any `K: Hash`.
///
/// ```rust
/// use perturb_hash::HashSet;
/// use perturb_hash::hasher;
///
/// let mut set = HashSet::with_hasher(hasher::foldhash());
/// assert!(set.add("a"));
/// assert!(!set.add("a"));
/// ```
#[cfg(feature = "foldhash")]
pub fn foldhash() -> BuildHasherFn<foldhash::fast::RandomState> {
    BuildHasherFn(foldhash::fast::RandomState::default())
}

#[cfg(test)]
mod tests {
    use siphasher::sip::SipHasher;

    use super::*;

    struct SipBuilder;

    impl BuildHasher for SipBuilder {
        type Hasher = SipHasher;

        fn build_hasher(&self) -> Self::Hasher {
            SipHasher::new_with_keys(1, 2)
        }
    }

    fn identity(v: &u64) -> u64 {
        *v
    }

    #[test]
    fn closures_and_fn_items_are_hashers() {
        let offset = 3;
        let closure = move |v: &u64| *v + offset;
        assert_eq!(closure.hash_key(&4), 7);
        assert_eq!(identity.hash_key(&9), 9);
    }

    #[test]
    fn build_hasher_adapter_is_deterministic() {
        let hasher = BuildHasherFn(SipBuilder);
        assert_eq!(hasher.hash_key("abc"), hasher.hash_key("abc"));
        assert_ne!(hasher.hash_key("abc"), hasher.hash_key("abd"));
    }

    #[cfg(feature = "foldhash")]
    #[test]
    fn foldhash_adapter_hashes_equal_keys_equally() {
        let hasher = foldhash();
        assert_eq!(hasher.hash_key(&12u32), hasher.hash_key(&12u32));
    }
}
