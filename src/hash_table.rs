use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::slot::Slot;

/// Slot count of a table created without a size hint, and the minimum slot
/// count of any table.
const DEFAULT_CAPACITY: usize = 8;

/// Growth multiplier applied to the entry count when a table is rebuilt.
const GROWTH_FACTOR: usize = 2;

/// Multiplier of the probe recurrence. It must satisfy `m % 4 == 1` for the
/// recurrence to visit every slot of a power-of-two table; being odd is not
/// enough (7 fails on an 8-slot table).
const PROBE_MULTIPLIER: u64 = 5;

/// Bits of the perturbation consumed per probe step.
const COLLISION_SHIFT: u32 = 4;

/// Entries a table of `capacity` slots holds before the next insert grows it.
/// Maximum load factor is 3/4.
#[inline(always)]
fn target_load_factor(capacity: usize) -> usize {
    ((capacity as u128 * 3) / 4) as usize
}

#[inline(always)]
fn target_load_factor_inverse(elements: usize) -> usize {
    ((elements as u128 * 4) / 3).min(usize::MAX as u128) as usize
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Capacity {
    slots: usize,
}

impl From<usize> for Capacity {
    /// Sizes a table for at least `elements` entries at the target load
    /// factor: a power of two, never below [`DEFAULT_CAPACITY`].
    #[inline(always)]
    fn from(elements: usize) -> Self {
        let wanted = target_load_factor_inverse(elements);
        let slots = if wanted < DEFAULT_CAPACITY {
            DEFAULT_CAPACITY
        } else {
            wanted
                .checked_next_power_of_two()
                .expect("hash table capacity overflow")
        };
        Capacity { slots }
    }
}

/// The probe sequence for one hash.
///
/// Starts at `hash % slots`; each step first shifts the perturbation and then
/// moves to `(index * 5 + 1 + perturb) % slots`. Once the perturbation is
/// exhausted the recurrence is a full-period LCG over the slot indices.
#[derive(Clone, Copy, Debug)]
struct ProbeSeq {
    index: u64,
    perturb: u64,
    slots: u64,
}

impl ProbeSeq {
    #[inline(always)]
    fn new(hash: u64, slots: usize) -> Self {
        let slots = slots as u64;
        Self {
            index: hash % slots,
            perturb: hash,
            slots,
        }
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.perturb >>= COLLISION_SHIFT;
        // Wrapping is exact: the slot count is a power of two and divides 2^64.
        self.index = self
            .index
            .wrapping_mul(PROBE_MULTIPLIER)
            .wrapping_add(1)
            .wrapping_add(self.perturb)
            % self.slots;
    }

    #[inline(always)]
    fn pos(&self) -> usize {
        self.index as usize
    }
}

/// An open-addressing hash table with perturbed probing and tombstone
/// deletion.
///
/// `HashTable<V>` stores values of type `V` in a flat array of slots. Like
/// `hashbrown::HashTable`, it does not know how to hash or compare its
/// values: every operation takes the value's hash and an equality predicate,
/// and operations that may grow the table also take a rehasher used to
/// recompute every hash when the table is rebuilt. [`HashMap`] and
/// [`HashSet`] wrap it with an owned hash function.
///
/// ## Slot resolution
///
/// Each lookup resolves a single slot index for the target. That slot either
/// holds the target or is the first empty slot (never-touched or tombstone)
/// on the target's probe chain, which is where the target would be inserted.
/// The walk runs in two phases sharing one probe position:
///
/// 1. Step past occupied, non-matching slots. The first non-occupied slot is
///    the insertion candidate.
/// 2. Keep stepping past tombstones and non-matching occupants until a match
///    or a never-touched slot is reached. A match wins; a never-touched slot
///    proves absence, and the candidate from phase 1 is returned.
///
/// ## Growth
///
/// Before an insert, a table whose entry count has reached
/// [`growth_threshold`](HashTable::growth_threshold) (3/4 of its slots) is
/// rebuilt with room for twice its entries. A table whose entries plus
/// tombstones have reached the threshold is rebuilt at its current size,
/// which clears the tombstones. The table never shrinks.
///
/// [`HashMap`]: crate::HashMap
/// [`HashSet`]: crate::HashSet
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use perturb_hash::hash_table::Entry;
/// # use perturb_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::with_capacity(100);
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123, |p| hash_id(p.id)) {
///     Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     Entry::Occupied(_) => unreachable!(),
/// }
///
/// assert_eq!(table.find(hash, |p| p.id == 123).map(|p| p.name.as_str()), Some("Alice"));
/// ```
pub struct HashTable<V> {
    slots: Vec<Slot<V>>,

    populated: usize,
    // Slots that are not never-touched: occupied plus tombstones.
    used: usize,
    max_pop: usize,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let strip: String = self.slots.iter().map(Slot::state_char).collect();
        f.debug_struct("HashTable")
            .field("slots", &strip)
            .field("populated", &self.populated)
            .field("tombstones", &self.tombstones())
            .field("capacity", &self.slots.len())
            .field("growth_threshold", &self.max_pop)
            .finish()
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with the default eight slots.
    ///
    /// ```rust
    /// # use perturb_hash::hash_table::HashTable;
    /// let table: HashTable<u64> = HashTable::new();
    /// assert_eq!(table.capacity(), 8);
    /// assert_eq!(table.growth_threshold(), 6);
    /// ```
    pub fn new() -> Self {
        Self::with_slots(Capacity {
            slots: DEFAULT_CAPACITY,
        })
    }

    /// Creates an empty table that can hold at least `capacity` values
    /// before it has to grow.
    ///
    /// The slot count is the smallest power of two (at least eight) that
    /// keeps `capacity` entries within the 3/4 load factor.
    ///
    /// ```rust
    /// # use perturb_hash::hash_table::HashTable;
    /// let table: HashTable<String> = HashTable::with_capacity(100);
    /// assert!(table.growth_threshold() >= 100);
    /// assert_eq!(table.capacity(), 256);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_slots(Capacity::from(capacity))
    }

    fn with_slots(capacity: Capacity) -> Self {
        let mut slots = Vec::with_capacity(capacity.slots);
        slots.resize_with(capacity.slots, Slot::default);
        Self {
            slots,
            populated: 0,
            used: 0,
            max_pop: target_load_factor(capacity.slots),
        }
    }

    /// Returns the number of values in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table holds no values.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the entry count at or above which the next insert rebuilds
    /// the table.
    pub fn growth_threshold(&self) -> usize {
        self.max_pop
    }

    /// Returns the number of slots that held a value which was since removed.
    pub fn tombstones(&self) -> usize {
        self.used - self.populated
    }

    /// Removes every value. The slot count is kept and every slot returns to
    /// the never-touched state.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::default();
        }
        self.populated = 0;
        self.used = 0;
    }

    /// Resolves the slot for the value `eq` accepts: the slot holding it, or
    /// the slot where it would be inserted.
    fn resolve_index(&self, hash: u64, eq: impl Fn(&V) -> bool) -> usize {
        let mut probe = ProbeSeq::new(hash, self.slots.len());

        loop {
            let slot = &self.slots[probe.pos()];
            if slot.is_empty() || slot.matches(&eq) {
                break;
            }
            probe.advance();
        }

        let first_candidate = probe.pos();

        // Continues from where phase one stopped.
        loop {
            let slot = &self.slots[probe.pos()];
            if slot.is_unused() || slot.matches(&eq) {
                break;
            }
            probe.advance();
        }

        if self.slots[probe.pos()].is_unused() {
            first_candidate
        } else {
            probe.pos()
        }
    }

    /// Finds the value `eq` accepts among values hashing to `hash`.
    ///
    /// ```rust
    /// # use perturb_hash::hash_table::HashTable;
    /// let mut table = HashTable::new();
    /// table.entry(7, |v: &u64| *v == 7, |v| *v).or_insert(7);
    ///
    /// assert_eq!(table.find(7, |v| *v == 7), Some(&7));
    /// assert_eq!(table.find(8, |v| *v == 8), None);
    /// ```
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let index = self.resolve_index(hash, eq);
        self.slots[index].get()
    }

    /// Mutable variant of [`find`](HashTable::find).
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let index = self.resolve_index(hash, eq);
        self.slots[index].get_mut()
    }

    /// Returns the entry for the value `eq` accepts, growing or compacting
    /// the table first if it is at its threshold.
    ///
    /// `hasher` must produce, for every stored value, the same hash that was
    /// passed when it was inserted.
    ///
    /// ```rust
    /// # use perturb_hash::hash_table::Entry;
    /// # use perturb_hash::hash_table::HashTable;
    /// let mut table: HashTable<(u64, &str)> = HashTable::new();
    ///
    /// match table.entry(1, |(k, _)| *k == 1, |(k, _)| *k) {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert((1, "one"));
    ///     }
    ///     Entry::Occupied(_) => unreachable!(),
    /// }
    ///
    /// match table.entry(1, |(k, _)| *k == 1, |(k, _)| *k) {
    ///     Entry::Occupied(entry) => assert_eq!(entry.get(), &(1, "one")),
    ///     Entry::Vacant(_) => unreachable!(),
    /// }
    /// ```
    pub fn entry(
        &mut self,
        hash: u64,
        eq: impl Fn(&V) -> bool,
        hasher: impl Fn(&V) -> u64,
    ) -> Entry<'_, V> {
        self.maybe_resize_rehash(&hasher);

        let index = self.resolve_index(hash, eq);
        if self.slots[index].is_empty() {
            Entry::Vacant(VacantEntry { table: self, index })
        } else {
            Entry::Occupied(OccupiedEntry { table: self, index })
        }
    }

    /// Removes and returns the value `eq` accepts, leaving a tombstone in its
    /// slot.
    ///
    /// ```rust
    /// # use perturb_hash::hash_table::HashTable;
    /// let mut table = HashTable::new();
    /// table.entry(3, |v: &u64| *v == 3, |v| *v).or_insert(3);
    ///
    /// assert_eq!(table.remove(3, |v| *v == 3), Some(3));
    /// assert_eq!(table.remove(3, |v| *v == 3), None);
    /// assert_eq!(table.tombstones(), 1);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let index = self.resolve_index(hash, eq);
        let removed = self.slots[index].clear();
        if removed.is_some() {
            self.populated -= 1;
        }
        removed
    }

    /// Rebuilds the table, if needed, so that `additional` more values fit
    /// without growing.
    pub fn reserve(&mut self, additional: usize, hasher: impl Fn(&V) -> u64) {
        let wanted = self.populated.saturating_add(additional);
        if wanted > self.max_pop {
            self.do_resize_rehash(Capacity::from(wanted), &hasher);
        }
    }

    /// Returns an iterator over the values in slot order.
    ///
    /// ```rust
    /// # use perturb_hash::hash_table::HashTable;
    /// let mut table = HashTable::new();
    /// for v in [4u64, 9, 16] {
    ///     table.entry(v, |x: &u64| *x == v, |x| *x).or_insert(v);
    /// }
    ///
    /// let mut seen: Vec<u64> = table.iter().copied().collect();
    /// seen.sort();
    /// assert_eq!(seen, [4, 9, 16]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.populated,
        }
    }

    /// Removes every value, yielding them in slot order. Values not consumed
    /// before the iterator is dropped are dropped with it.
    pub fn drain(&mut self) -> Drain<'_, V> {
        Drain {
            table: self,
            index: 0,
        }
    }

    /// Builds an independent copy with the same slot count by re-inserting
    /// every value. Tombstones are not carried over.
    pub fn clone_with(&self, hasher: impl Fn(&V) -> u64) -> Self
    where
        V: Clone,
    {
        let mut cloned = Self::with_slots(Capacity {
            slots: self.slots.len(),
        });
        for value in self.iter() {
            cloned.insert_unique(hasher(value), value.clone());
        }
        cloned
    }

    fn place(&mut self, index: usize, value: V) -> &mut V {
        let slot = &mut self.slots[index];
        if slot.is_unused() {
            self.used += 1;
        }
        self.populated += 1;
        slot.set(value)
    }

    // Only valid when `value` is known to be absent and the table is below its
    // threshold, as during a rebuild.
    fn insert_unique(&mut self, hash: u64, value: V) {
        let index = self.resolve_index(hash, |_| false);
        self.place(index, value);
    }

    #[inline]
    fn maybe_resize_rehash(&mut self, hasher: &impl Fn(&V) -> u64) {
        if self.populated >= self.max_pop {
            self.resize_rehash(hasher);
        } else if self.used >= self.max_pop {
            self.compact(hasher);
        }
    }

    #[cold]
    fn resize_rehash(&mut self, hasher: &impl Fn(&V) -> u64) {
        let capacity = Capacity::from(self.populated.saturating_mul(GROWTH_FACTOR));
        table_log!(
            "growing hash table from {} to {} slots ({} entries)",
            self.slots.len(),
            capacity.slots,
            self.populated
        );
        self.do_resize_rehash(capacity, hasher);
    }

    /// Purges tombstones. A table whose live entries already fill most of the
    /// threshold is grown as well, so that the next purge is at least half a
    /// threshold of inserts away.
    #[cold]
    fn compact(&mut self, hasher: &impl Fn(&V) -> u64) {
        let wanted = Capacity::from(self.populated.saturating_mul(GROWTH_FACTOR));
        let capacity = Capacity {
            slots: wanted.slots.max(self.slots.len()),
        };
        table_log!(
            "compacting hash table of {} slots into {} ({} entries, {} tombstones)",
            self.slots.len(),
            capacity.slots,
            self.populated,
            self.tombstones()
        );
        self.do_resize_rehash(capacity, hasher);
    }

    fn do_resize_rehash(&mut self, capacity: Capacity, hasher: &impl Fn(&V) -> u64) {
        debug_assert!(target_load_factor(capacity.slots) >= self.populated);

        // Hash everything before moving anything out.
        let hashes: Vec<u64> = self.iter().map(hasher).collect();

        let mut rebuilt = Self::with_slots(capacity);
        let values = self.slots.drain(..).filter_map(|mut slot| slot.clear());
        for (hash, value) in hashes.into_iter().zip(values) {
            rebuilt.insert_unique(hash, value);
        }

        *self = rebuilt;
    }
}

/// Statistics about the layout of a [`HashTable`].
///
/// Requires the `stats` feature.
#[cfg(feature = "stats")]
#[derive(Debug, Clone, PartialEq)]
pub struct TableStats {
    /// Number of values stored.
    pub len: usize,
    /// Number of slots.
    pub capacity: usize,
    /// Entry count that triggers the next growth.
    pub growth_threshold: usize,
    /// Slots that once held a value and are now empty.
    pub tombstones: usize,
    /// Slots that have never held a value.
    pub never_touched: usize,
    /// `len / capacity`.
    pub load_factor: f64,
    /// `probe_histogram[n]` is the number of values found `n` probe steps
    /// away from their home slot.
    pub probe_histogram: Vec<usize>,
}

#[cfg(feature = "stats")]
impl TableStats {
    /// Longest probe distance of any stored value.
    pub fn max_probe_length(&self) -> usize {
        self.probe_histogram.len().saturating_sub(1)
    }

    /// Mean probe distance over the stored values.
    pub fn mean_probe_length(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        let total: usize = self
            .probe_histogram
            .iter()
            .enumerate()
            .map(|(steps, count)| steps * count)
            .sum();
        total as f64 / self.len as f64
    }

    /// Pretty-print the statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Statistics ===");
        println!(
            "Population: {}/{} slots ({:.2}% load factor, threshold {})",
            self.len,
            self.capacity,
            self.load_factor * 100.0,
            self.growth_threshold
        );
        println!(
            "Slots: {} tombstones, {} never touched",
            self.tombstones, self.never_touched
        );
        println!(
            "Probe length: max {}, mean {:.3}",
            self.max_probe_length(),
            self.mean_probe_length()
        );
        for (steps, count) in self.probe_histogram.iter().enumerate() {
            println!("{steps:>3} | {count}");
        }
    }
}

#[cfg(feature = "stats")]
impl<V> HashTable<V> {
    /// Collects layout statistics. `hasher` must match the hashes the values
    /// were inserted with.
    pub fn stats(&self, hasher: impl Fn(&V) -> u64) -> TableStats {
        let mut probe_histogram = Vec::new();

        for (index, slot) in self.slots.iter().enumerate() {
            let Some(value) = slot.get() else {
                continue;
            };

            let mut probe = ProbeSeq::new(hasher(value), self.slots.len());
            let mut steps = 0;
            while probe.pos() != index {
                probe.advance();
                steps += 1;
            }

            if probe_histogram.len() <= steps {
                probe_histogram.resize(steps + 1, 0);
            }
            probe_histogram[steps] += 1;
        }

        TableStats {
            len: self.populated,
            capacity: self.slots.len(),
            growth_threshold: self.max_pop,
            tombstones: self.tombstones(),
            never_touched: self.slots.len() - self.used,
            load_factor: self.populated as f64 / self.slots.len() as f64,
            probe_histogram,
        }
    }
}

/// A view into a single entry in the hash table, which may be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, V> {
    /// A vacant entry - the value is not present in the table
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry - the value is present in the table
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default` if the entry is vacant and returns a
    /// mutable reference to the value in the entry.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Runs `f` on the value if the entry is occupied.
    pub fn and_modify(self, f: impl FnOnce(&mut V)) -> Self {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }
}

impl<'a, V> Entry<'a, V>
where
    V: Default,
{
    /// Inserts `V::default()` if the entry is vacant and returns a mutable
    /// reference to the value in the entry.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(V::default)
    }
}

/// A vacant entry: the slot where the value would be inserted.
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Inserts `value` into the resolved slot and returns a mutable reference
    /// to it.
    pub fn insert(self, value: V) -> &'a mut V {
        let Self { table, index } = self;
        table.place(index, value)
    }
}

/// An occupied entry: the slot holding the value.
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        self.table.slots[self.index].occupied()
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        self.table.slots[self.index].occupied_mut()
    }

    /// Converts the entry into a mutable reference bound to the table's
    /// lifetime.
    pub fn into_mut(self) -> &'a mut V {
        let Self { table, index } = self;
        table.slots[index].occupied_mut()
    }

    /// Overwrites the value in place, returning the previous one.
    pub fn insert(&mut self, value: V) -> V {
        match self.table.slots[self.index].replace(value) {
            Some(previous) => previous,
            None => unreachable!("occupied entry without a value"),
        }
    }

    /// Removes the value, leaving a tombstone in its slot.
    pub fn remove(self) -> V {
        let Self { table, index } = self;
        match table.slots[index].clear() {
            Some(value) => {
                table.populated -= 1;
                value
            }
            None => unreachable!("occupied entry without a value"),
        }
    }
}

/// An iterator over the values of a [`HashTable`], in slot order.
///
/// This struct is created by [`HashTable::iter`].
pub struct Iter<'a, V> {
    slots: core::slice::Iter<'a, Slot<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for slot in self.slots.by_ref() {
            if let Some(value) = slot.get() {
                self.remaining -= 1;
                return Some(value);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a HashTable<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A draining iterator over the values of a [`HashTable`].
///
/// This struct is created by [`HashTable::drain`]. When it is dropped the
/// table is empty and every slot is never-touched again.
pub struct Drain<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<V> Drop for Drain<'_, V> {
    fn drop(&mut self) {
        self.table.clear();
    }
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        while self.table.populated > 0 && self.index < self.table.slots.len() {
            let slot = &mut self.table.slots[self.index];
            self.index += 1;
            if let Some(value) = slot.clear() {
                self.table.populated -= 1;
                return Some(value);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.table.populated, Some(self.table.populated))
    }
}

/// An owning iterator over the values of a [`HashTable`], in slot order.
pub struct IntoIter<V> {
    slots: alloc::vec::IntoIter<Slot<V>>,
    remaining: usize,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for mut slot in self.slots.by_ref() {
            if let Some(value) = slot.clear() {
                self.remaining -= 1;
                return Some(value);
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> IntoIterator for HashTable<V> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            slots: self.slots.into_iter(),
            remaining: self.populated,
        }
    }
}
