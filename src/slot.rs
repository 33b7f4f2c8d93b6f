/// A single storage cell of a [`HashTable`](crate::HashTable).
///
/// A slot is in one of three states:
///
/// - never-touched: no payload, `ever_used == false`. A probe that reaches it
///   has reached the end of its chain.
/// - tombstone: no payload, `ever_used == true`. Logically empty, but probes
///   must keep walking past it.
/// - occupied: holds exactly one owned payload.
///
/// `ever_used` is only reset by replacing the slot wholesale, which happens
/// when the whole table is rebuilt.
#[derive(Clone)]
pub(crate) struct Slot<P> {
    payload: Option<P>,
    ever_used: bool,
}

impl<P> Default for Slot<P> {
    fn default() -> Self {
        Self {
            payload: None,
            ever_used: false,
        }
    }
}

impl<P> Slot<P> {
    /// Stores `payload`, overwriting any previous payload, and returns a
    /// reference to the stored copy.
    #[inline]
    pub(crate) fn set(&mut self, payload: P) -> &mut P {
        self.ever_used = true;
        self.payload.insert(payload)
    }

    /// Stores `payload` and hands back the one it displaced, if any.
    #[inline]
    pub(crate) fn replace(&mut self, payload: P) -> Option<P> {
        self.ever_used = true;
        self.payload.replace(payload)
    }

    /// Turns the slot into a tombstone. Clearing an empty slot is a no-op.
    #[inline]
    pub(crate) fn clear(&mut self) -> Option<P> {
        self.payload.take()
    }

    /// True for both never-touched slots and tombstones.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.payload.is_none()
    }

    /// True only for never-touched slots.
    #[inline]
    pub(crate) fn is_unused(&self) -> bool {
        !self.ever_used
    }

    #[inline]
    pub(crate) fn is_tombstone(&self) -> bool {
        self.ever_used && self.payload.is_none()
    }

    #[inline]
    pub(crate) fn matches(&self, eq: impl Fn(&P) -> bool) -> bool {
        self.payload.as_ref().is_some_and(eq)
    }

    #[inline]
    pub(crate) fn get(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    #[inline]
    pub(crate) fn get_mut(&mut self) -> Option<&mut P> {
        self.payload.as_mut()
    }

    /// Payload of a slot the caller has already resolved as occupied.
    #[inline]
    pub(crate) fn occupied(&self) -> &P {
        match &self.payload {
            Some(payload) => payload,
            None => unreachable!("occupied slot without a payload"),
        }
    }

    #[inline]
    pub(crate) fn occupied_mut(&mut self) -> &mut P {
        match &mut self.payload {
            Some(payload) => payload,
            None => unreachable!("occupied slot without a payload"),
        }
    }

    /// One character describing the slot state, for debug output.
    pub(crate) fn state_char(&self) -> char {
        if !self.is_empty() {
            '#'
        } else if self.is_tombstone() {
            'x'
        } else {
            '.'
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn fresh_slot_is_never_touched() {
        let slot: Slot<u32> = Slot::default();
        assert!(slot.is_empty());
        assert!(slot.is_unused());
        assert!(!slot.is_tombstone());
        assert!(!slot.matches(|_| true));
        assert_eq!(slot.state_char(), '.');
    }

    #[test]
    fn set_then_clear_leaves_tombstone() {
        let mut slot = Slot::default();
        slot.set("a".to_string());
        assert!(!slot.is_empty());
        assert!(!slot.is_unused());
        assert!(slot.matches(|s: &String| s == "a"));
        assert!(!slot.matches(|s: &String| s == "b"));

        assert_eq!(slot.clear(), Some("a".to_string()));
        assert!(slot.is_empty());
        assert!(!slot.is_unused());
        assert!(slot.is_tombstone());
        assert!(!slot.matches(|s: &String| s == "a"));
        assert_eq!(slot.state_char(), 'x');
    }

    #[test]
    fn clear_is_idempotent() {
        let mut slot = Slot::default();
        slot.set(5u8);
        assert_eq!(slot.clear(), Some(5));
        assert_eq!(slot.clear(), None);
        assert!(slot.is_tombstone());
    }

    #[test]
    fn overwrite_in_place() {
        let mut slot = Slot::default();
        slot.set((1u32, 10u32));
        assert_eq!(slot.replace((1, 20)), Some((1, 10)));
        assert_eq!(slot.get(), Some(&(1, 20)));
        slot.occupied_mut().1 = 30;
        assert_eq!(slot.occupied(), &(1, 30));
        assert_eq!(slot.state_char(), '#');
    }

    #[test]
    fn reuse_of_tombstone_keeps_history() {
        let mut slot = Slot::default();
        slot.set(1u8);
        slot.clear();
        *slot.set(2) += 1;
        assert_eq!(slot.get(), Some(&3));
        slot.clear();
        assert!(!slot.is_unused());
    }
}
