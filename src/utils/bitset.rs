//! Fixed-capacity bit sets for fixed-point analyses.
//!
//! The dominator analysis keeps one set per node and intersects those sets
//! until nothing changes. Storing them as packed words keeps each intersection
//! a tight loop over `capacity / 64` machine words, and the change flag falls
//! out of the same loop for free.
//!
//! Positions are plain `usize` offsets. Callers map their own identities (for
//! example [`NodeId`](crate::NodeId)s) onto `0..capacity` before using a set.

use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// A set of positions in `0..capacity`, one bit per position.
///
/// In-place operations take the other operand by shared reference, so the
/// borrow checker already rules out a set being combined with itself while
/// it is being modified.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    words: Vec<u64>,
    capacity: usize,
}

impl BitSet {
    /// Creates an empty set able to hold positions `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        BitSet {
            words: vec![0; capacity.div_ceil(WORD_BITS)],
            capacity,
        }
    }

    /// Creates a set holding every position in `0..capacity`.
    #[must_use]
    pub fn full(capacity: usize) -> Self {
        let mut set = BitSet {
            words: vec![u64::MAX; capacity.div_ceil(WORD_BITS)],
            capacity,
        };
        set.mask_tail();
        set
    }

    /// Creates a set holding exactly `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= capacity`.
    #[must_use]
    pub fn singleton(capacity: usize, position: usize) -> Self {
        let mut set = Self::new(capacity);
        set.insert(position);
        set
    }

    /// Returns the number of positions the set can address.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of positions present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if no position is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Adds `position`, returning `true` if it was not present before.
    ///
    /// # Panics
    ///
    /// Panics if `position >= capacity`.
    pub fn insert(&mut self, position: usize) -> bool {
        let (word, mask) = self.locate(position);
        let absent = self.words[word] & mask == 0;
        self.words[word] |= mask;
        absent
    }

    /// Returns `true` if `position` is present. Out-of-range positions are
    /// never present.
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        if position >= self.capacity {
            return false;
        }
        let (word, mask) = self.locate(position);
        self.words[word] & mask != 0
    }

    /// Keeps only the positions also present in `other`.
    ///
    /// Returns `true` if `self` changed.
    ///
    /// # Panics
    ///
    /// Panics if the capacities differ.
    pub fn intersect_with(&mut self, other: &BitSet) -> bool {
        assert_eq!(self.capacity, other.capacity, "bit set capacity mismatch");
        let mut changed = false;
        for (mine, theirs) in self.words.iter_mut().zip(&other.words) {
            let before = *mine;
            *mine &= theirs;
            changed |= before != *mine;
        }
        changed
    }

    /// Iterates over the present positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(idx, &word)| {
            let mut remaining = word;
            std::iter::from_fn(move || {
                if remaining == 0 {
                    return None;
                }
                let bit = remaining.trailing_zeros() as usize;
                remaining &= remaining - 1;
                Some(idx * WORD_BITS + bit)
            })
        })
    }

    fn locate(&self, position: usize) -> (usize, u64) {
        assert!(
            position < self.capacity,
            "position {position} out of range for capacity {}",
            self.capacity
        );
        (position / WORD_BITS, 1u64 << (position % WORD_BITS))
    }

    fn mask_tail(&mut self) {
        let used = self.capacity % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << used) - 1;
            }
        }
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let set = BitSet::new(100);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.capacity(), 100);
    }

    #[test]
    fn test_full_masks_tail_word() {
        let set = BitSet::full(70);
        assert_eq!(set.len(), 70);
        assert!(set.contains(69));
        assert!(!set.contains(70));

        assert_eq!(BitSet::full(64).len(), 64);
        assert_eq!(BitSet::full(0).len(), 0);
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut set = BitSet::new(10);
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.contains(3));
        assert!(!set.contains(4));
    }

    #[test]
    fn test_singleton() {
        let set = BitSet::singleton(130, 129);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![129]);
    }

    #[test]
    fn test_intersect_with_change_flag() {
        let mut a = BitSet::full(8);
        let mut b = BitSet::new(8);
        b.insert(1);
        b.insert(5);

        assert!(a.intersect_with(&b));
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![1, 5]);
        assert!(!a.intersect_with(&b));
    }

    #[test]
    fn test_iter_across_words() {
        let mut set = BitSet::new(200);
        for pos in [0, 63, 64, 127, 199] {
            set.insert(pos);
        }
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 63, 64, 127, 199]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_insert_out_of_range_panics() {
        let mut set = BitSet::new(4);
        set.insert(4);
    }

    #[test]
    #[should_panic(expected = "capacity mismatch")]
    fn test_mismatched_capacity_panics() {
        let mut a = BitSet::new(4);
        a.intersect_with(&BitSet::new(5));
    }
}
