//! Bitmask person sets and lazy subset enumeration.
//!
//! The enumeration stages of the driver all walk power sets of some base
//! set. `Subsets` is a lazy, restartable iterator over all 2^n submasks of
//! a `PersonSet`, so no stage ever materializes a power set in memory.

/// A subset of the population, indexed by person position in the pedigree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PersonSet(u64);

impl PersonSet {
    /// The empty set.
    pub const EMPTY: PersonSet = PersonSet(0);

    /// The set containing persons `0..n`. `n` must be at most 64.
    pub fn full(n: usize) -> Self {
        assert!(n <= 64, "person sets hold at most 64 members");
        if n == 64 {
            PersonSet(u64::MAX)
        } else {
            PersonSet((1u64 << n) - 1)
        }
    }

    pub fn contains(self, idx: usize) -> bool {
        idx < 64 && self.0 & (1u64 << idx) != 0
    }

    /// This set plus one member.
    #[must_use]
    pub fn with(self, idx: usize) -> Self {
        debug_assert!(idx < 64);
        PersonSet(self.0 | (1u64 << idx))
    }

    #[must_use]
    pub fn union(self, other: PersonSet) -> Self {
        PersonSet(self.0 | other.0)
    }

    #[must_use]
    pub fn intersection(self, other: PersonSet) -> Self {
        PersonSet(self.0 & other.0)
    }

    /// Members of `universe` not in this set.
    #[must_use]
    pub fn complement_within(self, universe: PersonSet) -> Self {
        PersonSet(universe.0 & !self.0)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate member indices in ascending order.
    pub fn members(self) -> Members {
        Members(self.0)
    }

    /// Lazily enumerate all 2^len subsets of this set, including the empty
    /// set and the set itself. The walk is the standard descending-submask
    /// recurrence, so the order is deterministic.
    pub fn subsets(self) -> Subsets {
        Subsets {
            mask: self.0,
            next: Some(self.0),
        }
    }
}

/// Iterator over the member indices of a `PersonSet`.
pub struct Members(u64);

impl Iterator for Members {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(idx)
    }
}

/// Lazy iterator over every submask of a base mask.
pub struct Subsets {
    mask: u64,
    next: Option<u64>,
}

impl Iterator for Subsets {
    type Item = PersonSet;

    fn next(&mut self) -> Option<PersonSet> {
        let current = self.next?;
        self.next = if current == 0 {
            None
        } else {
            Some((current - 1) & self.mask)
        };
        Some(PersonSet(current))
    }
}
