//! Transposition table for caching search bounds.

use std::hash::BuildHasherDefault;
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxHasher;

/// Bounds on the minimax value of one position: the true value lies in
/// `[lower, upper]` for the horizon the position was searched with.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TranspositionEntry {
    pub lower: f64,
    pub upper: f64,
    /// Remaining depth when the entry was stored. Recorded for inspection
    /// only; lookups never compare it.
    pub horizon: u8,
}

impl TranspositionEntry {
    pub fn exact(value: f64, horizon: u8) -> Self {
        Self {
            lower: value,
            upper: value,
            horizon,
        }
    }

    pub fn lower_bound(value: f64, horizon: u8) -> Self {
        Self {
            lower: value,
            upper: f64::INFINITY,
            horizon,
        }
    }

    pub fn upper_bound(value: f64, horizon: u8) -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: value,
            horizon,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.lower == self.upper
    }
}

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Maps board fingerprints to their latest bounds. New entries overwrite old
/// ones. When built with a capacity, the least recently used entry is evicted
/// once the table is full.
pub struct TranspositionTable {
    table: LruCache<u64, TranspositionEntry, FxBuildHasher>,
    hits: usize,
    stores: usize,
    overwrites: usize,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TranspositionTable {
    /// `None` (or zero) leaves the table unbounded.
    pub fn new(capacity: Option<usize>) -> Self {
        let table = match capacity.and_then(NonZeroUsize::new) {
            Some(capacity) => LruCache::with_hasher(capacity, FxBuildHasher::default()),
            None => LruCache::unbounded_with_hasher(FxBuildHasher::default()),
        };

        Self {
            table,
            hits: 0,
            stores: 0,
            overwrites: 0,
        }
    }

    pub fn probe(&mut self, fingerprint: u64) -> Option<TranspositionEntry> {
        let entry = self.table.get(&fingerprint).copied();
        if entry.is_some() {
            self.hits += 1;
        }
        entry
    }

    /// Reads an entry without counting a hit or refreshing its recency.
    pub fn peek(&self, fingerprint: u64) -> Option<&TranspositionEntry> {
        self.table.peek(&fingerprint)
    }

    pub fn store(&mut self, fingerprint: u64, entry: TranspositionEntry) {
        debug_assert!(entry.lower <= entry.upper);
        self.stores += 1;
        if self.table.put(fingerprint, entry).is_some() {
            self.overwrites += 1;
        }
    }

    pub fn evict(&mut self, fingerprint: u64) -> Option<TranspositionEntry> {
        self.table.pop(&fingerprint)
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
        self.stores = 0;
        self.overwrites = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &TranspositionEntry)> {
        self.table.iter().map(|(fingerprint, entry)| (*fingerprint, entry))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn stores(&self) -> usize {
        self.stores
    }

    pub fn overwrites(&self) -> usize {
        self.overwrites
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_probe() {
        let mut table = TranspositionTable::default();
        assert!(table.probe(42).is_none());

        table.store(42, TranspositionEntry::exact(3.5, 2));
        assert_eq!(table.probe(42), Some(TranspositionEntry::exact(3.5, 2)));
        assert_eq!(table.hits(), 1);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_entries_are_overwritten_not_merged() {
        let mut table = TranspositionTable::default();
        table.store(7, TranspositionEntry::lower_bound(10., 3));
        table.store(7, TranspositionEntry::upper_bound(-4., 1));

        let entry = table.probe(7).unwrap();
        assert_eq!(entry.lower, f64::NEG_INFINITY);
        assert_eq!(entry.upper, -4.);
        assert_eq!(entry.horizon, 1);
        assert_eq!(table.overwrites(), 1);
        assert_eq!(table.stores(), 2);
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let mut table = TranspositionTable::new(Some(2));
        table.store(1, TranspositionEntry::exact(1., 1));
        table.store(2, TranspositionEntry::exact(2., 1));
        // touch 1 so that 2 becomes the oldest
        table.probe(1);
        table.store(3, TranspositionEntry::exact(3., 1));

        assert_eq!(table.len(), 2);
        assert!(table.peek(1).is_some());
        assert!(table.peek(2).is_none());
        assert!(table.peek(3).is_some());
    }

    #[test]
    fn test_evict_and_clear() {
        let mut table = TranspositionTable::default();
        table.store(1, TranspositionEntry::exact(1., 1));
        table.store(2, TranspositionEntry::exact(2., 1));

        assert_eq!(table.evict(1), Some(TranspositionEntry::exact(1., 1)));
        assert_eq!(table.evict(1), None);
        assert_eq!(table.len(), 1);

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.stores(), 0);
    }
}
