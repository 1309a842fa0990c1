//! Bidirectional traversal over a store's retained range.
//!
//! A cursor remembers only its own position. Bounds are read back from the
//! store on every call, so a cursor created before the retained range moved
//! reports the stale position as out of range instead of yielding whatever
//! now sits in the slot.

use crate::error::{HistoryError, HistoryResult};
use crate::ring::HistoryStore;

pub trait HistoryIterator {
    type Value;

    fn index(&self) -> HistoryResult<u64>;
    fn value(&self) -> HistoryResult<Self::Value>;
    fn has_next(&self) -> bool;
    fn has_previous(&self) -> bool;
    /// The first call after construction yields the starting value in
    /// place; later calls step one index towards the newest value.
    fn advance_next(&mut self) -> HistoryResult<Self::Value>;
    /// Mirror of [`advance_next`](Self::advance_next) towards the oldest value.
    fn advance_previous(&mut self) -> HistoryResult<Self::Value>;
}

/// Cursor over any [`HistoryStore`], holding a shared borrow of it.
///
/// ```rust
/// use frame_history::{HistoryIterator, HistoryStore, RingBuffer};
///
/// let mut ring = RingBuffer::new(3)?;
/// for v in [10, 20, 30, 40] {
///     ring.store(v)?;
/// }
/// let mut it = ring.iter();
/// let mut seen = vec![];
/// while it.has_next() {
///     seen.push(*it.advance_next()?);
/// }
/// assert_eq!(seen, [20, 30, 40]);
/// # Ok::<(), frame_history::HistoryError>(())
/// ```
pub struct HistoryCursor<'a, S: HistoryStore + ?Sized> {
    store: &'a S,
    position: u64,
    at_start: bool,
}

impl<'a, S: HistoryStore + ?Sized> HistoryCursor<'a, S> {
    /// Cursor at `start`, or at the oldest retained value when `None`.
    ///
    /// Fails with `IndexOutOfRange` if the store holds data and `start`
    /// is not retained. An empty store is accepted; reads then fail with
    /// `NoData`.
    pub fn new(store: &'a S, start: Option<u64>) -> HistoryResult<Self> {
        let Some(start) = start else {
            return Ok(Self::from_start(store));
        };
        if let Some(end) = store.end_index() {
            let first = store.start_index();
            if start < first || start > end {
                return Err(HistoryError::IndexOutOfRange {
                    index: start as i64,
                    start: first,
                    end,
                });
            }
        }
        Ok(Self {
            store,
            position: start,
            at_start: true,
        })
    }

    pub fn from_start(store: &'a S) -> Self {
        Self {
            store,
            position: store.start_index(),
            at_start: true,
        }
    }

    fn bounds(&self) -> HistoryResult<(u64, u64)> {
        let end = self.store.end_index().ok_or(HistoryError::NoData)?;
        Ok((self.store.start_index(), end))
    }

    fn consume_start(&mut self) -> Option<HistoryResult<&'a S::Value>> {
        if !self.at_start {
            return None;
        }
        let value = self.value();
        if value.is_ok() {
            self.at_start = false;
        }
        Some(value)
    }
}

impl<'a, S: HistoryStore + ?Sized> HistoryIterator for HistoryCursor<'a, S> {
    type Value = &'a S::Value;

    fn index(&self) -> HistoryResult<u64> {
        if self.store.is_empty() {
            return Err(HistoryError::NoData);
        }
        Ok(self.position)
    }
    fn value(&self) -> HistoryResult<&'a S::Value> {
        let store: &'a S = self.store;
        store.get(self.position)
    }
    fn has_next(&self) -> bool {
        self.at_start
            || self
                .store
                .end_index()
                .is_some_and(|end| self.position < end)
    }
    fn has_previous(&self) -> bool {
        self.at_start || (!self.store.is_empty() && self.position > self.store.start_index())
    }
    fn advance_next(&mut self) -> HistoryResult<&'a S::Value> {
        if let Some(value) = self.consume_start() {
            return value;
        }
        let (start, end) = self.bounds()?;
        let next = self.position + 1;
        if next > end {
            return Err(HistoryError::IndexOutOfRange {
                index: next as i64,
                start,
                end,
            });
        }
        let store: &'a S = self.store;
        let value = store.get(next)?;
        self.position = next;
        Ok(value)
    }
    fn advance_previous(&mut self) -> HistoryResult<&'a S::Value> {
        if let Some(value) = self.consume_start() {
            return value;
        }
        let (start, end) = self.bounds()?;
        if self.position <= start {
            return Err(HistoryError::IndexOutOfRange {
                index: self.position as i64 - 1,
                start,
                end,
            });
        }
        let previous = self.position - 1;
        let store: &'a S = self.store;
        let value = store.get(previous)?;
        self.position = previous;
        Ok(value)
    }
}

/// Forward traversal from the cursor's position to the newest value.
impl<'a, S: HistoryStore + ?Sized> Iterator for HistoryCursor<'a, S> {
    type Item = &'a S::Value;

    fn next(&mut self) -> Option<&'a S::Value> {
        if !self.has_next() {
            return None;
        }
        self.advance_next().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::RingBuffer;

    fn scenario() -> RingBuffer<i32> {
        let mut ring = RingBuffer::new(3).unwrap();
        for v in [10, 20, 30, 40] {
            ring.store(v).unwrap();
        }
        ring
    }

    /// Append-only store that never forgets, standing in for the ring.
    #[derive(Default)]
    struct VecStore(Vec<&'static str>);

    impl HistoryStore for VecStore {
        type Value = &'static str;
        fn store(&mut self, value: &'static str) -> HistoryResult<u64> {
            self.0.push(value);
            Ok(self.0.len() as u64 - 1)
        }
        fn len(&self) -> usize {
            self.0.len()
        }
        fn capacity(&self) -> usize {
            usize::MAX
        }
        fn start_index(&self) -> u64 {
            0
        }
        fn end_index(&self) -> Option<u64> {
            self.0.len().checked_sub(1).map(|i| i as u64)
        }
        fn get(&self, index: u64) -> HistoryResult<&&'static str> {
            self.0.get(index as usize).ok_or(HistoryError::NoData)
        }
        fn reset(&mut self) {
            self.0.clear();
        }
    }

    #[test]
    fn forward_visits_each_value_once() {
        let ring = scenario();
        let mut it = HistoryCursor::new(&ring, None).unwrap();
        let mut seen = vec![];
        while it.has_next() {
            seen.push(*it.advance_next().unwrap());
        }
        assert_eq!(seen, vec![20, 30, 40]);
        assert_eq!(it.index(), Ok(3));
        assert!(matches!(
            it.advance_next(),
            Err(HistoryError::IndexOutOfRange { index: 4, .. })
        ));
    }

    #[test]
    fn backward_visits_each_value_once() {
        let ring = scenario();
        let mut it = HistoryCursor::new(&ring, ring.end_index()).unwrap();
        let mut seen = vec![];
        while it.has_previous() {
            seen.push(*it.advance_previous().unwrap());
        }
        assert_eq!(seen, vec![40, 30, 20]);
        assert!(it.advance_previous().is_err());
    }

    #[test]
    fn first_advance_consumes_in_place() {
        let ring = scenario();
        let mut it = HistoryCursor::new(&ring, Some(2)).unwrap();
        assert!(it.has_next() && it.has_previous());
        assert_eq!(it.value(), Ok(&30));
        assert_eq!(it.advance_next(), Ok(&30));
        assert_eq!(it.index(), Ok(2));
        assert_eq!(it.advance_previous(), Ok(&20));
        assert!(!it.has_previous());
        assert_eq!(it.advance_next(), Ok(&30));
        assert_eq!(it.advance_next(), Ok(&40));
        assert!(!it.has_next());
    }

    #[test]
    fn rejects_start_outside_retained_range() {
        let ring = scenario();
        assert_eq!(
            HistoryCursor::new(&ring, Some(5)).err(),
            Some(HistoryError::IndexOutOfRange {
                index: 5,
                start: 1,
                end: 3
            })
        );
        assert!(HistoryCursor::new(&ring, Some(0)).is_err());
    }

    #[test]
    fn empty_store_reports_no_data() {
        let ring = RingBuffer::<i32>::new(3).unwrap();
        let mut it = HistoryCursor::new(&ring, Some(7)).unwrap();
        assert_eq!(it.index(), Err(HistoryError::NoData));
        assert_eq!(it.value(), Err(HistoryError::NoData));
        assert!(it.has_next());
        assert_eq!(it.advance_next(), Err(HistoryError::NoData));
        assert_eq!(it.advance_previous(), Err(HistoryError::NoData));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn single_value_backward_from_zero() {
        let mut ring = RingBuffer::new(2).unwrap();
        ring.store(5).unwrap();
        let mut it = ring.iter();
        assert_eq!(it.advance_previous(), Ok(&5));
        assert_eq!(
            it.advance_previous(),
            Err(HistoryError::IndexOutOfRange {
                index: -1,
                start: 0,
                end: 0
            })
        );
    }

    #[test]
    fn iterator_adapter_runs_to_newest() {
        let ring = scenario();
        let it = ring.iter_from(2).unwrap();
        assert_eq!(it.copied().collect::<Vec<_>>(), vec![30, 40]);
    }

    #[test]
    fn works_over_other_stores() {
        let mut store = VecStore::default();
        for word in ["a", "b", "c"] {
            store.store(word).unwrap();
        }
        let cursor = HistoryCursor::from_start(&store);
        assert_eq!(cursor.copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        store.reset();
        assert_eq!(store.end_value(), None);
    }
}
