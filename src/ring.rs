use crate::config::HistoryConfig;
use crate::cursor::HistoryCursor;
use crate::error::{HistoryError, HistoryResult};
use crate::index::IndexTranslator;
use tracing::{debug, trace, warn};

/// Bounded store of recent values addressed by stable logical indices.
pub trait HistoryStore {
    type Value;

    /// Append a value, forgetting the oldest one when full. Returns the
    /// logical index assigned to `value`.
    fn store(&mut self, value: Self::Value) -> HistoryResult<u64>;
    fn len(&self) -> usize;
    fn capacity(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Logical index of the oldest retained value; `0` while empty.
    fn start_index(&self) -> u64;
    /// Logical index of the newest value, `None` if nothing is stored.
    fn end_index(&self) -> Option<u64>;
    fn get(&self, index: u64) -> HistoryResult<&Self::Value>;
    fn end_value(&self) -> Option<&Self::Value> {
        self.end_index().and_then(|index| self.get(index).ok())
    }
    fn reset(&mut self);
}

/// Fixed-capacity ring that overwrites its oldest slot once full.
///
/// Every stored value gets a logical index that keeps counting up across
/// wraparounds, so a consumer can remember "frame 12345" and later ask
/// whether it is still retained.
///
/// ```rust
/// use frame_history::{HistoryStore, RingBuffer};
///
/// let mut ring = RingBuffer::new(3)?;
/// for v in [10, 20, 30, 40] {
///     ring.store(v)?;
/// }
/// assert_eq!(ring.start_index(), 1);
/// assert_eq!(ring.end_index(), Some(3));
/// assert_eq!(ring.get(3), Ok(&40));
/// assert!(ring.get(0).is_err()); // 10 was overwritten
/// # Ok::<(), frame_history::HistoryError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    slots: Box<[Option<T>]>,
    cursor: IndexTranslator,
    last_write: Option<usize>,
    end: Option<u64>,
}

impl<T> RingBuffer<T> {
    pub fn new(capacity: usize) -> HistoryResult<Self> {
        if capacity < 2 {
            return Err(HistoryError::Construction { capacity });
        }
        Ok(Self {
            slots: (0..capacity).map(|_| None).collect(),
            cursor: IndexTranslator::new(capacity),
            last_write: None,
            end: None,
        })
    }
    pub fn from_config(config: &HistoryConfig) -> HistoryResult<Self> {
        Self::new(config.capacity)
    }

    pub fn is_full(&self) -> bool {
        self.cursor.is_full()
    }
    /// Completed wraparounds since construction or the last reset.
    pub fn cycles(&self) -> u64 {
        self.cursor.cycles()
    }
    pub fn translator(&self) -> &IndexTranslator {
        &self.cursor
    }

    /// Cursor positioned on the oldest retained value.
    pub fn iter(&self) -> HistoryCursor<'_, Self> {
        HistoryCursor::from_start(self)
    }
    /// Cursor positioned on `index`, which must be retained.
    pub fn iter_from(&self, index: u64) -> HistoryResult<HistoryCursor<'_, Self>> {
        HistoryCursor::new(self, Some(index))
    }

    /// Diagnostic hook: jump the cycle counter forward without storing,
    /// to exercise the overflow guard. Has no effect before the first
    /// wraparound, and never moves the counter backwards.
    pub fn fast_forward_cycles(&mut self, cycles: u64) -> HistoryResult<()> {
        if !self.cursor.is_full() {
            return Ok(());
        }
        let mut staged = self.cursor;
        staged.set_cycles(cycles.max(self.cursor.cycles()));
        let end = self
            .last_write
            .map(|pointer| staged.pointer_to_index(pointer))
            .transpose()?;
        debug!(cycles = staged.cycles(), ?end, "fast-forwarded history cycles");
        self.cursor = staged;
        self.end = end;
        Ok(())
    }
}

impl<T> HistoryStore for RingBuffer<T> {
    type Value = T;

    fn store(&mut self, value: T) -> HistoryResult<u64> {
        let mut staged = self.cursor;
        let pointer = staged.advance();
        let index = staged.pointer_to_index(pointer).inspect_err(|err| {
            warn!(%err, pointer, "refusing store past the logical index ceiling");
        })?;
        self.slots[pointer] = Some(value);
        if staged.cycles() != self.cursor.cycles() {
            debug!(cycles = staged.cycles(), index, "history wrapped");
        }
        self.cursor = staged;
        self.last_write = Some(pointer);
        self.end = Some(index);
        trace!(index, pointer, "stored value");
        Ok(index)
    }
    fn len(&self) -> usize {
        self.cursor.size()
    }
    fn capacity(&self) -> usize {
        self.cursor.capacity()
    }
    fn start_index(&self) -> u64 {
        // Equal to pointer_to_index(next) once full; `end` already passed
        // the overflow guard so this cannot fail.
        match self.end {
            Some(end) if self.cursor.is_full() => end + 1 - self.cursor.capacity() as u64,
            _ => 0,
        }
    }
    fn end_index(&self) -> Option<u64> {
        self.end
    }
    fn get(&self, index: u64) -> HistoryResult<&T> {
        let end = self.end.ok_or(HistoryError::NoData)?;
        let start = self.start_index();
        if index < start || index > end {
            return Err(HistoryError::IndexOutOfRange {
                index: index as i64,
                start,
                end,
            });
        }
        self.slots[self.cursor.index_to_pointer(index)]
            .as_ref()
            .ok_or(HistoryError::NoData)
    }
    fn end_value(&self) -> Option<&T> {
        self.last_write.and_then(|pointer| self.slots[pointer].as_ref())
    }
    fn reset(&mut self) {
        debug!(
            capacity = self.cursor.capacity(),
            dropped = self.cursor.size(),
            "history reset"
        );
        self.cursor = IndexTranslator::new(self.cursor.capacity());
        self.last_write = None;
        self.end = None;
    }
}
