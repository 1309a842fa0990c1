//! Pointer ↔ logical index arithmetic for a wrapping ring.
//!
//! A *pointer* is a physical slot in `0..capacity`; a *logical index* is the
//! ever-increasing position assigned to each stored value.
//!
//! ```text
//!   capacity = 3, after storing 10 20 30 40
//!
//!   slots   = [40, 20, 30]      next = 1, cycles = 1
//!   pointer    0   1   2
//!   index      3   1   2        (pointer < next => current cycle)
//! ```
//!
//! Slots before `next` were rewritten during the current cycle; slots at or
//! after `next` still hold values from the previous one.

use crate::error::{HistoryError, HistoryResult};

/// Ceiling on logical indices: 2^53 - 1, the largest integer an `f64`
/// holds exactly. Translation fails once an index would reach it.
pub const MAX_SAFE_INDEX: u64 = (1 << 53) - 1;

/// Write-cursor state of a ring and the translation between its pointers
/// and logical indices.
///
/// `Copy` so callers can stage an advance, translate, and commit only on
/// success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexTranslator {
    capacity: usize,
    size: usize,
    cycles: u64,
    next: usize,
}

impl IndexTranslator {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            size: 0,
            cycles: 0,
            next: 0,
        }
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn cycles(&self) -> u64 {
        self.cycles
    }
    /// Slot that the next write lands in.
    pub fn next(&self) -> usize {
        self.next
    }
    pub fn is_full(&self) -> bool {
        self.size >= self.capacity
    }

    /// Claim the next slot and move the cursor past it, wrapping at
    /// `capacity`. Returns the claimed pointer.
    pub fn advance(&mut self) -> usize {
        let written = self.next;
        if self.size < self.capacity {
            self.size += 1;
        }
        self.next += 1;
        if self.next == self.capacity {
            self.next = 0;
            self.cycles = self.cycles.saturating_add(1);
        }
        written
    }

    pub(crate) fn set_cycles(&mut self, cycles: u64) {
        self.cycles = cycles;
    }

    pub fn pointer_to_index(&self, pointer: usize) -> HistoryResult<u64> {
        let cycle = if !self.is_full() {
            0
        } else if pointer < self.next {
            self.cycles
        } else {
            self.cycles.saturating_sub(1)
        };
        cycle
            .checked_mul(self.capacity as u64)
            .and_then(|base| base.checked_add(pointer as u64))
            .filter(|index| *index < MAX_SAFE_INDEX)
            .ok_or(HistoryError::IndexOverflow {
                cycles: self.cycles,
                capacity: self.capacity,
            })
    }

    /// Inverse of [`pointer_to_index`](Self::pointer_to_index) for indices in
    /// the retained range. Unchecked: any index maps to *some* slot.
    pub fn index_to_pointer(&self, index: u64) -> usize {
        if self.is_full() {
            (index % self.capacity as u64) as usize
        } else {
            index as usize
        }
    }
}
