//! Fixed-capacity history of simulation frames.
//!
//! A stepping loop calls [`HistoryStore::store`] once per tick; the ring
//! keeps the newest `capacity` values and hands back a logical index for
//! each one. Logical indices keep growing across wraparounds, so an index
//! remembered now can be checked against `[start_index, end_index]` later.
//!
//! Layers, bottom up:
//!
//! 1. **`IndexTranslator`** – pointer ↔ logical index arithmetic and the
//!    overflow guard
//! 2. **`RingBuffer`** – slot storage built on the translator
//! 3. **`HistoryCursor`** – bidirectional traversal of the retained range
//!
//! ```rust
//! use frame_history::{HistoryIterator, HistoryStore, RingBuffer};
//!
//! let mut history = RingBuffer::new(3)?;
//! let remembered = history.store("frame 0")?;
//! for frame in ["frame 1", "frame 2", "frame 3"] {
//!     history.store(frame)?;
//! }
//! // frame 0 has been overwritten.
//! assert!(history.iter_from(remembered).is_err());
//!
//! let mut it = history.iter_from(history.start_index())?;
//! assert_eq!(it.advance_next()?, &"frame 1");
//! # Ok::<(), frame_history::HistoryError>(())
//! ```

pub mod config;
pub mod cursor;
pub mod error;
pub mod index;
pub mod ring;
pub mod stats;

pub use config::HistoryConfig;
pub use cursor::{HistoryCursor, HistoryIterator};
pub use error::{HistoryError, HistoryResult};
pub use index::{IndexTranslator, MAX_SAFE_INDEX};
pub use ring::{HistoryStore, RingBuffer};
pub use stats::{HistoryStats, summarize};
