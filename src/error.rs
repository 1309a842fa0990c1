use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("capacity must be at least 2, got {capacity}")]
    Construction { capacity: usize },

    /// `index` is signed so a step back from logical index 0 can be reported.
    #[error("logical index {index} is outside the retained range [{start}, {end}]")]
    IndexOutOfRange { index: i64, start: u64, end: u64 },

    #[error("history holds no data")]
    NoData,

    #[error("logical index overflow after {cycles} cycles of capacity {capacity}")]
    IndexOverflow { cycles: u64, capacity: usize },
}

pub type HistoryResult<T> = Result<T, HistoryError>;
