//! Summary statistics over a store's retained range, for diagnostics and
//! graphing consumers.

use crate::cursor::HistoryCursor;
use crate::error::{HistoryError, HistoryResult};
use crate::ring::HistoryStore;
use serde::Serialize;
use statrs::statistics::Statistics;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HistoryStats {
    pub count: usize,
    pub first_index: u64,
    pub last_index: u64,
    pub mean: f64,
    /// Sample standard deviation; NaN for a single sample.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Summarize `project(value)` over every retained value, oldest first.
pub fn summarize<S, F>(store: &S, project: F) -> HistoryResult<HistoryStats>
where
    S: HistoryStore + ?Sized,
    F: Fn(&S::Value) -> f64,
{
    let last_index = store.end_index().ok_or(HistoryError::NoData)?;
    let first_index = store.start_index();
    let samples: Vec<f64> = HistoryCursor::from_start(store).map(project).collect();
    Ok(HistoryStats {
        count: samples.len(),
        first_index,
        last_index,
        mean: Statistics::mean(&samples),
        std_dev: Statistics::std_dev(&samples),
        min: Statistics::min(&samples),
        max: Statistics::max(&samples),
    })
}
