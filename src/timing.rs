//! Wall-clock measurement of a single sort run.

use readings::Record;
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// The sort algorithms the harness can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    QuickSort,
    MergeSort,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 2] = [SortAlgorithm::QuickSort, SortAlgorithm::MergeSort];

    /// Human readable name used in the report
    pub fn label(self) -> &'static str {
        match self {
            SortAlgorithm::QuickSort => "Quick sort",
            SortAlgorithm::MergeSort => "Merge sort",
        }
    }

    /// Sort all of `records` with this algorithm
    pub fn sort(self, records: &mut [Record]) {
        match self {
            SortAlgorithm::QuickSort => sorts::quick_sort_all(records),
            SortAlgorithm::MergeSort => sorts::merge_sort_all(records),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sort `records` in place with `algorithm` and return the elapsed time in seconds.
///
/// Uses a monotonic clock, so the result is never negative.
pub fn measure(records: &mut [Record], algorithm: SortAlgorithm) -> f64 {
    let start = Instant::now();

    algorithm.sort(records);

    let seconds = start.elapsed().as_secs_f64();
    log::info!(
        "{} sorted {} records in {:.6} s",
        algorithm,
        records.len(),
        seconds
    );
    seconds
}
