pub mod config;
pub mod output;
pub mod report;
pub mod timing;

pub use config::Config;
pub use output::write_outputs;
pub use report::{render_report, TimingSummary, Verdict};
pub use timing::{measure, SortAlgorithm};

use anyhow::{Context, Result};
use readings::{extract_records_with_stats, read_text_file, RecordSet, MAX_ENTRIES};

/// Result of sorting one copy of the records
#[derive(Debug, Clone)]
pub struct SortRun {
    pub algorithm: SortAlgorithm,
    pub records: RecordSet,
    pub seconds: f64,
}

impl SortRun {
    fn execute(mut records: RecordSet, algorithm: SortAlgorithm) -> Self {
        let seconds = measure(records.as_mut_slice(), algorithm);
        Self {
            algorithm,
            records,
            seconds,
        }
    }
}

/// Both sort runs over the same extracted records
#[derive(Debug, Clone)]
pub struct Comparison {
    pub quick: SortRun,
    pub merge: SortRun,
}

impl Comparison {
    pub fn verdict(&self) -> Verdict {
        Verdict::compare(self.quick.seconds, self.merge.seconds)
    }
}

/// Sort independent copies of `records` with each algorithm
pub fn compare_records(records: RecordSet) -> Comparison {
    let copy = records.clone();
    let quick = SortRun::execute(records, SortAlgorithm::QuickSort);
    let merge = SortRun::execute(copy, SortAlgorithm::MergeSort);

    debug_assert!(sorts::is_sorted_by_value(quick.records.as_slice()));
    debug_assert!(sorts::is_sorted_by_value(merge.records.as_slice()));

    Comparison { quick, merge }
}

/// Read the data file, extract its records and compare both sorts on them
pub fn run(config: &Config) -> Result<Comparison> {
    let records = load_records(config)?;
    Ok(compare_records(records))
}

fn load_records(config: &Config) -> Result<RecordSet> {
    // The raw text is dropped as soon as the records are extracted
    let text = read_text_file(&config.data_file)
        .with_context(|| format!("Failed to read {}", config.data_file.display()))?;

    let (records, stats) = extract_records_with_stats(&text, MAX_ENTRIES);
    log::debug!(
        "Extraction: {} anchors, {} accepted, {} rejected",
        stats.anchors,
        stats.accepted,
        stats.rejected
    );
    if stats.capacity_reached {
        log::warn!(
            "Stopped at {} records, the rest of {} was not read",
            records.len(),
            config.data_file.display()
        );
    }
    log::info!("Extracted {} records", records.len());

    Ok(records)
}
