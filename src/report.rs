use crate::timing::SortAlgorithm;
use crate::{Comparison, SortRun};
use readings::Record;
use serde::Serialize;
use std::fmt::Write as FmtWrite;

const SEPARATOR: &str = "=================================";

/// Which algorithm finished first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    QuickFaster,
    MergeFaster,
    Tie,
}

impl Verdict {
    /// Compare the raw (unrounded) durations of both runs
    pub fn compare(quick_seconds: f64, merge_seconds: f64) -> Self {
        if quick_seconds > merge_seconds {
            Verdict::MergeFaster
        } else if quick_seconds < merge_seconds {
            Verdict::QuickFaster
        } else {
            Verdict::Tie
        }
    }

    pub fn sentence(self) -> &'static str {
        match self {
            Verdict::MergeFaster => "Merge sort is faster than quick sort.",
            Verdict::QuickFaster => "Quick sort is faster than merge sort.",
            Verdict::Tie => "Both algorithms are equal in speed.",
        }
    }
}

/// Machine readable outcome of a comparison, written by `--summary`
#[derive(Debug, Clone, Serialize)]
pub struct TimingSummary {
    pub entries: usize,
    pub quick_sort_seconds: f64,
    pub merge_sort_seconds: f64,
    pub verdict: Verdict,
}

impl TimingSummary {
    pub fn from_comparison(comparison: &Comparison) -> Self {
        Self {
            entries: comparison.quick.records.len(),
            quick_sort_seconds: comparison.quick.seconds,
            merge_sort_seconds: comparison.merge.seconds,
            verdict: comparison.verdict(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One line of a sorted listing; `rank` is 1-based
pub fn render_line(rank: usize, record: &Record) -> String {
    format!(
        "{}. Timestamp: {} | Temperature: {:.1}",
        rank,
        record.timestamp(),
        record.value()
    )
}

/// Sorted listing of one run followed by its entry count
pub fn render_results(algorithm: SortAlgorithm, records: &[Record]) -> String {
    let mut content = String::new();

    writeln!(&mut content, "{} results:\n", algorithm.label()).unwrap();
    for (i, record) in records.iter().enumerate() {
        writeln!(&mut content, "{}", render_line(i + 1, record)).unwrap();
    }
    writeln!(&mut content, "{}", SEPARATOR).unwrap();
    writeln!(&mut content, "Total entries: {}", records.len()).unwrap();

    content
}

/// Both durations with three decimals and the verdict
pub fn render_timings(quick_seconds: f64, merge_seconds: f64) -> String {
    let mut content = String::new();

    writeln!(&mut content, "{}", SEPARATOR).unwrap();
    writeln!(&mut content, "Quick sort time: {:.3} seconds", quick_seconds).unwrap();
    writeln!(&mut content, "Merge sort time: {:.3} seconds", merge_seconds).unwrap();
    writeln!(
        &mut content,
        "{}",
        Verdict::compare(quick_seconds, merge_seconds).sentence()
    )
    .unwrap();

    content
}

fn render_run(run: &SortRun) -> String {
    render_results(run.algorithm, run.records.as_slice())
}

/// Full console report: quick sort listing, merge sort listing, then the timings
pub fn render_report(comparison: &Comparison, include_records: bool) -> String {
    let mut content = String::new();

    if include_records {
        content.push_str(&render_run(&comparison.quick));
        writeln!(&mut content, "{}", SEPARATOR).unwrap();
        content.push_str(&render_run(&comparison.merge));
    } else {
        writeln!(
            &mut content,
            "Total entries: {}",
            comparison.quick.records.len()
        )
        .unwrap();
    }
    content.push_str(&render_timings(
        comparison.quick.seconds,
        comparison.merge.seconds,
    ));

    content
}
