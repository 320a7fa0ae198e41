use serde::Serialize;
use thiserror::Error;

/// Maximum number of records a `RecordSet` holds by default
pub const MAX_ENTRIES: usize = 10_000;

/// Maximum number of characters in a timestamp field
pub const MAX_TIMESTAMP_LEN: usize = 19;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("timestamp is {len} characters long, at most {max} allowed")]
    TimestampTooLong { len: usize, max: usize },
}

/// Returned by `RecordSet::push` once the set holds `capacity` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("record set is full ({capacity} entries)")]
pub struct CapacityReached {
    pub capacity: usize,
}

/// A single timestamp/value reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    timestamp: String,
    value: f64,
}

impl Record {
    /// Create a record, rejecting timestamps longer than `MAX_TIMESTAMP_LEN` characters.
    pub fn new(timestamp: &str, value: f64) -> Result<Self, RecordError> {
        let len = timestamp.chars().count();
        if len > MAX_TIMESTAMP_LEN {
            return Err(RecordError::TimestampTooLong {
                len,
                max: MAX_TIMESTAMP_LEN,
            });
        }

        Ok(Self {
            timestamp: timestamp.to_string(),
            value,
        })
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Ordered, capacity-bounded collection of records.
///
/// Cloning a set yields a fully independent copy, which is how each sort run gets its
/// own input.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    entries: Vec<Record>,
    capacity: usize,
}

impl RecordSet {
    /// Empty set bounded by `MAX_ENTRIES`
    pub fn new() -> Self {
        Self::with_capacity(MAX_ENTRIES)
    }

    /// Empty set bounded by `capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            // Avoid reserving the full bound up front for tiny inputs
            entries: Vec::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Append a record, or hand back `CapacityReached` if the set is already full.
    pub fn push(&mut self, record: Record) -> Result<(), CapacityReached> {
        if self.is_full() {
            return Err(CapacityReached {
                capacity: self.capacity,
            });
        }
        self.entries.push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.entries
    }

    /// Mutable view for the sorters. The length cannot change through it, so the
    /// capacity bound holds.
    pub fn as_mut_slice(&mut self) -> &mut [Record] {
        &mut self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.entries.iter()
    }

    /// Values in their current order
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(Record::value).collect()
    }

    pub fn into_vec(self) -> Vec<Record> {
        self.entries
    }
}

impl Default for RecordSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
