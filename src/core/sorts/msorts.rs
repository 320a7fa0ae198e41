use readings::Record;

/*
--------------------------------------------------------------------------------
   MSORT - Merge sort records by value
--------------------------------------------------------------------------------
*/

/// Sort `records[start..=end]` ascending by value.
///
/// Top-down merge sort. Ties keep their original relative order (stable). Each merge
/// allocates its own buffer for the merged range.
///
/// # Panics
/// If `end` is out of bounds for a non-trivial range.
pub fn merge_sort(records: &mut [Record], start: usize, end: usize) {
    if start < end {
        let mid = start + (end - start) / 2;
        merge_sort(records, start, mid);
        merge_sort(records, mid + 1, end);
        merge(records, start, mid, end);
    }
}

/// Sort the whole slice with `merge_sort`
pub fn merge_sort_all(records: &mut [Record]) {
    if records.len() > 1 {
        merge_sort(records, 0, records.len() - 1);
    }
}

// Merge the sorted runs [start, mid] and [mid + 1, end]
fn merge(records: &mut [Record], start: usize, mid: usize, end: usize) {
    let mut merged = Vec::with_capacity(end - start + 1);
    let mut i = start;
    let mut j = mid + 1;

    while i <= mid && j <= end {
        // Left side wins ties
        if records[i].value() <= records[j].value() {
            merged.push(records[i].clone());
            i += 1;
        } else {
            merged.push(records[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&records[i..=mid]);
    merged.extend_from_slice(&records[j..=end]);

    records[start..=end].clone_from_slice(&merged);
}
