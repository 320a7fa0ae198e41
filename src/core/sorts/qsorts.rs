use readings::Record;

/*
--------------------------------------------------------------------------------
   QSORT - Quick sort records by value, in place
--------------------------------------------------------------------------------
*/

/// Sort `records[first..=last]` ascending by value.
///
/// The pivot is always the value at the midpoint index, so the result (including the
/// final order of equal values) is reproducible. Whole records are exchanged, keeping
/// each timestamp with its value. Not stable.
///
/// # Panics
/// If `last` is out of bounds for a non-trivial range.
pub fn quick_sort(records: &mut [Record], first: usize, last: usize) {
    if first >= last {
        return;
    }
    qsort_helper(records, first as isize, last as isize);
}

/// Sort the whole slice with `quick_sort`
pub fn quick_sort_all(records: &mut [Record]) {
    if records.len() > 1 {
        quick_sort(records, 0, records.len() - 1);
    }
}

// Signed cursors: `upper` may step to `first - 1`, which is -1 for the leftmost range.
fn qsort_helper(records: &mut [Record], first: isize, last: isize) {
    let split = records[((first + last) / 2) as usize].value();
    let mut lower = first;
    let mut upper = last;

    while lower <= upper {
        while records[lower as usize].value() < split {
            lower += 1;
        }
        while records[upper as usize].value() > split {
            upper -= 1;
        }

        if lower <= upper {
            records.swap(lower as usize, upper as usize);
            lower += 1;
            upper -= 1;
        }
    }

    if first < upper {
        qsort_helper(records, first, upper);
    }
    if lower < last {
        qsort_helper(records, lower, last);
    }
}
