mod qsorts;
mod msorts;

pub use qsorts::*;
pub use msorts::*;

use readings::Record;

/// True if values never decrease from one record to the next
pub fn is_sorted_by_value(records: &[Record]) -> bool {
    records.windows(2).all(|w| w[0].value() <= w[1].value())
}
