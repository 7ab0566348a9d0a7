//! Running maximum orchestration for `leafops running-max`.

use tracing::debug;

use crate::core::running_max::{running_max, running_max_counted};

/// Structured running-maximum outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Running maximum of the processed prefix.
    Computed(Vec<i64>),
    /// No result: empty input, non-positive count, count past the input, or
    /// allocation failure.
    Absent,
}

/// Compute the running maximum of `values`, limited to `count` elements when given.
pub fn scan_sequence(values: &[i64], count: Option<i64>) -> ScanOutcome {
    let result = match count {
        Some(count) => running_max_counted(values, count),
        None => running_max(values),
    };
    debug!(
        len = values.len(),
        ?count,
        computed = result.is_some(),
        "running max"
    );
    match result {
        Some(out) => ScanOutcome::Computed(out),
        None => ScanOutcome::Absent,
    }
}
