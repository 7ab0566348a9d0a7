//! Running (prefix) maximum over ordered sequences.

/// Return the running maximum of `values`.
///
/// Element `i` of the result is the maximum of `values[..=i]`, so the output
/// always has the same length as the input.
///
/// Returns `None` when `values` is empty (nothing is allocated) or when the
/// output buffer cannot be allocated.
pub fn running_max<T: Ord + Copy>(values: &[T]) -> Option<Vec<T>> {
    let (&first, _) = values.split_first()?;

    let mut out = Vec::new();
    // Only reachable when the allocator refuses the request; not covered by tests.
    out.try_reserve_exact(values.len()).ok()?;

    let mut max = first;
    for &value in values {
        if value > max {
            max = value;
        }
        out.push(max);
    }
    Some(out)
}

/// Running maximum over the first `count` elements of `values`.
///
/// `count <= 0` yields `None`, as does a `count` larger than `values.len()`.
pub fn running_max_counted<T: Ord + Copy>(values: &[T], count: i64) -> Option<Vec<T>> {
    if count <= 0 {
        return None;
    }
    let count = usize::try_from(count).ok()?;
    running_max(values.get(..count)?)
}
