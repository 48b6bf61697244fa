/// Closest candidate to `target`. Ties go to the earliest candidate in input order.
pub fn nearest(candidates: &[u32], target: u32) -> Option<u32> {
    // min_by_key keeps the first of several equal minima
    candidates
        .iter()
        .copied()
        .min_by_key(|value| value.abs_diff(target))
}

/// Renders an hour or minute the way it appears in a file name.
pub fn two_digit(value: u32) -> String {
    format!("{:02}", value)
}

/// Closest candidate rendered as two digits, or `None` when there is nothing to choose from.
pub fn select(candidates: &[u32], target: u32) -> Option<String> {
    if candidates.is_empty() {
        tracing::info!("No data to process");
        return None;
    }
    nearest(candidates, target).map(two_digit)
}
