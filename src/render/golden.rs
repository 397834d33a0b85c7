//! Golden-file comparison for rendered documents.

use similar::TextDiff;

/// Unified diff from `expected` to `actual`, or `None` when they match
/// byte for byte.
pub fn golden_diff(expected: &str, actual: &str) -> Option<String> {
    if expected == actual {
        return None;
    }

    let diff = TextDiff::from_lines(expected, actual)
        .unified_diff()
        .context_radius(3)
        .header("golden", "rendered")
        .to_string();
    Some(diff)
}
