//! Shared assertions over rendered markup.
//!
//! Rendered pages are plain strings, so most checks come down to counting
//! occurrences and comparing where things first appear.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = features(&HILINK).into_string();
//! assert_eq!(count(&html, "feature-item"), 4);
//! assert_in_order(&html, &["Real maps", "Many new locations"]);
//! ```

/// Number of non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Byte offset of the first occurrence of each needle. Panics on a miss.
pub fn positions(haystack: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            haystack
                .find(needle)
                .unwrap_or_else(|| panic!("{needle:?} not found in rendered markup"))
        })
        .collect()
}

/// Assert that each needle first appears after the previous one.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let found = positions(haystack, needles);
    for (pair, offsets) in needles.windows(2).zip(found.windows(2)) {
        assert!(
            offsets[0] < offsets[1],
            "{:?} should come before {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// The text between the first `start` and the next `end` after it.
pub fn slice_between<'a>(haystack: &'a str, start: &str, end: &str) -> &'a str {
    let from = haystack
        .find(start)
        .unwrap_or_else(|| panic!("{start:?} not found"))
        + start.len();
    let rest = &haystack[from..];
    let to = rest
        .find(end)
        .unwrap_or_else(|| panic!("{end:?} not found after {start:?}"));
    &rest[..to]
}
