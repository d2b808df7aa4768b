//! Pluralization for log messages.

/// `"s"` unless `n == 1`.
#[inline]
fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Count followed by the noun, pluralized on its last word.
///
/// - `plural_count(1, "redirect page")` -> `"1 redirect page"`
/// - `plural_count(3, "source file")` -> `"3 source files"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}
