//! Shared utility functions

/// Take the first `max_chars` characters of a string, appending an ellipsis
/// when anything was cut off.
///
/// Counting is by `char`, not by byte, so multi-byte text truncates cleanly.
/// Returns the input unchanged (no ellipsis) when it already fits.
pub fn excerpt(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_shorter_than_max() {
        assert_eq!(excerpt("hello", 10), "hello");
    }

    #[test]
    fn test_excerpt_exact_length_untouched() {
        assert_eq!(excerpt("hello", 5), "hello");
    }

    #[test]
    fn test_excerpt_cuts_and_marks() {
        assert_eq!(excerpt("hello world", 5), "hello…");
    }

    #[test]
    fn test_excerpt_counts_chars_not_bytes() {
        // Each character is 3 bytes; 2 chars must survive, not 2 bytes
        assert_eq!(excerpt("日本語", 2), "日本…");
    }

}
