//! Shared utility functions.

/// Cut a string to at most `max_bytes`, backing up to a valid UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string; strings that already fit are
/// returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        assert_eq!(truncate_str("hi", 10), "hi");
        assert_eq!(truncate_str("", 10), "");
    }

    #[test]
    fn ascii_cut_at_limit() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn backs_up_to_char_boundary() {
        // 'の' is 3 bytes; cutting at byte 4 lands mid-character
        let s = "あのね";
        assert_eq!(truncate_str(s, 4), "あ");
        assert_eq!(truncate_str(s, 6), "あの");
        assert_eq!(truncate_str(s, 9), "あのね");
    }
}
