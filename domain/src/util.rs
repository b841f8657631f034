//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Single-line preview of message text for log lines.
pub fn preview(s: &str, max_bytes: usize) -> String {
    let first_line = s.lines().next().unwrap_or_default();
    let cut = truncate_str(first_line, max_bytes);
    if cut.len() < s.len() {
        format!("{}…", cut)
    } else {
        cut.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_str("hi", 10), "hi");
    }

    #[test]
    fn truncate_multibyte_boundary() {
        // 'ñ' is 2 bytes; cutting at byte 2 would land inside it
        let s = "añob";
        assert_eq!(truncate_str(s, 2), "a");
        assert_eq!(truncate_str(s, 3), "añ");
    }

    #[test]
    fn preview_keeps_first_line() {
        assert_eq!(preview("first\nsecond", 50), "first…");
        assert_eq!(preview("short", 50), "short");
        assert_eq!(preview("abcdef", 3), "abc…");
    }

    #[test]
    fn preview_empty() {
        assert_eq!(preview("", 10), "");
    }
}
