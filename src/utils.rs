use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `s` to at most `max_width` terminal columns, ending in "..." when
/// anything was cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width < 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert_eq!(result.width(), 20);
    }

    #[test]
    fn test_truncate_string_exact_length() {
        assert_eq!(truncate_string("Exactly twenty!!!!!!", 20), "Exactly twenty!!!!!!");
    }

    #[test]
    fn test_truncate_string_empty() {
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_truncate_string_wide_chars() {
        // each CJK char is two columns wide
        let result = truncate_string("队列队列队列", 7);
        assert_eq!(result, "队列...");
        assert!(result.width() <= 7);
    }

    #[test]
    fn test_truncate_string_tiny_width() {
        assert_eq!(truncate_string("abcdef", 2), "..");
        assert_eq!(truncate_string("abcdef", 0), "");
    }
}
