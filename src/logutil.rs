//! Keeps user-supplied text single-line before it reaches a log record.

/// Escape newlines, tabs and other control characters so an inbound chat
/// line cannot break log readability. Long input is cut off with an
/// ellipsis; chat commands here are a handful of tokens at most.
pub fn escape_log(s: &str) -> String {
    const MAX_PREVIEW: usize = 120;
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 4);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\u{{{:04X}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_log;

    #[test]
    fn control_characters_are_escaped() {
        assert_eq!(escape_log("X 1 1\nstart"), "X 1 1\\nstart");
        assert_eq!(escape_log("a\r\tb\\"), "a\\r\\tb\\\\");
        assert_eq!(escape_log("\u{1b}[2J"), "\\u{001B}[2J");
    }

    #[test]
    fn long_input_is_truncated() {
        let long = "x".repeat(500);
        let escaped = escape_log(&long);
        assert!(escaped.chars().count() <= 121);
        assert!(escaped.ends_with('…'));
    }
}
