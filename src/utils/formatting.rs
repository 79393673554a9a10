//! Formatting utilities used for CLI and menu outputs.

use unicode_width::UnicodeWidthStr;

/// Pad `s` on the right up to `width` display columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Cut `s` to at most `width` display columns, marking the cut with "...".
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw + 3 > width {
            break;
        }
        used += cw;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// `02h 25m` for 145 minutes.
pub fn mins2readable(mins: i64) -> String {
    let abs_m = mins.abs();
    format!("{:02}h {:02}m", abs_m / 60, abs_m % 60)
}

/// Canonical task-name form: every word capitalized, the rest lower-cased.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}
