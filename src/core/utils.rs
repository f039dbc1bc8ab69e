//! Permissive text-to-number conversions: leading whitespace is skipped,
//! the longest numeric prefix is converted, and anything unconvertible
//! yields zero. Shared by dataset ingestion and query parsing.

pub fn lenient_f64(s: &str) -> f64 {
    let t = s.trim_start();
    let mut end = 0;
    for (i, c) in t.char_indices() {
        let plausible = c.is_ascii_digit()
            || c == '.'
            || c == '+'
            || c == '-'
            || c == 'e'
            || c == 'E';
        if !plausible {
            break;
        }
        end = i + c.len_utf8();
    }
    // Back off until the prefix parses ("1e" -> "1", "3.14x" -> "3.14").
    let mut prefix = &t[..end];
    loop {
        if prefix.is_empty() {
            return 0.0;
        }
        if let Ok(value) = prefix.parse::<f64>() {
            return value;
        }
        prefix = &prefix[..prefix.len() - 1];
    }
}

pub fn lenient_i32(s: &str) -> i32 {
    let t = s.trim_start();
    let mut end = 0;
    for (i, c) in t.char_indices() {
        let plausible = c.is_ascii_digit() || (i == 0 && (c == '+' || c == '-'));
        if !plausible {
            break;
        }
        end = i + c.len_utf8();
    }
    t[..end].parse::<i32>().unwrap_or(0)
}

/// As `lenient_i32`, with negative values clamped to zero. Used for the
/// non-negative record fields (duration, review count).
pub fn lenient_u32(s: &str) -> u32 {
    lenient_i32(s).max(0) as u32
}

/// Truncate to at most `max` characters, on a char boundary.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
