// src/core/sanitize.rs

/// Collapse runs of whitespace to one space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Header comparison key: whitespace-normalized, ASCII case-folded,
/// byte-order mark dropped (spreadsheet exports often start with one).
pub fn header_key(s: &str) -> String {
    normalize_ws(s.trim_start_matches('\u{feff}')).to_ascii_lowercase()
}

/// Make a safe file stem out of user-supplied text: ASCII alphanumerics,
/// `-`, `_` and `.` survive; whitespace becomes a single `_`; the rest is dropped.
/// Falls back to `fallback` if nothing is left.
pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '.' { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '_' { if !last_us { out.push('_'); last_us = true; } }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses() {
        assert_eq!(normalize_ws("  a \t b\n\nc "), "a b c");
    }

    #[test]
    fn header_key_ignores_case_space_and_bom() {
        assert_eq!(header_key("\u{feff} Details "), "details");
        assert_eq!(header_key("Item  Details"), "item details");
    }

    #[test]
    fn sanitize_file_stem_variants() {
        assert_eq!(sanitize_file_stem("My Frames (May)", "x"), "My_Frames_May");
        assert_eq!(sanitize_file_stem("../../etc/passwd", "x"), "etcpasswd");
        assert_eq!(sanitize_file_stem("__a__b__", "x"), "a_b");
        assert_eq!(sanitize_file_stem("!!!", "details"), "details");
    }
}
