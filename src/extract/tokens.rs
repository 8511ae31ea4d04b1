// src/extract/tokens.rs

/// Ordered whitespace-delimited tokens of the upper-cased text.
/// Punctuation is left alone; each classifier strips what it needs.
pub fn tokenize(text: Option<&str>) -> Vec<String> {
    match text {
        Some(t) => t.to_uppercase().split_whitespace().map(String::from).collect(),
        None => Vec::new(),
    }
}
