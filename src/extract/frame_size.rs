// src/extract/frame_size.rs
#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use super::Classifier;

/// `eye-bridge-temple`, e.g. `49-18-135`. Group 1 is the eye size.
static SIZE_TRIPLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([4-6][0-9]|70)-\d{1,2}-\d{2,3}\b").expect("size triplet regex")
});

/// Isolated eye size, e.g. the `52` in `BRAND 52 BLACK`.
static SIZE_STANDALONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([4-6][0-9]|70)\b").expect("standalone size regex")
});

/// Eye size in `[40, 70]`. The full triplet is preferred anywhere in the text;
/// only when none exists does the first standalone number win.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameSizeExtractor;

impl FrameSizeExtractor {
    pub fn new() -> Self { Self }

    fn first_capture(re: &Regex, text: &str) -> Option<u8> {
        re.captures(text)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

impl Classifier for FrameSizeExtractor {
    type Output = Option<u8>;

    fn classify(&self, text: &str) -> Option<u8> {
        let upper = text.to_uppercase();
        Self::first_capture(&SIZE_TRIPLET, &upper)
            .or_else(|| Self::first_capture(&SIZE_STANDALONE, &upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(s: &str) -> Option<u8> {
        FrameSizeExtractor.classify(s)
    }

    #[test]
    fn triplet_gives_eye_size() {
        assert_eq!(size("BRAND C-102 49-18-135 L"), Some(49));
        assert_eq!(size("AB12 70-5-99"), Some(70));
    }

    #[test]
    fn triplet_beats_earlier_standalone() {
        assert_eq!(size("AB 55 C1 52-18-140"), Some(52));
    }

    #[test]
    fn standalone_fallback_reads_left_to_right() {
        assert_eq!(size("BRAND 52 BLACK"), Some(52));
        assert_eq!(size("BRAND 48 BLACK 54"), Some(48));
    }

    #[test]
    fn out_of_range_or_embedded_numbers_are_ignored() {
        assert_eq!(size("BRAND XYZ"), None);
        assert_eq!(size("BRAND 39 71 140"), None);
        assert_eq!(size("AB1234 4918"), None);
        assert_eq!(size("AB12 71-18-135"), None);
    }

    #[test]
    fn absent_is_none() {
        assert_eq!(FrameSizeExtractor.classify_opt(None), None);
    }
}
