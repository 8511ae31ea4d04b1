// src/extract/color.rs
#![allow(clippy::expect_used)]

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::rules::{default_color_ignore, RuleSet};
use super::tokens::tokenize;
use super::Classifier;

/// Token that begins with a full `DD-DD-DDD` frame-size triplet.
static FRAME_TRIPLET_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}-\d{2}-\d{3}").expect("frame triplet regex")
});

/// Looser numeric triplet such as `6193-2502-51`; group 1 is the middle part.
static NUMERIC_TRIPLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{3,5}-(\d{2,5})-\d{2,5}\b").expect("numeric triplet regex")
});

/// Rules in priority order. Each one proposes at most one candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorRule {
    /// `C-102` or `C-102-5` → `102`
    DashPrefix,
    /// `C15` → `15`
    LetterPrefix,
    /// Second token, if it looks like a code.
    SecondToken,
    /// Code-like token right before a frame-size triplet.
    BeforeFrameSize,
    /// Middle of a hyphenated numeric triplet.
    NumericTripletMiddle,
    /// Third-to-last token when the second-to-last is a frame-size triplet.
    BeforeTrailingFrameSize,
}

impl ColorRule {
    pub const ORDER: [ColorRule; 6] = [
        ColorRule::DashPrefix,
        ColorRule::LetterPrefix,
        ColorRule::SecondToken,
        ColorRule::BeforeFrameSize,
        ColorRule::NumericTripletMiddle,
        ColorRule::BeforeTrailingFrameSize,
    ];
}

/// Short alphanumeric code: 2..=6 of `[A-Z0-9]`.
fn is_code(token: &str) -> bool {
    (2..=6).contains(&token.len())
        && token.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

fn is_letter_prefixed_digits(token: &str) -> bool {
    token
        .strip_prefix('C')
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

#[derive(Clone, Debug)]
pub struct ColorExtractor {
    ignore: HashSet<String>,
}

impl Default for ColorExtractor {
    fn default() -> Self {
        Self { ignore: default_color_ignore().into_iter().collect() }
    }
}

impl ColorExtractor {
    pub fn new(rules: &RuleSet) -> Self {
        Self { ignore: rules.color_ignore.iter().cloned().collect() }
    }

    /// The single candidate a rule selects, before the ignore-set check.
    fn candidate(rule: ColorRule, upper: &str, tokens: &[String]) -> Option<String> {
        match rule {
            ColorRule::DashPrefix => tokens
                .iter()
                .find_map(|t| t.strip_prefix("C-"))
                .map(|rest| s!(rest.split('-').next().unwrap_or(""))),

            ColorRule::LetterPrefix => tokens
                .iter()
                .find(|t| is_letter_prefixed_digits(t))
                .map(|t| s!(&t[1..])),

            ColorRule::SecondToken => tokens
                .get(1)
                .filter(|t| is_code(t))
                .cloned(),

            ColorRule::BeforeFrameSize => tokens
                .windows(2)
                .find(|w| FRAME_TRIPLET_PREFIX.is_match(&w[1]) && is_code(&w[0]))
                .map(|w| w[0].clone()),

            ColorRule::NumericTripletMiddle => NUMERIC_TRIPLET
                .captures(upper)
                .and_then(|c| c.get(1))
                .map(|m| s!(m.as_str())),

            ColorRule::BeforeTrailingFrameSize => {
                let n = tokens.len();
                if n >= 3 && FRAME_TRIPLET_PREFIX.is_match(&tokens[n - 2]) {
                    Some(tokens[n - 3].clone())
                } else {
                    None
                }
            }
        }
    }

    /// Which rule produced the color, if any. Useful when auditing rows.
    pub fn classify_with_rule(&self, text: &str) -> Option<(ColorRule, String)> {
        let upper = text.to_uppercase();
        let tokens = tokenize(Some(text));

        ColorRule::ORDER.iter().find_map(|&rule| {
            // An ignored or empty candidate fails the whole rule; no second pick.
            Self::candidate(rule, &upper, &tokens)
                .filter(|c| !c.is_empty() && !self.ignore.contains(c))
                .map(|c| (rule, c))
        })
    }
}

impl Classifier for ColorExtractor {
    type Output = Option<String>;

    fn classify(&self, text: &str) -> Option<String> {
        self.classify_with_rule(text).map(|(_, c)| c)
    }
}
