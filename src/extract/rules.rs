// src/extract/rules.rs
//! Canonical rule tables.
//!
//! Every keyword list the classifiers use lives here as plain data, so a change
//! in heuristics shows up as a diff of this file and nowhere else. Bump
//! [`RULES_VERSION`] whenever a table changes meaning.
//!
//! Tables are ordered: the first entry that matches wins. Within an entry the
//! keyword order only documents the abbreviation ladder (longest first).

use super::types::{Gender, Material, Shape, Style};

pub const RULES_VERSION: &str = "1.0.0";

/// One `(label, matcher)` pair. The matcher fires when the upper-cased text
/// contains any of `contains`, or ends with any of `ends_with`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordRule<T> {
    pub label: T,
    pub contains: Vec<String>,
    pub ends_with: Vec<String>,
}

impl<T: Copy> KeywordRule<T> {
    pub fn new(label: T, contains: &[&str], ends_with: &[&str]) -> Self {
        Self {
            label,
            contains: contains.iter().map(|s| s!(*s)).collect(),
            ends_with: ends_with.iter().map(|s| s!(*s)).collect(),
        }
    }

    /// `upper` must already be upper-cased.
    pub fn matches(&self, upper: &str) -> bool {
        self.contains.iter().any(|k| upper.contains(k.as_str()))
            || self.ends_with.iter().any(|k| upper.ends_with(k.as_str()))
    }
}

/// Ordered list of keyword rules, first match wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordTable<T> {
    rules: Vec<KeywordRule<T>>,
}

impl<T: Copy> KeywordTable<T> {
    pub fn new(rules: Vec<KeywordRule<T>>) -> Self { Self { rules } }

    pub fn first_match(&self, upper: &str) -> Option<T> {
        self.rules.iter().find(|r| r.matches(upper)).map(|r| r.label)
    }

    pub fn rules(&self) -> &[KeywordRule<T>] { &self.rules }
}

/// Every table the engine needs, passed into the classifiers at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    pub version: String,
    /// Leading tokens the gender scan never looks at (item code, style code).
    pub gender_skip_leading: usize,
    pub gender_markers: Vec<(String, Gender)>,
    pub material: KeywordTable<Material>,
    pub shape: KeywordTable<Shape>,
    pub style: KeywordTable<Style>,
    /// Tokens that can never be a color code.
    pub color_ignore: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            version: s!(RULES_VERSION),
            gender_skip_leading: 2,
            gender_markers: default_gender_markers(),
            material: default_material_table(),
            shape: default_shape_table(),
            style: default_style_table(),
            color_ignore: default_color_ignore(),
        }
    }
}

pub fn default_gender_markers() -> Vec<(String, Gender)> {
    vec![
        (s!("L"), Gender::Ladies),
        (s!("G"), Gender::Gents),
        (s!("U"), Gender::Unisex),
    ]
}

pub fn default_material_table() -> KeywordTable<Material> {
    KeywordTable::new(vec![
        KeywordRule::new(Material::Titanium,     &["TITAN", "TITA"], &[]),
        // Bare trailing "M" counts as metal, even when incidental.
        KeywordRule::new(Material::Metal,        &["METAL"], &["M", "ME", "META"]),
        KeywordRule::new(Material::ShellPlastic, &["SHELL", "PLASTIC"], &[]),
    ])
}

pub fn default_shape_table() -> KeywordTable<Shape> {
    use Shape::*;
    KeywordTable::new(vec![
        KeywordRule::new(Star,       &["STAR"], &[]),
        KeywordRule::new(Round,      &["ROUND", "RND", "ROU"], &[]),
        KeywordRule::new(Clubmaster, &["CLUBMASTER", "CLUB"], &[]),
        KeywordRule::new(Hexa,       &["HEXA", "HEX"], &[]),
        KeywordRule::new(CatEye,     &["CAT EYE", "CAT"], &[]),
        KeywordRule::new(Wayfarer,   &["WAYFARER", "WAY"], &[]),
        KeywordRule::new(Butterfly,  &["BUTTERFLY", "BUTTR", "BUTT"], &[]),
        KeywordRule::new(Aviator,    &["AVIATOR", "AVI"], &[]),
        KeywordRule::new(Pillow,     &["PILLOW", "PILL"], &[]),
        KeywordRule::new(Square,     &["SQUARE", "SQR", "SQ"], &[]),
        KeywordRule::new(Pilot,      &["PILOT", "PIL"], &[]),
        KeywordRule::new(Oval,       &["OVAL", "OV", "OVA"], &[]),
        KeywordRule::new(Rectangle,  &["RECTANGLE", "RECTANGL", "RECT", "REC", "RE"], &[]),
        KeywordRule::new(Irregular,  &["IRREGULAR", "IRREGU", "IRR", "IRREG", "IRRE"], &[]),
    ])
}

pub fn default_style_table() -> KeywordTable<Style> {
    KeywordTable::new(vec![
        KeywordRule::new(Style::FullRim, &["FULL", "FUL", "WAYFARER"], &["F"]),
        KeywordRule::new(Style::Rimless, &["R/L", "R/", "WAS", "WASHER", "WASH"], &[]),
        KeywordRule::new(Style::Supra,   &["SUPRA", "SU", "SUP"], &[]),
    ])
}

pub fn default_color_ignore() -> Vec<String> {
    ["METAL", "SUPRA", "R/L", "SPG", "META", "RIM", "WASHER", "TITAN", "PLASTIC", "SHELL"]
        .iter()
        .map(|s| s!(*s))
        .collect()
}
