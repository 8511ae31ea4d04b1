// src/extract/style.rs
use super::rules::{default_style_table, KeywordTable, RuleSet};
use super::types::Style;
use super::Classifier;

#[derive(Clone, Debug)]
pub struct StyleClassifier {
    table: KeywordTable<Style>,
}

impl Default for StyleClassifier {
    fn default() -> Self {
        Self { table: default_style_table() }
    }
}

impl StyleClassifier {
    pub fn new(rules: &RuleSet) -> Self {
        Self { table: rules.style.clone() }
    }
}

impl Classifier for StyleClassifier {
    type Output = Style;

    fn classify(&self, text: &str) -> Style {
        self.table
            .first_match(&text.to_uppercase())
            .unwrap_or(Style::Unknown)
    }
}
