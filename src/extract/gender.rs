// src/extract/gender.rs
use super::rules::{default_gender_markers, RuleSet};
use super::tokens::tokenize;
use super::types::Gender;
use super::Classifier;

/// Gender markers are terminal single-letter tokens ("L", "G", "U", optionally
/// followed by one dot). The scan runs from the end and stops at the first
/// marker, so the marker closest to the end wins.
#[derive(Clone, Debug)]
pub struct GenderClassifier {
    skip_leading: usize,
    markers: Vec<(String, Gender)>,
}

impl Default for GenderClassifier {
    fn default() -> Self {
        Self { skip_leading: 2, markers: default_gender_markers() }
    }
}

impl GenderClassifier {
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            skip_leading: rules.gender_skip_leading,
            markers: rules.gender_markers.clone(),
        }
    }

    fn marker(&self, token: &str) -> Option<Gender> {
        let clean = token.strip_suffix('.').unwrap_or(token);
        self.markers
            .iter()
            .find(|(m, _)| m == clean)
            .map(|(_, g)| *g)
    }
}

impl Classifier for GenderClassifier {
    type Output = Gender;

    fn classify(&self, text: &str) -> Gender {
        tokenize(Some(text))
            .iter()
            .skip(self.skip_leading)
            .rev()
            .find_map(|t| self.marker(t))
            .unwrap_or(Gender::Unknown)
    }
}
