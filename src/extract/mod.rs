// src/extract/mod.rs
//! # Attribute extraction engine
//!
//! Turns one catalog "Details" string (e.g. `AB1234 C-102 49-18-135 L.`) into
//! structured attributes: gender, material, shape, style, frame size, color.
//!
//! ## What lives here
//! - One **classifier per attribute**, each a pure function of the input text.
//!   Classifiers never look at each other's output.
//! - The **rule tables** (`rules`) every classifier is built from. They are
//!   plain data, versioned, and swappable in tests.
//! - The **orchestrator** ([`Extractor`]) that runs only the requested
//!   classifiers and merges their values into an [`ExtractionResult`].
//!
//! ## What does **not** live here
//! - File reading/writing, column lookup, worker pools (see `runner`, `file`).
//! - Logging. Classifiers are side-effect free; callers log.
//!
//! ## Conventions & invariants
//! - Matching is done on the **upper-cased** text.
//! - Absent text and "no pattern matched" both yield `Unknown`/`None`.
//!   Neither is an error.
//! - Every rule list is **ordered**; the first match wins.

pub mod color;
pub mod frame_size;
pub mod gender;
pub mod material;
pub mod rules;
pub mod shape;
pub mod style;
pub mod tokens;
pub mod types;

pub use color::{ColorExtractor, ColorRule};
pub use frame_size::FrameSizeExtractor;
pub use gender::GenderClassifier;
pub use material::MaterialClassifier;
pub use rules::{KeywordRule, KeywordTable, RuleSet, RULES_VERSION};
pub use shape::ShapeClassifier;
pub use style::StyleClassifier;
pub use tokens::tokenize;
pub use types::{
    AttributeKind, AttributeSet, AttributeValue, ExtractionResult,
    Gender, Material, Shape, Style,
};

/// A single-attribute classifier over one description string.
pub trait Classifier {
    /// `Default` is the unknown value.
    type Output: Default;

    fn classify(&self, text: &str) -> Self::Output;

    /// Absent input maps straight to the unknown value.
    fn classify_opt(&self, text: Option<&str>) -> Self::Output {
        text.map(|t| self.classify(t)).unwrap_or_default()
    }
}

/// All classifiers, built once from a [`RuleSet`] and shared read-only.
#[derive(Clone, Debug)]
pub struct Extractor {
    rules_version: String,
    gender: GenderClassifier,
    material: MaterialClassifier,
    shape: ShapeClassifier,
    style: StyleClassifier,
    frame_size: FrameSizeExtractor,
    color: ColorExtractor,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&RuleSet::default())
    }
}

impl Extractor {
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            rules_version: rules.version.clone(),
            gender: GenderClassifier::new(rules),
            material: MaterialClassifier::new(rules),
            shape: ShapeClassifier::new(rules),
            style: StyleClassifier::new(rules),
            frame_size: FrameSizeExtractor::new(),
            color: ColorExtractor::new(rules),
        }
    }

    pub fn rules_version(&self) -> &str { &self.rules_version }

    /// Run one classifier.
    pub fn extract_one(&self, text: Option<&str>, kind: AttributeKind) -> AttributeValue {
        match kind {
            AttributeKind::Gender    => AttributeValue::Gender(self.gender.classify_opt(text)),
            AttributeKind::Material  => AttributeValue::Material(self.material.classify_opt(text)),
            AttributeKind::Shape     => AttributeValue::Shape(self.shape.classify_opt(text)),
            AttributeKind::Style     => AttributeValue::Style(self.style.classify_opt(text)),
            AttributeKind::FrameSize => AttributeValue::FrameSize(self.frame_size.classify_opt(text)),
            AttributeKind::Color     => AttributeValue::Color(self.color.classify_opt(text)),
        }
    }

    /// Run exactly the requested classifiers. Kinds not requested are neither
    /// computed nor present in the result.
    pub fn extract(&self, text: Option<&str>, requested: AttributeSet) -> ExtractionResult {
        let mut out = ExtractionResult::new();
        for kind in requested.iter() {
            out.insert(self.extract_one(text, kind));
        }
        out
    }
}

/// Convenience: extract with the canonical rule tables.
pub fn extract(text: Option<&str>, requested: AttributeSet) -> ExtractionResult {
    Extractor::default().extract(text, requested)
}
