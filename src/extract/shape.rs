// src/extract/shape.rs
use super::rules::{default_shape_table, KeywordTable, RuleSet};
use super::types::Shape;
use super::Classifier;

/// Table order is a priority order: short keywords such as "RE" or "SQ" show up
/// inside many descriptions, and the earliest shape in the table wins.
#[derive(Clone, Debug)]
pub struct ShapeClassifier {
    table: KeywordTable<Shape>,
}

impl Default for ShapeClassifier {
    fn default() -> Self {
        Self { table: default_shape_table() }
    }
}

impl ShapeClassifier {
    pub fn new(rules: &RuleSet) -> Self {
        Self { table: rules.shape.clone() }
    }
}

impl Classifier for ShapeClassifier {
    type Output = Shape;

    fn classify(&self, text: &str) -> Shape {
        self.table
            .first_match(&text.to_uppercase())
            .unwrap_or(Shape::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::rules::KeywordRule;

    fn shape(s: &str) -> Shape {
        ShapeClassifier::default().classify(s)
    }

    #[test]
    fn full_names_and_abbreviations() {
        assert_eq!(shape("AB12 ROUND"), Shape::Round);
        assert_eq!(shape("AB12 rnd"), Shape::Round);
        assert_eq!(shape("AB12 CAT EYE"), Shape::CatEye);
        assert_eq!(shape("AB12 BUTTR"), Shape::Butterfly);
        assert_eq!(shape("AB12 IRR"), Shape::Irregular);
    }

    #[test]
    fn table_order_breaks_ties() {
        // CLUB (Clubmaster) vs RE (Rectangle)
        assert_eq!(shape("CLUB RECT"), Shape::Clubmaster);
        // "PILLOW" also contains "PIL" (Pilot): Pillow comes first.
        assert_eq!(shape("PILLOW 52"), Shape::Pillow);
        // "SQUARE" contains "RE" (Rectangle): Square comes first.
        assert_eq!(shape("SQUARE"), Shape::Square);
        // "STAR" inside "START" beats everything else.
        assert_eq!(shape("START OVAL"), Shape::Star);
        // "ROUND" inside "AROUND" beats "OVAL".
        assert_eq!(shape("OVAL AROUND"), Shape::Round);
        // "IRREG" contains "RE": Rectangle is checked before Irregular.
        assert_eq!(shape("AB12 IRREG"), Shape::Rectangle);
    }

    #[test]
    fn short_keywords_match_incidentally() {
        // "FREE" contains "RE".
        assert_eq!(shape("FREE 52"), Shape::Rectangle);
    }

    #[test]
    fn no_match_is_unknown() {
        assert_eq!(shape("AB1234 C-102 49-18-135 L"), Shape::Unknown);
        assert_eq!(ShapeClassifier::default().classify_opt(None), Shape::Unknown);
    }

    #[test]
    fn substitute_table() {
        let rules = RuleSet {
            shape: KeywordTable::new(vec![KeywordRule::new(Shape::Oval, &["RE"], &[])]),
            ..RuleSet::default()
        };
        assert_eq!(ShapeClassifier::new(&rules).classify("RECTANGLE"), Shape::Oval);
    }
}
