// tests/extraction.rs
//
// Behaviour of the public extraction API on representative descriptions.

use frame_tagger::extract::{
    self, AttributeKind, AttributeSet, Classifier, ColorExtractor, Extractor, FrameSizeExtractor,
    Gender, GenderClassifier, KeywordRule, KeywordTable, Material, MaterialClassifier, RuleSet,
    Shape, ShapeClassifier, Style, StyleClassifier,
};

fn only(kind: AttributeKind) -> AttributeSet {
    [kind].into_iter().collect()
}

#[test]
fn absent_input_is_unknown_everywhere() {
    assert_eq!(GenderClassifier::default().classify_opt(None), Gender::Unknown);
    assert_eq!(MaterialClassifier::default().classify_opt(None), Material::Unknown);
    assert_eq!(ShapeClassifier::default().classify_opt(None), Shape::Unknown);
    assert_eq!(StyleClassifier::default().classify_opt(None), Style::Unknown);
    assert_eq!(FrameSizeExtractor::new().classify_opt(None), None);
    assert_eq!(ColorExtractor::default().classify_opt(None), None);
}

#[test]
fn gender_examples() {
    let g = GenderClassifier::default();
    assert_eq!(g.classify("AB CD X L."), Gender::Ladies);
    assert_eq!(g.classify("AB CD X Y G"), Gender::Gents);
    assert_eq!(g.classify("AB CD"), Gender::Unknown);
}

#[test]
fn material_examples() {
    let m = MaterialClassifier::default();
    assert_eq!(m.classify("TITANIUM FRAME"), Material::Titanium);
    assert_eq!(m.classify("SOME FRAME M"), Material::Metal);
    assert_eq!(m.classify("PLASTIC ROUND"), Material::ShellPlastic);
}

#[test]
fn shape_overlaps_follow_table_order() {
    let s = ShapeClassifier::default();
    assert_eq!(s.classify("CLUB RECT"), Shape::Clubmaster);
    assert_eq!(s.classify("STAR OVAL"), Shape::Star);
    assert_eq!(s.classify("SQUARE PILOT"), Shape::Square);
    assert_eq!(s.classify("HEXA CAT EYE"), Shape::Hexa);
}

#[test]
fn frame_size_examples() {
    let f = FrameSizeExtractor::new();
    assert_eq!(f.classify("BRAND C-102 49-18-135 L"), Some(49));
    assert_eq!(f.classify("BRAND 52 BLACK"), Some(52));
    assert_eq!(f.classify("BRAND XYZ"), None);
}

#[test]
fn color_examples() {
    let c = ColorExtractor::default();
    assert_eq!(c.classify("XY C-102 49-18-135 L").as_deref(), Some("102"));
    assert_eq!(c.classify("XY BLU 49-18-135 L").as_deref(), Some("BLU"));
    assert_ne!(c.classify("XY METAL 49-18-135").as_deref(), Some("METAL"));
}

#[test]
fn extract_is_idempotent() {
    let text = Some("RB3025 C-001 58-14-135 METAL AVIATOR FULL G");
    let a = extract::extract(text, AttributeSet::all());
    let b = extract::extract(text, AttributeSet::all());
    assert_eq!(a, b);
}

#[test]
fn result_holds_exactly_the_requested_kinds() {
    let text = Some("AB1234 C-102 49-18-135 L.");
    for kind in AttributeKind::ALL {
        let res = extract::extract(text, only(kind));
        assert_eq!(res.kinds().collect::<Vec<_>>(), vec![kind]);
    }
}

#[test]
fn substituted_rules_change_behaviour() {
    let mut rules = RuleSet::default();
    rules.style = KeywordTable::new(vec![KeywordRule::new(Style::Supra, &["NYLOR"], &[])]);
    rules.gender_markers = vec![("W".to_string(), Gender::Ladies)];
    rules.version = "test".to_string();

    let ex = Extractor::new(&rules);
    let res = ex.extract(Some("AB12 C-1 NYLOR W"), AttributeSet::all());
    assert_eq!(ex.rules_version(), "test");
    assert_eq!(res.style(), Some(Style::Supra));
    assert_eq!(res.gender(), Some(Gender::Ladies));
}
