// src/extract/material.rs
use super::rules::{default_material_table, KeywordTable, RuleSet};
use super::types::Material;
use super::Classifier;

/// Substring search over the whole upper-cased string (not token-exact).
#[derive(Clone, Debug)]
pub struct MaterialClassifier {
    table: KeywordTable<Material>,
}

impl Default for MaterialClassifier {
    fn default() -> Self {
        Self { table: default_material_table() }
    }
}

impl MaterialClassifier {
    pub fn new(rules: &RuleSet) -> Self {
        Self { table: rules.material.clone() }
    }
}

impl Classifier for MaterialClassifier {
    type Output = Material;

    fn classify(&self, text: &str) -> Material {
        self.table
            .first_match(&text.to_uppercase())
            .unwrap_or(Material::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(s: &str) -> Material {
        MaterialClassifier::default().classify(s)
    }

    #[test]
    fn keywords_in_priority_order() {
        assert_eq!(material("TITANIUM FRAME"), Material::Titanium);
        assert_eq!(material("titan metal"), Material::Titanium);
        assert_eq!(material("GUNMETAL 52"), Material::Metal);
        assert_eq!(material("PLASTIC ROUND"), Material::ShellPlastic);
        assert_eq!(material("shell"), Material::ShellPlastic);
    }

    #[test]
    fn suffix_rule_is_whole_string() {
        assert_eq!(material("SOME FRAME M"), Material::Metal);
        assert_eq!(material("AB12 ME"), Material::Metal);
        assert_eq!(material("AB12 META"), Material::Metal);
        // Incidental trailing M still counts.
        assert_eq!(material("PLASTIC FRAME FOR HIM"), Material::Metal);
        // Trailing whitespace defeats the suffix check.
        assert_eq!(material("SOME FRAME M "), Material::Unknown);
    }

    #[test]
    fn no_match_is_unknown() {
        assert_eq!(material("AB1234 C-102 49-18-135"), Material::Unknown);
        assert_eq!(MaterialClassifier::default().classify_opt(None), Material::Unknown);
    }
}
