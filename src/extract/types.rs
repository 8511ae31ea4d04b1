// src/extract/types.rs
use std::collections::BTreeMap;
use std::fmt;

/// One attribute the engine knows how to compute.
/// Declaration order is the canonical column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKind {
    Gender,
    Material,
    Shape,
    Style,
    FrameSize,
    Color,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 6] = [
        AttributeKind::Gender,
        AttributeKind::Material,
        AttributeKind::Shape,
        AttributeKind::Style,
        AttributeKind::FrameSize,
        AttributeKind::Color,
    ];

    /// Output column header.
    pub fn column_name(self) -> &'static str {
        match self {
            AttributeKind::Gender    => "GENDER",
            AttributeKind::Material  => "MATERIAL",
            AttributeKind::Shape     => "SHAPE",
            AttributeKind::Style     => "STYLE",
            AttributeKind::FrameSize => "SIZE",
            AttributeKind::Color     => "COLOR",
        }
    }

    /// Human label for checkboxes and help text.
    pub fn label(self) -> &'static str {
        match self {
            AttributeKind::Gender    => "Gender",
            AttributeKind::Material  => "Material",
            AttributeKind::Shape     => "Shape",
            AttributeKind::Style     => "Style",
            AttributeKind::FrameSize => "Frame size",
            AttributeKind::Color     => "Color",
        }
    }

    /// Parse a user-facing name ("gender", "size", "colour", ...).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "gender"                           => Some(AttributeKind::Gender),
            "material"                         => Some(AttributeKind::Material),
            "shape"                            => Some(AttributeKind::Shape),
            "style"                            => Some(AttributeKind::Style),
            "size" | "frame_size" | "framesize" => Some(AttributeKind::FrameSize),
            "color" | "colour"                 => Some(AttributeKind::Color),
            _ => None,
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1u8 << (self as u8)
    }
}

/// Set of requested kinds. Unique by construction; iteration is always
/// in canonical order regardless of insertion order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AttributeSet(u8);

impl AttributeSet {
    pub const fn empty() -> Self { Self(0) }

    pub fn all() -> Self {
        AttributeKind::ALL.iter().copied().collect()
    }

    pub fn insert(&mut self, kind: AttributeKind) { self.0 |= kind.bit(); }
    pub fn remove(&mut self, kind: AttributeKind) { self.0 &= !kind.bit(); }

    pub fn set(&mut self, kind: AttributeKind, on: bool) {
        if on { self.insert(kind) } else { self.remove(kind) }
    }

    #[inline] pub fn contains(&self, kind: AttributeKind) -> bool { self.0 & kind.bit() != 0 }
    #[inline] pub fn is_empty(&self) -> bool { self.0 == 0 }
    #[inline] pub fn len(&self) -> usize { self.0.count_ones() as usize }

    pub fn iter(&self) -> impl Iterator<Item = AttributeKind> + '_ {
        AttributeKind::ALL.into_iter().filter(move |k| self.contains(*k))
    }

    /// Comma-separated list of names; `all` selects everything.
    pub fn parse_list(s: &str) -> Result<Self, String> {
        let mut set = AttributeSet::empty();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() { continue; }
            if part.eq_ignore_ascii_case("all") {
                return Ok(AttributeSet::all());
            }
            let kind = AttributeKind::parse(part)
                .ok_or_else(|| format!("Unknown attribute: {}", part))?;
            set.insert(kind);
        }
        Ok(set)
    }
}

impl FromIterator<AttributeKind> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = AttributeKind>>(iter: I) -> Self {
        let mut set = AttributeSet::empty();
        for k in iter { set.insert(k); }
        set
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Gender {
    Ladies,
    Gents,
    Unisex,
    #[default]
    Unknown,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Ladies  => "Ladies",
            Gender::Gents   => "Gents",
            Gender::Unisex  => "Unisex",
            Gender::Unknown => "",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Material {
    Titanium,
    Metal,
    ShellPlastic,
    #[default]
    Unknown,
}

impl Material {
    pub fn label(self) -> &'static str {
        match self {
            Material::Titanium     => "TITANIUM",
            Material::Metal        => "METAL",
            Material::ShellPlastic => "PLASTICS",
            Material::Unknown      => "",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    Star,
    Round,
    Clubmaster,
    Hexa,
    CatEye,
    Wayfarer,
    Butterfly,
    Aviator,
    Pillow,
    Square,
    Pilot,
    Oval,
    Rectangle,
    Irregular,
    #[default]
    Unknown,
}

impl Shape {
    pub fn label(self) -> &'static str {
        match self {
            Shape::Star       => "Star",
            Shape::Round      => "Round",
            Shape::Clubmaster => "Clubmaster",
            Shape::Hexa       => "Hexa",
            Shape::CatEye     => "Cat Eye",
            Shape::Wayfarer   => "Wayfarer",
            Shape::Butterfly  => "Butterfly",
            Shape::Aviator    => "Aviator",
            Shape::Pillow     => "Pillow",
            Shape::Square     => "Square",
            Shape::Pilot      => "Pilot",
            Shape::Oval       => "Oval",
            Shape::Rectangle  => "Rectangle",
            Shape::Irregular  => "Irregular",
            Shape::Unknown    => "",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    FullRim,
    Rimless,
    Supra,
    #[default]
    Unknown,
}

impl Style {
    pub fn label(self) -> &'static str {
        match self {
            Style::FullRim => "Full Rim",
            Style::Rimless => "Rimless",
            Style::Supra   => "Supra",
            Style::Unknown => "",
        }
    }
}

/// A single computed attribute value. `None`/`Unknown` are valid values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    Gender(Gender),
    Material(Material),
    Shape(Shape),
    Style(Style),
    FrameSize(Option<u8>),
    Color(Option<String>),
}

impl AttributeValue {
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeValue::Gender(_)    => AttributeKind::Gender,
            AttributeValue::Material(_)  => AttributeKind::Material,
            AttributeValue::Shape(_)     => AttributeKind::Shape,
            AttributeValue::Style(_)     => AttributeKind::Style,
            AttributeValue::FrameSize(_) => AttributeKind::FrameSize,
            AttributeValue::Color(_)     => AttributeKind::Color,
        }
    }

    /// True for `Unknown` and `None` values.
    pub fn is_unknown(&self) -> bool {
        match self {
            AttributeValue::Gender(g)    => *g == Gender::Unknown,
            AttributeValue::Material(m)  => *m == Material::Unknown,
            AttributeValue::Shape(s)     => *s == Shape::Unknown,
            AttributeValue::Style(s)     => *s == Style::Unknown,
            AttributeValue::FrameSize(v) => v.is_none(),
            AttributeValue::Color(v)     => v.is_none(),
        }
    }

    /// Cell text for export; unknown is an empty cell.
    pub fn to_cell(&self) -> String {
        match self {
            AttributeValue::Gender(g)    => s!(g.label()),
            AttributeValue::Material(m)  => s!(m.label()),
            AttributeValue::Shape(s)     => s!(s.label()),
            AttributeValue::Style(s)     => s!(s.label()),
            AttributeValue::FrameSize(v) => v.map(|n| n.to_string()).unwrap_or_default(),
            AttributeValue::Color(v)     => v.clone().unwrap_or_default(),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cell())
    }
}

/// Values for exactly the requested kinds. Kinds that were not requested
/// are absent, which is distinct from present-but-unknown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    values: BTreeMap<AttributeKind, AttributeValue>,
}

impl ExtractionResult {
    pub fn new() -> Self { Self::default() }

    pub(crate) fn insert(&mut self, value: AttributeValue) {
        self.values.insert(value.kind(), value);
    }

    pub fn get(&self, kind: AttributeKind) -> Option<&AttributeValue> { self.values.get(&kind) }
    pub fn contains(&self, kind: AttributeKind) -> bool { self.values.contains_key(&kind) }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn kinds(&self) -> impl Iterator<Item = AttributeKind> + '_ { self.values.keys().copied() }

    /// Canonical-order iteration.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKind, &AttributeValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    pub fn gender(&self) -> Option<Gender> {
        match self.get(AttributeKind::Gender) { Some(AttributeValue::Gender(g)) => Some(*g), _ => None }
    }
    pub fn material(&self) -> Option<Material> {
        match self.get(AttributeKind::Material) { Some(AttributeValue::Material(m)) => Some(*m), _ => None }
    }
    pub fn shape(&self) -> Option<Shape> {
        match self.get(AttributeKind::Shape) { Some(AttributeValue::Shape(s)) => Some(*s), _ => None }
    }
    pub fn style(&self) -> Option<Style> {
        match self.get(AttributeKind::Style) { Some(AttributeValue::Style(s)) => Some(*s), _ => None }
    }
    /// Outer `None`: not requested. Inner `None`: requested, no match.
    pub fn frame_size(&self) -> Option<Option<u8>> {
        match self.get(AttributeKind::FrameSize) { Some(AttributeValue::FrameSize(v)) => Some(*v), _ => None }
    }
    /// Outer `None`: not requested. Inner `None`: requested, no match.
    pub fn color(&self) -> Option<Option<&str>> {
        match self.get(AttributeKind::Color) { Some(AttributeValue::Color(v)) => Some(v.as_deref()), _ => None }
    }
}
