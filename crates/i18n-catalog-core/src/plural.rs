use alloc::string::String;

/// Plural axis a message varies along.
///
/// Selection is a fixed count table shared by every locale, not a CLDR rule:
///
/// | count        | category |
/// |--------------|----------|
/// | no count     | other    |
/// | `< 0`        | other    |
/// | `0`          | zero     |
/// | `1`          | one      |
/// | `2`          | two      |
/// | `3..=10`     | few      |
/// | `> 10`       | many     |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    pub fn for_count(count: Option<i64>) -> Self {
        match count {
            Some(0) => PluralCategory::Zero,
            Some(1) => PluralCategory::One,
            Some(2) => PluralCategory::Two,
            Some(3..=10) => PluralCategory::Few,
            Some(c) if c > 10 => PluralCategory::Many,
            _ => PluralCategory::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

/// Anything that can hand out a text per plural category.
///
/// An empty variant counts as missing.
pub trait PluralVariants {
    fn variant(&self, category: PluralCategory) -> Option<&str>;
}

/// Picks the variant for `count`, falling back to `other`.
pub fn select_variant<V>(variants: &V, count: Option<i64>) -> Option<&str>
where
    V: PluralVariants + ?Sized,
{
    let category = PluralCategory::for_count(count);
    let non_empty = move |category: PluralCategory| {
        variants.variant(category).filter(|text| !text.is_empty())
    };
    non_empty(category).or_else(|| non_empty(PluralCategory::Other))
}

/// Overrides applied on top of the default text when a message is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PluralOptions {
    pub zero: Option<String>,
    pub one: Option<String>,
    pub two: Option<String>,
    pub few: Option<String>,
    pub many: Option<String>,
}

impl PluralOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zero(mut self, text: impl Into<String>) -> Self {
        self.zero = Some(text.into());
        self
    }

    pub fn one(mut self, text: impl Into<String>) -> Self {
        self.one = Some(text.into());
        self
    }

    pub fn two(mut self, text: impl Into<String>) -> Self {
        self.two = Some(text.into());
        self
    }

    pub fn few(mut self, text: impl Into<String>) -> Self {
        self.few = Some(text.into());
        self
    }

    pub fn many(mut self, text: impl Into<String>) -> Self {
        self.many = Some(text.into());
        self
    }
}

/// An immutable message with up to six plural variants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PluralMessage {
    zero: String,
    one: String,
    two: String,
    few: String,
    many: String,
    other: String,
}

impl PluralMessage {
    pub fn new(other: impl Into<String>, options: PluralOptions) -> Self {
        Self {
            zero: options.zero.unwrap_or_default(),
            one: options.one.unwrap_or_default(),
            two: options.two.unwrap_or_default(),
            few: options.few.unwrap_or_default(),
            many: options.many.unwrap_or_default(),
            other: other.into(),
        }
    }

    pub fn simple(text: impl Into<String>) -> Self {
        Self::new(text, PluralOptions::default())
    }

    /// Returns the raw variant for `count`, or `""` when nothing applies.
    pub fn resolve(&self, count: Option<i64>) -> &str {
        select_variant(self, count).unwrap_or("")
    }
}

impl PluralVariants for PluralMessage {
    fn variant(&self, category: PluralCategory) -> Option<&str> {
        let text = match category {
            PluralCategory::Zero => &self.zero,
            PluralCategory::One => &self.one,
            PluralCategory::Two => &self.two,
            PluralCategory::Few => &self.few,
            PluralCategory::Many => &self.many,
            PluralCategory::Other => &self.other,
        };
        Some(text.as_str())
    }
}
