use i18n_catalog_core::{
    Args, LanguageTag, PluralCategory, PluralVariants, interpolate, select_variant,
};
use serde_json::{Map, Value as JsonValue};

use crate::error::RuntimeResult;

/// A parsed JSON translation document.
///
/// Keys are addressed with dotted paths (`"menu.file.open"`). A backslash
/// escapes a literal dot inside a key (`"version\.major"`), and a numeric
/// segment indexes into an array.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: JsonValue,
}

impl Document {
    pub fn parse(bytes: &[u8]) -> RuntimeResult<Self> {
        let root = serde_json::from_slice(bytes)?;
        Ok(Self { root })
    }

    pub fn get(&self, path: &str) -> Option<&JsonValue> {
        let mut current = &self.root;
        for segment in split_path(path) {
            current = match current {
                JsonValue::Object(map) => map.get(&segment)?,
                JsonValue::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Renders the entry at `path`, or `None` when the path is absent.
    pub fn translate(
        &self,
        tag: &LanguageTag,
        path: &str,
        count: Option<i64>,
        args: &Args,
    ) -> Option<String> {
        let value = self.get(path)?;
        let message = render_entry(value, count);
        if message.is_empty() {
            return Some(message);
        }
        Some(interpolate(tag, &message, args))
    }
}

struct ObjectVariants<'a>(&'a Map<String, JsonValue>);

impl PluralVariants for ObjectVariants<'_> {
    fn variant(&self, category: PluralCategory) -> Option<&str> {
        self.0.get(category.as_str()).and_then(JsonValue::as_str)
    }
}

fn render_entry(value: &JsonValue, count: Option<i64>) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        JsonValue::Object(map) => match select_variant(&ObjectVariants(map), count) {
            Some(text) => text.to_string(),
            None => value.to_string(),
        },
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

fn split_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(escaped) => current.push(escaped),
                None => current.push('\\'),
            },
            '.' => segments.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    segments.push(current);
    segments
}
