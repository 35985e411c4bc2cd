use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::{CoreError, CoreResult};

/// A validated, case-normalized BCP-47 style tag.
///
/// The catalog never keys anything by tag; it only asks the tag which
/// number symbols to use when rendering placeholder values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    normalized: String,
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl LanguageTag {
    pub fn parse(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyTag);
        }

        let invalid = |reason: &'static str| CoreError::InvalidTag {
            tag: trimmed.to_string(),
            reason,
        };

        let subtags: Vec<&str> = trimmed.split(['-', '_']).collect();
        if subtags.iter().any(|part| part.is_empty()) {
            return Err(invalid("empty subtag"));
        }
        if subtags.iter().any(|part| part.len() > 8 || !is_alphanumeric(part)) {
            return Err(invalid("malformed subtag"));
        }

        let language = subtags[0];
        if !is_alpha(language) || !(2..=8).contains(&language.len()) {
            return Err(invalid("invalid language subtag"));
        }
        let language = language.to_ascii_lowercase();

        let mut normalized_parts = Vec::with_capacity(subtags.len());
        normalized_parts.push(language.clone());
        let mut script = None;
        let mut region = None;
        let mut in_extension = false;

        for part in &subtags[1..] {
            if part.len() == 1 {
                in_extension = true;
                normalized_parts.push(part.to_ascii_lowercase());
                continue;
            }
            if in_extension {
                normalized_parts.push(part.to_ascii_lowercase());
                continue;
            }

            let normalized = if script.is_none() && region.is_none() && is_script(part) {
                let value = titlecase(part);
                script = Some(value.clone());
                value
            } else if region.is_none() && is_region(part) {
                let value = part.to_ascii_uppercase();
                region = Some(value.clone());
                value
            } else {
                part.to_ascii_lowercase()
            };
            normalized_parts.push(normalized);
        }

        Ok(Self {
            normalized: normalized_parts.join("-"),
            language,
            script,
            region,
        })
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl core::str::FromStr for LanguageTag {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        LanguageTag::parse(value)
    }
}

fn is_alpha(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_alphabetic())
}

fn is_alphanumeric(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_alphanumeric())
}

fn is_script(value: &str) -> bool {
    value.len() == 4 && is_alpha(value)
}

fn is_region(value: &str) -> bool {
    (value.len() == 2 && is_alpha(value))
        || (value.len() == 3 && value.chars().all(|ch| ch.is_ascii_digit()))
}

fn titlecase(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    for (idx, ch) in value.chars().enumerate() {
        if idx == 0 {
            output.push(ch.to_ascii_uppercase());
        } else {
            output.push(ch.to_ascii_lowercase());
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::LanguageTag;
    use crate::CoreError;

    #[test]
    fn normalizes_language_script_region() {
        let tag = LanguageTag::parse("zh-hant-tw").expect("valid tag");
        assert_eq!(tag.normalized(), "zh-Hant-TW");
        assert_eq!(tag.language(), "zh");
        assert_eq!(tag.script(), Some("Hant"));
        assert_eq!(tag.region(), Some("TW"));
    }

    #[test]
    fn accepts_underscore_separators() {
        let tag = LanguageTag::parse("pt_br").expect("valid tag");
        assert_eq!(tag.normalized(), "pt-BR");
        assert_eq!(tag.to_string(), "pt-BR");
    }

    #[test]
    fn extensions_do_not_set_region() {
        let tag = LanguageTag::parse("de-u-co-phonebk").expect("valid tag");
        assert_eq!(tag.normalized(), "de-u-co-phonebk");
        assert_eq!(tag.region(), None);
    }

    #[test]
    fn numeric_region_is_recognized() {
        let tag = LanguageTag::parse("es-419").expect("valid tag");
        assert_eq!(tag.region(), Some("419"));
    }

    #[test]
    fn rejects_empty_tag() {
        let err = LanguageTag::parse("  ").expect_err("empty tag should fail");
        assert_eq!(err, CoreError::EmptyTag);
    }

    #[test]
    fn rejects_empty_subtag() {
        let err = LanguageTag::parse("en--US").expect_err("empty subtag should fail");
        assert!(matches!(err, CoreError::InvalidTag { reason: "empty subtag", .. }));
    }

    #[test]
    fn rejects_numeric_language() {
        let err = LanguageTag::parse("12-US").expect_err("numeric language should fail");
        assert!(matches!(
            err,
            CoreError::InvalidTag {
                reason: "invalid language subtag",
                ..
            }
        ));
    }
}
