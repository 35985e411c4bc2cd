use alloc::format;
use alloc::string::{String, ToString};

use crate::{LanguageTag, Value};

const NBSP: &str = "\u{a0}";
const NARROW_NBSP: &str = "\u{202f}";

/// Separators used when rendering numbers for a locale. Digits stay ASCII.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberSymbols {
    pub group: &'static str,
    pub decimal: &'static str,
}

impl NumberSymbols {
    pub const LATIN: NumberSymbols = NumberSymbols {
        group: ",",
        decimal: ".",
    };

    pub fn for_tag(tag: &LanguageTag) -> Self {
        match (tag.language(), tag.region()) {
            ("de", Some("CH" | "LI")) => Self::new("\u{2019}", "."),
            (
                "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" | "el" | "ro" | "hr" | "sl"
                | "sr" | "vi" | "is",
                _,
            ) => Self::new(".", ","),
            ("fr", _) => Self::new(NARROW_NBSP, ","),
            (
                "ru" | "uk" | "be" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "nn" | "no" | "hu"
                | "bg" | "lt" | "lv" | "et" | "kk",
                _,
            ) => Self::new(NBSP, ","),
            _ => Self::LATIN,
        }
    }

    const fn new(group: &'static str, decimal: &'static str) -> Self {
        Self { group, decimal }
    }
}

/// Renders a placeholder value as text for the given locale.
pub fn format_value(tag: &LanguageTag, value: &Value) -> String {
    match value {
        Value::Absent => String::new(),
        Value::Custom(value) => value.to_string(),
        Value::Str(text) => text.clone(),
        Value::Int(number) => format_integer(tag, *number),
        Value::UInt(number) => group_digits(&number.to_string(), NumberSymbols::for_tag(tag)),
        Value::Float(number) => format_float(tag, *number),
        Value::Other(value) => format!("{value:?}"),
    }
}

pub fn format_integer(tag: &LanguageTag, value: i128) -> String {
    let symbols = NumberSymbols::for_tag(tag);
    let grouped = group_digits(&value.unsigned_abs().to_string(), symbols);
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Two fraction digits, grouped integer part.
pub fn format_float(tag: &LanguageTag, value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let symbols = NumberSymbols::for_tag(tag);
    let fixed = format!("{value:.2}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!(
        "{sign}{}{}{frac_part}",
        group_digits(int_part, symbols),
        symbols.decimal
    )
}

fn group_digits(digits: &str, symbols: NumberSymbols) -> String {
    let len = digits.len();
    let mut output = String::with_capacity(len + len / 3 * symbols.group.len());
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            output.push_str(symbols.group);
        }
        output.push(ch);
    }
    output
}
