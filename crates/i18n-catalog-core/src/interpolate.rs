use alloc::string::String;

use crate::{Args, LanguageTag, format_value};

/// Replaces `{name}` tokens with the rendered value of `name`.
///
/// Single left-to-right pass: substituted text is never rescanned, and a
/// token without a matching argument is copied through unchanged.
pub fn interpolate(tag: &LanguageTag, message: &str, args: &Args) -> String {
    if args.is_empty() || !message.contains('{') {
        return String::from(message);
    }

    let mut output = String::with_capacity(message.len());
    let mut rest = message;
    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            output.push_str(&rest[open..]);
            return output;
        };
        let name = &after_open[..close];
        if name.contains('{') {
            // Re-anchor on the innermost brace.
            output.push('{');
            rest = after_open;
            continue;
        }
        match args.get(name) {
            Some(value) => output.push_str(&format_value(tag, value)),
            None => {
                output.push('{');
                output.push_str(name);
                output.push('}');
            }
        }
        rest = &after_open[close + 1..];
    }
    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::interpolate;
    use crate::{Args, LanguageTag, Value};

    fn en() -> LanguageTag {
        LanguageTag::parse("en").expect("valid tag")
    }

    #[test]
    fn replaces_every_occurrence() {
        let args = Args::new().with("name", "Ann");
        assert_eq!(
            interpolate(&en(), "{name}, hi {name}!", &args),
            "Ann, hi Ann!"
        );
    }

    #[test]
    fn leaves_unknown_placeholders() {
        let args = Args::new().with("name", "Ann");
        assert_eq!(
            interpolate(&en(), "Hello {name}, you have {count}", &args),
            "Hello Ann, you have {count}"
        );
    }

    #[test]
    fn does_not_rescan_substituted_text() {
        let args = Args::new().with("a", "{b}").with("b", "x");
        assert_eq!(interpolate(&en(), "{a}{b}", &args), "{b}x");
    }

    #[test]
    fn formats_numbers_for_locale() {
        let args = Args::new().with("count", 12500).with("price", 3.5);
        let de = LanguageTag::parse("de").expect("valid tag");
        assert_eq!(
            interpolate(&de, "{count} for {price}", &args),
            "12.500 for 3,50"
        );
    }

    #[test]
    fn handles_stray_braces() {
        let args = Args::new().with("name", "Ann");
        assert_eq!(interpolate(&en(), "{{name}}", &args), "{Ann}");
        assert_eq!(interpolate(&en(), "open { only", &args), "open { only");
        assert_eq!(interpolate(&en(), "} {name", &args), "} {name");
    }

    #[test]
    fn absent_value_renders_empty() {
        let args = Args::new().with("who", Value::Absent);
        assert_eq!(interpolate(&en(), "[{who}]", &args), "[]");
    }
}
