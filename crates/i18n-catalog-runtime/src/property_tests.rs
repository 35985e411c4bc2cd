#![cfg(test)]
use i18n_catalog_core::{
    Args, LanguageTag, PluralCategory, PluralMessage, PluralOptions, interpolate,
};
use proptest::prelude::*;

use crate::translator::Translator;

fn en() -> LanguageTag {
    LanguageTag::parse("en").expect("valid tag")
}

fn expected_category(count: i64) -> PluralCategory {
    if count < 0 {
        PluralCategory::Other
    } else if count == 0 {
        PluralCategory::Zero
    } else if count == 1 {
        PluralCategory::One
    } else if count == 2 {
        PluralCategory::Two
    } else if count <= 10 {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

proptest! {
    #[test]
    fn category_follows_count_table(count in any::<i64>()) {
        prop_assert_eq!(PluralCategory::for_count(Some(count)), expected_category(count));
    }

    #[test]
    fn full_message_resolves_to_category_name(count in -50i64..50) {
        let message = PluralMessage::new(
            "other",
            PluralOptions::new().zero("zero").one("one").two("two").few("few").many("many"),
        );
        prop_assert_eq!(message.resolve(Some(count)), expected_category(count).as_str());
    }

    #[test]
    fn substitution_is_stable_once_tokens_are_gone(
        message in "[a-c {}]{0,40}",
        values in proptest::collection::btree_map("[a-c]{1,2}", "[a-z ]{0,6}", 0..4),
    ) {
        let tag = en();
        let mut args = Args::new();
        for (name, value) in &values {
            args.insert(name.clone(), value.clone());
        }
        let once = interpolate(&tag, &message, &args);
        prop_assume!(values.keys().all(|name| !once.contains(&format!("{{{name}}}"))));
        prop_assert_eq!(interpolate(&tag, &once, &args), once);
    }

    #[test]
    fn registered_text_round_trips(text in "[a-zA-Z][a-zA-Z ,.!]{0,30}[a-zA-Z.!]") {
        let translator = Translator::new("en", en());
        translator.add_locale("fr", Some(LanguageTag::parse("fr").expect("valid tag")));
        translator.add_message("fr", "key", &text, PluralOptions::new());
        prop_assert_eq!(translator.translate("fr", "key", &Args::new()), text);
    }
}
