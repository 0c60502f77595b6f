//! The parsing entry points agree with each other on arbitrary text.

use crate::common::culture;
use proptest::prelude::*;
use svo::prelude::*;
use svo::value_objects::{
    Currency, Date, EmailAddress, FileSize, LocalDateTime, Month, Uuid, Year,
};

/// Text that sometimes looks like a value object and often does not.
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9@.:/ -]{0,24}",
        "[0-9]{1,4}",
        "[0-9]{4}-[0-9]{2}-[0-9]{2}",
        "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,3}",
        "[0-9]{1,6}(\\.[0-9]{1,2})? ?(b|kB|MB|GB|byte|bytes)",
        Just("?".to_string()),
        Just(String::new()),
    ]
}

/// `is_valid`, `try_parse` and `parse` never disagree, and whatever parses
/// formats back to text that parses to the same value.
fn assert_agreement<T: Parsable + Formattable>(text: &str, culture: &Culture) {
    let tried = T::try_parse_with(text, culture);
    assert_eq!(T::is_valid_with(text, culture), tried.is_some(), "{text}");
    assert_eq!(T::parse_with(text, culture).ok(), tried.clone(), "{text}");

    if let Some(value) = tried {
        let canonical = value.to_text();
        assert_eq!(
            T::parse_with(canonical.as_str(), Culture::invariant()).ok(),
            Some(value),
            "'{text}' formatted as '{canonical}'"
        );
    }
}

proptest! {
    #[test]
    fn prop_entry_points_agree(
        text in text_strategy(),
        name in prop::sample::select(vec!["", "en-US", "nl-BE", "de-DE"]),
    ) {
        let culture = culture(name);
        assert_agreement::<Currency>(&text, culture);
        assert_agreement::<Date>(&text, culture);
        assert_agreement::<EmailAddress>(&text, culture);
        assert_agreement::<FileSize>(&text, culture);
        assert_agreement::<LocalDateTime>(&text, culture);
        assert_agreement::<Month>(&text, culture);
        assert_agreement::<Year>(&text, culture);
        assert_agreement::<Uuid>(&text, culture);
    }

    /// Strict parsing accepts a subset of what lenient parsing accepts.
    #[test]
    fn prop_strict_is_subset_of_lenient(text in text_strategy()) {
        let nl = culture("nl-BE");
        if let Some(strict) = Currency::try_parse_with_mode(text.as_str(), nl, ParseMode::Strict) {
            prop_assert_eq!(
                Currency::try_parse_with_mode(text.as_str(), nl, ParseMode::Lenient),
                Some(strict)
            );
        }
        if let Some(strict) = FileSize::try_parse_with_mode(text.as_str(), nl, ParseMode::Strict) {
            prop_assert_eq!(
                FileSize::try_parse_with_mode(text.as_str(), nl, ParseMode::Lenient),
                Some(strict)
            );
        }
    }

    /// Absent and blank input is Empty for every type.
    #[test]
    fn prop_blank_text_is_empty(blank in "[ \t]{0,4}") {
        let inv = Culture::invariant();
        prop_assert!(Currency::parse_with(blank.as_str(), inv).unwrap().is_empty());
        prop_assert!(Date::parse_with(blank.as_str(), inv).unwrap().is_empty());
        prop_assert!(EmailAddress::parse_with(blank.as_str(), inv).unwrap().is_empty());
        prop_assert!(FileSize::parse_with(blank.as_str(), inv).unwrap().is_empty());
        prop_assert!(Uuid::parse_with(None::<&str>, inv).unwrap().is_empty());
    }
}
