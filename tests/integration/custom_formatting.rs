//! Application supplied formatters preempt built-in formatting.

use crate::common::{fixtures, invariant};
use std::any::Any;
use svo::formatting::{CustomFormatter, FormatProvider};
use svo::prelude::*;
use svo::value_objects::{Currency, EmailAddress, FileSize, Month};

/// Renders every value as `<type>:<format>`.
struct TypeTagger;

impl CustomFormatter for TypeTagger {
    fn format(&self, format: &str, _value: &dyn Any, type_name: &'static str) -> String {
        format!("<{type_name}:{format}>")
    }
}

#[test]
fn test_custom_formatter_replaces_builtin_output() {
    let provider = FormatProvider::Custom(&TypeTagger);
    assert_eq!(
        Currency::EUR.to_string_with_provider(Some("e"), provider).unwrap(),
        "<currency:e>"
    );
    assert_eq!(
        FileSize::new(1024).to_string_with_provider(None, provider).unwrap(),
        "<file size:>"
    );
}

#[test]
fn test_custom_formatter_sees_sentinels_and_unsupported_formats() {
    let provider = FormatProvider::Custom(&TypeTagger);
    // No built-in validation happens once a custom formatter is present.
    assert_eq!(
        Month::UNKNOWN.to_string_with_provider(Some("zz"), provider).unwrap(),
        "<month:zz>"
    );
    assert_eq!(
        Currency::EMPTY.to_string_with_provider(Some("Q"), provider).unwrap(),
        "<currency:Q>"
    );
}

#[test]
fn test_closure_formatter_can_downcast() {
    let masking = |_format: &str, value: &dyn Any, _type_name: &'static str| -> String {
        match value.downcast_ref::<EmailAddress>() {
            Some(email) => format!("***@{}", email.domain()),
            None => String::from("***"),
        }
    };
    let provider = FormatProvider::Custom(&masking);
    assert_eq!(
        fixtures::sample_email().to_string_with_provider(Some("f"), provider).unwrap(),
        "***@qowaiv.org"
    );
    assert_eq!(
        Currency::USD.to_string_with_provider(None, provider).unwrap(),
        "***"
    );
}

#[test]
fn test_culture_provider_uses_builtin_formatting() {
    let provider = FormatProvider::from(invariant());
    assert_eq!(
        Currency::EUR.to_string_with_provider(Some("e"), provider).unwrap(),
        "Euro"
    );
    assert_eq!(format!("{:?}", provider), "Culture(\"\")");
    assert_eq!(format!("{:?}", FormatProvider::Custom(&TypeTagger)), "Custom");
}
