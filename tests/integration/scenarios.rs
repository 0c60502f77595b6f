//! Documented behaviour of each value object, exercised end to end.

use crate::common::{culture, fixtures, init_logging, invariant};
use std::cmp::Ordering;
use svo::prelude::*;
use svo::value_objects::{
    Currency, Date, EmailAddress, FileSize, LocalDateTime, Month, Uuid, Year,
};

#[test]
fn test_currency_codes_and_display_names() {
    init_logging();
    assert_eq!(Currency::parse_with("USD", invariant()).unwrap().to_text(), "USD");
    assert_eq!(
        Currency::parse_with("Amerikaanse dollar", culture("nl-BE")).unwrap(),
        Currency::USD
    );
    assert_eq!(
        Currency::parse_with("pound sterling", invariant()).unwrap(),
        Currency::GBP
    );
    // Non-invariant cultures still fall back to the English names.
    assert_eq!(
        Currency::parse_with("Pound Sterling", culture("nl-BE")).unwrap(),
        Currency::GBP
    );
    assert!(Currency::parse_with("Amerikaanse dollar", invariant()).is_err());
}

#[test]
fn test_strict_mode_only_accepts_canonical_text() {
    let nl = culture("nl-BE");
    assert_eq!(
        Currency::try_parse_with_mode("USD", nl, ParseMode::Strict),
        Some(Currency::USD)
    );
    assert_eq!(
        Currency::try_parse_with_mode("Amerikaanse dollar", nl, ParseMode::Strict),
        None
    );
    assert_eq!(
        Currency::try_parse_with_mode("Amerikaanse dollar", nl, ParseMode::Lenient),
        Some(Currency::USD)
    );
    // Sentinels are recognized before the recognizers run.
    assert_eq!(
        Month::try_parse_with_mode("?", nl, ParseMode::Strict),
        Some(Month::UNKNOWN)
    );
    assert_eq!(
        Month::try_parse_with_mode("  ", nl, ParseMode::Strict),
        Some(Month::EMPTY)
    );
}

#[test]
fn test_each_recognizer_stage_matches() {
    init_logging();
    let nl = culture("nl-BE");
    // Canonical ISO code, Dutch display name, then the invariant English name.
    assert_eq!(Currency::parse_with("USD", nl).unwrap(), Currency::USD);
    assert_eq!(Currency::parse_with("Amerikaanse dollar", nl).unwrap(), Currency::USD);
    assert_eq!(Currency::parse_with("US Dollar", nl).unwrap(), Currency::USD);

    let owned = String::from("1,5 MB");
    assert_eq!(FileSize::parse_with(&owned, nl).unwrap(), FileSize::new(3 << 19));
    assert!(FileSize::is_valid_with(&owned, nl));
}

#[test]
fn test_file_size_scaled_formats() {
    let size = FileSize::new(123_456_789);
    assert_eq!(size.format("0.0 MegaByte", invariant()).unwrap(), "117.7 Megabyte");
    assert_eq!(size.format("0.0 MegaByte", culture("nl-BE")).unwrap(), "117,7 Megabyte");
    let plural = size.format("0.00 megabytes", invariant()).unwrap();
    assert_eq!(plural, "117.74 megabytes");
    assert_eq!(
        FileSize::parse_with(&plural, invariant()).unwrap(),
        FileSize::from_megabytes(117.74).unwrap()
    );
    assert_eq!(FileSize::ZERO.to_text(), "0 byte");
    assert!(FileSize::ZERO.is_empty());
}

#[test]
fn test_email_obfuscation_pattern() {
    let email = fixtures::sample_email();
    assert_eq!(email.format("l[at]d", invariant()).unwrap(), "svo[at]qowaiv.org");
    assert_eq!(email.format("U", invariant()).unwrap(), "SVO@QOWAIV.ORG");
    assert_eq!(
        EmailAddress::parse_with("Qowaiv <SVO@Qowaiv.org>", invariant()).unwrap(),
        email
    );
}

#[test]
fn test_uuid_bracket_and_hex_styles() {
    let id = fixtures::sample_uuid();
    assert_eq!(
        id.format("B", invariant()).unwrap(),
        "{8a1a8c42-d2ff-e254-e26e-b6abcbf19420}"
    );
    assert_eq!(
        id.format("X", invariant()).unwrap(),
        "{0x8a1a8c42,0xd2ff,0xe254,{0xe2,0x6e,0xb6,0xab,0xcb,0xf1,0x94,0x20}}"
    );
    assert_eq!(id.to_text(), fixtures::SAMPLE_UUID_BASE64);
    assert_eq!(Uuid::parse_with(fixtures::SAMPLE_UUID_BASE64, invariant()).unwrap(), id);
}

#[test]
fn test_year_leap_rules() {
    assert!(Year::new(1980).unwrap().is_leap_year());
    assert!(!Year::new(1979).unwrap().is_leap_year());
    assert!(!Year::EMPTY.is_leap_year());
}

#[test]
fn test_date_and_moment_agree() {
    let date = fixtures::sample_date();
    let moment = fixtures::sample_moment();
    assert_eq!(moment.date(), date);
    assert_eq!(date.to_local_date_time().ticks(), date.ticks());
    assert_eq!(date.format("d", culture("nl-NL")).unwrap(), "11-6-2017");
    assert_eq!(Date::parse_with("11-6-2017", culture("nl-NL")).unwrap(), date);
    assert_eq!(
        LocalDateTime::parse_with("2017-06-11T06:15:00", invariant()).unwrap(),
        moment
    );
}

#[test]
fn test_empty_formats_as_empty_text() {
    let inv = invariant();
    assert_eq!(Currency::EMPTY.format("n", inv).unwrap(), "");
    assert_eq!(Date::EMPTY.format("yyyy", inv).unwrap(), "");
    assert_eq!(EmailAddress::EMPTY.format("l[at]d", inv).unwrap(), "");
    assert_eq!(Month::EMPTY.format("M", inv).unwrap(), "");
    assert_eq!(Year::EMPTY.format("0000", inv).unwrap(), "");
    assert_eq!(Uuid::EMPTY.format("B", inv).unwrap(), "");
}

#[test]
fn test_unknown_formats_as_question_mark() {
    let inv = invariant();
    assert_eq!(Currency::UNKNOWN.format("e", inv).unwrap(), "?");
    assert_eq!(EmailAddress::UNKNOWN.format("l[at]d", inv).unwrap(), "?");
    assert_eq!(Month::UNKNOWN.format("f", inv).unwrap(), "?");
    assert_eq!(Year::UNKNOWN.format("0", inv).unwrap(), "?");
    assert!(EmailAddress::UNKNOWN.is_empty_or_unknown());
    assert!(!EmailAddress::UNKNOWN.is_empty());
}

#[test]
fn test_unknown_is_rejected_by_types_without_it() {
    for valid in [
        Date::is_valid_with("?", invariant()),
        LocalDateTime::is_valid_with("?", invariant()),
        FileSize::is_valid_with("?", invariant()),
        Uuid::is_valid_with("?", invariant()),
    ] {
        assert!(!valid);
    }
    assert!(Date::unknown().is_none());
}

#[test]
fn test_sentinels_order_before_ordinary_values() {
    let mut years = vec![
        Year::new(2000).unwrap(),
        Year::UNKNOWN,
        Year::new(1980).unwrap(),
        Year::EMPTY,
    ];
    years.sort();
    assert_eq!(
        years,
        vec![
            Year::EMPTY,
            Year::UNKNOWN,
            Year::new(1980).unwrap(),
            Year::new(2000).unwrap()
        ]
    );
    assert!(Currency::UNKNOWN > Currency::EMPTY);
    assert!(Currency::UNKNOWN < Currency::EUR);
}

#[test]
fn test_untyped_comparison() {
    let month = Month::MARCH;
    assert_eq!(month.compare_to(Some(&Month::MAY)).unwrap(), Ordering::Less);
    let err = month.compare_to(Some(&Year::UNKNOWN)).unwrap_err();
    assert!(matches!(err, SvoError::IncompatibleComparison { type_name: "month" }));
    assert!(month.compare_to(None).is_err());
}

#[test]
fn test_equal_values_share_hash_codes() {
    let a = Currency::parse_with("eur", invariant()).unwrap();
    let b = Currency::parse_with("€", invariant()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.hash_code(), b.hash_code());

    let upper = EmailAddress::parse_with("SVO@QOWAIV.ORG", invariant()).unwrap();
    assert_eq!(upper.hash_code(), fixtures::sample_email().hash_code());
}

#[test]
fn test_parse_errors_carry_type_and_message() {
    let err = Month::parse_with("Smarch", invariant()).unwrap_err();
    assert!(matches!(err, SvoError::Parse { type_name: "month", .. }));
    assert_eq!(err.to_string(), "Not a valid month");

    let err = Currency::USD.format("Q", invariant()).unwrap_err();
    assert!(matches!(err, SvoError::InvalidFormat { .. }));
}

#[test]
fn test_std_trait_glue() {
    let currency: Currency = "GBP".parse().unwrap();
    assert_eq!(currency, Currency::GBP);
    let month = Month::try_from("12").unwrap();
    assert_eq!(month, Month::DECEMBER);
    assert_eq!(Currency::GBP.iso_numeric_code(), 826);
    assert!("no such currency".parse::<Currency>().is_err());
}
