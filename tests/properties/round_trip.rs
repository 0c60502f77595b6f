//! Ordinary values survive every protocol unchanged.

use super::*;
use crate::assert_text_round_trip;
use crate::common::culture;
use svo::prelude::*;
use svo::svo::SerializationInfo;

/// Wire, JSON and field container round trips of a single value.
fn assert_protocol_round_trips<T>(value: T)
where
    T: WireConvertible + GraphSerializable + Formattable + serde::Serialize + serde::de::DeserializeOwned,
{
    assert_eq!(T::from_wire(value.to_wire()).unwrap(), value);

    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(serde_json::from_str::<T>(&json).unwrap(), value, "json {json}");

    let mut info = SerializationInfo::new(T::TYPE_NAME);
    value.write_fields(Some(&mut info)).unwrap();
    assert_eq!(T::read_fields(Some(&info)).unwrap(), value);
}

proptest! {
    #[test]
    fn prop_currency_round_trips(value in currency_strategy()) {
        assert_text_round_trip!(value);
        assert_protocol_round_trips(value);
    }

    #[test]
    fn prop_date_round_trips(value in date_strategy()) {
        assert_text_round_trip!(value);
        assert_protocol_round_trips(value);
    }

    #[test]
    fn prop_email_round_trips(value in email_strategy()) {
        assert_text_round_trip!(value.clone());
        assert_protocol_round_trips(value);
    }

    #[test]
    fn prop_file_size_round_trips(value in file_size_strategy()) {
        assert_text_round_trip!(value);
        assert_protocol_round_trips(value);
    }

    #[test]
    fn prop_local_date_time_round_trips(value in local_date_time_strategy()) {
        assert_text_round_trip!(value);
        assert_protocol_round_trips(value);
    }

    #[test]
    fn prop_month_round_trips(value in month_strategy()) {
        assert_text_round_trip!(value);
        assert_protocol_round_trips(value);
    }

    #[test]
    fn prop_year_round_trips(value in year_strategy()) {
        assert_text_round_trip!(value);
        assert_protocol_round_trips(value);
    }

    #[test]
    fn prop_uuid_round_trips(value in uuid_strategy()) {
        assert_text_round_trip!(value);
        assert_protocol_round_trips(value);
    }

    /// Localized output parses back in the same culture.
    #[test]
    fn prop_localized_text_round_trips(
        month in month_strategy(),
        date in date_strategy(),
        name in prop::sample::select(vec!["en-US", "en-GB", "nl-NL", "nl-BE", "de-DE", "fr-FR", "es-ES"]),
    ) {
        let culture = culture(name);
        let text = month.format("f", culture).unwrap();
        prop_assert_eq!(Month::parse_with(text.as_str(), culture).unwrap(), month);

        let text = date.format("d", culture).unwrap();
        prop_assert_eq!(Date::parse_with(text.as_str(), culture).unwrap(), date);
    }

    /// A size formatted with a plural unit name parses back to within the
    /// precision of the format.
    #[test]
    fn prop_file_size_plural_units_round_trip(
        value in file_size_strategy(),
        unit in prop::sample::select(vec![
            ("0 bytes", 1_i64),
            ("0.00 kilobytes", 1 << 10),
            ("0.00 Megabytes", 1 << 20),
        ]),
    ) {
        let (format, factor) = unit;
        let text = value.format(format, Culture::invariant()).unwrap();
        let back = FileSize::parse_with(text.as_str(), Culture::invariant()).unwrap();
        prop_assert!(
            (back.bytes() - value.bytes()).abs() <= factor / 200 + 1,
            "{} formatted as '{}' parsed as {}", value.bytes(), text, back.bytes()
        );
    }

    /// Equal values hash equally, and ordering agrees with the canonical value.
    #[test]
    fn prop_ordering_follows_canonical_value(a in year_strategy(), b in year_strategy()) {
        prop_assert_eq!(a.cmp(&b), a.number().cmp(&b.number()));
        if a == b {
            prop_assert_eq!(a.hash_code(), b.hash_code());
        }
        prop_assert!(Year::EMPTY < a && Year::UNKNOWN < a);
    }
}
