//! JSON wire tests through serde.
//!
//! Value objects serialize as bare JSON scalars and accept the alternative
//! wire kinds each type documents.

use crate::common::fixtures::{self, Samples};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use svo::prelude::*;
use svo::value_objects::{
    Currency, Date, EmailAddress, FileSize, LocalDateTime, Month, Uuid, Year,
};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Attachment {
    id: Uuid,
    owner: EmailAddress,
    size: FileSize,
    uploaded: LocalDateTime,
    expires: Date,
    fee_currency: Currency,
    billing_month: Month,
    billing_year: Year,
    #[serde(default)]
    reviewer: Option<EmailAddress>,
}

fn attachment() -> Attachment {
    let Samples {
        currency,
        date,
        email,
        size,
        moment,
        month,
        year,
        id,
    } = fixtures::samples();
    Attachment {
        id,
        owner: email,
        size,
        uploaded: moment,
        expires: date,
        fee_currency: currency,
        billing_month: month,
        billing_year: year,
        reviewer: None,
    }
}

#[test]
fn test_composite_record_serializes_to_scalars() {
    let value = serde_json::to_value(attachment()).unwrap();
    assert_eq!(
        value,
        json!({
            "id": fixtures::SAMPLE_UUID_BASE64,
            "owner": "svo@qowaiv.org",
            "size": 123_456_789,
            "uploaded": "2017-06-11T06:15:00",
            "expires": "2017-06-11",
            "feeCurrency": "EUR",
            "billingMonth": "Jun",
            "billingYear": 2017,
            "reviewer": null
        })
    );
}

#[test]
fn test_composite_record_round_trips() {
    let original = attachment();
    let json = serde_json::to_string(&original).unwrap();
    let parsed: Attachment = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn test_alternative_wire_kinds() {
    let parsed: Attachment = serde_json::from_value(json!({
        "id": fixtures::SAMPLE_UUID,
        "owner": "SVO@QOWAIV.ORG",
        "size": 1.5e3,
        "uploaded": "2017-06-11 06:15",
        "expires": 636_327_360_000_000_000_i64,
        "feeCurrency": "978",
        "billingMonth": 6,
        "billingYear": 2017.0
    }))
    .unwrap();

    assert_eq!(parsed.id, fixtures::sample_uuid());
    assert_eq!(parsed.owner, fixtures::sample_email());
    assert_eq!(parsed.size, FileSize::new(1500));
    assert_eq!(parsed.uploaded, fixtures::sample_moment());
    assert_eq!(parsed.expires, fixtures::sample_date());
    assert_eq!(parsed.fee_currency, Currency::EUR);
    assert_eq!(parsed.billing_month, Month::JUNE);
    assert_eq!(parsed.billing_year, fixtures::sample_year());
    assert_eq!(parsed.reviewer, None);
}

#[test]
fn test_null_is_empty_for_most_types() {
    let currency: Currency = serde_json::from_value(Value::Null).unwrap();
    assert_eq!(currency, Currency::EMPTY);
    let id: Uuid = serde_json::from_value(Value::Null).unwrap();
    assert!(id.is_empty());
    let date: Date = serde_json::from_value(Value::Null).unwrap();
    assert_eq!(date, Date::EMPTY);

    assert_eq!(serde_json::to_value(Currency::EMPTY).unwrap(), Value::Null);
    assert_eq!(serde_json::to_value(Year::EMPTY).unwrap(), Value::Null);
}

#[test]
fn test_local_date_time_rejects_null() {
    let err = serde_json::from_value::<LocalDateTime>(Value::Null).unwrap_err();
    assert!(err.to_string().contains("not supported"), "{err}");
    assert_eq!(
        serde_json::to_value(LocalDateTime::EMPTY).unwrap(),
        json!("0001-01-01T00:00:00")
    );
}

#[test]
fn test_unknown_travels_as_question_mark() {
    assert_eq!(serde_json::to_value(Currency::UNKNOWN).unwrap(), json!("?"));
    assert_eq!(serde_json::to_value(Month::UNKNOWN).unwrap(), json!("?"));
    let year: Year = serde_json::from_str("\"?\"").unwrap();
    assert_eq!(year, Year::UNKNOWN);
}

#[test]
fn test_unsupported_wire_kinds() {
    let err = serde_json::from_str::<Month>("5.0").unwrap_err();
    assert!(
        err.to_string()
            .contains("JSON deserialization from a number is not supported."),
        "{err}"
    );
    assert!(serde_json::from_str::<Uuid>("17").is_err());
    assert!(serde_json::from_str::<Currency>("true").is_err());
    assert!(serde_json::from_str::<Month>("13").is_err());
}

#[test]
fn test_trait_level_json_helpers() {
    assert_eq!(Currency::USD.to_json(), json!("USD"));
    assert_eq!(FileSize::from_json(&json!(2048)).unwrap(), FileSize::new(2048));
    assert_eq!(
        EmailAddress::from_json(&json!("svo@qowaiv.org")).unwrap(),
        fixtures::sample_email()
    );
}
