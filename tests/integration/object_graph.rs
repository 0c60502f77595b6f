//! Field container serialization of composite records.

use crate::common::fixtures;
use svo::prelude::*;
use svo::svo::{FieldValue, SerializationInfo, VALUE_KEY};
use svo::value_objects::{
    Currency, Date, EmailAddress, FileSize, LocalDateTime, Month, Uuid, Year,
};

/// A record that writes each of its value objects into a nested container.
#[derive(Debug, PartialEq)]
struct Invoice {
    id: Uuid,
    customer: EmailAddress,
    currency: Currency,
    issued: Date,
    sent: LocalDateTime,
    period: (Month, Year),
    attachment: FileSize,
}

impl Invoice {
    fn sample() -> Self {
        let samples = fixtures::samples();
        Self {
            id: samples.id,
            customer: samples.email,
            currency: samples.currency,
            issued: samples.date,
            sent: samples.moment,
            period: (samples.month, samples.year),
            attachment: samples.size,
        }
    }

    fn write(&self) -> SvoResult<SerializationInfo> {
        let mut info = SerializationInfo::new("Invoice");
        info.add_nested("Id", &self.id)?;
        info.add_nested("Customer", &self.customer)?;
        info.add_nested("Currency", &self.currency)?;
        info.add_nested("Issued", &self.issued)?;
        info.add_nested("Sent", &self.sent)?;
        info.add_nested("Month", &self.period.0)?;
        info.add_nested("Year", &self.period.1)?;
        info.add_nested("Attachment", &self.attachment)?;
        Ok(info)
    }

    fn read(info: &SerializationInfo) -> SvoResult<Self> {
        Ok(Self {
            id: info.get_nested("Id")?,
            customer: info.get_nested("Customer")?,
            currency: info.get_nested("Currency")?,
            issued: info.get_nested("Issued")?,
            sent: info.get_nested("Sent")?,
            period: (info.get_nested("Month")?, info.get_nested("Year")?),
            attachment: info.get_nested("Attachment")?,
        })
    }
}

#[test]
fn test_invoice_round_trips_through_containers() {
    let invoice = Invoice::sample();
    let info = invoice.write().unwrap();
    assert_eq!(info.len(), 8);
    assert_eq!(Invoice::read(&info).unwrap(), invoice);
}

#[test]
fn test_containers_hold_canonical_primitives() {
    let info = Invoice::sample().write().unwrap();

    let Some(FieldValue::Nested(currency)) = info.get("Currency") else {
        panic!("currency should be nested");
    };
    assert_eq!(currency.type_name(), "currency");
    assert_eq!(currency.get(VALUE_KEY), Some(&FieldValue::String("EUR".to_string())));

    let Some(FieldValue::Nested(issued)) = info.get("Issued") else {
        panic!("issued should be nested");
    };
    assert_eq!(
        issued.get(VALUE_KEY),
        Some(&FieldValue::Int64(636_327_360_000_000_000))
    );

    let Some(FieldValue::Nested(size)) = info.get("Attachment") else {
        panic!("attachment should be nested");
    };
    assert_eq!(size.get(VALUE_KEY), Some(&FieldValue::Int64(123_456_789)));
}

#[test]
fn test_containers_survive_json() {
    let info = Invoice::sample().write().unwrap();
    let json = serde_json::to_string(&info).unwrap();
    let restored: SerializationInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(Invoice::read(&restored).unwrap(), Invoice::sample());
}

#[test]
fn test_missing_container_is_null_argument() {
    let err = Year::read_fields(None).unwrap_err();
    assert!(matches!(err, SvoError::NullArgument { parameter: "info" }));
    assert_eq!(err.to_string(), "Value cannot be null. (Parameter 'info')");
    assert!(matches!(
        Currency::EUR.write_fields(None),
        Err(SvoError::NullArgument { .. })
    ));
}

#[test]
fn test_missing_field_is_malformed_container() {
    let info = Invoice::sample().write().unwrap();
    let err = info.get_nested::<Currency>("Discount").unwrap_err();
    assert!(matches!(err, SvoError::MalformedContainer { ref key, .. } if key == "Discount"));

    let empty = SerializationInfo::new("Currency");
    assert!(matches!(
        Currency::read_fields(Some(&empty)),
        Err(SvoError::MalformedContainer { .. })
    ));
}

#[test]
fn test_sentinels_in_containers() {
    let mut info = SerializationInfo::new("Sentinels");
    info.add_nested("Currency", &Currency::UNKNOWN).unwrap();
    info.add_nested("Email", &EmailAddress::EMPTY).unwrap();
    info.add_nested("Year", &Year::UNKNOWN).unwrap();

    assert_eq!(info.get_nested::<Currency>("Currency").unwrap(), Currency::UNKNOWN);
    assert_eq!(info.get_nested::<EmailAddress>("Email").unwrap(), EmailAddress::EMPTY);
    assert_eq!(info.get_nested::<Year>("Year").unwrap(), Year::UNKNOWN);
}
