//! Reference values shared by the scenario tests.

use svo::prelude::*;
use svo::value_objects::{
    Currency, Date, EmailAddress, FileSize, LocalDateTime, Month, Uuid, Year,
};

pub const SAMPLE_UUID: &str = "8a1a8c42-d2ff-e254-e26e-b6abcbf19420";
pub const SAMPLE_UUID_BASE64: &str = "ihqMQtL_4lTibrary_GUIA";
pub const SAMPLE_EMAIL: &str = "svo@qowaiv.org";

pub fn sample_uuid() -> Uuid {
    Uuid::parse_with(SAMPLE_UUID, Culture::invariant()).expect("sample uuid")
}

pub fn sample_email() -> EmailAddress {
    EmailAddress::parse_with(SAMPLE_EMAIL, Culture::invariant()).expect("sample email")
}

pub fn sample_date() -> Date {
    Date::new(2017, 6, 11).expect("sample date")
}

pub fn sample_moment() -> LocalDateTime {
    LocalDateTime::new(2017, 6, 11, 6, 15, 0).expect("sample moment")
}

pub fn sample_year() -> Year {
    Year::new(2017).expect("sample year")
}

/// One ordinary value of every type, in a fixed order.
pub struct Samples {
    pub currency: Currency,
    pub date: Date,
    pub email: EmailAddress,
    pub size: FileSize,
    pub moment: LocalDateTime,
    pub month: Month,
    pub year: Year,
    pub id: Uuid,
}

pub fn samples() -> Samples {
    Samples {
        currency: Currency::EUR,
        date: sample_date(),
        email: sample_email(),
        size: FileSize::new(123_456_789),
        moment: sample_moment(),
        month: Month::JUNE,
        year: sample_year(),
        id: sample_uuid(),
    }
}
