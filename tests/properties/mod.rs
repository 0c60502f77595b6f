//! Property-based tests for the value object contract.
//!
//! Uses proptest to generate ordinary values and arbitrary text, with
//! automatic shrinking of failing cases.

pub mod round_trip;
pub mod validity;

use proptest::prelude::*;
use svo::prelude::*;
use svo::value_objects::{
    Currency, Date, EmailAddress, FileSize, LocalDateTime, Month, Uuid, Year,
};

/// Last tick of 9999-12-31.
pub const MAX_TICKS: i64 = 3_155_378_975_999_999_999;

pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::all().collect::<Vec<_>>())
}

prop_compose! {
    pub fn date_strategy()
        (year in 1..=9999_i32, month in 1..=12_u32, day in 1..=28_u32)
        -> Date {
        Date::new(year, month, day).expect("generated dates are valid")
    }
}

prop_compose! {
    pub fn email_strategy()
        (local in "[a-z0-9_+-]{1,10}(\\.[a-z0-9_+-]{1,10})?",
         labels in prop::collection::vec("[a-z0-9]([a-z0-9-]{0,10}[a-z0-9])?", 1..3),
         top in "[a-z]{2,6}")
        -> EmailAddress {
        let address = format!("{}@{}.{}", local, labels.join("."), top);
        EmailAddress::parse_with(address.as_str(), svo::culture::Culture::invariant())
            .expect("generated addresses are valid")
    }
}

pub fn file_size_strategy() -> impl Strategy<Value = FileSize> {
    (-1_000_000_000_000_i64..1_000_000_000_000_i64).prop_map(FileSize::new)
}

pub fn local_date_time_strategy() -> impl Strategy<Value = LocalDateTime> {
    (0..=MAX_TICKS).prop_map(|ticks| {
        LocalDateTime::from_ticks(ticks).expect("generated ticks are in range")
    })
}

pub fn month_strategy() -> impl Strategy<Value = Month> {
    (1..=12_u32).prop_map(|n| Month::new(n).expect("generated months are valid"))
}

pub fn year_strategy() -> impl Strategy<Value = Year> {
    (1..=9999_i32).prop_map(|n| Year::new(n).expect("generated years are valid"))
}

pub fn uuid_strategy() -> impl Strategy<Value = Uuid> {
    any::<[u8; 16]>().prop_map(Uuid::from_bytes)
}
