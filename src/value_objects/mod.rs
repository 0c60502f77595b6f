//! Concrete single value objects.
//!
//! Each type wraps one canonical representation and implements the full
//! contract from [`crate::svo`]: sentinel states, the parsing and formatting
//! pipelines, the wire protocol, graph serialization and stable hashing.
//!
//! ## Design Principles
//!
//! - **Immutable**: Once created, value objects cannot be modified
//! - **Self-validating**: Only valid values can be constructed
//! - **Canonical**: Equal values share one representation, whatever text produced them
//!
//! | Type | Canonical representation | Unknown |
//! |---|---|---|
//! | [`Currency`] | ISO 4217 alpha code | yes |
//! | [`Date`] | day number since 0001-01-01 | no |
//! | [`EmailAddress`] | lowercase address | yes |
//! | [`FileSize`] | signed byte count | no |
//! | [`LocalDateTime`] | ticks since 0001-01-01 | no |
//! | [`Month`] | 1 to 12 | yes |
//! | [`Year`] | 1 to 9999 | yes |
//! | [`Uuid`] | 128-bit identifier | no |
//!
//! ## Usage Pattern
//!
//! ```rust
//! use svo::prelude::*;
//! use svo::value_objects::{Month, Year};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let year = Year::parse("2024")?;
//!     assert_eq!(Month::FEBRUARY.days(year), Some(29));
//!     Ok(())
//! }
//! ```

mod currency;
mod currency_data;
mod date;
mod email_address;
mod file_size;
mod local_date_time;
mod month;
mod ticks;
mod uuid;
mod year;

pub use currency::Currency;
pub use currency_data::CurrencyInfo;
pub use date::Date;
pub use email_address::EmailAddress;
pub use file_size::FileSize;
pub use local_date_time::LocalDateTime;
pub use month::Month;
pub use self::uuid::Uuid;
pub use year::Year;
