//! Single value objects for Rust.
//!
//! Immutable domain primitives (currency, date, email address, file size,
//! local date-time, month, year and UUID) that behave like built-in scalars
//! while enforcing domain validity, culture-aware parsing, per-type format
//! languages and several serialization protocols.
//!
//! # Core Components
//!
//! - [`svo`] - The shared contract every value object implements
//! - [`value_objects`] - The concrete value objects
//! - [`culture`] - Locale conventions and the thread's ambient culture
//! - [`config`] - Process defaults for culture and parse mode
//!
//! # Quick Start
//!
//! ```rust
//! use svo::prelude::*;
//! use svo::value_objects::{Currency, EmailAddress, FileSize};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let nl = Culture::require("nl-BE")?;
//!
//!     assert_eq!(Currency::parse("USD")?.to_string(), "USD");
//!     assert_eq!(Currency::parse_with("Amerikaanse dollar", nl)?, Currency::USD);
//!
//!     let email = EmailAddress::parse("svo@qowaiv.org")?;
//!     assert_eq!(email.format("l[at]d", nl)?, "svo[at]qowaiv.org");
//!
//!     let size = FileSize::new(123_456_789);
//!     assert_eq!(size.format("0.0 MegaByte", nl)?, "117,7 Megabyte");
//!
//!     let json = serde_json::to_string(&Currency::EUR)?;
//!     assert_eq!(json, "\"EUR\"");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod culture;
pub mod error;
pub mod formatting;
pub mod svo;
pub mod value_objects;

// Re-export commonly used types for convenience
pub use config::SvoConfig;
pub use culture::{Culture, CultureScope};
pub use error::{SvoError, SvoResult, WireKind};
pub use formatting::{CustomFormatter, FormatProvider};
pub use svo::{ParseMode, SingleValueObject, State};
pub use value_objects::{
    Currency, Date, EmailAddress, FileSize, LocalDateTime, Month, Uuid, Year,
};

/// The traits needed to call parsing, formatting and serialization methods.
pub mod prelude {
    pub use crate::culture::Culture;
    pub use crate::error::{SvoError, SvoResult};
    pub use crate::formatting::FormatProvider;
    pub use crate::svo::{
        Formattable, GraphSerializable, ParseMode, Parsable, SingleValueObject, WireConvertible,
    };
}
