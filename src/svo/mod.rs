//! The single value object contract.
//!
//! Every value object in this crate is a thin immutable wrapper around one
//! canonical representation and implements the same set of traits:
//!
//! - [`SingleValueObject`]: Empty/Unknown sentinels, stable hashing, untyped comparison
//! - [`Parsable`]: the parsing pipeline and the `is_valid` predicate
//! - [`Formattable`]: the formatting pipeline with per-type format languages
//! - [`WireConvertible`]: the JSON-like wire protocol (also backs serde)
//! - [`GraphSerializable`]: named field containers
//!
//! ## Usage
//!
//! ```rust
//! use svo::prelude::*;
//! use svo::value_objects::Currency;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let euro = Currency::parse("eur")?;
//!     assert_eq!(euro.to_text(), "EUR");
//!
//!     assert!(Currency::parse("?")?.is_unknown());
//!     assert!(Currency::parse("")?.is_empty());
//!     assert!(!Currency::is_valid("not a currency"));
//!     Ok(())
//! }
//! ```

mod graph;
mod macros;
mod state;
mod traits;
mod wire;

pub(crate) use macros::impl_svo;

pub use graph::{FieldValue, GraphSerializable, SerializationInfo, VALUE_KEY};
pub use state::State;
pub use traits::{
    Formattable, ParseInput, ParseMode, Parsable, SingleValueObject, UNKNOWN_TOKEN, stable_hash,
};
pub use wire::{WireConvertible, WireValue, deserialize_wire, serialize_wire};
