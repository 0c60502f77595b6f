//! Year value object.

use crate::culture::Culture;
use crate::error::{SvoError, SvoResult};
use crate::formatting::number;
use crate::svo::{
    Formattable, GraphSerializable, Parsable, SerializationInfo, SingleValueObject, State,
    UNKNOWN_TOKEN, VALUE_KEY, WireConvertible, WireValue, impl_svo, stable_hash,
};

const MIN_YEAR: u16 = 1;
const MAX_YEAR: u16 = 9999;
const UNKNOWN_NUMBER: i64 = -1;

/// A year in the range 1 to 9999.
///
/// Supports both the Empty and the Unknown state. Formats with the numeric
/// format language; the default renders the plain number.
///
/// ```rust
/// use svo::prelude::*;
/// use svo::value_objects::Year;
///
/// assert!(Year::parse("1980").unwrap().is_leap_year());
/// assert!(!Year::parse("1979").unwrap().is_leap_year());
/// assert!(!Year::EMPTY.is_leap_year());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(State<u16>);

impl Year {
    pub const EMPTY: Self = Self(State::Empty);
    pub const UNKNOWN: Self = Self(State::Unknown);
    pub const MIN_VALUE: Self = Self(State::Ordinary(MIN_YEAR));
    pub const MAX_VALUE: Self = Self(State::Ordinary(MAX_YEAR));

    pub fn new(year: i32) -> SvoResult<Self> {
        Self::from_number(i64::from(year))
            .ok_or_else(|| SvoError::out_of_range(Self::TYPE_NAME, year))
    }

    fn from_number(number: i64) -> Option<Self> {
        u16::try_from(number)
            .ok()
            .filter(|n| (MIN_YEAR..=MAX_YEAR).contains(n))
            .map(|n| Self(State::Ordinary(n)))
    }

    pub fn number(&self) -> Option<i32> {
        self.0.ordinary().map(|n| i32::from(*n))
    }

    /// True for years that are neither Empty nor Unknown.
    pub fn is_ordinary(&self) -> bool {
        self.0.is_ordinary()
    }

    /// Gregorian leap year rule; false for Empty and Unknown.
    pub fn is_leap_year(&self) -> bool {
        self.number()
            .is_some_and(|y| y % 4 == 0 && (y % 100 != 0 || y % 400 == 0))
    }
}

impl SingleValueObject for Year {
    const TYPE_NAME: &'static str = "year";

    fn unknown() -> Option<Self> {
        Some(Self::UNKNOWN)
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn is_unknown(&self) -> bool {
        self.0.is_unknown()
    }

    fn hash_code(&self) -> i32 {
        match self.0 {
            State::Empty => 0,
            State::Unknown => stable_hash(UNKNOWN_TOKEN.as_bytes()),
            State::Ordinary(n) => stable_hash(&n.to_le_bytes()),
        }
    }
}

impl Parsable for Year {
    fn parse_canonical(text: &str) -> Option<Self> {
        if text.len() > 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse().ok().and_then(Self::from_number)
    }
}

impl Formattable for Year {
    const DEFAULT_FORMAT: &'static str = "0";

    fn format_value(&self, format: &str, culture: &Culture) -> SvoResult<String> {
        let year = self.number().unwrap_or_default();
        number::format_i64(i64::from(year), format, culture)
            .ok_or_else(|| SvoError::invalid_format(Self::TYPE_NAME, format))
    }
}

impl WireConvertible for Year {
    fn from_wire_integer(value: i64) -> SvoResult<Self> {
        Self::from_number(value).ok_or_else(|| SvoError::out_of_range(Self::TYPE_NAME, value))
    }

    /// Whole numbers only.
    fn from_wire_float(value: f64) -> SvoResult<Self> {
        if value.fract() != 0.0 || !value.is_finite() {
            return Err(SvoError::parse(Self::TYPE_NAME, value.to_string()));
        }
        Self::from_wire_integer(value as i64)
    }

    fn to_wire(&self) -> WireValue {
        match self.0 {
            State::Empty => WireValue::Null,
            State::Unknown => WireValue::String(UNKNOWN_TOKEN.to_string()),
            State::Ordinary(n) => WireValue::Integer(i64::from(n)),
        }
    }
}

impl GraphSerializable for Year {
    fn write_canonical(&self, info: &mut SerializationInfo) {
        let canonical = match self.0 {
            State::Empty => 0,
            State::Unknown => UNKNOWN_NUMBER,
            State::Ordinary(n) => i64::from(n),
        };
        info.add_i64(VALUE_KEY, canonical);
    }

    fn read_canonical(info: &SerializationInfo) -> SvoResult<Self> {
        match info.require_i64(VALUE_KEY, Self::TYPE_NAME)? {
            0 => Ok(Self::EMPTY),
            UNKNOWN_NUMBER => Ok(Self::UNKNOWN),
            other => Self::from_wire_integer(other),
        }
    }
}

impl_svo!(Year);
