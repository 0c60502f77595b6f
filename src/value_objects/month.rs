//! Month value object.

use super::year::Year;
use crate::culture::Culture;
use crate::error::{SvoError, SvoResult};
use crate::formatting::number;
use crate::svo::{
    Formattable, GraphSerializable, Parsable, SerializationInfo, SingleValueObject, State,
    UNKNOWN_TOKEN, VALUE_KEY, WireConvertible, WireValue, impl_svo, stable_hash,
};

/// Canonical integer of the Unknown month in field containers.
const UNKNOWN_NUMBER: i64 = -1;

/// A month of the year, without a year attached.
///
/// Supports both the Empty and the Unknown state. Ordinary months order from
/// January to December.
///
/// ## Formats
///
/// - `f`: full name in the culture (default)
/// - `s`: abbreviated name in the culture
/// - `M`: two digit number
/// - `m`: number without padding
///
/// ```rust
/// use svo::prelude::*;
/// use svo::culture::Culture;
/// use svo::value_objects::Month;
///
/// let nl = Culture::get("nl-NL").unwrap();
/// let month = Month::parse_with("mrt", nl).unwrap();
/// assert_eq!(month, Month::MARCH);
/// assert_eq!(month.format("f", nl).unwrap(), "maart");
/// assert_eq!(month.format("M", nl).unwrap(), "03");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(State<u8>);

impl Month {
    pub const EMPTY: Self = Self(State::Empty);
    pub const UNKNOWN: Self = Self(State::Unknown);
    pub const JANUARY: Self = Self(State::Ordinary(1));
    pub const FEBRUARY: Self = Self(State::Ordinary(2));
    pub const MARCH: Self = Self(State::Ordinary(3));
    pub const APRIL: Self = Self(State::Ordinary(4));
    pub const MAY: Self = Self(State::Ordinary(5));
    pub const JUNE: Self = Self(State::Ordinary(6));
    pub const JULY: Self = Self(State::Ordinary(7));
    pub const AUGUST: Self = Self(State::Ordinary(8));
    pub const SEPTEMBER: Self = Self(State::Ordinary(9));
    pub const OCTOBER: Self = Self(State::Ordinary(10));
    pub const NOVEMBER: Self = Self(State::Ordinary(11));
    pub const DECEMBER: Self = Self(State::Ordinary(12));

    /// Create a month from its number, 1 to 12.
    pub fn new(number: u32) -> SvoResult<Self> {
        Self::from_number(i64::from(number))
            .ok_or_else(|| SvoError::out_of_range(Self::TYPE_NAME, number))
    }

    fn from_number(number: i64) -> Option<Self> {
        u8::try_from(number)
            .ok()
            .filter(|n| (1..=12).contains(n))
            .map(|n| Self(State::Ordinary(n)))
    }

    /// January to December.
    pub fn all() -> [Month; 12] {
        std::array::from_fn(|i| Self(State::Ordinary(i as u8 + 1)))
    }

    /// The month number, for ordinary months.
    pub fn number(&self) -> Option<u32> {
        self.0.ordinary().map(|n| u32::from(*n))
    }

    pub fn name(&self, culture: &Culture) -> &'static str {
        self.number()
            .and_then(|n| culture.month_name(n))
            .unwrap_or_default()
    }

    pub fn short_name(&self, culture: &Culture) -> &'static str {
        self.number()
            .and_then(|n| culture.month_abbreviation(n))
            .unwrap_or_default()
    }

    /// Number of days of this month in the given year.
    ///
    /// `None` for Empty or Unknown months, and for February when the year is
    /// not known.
    pub fn days(&self, year: Year) -> Option<u32> {
        match self.number()? {
            2 => year
                .is_ordinary()
                .then(|| if year.is_leap_year() { 29 } else { 28 }),
            4 | 6 | 9 | 11 => Some(30),
            _ => Some(31),
        }
    }
}

impl SingleValueObject for Month {
    const TYPE_NAME: &'static str = "month";

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
            State::Ordinary(n) => stable_hash(&[n]),
        }
    }
}

impl Parsable for Month {
    fn parse_canonical(text: &str) -> Option<Self> {
        if text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse().ok().and_then(Self::from_number)
    }

    fn parse_localized(text: &str, culture: &Culture) -> Option<Self> {
        culture
            .month_from_name(text)
            .and_then(|n| Self::from_number(i64::from(n)))
    }
}

impl Formattable for Month {
    const DEFAULT_FORMAT: &'static str = "f";

    fn format_value(&self, format: &str, culture: &Culture) -> SvoResult<String> {
        let number = self.number().unwrap_or_default();
        let text = match format {
            "f" => self.name(culture).to_string(),
            "s" => self.short_name(culture).to_string(),
            "M" => format!("{:02}", number),
            "m" => number.to_string(),
            other => number::format_i64(i64::from(number), other, culture)
                .ok_or_else(|| SvoError::invalid_format(Self::TYPE_NAME, other))?,
        };
        Ok(text)
    }
}

impl WireConvertible for Month {
    fn from_wire_integer(value: i64) -> SvoResult<Self> {
        Self::from_number(value).ok_or_else(|| SvoError::out_of_range(Self::TYPE_NAME, value))
    }

    /// The abbreviated English name.
    fn to_wire(&self) -> WireValue {
        match self.0 {
            State::Empty => WireValue::Null,
            State::Unknown => WireValue::String(UNKNOWN_TOKEN.to_string()),
            State::Ordinary(_) => WireValue::String(self.short_name(Culture::invariant()).to_string()),
        }
    }
}

impl GraphSerializable for Month {
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

impl_svo!(Month);
