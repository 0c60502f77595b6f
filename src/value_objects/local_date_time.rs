//! Local date-time value object.
//!
//! A date and time of day without time zone, with a precision of one tick
//! (100 nanoseconds). Missing values are never legal on the JSON wire.

use super::date::Date;
use super::ticks::{self, MAX_TICKS, TICKS_PER_DAY, TICKS_PER_SECOND};
use crate::culture::Culture;
use crate::error::{SvoError, SvoResult, WireKind};
use crate::formatting::date_pattern;
use crate::svo::{
    Formattable, GraphSerializable, Parsable, SerializationInfo, SingleValueObject, VALUE_KEY,
    WireConvertible, WireValue, impl_svo, stable_hash,
};
use chrono::{Datelike, Duration, NaiveDateTime, Timelike};

const WHOLE_SECONDS: &str = "yyyy-MM-dd HH:mm:ss";
const WITH_FRACTION: &str = "yyyy-MM-dd HH:mm:ss.FFFFFFF";
const WIRE_FORMAT: &str = "yyyy-MM-dd'T'HH:mm:ss";
const WIRE_FORMAT_WITH_FRACTION: &str = "yyyy-MM-dd'T'HH:mm:ss.FFFFFFF";

const CANONICAL_FORMATS: &[&str] = &[
    WHOLE_SECONDS,
    WITH_FRACTION,
    WIRE_FORMAT,
    WIRE_FORMAT_WITH_FRACTION,
    "yyyy-MM-dd HH:mm",
    "yyyy-MM-dd'T'HH:mm",
    "yyyy-MM-dd",
];

const LOCALIZED_FORMATS: &[&str] = &["G", "g", "F", "f", "D", "d"];

/// A date and time of day without time zone.
///
/// The canonical representation is a tick count since 0001-01-01T00:00.
/// Empty equals [`LocalDateTime::MIN_VALUE`]; there is no Unknown state.
///
/// ```rust
/// use svo::prelude::*;
/// use svo::value_objects::LocalDateTime;
///
/// let moment = LocalDateTime::new(2017, 6, 11, 6, 15, 0).unwrap();
/// assert_eq!(moment.to_text(), "2017-06-11 06:15:00");
/// assert_eq!(LocalDateTime::parse("2017-06-11T06:15:00").unwrap(), moment);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime(i64);

impl LocalDateTime {
    pub const EMPTY: Self = Self(0);
    pub const MIN_VALUE: Self = Self(0);
    pub const MAX_VALUE: Self = Self(MAX_TICKS);

    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> SvoResult<Self> {
        chrono::NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .and_then(|value| Self::from_naive(value).ok())
            .ok_or_else(|| {
                SvoError::out_of_range(
                    Self::TYPE_NAME,
                    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"),
                )
            })
    }

    pub fn from_naive(value: NaiveDateTime) -> SvoResult<Self> {
        ticks::from_naive(value)
            .map(Self)
            .ok_or_else(|| SvoError::out_of_range(Self::TYPE_NAME, value))
    }

    pub fn from_ticks(value: i64) -> SvoResult<Self> {
        if (0..=MAX_TICKS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SvoError::out_of_range(Self::TYPE_NAME, value))
        }
    }

    pub(crate) fn from_date(date: Date) -> Self {
        Self(date.ticks())
    }

    pub fn ticks(&self) -> i64 {
        self.0
    }

    pub fn to_naive(&self) -> NaiveDateTime {
        ticks::to_naive(self.0).unwrap_or_default()
    }

    /// The date part.
    pub fn date(&self) -> Date {
        Date::from_ticks(self.0 - self.0 % TICKS_PER_DAY).unwrap_or_default()
    }

    pub fn year(&self) -> i32 {
        self.to_naive().year()
    }

    pub fn month(&self) -> u32 {
        self.to_naive().month()
    }

    pub fn day(&self) -> u32 {
        self.to_naive().day()
    }

    pub fn hour(&self) -> u32 {
        self.to_naive().hour()
    }

    pub fn minute(&self) -> u32 {
        self.to_naive().minute()
    }

    pub fn second(&self) -> u32 {
        self.to_naive().second()
    }

    pub fn millisecond(&self) -> u32 {
        ((self.0 % TICKS_PER_SECOND) / 10_000) as u32
    }

    pub fn add(&self, duration: Duration) -> SvoResult<Self> {
        self.to_naive()
            .checked_add_signed(duration)
            .and_then(|value| Self::from_naive(value).ok())
            .ok_or_else(|| {
                SvoError::out_of_range(Self::TYPE_NAME, format!("{} + {}", self.to_text(), duration))
            })
    }

    pub fn add_days(&self, days: i64) -> SvoResult<Self> {
        let duration = Duration::try_days(days).ok_or_else(|| {
            SvoError::out_of_range(Self::TYPE_NAME, format!("{} days", days))
        })?;
        self.add(duration)
    }

    /// Add calendar months, keeping the time of day.
    pub fn add_months(&self, months: i32) -> SvoResult<Self> {
        let date = self.date().add_months(months)?;
        Ok(Self(date.ticks() + self.0 % TICKS_PER_DAY))
    }

    fn has_fraction(&self) -> bool {
        self.0 % TICKS_PER_SECOND != 0
    }

    fn wire_text(&self) -> String {
        let format = if self.has_fraction() {
            WIRE_FORMAT_WITH_FRACTION
        } else {
            WIRE_FORMAT
        };
        date_pattern::format(format, self.to_naive(), Culture::invariant()).unwrap_or_default()
    }
}

impl From<Date> for LocalDateTime {
    fn from(date: Date) -> Self {
        Self::from_date(date)
    }
}

impl SingleValueObject for LocalDateTime {
    const TYPE_NAME: &'static str = "local date time";

    fn hash_code(&self) -> i32 {
        if self.is_empty() {
            0
        } else {
            stable_hash(&self.0.to_le_bytes())
        }
    }
}

impl Parsable for LocalDateTime {
    fn parse_canonical(text: &str) -> Option<Self> {
        CANONICAL_FORMATS
            .iter()
            .find_map(|format| date_pattern::parse_exact(text, format, Culture::invariant()))
            .and_then(ticks::from_naive)
            .map(Self)
    }

    fn parse_localized(text: &str, culture: &Culture) -> Option<Self> {
        LOCALIZED_FORMATS
            .iter()
            .find_map(|format| date_pattern::parse_exact(text, format, culture))
            .and_then(ticks::from_naive)
            .map(Self)
    }
}

impl Formattable for LocalDateTime {
    const DEFAULT_FORMAT: &'static str = WHOLE_SECONDS;

    fn format_value(&self, format: &str, culture: &Culture) -> SvoResult<String> {
        let format = if format == WHOLE_SECONDS && self.has_fraction() {
            WITH_FRACTION
        } else {
            format
        };
        date_pattern::format(format, self.to_naive(), culture)
            .ok_or_else(|| SvoError::invalid_format(Self::TYPE_NAME, format))
    }
}

impl WireConvertible for LocalDateTime {
    fn from_wire_null() -> SvoResult<Self> {
        Err(SvoError::unsupported(Self::TYPE_NAME, WireKind::Null))
    }

    fn from_wire_datetime(value: NaiveDateTime) -> SvoResult<Self> {
        Self::from_naive(value)
    }

    /// Always a string, Empty included.
    fn to_wire(&self) -> WireValue {
        WireValue::String(self.wire_text())
    }
}

impl GraphSerializable for LocalDateTime {
    fn write_canonical(&self, info: &mut SerializationInfo) {
        info.add_i64(VALUE_KEY, self.0);
    }

    fn read_canonical(info: &SerializationInfo) -> SvoResult<Self> {
        Self::from_ticks(info.require_i64(VALUE_KEY, Self::TYPE_NAME)?)
    }
}

impl_svo!(LocalDateTime);
