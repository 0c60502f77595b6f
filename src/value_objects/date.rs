//! Date value object.
//!
//! A calendar date without time or time zone, between 0001-01-01 and
//! 9999-12-31. The first supported day doubles as the Empty value.

use super::local_date_time::LocalDateTime;
use super::ticks::{self, MAX_DAY, TICKS_PER_DAY};
use crate::culture::Culture;
use crate::error::{SvoError, SvoResult};
use crate::formatting::date_pattern;
use crate::svo::{
    Formattable, GraphSerializable, Parsable, SerializationInfo, SingleValueObject, VALUE_KEY,
    WireConvertible, WireValue, impl_svo, stable_hash,
};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Weekday};

const CANONICAL_FORMAT: &str = "yyyy-MM-dd";

/// Culture-sensitive patterns tried after the canonical form.
const LOCALIZED_FORMATS: &[&str] = &["d", "D", "d MMMM yyyy", "d MMM yyyy", "MMMM d, yyyy"];

/// A calendar date.
///
/// The canonical representation is the day number counted from 0001-01-01,
/// which also yields the tick count used on the integer wire. Empty equals
/// [`Date::MIN_VALUE`]; Date has no Unknown state.
///
/// ## Examples
///
/// ```rust
/// use svo::prelude::*;
/// use svo::value_objects::Date;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let date = Date::parse("2017-06-11")?;
///     assert_eq!(date, Date::new(2017, 6, 11)?);
///     assert_eq!(date.add_months(1)?.to_text(), "2017-07-11");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    pub const EMPTY: Self = Self(0);
    pub const MIN_VALUE: Self = Self(0);
    pub const MAX_VALUE: Self = Self(MAX_DAY);

    /// Create a date from its components.
    ///
    /// # Arguments
    ///
    /// * `year` - The year, 1 to 9999
    /// * `month` - The month, 1 to 12
    /// * `day` - The day of the month
    ///
    /// # Returns
    ///
    /// * `Ok(Date)` - If the components form an existing date
    /// * `Err(SvoError::OutOfRange)` - Otherwise
    pub fn new(year: i32, month: u32, day: u32) -> SvoResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| Self::from_naive(date).ok())
            .ok_or_else(|| {
                SvoError::out_of_range(Self::TYPE_NAME, format!("{year:04}-{month:02}-{day:02}"))
            })
    }

    pub fn from_naive(date: NaiveDate) -> SvoResult<Self> {
        ticks::day_number(date)
            .map(Self)
            .ok_or_else(|| SvoError::out_of_range(Self::TYPE_NAME, date))
    }

    /// The date containing the given tick; the time of day is dropped.
    pub fn from_ticks(value: i64) -> SvoResult<Self> {
        ticks::to_naive(value)
            .and_then(Self::from_parsed)
            .ok_or_else(|| SvoError::out_of_range(Self::TYPE_NAME, value))
    }

    pub fn to_naive(&self) -> NaiveDate {
        ticks::date_of(self.0).unwrap_or_default()
    }

    /// Ticks at midnight of this date.
    pub fn ticks(&self) -> i64 {
        i64::from(self.0) * TICKS_PER_DAY
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

    pub fn day_of_week(&self) -> Weekday {
        self.to_naive().weekday()
    }

    /// Day of the year, starting at 1.
    pub fn day_of_year(&self) -> u32 {
        self.to_naive().ordinal()
    }

    pub fn add_days(&self, days: i64) -> SvoResult<Self> {
        i64::from(self.0)
            .checked_add(days)
            .and_then(|day| i32::try_from(day).ok())
            .filter(|day| (0..=MAX_DAY).contains(day))
            .map(Self)
            .ok_or_else(|| SvoError::out_of_range(Self::TYPE_NAME, format!("{} + {} days", self, days)))
    }

    /// Add calendar months; the day is clamped to the end of shorter months.
    pub fn add_months(&self, months: i32) -> SvoResult<Self> {
        let date = self.to_naive();
        let shifted = if months >= 0 {
            date.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            date.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted
            .and_then(|date| Self::from_naive(date).ok())
            .ok_or_else(|| {
                SvoError::out_of_range(Self::TYPE_NAME, format!("{} + {} months", self, months))
            })
    }

    pub fn add_years(&self, years: i32) -> SvoResult<Self> {
        let months = years.checked_mul(12).ok_or_else(|| {
            SvoError::out_of_range(Self::TYPE_NAME, format!("{} + {} years", self, years))
        })?;
        self.add_months(months)
    }

    /// Midnight at the start of this date.
    pub fn to_local_date_time(&self) -> LocalDateTime {
        LocalDateTime::from_date(*self)
    }

    fn midnight(&self) -> NaiveDateTime {
        self.to_naive().and_time(chrono::NaiveTime::MIN)
    }

    fn from_parsed(value: NaiveDateTime) -> Option<Self> {
        ticks::day_number(value.date()).map(Self)
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = SvoError;

    fn try_from(date: NaiveDate) -> SvoResult<Self> {
        Self::from_naive(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.to_naive()
    }
}

impl SingleValueObject for Date {
    const TYPE_NAME: &'static str = "date";

    fn hash_code(&self) -> i32 {
        if self.is_empty() {
            0
        } else {
            stable_hash(&self.0.to_le_bytes())
        }
    }
}

impl Parsable for Date {
    fn parse_canonical(text: &str) -> Option<Self> {
        date_pattern::parse_exact(text, CANONICAL_FORMAT, Culture::invariant())
            .and_then(Self::from_parsed)
    }

    fn parse_localized(text: &str, culture: &Culture) -> Option<Self> {
        LOCALIZED_FORMATS
            .iter()
            .find_map(|format| date_pattern::parse_exact(text, format, culture))
            .and_then(Self::from_parsed)
    }
}

impl Formattable for Date {
    const DEFAULT_FORMAT: &'static str = CANONICAL_FORMAT;

    fn format_value(&self, format: &str, culture: &Culture) -> SvoResult<String> {
        date_pattern::format(format, self.midnight(), culture)
            .ok_or_else(|| SvoError::invalid_format(Self::TYPE_NAME, format))
    }
}

impl WireConvertible for Date {
    fn from_wire_integer(value: i64) -> SvoResult<Self> {
        Self::from_ticks(value)
    }

    fn from_wire_datetime(value: NaiveDateTime) -> SvoResult<Self> {
        Self::from_naive(value.date())
    }

    fn to_wire(&self) -> WireValue {
        if self.is_empty() {
            WireValue::Null
        } else {
            WireValue::String(self.to_text())
        }
    }
}

impl GraphSerializable for Date {
    fn write_canonical(&self, info: &mut SerializationInfo) {
        info.add_i64(VALUE_KEY, self.ticks());
    }

    fn read_canonical(info: &SerializationInfo) -> SvoResult<Self> {
        Self::from_ticks(info.require_i64(VALUE_KEY, Self::TYPE_NAME)?)
    }
}

impl_svo!(Date);
