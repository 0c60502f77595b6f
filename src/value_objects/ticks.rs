//! Tick arithmetic shared by the date and time value objects.
//!
//! A tick is 100 nanoseconds; tick 0 is midnight at the start of 0001-01-01.
//! The supported range ends at the last tick of 9999-12-31.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub const TICKS_PER_SECOND: i64 = 10_000_000;
pub const TICKS_PER_DAY: i64 = 86_400 * TICKS_PER_SECOND;
/// Day number of 9999-12-31.
pub const MAX_DAY: i32 = 3_652_058;
pub const MAX_TICKS: i64 = (MAX_DAY as i64 + 1) * TICKS_PER_DAY - 1;

/// Day number counted from 0001-01-01, if within the supported range.
pub fn day_number(date: NaiveDate) -> Option<i32> {
    let day = date.num_days_from_ce() - 1;
    (0..=MAX_DAY).contains(&day).then_some(day)
}

pub fn date_of(day: i32) -> Option<NaiveDate> {
    if !(0..=MAX_DAY).contains(&day) {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(day + 1)
}

pub fn from_naive(value: NaiveDateTime) -> Option<i64> {
    let day = i64::from(day_number(value.date())?);
    let time = value.time();
    // Leap seconds fold into the last tick of the second.
    let nanos = i64::from(time.nanosecond().min(999_999_999));
    Some(
        day * TICKS_PER_DAY
            + i64::from(time.num_seconds_from_midnight()) * TICKS_PER_SECOND
            + nanos / 100,
    )
}

pub fn to_naive(ticks: i64) -> Option<NaiveDateTime> {
    if !(0..=MAX_TICKS).contains(&ticks) {
        return None;
    }
    let date = date_of(i32::try_from(ticks / TICKS_PER_DAY).ok()?)?;
    let within_day = ticks % TICKS_PER_DAY;
    let seconds = u32::try_from(within_day / TICKS_PER_SECOND).ok()?;
    let nanos = u32::try_from((within_day % TICKS_PER_SECOND) * 100).ok()?;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos)?;
    Some(NaiveDateTime::new(date, time))
}
