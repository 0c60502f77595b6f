//! Date and time pattern language.
//!
//! A pattern such as `dd-MM-yyyy HH:mm` is tokenized once; the same tokens
//! drive both formatting and exact parsing. Single letter standard formats
//! (`d`, `D`, `t`, `T`, `f`, `F`, `g`, `G`, `s`, `o`, `y`) are expanded from
//! the culture's patterns first.

use crate::culture::{Culture, fold};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const SORTABLE: &str = "yyyy'-'MM'-'dd'T'HH':'mm':'ss";
const ROUND_TRIP: &str = "yyyy'-'MM'-'dd'T'HH':'mm':'ss'.'fffffff";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DateToken {
    Year(usize),
    Month(usize),
    Day(usize),
    Hour24(usize),
    Hour12(usize),
    Minute(usize),
    Second(usize),
    Fraction { digits: usize, trim: bool },
    AmPm,
    DateSeparator,
    TimeSeparator,
    Literal(String),
}

/// Expand a standard single letter format, or return the custom pattern as is.
///
/// Returns `None` for single letters that are not standard formats.
pub(crate) fn resolve(format: &str, culture: &Culture) -> Option<String> {
    let mut chars = format.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return Some(format.to_string());
    };
    let pattern = match letter {
        'd' => culture.short_date_pattern().to_string(),
        'D' => culture.long_date_pattern().to_string(),
        't' => culture.short_time_pattern().to_string(),
        'T' => culture.long_time_pattern().to_string(),
        'f' => format!("{} {}", culture.long_date_pattern(), culture.short_time_pattern()),
        'F' => format!("{} {}", culture.long_date_pattern(), culture.long_time_pattern()),
        'g' => format!("{} {}", culture.short_date_pattern(), culture.short_time_pattern()),
        'G' => format!("{} {}", culture.short_date_pattern(), culture.long_time_pattern()),
        's' => SORTABLE.to_string(),
        'o' | 'O' => ROUND_TRIP.to_string(),
        'y' | 'Y' => "MMMM yyyy".to_string(),
        _ => return None,
    };
    Some(pattern)
}

/// Split a custom pattern into tokens. Returns `None` for unterminated quotes
/// or a dangling escape.
pub(crate) fn tokenize(pattern: &str) -> Option<Vec<DateToken>> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&x| x == c).count();
        let token = match c {
            'y' => Some(DateToken::Year(run)),
            'M' => Some(DateToken::Month(run)),
            'd' => Some(DateToken::Day(run)),
            'H' => Some(DateToken::Hour24(run.min(2))),
            'h' => Some(DateToken::Hour12(run.min(2))),
            'm' => Some(DateToken::Minute(run.min(2))),
            's' => Some(DateToken::Second(run.min(2))),
            'f' | 'F' => Some(DateToken::Fraction {
                digits: run.min(7),
                trim: c == 'F',
            }),
            't' => Some(DateToken::AmPm),
            '/' => Some(DateToken::DateSeparator),
            ':' => Some(DateToken::TimeSeparator),
            _ => None,
        };

        if let Some(token) = token {
            if !literal.is_empty() {
                tokens.push(DateToken::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(token);
            i += match c {
                '/' | ':' => 1,
                _ => run,
            };
            continue;
        }

        match c {
            '\'' | '"' => {
                let close = chars[i + 1..].iter().position(|&x| x == c)?;
                literal.extend(&chars[i + 1..i + 1 + close]);
                i += close + 2;
            }
            '\\' => {
                literal.push(*chars.get(i + 1)?);
                i += 2;
            }
            '%' => i += 1,
            other => {
                literal.push(other);
                i += 1;
            }
        }
    }

    if !literal.is_empty() {
        tokens.push(DateToken::Literal(literal));
    }
    Some(tokens)
}

/// Render a date and time with the given tokens.
pub(crate) fn format_tokens(
    tokens: &[DateToken],
    value: NaiveDateTime,
    culture: &Culture,
) -> String {
    let date = value.date();
    let time = value.time();
    let mut out = String::new();

    for token in tokens {
        match token {
            DateToken::Year(width) => {
                let year = date.year();
                match width {
                    1 => out.push_str(&(year % 100).to_string()),
                    2 => out.push_str(&format!("{:02}", year % 100)),
                    w => out.push_str(&format!("{:0w$}", year, w = *w)),
                }
            }
            DateToken::Month(width) => match width {
                1 => out.push_str(&date.month().to_string()),
                2 => out.push_str(&format!("{:02}", date.month())),
                3 => out.push_str(culture.month_abbreviation(date.month()).unwrap_or_default()),
                _ => out.push_str(culture.month_name(date.month()).unwrap_or_default()),
            },
            DateToken::Day(width) => {
                let weekday = date.weekday().num_days_from_sunday();
                match width {
                    1 => out.push_str(&date.day().to_string()),
                    2 => out.push_str(&format!("{:02}", date.day())),
                    3 => out.push_str(culture.day_abbreviation(weekday)),
                    _ => out.push_str(culture.day_name(weekday)),
                }
            }
            DateToken::Hour24(width) => push_number(&mut out, time.hour(), *width),
            DateToken::Hour12(width) => {
                let hour = match time.hour() % 12 {
                    0 => 12,
                    h => h,
                };
                push_number(&mut out, hour, *width)
            }
            DateToken::Minute(width) => push_number(&mut out, time.minute(), *width),
            DateToken::Second(width) => push_number(&mut out, time.second(), *width),
            DateToken::Fraction { digits, trim } => {
                let ticks = format!("{:07}", (time.nanosecond() % 1_000_000_000) / 100);
                let mut fraction = ticks[..*digits].to_string();
                if *trim {
                    while fraction.ends_with('0') {
                        fraction.pop();
                    }
                }
                out.push_str(&fraction);
            }
            DateToken::AmPm => out.push_str(if time.hour() < 12 {
                culture.am_designator()
            } else {
                culture.pm_designator()
            }),
            DateToken::DateSeparator => out.push_str(culture.date_separator()),
            DateToken::TimeSeparator => out.push(':'),
            DateToken::Literal(text) => out.push_str(text),
        }
    }
    out
}

fn push_number(out: &mut String, value: u32, width: usize) {
    if width >= 2 {
        out.push_str(&format!("{:02}", value));
    } else {
        out.push_str(&value.to_string());
    }
}

/// Parse text that must match the tokens exactly (case-insensitive names,
/// flexible whitespace).
pub(crate) fn parse_tokens(
    tokens: &[DateToken],
    text: &str,
    culture: &Culture,
) -> Option<NaiveDateTime> {
    let mut cursor = Cursor { rest: text.trim() };
    let mut year = 1;
    let mut month = 1;
    let mut day = 1;
    let mut hour = 0;
    let mut minute = 0;
    let mut second = 0;
    let mut nanos = 0;
    let mut weekday = None;
    let mut pm = None;
    let mut twelve_hour = false;

    for token in tokens {
        match token {
            DateToken::Year(width) if *width <= 2 => {
                let two_digits = cursor.digits(1, 2)? as i32;
                year = if two_digits <= 49 {
                    2000 + two_digits
                } else {
                    1900 + two_digits
                };
            }
            DateToken::Year(width) => {
                year = cursor.digits((*width).min(4), 4)? as i32;
            }
            DateToken::Month(width) if *width <= 2 => month = cursor.digits(1, 2)?,
            DateToken::Month(_) => {
                let names: Vec<&str> = (1..=12)
                    .filter_map(|m| culture.month_name(m))
                    .chain((1..=12).filter_map(|m| culture.month_abbreviation(m)))
                    .collect();
                let index = cursor.name(&names)?;
                month = (index % 12) as u32 + 1;
            }
            DateToken::Day(width) if *width <= 2 => day = cursor.digits(1, 2)?,
            DateToken::Day(_) => {
                let names: Vec<&str> = (0..7)
                    .map(|d| culture.day_name(d))
                    .chain((0..7).map(|d| culture.day_abbreviation(d)))
                    .collect();
                weekday = Some((cursor.name(&names)? % 7) as u32);
            }
            DateToken::Hour24(_) => hour = cursor.digits(1, 2)?,
            DateToken::Hour12(_) => {
                hour = cursor.digits(1, 2)?;
                twelve_hour = true;
            }
            DateToken::Minute(_) => minute = cursor.digits(1, 2)?,
            DateToken::Second(_) => second = cursor.digits(1, 2)?,
            DateToken::Fraction { digits, trim } => {
                let min = if *trim { 0 } else { *digits };
                let (value, read) = cursor.digits_counted(min, *digits)?;
                nanos = value * 10u32.pow(9 - read as u32);
            }
            DateToken::AmPm => {
                let am = culture.am_designator();
                let pm_text = culture.pm_designator();
                if am.is_empty() && pm_text.is_empty() {
                    continue;
                }
                pm = Some(cursor.name(&[am, pm_text])? == 1);
            }
            DateToken::DateSeparator => {
                if !cursor.literal(culture.date_separator()) {
                    cursor.one_of(&['/', '-', '.'])?;
                }
            }
            DateToken::TimeSeparator => cursor.one_of(&[':'])?,
            DateToken::Literal(text) => {
                if !cursor.literal(text) {
                    return None;
                }
            }
        }
    }

    if !cursor.rest.is_empty() {
        return None;
    }

    if let Some(pm) = pm {
        if pm && hour < 12 {
            hour += 12;
        } else if !pm && hour == 12 {
            hour = 0;
        }
    } else if twelve_hour && hour > 12 {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    if let Some(weekday) = weekday {
        if date.weekday().num_days_from_sunday() != weekday {
            return None;
        }
    }
    let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)?;
    Some(NaiveDateTime::new(date, time))
}

/// Format with a standard or custom format string.
pub(crate) fn format(format: &str, value: NaiveDateTime, culture: &Culture) -> Option<String> {
    let pattern = resolve(format, culture)?;
    let tokens = tokenize(&pattern)?;
    Some(format_tokens(&tokens, value, culture))
}

/// Parse with a standard or custom format string.
pub(crate) fn parse_exact(text: &str, format: &str, culture: &Culture) -> Option<NaiveDateTime> {
    let pattern = resolve(format, culture)?;
    let tokens = tokenize(&pattern)?;
    parse_tokens(&tokens, text, culture)
}

struct Cursor<'a> {
    rest: &'a str,
}

impl Cursor<'_> {
    fn digits(&mut self, min: usize, max: usize) -> Option<u32> {
        self.digits_counted(min, max).map(|(value, _)| value)
    }

    fn digits_counted(&mut self, min: usize, max: usize) -> Option<(u32, usize)> {
        let count = self
            .rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if count < min {
            return None;
        }
        let value = if count == 0 {
            0
        } else {
            self.rest[..count].parse().ok()?
        };
        self.rest = &self.rest[count..];
        Some((value, count))
    }

    /// Consume the longest matching name, returning its index.
    fn name(&mut self, names: &[&str]) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (index, name) in names.iter().enumerate() {
            let wanted = name.chars().count();
            if wanted == 0 {
                continue;
            }
            let end = self
                .rest
                .char_indices()
                .nth(wanted)
                .map_or(self.rest.len(), |(b, _)| b);
            let candidate = &self.rest[..end];
            if candidate.chars().count() == wanted
                && fold(candidate) == fold(name)
                && best.is_none_or(|(_, len)| end > len)
            {
                best = Some((index, end));
            }
        }
        let (index, end) = best?;
        self.rest = &self.rest[end..];
        Some(index)
    }

    fn one_of(&mut self, options: &[char]) -> Option<()> {
        let c = self.rest.chars().next()?;
        if !options.contains(&c) {
            return None;
        }
        self.rest = &self.rest[c.len_utf8()..];
        Some(())
    }

    fn literal(&mut self, text: &str) -> bool {
        let mut rest = self.rest;
        for expected in text.chars() {
            if expected.is_whitespace() {
                let trimmed = rest.trim_start();
                if trimmed.len() == rest.len() {
                    return false;
                }
                rest = trimmed;
                continue;
            }
            let Some(actual) = rest.chars().next() else {
                return false;
            };
            if !actual.to_lowercase().eq(expected.to_lowercase()) {
                return false;
            }
            rest = &rest[actual.len_utf8()..];
        }
        self.rest = rest;
        true
    }
}
