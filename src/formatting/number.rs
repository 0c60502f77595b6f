//! Culture-aware numeric formatting and parsing.
//!
//! Supports the standard formats `G`, `N[p]`, `F[p]` and `D[p]`, and custom
//! patterns built from `0` and `#` digit placeholders, `,` grouping, `.` decimal
//! point, `%` percentage, quoted literals and `\` escapes. Rounding is half
//! away from zero.

use crate::culture::Culture;

/// Format a floating point number. Returns `None` for unsupported formats.
pub fn format_f64(value: f64, format: &str, culture: &Culture) -> Option<String> {
    if !value.is_finite() {
        return Some(non_finite(value));
    }
    let parsed = NumberFormat::parse(format)?;
    match parsed {
        NumberFormat::General => Some(localize(&general_f64(value), culture)),
        NumberFormat::Pattern(pattern) => {
            if pattern.integer_only && value.fract() != 0.0 {
                return None;
            }
            let value = if pattern.percent { value * 100.0 } else { value };
            let (negative, integer, fraction) = split_f64(value, pattern.max_fraction)?;
            Some(pattern.render(negative, integer, fraction, culture))
        }
    }
}

/// Format an integer. Returns `None` for unsupported formats.
pub fn format_i64(value: i64, format: &str, culture: &Culture) -> Option<String> {
    let parsed = NumberFormat::parse(format)?;
    match parsed {
        NumberFormat::General => Some(value.to_string()),
        NumberFormat::Pattern(pattern) => {
            let mut scaled = i128::from(value);
            if pattern.percent {
                scaled *= 100;
            }
            let integer = scaled.unsigned_abs().to_string();
            let fraction = "0".repeat(pattern.max_fraction);
            Some(pattern.render(scaled < 0, integer, fraction, culture))
        }
    }
}

/// A number parsed from culture-sensitive text, kept in decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    pub negative: bool,
    pub integer: String,
    pub fraction: String,
}

impl ParsedNumber {
    pub fn to_f64(&self) -> Option<f64> {
        let mut text = String::with_capacity(self.integer.len() + self.fraction.len() + 2);
        if self.negative {
            text.push('-');
        }
        text.push_str(if self.integer.is_empty() { "0" } else { &self.integer });
        if !self.fraction.is_empty() {
            text.push('.');
            text.push_str(&self.fraction);
        }
        text.parse().ok()
    }

    /// The exact integer value, if the number has no fractional digits.
    pub fn to_i64(&self) -> Option<i64> {
        if self.fraction.chars().any(|c| c != '0') {
            return None;
        }
        let magnitude: i128 = if self.integer.is_empty() {
            0
        } else {
            self.integer.parse().ok()?
        };
        let value = if self.negative { -magnitude } else { magnitude };
        i64::try_from(value).ok()
    }

    pub fn has_fraction(&self) -> bool {
        self.fraction.chars().any(|c| c != '0')
    }
}

/// Parse a number written with the culture's separators.
///
/// Accepts an optional sign, digits with group separators in the integer part,
/// and an optional decimal separator followed by digits.
pub fn parse_number(text: &str, culture: &Culture) -> Option<ParsedNumber> {
    let text = text.trim();
    let (negative, body) = match text.chars().next()? {
        '-' => (true, &text[1..]),
        '+' => (false, &text[1..]),
        _ => (false, text),
    };

    let decimal = culture.decimal_separator();
    let group = culture.group_separator();
    let (integer_part, fraction_part) = match body.find(decimal) {
        Some(index) => (&body[..index], Some(&body[index + decimal.len_utf8()..])),
        None => (body, None),
    };

    let mut integer = String::with_capacity(integer_part.len());
    let mut last_was_group = true;
    for c in integer_part.chars() {
        if c.is_ascii_digit() {
            integer.push(c);
            last_was_group = false;
        } else if is_group_separator(c, group) && !last_was_group {
            last_was_group = true;
        } else {
            return None;
        }
    }
    if last_was_group && !integer.is_empty() {
        return None;
    }

    let fraction = match fraction_part {
        Some(part) if part.chars().all(|c| c.is_ascii_digit()) && !part.is_empty() => {
            part.to_string()
        }
        Some(_) => return None,
        None => String::new(),
    };

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    Some(ParsedNumber {
        negative,
        integer,
        fraction,
    })
}

fn is_group_separator(c: char, group: char) -> bool {
    c == group || (group == '\u{a0}' && (c == ' ' || c == '\u{202f}'))
}

enum NumberFormat {
    General,
    Pattern(Pattern),
}

#[derive(Debug, Clone, Default)]
struct Pattern {
    prefix: String,
    suffix: String,
    min_integer: usize,
    min_fraction: usize,
    max_fraction: usize,
    grouping: bool,
    percent: bool,
    integer_only: bool,
}

impl NumberFormat {
    fn parse(format: &str) -> Option<Self> {
        if format.is_empty() {
            return Some(Self::General);
        }
        if let Some(standard) = Self::standard(format) {
            return standard;
        }
        Pattern::custom(format).map(Self::Pattern)
    }

    /// `Some(None)` when the format looks standard but is not supported.
    fn standard(format: &str) -> Option<Option<Self>> {
        let mut chars = format.chars();
        let letter = chars.next()?;
        let digits = chars.as_str();
        if !letter.is_ascii_alphabetic()
            || digits.len() > 2
            || !digits.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }
        let precision: Option<usize> = if digits.is_empty() {
            None
        } else {
            digits.parse().ok()
        };

        let standard = match letter.to_ascii_uppercase() {
            'G' => Some(Self::General),
            'N' => {
                let p = precision.unwrap_or(2);
                Some(Self::Pattern(Pattern {
                    min_integer: 1,
                    min_fraction: p,
                    max_fraction: p,
                    grouping: true,
                    ..Pattern::default()
                }))
            }
            'F' => {
                let p = precision.unwrap_or(2);
                Some(Self::Pattern(Pattern {
                    min_integer: 1,
                    min_fraction: p,
                    max_fraction: p,
                    ..Pattern::default()
                }))
            }
            'D' => Some(Self::Pattern(Pattern {
                min_integer: precision.unwrap_or(1).max(1),
                integer_only: true,
                ..Pattern::default()
            })),
            _ => None,
        };
        Some(standard)
    }
}

impl Pattern {
    fn custom(format: &str) -> Option<Self> {
        let mut pattern = Pattern::default();
        let mut seen_placeholder = false;
        let mut in_fraction = false;
        let mut pending_literal = String::new();
        let mut chars = format.chars();

        while let Some(c) = chars.next() {
            match c {
                '0' | '#' => {
                    if !pending_literal.is_empty() {
                        if seen_placeholder {
                            pattern.suffix.push_str(&pending_literal);
                        } else {
                            pattern.prefix.push_str(&pending_literal);
                        }
                        pending_literal.clear();
                    }
                    seen_placeholder = true;
                    if in_fraction {
                        pattern.max_fraction += 1;
                        if c == '0' {
                            pattern.min_fraction = pattern.max_fraction;
                        }
                    } else if c == '0' {
                        pattern.min_integer += 1;
                    }
                }
                '.' if !in_fraction && pending_literal.is_empty() => in_fraction = true,
                ',' if seen_placeholder && !in_fraction && pending_literal.is_empty() => {
                    pattern.grouping = true
                }
                '%' => {
                    pattern.percent = true;
                    pending_literal.push('%');
                }
                '\\' => pending_literal.push(chars.next()?),
                '\'' | '"' => {
                    let mut closed = false;
                    for q in chars.by_ref() {
                        if q == c {
                            closed = true;
                            break;
                        }
                        pending_literal.push(q);
                    }
                    if !closed {
                        return None;
                    }
                }
                other => pending_literal.push(other),
            }
        }

        if !seen_placeholder {
            return None;
        }
        pattern.suffix.push_str(&pending_literal);
        Some(pattern)
    }

    fn render(
        &self,
        negative: bool,
        integer: String,
        fraction: String,
        culture: &Culture,
    ) -> String {
        let mut fraction = fraction;
        while fraction.len() > self.min_fraction && fraction.ends_with('0') {
            fraction.pop();
        }

        let integer = integer.trim_start_matches('0');
        let mut digits = String::from(integer);
        while digits.len() < self.min_integer {
            digits.insert(0, '0');
        }
        if self.grouping {
            digits = group(&digits, culture.group_separator());
        }

        let is_zero = integer.is_empty() && fraction.chars().all(|c| c == '0');
        let mut out = String::with_capacity(digits.len() + fraction.len() + 8);
        if negative && !is_zero {
            out.push('-');
        }
        out.push_str(&self.prefix);
        out.push_str(&digits);
        if !fraction.is_empty() {
            out.push(culture.decimal_separator());
            out.push_str(&fraction);
        }
        out.push_str(&self.suffix);
        out
    }
}

/// Round `value` to `decimals` places and split into digit strings.
fn split_f64(value: f64, decimals: usize) -> Option<(bool, String, String)> {
    let factor = 10f64.powi(i32::try_from(decimals).ok()?);
    let scaled = (value.abs() * factor).round();
    if scaled >= 1e38 {
        return None;
    }
    let mut digits = (scaled as u128).to_string();
    while digits.len() <= decimals {
        digits.insert(0, '0');
    }
    let fraction = digits.split_off(digits.len() - decimals);
    Some((value < 0.0, digits, fraction))
}

fn group(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

fn general_f64(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn localize(text: &str, culture: &Culture) -> String {
    text.replace('.', &culture.decimal_separator().to_string())
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}
