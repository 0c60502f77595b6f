//! FileSize value object.
//!
//! A signed number of bytes with unit-aware parsing and formatting. Units
//! are powers of 1024, from byte up to exabyte.

use crate::culture::{Culture, fold};
use crate::error::{SvoError, SvoResult};
use crate::formatting::number::{self, ParsedNumber};
use crate::svo::{
    Formattable, GraphSerializable, Parsable, SerializationInfo, SingleValueObject, VALUE_KEY,
    WireConvertible, WireValue, impl_svo, stable_hash,
};

/// A unit of 1024^power bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Unit {
    power: u32,
    short: &'static str,
    full: &'static str,
    binary: &'static str,
}

const UNITS: [Unit; 7] = [
    Unit { power: 0, short: "b", full: "byte", binary: "b" },
    Unit { power: 1, short: "kB", full: "kilobyte", binary: "KiB" },
    Unit { power: 2, short: "MB", full: "megabyte", binary: "MiB" },
    Unit { power: 3, short: "GB", full: "gigabyte", binary: "GiB" },
    Unit { power: 4, short: "TB", full: "terabyte", binary: "TiB" },
    Unit { power: 5, short: "PB", full: "petabyte", binary: "PiB" },
    Unit { power: 6, short: "EB", full: "exabyte", binary: "EiB" },
];

impl Unit {
    fn factor(&self) -> i64 {
        1_i64 << (10 * self.power)
    }

    /// Resolve a unit name as written after a number, in any casing.
    fn from_suffix(suffix: &str) -> Option<Unit> {
        let suffix = fold(suffix);
        UNITS.iter().copied().find(|unit| {
            suffix == fold(unit.short)
                || suffix == unit.full
                || suffix.strip_suffix('s') == Some(unit.full)
                || suffix == fold(unit.binary)
        })
    }

    /// The largest unit not exceeding the magnitude of `bytes`.
    fn fitting(bytes: i64) -> Unit {
        let magnitude = bytes.unsigned_abs();
        UNITS
            .iter()
            .rev()
            .copied()
            .find(|unit| magnitude >= unit.factor().unsigned_abs())
            .unwrap_or(UNITS[0])
    }
}

/// How the unit of a format string is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitStyle<'a> {
    /// `f`, `F`, `s` or `S`: the fitting unit is chosen from the value.
    Auto(char),
    /// A full unit name, singular or plural; its casing picks the output casing.
    Full(Unit, &'a str),
    /// A short or binary unit, rendered as written.
    Literal(Unit, &'a str),
}

/// Unit tokens recognized at the end of a format string, longest first.
const FORMAT_UNITS: &[&str] = &[
    "kilobytes", "megabytes", "gigabytes", "terabytes", "petabytes", "exabytes", "kilobyte",
    "megabyte", "gigabyte", "terabyte", "petabyte", "exabyte", "bytes", "byte", "kib", "mib",
    "gib", "tib", "pib", "eib", "kb", "mb", "gb", "tb", "pb", "eb", "b", "f", "s",
];

/// Split a format into its numeric part and unit token.
fn split_format(format: &str) -> Option<(&str, UnitStyle<'_>)> {
    FORMAT_UNITS.iter().find_map(|token| {
        let start = format.len().checked_sub(token.len())?;
        let written = format.get(start..)?;
        if !written.eq_ignore_ascii_case(token) {
            return None;
        }
        let number = &format[..start];
        if number.chars().next_back().is_some_and(char::is_alphabetic) {
            return None;
        }
        let style = match *token {
            "f" | "s" => UnitStyle::Auto(written.chars().next()?),
            _ => {
                let unit = Unit::from_suffix(token)?;
                if token.len() > 3 {
                    UnitStyle::Full(unit, written)
                } else {
                    UnitStyle::Literal(unit, written)
                }
            }
        };
        Some((number, style))
    })
}

fn render_full(name: &str, written: &str) -> String {
    if written.chars().all(|c| !c.is_uppercase()) {
        name.to_string()
    } else if written.chars().all(|c| !c.is_lowercase()) {
        name.to_uppercase()
    } else {
        capitalize(name)
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// A number of bytes.
///
/// The canonical representation is a signed 64-bit byte count. Empty is
/// [`FileSize::ZERO`], which formats as `0 byte` and serializes as `0`.
/// FileSize has no Unknown state.
///
/// ## Format Language
///
/// A numeric format (`#,##0.00`, `N2`, `0.0`) optionally followed by a unit:
///
/// - `b`, `kB`, `MB` … `EB` and `KiB` … `EiB` are rendered as written
/// - `byte`, `kilobyte` … `exabyte` and their plurals follow the casing of
///   the format: all lowercase, all uppercase, or capitalized otherwise
/// - `f`/`F` pick the fitting full unit name, `s`/`S` the fitting short one
///
/// The value is rescaled to the unit before the numeric format applies.
///
/// ## Examples
///
/// ```rust
/// use svo::prelude::*;
/// use svo::culture::Culture;
/// use svo::value_objects::FileSize;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let size = FileSize::new(123_456_789);
///     assert_eq!(size.format("0.0 MegaByte", Culture::invariant())?, "117.7 Megabyte");
///
///     let nl = Culture::require("nl-BE")?;
///     assert_eq!(size.format("0.0 MegaByte", nl)?, "117,7 Megabyte");
///     assert_eq!(FileSize::parse_with("117,7 MB", nl)?.to_megabytes().round(), 118.0);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileSize(i64);

impl FileSize {
    pub const ZERO: Self = Self(0);
    pub const BYTE: Self = Self(1);
    pub const KILO_BYTE: Self = Self(1 << 10);
    pub const MEGA_BYTE: Self = Self(1 << 20);
    pub const GIGA_BYTE: Self = Self(1 << 30);
    pub const TERA_BYTE: Self = Self(1 << 40);
    pub const PETA_BYTE: Self = Self(1 << 50);
    pub const EXA_BYTE: Self = Self(1 << 60);
    pub const MIN_VALUE: Self = Self(i64::MIN);
    pub const MAX_VALUE: Self = Self(i64::MAX);

    pub const fn new(bytes: i64) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> i64 {
        self.0
    }

    fn from_scaled(value: f64, power: u32) -> SvoResult<Self> {
        let bytes = (value * UNITS[power as usize].factor() as f64).round();
        // 2^63 is the first f64 that does not fit.
        if bytes.is_finite() && bytes >= i64::MIN as f64 && bytes < i64::MAX as f64 {
            Ok(Self(bytes as i64))
        } else {
            Err(SvoError::out_of_range(Self::TYPE_NAME, value))
        }
    }

    fn to_scaled(&self, power: u32) -> f64 {
        self.0 as f64 / UNITS[power as usize].factor() as f64
    }

    pub fn from_kilobytes(value: f64) -> SvoResult<Self> {
        Self::from_scaled(value, 1)
    }

    pub fn from_megabytes(value: f64) -> SvoResult<Self> {
        Self::from_scaled(value, 2)
    }

    pub fn from_gigabytes(value: f64) -> SvoResult<Self> {
        Self::from_scaled(value, 3)
    }

    pub fn from_terabytes(value: f64) -> SvoResult<Self> {
        Self::from_scaled(value, 4)
    }

    pub fn from_petabytes(value: f64) -> SvoResult<Self> {
        Self::from_scaled(value, 5)
    }

    pub fn from_exabytes(value: f64) -> SvoResult<Self> {
        Self::from_scaled(value, 6)
    }

    pub fn to_kilobytes(&self) -> f64 {
        self.to_scaled(1)
    }

    pub fn to_megabytes(&self) -> f64 {
        self.to_scaled(2)
    }

    pub fn to_gigabytes(&self) -> f64 {
        self.to_scaled(3)
    }

    pub fn to_terabytes(&self) -> f64 {
        self.to_scaled(4)
    }

    pub fn to_petabytes(&self) -> f64 {
        self.to_scaled(5)
    }

    pub fn to_exabytes(&self) -> f64 {
        self.to_scaled(6)
    }

    /// A new size, `other` bytes larger.
    pub fn increment(&self, other: FileSize) -> SvoResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| SvoError::out_of_range(Self::TYPE_NAME, format!("{} + {}", self.0, other.0)))
    }

    /// A new size, `other` bytes smaller.
    pub fn decrement(&self, other: FileSize) -> SvoResult<Self> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or_else(|| SvoError::out_of_range(Self::TYPE_NAME, format!("{} - {}", self.0, other.0)))
    }

    /// A new size scaled by `factor`, rounded to whole bytes.
    pub fn multiply(&self, factor: f64) -> SvoResult<Self> {
        Self::from_scaled(self.0 as f64 * factor, 0)
    }

    fn from_number(number: &ParsedNumber, unit: Unit) -> Option<Self> {
        if !number.has_fraction() {
            return number.to_i64()?.checked_mul(unit.factor()).map(Self);
        }
        Self::from_scaled(number.to_f64()?, unit.power).ok()
    }
}

impl From<i64> for FileSize {
    fn from(bytes: i64) -> Self {
        Self(bytes)
    }
}

impl From<FileSize> for i64 {
    fn from(size: FileSize) -> Self {
        size.0
    }
}

impl SingleValueObject for FileSize {
    const TYPE_NAME: &'static str = "file size";

    fn hash_code(&self) -> i32 {
        if self.is_empty() {
            0
        } else {
            stable_hash(&self.0.to_le_bytes())
        }
    }
}

impl Parsable for FileSize {
    fn parse_canonical(text: &str) -> Option<Self> {
        if !text.trim_start_matches(['-', '+']).bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse().ok().map(Self)
    }

    fn parse_localized(text: &str, culture: &Culture) -> Option<Self> {
        let number_end = text.trim_end_matches(char::is_alphabetic).len();
        let (number, suffix) = text.split_at(number_end);
        let unit = if suffix.is_empty() {
            UNITS[0]
        } else {
            Unit::from_suffix(suffix)?
        };
        let number = number::parse_number(number, culture)?;
        Self::from_number(&number, unit)
    }
}

impl Formattable for FileSize {
    const DEFAULT_FORMAT: &'static str = "0 byte";

    fn format_value(&self, format: &str, culture: &Culture) -> SvoResult<String> {
        let invalid = || SvoError::invalid_format(Self::TYPE_NAME, format);

        let Some((number_format, style)) = split_format(format) else {
            return number::format_i64(self.0, format, culture).ok_or_else(invalid);
        };

        let (unit, unit_text) = match style {
            UnitStyle::Auto(letter) => {
                let unit = Unit::fitting(self.0);
                let text = match letter {
                    'f' => unit.full.to_string(),
                    'F' => capitalize(unit.full),
                    's' => fold(unit.short),
                    _ => unit.short.to_string(),
                };
                (unit, text)
            }
            UnitStyle::Full(unit, written) => {
                let name = if written.len() > unit.full.len() {
                    format!("{}s", unit.full)
                } else {
                    unit.full.to_string()
                };
                (unit, render_full(&name, written))
            }
            UnitStyle::Literal(unit, written) => (unit, written.to_string()),
        };

        let trimmed = number_format.trim_end();
        let mut separator = &number_format[trimmed.len()..];
        let trimmed = if trimmed.is_empty() {
            if separator.is_empty() {
                separator = " ";
            }
            if unit.power == 0 { "0" } else { "0.##" }
        } else {
            trimmed
        };

        let number = if unit.power == 0 {
            number::format_i64(self.0, trimmed, culture)
        } else {
            number::format_f64(self.to_scaled(unit.power), trimmed, culture)
        }
        .ok_or_else(invalid)?;
        Ok(format!("{number}{separator}{unit_text}"))
    }

    /// Zero is an ordinary size that keeps its unit.
    fn format_empty(&self, format: &str, culture: &Culture) -> SvoResult<String> {
        self.format_value(format, culture)
    }
}

impl WireConvertible for FileSize {
    fn from_wire_integer(value: i64) -> SvoResult<Self> {
        Ok(Self(value))
    }

    fn from_wire_float(value: f64) -> SvoResult<Self> {
        Self::from_scaled(value, 0)
    }

    fn to_wire(&self) -> WireValue {
        WireValue::Integer(self.0)
    }
}

impl GraphSerializable for FileSize {
    fn write_canonical(&self, info: &mut SerializationInfo) {
        info.add_i64(VALUE_KEY, self.0);
    }

    fn read_canonical(info: &SerializationInfo) -> SvoResult<Self> {
        info.require_i64(VALUE_KEY, Self::TYPE_NAME).map(Self)
    }
}

impl_svo!(FileSize);
