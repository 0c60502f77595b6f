//! Currency value object for ISO 4217 currencies.
//!
//! This module provides a type-safe wrapper around ISO 4217 currency codes
//! with culture-aware parsing of display names and symbols.

use super::currency_data::{CURRENCIES, CurrencyInfo};
use crate::culture::{Culture, fold};
use crate::error::{SvoError, SvoResult};
use crate::svo::{
    Formattable, GraphSerializable, Parsable, SerializationInfo, SingleValueObject, State,
    UNKNOWN_TOKEN, VALUE_KEY, WireConvertible, WireValue, impl_svo, stable_hash,
};

/// ISO 4217 code of the "no currency involved" entry, which maps to Unknown.
const NO_CURRENCY_CODE: &str = "XXX";
const NO_CURRENCY_NUMERIC: u16 = 999;

/// A validated ISO 4217 currency.
///
/// Currency wraps the alpha code of a known currency. It supports both the
/// Empty and the Unknown state.
///
/// ## Recognized Input
///
/// - The alpha code (`EUR`, `usd`), case-insensitive
/// - The numeric code (`978`)
/// - A symbol that identifies exactly one currency (`€`, `£`, `$`)
/// - The display name in the given culture (`Amerikaanse dollar` in `nl-BE`)
/// - The English name (`pound sterling`)
/// - `?` and `XXX` for Unknown
///
/// ## Examples
///
/// ```rust
/// use svo::prelude::*;
/// use svo::culture::Culture;
/// use svo::value_objects::Currency;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let dollar = Currency::parse("USD")?;
///     assert_eq!(dollar.to_text(), "USD");
///
///     let nl = Culture::require("nl-BE")?;
///     assert_eq!(Currency::parse_with("Amerikaanse dollar", nl)?, Currency::USD);
///     assert_eq!(dollar.format("f", nl)?, "Amerikaanse dollar");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Currency(State<&'static str>);

impl Currency {
    pub const EMPTY: Self = Self(State::Empty);
    pub const UNKNOWN: Self = Self(State::Unknown);
    pub const EUR: Self = Self(State::Ordinary("EUR"));
    pub const USD: Self = Self(State::Ordinary("USD"));
    pub const GBP: Self = Self(State::Ordinary("GBP"));
    pub const JPY: Self = Self(State::Ordinary("JPY"));
    pub const CHF: Self = Self(State::Ordinary("CHF"));

    /// All known currencies, ordered by alpha code.
    pub fn all() -> impl Iterator<Item = Currency> {
        CURRENCIES.iter().map(|info| Currency(State::Ordinary(info.code)))
    }

    /// Look up a currency by its ISO 4217 alpha code.
    pub fn from_iso_code(code: &str) -> Option<Self> {
        lookup(|info| info.code.eq_ignore_ascii_case(code))
    }

    /// Look up a currency by its ISO 4217 numeric code; 999 is Unknown.
    pub fn from_numeric_code(numeric: u16) -> Option<Self> {
        if numeric == NO_CURRENCY_NUMERIC {
            return Some(Self::UNKNOWN);
        }
        lookup(|info| info.numeric == numeric)
    }

    /// ISO 4217 reference data, for ordinary currencies.
    pub fn info(&self) -> Option<&'static CurrencyInfo> {
        let code = self.0.ordinary()?;
        CURRENCIES.iter().find(|info| info.code == *code)
    }

    /// The alpha code; `XXX` for Unknown and empty for Empty.
    pub fn iso_code(&self) -> &'static str {
        match self.0 {
            State::Empty => "",
            State::Unknown => NO_CURRENCY_CODE,
            State::Ordinary(code) => code,
        }
    }

    /// The numeric code; 999 for Unknown and 0 for Empty.
    pub fn iso_numeric_code(&self) -> u16 {
        match self.0 {
            State::Empty => 0,
            State::Unknown => NO_CURRENCY_NUMERIC,
            State::Ordinary(_) => self.info().map_or(0, |info| info.numeric),
        }
    }

    /// Digits after the decimal separator, when applicable.
    pub fn minor_unit(&self) -> Option<u8> {
        self.info().and_then(|info| info.minor_unit)
    }

    pub fn symbol(&self) -> &'static str {
        self.info().map_or("", |info| info.symbol)
    }

    pub fn english_name(&self) -> &'static str {
        self.info().map_or("", |info| info.english_name)
    }

    /// The display name in a culture, falling back to the English name.
    pub fn display_name(&self, culture: &Culture) -> &'static str {
        culture
            .currency_display_name(self.iso_code())
            .unwrap_or_else(|| self.english_name())
    }
}

fn lookup(predicate: impl Fn(&CurrencyInfo) -> bool) -> Option<Currency> {
    CURRENCIES
        .iter()
        .find(|info| predicate(info))
        .map(|info| Currency(State::Ordinary(info.code)))
}

fn from_symbol(text: &str) -> Option<Currency> {
    let mut matches = CURRENCIES.iter().filter(|info| info.symbol == text);
    match (matches.next(), matches.next()) {
        (Some(info), None) => Some(Currency(State::Ordinary(info.code))),
        _ => None,
    }
}

fn from_english_name(text: &str) -> Option<Currency> {
    let wanted = fold(text);
    lookup(|info| fold(info.english_name) == wanted)
}

impl SingleValueObject for Currency {
    const TYPE_NAME: &'static str = "currency";

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
            State::Ordinary(code) => stable_hash(code.as_bytes()),
        }
    }
}

impl Parsable for Currency {
    fn parse_canonical(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case(NO_CURRENCY_CODE) {
            return Some(Self::UNKNOWN);
        }
        if text.len() == 3 && text.bytes().all(|b| b.is_ascii_digit()) {
            return text.parse().ok().and_then(Self::from_numeric_code);
        }
        Self::from_iso_code(text).or_else(|| from_symbol(text))
    }

    fn parse_localized(text: &str, culture: &Culture) -> Option<Self> {
        culture
            .currency_from_display_name(text)
            .and_then(Self::from_iso_code)
            .or_else(|| {
                // Other cultures reach English names through the fallback.
                if culture.is_invariant() {
                    from_english_name(text)
                } else {
                    None
                }
            })
    }

    fn parse_fallback(text: &str) -> Option<Self> {
        from_english_name(text)
    }
}

impl Formattable for Currency {
    const DEFAULT_FORMAT: &'static str = "i";

    fn format_value(&self, format: &str, culture: &Culture) -> SvoResult<String> {
        let text = match format {
            "i" | "I" => self.iso_code().to_string(),
            "n" | "N" => format!("{:03}", self.iso_numeric_code()),
            "e" | "E" => self.english_name().to_string(),
            "f" | "F" => self.display_name(culture).to_string(),
            "s" | "S" | "$" => self.symbol().to_string(),
            other => return Err(SvoError::invalid_format(Self::TYPE_NAME, other)),
        };
        Ok(text)
    }
}

impl WireConvertible for Currency {
    fn to_wire(&self) -> WireValue {
        match self.0 {
            State::Empty => WireValue::Null,
            State::Unknown => WireValue::String(UNKNOWN_TOKEN.to_string()),
            State::Ordinary(code) => WireValue::String(code.to_string()),
        }
    }
}

impl GraphSerializable for Currency {
    fn write_canonical(&self, info: &mut SerializationInfo) {
        let canonical = match self.0 {
            State::Empty => "",
            State::Unknown => UNKNOWN_TOKEN,
            State::Ordinary(code) => code,
        };
        info.add_string(VALUE_KEY, canonical);
    }

    fn read_canonical(info: &SerializationInfo) -> SvoResult<Self> {
        let text = info.require_string(VALUE_KEY, Self::TYPE_NAME)?;
        Self::parse_with(text, Culture::invariant())
    }
}

impl_svo!(Currency);
