//! Core traits of the single value object contract.
//!
//! ## Design Principles
//!
//! - **Immutable**: value objects expose no mutation; operations build new values
//! - **Sentinel aware**: Empty and Unknown are first-class states, never errors
//! - **Explicit culture**: every culture-sensitive operation has a variant that
//!   takes the culture as a parameter; the convenience variants read the
//!   thread's ambient culture

use crate::config;
use crate::culture::{self, Culture};
use crate::error::{SvoError, SvoResult};
use crate::formatting::FormatProvider;
use log::trace;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::cmp::Ordering;
use std::fmt::Debug;

/// The text that parses to, and is formatted for, the Unknown state.
pub const UNKNOWN_TOKEN: &str = "?";

/// Which recognizers the parsing pipeline runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Only the canonical representation of the type is accepted.
    Strict,
    /// Canonical, then culture-sensitive, then culture-invariant recognizers.
    #[default]
    Lenient,
}

/// Shared behaviour of every single value object.
pub trait SingleValueObject:
    Clone + Default + PartialEq + Eq + Ord + Debug + Send + Sync + 'static
{
    /// Human readable type name used in error messages.
    const TYPE_NAME: &'static str;

    /// The Empty value, equal to `Self::default()`.
    fn empty() -> Self {
        Self::default()
    }

    /// The Unknown value, for types that support it.
    fn unknown() -> Option<Self> {
        None
    }

    fn supports_unknown() -> bool {
        Self::unknown().is_some()
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn is_unknown(&self) -> bool {
        false
    }

    fn is_empty_or_unknown(&self) -> bool {
        self.is_empty() || self.is_unknown()
    }

    /// A hash that only depends on the canonical representation and is stable
    /// across process runs. Empty always hashes to 0.
    fn hash_code(&self) -> i32;

    /// Compare against an untyped value.
    ///
    /// Fails when `other` is absent or of another type.
    fn compare_to(&self, other: Option<&dyn Any>) -> SvoResult<Ordering> {
        other
            .and_then(|other| other.downcast_ref::<Self>())
            .map(|other| self.cmp(other))
            .ok_or(SvoError::IncompatibleComparison {
                type_name: Self::TYPE_NAME,
            })
    }
}

/// Text accepted by the parsing entry points; `None` stands for absent input.
pub trait ParseInput<'a> {
    fn into_input(self) -> Option<&'a str>;
}

impl<'a> ParseInput<'a> for &'a str {
    fn into_input(self) -> Option<&'a str> {
        Some(self)
    }
}

impl<'a> ParseInput<'a> for &'a String {
    fn into_input(self) -> Option<&'a str> {
        Some(self.as_str())
    }
}

impl<'a> ParseInput<'a> for Option<&'a str> {
    fn into_input(self) -> Option<&'a str> {
        self
    }
}

/// Text to value conversion.
///
/// Implementors provide up to three recognizers; the pipeline in the provided
/// methods handles absent input, the Unknown token and the parse mode.
pub trait Parsable: SingleValueObject {
    /// The canonical representation (ISO code, numeric literal, fixed pattern).
    fn parse_canonical(text: &str) -> Option<Self>;

    /// Culture-sensitive display forms.
    fn parse_localized(_text: &str, _culture: &Culture) -> Option<Self> {
        None
    }

    /// Culture-invariant fallback forms.
    fn parse_fallback(text: &str) -> Option<Self> {
        Self::parse_localized(text, Culture::invariant())
    }

    fn try_parse_with_mode<'a>(
        text: impl ParseInput<'a>,
        culture: &Culture,
        mode: ParseMode,
    ) -> Option<Self> {
        let Some(text) = text.into_input() else {
            return Some(Self::empty());
        };
        let text = text.trim();
        if text.is_empty() {
            return Some(Self::empty());
        }
        if text == UNKNOWN_TOKEN {
            return Self::unknown();
        }

        if let Some(value) = Self::parse_canonical(text) {
            trace!("'{}' matched the canonical {} form", text, Self::TYPE_NAME);
            return Some(value);
        }
        if mode == ParseMode::Strict {
            trace!("'{}' is not a canonical {}", text, Self::TYPE_NAME);
            return None;
        }

        if let Some(value) = Self::parse_localized(text, culture) {
            trace!("'{}' matched a {} form of culture {}", text, Self::TYPE_NAME, culture);
            return Some(value);
        }
        if !culture.is_invariant() {
            if let Some(value) = Self::parse_fallback(text) {
                trace!("'{}' matched an invariant {} form", text, Self::TYPE_NAME);
                return Some(value);
            }
        }
        trace!(
            "'{}' is not a valid {} in culture {}",
            text,
            Self::TYPE_NAME,
            culture
        );
        None
    }

    fn try_parse_with<'a>(text: impl ParseInput<'a>, culture: &Culture) -> Option<Self> {
        Self::try_parse_with_mode(text, culture, config::parse_mode())
    }

    /// Parse using the ambient culture; `None` when no recognizer matched.
    fn try_parse<'a>(text: impl ParseInput<'a>) -> Option<Self> {
        Self::try_parse_with(text, culture::current())
    }

    fn parse_with<'a>(text: impl ParseInput<'a>, culture: &Culture) -> SvoResult<Self> {
        let text = text.into_input();
        Self::try_parse_with(text, culture)
            .ok_or_else(|| SvoError::parse(Self::TYPE_NAME, text.unwrap_or_default()))
    }

    /// Parse using the ambient culture, failing with a parse error.
    fn parse<'a>(text: impl ParseInput<'a>) -> SvoResult<Self> {
        Self::parse_with(text, culture::current())
    }

    fn is_valid_with<'a>(text: impl ParseInput<'a>, culture: &Culture) -> bool {
        Self::try_parse_with(text, culture).is_some()
    }

    /// True when [`Parsable::try_parse`] would succeed.
    fn is_valid<'a>(text: impl ParseInput<'a>) -> bool {
        Self::try_parse(text).is_some()
    }

    /// Text protocol entry point.
    fn from_text(text: &str, culture: &Culture) -> SvoResult<Self> {
        Self::parse_with(text, culture)
    }
}

/// Value to text conversion.
pub trait Formattable: SingleValueObject {
    /// Format used when none is requested.
    const DEFAULT_FORMAT: &'static str;

    /// Format a value that is neither Empty nor Unknown.
    fn format_value(&self, format: &str, culture: &Culture) -> SvoResult<String>;

    fn format_empty(&self, _format: &str, _culture: &Culture) -> SvoResult<String> {
        Ok(String::new())
    }

    fn format_unknown(&self, _format: &str, _culture: &Culture) -> SvoResult<String> {
        Ok(UNKNOWN_TOKEN.to_string())
    }

    fn to_string_with_provider(
        &self,
        format: Option<&str>,
        provider: FormatProvider<'_>,
    ) -> SvoResult<String> {
        let culture = match provider {
            FormatProvider::Custom(formatter) => {
                return Ok(formatter.format(
                    format.unwrap_or_default(),
                    self as &dyn Any,
                    Self::TYPE_NAME,
                ));
            }
            FormatProvider::Culture(culture) => culture,
        };

        let format = format
            .filter(|f| !f.is_empty())
            .unwrap_or(Self::DEFAULT_FORMAT);
        if self.is_unknown() {
            self.format_unknown(format, culture)
        } else if self.is_empty() {
            self.format_empty(format, culture)
        } else {
            self.format_value(format, culture)
        }
    }

    fn format(&self, format: &str, culture: &Culture) -> SvoResult<String> {
        self.to_string_with_provider(Some(format), FormatProvider::Culture(culture))
    }

    /// Format using the ambient culture.
    fn to_string_with(&self, format: &str) -> SvoResult<String> {
        self.format(format, culture::current())
    }

    /// Text protocol: the default format in the invariant culture.
    fn to_text(&self) -> String {
        self.to_string_with_provider(None, FormatProvider::Culture(Culture::invariant()))
            .unwrap_or_default()
    }
}

/// FNV-1a over the canonical bytes; 0 is reserved for Empty.
pub fn stable_hash(bytes: &[u8]) -> i32 {
    const OFFSET: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;
    let hash = bytes
        .iter()
        .fold(OFFSET, |hash, byte| (hash ^ u32::from(*byte)).wrapping_mul(PRIME));
    match hash as i32 {
        0 => 1,
        value => value,
    }
}
