//! Uuid value object.
//!
//! A 128-bit identifier whose canonical text is the 22 character URL-safe
//! base64 encoding of its bytes. All native GUID notations parse to the
//! same value.

use crate::culture::Culture;
use crate::error::{SvoError, SvoResult};
use crate::svo::{
    Formattable, GraphSerializable, Parsable, SerializationInfo, SingleValueObject, VALUE_KEY,
    WireConvertible, WireValue, impl_svo, stable_hash,
};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use uuid::Uuid as RawUuid;

const BASE64_LENGTH: usize = 22;

/// A universally unique identifier.
///
/// The nil identifier is Empty; Uuid has no Unknown state.
///
/// ## Formats
///
/// | Format | Example |
/// |---|---|
/// | `s`, `S` (default) | `ihqMQtL_4lTibrary_GUIA` |
/// | `n`, `N` | `8a1a8c42d2ffe254e26eb6abcbf19420` |
/// | `d`, `D` | `8a1a8c42-d2ff-e254-e26e-b6abcbf19420` |
/// | `b`, `B` | `{8a1a8c42-d2ff-e254-e26e-b6abcbf19420}` |
/// | `p`, `P` | `(8a1a8c42-d2ff-e254-e26e-b6abcbf19420)` |
/// | `x`, `X` | `{0x8a1a8c42,0xd2ff,0xe254,{0xe2,0x6e,0xb6,0xab,0xcb,0xf1,0x94,0x20}}` |
///
/// ```rust
/// use svo::prelude::*;
/// use svo::culture::Culture;
/// use svo::value_objects::Uuid;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let id = Uuid::parse("8A1A8C42D2FFE254E26EB6ABCBF19420")?;
///     assert_eq!(id, Uuid::parse("{8a1a8c42-d2ff-e254-e26e-b6abcbf19420}")?);
///     assert_eq!(id, Uuid::parse(id.to_text().as_str())?);
///     assert_eq!(
///         id.format("B", Culture::invariant())?,
///         "{8a1a8c42-d2ff-e254-e26e-b6abcbf19420}"
///     );
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid(RawUuid);

impl Uuid {
    pub const EMPTY: Self = Self(RawUuid::nil());

    /// A new random (version 4) identifier.
    pub fn new_v4() -> Self {
        Self(RawUuid::new_v4())
    }

    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(RawUuid::from_bytes(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    pub fn as_raw(&self) -> &RawUuid {
        &self.0
    }

    /// The version number stored in the identifier.
    pub fn version(&self) -> usize {
        self.0.get_version_num()
    }

    fn to_base64(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.0.as_bytes())
    }

    fn from_base64(text: &str) -> Option<Self> {
        if text.len() != BASE64_LENGTH {
            return None;
        }
        let url_safe = text.replace('+', "-").replace('/', "_");
        let bytes: [u8; 16] = URL_SAFE_NO_PAD.decode(url_safe).ok()?.try_into().ok()?;
        Some(Self::from_bytes(bytes))
    }

    fn from_hex_array(text: &str) -> Option<Self> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let body = compact.strip_prefix('{')?.strip_suffix("}}")?;
        let (head, tail) = body.split_once(",{")?;

        let head: Vec<&str> = head.split(',').collect();
        let tail: Vec<&str> = tail.split(',').collect();
        let [d1, d2, d3] = head.as_slice() else {
            return None;
        };
        if tail.len() != 8 {
            return None;
        }

        let d1 = u32::from_str_radix(hex_digits(d1, 8)?, 16).ok()?;
        let d2 = u16::from_str_radix(hex_digits(d2, 4)?, 16).ok()?;
        let d3 = u16::from_str_radix(hex_digits(d3, 4)?, 16).ok()?;
        let mut d4 = [0u8; 8];
        for (slot, part) in d4.iter_mut().zip(&tail) {
            *slot = u8::from_str_radix(hex_digits(part, 2)?, 16).ok()?;
        }
        Some(Self(RawUuid::from_fields(d1, d2, d3, &d4)))
    }

    fn hex_array(&self) -> String {
        let (d1, d2, d3, d4) = self.0.as_fields();
        let tail: Vec<String> = d4.iter().map(|b| format!("0x{:02x}", b)).collect();
        format!("{{0x{:08x},0x{:04x},0x{:04x},{{{}}}}}", d1, d2, d3, tail.join(","))
    }
}

/// The digits of a `0x`-prefixed hex literal of at most `max` digits.
fn hex_digits(part: &str, max: usize) -> Option<&str> {
    let digits = part
        .strip_prefix("0x")
        .or_else(|| part.strip_prefix("0X"))?;
    let valid = (1..=max).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_hexdigit());
    valid.then_some(digits)
}

impl From<RawUuid> for Uuid {
    fn from(value: RawUuid) -> Self {
        Self(value)
    }
}

impl From<Uuid> for RawUuid {
    fn from(value: Uuid) -> Self {
        value.0
    }
}

impl SingleValueObject for Uuid {
    const TYPE_NAME: &'static str = "UUID";

    fn hash_code(&self) -> i32 {
        if self.0.is_nil() {
            0
        } else {
            stable_hash(self.0.as_bytes())
        }
    }
}

impl Parsable for Uuid {
    fn parse_canonical(text: &str) -> Option<Self> {
        if let Some(value) = Self::from_base64(text) {
            return Some(value);
        }
        if text.starts_with('{') && text.contains(',') {
            return Self::from_hex_array(text);
        }
        let text = text
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(text);
        RawUuid::try_parse(text).ok().map(Self)
    }
}

impl Formattable for Uuid {
    const DEFAULT_FORMAT: &'static str = "s";

    fn format_value(&self, format: &str, _culture: &Culture) -> SvoResult<String> {
        let text = match format {
            "s" | "S" => self.to_base64(),
            "n" | "N" => self.0.simple().to_string(),
            "d" | "D" => self.0.hyphenated().to_string(),
            "b" | "B" => self.0.braced().to_string(),
            "p" | "P" => format!("({})", self.0.hyphenated()),
            "x" | "X" => self.hex_array(),
            other => return Err(SvoError::invalid_format(Self::TYPE_NAME, other)),
        };
        Ok(text)
    }
}

impl WireConvertible for Uuid {
    fn to_wire(&self) -> WireValue {
        if self.is_empty() {
            WireValue::Null
        } else {
            WireValue::String(self.to_base64())
        }
    }
}

impl GraphSerializable for Uuid {
    fn write_canonical(&self, info: &mut SerializationInfo) {
        info.add_string(VALUE_KEY, self.to_text());
    }

    fn read_canonical(info: &SerializationInfo) -> SvoResult<Self> {
        let text = info.require_string(VALUE_KEY, Self::TYPE_NAME)?;
        Self::parse_with(text, Culture::invariant())
    }
}

impl_svo!(Uuid);
