//! EmailAddress value object.
//!
//! This module provides a type-safe wrapper around email addresses with
//! built-in validation, normalization and a small format language for
//! rendering (and obfuscating) addresses.

use crate::culture::Culture;
use crate::error::SvoResult;
use crate::svo::{
    Formattable, GraphSerializable, Parsable, SerializationInfo, SingleValueObject, State,
    UNKNOWN_TOKEN, VALUE_KEY, WireConvertible, WireValue, impl_svo, stable_hash,
};
use std::net::{Ipv4Addr, Ipv6Addr};

const MAX_LENGTH: usize = 254;
const MAX_LOCAL_LENGTH: usize = 64;
const MAX_LABEL_LENGTH: usize = 63;
const MAX_DOMAIN_LENGTH: usize = 255;
const MAILTO: &str = "mailto:";
const IPV6_PREFIX: &str = "IPv6:";
const LOCAL_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

/// A validated email address.
///
/// The canonical representation is the lowercase address. Supports both
/// the Empty and the Unknown state.
///
/// ## Validation Rules
///
/// - At most 254 characters, of which at most 64 in the local part
/// - The local part is a dot-separated atom or a quoted string
/// - The domain is a host name with at least two labels, or an IP address
/// - A `mailto:` prefix and a `Display Name <address>` wrapper are stripped
///
/// ## Format Language
///
/// | Token | Renders |
/// |---|---|
/// | `l` / `L` | local part, lowercase / uppercase |
/// | `d` / `D` | domain, lowercase / uppercase |
/// | `f` / `F`, `U` | full address, lowercase / uppercase |
/// | `\x` | the literal character `x` |
///
/// Any other character is copied as is.
///
/// ## Examples
///
/// ```rust
/// use svo::prelude::*;
/// use svo::culture::Culture;
/// use svo::value_objects::EmailAddress;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let email = EmailAddress::parse("Svo <SVO@Qowaiv.org>")?;
///     assert_eq!(email.to_text(), "svo@qowaiv.org");
///     assert_eq!(email.format("l[at]d", Culture::invariant())?, "svo[at]qowaiv.org");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailAddress(State<String>);

impl EmailAddress {
    pub const EMPTY: Self = Self(State::Empty);
    pub const UNKNOWN: Self = Self(State::Unknown);

    /// The canonical address; empty for Empty and `?` for Unknown.
    pub fn address(&self) -> &str {
        match &self.0 {
            State::Empty => "",
            State::Unknown => UNKNOWN_TOKEN,
            State::Ordinary(address) => address,
        }
    }

    fn split(&self) -> Option<(&str, &str)> {
        self.0
            .ordinary()
            .and_then(|address| address.rsplit_once('@'))
    }

    /// The part before the `@`.
    pub fn local_part(&self) -> &str {
        self.split().map_or("", |(local, _)| local)
    }

    /// The part after the `@`.
    pub fn domain(&self) -> &str {
        self.split().map_or("", |(_, domain)| domain)
    }

    /// True when the domain is an IP address literal.
    pub fn is_ip_based(&self) -> bool {
        self.domain().starts_with('[')
    }

    /// The address wrapped as `Display Name <address>`.
    pub fn with_display_name(&self, display_name: &str) -> String {
        match &self.0 {
            State::Ordinary(address) if !display_name.trim().is_empty() => {
                format!("{} <{}>", display_name.trim(), address)
            }
            _ => self.address().to_string(),
        }
    }
}

/// Strip wrappers, validate and lowercase an address.
fn normalize(text: &str) -> Option<String> {
    let mut address = text.trim();

    if let Some(open) = address.rfind('<') {
        address = address.strip_suffix('>')?.get(open + 1..)?.trim();
    }
    if address
        .get(..MAILTO.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(MAILTO))
    {
        address = &address[MAILTO.len()..];
    }

    let (local, domain) = address.rsplit_once('@')?;
    if !is_valid_local_part(local) {
        return None;
    }
    let domain = normalize_domain(domain)?;
    let normalized = format!("{}@{}", local.to_lowercase(), domain);
    (normalized.chars().count() <= MAX_LENGTH).then_some(normalized)
}

fn is_valid_local_part(local: &str) -> bool {
    let length = local.chars().count();
    if length == 0 || length > MAX_LOCAL_LENGTH {
        return false;
    }
    if let Some(quoted) = local
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return is_valid_quoted(quoted);
    }
    local.split('.').all(|atom| {
        !atom.is_empty()
            && atom
                .chars()
                .all(|c| c.is_alphanumeric() || LOCAL_SPECIALS.contains(c))
    })
}

fn is_valid_quoted(content: &str) -> bool {
    let mut escaped = false;
    for c in content.chars() {
        if c.is_control() {
            return false;
        }
        match (escaped, c) {
            (true, _) => escaped = false,
            (false, '\\') => escaped = true,
            (false, '"') => return false,
            _ => {}
        }
    }
    !escaped
}

fn normalize_domain(domain: &str) -> Option<String> {
    if let Some(literal) = domain
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        let is_v6 = literal
            .get(..IPV6_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(IPV6_PREFIX));
        return if is_v6 {
            let ip: Ipv6Addr = literal[IPV6_PREFIX.len()..].parse().ok()?;
            Some(format!("[{}{}]", IPV6_PREFIX.to_lowercase(), ip))
        } else {
            let ip: Ipv4Addr = literal.parse().ok()?;
            Some(format!("[{}]", ip))
        };
    }
    if let Ok(ip) = domain.parse::<Ipv4Addr>() {
        return Some(format!("[{}]", ip));
    }

    let domain = domain.to_lowercase();
    if domain.chars().count() > MAX_DOMAIN_LENGTH {
        return None;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    let top_level = labels.last()?;
    let valid = labels.len() >= 2
        && labels.iter().all(|label| is_valid_label(label))
        && top_level.chars().count() >= 2
        && !top_level.chars().all(|c| c.is_ascii_digit());
    valid.then_some(domain)
}

fn is_valid_label(label: &str) -> bool {
    let length = label.chars().count();
    (1..=MAX_LABEL_LENGTH).contains(&length)
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_alphanumeric() || c == '-')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Local,
    Domain,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum EmailToken {
    Part { part: Part, upper: bool },
    Literal(char),
}

impl EmailToken {
    fn tokenize(format: &str) -> Vec<EmailToken> {
        let mut tokens = Vec::with_capacity(format.len());
        let mut chars = format.chars();
        while let Some(c) = chars.next() {
            let token = match c {
                'l' => EmailToken::Part { part: Part::Local, upper: false },
                'L' => EmailToken::Part { part: Part::Local, upper: true },
                'd' => EmailToken::Part { part: Part::Domain, upper: false },
                'D' => EmailToken::Part { part: Part::Domain, upper: true },
                'f' => EmailToken::Part { part: Part::Full, upper: false },
                'F' | 'U' => EmailToken::Part { part: Part::Full, upper: true },
                '\\' => EmailToken::Literal(chars.next().unwrap_or('\\')),
                other => EmailToken::Literal(other),
            };
            tokens.push(token);
        }
        tokens
    }

    fn render(&self, email: &EmailAddress, out: &mut String) {
        match self {
            EmailToken::Literal(c) => out.push(*c),
            EmailToken::Part { part, upper } => {
                let text = match part {
                    Part::Local => email.local_part(),
                    Part::Domain => email.domain(),
                    Part::Full => email.address(),
                };
                if *upper {
                    out.push_str(&text.to_uppercase());
                } else {
                    out.push_str(text);
                }
            }
        }
    }
}

impl SingleValueObject for EmailAddress {
    const TYPE_NAME: &'static str = "email address";

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
        match &self.0 {
            State::Empty => 0,
            _ => stable_hash(self.address().as_bytes()),
        }
    }
}

impl Parsable for EmailAddress {
    fn parse_canonical(text: &str) -> Option<Self> {
        normalize(text).map(|address| Self(State::Ordinary(address)))
    }
}

impl Formattable for EmailAddress {
    const DEFAULT_FORMAT: &'static str = "f";

    fn format_value(&self, format: &str, _culture: &Culture) -> SvoResult<String> {
        let mut out = String::with_capacity(self.address().len() + format.len());
        for token in EmailToken::tokenize(format) {
            token.render(self, &mut out);
        }
        Ok(out)
    }
}

impl WireConvertible for EmailAddress {
    fn to_wire(&self) -> WireValue {
        match &self.0 {
            State::Empty => WireValue::Null,
            _ => WireValue::String(self.address().to_string()),
        }
    }
}

impl GraphSerializable for EmailAddress {
    fn write_canonical(&self, info: &mut SerializationInfo) {
        info.add_string(VALUE_KEY, self.address());
    }

    fn read_canonical(info: &SerializationInfo) -> SvoResult<Self> {
        let text = info.require_string(VALUE_KEY, Self::TYPE_NAME)?;
        Self::parse_with(text, Culture::invariant())
    }
}

impl_svo!(EmailAddress);
