//! Culture data used by parsing and formatting.
//!
//! A [`Culture`] is a static record of locale conventions: number separators,
//! date and time patterns, month and day names, and localized currency display
//! names. Parsing and formatting operations take a culture explicitly; the
//! convenience entry points that omit it read the thread's ambient culture
//! from [`current`].
//!
//! ## Usage
//!
//! ```rust
//! use svo::culture::{self, Culture, CultureScope};
//!
//! let nl = Culture::get("nl-BE").expect("built-in culture");
//! assert_eq!(nl.decimal_separator(), ',');
//!
//! {
//!     let _scope = CultureScope::new(nl);
//!     assert_eq!(culture::current().name(), "nl-BE");
//! }
//! assert!(culture::current().is_invariant());
//! ```

mod ambient;
mod data;

pub use ambient::{CultureScope, current, process_default, set_current, set_process_default};

use crate::error::{SvoError, SvoResult};

/// Locale conventions consulted by parsing and formatting.
#[derive(Debug)]
pub struct Culture {
    pub(crate) name: &'static str,
    pub(crate) english_name: &'static str,
    pub(crate) decimal_separator: char,
    pub(crate) group_separator: char,
    pub(crate) date_separator: &'static str,
    pub(crate) short_date_pattern: &'static str,
    pub(crate) long_date_pattern: &'static str,
    pub(crate) short_time_pattern: &'static str,
    pub(crate) long_time_pattern: &'static str,
    pub(crate) am_designator: &'static str,
    pub(crate) pm_designator: &'static str,
    pub(crate) month_names: [&'static str; 12],
    pub(crate) month_abbreviations: [&'static str; 12],
    /// Sunday first.
    pub(crate) day_names: [&'static str; 7],
    pub(crate) day_abbreviations: [&'static str; 7],
    /// ISO 4217 alpha code to localized display name.
    pub(crate) currency_names: &'static [(&'static str, &'static str)],
}

impl Culture {
    /// The culture-invariant conventions.
    pub fn invariant() -> &'static Culture {
        &data::INVARIANT
    }

    /// Look up a built-in culture by name.
    ///
    /// Names are matched case-insensitively, `_` is accepted in place of `-`,
    /// and a neutral name such as `nl` resolves to its default specific culture.
    pub fn get(name: &str) -> Option<&'static Culture> {
        let normalized = name.trim().replace('_', "-");
        if normalized.is_empty() || normalized.eq_ignore_ascii_case("invariant") {
            return Some(Self::invariant());
        }

        if let Some(culture) = data::ALL
            .iter()
            .copied()
            .find(|c| c.name.eq_ignore_ascii_case(&normalized))
        {
            return Some(culture);
        }

        data::NEUTRAL_DEFAULTS
            .iter()
            .find(|(neutral, _)| neutral.eq_ignore_ascii_case(&normalized))
            .map(|(_, culture)| *culture)
    }

    /// Look up a built-in culture by name, failing for unknown names.
    pub fn require(name: &str) -> SvoResult<&'static Culture> {
        Self::get(name).ok_or_else(|| SvoError::UnknownCulture {
            name: name.to_string(),
        })
    }

    /// All built-in cultures, invariant first.
    pub fn all() -> &'static [&'static Culture] {
        data::ALL
    }

    /// The culture name, e.g. `nl-BE`; empty for the invariant culture.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The English display name of the culture.
    pub fn english_name(&self) -> &'static str {
        self.english_name
    }

    /// The two letter language part of the name.
    pub fn language(&self) -> &'static str {
        self.name.split('-').next().unwrap_or_default()
    }

    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    pub fn date_separator(&self) -> &'static str {
        self.date_separator
    }

    pub fn short_date_pattern(&self) -> &'static str {
        self.short_date_pattern
    }

    pub fn long_date_pattern(&self) -> &'static str {
        self.long_date_pattern
    }

    pub fn short_time_pattern(&self) -> &'static str {
        self.short_time_pattern
    }

    pub fn long_time_pattern(&self) -> &'static str {
        self.long_time_pattern
    }

    pub fn am_designator(&self) -> &'static str {
        self.am_designator
    }

    pub fn pm_designator(&self) -> &'static str {
        self.pm_designator
    }

    /// Full month name for a 1-based month number.
    pub fn month_name(&self, month: u32) -> Option<&'static str> {
        month_slot(month).map(|i| self.month_names[i])
    }

    /// Abbreviated month name for a 1-based month number.
    pub fn month_abbreviation(&self, month: u32) -> Option<&'static str> {
        month_slot(month).map(|i| self.month_abbreviations[i])
    }

    /// Full day name, Sunday being 0.
    pub fn day_name(&self, day_from_sunday: u32) -> &'static str {
        self.day_names[(day_from_sunday % 7) as usize]
    }

    /// Abbreviated day name, Sunday being 0.
    pub fn day_abbreviation(&self, day_from_sunday: u32) -> &'static str {
        self.day_abbreviations[(day_from_sunday % 7) as usize]
    }

    /// Resolve a full or abbreviated month name to its 1-based number.
    ///
    /// Matching is case-insensitive and ignores a trailing abbreviation dot.
    pub fn month_from_name(&self, text: &str) -> Option<u32> {
        let wanted = fold(text.trim().trim_end_matches('.'));
        if wanted.is_empty() {
            return None;
        }
        self.month_names
            .iter()
            .position(|name| fold(name) == wanted)
            .or_else(|| {
                self.month_abbreviations
                    .iter()
                    .position(|name| fold(name.trim_end_matches('.')) == wanted)
            })
            .map(|i| i as u32 + 1)
    }

    /// Resolve a full or abbreviated day name to its index from Sunday.
    pub fn day_from_name(&self, text: &str) -> Option<u32> {
        let wanted = fold(text.trim().trim_end_matches('.'));
        self.day_names
            .iter()
            .position(|name| fold(name) == wanted)
            .or_else(|| {
                self.day_abbreviations
                    .iter()
                    .position(|name| fold(name.trim_end_matches('.')) == wanted)
            })
            .map(|i| i as u32)
    }

    /// Localized display name of a currency, if this culture has one.
    pub fn currency_display_name(&self, iso_code: &str) -> Option<&'static str> {
        self.currency_names
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(iso_code))
            .map(|(_, name)| *name)
    }

    /// Resolve a localized currency display name to its ISO 4217 alpha code.
    pub fn currency_from_display_name(&self, text: &str) -> Option<&'static str> {
        let wanted = fold(text.trim());
        self.currency_names
            .iter()
            .find(|(_, name)| fold(name) == wanted)
            .map(|(code, _)| *code)
    }
}

impl PartialEq for Culture {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Culture {}

impl std::fmt::Display for Culture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_invariant() {
            f.write_str("(invariant)")
        } else {
            f.write_str(self.name)
        }
    }
}

fn month_slot(month: u32) -> Option<usize> {
    (1..=12).contains(&month).then(|| month as usize - 1)
}

/// Case folding used for all culture-sensitive name lookups.
pub(crate) fn fold(text: &str) -> String {
    text.to_lowercase()
}
