//! Formatting infrastructure shared by all value objects.
//!
//! - [`number`] formats and parses culture-sensitive numbers.
//! - `date_pattern` tokenizes date and time patterns for both directions.
//! - [`FormatProvider`] selects between culture-driven formatting and an
//!   application supplied [`CustomFormatter`], which preempts all built-in
//!   formatting when present.

pub(crate) mod date_pattern;
pub mod number;

use crate::culture::{self, Culture};
use std::any::Any;
use std::fmt;

/// Application-defined display logic.
///
/// A custom formatter receives the value and the requested format string and
/// produces the output directly; built-in formatting is skipped entirely.
pub trait CustomFormatter: Send + Sync {
    fn format(&self, format: &str, value: &dyn Any, type_name: &'static str) -> String;
}

impl<F> CustomFormatter for F
where
    F: Fn(&str, &dyn Any, &'static str) -> String + Send + Sync,
{
    fn format(&self, format: &str, value: &dyn Any, type_name: &'static str) -> String {
        self(format, value, type_name)
    }
}

/// Where formatting conventions come from.
#[derive(Clone, Copy)]
pub enum FormatProvider<'a> {
    Culture(&'a Culture),
    Custom(&'a dyn CustomFormatter),
}

impl FormatProvider<'static> {
    /// The ambient culture of the current thread.
    pub fn current() -> Self {
        FormatProvider::Culture(culture::current())
    }
}

impl FormatProvider<'_> {
    /// The culture to use for built-in formatting.
    ///
    /// Custom formatters carry no culture, so the ambient one applies.
    pub fn culture(&self) -> &Culture {
        match self {
            FormatProvider::Culture(culture) => culture,
            FormatProvider::Custom(_) => culture::current(),
        }
    }
}

impl<'a> From<&'a Culture> for FormatProvider<'a> {
    fn from(culture: &'a Culture) -> Self {
        FormatProvider::Culture(culture)
    }
}

impl fmt::Debug for FormatProvider<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatProvider::Culture(culture) => f.debug_tuple("Culture").field(&culture.name()).finish(),
            FormatProvider::Custom(_) => f.write_str("Custom"),
        }
    }
}
