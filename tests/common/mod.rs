//! Common test utilities for value object testing.

use svo::culture::Culture;

pub mod fixtures;

/// Route `log` output through the test harness; safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A built-in culture by name.
pub fn culture(name: &str) -> &'static Culture {
    Culture::get(name).unwrap_or_else(|| panic!("culture {name} should be built in"))
}

pub fn invariant() -> &'static Culture {
    Culture::invariant()
}

/// Assert that a value survives formatting with its default format and
/// parsing back in the invariant culture.
#[macro_export]
macro_rules! assert_text_round_trip {
    ($value:expr) => {{
        fn parse_as<T: svo::svo::Parsable>(_like: &T, text: &str) -> svo::SvoResult<T> {
            T::parse_with(text, svo::culture::Culture::invariant())
        }

        let value = $value;
        let text = svo::svo::Formattable::to_text(&value);
        let parsed = parse_as(&value, text.as_str())
            .unwrap_or_else(|e| panic!("'{}' should parse back: {}", text, e));
        assert_eq!(parsed, value, "text round trip through '{}'", text);
    }};
}
