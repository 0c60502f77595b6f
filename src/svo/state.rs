//! The Empty / Unknown / Ordinary tri-state.

/// Explicit tri-state representation used by value objects that distinguish
/// "no value supplied" from "a value exists but is not known".
///
/// The variant order defines the ordering: Empty sorts first, Unknown right
/// after it, followed by all ordinary values in their natural order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State<T> {
    #[default]
    Empty,
    Unknown,
    Ordinary(T),
}

impl<T> State<T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, State::Empty)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, State::Unknown)
    }

    pub fn is_ordinary(&self) -> bool {
        matches!(self, State::Ordinary(_))
    }

    /// The ordinary value, if any.
    pub fn ordinary(&self) -> Option<&T> {
        match self {
            State::Ordinary(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> State<U> {
        match self {
            State::Empty => State::Empty,
            State::Unknown => State::Unknown,
            State::Ordinary(value) => State::Ordinary(f(value)),
        }
    }
}
