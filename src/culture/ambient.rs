//! Thread-local ambient culture.
//!
//! Each thread starts out with the process default culture (invariant unless
//! configured otherwise). [`CultureScope`] swaps the ambient culture of the
//! current thread and restores the previous one when dropped, so operations
//! on other threads never observe the swap.

use super::Culture;
use log::debug;
use std::cell::Cell;
use std::marker::PhantomData;
use std::sync::RwLock;

static PROCESS_DEFAULT: RwLock<Option<&'static Culture>> = RwLock::new(None);

thread_local! {
    static CURRENT: Cell<Option<&'static Culture>> = const { Cell::new(None) };
}

/// The culture new threads start with.
pub fn process_default() -> &'static Culture {
    let guard = match PROCESS_DEFAULT.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    (*guard).unwrap_or_else(Culture::invariant)
}

/// Replace the process default culture.
///
/// Threads that already swapped their ambient culture keep it.
pub fn set_process_default(culture: &'static Culture) {
    let mut guard = match PROCESS_DEFAULT.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    debug!("Process default culture set to {}", culture);
    *guard = Some(culture);
}

/// The ambient culture of the current thread.
pub fn current() -> &'static Culture {
    CURRENT.with(Cell::get).unwrap_or_else(process_default)
}

/// Set the ambient culture of the current thread.
///
/// Prefer [`CultureScope`], which restores the previous culture.
pub fn set_current(culture: &'static Culture) {
    CURRENT.with(|cell| cell.set(Some(culture)));
}

/// Swaps the ambient culture of the current thread for its lifetime.
#[must_use = "the culture is restored as soon as the scope is dropped"]
#[derive(Debug)]
pub struct CultureScope {
    previous: Option<&'static Culture>,
    // Restoring must happen on the thread that swapped.
    _not_send: PhantomData<*const ()>,
}

impl CultureScope {
    pub fn new(culture: &'static Culture) -> Self {
        let previous = CURRENT.with(|cell| cell.replace(Some(culture)));
        debug!("Ambient culture swapped to {}", culture);
        Self {
            previous,
            _not_send: PhantomData,
        }
    }
}

impl Drop for CultureScope {
    fn drop(&mut self) {
        CURRENT.with(|cell| cell.set(self.previous));
        debug!("Ambient culture restored to {}", current());
    }
}
