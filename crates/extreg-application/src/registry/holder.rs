//! Lazy singleton holder

use std::fmt;

use once_cell::sync::OnceCell;

/// A value created at most once, on first successful request
///
/// Concurrent first requests are serialised: one caller runs the
/// initialiser, the others block until it finishes and then observe the
/// same value. A failed initialisation leaves the holder empty, so a later
/// request runs the initialiser again.
pub struct Holder<T> {
    cell: OnceCell<T>,
}

impl<T> Holder<T> {
    /// An empty holder
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// The value, if it has been created
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// The value, creating it with `init` if the holder is empty
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.cell.get_or_try_init(init)
    }

    /// Whether the value has been created
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for Holder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Holder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Holder").field("value", &self.get()).finish()
    }
}
