//! Error slots: the out-parameter form of error reporting.
//!
//! A slot holds at most one [`Error`]. Functions that report through a slot
//! take `Option<&mut ErrorSlot>`; passing `None` is the null sink and means
//! the caller does not want the error. Storing into an occupied slot is a
//! caller bug and trips a debug assertion.

use std::fmt;

use crate::error::{Error, Result};

/// A cell holding zero or one owned error.
#[derive(Debug, Default)]
pub struct ErrorSlot {
    error: Option<Error>,
}

impl ErrorSlot {
    /// An empty slot.
    pub const fn new() -> Self {
        Self { error: None }
    }

    /// Returns `true` if no error is held.
    pub fn is_empty(&self) -> bool {
        self.error.is_none()
    }

    /// Borrow the held error, if any.
    pub fn get(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Move the held error out, leaving the slot empty.
    pub fn take(&mut self) -> Option<Error> {
        self.error.take()
    }

    /// Store an error. The slot must be empty.
    pub fn store(&mut self, error: Error) {
        debug_assert!(
            self.error.is_none(),
            "error slot already holds: {:?}",
            self.error
        );
        self.error = Some(error);
    }

    /// Consume the slot, yielding the held error.
    pub fn into_inner(self) -> Option<Error> {
        self.error
    }

    /// `Err` if the slot holds an error, `Ok(())` otherwise.
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl From<Error> for ErrorSlot {
    fn from(error: Error) -> Self {
        Self { error: Some(error) }
    }
}

/// Construct an error and store it in `slot`. No-op for the null sink.
pub fn set(slot: Option<&mut ErrorSlot>, code: i32, message: impl Into<String>) {
    if let Some(slot) = slot {
        slot.store(Error::new(code, message));
    }
}

/// Move the error held by `src` into `dest`, leaving `src` empty.
///
/// With a null `dest` the error is dropped instead.
pub fn propagate(dest: Option<&mut ErrorSlot>, src: &mut ErrorSlot) {
    debug_assert!(!src.is_empty(), "propagate from an empty error slot");
    let Some(error) = src.take() else {
        return;
    };
    if let Some(dest) = dest {
        dest.store(error);
    }
}

/// [`propagate`], then prepend `prefix` to the relocated message.
pub fn propagate_prefixed(
    dest: Option<&mut ErrorSlot>,
    src: &mut ErrorSlot,
    prefix_text: impl fmt::Display,
) {
    match dest {
        Some(dest) => {
            propagate(Some(&mut *dest), src);
            prefix(Some(dest), prefix_text);
        }
        None => propagate(None, src),
    }
}

/// Drop the held error, if any.
pub fn clear(slot: Option<&mut ErrorSlot>) {
    if let Some(slot) = slot {
        slot.error = None;
    }
}

/// Prepend `prefix` to the held error's message. No-op on empty or null slots.
pub fn prefix(slot: Option<&mut ErrorSlot>, prefix: impl fmt::Display) {
    if let Some(error) = slot.and_then(|slot| slot.error.as_mut()) {
        error.prefix(prefix);
    }
}

/// Bridges between `Result` chaining and slot reporting.
pub trait ResultExt<T> {
    /// Store an `Err` into `slot` (or drop it for the null sink) and return
    /// the success value, if any.
    fn report(self, slot: Option<&mut ErrorSlot>) -> Option<T>;

    /// Prepend `prefix` to the message of an `Err`.
    fn prefix_err(self, prefix: impl fmt::Display) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn report(self, slot: Option<&mut ErrorSlot>) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                if let Some(slot) = slot {
                    slot.store(error);
                }
                None
            }
        }
    }

    fn prefix_err(self, prefix: impl fmt::Display) -> Result<T> {
        self.map_err(|error| error.with_prefix(prefix))
    }
}
