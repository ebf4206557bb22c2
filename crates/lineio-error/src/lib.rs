//! Explicit, owned error values for the lineio stack.
//!
//! Failures are values that move through call chains rather than being
//! thrown. Two equivalent forms are supported:
//!
//! - `Result<T, Error>` returns, propagated with `?` and annotated with
//!   [`ResultExt::prefix_err`];
//! - [`ErrorSlot`] out-parameters (`Option<&mut ErrorSlot>`, where `None` is
//!   the null sink), manipulated with [`set`], [`propagate`],
//!   [`propagate_prefixed`], [`clear`] and [`prefix`].
//!
//! # Ownership Rules
//!
//! 1. A slot holds at most one error. Storing into an occupied slot is a
//!    caller bug (debug assertion), not a reportable condition.
//! 2. `propagate` moves; the source is always left empty.
//! 3. An error is only discarded explicitly: by `clear`, or by propagating
//!    into the null sink.

pub mod error;
pub mod slot;

pub use error::{codes, Error, Result, FORMAT_FAILED_MESSAGE};
pub use slot::{clear, prefix, propagate, propagate_prefixed, set, ErrorSlot, ResultExt};
