//! A stream is a lazy, re-iterable sequence of elements.
//!
//! A stream value only describes a computation: a way to create fresh
//! iteration state, and a way to step that state. Combinators wrap one
//! stream into another without running anything; work happens when a
//! consuming operation drives a cursor.

mod combinator;
mod consume;
mod core;
mod creation;
mod iter;
mod join;
mod nested;

pub use self::core::Stream;
pub use creation::{stream, stream_all, IntoStream};
pub use iter::StreamIter;
pub use join::{JoinText, ABSENT_TEXT, OPAQUE_TEXT};
pub use nested::Nested;
