use thiserror::Error;

/// Errors from extracting a fixed number of elements out of a stream.
///
/// The engine itself never fails; errors raised by caller-supplied
/// callbacks are passed through unchanged and never wrapped in this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Expected an element, but the stream is empty.
    #[error("expected exactly one element, but the stream is empty")]
    Empty,
    /// Expected at most one element, but the stream has more.
    #[error("expected at most one element, but the stream has more")]
    MoreThanOne,
}

pub type Result<T> = std::result::Result<T, Error>;
