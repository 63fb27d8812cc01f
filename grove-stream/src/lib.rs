//! Lazy, composable streams and pre-order tree traversal.
//!
//! A [`Stream`] pairs a way to create fresh iteration state with a way to
//! step it. Combinators such as [`Stream::map`], [`Stream::filter`] or
//! [`Stream::concat`] wrap one stream into another without evaluating
//! anything; consuming operations such as [`Stream::to_vec`],
//! [`Stream::reduce`] or plain iteration drive a private [`Cursor`] once.
//!
//! [`TreeStream`] walks the descendants of a node in pre-order and lets the
//! caller prune the subtree of the node just produced:
//!
//! ```
//! use grove_stream::TreeStream;
//!
//! // 1 -> [2, 3], 2 -> [4]
//! let tree = TreeStream::new(1, |n: &i32| match n {
//!     1 => vec![2, 3],
//!     2 => vec![4],
//!     _ => vec![],
//! });
//! assert_eq!(tree.stream().to_vec(), vec![2, 4, 3]);
//!
//! let mut iter = tree.iter();
//! assert_eq!(iter.next(), Some(2));
//! iter.prune();
//! assert_eq!(iter.collect::<Vec<_>>(), vec![3]);
//! ```

mod cursor;
pub mod error;
pub mod reduction;
mod step;
mod stream;
mod tree;

pub use cursor::{BoxedCursor, Cursor};
pub use step::Step;
pub use stream::{
    stream, stream_all, IntoStream, JoinText, Nested, Stream, StreamIter, ABSENT_TEXT, OPAQUE_TEXT,
};
pub use tree::{TreeCursor, TreeIter, TreeStream};
