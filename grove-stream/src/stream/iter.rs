use std::iter::FusedIterator;

use crate::cursor::{BoxedCursor, Cursor};

/// A native iterator over one iteration session of a stream.
pub struct StreamIter<'a, T> {
    cursor: BoxedCursor<'a, T>,
}

impl<'a, T> StreamIter<'a, T> {
    pub(crate) fn new(cursor: BoxedCursor<'a, T>) -> Self {
        Self { cursor }
    }
}

impl<T> Iterator for StreamIter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.cursor.step().into_option()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        if self.cursor.advance_by(n) {
            self.next()
        } else {
            None
        }
    }
}

// every stream hands out cursors that stay exhausted, see `Stream::from_cursor_fn`
impl<T> FusedIterator for StreamIter<'_, T> {}
