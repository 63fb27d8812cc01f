use crate::cursor::{BoxedCursor, Cursor};
use crate::step::Step;

use super::core::Stream;

/// An element that is either a plain value or a nested stream.
///
/// This is what `flat` and `flat_map` flatten: nested streams are spliced
/// into the surrounding stream, plain values pass through.
pub enum Nested<'a, T> {
    Value(T),
    Stream(Stream<'a, Nested<'a, T>>),
}

impl<T> Clone for Nested<'_, T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Nested::Value(value) => Nested::Value(value.clone()),
            Nested::Stream(stream) => Nested::Stream(stream.clone()),
        }
    }
}

impl<T> std::fmt::Debug for Nested<'_, T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Nested::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Nested::Stream(stream) => f.debug_tuple("Stream").field(stream).finish(),
        }
    }
}

impl<'a, T> Nested<'a, T>
where
    T: 'a,
{
    pub fn value(value: T) -> Self {
        Nested::Value(value)
    }

    /// A nested stream of plain values.
    pub fn values(stream: &Stream<'a, T>) -> Self {
        Nested::Stream(stream.map(Nested::Value))
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, Nested::Stream(_))
    }

    /// The plain value, or `None` for a nested stream.
    pub fn into_value(self) -> Option<T> {
        match self {
            Nested::Value(value) => Some(value),
            Nested::Stream(_) => None,
        }
    }
}

impl<'a, T> Stream<'a, T>
where
    T: 'a,
{
    /// Map every element to a value or a nested stream, and splice the
    /// nested streams in place.
    ///
    /// A nested stream is drained completely, in order, before the next
    /// element of `self` is pulled. Elements of a nested stream are yielded
    /// as they are, so nesting deeper than one level survives.
    pub fn flat_map<U, F>(&self, f: F) -> Stream<'a, Nested<'a, U>>
    where
        U: 'a,
        F: Fn(T) -> Nested<'a, U> + 'a,
    {
        self.map(f).flat(1)
    }
}

impl<'a, T> Stream<'a, Nested<'a, T>>
where
    T: 'a,
{
    /// Splice nested streams into this one, up to `depth` levels deep.
    ///
    /// A depth of zero returns the stream unchanged. Streams nested deeper
    /// than `depth` are yielded as they are. One cursor tracks every open
    /// level, so a large depth costs nothing up front.
    pub fn flat(&self, depth: usize) -> Self {
        if depth == 0 {
            return self.clone();
        }
        if self.is_known_empty() {
            return Stream::empty();
        }
        let source = self.clone();
        Stream::from_stable_cursor_fn(move || Flat {
            stack: vec![(source.cursor(), 0)],
            depth,
        })
    }

    /// The plain values, after flattening completely.
    ///
    /// Nesting is resolved with an explicit stack, so arbitrarily deep
    /// nesting does not grow the call stack.
    pub fn leaves(&self) -> Stream<'a, T> {
        let source = self.clone();
        Stream::from_stable_cursor_fn(move || Leaves {
            stack: vec![source.cursor()],
        })
    }
}

struct Flat<'a, T> {
    // each open cursor with its nesting level, the source being level 0
    stack: Vec<(BoxedCursor<'a, Nested<'a, T>>, usize)>,
    depth: usize,
}

impl<'a, T> Cursor for Flat<'a, T>
where
    T: 'a,
{
    type Item = Nested<'a, T>;

    fn step(&mut self) -> Step<Nested<'a, T>> {
        while let Some((top, level)) = self.stack.last_mut() {
            let level = *level;
            match top.step() {
                Step::Yield(Nested::Stream(stream)) if level < self.depth => {
                    self.stack.push((stream.cursor(), level + 1))
                }
                Step::Yield(element) => return Step::Yield(element),
                Step::Done => {
                    self.stack.pop();
                }
            }
        }
        Step::DONE
    }
}

struct Leaves<'a, T> {
    stack: Vec<BoxedCursor<'a, Nested<'a, T>>>,
}

impl<'a, T> Cursor for Leaves<'a, T>
where
    T: 'a,
{
    type Item = T;

    fn step(&mut self) -> Step<T> {
        while let Some(top) = self.stack.last_mut() {
            match top.step() {
                Step::Yield(Nested::Value(value)) => return Step::Yield(value),
                Step::Yield(Nested::Stream(stream)) => self.stack.push(stream.cursor()),
                Step::Done => {
                    self.stack.pop();
                }
            }
        }
        Step::DONE
    }
}
