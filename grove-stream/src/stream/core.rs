// The stream value is deliberately tiny: either the shared empty stream,
// or a reference counted state constructor. Cloning never copies elements,
// and every call to `cursor` produces independent state.

use std::fmt;
use std::rc::Rc;

use crate::cursor::{BoxedCursor, Cursor, EmptyCursor, FnCursor, Fused, IterCursor, SliceCursor};
use crate::step::Step;

use super::iter::StreamIter;

type Start<'a, T> = Rc<dyn Fn() -> BoxedCursor<'a, T> + 'a>;

enum Inner<'a, T> {
    Empty,
    Lazy(Start<'a, T>),
}

/// A lazy, immutable sequence of `T`.
///
/// Every consuming operation (`to_vec`, `reduce`, `find`, iteration, ...)
/// starts from a fresh cursor, so a stream can be consumed any number of
/// times. Nothing is computed before a consuming operation asks for it.
pub struct Stream<'a, T> {
    inner: Inner<'a, T>,
}

impl<T> Clone for Stream<'_, T> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            Inner::Empty => Inner::Empty,
            Inner::Lazy(start) => Inner::Lazy(start.clone()),
        };
        Self { inner }
    }
}

impl<T> Default for Stream<'_, T> {
    fn default() -> Self {
        Self {
            inner: Inner::Empty,
        }
    }
}

impl<T> fmt::Debug for Stream<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Empty => f.write_str("Stream::Empty"),
            Inner::Lazy(_) => f.write_str("Stream::Lazy(..)"),
        }
    }
}

impl<'a, T> Stream<'a, T>
where
    T: 'a,
{
    /// The empty stream.
    ///
    /// This is the shared empty instance: it holds no allocation and its
    /// cursor is exhausted immediately.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a stream from a cursor constructor.
    ///
    /// `start` is called once per iteration session and must hand out
    /// fresh, unshared state each time. The cursor is not stepped again
    /// after it first returns [`Step::Done`], even if it would resume.
    pub fn from_cursor_fn<C, F>(start: F) -> Self
    where
        C: Cursor<Item = T> + 'a,
        F: Fn() -> C + 'a,
    {
        Self::from_stable_cursor_fn(move || Fused::new(start()))
    }

    /// Like `from_cursor_fn`, for cursors known to stay exhausted.
    pub(crate) fn from_stable_cursor_fn<C, F>(start: F) -> Self
    where
        C: Cursor<Item = T> + 'a,
        F: Fn() -> C + 'a,
    {
        Self {
            inner: Inner::Lazy(Rc::new(move || Box::new(start()) as BoxedCursor<'a, T>)),
        }
    }

    /// Build a stream from a state constructor and a step function.
    ///
    /// `init` creates the private state of one iteration session; `step`
    /// advances that state. After `step` returns [`Step::Done`] it is not
    /// called again for that session.
    pub fn from_step_fn<S, I, F>(init: I, step: F) -> Self
    where
        S: 'a,
        I: Fn() -> S + 'a,
        F: Fn(&mut S) -> Step<T> + 'a,
    {
        let step = Rc::new(step);
        Self::from_stable_cursor_fn(move || {
            let mut state = init();
            let step = step.clone();
            FnCursor::new(move || (*step)(&mut state))
        })
    }

    /// Build a stream over an iterator that can be recreated at will.
    ///
    /// `make` is called once per iteration session.
    pub fn from_iter_fn<I, F>(make: F) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
        F: Fn() -> I + 'a,
    {
        Self::from_stable_cursor_fn(move || IterCursor::new(make().into_iter()))
    }

    /// Build a stream over shared, indexable storage.
    pub fn from_shared(items: Rc<[T]>) -> Self
    where
        T: Clone,
    {
        if items.is_empty() {
            return Self::empty();
        }
        Self::from_stable_cursor_fn(move || SliceCursor::new(items.clone()))
    }

    /// A stream with exactly one element.
    pub fn once(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_stable_cursor_fn(move || IterCursor::new(std::iter::once(value.clone())))
    }

    /// Begin an iteration session.
    ///
    /// The returned cursor owns its state exclusively; advancing it never
    /// affects any other cursor over this stream.
    pub fn cursor(&self) -> BoxedCursor<'a, T> {
        match &self.inner {
            Inner::Empty => Box::new(EmptyCursor::new()),
            Inner::Lazy(start) => (**start)(),
        }
    }

    /// Begin an iteration session as a native iterator.
    pub fn iter(&self) -> StreamIter<'a, T> {
        StreamIter::new(self.cursor())
    }

    /// Whether the stream yields no elements at all.
    ///
    /// This takes at most a single step on a throwaway cursor.
    pub fn is_empty(&self) -> bool {
        match &self.inner {
            Inner::Empty => true,
            Inner::Lazy(_) => self.cursor().step().is_done(),
        }
    }

    /// True only for the shared empty instance, without stepping.
    ///
    /// Combinators use this to skip building wrappers around nothing.
    #[inline]
    pub(crate) fn is_known_empty(&self) -> bool {
        matches!(self.inner, Inner::Empty)
    }
}

impl<'a, T> FromIterator<T> for Stream<'a, T>
where
    T: Clone + 'a,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_shared(iter.into_iter().collect::<Vec<_>>().into())
    }
}

impl<'a, T> IntoIterator for &Stream<'a, T>
where
    T: 'a,
{
    type Item = T;
    type IntoIter = StreamIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_empty_is_empty() {
        let s: Stream<i32> = Stream::empty();
        assert!(s.is_empty());
        assert!(s.cursor().step().is_done());
    }

    #[test]
    fn test_is_empty_takes_one_step() {
        let steps = Rc::new(Cell::new(0));
        let counted = steps.clone();
        let s = Stream::from_step_fn(
            || 0,
            move |n: &mut i32| {
                counted.set(counted.get() + 1);
                *n += 1;
                Step::Yield(*n)
            },
        );
        assert!(!s.is_empty());
        assert_eq!(steps.get(), 1);
    }

    #[test]
    fn test_cursors_are_independent() {
        let s = Stream::from_shared(Rc::from(vec![1, 2, 3]));
        let mut a = s.cursor();
        let mut b = s.cursor();
        assert_eq!(a.step(), Step::Yield(1));
        assert_eq!(a.step(), Step::Yield(2));
        assert_eq!(b.step(), Step::Yield(1));
        assert_eq!(a.step(), Step::Yield(3));
        assert_eq!(b.step(), Step::Yield(2));
    }

    #[test]
    fn test_termination_is_stable() {
        let s = Stream::from_step_fn(
            || 0,
            |n: &mut i32| {
                *n += 1;
                // would restart after the first exhaustion if called again
                if *n == 2 {
                    Step::Done
                } else {
                    Step::Yield(*n)
                }
            },
        );
        let mut cursor = s.cursor();
        assert_eq!(cursor.step(), Step::Yield(1));
        assert_eq!(cursor.step(), Step::Done);
        assert_eq!(cursor.step(), Step::Done);
        assert_eq!(cursor.step(), Step::Done);
    }

    // yields `1`, reports `Done`, then starts over
    struct Flaky {
        calls: u32,
    }

    impl Cursor for Flaky {
        type Item = u32;

        fn step(&mut self) -> Step<u32> {
            self.calls += 1;
            if self.calls % 2 == 0 {
                Step::Done
            } else {
                Step::Yield(1)
            }
        }
    }

    #[test]
    fn test_from_cursor_fn_stays_done() {
        let s = Stream::from_cursor_fn(|| Flaky { calls: 0 });
        let mut cursor = s.cursor();
        assert_eq!(cursor.step(), Step::Yield(1));
        assert_eq!(cursor.step(), Step::Done);
        assert_eq!(cursor.step(), Step::Done);
        assert!(!cursor.advance_by(1));
        assert_eq!(cursor.step(), Step::Done);

        let mut iter = s.iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(s.map(|n| n * 2).to_vec(), vec![2]);
    }

    #[test]
    fn test_from_iter_fn_recreates_iterator() {
        let s = Stream::from_iter_fn(|| 1..4);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_nothing_runs_before_consumption() {
        let made = Rc::new(Cell::new(0));
        let counted = made.clone();
        let s = Stream::from_iter_fn(move || {
            counted.set(counted.get() + 1);
            vec![1, 2]
        });
        let _mapped = s.clone();
        assert_eq!(made.get(), 0);
        let _ = s.iter().count();
        assert_eq!(made.get(), 1);
    }
}
