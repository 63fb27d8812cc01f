use std::iter::Fuse;
use std::rc::Rc;

use crate::step::Step;

/// A cursor behind dynamic dispatch, as handed out by [`crate::Stream::cursor`].
pub type BoxedCursor<'a, T> = Box<dyn Cursor<Item = T> + 'a>;

/// Private iteration state of a single pass over a stream.
///
/// A cursor is created fresh by [`crate::Stream::cursor`] and owned by
/// whoever is iterating. Advancing it is the only way to observe elements.
///
/// Implementations must keep returning [`Step::Done`] once they have
/// returned it once.
pub trait Cursor {
    type Item;

    /// Advance the cursor by one element.
    fn step(&mut self) -> Step<Self::Item>;

    /// Skip up to `n` elements, returning `false` if the cursor ran out
    /// before all of them were skipped.
    fn advance_by(&mut self, n: usize) -> bool {
        for _ in 0..n {
            if self.step().is_done() {
                return false;
            }
        }
        true
    }
}

impl<C> Cursor for Box<C>
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    #[inline]
    fn step(&mut self) -> Step<Self::Item> {
        (**self).step()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) -> bool {
        (**self).advance_by(n)
    }
}

/// A cursor that is exhausted from the start.
#[derive(Debug)]
pub(crate) struct EmptyCursor<T> {
    _marker: std::marker::PhantomData<T>,
}

impl<T> EmptyCursor<T> {
    pub(crate) fn new() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    #[inline]
    fn step(&mut self) -> Step<T> {
        Step::DONE
    }
}

/// A cursor driven by a native iterator.
///
/// The iterator is fused so termination stays stable even for iterators
/// that would resume after returning `None`.
pub(crate) struct IterCursor<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
}

impl<I> IterCursor<I>
where
    I: Iterator,
{
    pub(crate) fn new(iter: I) -> Self {
        Self { iter: iter.fuse() }
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator,
{
    type Item = I::Item;

    #[inline]
    fn step(&mut self) -> Step<I::Item> {
        self.iter.next().into()
    }
}

/// A cursor over shared, indexable storage.
pub(crate) struct SliceCursor<T> {
    items: Rc<[T]>,
    index: usize,
}

impl<T> SliceCursor<T> {
    pub(crate) fn new(items: Rc<[T]>) -> Self {
        Self { items, index: 0 }
    }
}

impl<T> Cursor for SliceCursor<T>
where
    T: Clone,
{
    type Item = T;

    #[inline]
    fn step(&mut self) -> Step<T> {
        match self.items.get(self.index) {
            Some(item) => {
                self.index += 1;
                Step::Yield(item.clone())
            }
            None => Step::DONE,
        }
    }

    fn advance_by(&mut self, n: usize) -> bool {
        let remaining = self.items.len() - self.index;
        if n <= remaining {
            self.index += n;
            true
        } else {
            self.index = self.items.len();
            false
        }
    }
}

/// Wraps a caller supplied cursor so that it stays exhausted once it has
/// returned [`Step::Done`].
pub(crate) struct Fused<C> {
    cursor: C,
    done: bool,
}

impl<C> Fused<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Self {
            cursor,
            done: false,
        }
    }
}

impl<C> Cursor for Fused<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn step(&mut self) -> Step<C::Item> {
        if self.done {
            return Step::DONE;
        }
        let step = self.cursor.step();
        if step.is_done() {
            self.done = true;
        }
        step
    }

    fn advance_by(&mut self, n: usize) -> bool {
        if self.done {
            return n == 0;
        }
        let advanced = self.cursor.advance_by(n);
        if !advanced {
            self.done = true;
        }
        advanced
    }
}

/// A cursor built from a bare step closure over its own captured state.
pub(crate) struct FnCursor<F> {
    step: F,
    done: bool,
}

impl<F> FnCursor<F> {
    pub(crate) fn new(step: F) -> Self {
        Self { step, done: false }
    }
}

impl<T, F> Cursor for FnCursor<F>
where
    F: FnMut() -> Step<T>,
{
    type Item = T;

    fn step(&mut self) -> Step<T> {
        if self.done {
            return Step::DONE;
        }
        let step = (self.step)();
        if step.is_done() {
            self.done = true;
        }
        step
    }
}
