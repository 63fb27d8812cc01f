use std::hash::Hash;
use std::rc::Rc;

use ahash::{HashSet, HashSetExt};

use crate::cursor::{BoxedCursor, Cursor};
use crate::step::Step;

use super::core::Stream;

impl<'a, T> Stream<'a, T>
where
    T: 'a,
{
    /// Lazily apply `f` to every element.
    ///
    /// `f` runs when an element is pulled, and runs again on every new
    /// iteration session; results are not memoized.
    pub fn map<U, F>(&self, f: F) -> Stream<'a, U>
    where
        U: 'a,
        F: Fn(T) -> U + 'a,
    {
        if self.is_known_empty() {
            return Stream::empty();
        }
        let source = self.clone();
        let f = Rc::new(f);
        Stream::from_stable_cursor_fn(move || Map {
            source: source.cursor(),
            f: f.clone(),
        })
    }

    /// Lazily keep only the elements for which `predicate` holds.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        if self.is_known_empty() {
            return Stream::empty();
        }
        let source = self.clone();
        let predicate = Rc::new(predicate);
        Stream::from_stable_cursor_fn(move || Filter {
            source: source.cursor(),
            predicate: predicate.clone(),
        })
    }

    /// Map and filter in one pass: elements for which `f` returns `None`
    /// are dropped.
    pub fn filter_map<U, F>(&self, f: F) -> Stream<'a, U>
    where
        U: 'a,
        F: Fn(T) -> Option<U> + 'a,
    {
        if self.is_known_empty() {
            return Stream::empty();
        }
        let source = self.clone();
        let f = Rc::new(f);
        Stream::from_stable_cursor_fn(move || FilterMap {
            source: source.cursor(),
            f: f.clone(),
        })
    }

    /// All elements of `self` followed by all elements of `other`.
    ///
    /// `other` is not touched (not even to create its cursor) until `self`
    /// is exhausted.
    pub fn concat(&self, other: &Stream<'a, T>) -> Self {
        if self.is_known_empty() {
            return other.clone();
        }
        if other.is_known_empty() {
            return self.clone();
        }
        let first = self.clone();
        let second = other.clone();
        Stream::from_stable_cursor_fn(move || Concat {
            first: Some(first.cursor()),
            second: second.clone(),
            rest: None,
        })
    }

    /// Everything but the first `skip` elements.
    ///
    /// If there are fewer than `skip` elements the result is empty.
    pub fn tail(&self, skip: usize) -> Self {
        if skip == 0 || self.is_known_empty() {
            return self.clone();
        }
        let source = self.clone();
        Stream::from_stable_cursor_fn(move || Tail {
            source: source.cursor(),
            skip,
        })
    }

    /// At most the first `max` elements.
    ///
    /// The source is never stepped past its `max`-th element.
    pub fn limit(&self, max: usize) -> Self {
        if max == 0 || self.is_known_empty() {
            return Stream::empty();
        }
        let source = self.clone();
        Stream::from_stable_cursor_fn(move || Limit {
            source: source.cursor(),
            remaining: max,
        })
    }

    /// Drop elements that are equal to an earlier element.
    ///
    /// Distinctness is tracked per iteration session.
    pub fn distinct(&self) -> Self
    where
        T: Hash + Eq + Clone,
    {
        self.distinct_by(T::clone)
    }

    /// Drop elements whose key was already produced by an earlier element
    /// in the same iteration session.
    pub fn distinct_by<K, F>(&self, key: F) -> Self
    where
        K: Hash + Eq + 'a,
        F: Fn(&T) -> K + 'a,
    {
        if self.is_known_empty() {
            return Stream::empty();
        }
        let source = self.clone();
        let key = Rc::new(key);
        Stream::from_stable_cursor_fn(move || Distinct {
            source: source.cursor(),
            key: key.clone(),
            seen: HashSet::new(),
        })
    }

    /// Drop the elements that also occur in `other`.
    pub fn exclude(&self, other: &Stream<'a, T>) -> Self
    where
        T: Hash + Eq + Clone,
    {
        self.exclude_by(other, T::clone)
    }

    /// Drop the elements whose key is also the key of an element of
    /// `other`.
    ///
    /// `other` is drained once per iteration session, at the first step.
    pub fn exclude_by<K, F>(&self, other: &Stream<'a, T>, key: F) -> Self
    where
        K: Hash + Eq + 'a,
        F: Fn(&T) -> K + 'a,
    {
        if self.is_known_empty() || other.is_known_empty() {
            return self.clone();
        }
        let source = self.clone();
        let other = other.clone();
        let key = Rc::new(key);
        Stream::from_stable_cursor_fn(move || Exclude {
            source: source.cursor(),
            other: other.clone(),
            key: key.clone(),
            excluded: None,
        })
    }
}

impl<'a, T> Stream<'a, Option<T>>
where
    T: 'a,
{
    /// Drop absent elements.
    pub fn non_null(&self) -> Stream<'a, T> {
        self.filter_map(|element| element)
    }
}

impl<'a, T> Stream<'a, Stream<'a, T>>
where
    T: 'a,
{
    /// Concatenate a stream of streams, in order.
    pub fn flatten(&self) -> Stream<'a, T> {
        if self.is_known_empty() {
            return Stream::empty();
        }
        let source = self.clone();
        Stream::from_stable_cursor_fn(move || Flatten {
            outer: source.cursor(),
            inner: None,
        })
    }
}

struct Map<'a, T, F> {
    source: BoxedCursor<'a, T>,
    f: Rc<F>,
}

impl<T, U, F> Cursor for Map<'_, T, F>
where
    F: Fn(T) -> U,
{
    type Item = U;

    #[inline]
    fn step(&mut self) -> Step<U> {
        self.source.step().map(|value| (self.f)(value))
    }
}

struct Filter<'a, T, P> {
    source: BoxedCursor<'a, T>,
    predicate: Rc<P>,
}

impl<T, P> Cursor for Filter<'_, T, P>
where
    P: Fn(&T) -> bool,
{
    type Item = T;

    fn step(&mut self) -> Step<T> {
        loop {
            match self.source.step() {
                Step::Yield(value) => {
                    if (self.predicate)(&value) {
                        return Step::Yield(value);
                    }
                }
                Step::Done => return Step::DONE,
            }
        }
    }
}

struct FilterMap<'a, T, F> {
    source: BoxedCursor<'a, T>,
    f: Rc<F>,
}

impl<T, U, F> Cursor for FilterMap<'_, T, F>
where
    F: Fn(T) -> Option<U>,
{
    type Item = U;

    fn step(&mut self) -> Step<U> {
        loop {
            match self.source.step() {
                Step::Yield(value) => {
                    if let Some(mapped) = (self.f)(value) {
                        return Step::Yield(mapped);
                    }
                }
                Step::Done => return Step::DONE,
            }
        }
    }
}

struct Concat<'a, T> {
    first: Option<BoxedCursor<'a, T>>,
    second: Stream<'a, T>,
    rest: Option<BoxedCursor<'a, T>>,
}

impl<'a, T> Cursor for Concat<'a, T>
where
    T: 'a,
{
    type Item = T;

    fn step(&mut self) -> Step<T> {
        if let Some(first) = &mut self.first {
            match first.step() {
                Step::Yield(value) => return Step::Yield(value),
                Step::Done => {
                    self.first = None;
                    self.rest = Some(self.second.cursor());
                }
            }
        }
        match &mut self.rest {
            Some(rest) => rest.step(),
            None => Step::DONE,
        }
    }
}

struct Tail<'a, T> {
    source: BoxedCursor<'a, T>,
    skip: usize,
}

impl<T> Cursor for Tail<'_, T> {
    type Item = T;

    fn step(&mut self) -> Step<T> {
        if self.skip > 0 {
            let skip = std::mem::take(&mut self.skip);
            if !self.source.advance_by(skip) {
                return Step::DONE;
            }
        }
        self.source.step()
    }
}

struct Limit<'a, T> {
    source: BoxedCursor<'a, T>,
    remaining: usize,
}

impl<T> Cursor for Limit<'_, T> {
    type Item = T;

    fn step(&mut self) -> Step<T> {
        if self.remaining == 0 {
            return Step::DONE;
        }
        self.remaining -= 1;
        let step = self.source.step();
        if step.is_done() {
            self.remaining = 0;
        }
        step
    }
}

struct Distinct<'a, T, K, F> {
    source: BoxedCursor<'a, T>,
    key: Rc<F>,
    seen: HashSet<K>,
}

impl<T, K, F> Cursor for Distinct<'_, T, K, F>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    type Item = T;

    fn step(&mut self) -> Step<T> {
        loop {
            match self.source.step() {
                Step::Yield(value) => {
                    if self.seen.insert((self.key)(&value)) {
                        return Step::Yield(value);
                    }
                }
                Step::Done => return Step::DONE,
            }
        }
    }
}

struct Exclude<'a, T, K, F> {
    source: BoxedCursor<'a, T>,
    other: Stream<'a, T>,
    key: Rc<F>,
    excluded: Option<HashSet<K>>,
}

impl<'a, T, K, F> Cursor for Exclude<'a, T, K, F>
where
    T: 'a,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    type Item = T;

    fn step(&mut self) -> Step<T> {
        let key = &self.key;
        let other = &self.other;
        let excluded = self
            .excluded
            .get_or_insert_with(|| other.iter().map(|value| key(&value)).collect());
        loop {
            match self.source.step() {
                Step::Yield(value) => {
                    if !excluded.contains(&key(&value)) {
                        return Step::Yield(value);
                    }
                }
                Step::Done => return Step::DONE,
            }
        }
    }
}

struct Flatten<'a, T> {
    outer: BoxedCursor<'a, Stream<'a, T>>,
    inner: Option<BoxedCursor<'a, T>>,
}

impl<'a, T> Cursor for Flatten<'a, T>
where
    T: 'a,
{
    type Item = T;

    fn step(&mut self) -> Step<T> {
        loop {
            if let Some(inner) = &mut self.inner {
                match inner.step() {
                    Step::Yield(value) => return Step::Yield(value),
                    Step::Done => self.inner = None,
                }
            }
            match self.outer.step() {
                Step::Yield(stream) => self.inner = Some(stream.cursor()),
                Step::Done => return Step::DONE,
            }
        }
    }
}
