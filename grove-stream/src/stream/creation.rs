use std::rc::Rc;

use super::core::Stream;

/// Conversion of stream-like and indexable inputs into a [`Stream`].
///
/// A `Stream` converts into itself. `None` converts into the empty stream.
pub trait IntoStream<'a> {
    type Item: 'a;

    fn into_stream(self) -> Stream<'a, Self::Item>;
}

impl<'a, T> IntoStream<'a> for Stream<'a, T>
where
    T: 'a,
{
    type Item = T;

    #[inline]
    fn into_stream(self) -> Stream<'a, T> {
        self
    }
}

impl<'a, T> IntoStream<'a> for &Stream<'a, T>
where
    T: 'a,
{
    type Item = T;

    #[inline]
    fn into_stream(self) -> Stream<'a, T> {
        self.clone()
    }
}

impl<'a, T> IntoStream<'a> for Rc<[T]>
where
    T: Clone + 'a,
{
    type Item = T;

    fn into_stream(self) -> Stream<'a, T> {
        Stream::from_shared(self)
    }
}

impl<'a, T> IntoStream<'a> for Vec<T>
where
    T: Clone + 'a,
{
    type Item = T;

    fn into_stream(self) -> Stream<'a, T> {
        Stream::from_shared(self.into())
    }
}

impl<'a, T, const N: usize> IntoStream<'a> for [T; N]
where
    T: Clone + 'a,
{
    type Item = T;

    fn into_stream(self) -> Stream<'a, T> {
        Stream::from_shared(Vec::from(self).into())
    }
}

// borrowed slices are read in place rather than copied up front
impl<'a, T> IntoStream<'a> for &'a [T]
where
    T: Clone + 'a,
{
    type Item = T;

    fn into_stream(self) -> Stream<'a, T> {
        if self.is_empty() {
            return Stream::empty();
        }
        Stream::from_iter_fn(move || self.iter().cloned())
    }
}

impl<'a, T> IntoStream<'a> for &'a Vec<T>
where
    T: Clone + 'a,
{
    type Item = T;

    fn into_stream(self) -> Stream<'a, T> {
        self.as_slice().into_stream()
    }
}

impl<'a, S> IntoStream<'a> for Option<S>
where
    S: IntoStream<'a>,
{
    type Item = S::Item;

    fn into_stream(self) -> Stream<'a, S::Item> {
        match self {
            Some(inner) => inner.into_stream(),
            None => Stream::empty(),
        }
    }
}

/// Turn any stream-like or indexable input into a [`Stream`].
pub fn stream<'a, S>(input: S) -> Stream<'a, S::Item>
where
    S: IntoStream<'a>,
{
    input.into_stream()
}

/// Concatenate several inputs into one stream, in order.
pub fn stream_all<'a, I, S>(inputs: I) -> Stream<'a, S::Item>
where
    I: IntoIterator<Item = S>,
    S: IntoStream<'a>,
{
    inputs
        .into_iter()
        .fold(Stream::empty(), |all, input| all.concat(&input.into_stream()))
}
