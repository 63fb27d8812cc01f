use std::hash::Hash;

use ahash::{HashMap, HashSet};

use crate::error;

use super::core::Stream;

impl<'a, T> Stream<'a, T>
where
    T: 'a,
{
    /// Collect every element, in order.
    ///
    /// Never returns for an infinite stream.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Collect every element into a set.
    pub fn to_set(&self) -> HashSet<T>
    where
        T: Hash + Eq,
    {
        self.iter().collect()
    }

    /// Collect every element into a map. Later entries replace earlier ones
    /// with the same key.
    pub fn to_map<K, V>(&self, key: impl Fn(&T) -> K, value: impl Fn(T) -> V) -> HashMap<K, V>
    where
        K: Hash + Eq,
    {
        self.iter().map(|element| (key(&element), value(element))).collect()
    }

    /// The number of elements.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn for_each(&self, f: impl FnMut(T)) {
        self.iter().for_each(f)
    }

    /// Call `f` on every element until it returns an error, which is handed
    /// back unchanged.
    pub fn try_for_each<E>(&self, f: impl FnMut(T) -> Result<(), E>) -> Result<(), E> {
        self.iter().try_for_each(f)
    }

    /// Fold from the left, seeding the accumulator with the first element.
    ///
    /// Returns `None` for an empty stream.
    pub fn reduce(&self, combine: impl FnMut(T, T) -> T) -> Option<T> {
        self.iter().reduce(combine)
    }

    /// Fold from the left, starting from `initial`.
    ///
    /// An empty stream yields `initial` itself.
    pub fn reduce_with<U>(&self, initial: U, combine: impl FnMut(U, T) -> U) -> U {
        self.iter().fold(initial, combine)
    }

    /// Like [`Stream::reduce_with`], but stops at the first error returned by
    /// `combine` and hands it back unchanged.
    pub fn try_reduce_with<U, E>(
        &self,
        initial: U,
        combine: impl FnMut(U, T) -> Result<U, E>,
    ) -> Result<U, E> {
        self.iter().try_fold(initial, combine)
    }

    /// Fold from the right, seeding the accumulator with the last element.
    ///
    /// Returns `None` for an empty stream.
    pub fn reduce_right(&self, combine: impl FnMut(T, T) -> T) -> Option<T> {
        self.buffered().into_iter().rev().reduce(combine)
    }

    /// Fold from the right, starting from `initial`.
    pub fn reduce_right_with<U>(&self, initial: U, combine: impl FnMut(U, T) -> U) -> U {
        self.buffered().into_iter().rev().fold(initial, combine)
    }

    // Cursors only move forward; folding from the right buffers first so
    // that call depth stays constant whatever the length.
    fn buffered(&self) -> Vec<T> {
        let buffer = self.to_vec();
        tracing::trace!(len = buffer.len(), "buffered stream for right fold");
        buffer
    }

    /// The first element for which `predicate` holds.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        self.iter().find(|element| predicate(element))
    }

    /// The position of the first element for which `predicate` holds.
    pub fn find_index(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.iter().position(|element| predicate(&element))
    }

    pub fn includes(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == *value)
    }

    /// The position of the first element equal to `value`, looking only at
    /// positions `from` and later.
    pub fn index_of(&self, value: &T, from: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter()
            .enumerate()
            .skip(from)
            .find(|(_, element)| element == value)
            .map(|(index, _)| index)
    }

    /// Whether `predicate` holds for every element. True for an empty
    /// stream.
    pub fn every(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.iter().all(|element| predicate(&element))
    }

    /// Whether `predicate` holds for any element. False for an empty
    /// stream.
    pub fn some(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.iter().any(|element| predicate(&element))
    }

    /// The first element, if any.
    pub fn head(&self) -> Option<T> {
        self.cursor().step().into_option()
    }

    /// The only element; an error if there are none or more than one.
    pub fn one(&self) -> error::Result<T> {
        let mut cursor = self.iter();
        match (cursor.next(), cursor.next()) {
            (Some(one), None) => Ok(one),
            (None, _) => Err(error::Error::Empty),
            (Some(_), Some(_)) => Err(error::Error::MoreThanOne),
        }
    }

    /// The only element if there is one, `None` if there are none; an error
    /// if there are more.
    pub fn option(&self) -> error::Result<Option<T>> {
        let mut cursor = self.iter();
        match (cursor.next(), cursor.next()) {
            (None, _) => Ok(None),
            (Some(one), None) => Ok(Some(one)),
            (Some(_), Some(_)) => Err(error::Error::MoreThanOne),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::step::Step;

    fn numbers(items: &[i32]) -> Stream<'static, i32> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_reduce_without_initial_on_empty_is_none() {
        let s = numbers(&[]);
        assert_eq!(s.reduce(|a, b| a + b), None);
        assert_eq!(s.reduce_right(|a, b| a + b), None);
    }

    #[test]
    fn test_reduce_with_zero_is_not_absent() {
        let s = numbers(&[]);
        assert_eq!(s.reduce_with(0, |a, b| a + b), 0);
        // a genuine zero result from a non-empty stream is a result too
        assert_eq!(numbers(&[0]).reduce(|a, b| a + b), Some(0));
        assert_eq!(numbers(&[0, 0]).reduce(|a, b| a + b), Some(0));
    }

    #[test]
    fn test_reduce_right_folds_from_the_end() {
        let s: Stream<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(s.reduce(|a, b| a + &b), Some("abc".to_string()));
        assert_eq!(s.reduce_right(|a, b| a + &b), Some("cba".to_string()));
        assert_eq!(
            s.reduce_right_with(String::from(">"), |a, b| a + &b),
            ">cba"
        );
    }

    #[test]
    fn test_reduce_right_on_long_stream() {
        let s = Stream::from_iter_fn(|| 0..1_000_000u64);
        assert_eq!(s.reduce_right(|a, b| a + b), Some(499_999_500_000));
    }

    #[test]
    fn test_find_stops_at_match() {
        let pulled = Rc::new(Cell::new(0));
        let counted = pulled.clone();
        let s = Stream::from_step_fn(
            || 0,
            move |n: &mut i32| {
                counted.set(counted.get() + 1);
                *n += 1;
                Step::Yield(*n)
            },
        );
        assert_eq!(s.find(|n| n % 7 == 0), Some(7));
        assert_eq!(pulled.get(), 7);
        assert_eq!(s.find_index(|n| *n == 3), Some(2));
        assert!(s.includes(&5));
        assert!(s.some(|n| *n > 100));
    }

    #[test]
    fn test_every_and_some() {
        let s = numbers(&[2, 4, 6]);
        assert!(s.every(|n| n % 2 == 0));
        assert!(!s.some(|n| *n > 6));
        assert!(numbers(&[]).every(|_| false));
        assert!(!numbers(&[]).some(|_| true));
    }

    #[test]
    fn test_predicates_borrow_elements() {
        let s: Stream<String> = ["grove", "stream", "tree"]
            .iter()
            .map(|word| word.to_string())
            .collect();
        assert_eq!(s.find(|word| word.starts_with('s')), Some("stream".to_string()));
        assert_eq!(s.find_index(|word| word.len() == 4), Some(2));
        assert!(s.every(|word| !word.is_empty()));
        assert!(s.some(|word| word == "tree"));
        assert!(!s.some(|word| word.contains(' ')));
    }

    #[test]
    fn test_index_of_from() {
        let s = numbers(&[3, 1, 2, 3]);
        assert_eq!(s.index_of(&3, 0), Some(0));
        assert_eq!(s.index_of(&3, 1), Some(3));
        assert_eq!(s.index_of(&7, 0), None);
        assert_eq!(s.index_of(&3, 10), None);
    }

    #[test]
    fn test_head() {
        assert_eq!(numbers(&[4, 5]).head(), Some(4));
        assert_eq!(numbers(&[]).head(), None);
    }

    #[test]
    fn test_one_and_option() {
        assert_eq!(numbers(&[1]).one(), Ok(1));
        assert_eq!(numbers(&[]).one(), Err(error::Error::Empty));
        assert_eq!(numbers(&[1, 2]).one(), Err(error::Error::MoreThanOne));
        assert_eq!(numbers(&[]).option(), Ok(None));
        assert_eq!(numbers(&[1]).option(), Ok(Some(1)));
        assert_eq!(numbers(&[1, 2]).option(), Err(error::Error::MoreThanOne));
    }

    #[test]
    fn test_try_for_each_propagates_error() {
        let seen = Rc::new(Cell::new(0));
        let result = numbers(&[1, 2, 3, 4]).try_for_each(|n| {
            seen.set(n);
            if n == 2 {
                Err(format!("bad element {n}"))
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("bad element 2".to_string()));
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_try_reduce_with() {
        let s = numbers(&[1, 2, 3]);
        let sum: Result<i32, ()> = s.try_reduce_with(0, |a, b| Ok(a + b));
        assert_eq!(sum, Ok(6));
        let failed = s.try_reduce_with(0, |a, b| if b == 2 { Err(a) } else { Ok(a + b) });
        assert_eq!(failed, Err(1));
    }

    #[test]
    fn test_to_map_and_set() {
        let s = numbers(&[1, 2, 2, 3]);
        assert_eq!(s.to_set().len(), 3);
        let squares = s.to_map(|n| *n, |n| n * n);
        assert_eq!(squares.get(&3), Some(&9));
        assert_eq!(s.count(), 4);
    }
}
