//! Stateless transformer stages.

use crate::transformer::{Process, Transformer};

/// One-to-one stage. See [`map`].
#[derive(Debug, Clone, Copy)]
pub struct Map<F>(F);

impl<T, U, F> Process<T> for Map<F>
where
    F: FnMut(T) -> U,
{
    type Output = U;

    fn process<E>(&mut self, value: T, mut emit: E)
    where
        E: FnMut(U),
    {
        emit((self.0)(value))
    }
}

/// Apply `f` to every value, forwarding exactly one result per input.
///
/// ```rust
/// use pushflow::prelude::*;
///
/// let mut out = String::new();
/// yield_iter("Hello World".chars()) | map(|c: char| c.to_ascii_uppercase()) | insert_back(&mut out);
/// assert_eq!(out, "HELLO WORLD");
/// ```
pub fn map<F>(f: F) -> Transformer<Map<F>> {
    Transformer::new(Map(f))
}

/// Predicate stage. See [`filter`].
#[derive(Debug, Clone, Copy)]
pub struct Filter<P>(P);

impl<T, P> Process<T> for Filter<P>
where
    P: FnMut(&T) -> bool,
{
    type Output = T;

    fn process<E>(&mut self, value: T, mut emit: E)
    where
        E: FnMut(T),
    {
        if (self.0)(&value) {
            emit(value)
        }
    }
}

/// Forward a value unchanged when `predicate` holds for it, drop it otherwise.
///
/// ```rust
/// use pushflow::prelude::*;
///
/// let odd: Vec<i32> = (yield_from_copy([1, 2, 3]) | filter(|x: &i32| x % 2 == 1)).collect();
/// assert_eq!(odd, vec![1, 3]);
/// ```
pub fn filter<P>(predicate: P) -> Transformer<Filter<P>> {
    Transformer::new(Filter(predicate))
}

/// One-to-many stage. See [`flat_map`].
#[derive(Debug, Clone, Copy)]
pub struct FlatMap<F>(F);

impl<T, I, F> Process<T> for FlatMap<F>
where
    F: FnMut(T) -> I,
    I: IntoIterator,
{
    type Output = I::Item;

    fn process<E>(&mut self, value: T, emit: E)
    where
        E: FnMut(I::Item),
    {
        (self.0)(value).into_iter().for_each(emit)
    }
}

/// Forward every item `f` returns for a value, in the order it returns them.
///
/// ```rust
/// use pushflow::prelude::*;
///
/// let out: Vec<u32> = (yield_from_copy([1, 3]) | flat_map(|n: u32| 0..n)).collect();
/// assert_eq!(out, vec![0, 0, 1, 2]);
/// ```
pub fn flat_map<F>(f: F) -> Transformer<FlatMap<F>> {
    Transformer::new(FlatMap(f))
}

/// Observing stage. See [`inspect`].
#[derive(Debug, Clone, Copy)]
pub struct Inspect<F>(F);

impl<T, F> Process<T> for Inspect<F>
where
    F: FnMut(&T),
{
    type Output = T;

    fn process<E>(&mut self, value: T, mut emit: E)
    where
        E: FnMut(T),
    {
        (self.0)(&value);
        emit(value)
    }
}

/// Call `f` with a reference to every value, then forward the value unchanged.
pub fn inspect<F>(f: F) -> Transformer<Inspect<F>> {
    Transformer::new(Inspect(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{insert_back, overwrite_forward, yield_from, yield_iter};

    #[test]
    fn test_map_preserves_length_and_order() {
        let source = [1, 2, 3];
        let mut out = Vec::new();
        yield_from(&source) | map(|x: &i32| x * x) | insert_back(&mut out);
        assert_eq!(out, vec![1, 4, 9]);
    }

    #[test]
    fn test_lowercase_into_equal_length_buffer() {
        let text = "Hello World";
        let mut buf: Vec<char> = text.chars().collect();

        yield_iter(text.chars())
            | map(|c: char| c.to_ascii_lowercase())
            | overwrite_forward(buf.iter_mut());

        assert_eq!(buf.into_iter().collect::<String>(), "hello world");
    }

    #[test]
    fn test_filter_keeps_order_of_survivors() {
        let mut out = String::new();
        yield_iter("a1b2c3".chars()) | filter(|c: &char| c.is_alphabetic()) | insert_back(&mut out);
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_filter_rejecting_everything() {
        let mut calls = 0;
        yield_iter(0..5) | filter(|_: &i32| false) | crate::build::accept(|_: i32| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_flat_map_with_empty_expansion() {
        let mut out = Vec::new();
        yield_iter(0..4) | flat_map(|n: usize| vec![n; n]) | insert_back(&mut out);
        assert_eq!(out, vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_inspect_sees_values_before_downstream() {
        let mut seen = Vec::new();
        let mut out = Vec::new();
        yield_iter(1..=3)
            | inspect(|x: &i32| seen.push(*x))
            | filter(|x: &i32| *x != 2)
            | insert_back(&mut out);

        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(out, vec![1, 3]);
    }
}
