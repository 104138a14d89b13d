use std::{fmt, marker::PhantomData};

use crate::{
    consumer::{Accept, Consumer},
    producer::{Generate, Producer},
    transformer::{Process, Transformer},
};

/// Producer routine backed by a closure.
pub struct GenerateFn<F, T> {
    f: F,
    _item: PhantomData<fn() -> T>,
}

impl<F: Clone, T> Clone for GenerateFn<F, T> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _item: PhantomData,
        }
    }
}

impl<F: Copy, T> Copy for GenerateFn<F, T> {}

impl<F, T> fmt::Debug for GenerateFn<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerateFn").finish_non_exhaustive()
    }
}

impl<T, F> Generate for GenerateFn<F, T>
where
    F: FnMut(&mut dyn FnMut(T)),
{
    type Item = T;

    fn generate<E>(&mut self, mut emit: E)
    where
        E: FnMut(T),
    {
        (self.f)(&mut emit)
    }
}

/// Create a producer from a closure.
///
/// The closure receives the downstream continuation and calls it once per value.
///
/// ```rust
/// use pushflow::prelude::*;
///
/// let countdown = generate(|emit: &mut dyn FnMut(u32)| {
///     for n in (1..=3).rev() {
///         emit(n);
///     }
/// });
/// let out: Vec<u32> = countdown.collect();
/// assert_eq!(out, vec![3, 2, 1]);
/// ```
pub fn generate<T, F>(f: F) -> Producer<GenerateFn<F, T>>
where
    F: FnMut(&mut dyn FnMut(T)),
{
    Producer::new(GenerateFn {
        f,
        _item: PhantomData,
    })
}

/// Transformer routine backed by a closure.
pub struct ProcessFn<F, U> {
    f: F,
    _output: PhantomData<fn() -> U>,
}

impl<F: Clone, U> Clone for ProcessFn<F, U> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _output: PhantomData,
        }
    }
}

impl<F: Copy, U> Copy for ProcessFn<F, U> {}

impl<F, U> fmt::Debug for ProcessFn<F, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessFn").finish_non_exhaustive()
    }
}

impl<T, U, F> Process<T> for ProcessFn<F, U>
where
    F: FnMut(T, &mut dyn FnMut(U)),
{
    type Output = U;

    fn process<E>(&mut self, value: T, mut emit: E)
    where
        E: FnMut(U),
    {
        (self.f)(value, &mut emit)
    }
}

/// Create a transformer from a closure.
///
/// The closure receives one input value and the downstream continuation, and
/// may call the continuation any number of times.
///
/// ```rust
/// use pushflow::prelude::*;
///
/// let repeat_twice = process(|c: char, emit: &mut dyn FnMut(char)| {
///     emit(c);
///     emit(c);
/// });
/// let out: String = (yield_from_copy(['a', 'b']) | repeat_twice).collect();
/// assert_eq!(out, "aabb");
/// ```
pub fn process<T, U, F>(f: F) -> Transformer<ProcessFn<F, U>>
where
    F: FnMut(T, &mut dyn FnMut(U)),
{
    Transformer::new(ProcessFn {
        f,
        _output: PhantomData,
    })
}

/// Consumer routine backed by a closure.
#[derive(Clone, Copy)]
pub struct AcceptFn<F>(F);

impl<F> fmt::Debug for AcceptFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AcceptFn").finish_non_exhaustive()
    }
}

impl<T, F> Accept<T> for AcceptFn<F>
where
    F: FnMut(T),
{
    fn accept(&mut self, value: T) {
        (self.0)(value)
    }
}

/// Create a consumer from a closure.
///
/// ```rust
/// use pushflow::prelude::*;
///
/// let mut total = 0;
/// yield_from_copy([1, 2, 3]) | accept(|x: i32| total += x);
/// assert_eq!(total, 6);
/// ```
pub fn accept<F>(f: F) -> Consumer<AcceptFn<F>> {
    Consumer::new(AcceptFn(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{insert_back, yield_from_copy};

    #[test]
    fn test_generate_with_no_values() {
        let mut calls = 0;
        generate(|_: &mut dyn FnMut(i32)| {}) | accept(|_: i32| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_process_can_drop_values() {
        let mut out = Vec::new();
        let evens_only = process(|x: i32, emit: &mut dyn FnMut(i32)| {
            if x % 2 == 0 {
                emit(x);
            }
        });

        yield_from_copy([1, 2, 3, 4]) | evens_only | insert_back(&mut out);
        assert_eq!(out, vec![2, 4]);
    }

    #[test]
    fn test_process_changes_value_type() {
        let words = process(|n: usize, emit: &mut dyn FnMut(String)| emit("x".repeat(n)));
        let out: Vec<String> = (yield_from_copy([0, 2]) | words).collect();
        assert_eq!(out, vec![String::new(), "xx".to_string()]);
    }

    #[test]
    fn test_stateless_stage_can_be_copied() {
        let double = process(|x: i32, emit: &mut dyn FnMut(i32)| emit(x * 2));
        let copy = double;

        let a: Vec<i32> = (yield_from_copy([1]) | double).collect();
        let b: Vec<i32> = (yield_from_copy([2]) | copy).collect();

        assert_eq!(a, vec![2]);
        assert_eq!(b, vec![4]);
    }

    #[test]
    fn test_closure_entities_are_debug() {
        let source = generate(|emit: &mut dyn FnMut(i32)| emit(1));
        let stage = process(|x: i32, emit: &mut dyn FnMut(i32)| emit(x));
        let sink = accept(|_: i32| {});

        assert_eq!(format!("{source:?}"), "Producer { routine: GenerateFn { .. } }");
        assert_eq!(format!("{stage:?}"), "Transformer { routine: ProcessFn { .. } }");
        assert_eq!(format!("{sink:?}"), "Consumer { routine: AcceptFn { .. } }");
    }
}
