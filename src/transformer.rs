//! Intermediate pipeline stages.
//!
//! A [`Transformer`] holds a single [`Process`] routine that turns one input value
//! into zero, one or many output values, each pushed into a continuation before
//! the routine returns.

use std::{cell::RefCell, rc::Rc};

use either::Either;

use crate::{
    compose::Pipe,
    no_copy::{NoCopy, no_copy},
};

/// Routine that derives any number of values from a single input.
pub trait Process<T> {
    /// Type of value handed to the continuation
    type Output;

    /// Handle one input, calling `emit` once per derived value.
    fn process<E>(&mut self, value: T, emit: E)
    where
        E: FnMut(Self::Output);
}

/// A middle stage: composes with a producer on its left or a consumer on its
/// right, and with other transformers on either side.
///
/// ```rust
/// use pushflow::prelude::*;
///
/// let stage = map(|x: i32| x + 1) | filter(|x: &i32| x % 2 == 0);
/// let out: Vec<i32> = (yield_from_copy([1, 2, 3, 4]) | stage).collect();
/// assert_eq!(out, vec![2, 4]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transformer<P> {
    routine: P,
}

impl<P> Transformer<P> {
    /// Wrap a routine as a transformer.
    pub fn new(routine: P) -> Self {
        Self { routine }
    }

    pub fn routine(&self) -> &P {
        &self.routine
    }

    pub fn routine_mut(&mut self) -> &mut P {
        &mut self.routine
    }

    pub fn into_routine(self) -> P {
        self.routine
    }

    /// Borrow this transformer as a transformer of the same kind.
    pub fn by_ref(&mut self) -> Transformer<&mut P> {
        Transformer::new(&mut self.routine)
    }

    /// Wrap the routine in [`NoCopy`] so this transformer can no longer be cloned.
    pub fn no_copy(self) -> Transformer<NoCopy<P>> {
        Transformer::new(no_copy(self.routine))
    }

    /// Move the routine behind a reference-counted cell.
    pub fn share(self) -> Transformer<Rc<RefCell<P>>> {
        Transformer::new(Rc::new(RefCell::new(self.routine)))
    }

    /// Compose with another transformer or a consumer. Same as the `|` operator.
    pub fn pipe<R>(self, rhs: R) -> <Self as Pipe<R>>::Output
    where
        Self: Pipe<R>,
    {
        Pipe::pipe(self, rhs)
    }
}

impl<T, P> Process<T> for &mut P
where
    P: Process<T> + ?Sized,
{
    type Output = P::Output;

    fn process<E>(&mut self, value: T, emit: E)
    where
        E: FnMut(Self::Output),
    {
        (**self).process(value, emit)
    }
}

impl<T, P> Process<T> for Rc<RefCell<P>>
where
    P: Process<T>,
{
    type Output = P::Output;

    fn process<E>(&mut self, value: T, emit: E)
    where
        E: FnMut(Self::Output),
    {
        self.borrow_mut().process(value, emit)
    }
}

impl<T, L, R> Process<T> for Either<L, R>
where
    L: Process<T>,
    R: Process<T, Output = L::Output>,
{
    type Output = L::Output;

    fn process<E>(&mut self, value: T, emit: E)
    where
        E: FnMut(Self::Output),
    {
        match self {
            Either::Left(l) => l.process(value, emit),
            Either::Right(r) => r.process(value, emit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{filter, insert_back, map, process, yield_from_copy};

    #[test]
    fn test_by_ref_keeps_transformer_state() {
        let mut index = 0;
        let mut numbered = process(move |c: char, emit: &mut dyn FnMut((usize, char))| {
            emit((index, c));
            index += 1;
        });
        let mut out = Vec::new();

        yield_from_copy(['a', 'b']) | numbered.by_ref() | insert_back(&mut out);
        yield_from_copy(['c']) | numbered.by_ref() | insert_back(&mut out);

        assert_eq!(out, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
    }

    #[test]
    fn test_either_stage_selected_at_runtime() {
        let stage = |shout: bool| {
            if shout {
                Transformer::new(Either::Left(map(|c: char| c.to_ascii_uppercase()).into_routine()))
            } else {
                Transformer::new(Either::Right(filter(|c: &char| *c != 'b').into_routine()))
            }
        };

        let loud: String = (yield_from_copy(['a', 'b']) | stage(true)).collect();
        let quiet: String = (yield_from_copy(['a', 'b']) | stage(false)).collect();

        assert_eq!(loud, "AB");
        assert_eq!(quiet, "a");
    }

    #[test]
    fn test_shared_transformer_counts_across_pipelines() {
        let mut seen = 0usize;
        let counting = process(move |x: i32, emit: &mut dyn FnMut((usize, i32))| {
            seen += 1;
            emit((seen, x));
        })
        .share();

        let first: Vec<_> = (yield_from_copy([7, 8]) | counting.clone()).collect();
        let second: Vec<_> = (yield_from_copy([9]) | counting).collect();

        assert_eq!(first, vec![(1, 7), (2, 8)]);
        assert_eq!(second, vec![(3, 9)]);
    }
}
