//! The terminal end of a pipeline.

use std::{cell::RefCell, rc::Rc};

use either::Either;

use crate::no_copy::{NoCopy, no_copy};

/// Routine that performs a side effect for each value it receives.
pub trait Accept<T> {
    fn accept(&mut self, value: T);
}

/// A value sink. Piping a [`Producer`](crate::Producer) into a consumer runs the
/// pipeline to completion.
///
/// Consumers never appear on the left of `|`:
///
/// ```compile_fail
/// use pushflow::prelude::*;
///
/// let mut out: Vec<i32> = Vec::new();
/// let _ = insert_back(&mut out) | map(|x: i32| x + 1);
/// ```
///
/// and two consumers never compose with each other:
///
/// ```compile_fail
/// use pushflow::prelude::*;
///
/// let mut left: Vec<i32> = Vec::new();
/// let mut right: Vec<i32> = Vec::new();
/// let _ = insert_back(&mut left) | insert_back(&mut right);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Consumer<A> {
    routine: A,
}

impl<A> Consumer<A> {
    /// Wrap a routine as a consumer.
    pub fn new(routine: A) -> Self {
        Self { routine }
    }

    pub fn routine(&self) -> &A {
        &self.routine
    }

    pub fn routine_mut(&mut self) -> &mut A {
        &mut self.routine
    }

    pub fn into_routine(self) -> A {
        self.routine
    }

    /// Borrow this consumer as a consumer of the same kind.
    ///
    /// A long-lived sink fed by several producers, one pass after another:
    ///
    /// ```rust
    /// use pushflow::prelude::*;
    ///
    /// let mut out = String::new();
    /// let mut sink = insert_back(&mut out);
    /// yield_from_copy(['a', 'b']) | sink.by_ref();
    /// yield_from_copy(['c']) | sink.by_ref();
    /// drop(sink);
    /// assert_eq!(out, "abc");
    /// ```
    pub fn by_ref(&mut self) -> Consumer<&mut A> {
        Consumer::new(&mut self.routine)
    }

    /// Wrap the routine in [`NoCopy`] so this consumer can no longer be cloned.
    pub fn no_copy(self) -> Consumer<NoCopy<A>> {
        Consumer::new(no_copy(self.routine))
    }

    /// Move the routine behind a reference-counted cell.
    ///
    /// The returned consumer is `Clone`, so the same sink can sit at the end of
    /// several pipelines that are alive at once.
    pub fn share(self) -> Consumer<Rc<RefCell<A>>> {
        Consumer::new(Rc::new(RefCell::new(self.routine)))
    }

    /// Feed a single value to the routine.
    pub fn accept<T>(&mut self, value: T)
    where
        A: Accept<T>,
    {
        self.routine.accept(value)
    }
}

impl<T, A> Accept<T> for &mut A
where
    A: Accept<T> + ?Sized,
{
    fn accept(&mut self, value: T) {
        (**self).accept(value)
    }
}

impl<T, A> Accept<T> for Rc<RefCell<A>>
where
    A: Accept<T>,
{
    fn accept(&mut self, value: T) {
        self.borrow_mut().accept(value)
    }
}

impl<T, L, R> Accept<T> for Either<L, R>
where
    L: Accept<T>,
    R: Accept<T>,
{
    fn accept(&mut self, value: T) {
        match self {
            Either::Left(l) => l.accept(value),
            Either::Right(r) => r.accept(value),
        }
    }
}
