//! The producing end of a pipeline.
//!
//! A [`Producer`] holds a single [`Generate`] routine. Driving the routine pushes
//! every value it produces into a continuation, one call per value, and returns
//! once the source is exhausted.
//!
//! # Examples
//!
//! ```rust
//! use pushflow::prelude::*;
//!
//! let numbers = [1, 2, 3];
//! let doubled: Vec<i32> = yield_from(&numbers).map(|x: &i32| x * 2).collect();
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use std::{cell::RefCell, rc::Rc};

use either::Either;

use crate::{
    build::{Map, accept, map},
    compose::Pipe,
    consumer::Accept,
    no_copy::{NoCopy, no_copy},
};

/// Routine that pushes a sequence of values into a continuation.
///
/// `generate` calls `emit` zero or more times, synchronously and in production
/// order, and returns only after the sequence is exhausted.
pub trait Generate {
    /// Type of value handed to the continuation
    type Item;

    /// Drive the routine, calling `emit` once per produced value.
    fn generate<E>(&mut self, emit: E)
    where
        E: FnMut(Self::Item);
}

/// A value source: the left end of every pipeline.
///
/// Built from a [`Generate`] routine with [`Producer::new`], from a closure with
/// [`generate`](crate::build::generate), or from a container with one of the
/// sequence constructors in [`build`](crate::build).
#[derive(Debug, Clone, Copy)]
pub struct Producer<G> {
    routine: G,
}

impl<G> Producer<G> {
    /// Wrap a routine as a producer.
    pub fn new(routine: G) -> Self {
        Self { routine }
    }

    pub fn routine(&self) -> &G {
        &self.routine
    }

    pub fn routine_mut(&mut self) -> &mut G {
        &mut self.routine
    }

    pub fn into_routine(self) -> G {
        self.routine
    }

    /// Borrow this producer as a producer of the same kind.
    ///
    /// The view can be composed and driven like an owned producer while `self`
    /// stays in place, so the same source can feed several pipelines one after
    /// another.
    ///
    /// ```rust
    /// use pushflow::prelude::*;
    ///
    /// let mut source = yield_from_copy([1, 2, 3]);
    /// let mut seen = Vec::new();
    /// source.by_ref() | insert_back(&mut seen);
    /// source.by_ref() | insert_back(&mut seen);
    /// assert_eq!(seen, vec![1, 2, 3, 1, 2, 3]);
    /// ```
    pub fn by_ref(&mut self) -> Producer<&mut G> {
        Producer::new(&mut self.routine)
    }

    /// Wrap the routine in [`NoCopy`] so this producer can no longer be cloned.
    pub fn no_copy(self) -> Producer<NoCopy<G>> {
        Producer::new(no_copy(self.routine))
    }

    /// Move the routine behind a reference-counted cell.
    ///
    /// The returned producer is `Clone`; every clone drives the same routine.
    pub fn share(self) -> Producer<Rc<RefCell<G>>> {
        Producer::new(Rc::new(RefCell::new(self.routine)))
    }
}

impl<G: Generate> Producer<G> {
    /// Compose with a [`Transformer`](crate::Transformer) or drive into a
    /// [`Consumer`](crate::Consumer). Same as the `|` operator.
    pub fn pipe<R>(self, rhs: R) -> <Self as Pipe<R>>::Output
    where
        Self: Pipe<R>,
    {
        Pipe::pipe(self, rhs)
    }

    /// Fuse a [`map`] stage onto this producer.
    pub fn map<U, F>(self, f: F) -> Producer<crate::compose::Fused<G, Map<F>>>
    where
        F: FnMut(G::Item) -> U,
    {
        self | map(f)
    }

    /// Drive every value into `f`.
    pub fn for_each<F>(self, f: F)
    where
        F: FnMut(G::Item),
    {
        self | accept(f)
    }

    /// Drive every value into a freshly created collection.
    pub fn collect<C>(self) -> C
    where
        C: Default + Extend<G::Item>,
    {
        let mut out = C::default();
        self.for_each(|value| out.extend(Some(value)));
        out
    }

    /// Drive every value into `consumer`'s routine.
    pub fn drive<A>(mut self, consumer: &mut A)
    where
        A: Accept<G::Item>,
    {
        self.routine.generate(|value| consumer.accept(value));
    }
}

impl<G> Generate for &mut G
where
    G: Generate + ?Sized,
{
    type Item = G::Item;

    fn generate<E>(&mut self, emit: E)
    where
        E: FnMut(Self::Item),
    {
        (**self).generate(emit)
    }
}

impl<G> Generate for Rc<RefCell<G>>
where
    G: Generate,
{
    type Item = G::Item;

    fn generate<E>(&mut self, emit: E)
    where
        E: FnMut(Self::Item),
    {
        self.borrow_mut().generate(emit)
    }
}

impl<L, R> Generate for Either<L, R>
where
    L: Generate,
    R: Generate<Item = L::Item>,
{
    type Item = L::Item;

    fn generate<E>(&mut self, emit: E)
    where
        E: FnMut(Self::Item),
    {
        match self {
            Either::Left(l) => l.generate(emit),
            Either::Right(r) => r.generate(emit),
        }
    }
}
