//! Move-only routines.
//!
//! A closure is `Copy` whenever everything it captures is, and holders are
//! `Copy` whenever their routine is. For a routine that carries a write position
//! or any other per-pass state, a silent copy would fork that state. Wrapping it
//! in [`NoCopy`] keeps it movable and viewable while ruling out duplication at
//! compile time:
//!
//! ```compile_fail
//! use pushflow::prelude::*;
//!
//! let mut next = 0usize;
//! let counter = accept(move |_: char| next += 1).no_copy();
//! let twin = counter.clone();
//! ```

use crate::{consumer::Accept, producer::Generate, transformer::Process};

/// A routine that can be moved but never cloned or copied.
///
/// Implements whichever of [`Generate`], [`Process`] and [`Accept`] the wrapped
/// routine implements.
#[derive(Debug)]
pub struct NoCopy<R>(R);

/// Wrap `routine` so that it can only be moved.
pub fn no_copy<R>(routine: R) -> NoCopy<R> {
    NoCopy(routine)
}

impl<R> NoCopy<R> {
    pub fn get_ref(&self) -> &R {
        &self.0
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.0
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<G: Generate> Generate for NoCopy<G> {
    type Item = G::Item;

    fn generate<E>(&mut self, emit: E)
    where
        E: FnMut(Self::Item),
    {
        self.0.generate(emit)
    }
}

impl<T, P: Process<T>> Process<T> for NoCopy<P> {
    type Output = P::Output;

    fn process<E>(&mut self, value: T, emit: E)
    where
        E: FnMut(Self::Output),
    {
        self.0.process(value, emit)
    }
}

impl<T, A: Accept<T>> Accept<T> for NoCopy<A> {
    fn accept(&mut self, value: T) {
        self.0.accept(value)
    }
}
