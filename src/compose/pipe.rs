use std::ops::BitOr;

use super::fused::Fused;
use crate::{
    consumer::{Accept, Consumer},
    producer::{Generate, Producer},
    transformer::{Process, Transformer},
};

/// The composition algebra.
///
/// Implemented for exactly four kind pairs:
///
/// | lhs | rhs | output |
/// |---|---|---|
/// | [`Producer`] | [`Consumer`] | `()`, the pipeline runs to completion |
/// | [`Producer`] | [`Transformer`] | [`Producer`] |
/// | [`Transformer`] | [`Transformer`] | [`Transformer`] |
/// | [`Transformer`] | [`Consumer`] | [`Consumer`] |
///
/// Any other pairing has no implementation and is rejected by the type checker:
///
/// ```compile_fail
/// use pushflow::prelude::*;
///
/// let _ = compose(yield_from_copy([1]), yield_from_copy([2]));
/// ```
///
/// A transformer cannot feed a producer either:
///
/// ```compile_fail
/// use pushflow::prelude::*;
///
/// let _ = compose(map(|x: i32| x + 1), yield_from_copy([1]));
/// ```
pub trait Pipe<Rhs> {
    type Output;

    fn pipe(self, rhs: Rhs) -> Self::Output;
}

/// Compose two pipeline entities. Equivalent to `lhs | rhs`.
///
/// ```rust
/// use pushflow::prelude::*;
///
/// let mut out = Vec::new();
/// compose(yield_from_copy([1, 2, 3]), map(|x: i32| x * 10) | insert_back(&mut out));
/// assert_eq!(out, vec![10, 20, 30]);
/// ```
pub fn compose<L, R>(lhs: L, rhs: R) -> L::Output
where
    L: Pipe<R>,
{
    lhs.pipe(rhs)
}

impl<G, A> Pipe<Consumer<A>> for Producer<G>
where
    G: Generate,
    A: Accept<G::Item>,
{
    type Output = ();

    fn pipe(self, rhs: Consumer<A>) {
        let mut generator = self.into_routine();
        let mut acceptor = rhs.into_routine();
        generator.generate(|value| acceptor.accept(value));
    }
}

impl<G, P> Pipe<Transformer<P>> for Producer<G>
where
    G: Generate,
    P: Process<G::Item>,
{
    type Output = Producer<Fused<G, P>>;

    fn pipe(self, rhs: Transformer<P>) -> Self::Output {
        Producer::new(Fused::new(self.into_routine(), rhs.into_routine()))
    }
}

// The input type of a transformer is only fixed once something drives it, so the
// value types of two transformers are checked when the result is used.
impl<L, R> Pipe<Transformer<R>> for Transformer<L> {
    type Output = Transformer<Fused<L, R>>;

    fn pipe(self, rhs: Transformer<R>) -> Self::Output {
        Transformer::new(Fused::new(self.into_routine(), rhs.into_routine()))
    }
}

impl<P, A> Pipe<Consumer<A>> for Transformer<P> {
    type Output = Consumer<Fused<P, A>>;

    fn pipe(self, rhs: Consumer<A>) -> Self::Output {
        Consumer::new(Fused::new(self.into_routine(), rhs.into_routine()))
    }
}

impl<G, A> BitOr<Consumer<A>> for Producer<G>
where
    G: Generate,
    A: Accept<G::Item>,
{
    type Output = ();

    fn bitor(self, rhs: Consumer<A>) {
        self.pipe(rhs)
    }
}

impl<G, P> BitOr<Transformer<P>> for Producer<G>
where
    G: Generate,
    P: Process<G::Item>,
{
    type Output = Producer<Fused<G, P>>;

    fn bitor(self, rhs: Transformer<P>) -> Self::Output {
        self.pipe(rhs)
    }
}

impl<L, R> BitOr<Transformer<R>> for Transformer<L> {
    type Output = Transformer<Fused<L, R>>;

    fn bitor(self, rhs: Transformer<R>) -> Self::Output {
        self.pipe(rhs)
    }
}

impl<P, A> BitOr<Consumer<A>> for Transformer<P> {
    type Output = Consumer<Fused<P, A>>;

    fn bitor(self, rhs: Consumer<A>) -> Self::Output {
        self.pipe(rhs)
    }
}
