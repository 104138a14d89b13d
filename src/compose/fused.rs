use crate::{consumer::Accept, producer::Generate, transformer::Process};

/// Two routines fused into one.
///
/// Created by [`compose`](super::compose) and the `|` operator. Owns both
/// operands. Depending on the kinds it was built from it is a [`Generate`]
/// (producer then transformer), a [`Process`] (transformer then transformer) or
/// an [`Accept`] (transformer then consumer) routine. Each value passes through
/// one extra level of nested calls per fused stage and is never stored.
#[derive(Debug, Clone, Copy)]
pub struct Fused<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> Fused<L, R> {
    pub(crate) fn new(lhs: L, rhs: R) -> Self {
        Self { lhs, rhs }
    }

    /// Split back into the two fused routines.
    pub fn into_parts(self) -> (L, R) {
        (self.lhs, self.rhs)
    }
}

impl<G, P> Generate for Fused<G, P>
where
    G: Generate,
    P: Process<G::Item>,
{
    type Item = P::Output;

    fn generate<E>(&mut self, mut emit: E)
    where
        E: FnMut(Self::Item),
    {
        let Self { lhs, rhs } = self;
        lhs.generate(|value| rhs.process(value, &mut emit));
    }
}

impl<T, L, R> Process<T> for Fused<L, R>
where
    L: Process<T>,
    R: Process<L::Output>,
{
    type Output = R::Output;

    fn process<E>(&mut self, value: T, mut emit: E)
    where
        E: FnMut(Self::Output),
    {
        let Self { lhs, rhs } = self;
        lhs.process(value, |inner| rhs.process(inner, &mut emit));
    }
}

impl<T, P, A> Accept<T> for Fused<P, A>
where
    P: Process<T>,
    A: Accept<P::Output>,
{
    fn accept(&mut self, value: T) {
        let Self { lhs, rhs } = self;
        lhs.process(value, |inner| rhs.accept(inner));
    }
}
