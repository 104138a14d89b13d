//! Producers over existing sequences.

use std::marker::PhantomData;

use crate::producer::{Generate, Producer};

/// Borrowing sequence source. See [`yield_from`].
#[derive(Debug)]
pub struct YieldFrom<'a, C: ?Sized> {
    container: &'a C,
}

impl<C: ?Sized> Clone for YieldFrom<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for YieldFrom<'_, C> {}

impl<'a, C> Generate for YieldFrom<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    type Item = <&'a C as IntoIterator>::Item;

    fn generate<E>(&mut self, emit: E)
    where
        E: FnMut(Self::Item),
    {
        IntoIterator::into_iter(self.container).for_each(emit)
    }
}

/// Yield every element of a borrowed container, front to back.
///
/// Each drive walks the container as it is at that moment. The borrow keeps the
/// container from being changed while the producer is alive.
///
/// ```rust
/// use pushflow::prelude::*;
///
/// let names = vec!["ada".to_string(), "grace".to_string()];
/// let lengths: Vec<usize> = yield_from(&names).map(|s: &String| s.len()).collect();
/// assert_eq!(lengths, vec![3, 5]);
/// ```
pub fn yield_from<'a, C>(container: &'a C) -> Producer<YieldFrom<'a, C>>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    Producer::new(YieldFrom { container })
}

/// Owning sequence source. See [`yield_from_copy`].
#[derive(Debug)]
pub struct YieldFromCopy<C, T> {
    container: C,
    _item: PhantomData<fn() -> T>,
}

impl<C: Clone, T> Clone for YieldFromCopy<C, T> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
            _item: PhantomData,
        }
    }
}

impl<C, T> YieldFromCopy<C, T> {
    /// Give back the owned container.
    pub fn into_inner(self) -> C {
        self.container
    }
}

impl<C, T> Generate for YieldFromCopy<C, T>
where
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    T: Clone,
{
    type Item = T;

    fn generate<E>(&mut self, mut emit: E)
    where
        E: FnMut(T),
    {
        for value in &self.container {
            emit(value.clone());
        }
    }
}

/// Yield a clone of every element of a container the producer owns.
///
/// ```rust
/// use pushflow::prelude::*;
///
/// let mut out = String::new();
/// yield_from_copy(vec!['o', 'k']) | insert_back(&mut out);
/// assert_eq!(out, "ok");
/// ```
pub fn yield_from_copy<C, T>(container: C) -> Producer<YieldFromCopy<C, T>>
where
    for<'a> &'a C: IntoIterator<Item = &'a T>,
    T: Clone,
{
    Producer::new(YieldFromCopy {
        container,
        _item: PhantomData,
    })
}

/// Iterator-range source. See [`yield_iter`].
#[derive(Debug, Clone)]
pub struct YieldIter<I> {
    iter: I,
}

impl<I> Generate for YieldIter<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;

    fn generate<E>(&mut self, emit: E)
    where
        E: FnMut(Self::Item),
    {
        self.iter.clone().for_each(emit)
    }
}

/// Yield every item of an iterator range.
///
/// The iterator is stored untouched; each drive walks a fresh clone of it, so a
/// view of this producer replays the same range every time.
///
/// ```rust
/// use pushflow::prelude::*;
///
/// let shout: String = yield_iter("hi".chars()).map(|c: char| c.to_ascii_uppercase()).collect();
/// assert_eq!(shout, "HI");
/// ```
pub fn yield_iter<I>(iter: I) -> Producer<YieldIter<I::IntoIter>>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    Producer::new(YieldIter {
        iter: iter.into_iter(),
    })
}
