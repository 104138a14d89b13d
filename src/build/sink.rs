//! Consumers that write into existing storage.

use crate::{
    consumer::{Accept, Consumer},
    error::OverwriteError,
    no_copy::{NoCopy, no_copy},
};

/// Appending sink. See [`insert_back`].
#[derive(Debug)]
pub struct InsertBack<'a, C> {
    container: &'a mut C,
}

impl<T, C> Accept<T> for InsertBack<'_, C>
where
    C: Extend<T>,
{
    fn accept(&mut self, value: T) {
        self.container.extend(Some(value));
    }
}

/// Append every received value to the back of a collection, in arrival order.
///
/// ```rust
/// use pushflow::prelude::*;
///
/// let mut log = vec![0];
/// yield_from_copy([1, 2]) | insert_back(&mut log);
/// assert_eq!(log, vec![0, 1, 2]);
/// ```
pub fn insert_back<C>(container: &mut C) -> Consumer<InsertBack<'_, C>> {
    Consumer::new(InsertBack { container })
}

/// Positional sink. See [`overwrite_forward`].
#[derive(Debug)]
pub struct OverwriteForward<I> {
    position: I,
    written: usize,
    dropped: usize,
}

impl<'a, T, I> Accept<T> for OverwriteForward<I>
where
    T: 'a,
    I: Iterator<Item = &'a mut T>,
{
    fn accept(&mut self, value: T) {
        match self.position.next() {
            Some(slot) => {
                *slot = value;
                self.written += 1;
            }
            None => {
                #[cfg(feature = "tracing")]
                {
                    if self.dropped == 0 {
                        tracing::warn!(
                            written = self.written,
                            "overwrite sink ran out of slots, discarding further values"
                        );
                    }
                }
                self.dropped += 1;
            }
        }
    }
}

/// Overwrite successive slots, advancing one position per received value.
///
/// `position` is any iterator of mutable slots, typically `buf.iter_mut()` or a
/// sub-range of it. The sink is move-only: it can be relocated and viewed with
/// [`Consumer::by_ref`], but never duplicated, so there is only ever one write
/// position.
///
/// Values that arrive after the last slot are discarded; [`finish`] reports
/// them.
///
/// ```rust
/// use pushflow::prelude::*;
///
/// let mut buf = ['.'; 5];
/// let mut sink = overwrite_forward(buf.iter_mut().skip(1));
/// yield_from_copy(['a', 'b']) | sink.by_ref();
/// yield_from_copy(['c']) | sink.by_ref();
/// assert_eq!(sink.finish().unwrap(), 3);
/// assert_eq!(buf, ['.', 'a', 'b', 'c', '.']);
/// ```
///
/// [`finish`]: Consumer::finish
pub fn overwrite_forward<I>(position: I) -> Consumer<NoCopy<OverwriteForward<I::IntoIter>>>
where
    I: IntoIterator,
{
    Consumer::new(no_copy(OverwriteForward {
        position: position.into_iter(),
        written: 0,
        dropped: 0,
    }))
}

impl<I> Consumer<NoCopy<OverwriteForward<I>>> {
    /// Number of slots written so far.
    pub fn written(&self) -> usize {
        self.routine().get_ref().written
    }

    /// Release the write position, reporting values that found no slot.
    pub fn finish(self) -> Result<usize, OverwriteError> {
        let sink = self.into_routine().into_inner();
        match sink.dropped {
            0 => Ok(sink.written),
            dropped => Err(OverwriteError::OutOfSlots {
                written: sink.written,
                dropped,
            }),
        }
    }
}
