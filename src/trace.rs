//! Pipeline stages that report through `tracing`.
//!
//! Enabled with the `tracing` feature (on by default). The stages only emit
//! events; installing a subscriber is up to the application.

use std::fmt::Debug;

use crate::transformer::{Process, Transformer};

/// Pass-through stage that records every value. See [`traced`].
#[derive(Debug, Clone)]
pub struct Traced {
    stage: &'static str,
    seen: usize,
}

impl Traced {
    /// Number of values that passed through so far.
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<T: Debug> Process<T> for Traced {
    type Output = T;

    fn process<E>(&mut self, value: T, mut emit: E)
    where
        E: FnMut(T),
    {
        tracing::trace!(stage = self.stage, index = self.seen, ?value, "value passed");
        self.seen += 1;
        emit(value)
    }
}

/// Emit a `TRACE` event for every value, labelled with `stage`, then forward the
/// value unchanged.
///
/// ```rust
/// use pushflow::prelude::*;
///
/// let out: Vec<i32> = (yield_from_copy([1, 2]) | traced("numbers") | map(|x: i32| x + 1)).collect();
/// assert_eq!(out, vec![2, 3]);
/// ```
pub fn traced(stage: &'static str) -> Transformer<Traced> {
    Transformer::new(Traced { stage, seen: 0 })
}
