//! Commonly used imports
//!
//! Use `use pushflow::prelude::*;` for the three kinds, the combinator and every
//! built-in constructor.

// Kinds and their routines
pub use crate::{Accept, Consumer, Generate, Process, Producer, Transformer};

// Composition
pub use crate::compose::{Pipe, compose};

// Constructors
pub use crate::build::{
    accept, filter, flat_map, generate, insert_back, inspect, map, overwrite_forward, process,
    yield_from, yield_from_copy, yield_iter,
};

// Move-only routines
pub use crate::no_copy::{NoCopy, no_copy};

#[cfg(feature = "tracing")]
pub use crate::trace::traced;
