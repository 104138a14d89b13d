//! Building pipeline entities
//!
//! Closure entry points for the three kinds, plus the sources, sinks and stages
//! most pipelines are made of.

mod func;
mod sink;
mod source;
mod stage;

pub use func::{AcceptFn, GenerateFn, ProcessFn, accept, generate, process};
pub use sink::{InsertBack, OverwriteForward, insert_back, overwrite_forward};
pub use source::{YieldFrom, YieldFromCopy, YieldIter, yield_from, yield_from_copy, yield_iter};
pub use stage::{Filter, FlatMap, Inspect, Map, filter, flat_map, inspect, map};
