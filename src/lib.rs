//! # pushflow: fused push pipelines
//!
//! Build single-pass data pipelines out of three kinds of entity and one
//! combinator. Every stage is a plain routine that calls the next one; composing
//! stages nests those calls, so a finished pipeline runs on one call stack with
//! no buffering between stages.
//!
//! ## Kinds
//!
//! - **[`Producer`]**: pushes a sequence of values into a continuation ([`Generate`])
//! - **[`Transformer`]**: turns one value into zero, one or many values ([`Process`])
//! - **[`Consumer`]**: performs an effect per value ([`Accept`])
//!
//! ## Composition
//!
//! `lhs | rhs` (or [`compose(lhs, rhs)`](compose::compose)) is defined for four
//! kind pairs:
//!
//! - `Producer | Transformer` builds a [`Producer`]
//! - `Transformer | Transformer` builds a [`Transformer`]
//! - `Transformer | Consumer` builds a [`Consumer`]
//! - `Producer | Consumer` runs the pipeline
//!
//! Any other pairing does not type-check. Composition moves both operands;
//! `by_ref()` on any entity gives a borrowed view of the same kind for reuse.
//!
//! ## Example
//!
//! ```
//! use pushflow::prelude::*;
//!
//! let text = "Hello World";
//! let mut output = String::new();
//! yield_iter(text.chars()) | map(|c: char| c.to_ascii_uppercase()) | insert_back(&mut output);
//! assert_eq!(output, "HELLO WORLD");
//!
//! let mut buf = vec!['.'; 11];
//! let mut overwriter = overwrite_forward(buf.iter_mut());
//! yield_iter("Hello".chars()) | overwriter.by_ref();
//! yield_iter(".".chars()) | overwriter.by_ref();
//! yield_iter("World".chars()) | overwriter.by_ref();
//! overwriter.finish().unwrap();
//! assert_eq!(buf.iter().collect::<String>(), "Hello.World");
//! ```
//!
//! ## Common Functions
//!
//! **Sources:** [`yield_from`](build::yield_from), [`yield_from_copy`](build::yield_from_copy),
//! [`yield_iter`](build::yield_iter), [`generate`](build::generate)
//!
//! **Stages:** [`map`](build::map), [`filter`](build::filter), [`flat_map`](build::flat_map),
//! [`inspect`](build::inspect), [`process`](build::process)
//!
//! **Sinks:** [`insert_back`](build::insert_back), [`overwrite_forward`](build::overwrite_forward),
//! [`accept`](build::accept)

pub mod build;
pub mod compose;
mod consumer;
mod error;
pub mod no_copy;
pub mod prelude;
mod producer;
#[cfg(feature = "tracing")]
pub mod trace;
mod transformer;

pub use consumer::*;
pub use error::*;
pub use producer::*;
pub use transformer::*;
