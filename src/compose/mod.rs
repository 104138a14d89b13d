//! Combining pipeline entities.
//!
//! This module holds the composition algebra: the [`Pipe`] trait, the
//! [`compose`] function and the `|` operator built on top of them, plus the
//! [`Fused`] routine every building composition returns.

mod fused;
mod pipe;

pub use fused::Fused;
pub use pipe::{Pipe, compose};
