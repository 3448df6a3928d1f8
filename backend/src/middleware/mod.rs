//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns. Currently only trace
//! identifier propagation.

pub mod trace;

pub use trace::{Trace, TraceId};
