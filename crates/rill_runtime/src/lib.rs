//! Rill language runtime support library.
//!
//! Generated Rill programs link against this crate for everything that is
//! not plain arithmetic and control flow: bounds-checked indexing, checked
//! division and power, the immutable string value, stringification, and
//! printing. Every fallible primitive returns an [`Outcome`] carrying either
//! its payload or a stable numeric error code; extracting a payload from a
//! failed `Outcome` aborts the process with that code as exit status.

#![allow(clippy::should_implement_trait)]

pub mod io;
pub mod math;
pub mod outcome;
pub mod seq;
pub mod stringify;
pub mod text;

pub use io::{ToOutput, print};
pub use math::{Number, div, float, int32, int64, rem};
pub use outcome::{ErrorCode, Outcome};
pub use seq::At;
pub use stringify::ToText;
pub use text::Text;
