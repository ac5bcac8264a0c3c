//! Factorium — timed big-integer factorial and async delay playground
//!
//! This crate collects a handful of small, self-contained entry points used
//! for timing experiments: an arbitrary-precision factorial loop that reports
//! its own wall-clock cost, a pair of greeting stubs, a numeric parse helper,
//! and a fixed asynchronous delay that demonstrates a suspension point
//! without doing any work.
//!
//! Everything is stateless; the only side effects are diagnostic console
//! output. The public API is re-exported flat at the crate root so callers
//! can `use factorium::factorial` directly.

pub mod factorial;
pub mod greeting;
pub mod utils;

pub use factorial::{calculate_factorial, factorial};
pub use greeting::{greet, hello};
pub use utils::*;
