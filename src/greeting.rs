//! Greeting stubs.
//!
//! Pure constant helpers kept around as the smallest possible call targets
//! for benchmarking harnesses and smoke tests.

/// Always the literal `"World"`.
pub fn hello() -> &'static str {
    "World"
}

/// Personalized variant of [`hello`].
pub fn greet(name: &str) -> String {
    format!("Hello {name}")
}
