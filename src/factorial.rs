//! Factorial computation with wall-clock timing.

use std::time::Instant;

use rug::Integer;

/// Multiply every integer in `1..number` and report the elapsed time.
///
/// The upper bound is exclusive: `calculate_factorial(5)` is `1 * 2 * 3 * 4`,
/// and any `number <= 1` leaves the accumulator at the multiplicative
/// identity. The elapsed wall-clock time of the loop is printed to stdout in
/// microseconds.
pub fn calculate_factorial(number: usize) -> Integer {
    let start = Instant::now();
    let mut res = Integer::from(1);
    for index in 1..number {
        res *= index;
    }
    println!("Time taken: {} micro seconds", start.elapsed().as_micros());
    res
}

/// Log the call, then delegate to [`calculate_factorial`].
///
/// Returns the calculator's result unchanged.
pub fn factorial(number: usize) -> Integer {
    log::info!("Calling calculate factorial");
    calculate_factorial(number)
}
