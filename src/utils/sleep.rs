//! Sleep utilities

use std::time::Duration;

/// Suspend the current task for 10 milliseconds (10ms) - fixed short delay
///
/// Performs no work and resolves with no value; resumption happens after at
/// least the requested delay.
pub async fn async_operation() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}
