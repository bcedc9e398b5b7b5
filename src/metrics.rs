use std::time::Instant;
use tracing::debug;

/// A timer that logs the duration of an operation when dropped.
///
/// # Example
///
/// ```ignore
/// pub async fn get_state(&self) -> ViewState {
///     let _timer = OperationTimer::new("get_state");
///     // ... implementation ...
/// }
/// ```
pub struct OperationTimer {
    name: &'static str,
    start: Instant,
}

impl OperationTimer {
    /// Create a new timer for the given operation name.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        debug!(
            operation = %self.name,
            duration_us = %duration.as_micros(),
            "Operation completed"
        );
    }
}

/// Generate a short request ID for correlation.
#[must_use]
pub fn generate_request_id() -> String {
    let uuid_str = uuid::Uuid::new_v4().to_string();
    uuid_str.get(..8).unwrap_or(&uuid_str).to_string()
}
