//! Timed operation runner.
//!
//! Wraps a single encode or decode call, measures its wall-clock duration and
//! turns every way the call can end (success, error, panic) into a
//! [`TimedResult`]. Nothing escapes this boundary.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Outcome of one timed operation.
#[derive(Debug, Clone)]
pub struct TimedResult<T> {
    /// Time spent inside the operation, up to completion or failure.
    pub elapsed: Duration,
    /// Operation output or failure cause.
    pub result: Result<T, String>,
}

impl<T> TimedResult<T> {
    /// Whether the operation succeeded.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Run `op` once and time it.
///
/// Errors are stringified through `Display`. A panic inside `op` is caught and
/// reported as a failure with cause `panicked: <message>`.
pub fn run_timed<T, E, F>(op: F) -> TimedResult<T>
where
    F: FnOnce() -> Result<T, E>,
    E: std::fmt::Display,
{
    let start = Instant::now();
    let outcome = panic::catch_unwind(AssertUnwindSafe(op));
    let elapsed = start.elapsed();

    let result = match outcome {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(err.to_string()),
        Err(payload) => Err(format!("panicked: {}", panic_message(payload.as_ref()))),
    };

    TimedResult { elapsed, result }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}
