//! Middleware layer.
//!
//! Cross-cutting behaviour applied by the router around every handler,
//! outermost first:
//!
//! - [`trace`]: latency measurement, `x-response-time` header, one access
//!   log line per request
//! - [`recover`]: a panicking handler becomes `500 Internal Server Error`
//!   instead of tearing down the connection

pub(crate) mod recover;
pub(crate) mod trace;

pub use trace::X_RESPONSE_TIME;
