//! Access logging and response timing.

use std::future::Future;
use std::time::Instant;

use http::header::{HeaderName, HeaderValue};
use http::Method;
use tracing::info;

use crate::response::Response;

/// Handler latency in whole milliseconds, e.g. `3ms`.
pub const X_RESPONSE_TIME: HeaderName = HeaderName::from_static("x-response-time");

/// Awaits `next`, stamps the elapsed time on the response and logs
/// `"<METHOD> <path> : <n>ms"`.
pub(crate) async fn trace<F>(method: &Method, path: &str, user_agent: Option<&str>, next: F) -> Response
where
    F: Future<Output = Response>,
{
    let start = Instant::now();
    let mut res = next.await;
    let elapsed = start.elapsed().as_millis();

    if let Ok(value) = HeaderValue::try_from(format!("{elapsed}ms")) {
        res.insert_header(X_RESPONSE_TIME, value);
    }

    info!(
        status = res.status_code().as_u16(),
        user_agent = user_agent.unwrap_or("-"),
        "{method} {path} : {elapsed}ms"
    );
    res
}
