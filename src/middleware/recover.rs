//! Panic recovery.

use http::StatusCode;
use tracing::error;

use crate::router::BoxFuture;
use crate::response::Response;

pub(crate) const BODY: &str = "Internal Server Error";

/// Runs `fut` on its own task so a panic surfaces as a `JoinError` rather
/// than unwinding through the connection.
pub(crate) async fn recover(fut: BoxFuture) -> Response {
    match tokio::spawn(fut).await {
        Ok(res) => res,
        Err(e) => {
            if e.is_panic() {
                error!("handler panicked: {}", panic_message(e.into_panic()));
            } else {
                error!("handler task cancelled: {e}");
            }
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .text(BODY)
        }
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
