//! Route table.

use crate::state::AppState;
use crate::{api, health, static_files, Router};

/// Wires every route of the service around `state`.
pub fn router(state: AppState) -> Router {
    Router::new(state)
        .get("/", api::index)
        .get("/planets", api::planets)
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness)
        .fallback(static_files::serve)
}
