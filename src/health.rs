//! Liveness and readiness probes.
//!
//! | Probe | Path | Answer |
//! |---|---|---|
//! | **Liveness** | `/healthz` | the process can answer HTTP |
//! | **Readiness** | `/readyz` | the catalog snapshot is in place |
//!
//! The catalog is built before the listener binds, so readiness never has to
//! wait; it reports how many candidates are being served.

use crate::{Request, Response};

/// Always `200 OK` with body `"ok"`.
pub async fn liveness(_req: Request) -> &'static str {
    "ok"
}

/// `200 OK` with body `"ready (<n> planets)"`.
pub async fn readiness(req: Request) -> Response {
    Response::text(format!("ready ({} planets)", req.state().catalog().len()))
}
