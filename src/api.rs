//! JSON API routes.

use crate::{Request, Response};

/// `GET /`: a one-line banner so a bare request shows what answered it.
pub async fn index(_req: Request) -> &'static str {
    "Kepler habitable planets API"
}

/// `GET /planets`: every cached habitable candidate, in catalog order.
pub async fn planets(req: Request) -> Response {
    Response::json(req.state().catalog().planets())
}
