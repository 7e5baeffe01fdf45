//! Static front-end assets.
//!
//! Only a fixed whitelist of request paths is served, each mapped onto the
//! public directory. Any other path is `404`, so request paths never reach
//! the filesystem unchecked.

use http::StatusCode;
use tracing::warn;

use crate::response::{ContentType, IntoResponse, Response};
use crate::Request;

/// Request paths that map to files under the public directory.
pub const WHITELIST: [&str; 4] = [
    "/index.html",
    "/stylesheets/style.css",
    "/javascripts/script.js",
    "/images/favicon.png",
];

/// Fallback handler: serves a whitelisted asset or answers `404`.
pub async fn serve(req: Request) -> Response {
    let path = req.path();
    if !WHITELIST.contains(&path) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let file = req.state().public_dir().join(path.trim_start_matches('/'));
    match tokio::fs::read(&file).await {
        Ok(body) => Response::builder().bytes(ContentType::from_path(&file), body),
        Err(e) => {
            warn!(file = %file.display(), "static asset unavailable: {e}");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
