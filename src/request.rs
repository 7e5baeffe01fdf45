//! Incoming HTTP request type.

use std::sync::Arc;

use http::{HeaderMap, Method};

use crate::state::AppState;

/// An incoming request, reduced to what handlers need.
///
/// The service only answers reads, so the body is never collected.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) headers: HeaderMap,
    pub(crate) state: Arc<AppState>,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        path: String,
        headers: HeaderMap,
        state: Arc<AppState>,
    ) -> Self {
        Self { method, path, headers, state }
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn state(&self) -> &AppState { &self.state }

    /// Case-insensitive header lookup. Non-ASCII values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
