//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. A path registered under
//! some other method answers `405` with an `allow` header; an unknown path
//! goes to the fallback handler (static files) or `404`.
//!
//! Route functions have the shape `async fn(Request) -> impl IntoResponse`.
//! Each is boxed once at registration into a [`BoxedHandler`] closure that
//! maps its output to a [`Response`], so every tree holds a single type.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use http::header::{ALLOW, HeaderValue};
use http::{HeaderMap, Method, StatusCode};
use matchit::Router as MatchitRouter;

use crate::middleware::{recover::recover, trace::trace};
use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::state::AppState;

/// A handler's pending response. `Send + 'static` so [`recover`] can spawn it.
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// A registered route function, shared by every request that matches it.
pub(crate) type BoxedHandler = Arc<dyn Fn(Request) -> BoxFuture + Send + Sync + 'static>;

fn boxed<F, Fut, R>(handler: F) -> BoxedHandler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    Arc::new(move |req: Request| -> BoxFuture {
        let fut = handler(req);
        Box::pin(async move { fut.await.into_response() })
    })
}

/// The application router.
///
/// Build it once at startup around the [`AppState`]; pass it to
/// [`Server::serve`](crate::Server::serve). Each registration returns `self`
/// so calls chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    fallback: Option<BoxedHandler>,
    state: Arc<AppState>,
}

enum Route {
    Found(BoxedHandler),
    MethodNotAllowed(Vec<Method>),
    NotFound,
}

impl Router {
    pub fn new(state: AppState) -> Self {
        Self { routes: HashMap::new(), fallback: None, state: Arc::new(state) }
    }

    /// Register a `GET` handler. `HEAD` requests fall back to it.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or is already registered.
    /// Routes are fixed at startup, so this is a programming error.
    pub fn get<F, Fut, R>(mut self, path: &str, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        self.routes
            .entry(Method::GET)
            .or_default()
            .insert(path, boxed(handler))
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Handler for requests no route matches.
    pub fn fallback<F, Fut, R>(mut self, handler: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        self.fallback = Some(boxed(handler));
        self
    }

    /// Routes one request through the middleware stack and produces one
    /// response.
    pub(crate) async fn dispatch(&self, method: Method, path: String, headers: HeaderMap) -> Response {
        let req = Request::new(method.clone(), path.clone(), headers, Arc::clone(&self.state));
        let user_agent = req.header("user-agent").map(str::to_owned);

        trace(&method, &path, user_agent.as_deref(), self.route(req)).await
    }

    async fn route(&self, req: Request) -> Response {
        match self.lookup(req.method(), req.path()) {
            Route::Found(handler) => recover(handler(req)).await,
            Route::MethodNotAllowed(allowed) => {
                let status = if req.method() == Method::OPTIONS {
                    StatusCode::NO_CONTENT
                } else {
                    StatusCode::METHOD_NOT_ALLOWED
                };
                let builder = Response::builder().status(status);
                match allow_header(&allowed) {
                    Some(value) => builder.header(ALLOW, value).no_body(),
                    None => builder.no_body(),
                }
            }
            Route::NotFound => match &self.fallback {
                Some(handler) => recover(handler(req)).await,
                None => Response::status(StatusCode::NOT_FOUND),
            },
        }
    }

    fn lookup(&self, method: &Method, path: &str) -> Route {
        let found = |m: &Method| {
            self.routes.get(m)
                .and_then(|tree| tree.at(path).ok())
                .map(|matched| Arc::clone(matched.value))
        };

        if let Some(handler) = found(method) {
            return Route::Found(handler);
        }
        if method == Method::HEAD {
            if let Some(handler) = found(&Method::GET) {
                return Route::Found(handler);
            }
        }

        let mut allowed: Vec<Method> = self.routes.iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(m, _)| m.clone())
            .collect();
        if allowed.is_empty() {
            return Route::NotFound;
        }
        if allowed.contains(&Method::GET) && !allowed.contains(&Method::HEAD) {
            allowed.push(Method::HEAD);
        }
        allowed.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Route::MethodNotAllowed(allowed)
    }
}

fn allow_header(methods: &[Method]) -> Option<HeaderValue> {
    let joined = methods.iter().map(Method::as_str).collect::<Vec<_>>().join(", ");
    HeaderValue::try_from(joined).ok()
}
