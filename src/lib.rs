//! # kepler
//!
//! Serves the habitable subset of the Kepler exoplanet candidate catalog as
//! JSON, plus a handful of static front-end files.
//!
//! ## Startup
//!
//! 1. [`PlanetCatalog::load`] reads the CSV table, keeps confirmed planets of
//!    roughly Earth size around roughly Sun-like stars, and projects them to
//!    six columns. A missing or malformed file stops the process here.
//! 2. The catalog goes into an [`AppState`], the state into a [`Router`].
//! 3. [`Server::serve`] starts accepting connections. Handlers only ever
//!    read the snapshot built in step 1.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use kepler::{AppState, PlanetCatalog, Server, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), kepler::Error> {
//!     let catalog = PlanetCatalog::load(Path::new("data/kepler_exoplanets_nasa.csv"))?;
//!     let router = app::router(AppState::new(catalog, "public"));
//!     Server::bind("0.0.0.0:8000".parse().unwrap()).serve(router).await
//! }
//! ```

mod error;
mod request;
mod response;
mod router;
mod server;
mod state;

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod health;
pub mod middleware;
pub mod static_files;

pub use catalog::{FilteredPlanet, PlanetCatalog, Row};
pub use error::Error;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use state::AppState;
