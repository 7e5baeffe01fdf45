//! Shared application state.

use std::path::{Path, PathBuf};

use crate::catalog::PlanetCatalog;

/// Everything handlers read, built once during bootstrap.
///
/// The router owns it behind an `Arc`; every [`Request`](crate::Request)
/// carries a handle. There is no interior mutability.
#[derive(Debug, Default)]
pub struct AppState {
    catalog: PlanetCatalog,
    public_dir: PathBuf,
}

impl AppState {
    pub fn new(catalog: PlanetCatalog, public_dir: impl Into<PathBuf>) -> Self {
        Self { catalog, public_dir: public_dir.into() }
    }

    pub fn catalog(&self) -> &PlanetCatalog { &self.catalog }
    pub fn public_dir(&self) -> &Path { &self.public_dir }
}
