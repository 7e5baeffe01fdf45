//! The habitable-planet catalog.
//!
//! ```text
//!  kepler_exoplanets_nasa.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  skip `#` lines, header → Vec<Row>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  habitability predicate, six-column projection
//!   └──────────┘
//!        │
//!        ▼
//!   PlanetCatalog   built once at startup, read-only afterwards
//! ```

pub mod filter;
pub mod loader;
pub mod model;

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::Error;

pub use model::{FilteredPlanet, Header, Row};

/// Immutable snapshot of the habitable candidates.
///
/// Cloning shares the underlying slice. Nothing mutates it after
/// [`PlanetCatalog::load`]; a reload would build a new catalog and swap it in
/// whole.
#[derive(Clone, Debug, Default)]
pub struct PlanetCatalog {
    planets: Arc<[FilteredPlanet]>,
}

impl PlanetCatalog {
    /// Reads the catalog file at `path` and keeps the habitable candidates.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let rows = loader::load_rows(path)?;
        let catalog = Self::from_rows(&rows);
        info!(
            rows = rows.len(),
            path = %path.display(),
            "{} habitable planets found",
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn from_rows(rows: &[Row]) -> Self {
        Self { planets: filter::habitable_planets(rows).into() }
    }

    /// The cached candidates, in catalog file order.
    pub fn planets(&self) -> &[FilteredPlanet] {
        &self.planets
    }

    pub fn len(&self) -> usize { self.planets.len() }
    pub fn is_empty(&self) -> bool { self.planets.is_empty() }
}
