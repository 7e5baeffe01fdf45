//! Habitability predicate and column projection.
//!
//! A candidate counts as habitable when it is a confirmed planet of roughly
//! Earth size orbiting a roughly Sun-like star:
//!
//! | Column | Meaning | Band (open) |
//! |---|---|---|
//! | `koi_disposition` | archive disposition | `== "CONFIRMED"` |
//! | `koi_prad` | planet radius, Earth radii | `(0.5, 1.5)` |
//! | `koi_srad` | stellar radius, solar radii | `(0.99, 1.01)` |
//! | `koi_smass` | stellar mass, solar masses | `(0.78, 1.04)` |
//!
//! Fields are coerced with [`numeric`]. A blank or garbled field becomes NaN,
//! which no band contains, so the row drops out instead of failing the load.

use super::model::{FilteredPlanet, KOI_DISPOSITION, KOI_PRAD, KOI_SMASS, KOI_SRAD, Row};

pub const CONFIRMED: &str = "CONFIRMED";

pub const PLANET_RADIUS: Band = Band::new(0.5, 1.5);
pub const STELLAR_RADIUS: Band = Band::new(0.99, 1.01);
pub const STELLAR_MASS: Band = Band::new(0.78, 1.04);

/// An open interval `(min, max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Strictly inside the band. Always false for NaN.
    pub fn contains(self, value: f64) -> bool {
        self.min < value && value < self.max
    }
}

/// Coerces a raw field to `f64`, yielding NaN when it is absent, empty or
/// not a number.
pub fn numeric(field: Option<&str>) -> f64 {
    field
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
        .unwrap_or(f64::NAN)
}

pub fn is_habitable(row: &Row) -> bool {
    row.get(KOI_DISPOSITION) == Some(CONFIRMED)
        && PLANET_RADIUS.contains(numeric(row.get(KOI_PRAD)))
        && STELLAR_RADIUS.contains(numeric(row.get(KOI_SRAD)))
        && STELLAR_MASS.contains(numeric(row.get(KOI_SMASS)))
}

pub fn project(row: &Row) -> FilteredPlanet {
    FilteredPlanet::from_row(row)
}

/// Keeps the habitable rows, in input order, projected to the served columns.
pub fn habitable_planets(rows: &[Row]) -> Vec<FilteredPlanet> {
    rows.iter()
        .filter(|row| is_habitable(row))
        .map(project)
        .collect()
}
