//! Row and projection types.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

// ── Column names ──────────────────────────────────────────────────────────────

pub const KEPLER_NAME: &str = "kepler_name";
pub const KOI_DISPOSITION: &str = "koi_disposition";
pub const KOI_PRAD: &str = "koi_prad";
pub const KOI_SMASS: &str = "koi_smass";
pub const KOI_SRAD: &str = "koi_srad";
pub const KOI_COUNT: &str = "koi_count";
pub const KOI_STEFF: &str = "koi_steff";

/// The columns kept by [`FilteredPlanet`], in serialization order.
pub const PROJECTED_COLUMNS: [&str; 6] =
    [KEPLER_NAME, KOI_PRAD, KOI_SMASS, KOI_SRAD, KOI_COUNT, KOI_STEFF];

// ── Header ────────────────────────────────────────────────────────────────────

/// Column names of one catalog file, shared by every [`Row`] parsed from it.
#[derive(Debug, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Header {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        // Duplicate names resolve to the last occurrence.
        let index = names.iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self { names, index }
    }

    pub fn names(&self) -> &[String] { &self.names }

    fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }
}

// ── Row ───────────────────────────────────────────────────────────────────────

/// One data record of the catalog, keyed by column name.
///
/// Values are the raw strings from the file. Nothing is coerced here; numeric
/// interpretation is the filter's business.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    header: Arc<Header>,
    values: Vec<String>,
}

impl Row {
    /// Builds a row from `values` laid out in `header` order.
    ///
    /// The loader guarantees one value per header column; a shorter row
    /// simply reports the trailing columns as absent.
    pub fn new(header: Arc<Header>, values: Vec<String>) -> Self {
        Self { header, values }
    }

    /// Raw value of `column`, or `None` if the file has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        let i = self.header.position(column)?;
        self.values.get(i).map(String::as_str)
    }

    /// Column names in header order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.header.names().iter().take(self.values.len()).map(String::as_str)
    }

    /// `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns().zip(self.values.iter().map(String::as_str))
    }
}

// ── FilteredPlanet ────────────────────────────────────────────────────────────

/// A habitable candidate reduced to the six served columns.
///
/// Serializes as a flat JSON object. A column missing from the source file is
/// left out of the object instead of being defaulted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilteredPlanet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kepler_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub koi_prad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub koi_smass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub koi_srad: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub koi_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub koi_steff: Option<String>,
}

impl FilteredPlanet {
    /// Copies the projected columns out of `row`, verbatim.
    pub fn from_row(row: &Row) -> Self {
        let take = |column: &str| row.get(column).map(str::to_owned);
        Self {
            kepler_name: take(KEPLER_NAME),
            koi_prad: take(KOI_PRAD),
            koi_smass: take(KOI_SMASS),
            koi_srad: take(KOI_SRAD),
            koi_count: take(KOI_COUNT),
            koi_steff: take(KOI_STEFF),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        let value = match column {
            KEPLER_NAME => &self.kepler_name,
            KOI_PRAD => &self.koi_prad,
            KOI_SMASS => &self.koi_smass,
            KOI_SRAD => &self.koi_srad,
            KOI_COUNT => &self.koi_count,
            KOI_STEFF => &self.koi_steff,
            _ => return None,
        };
        value.as_deref()
    }

    /// Names of the columns present, in [`PROJECTED_COLUMNS`] order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        PROJECTED_COLUMNS.into_iter().filter(|c| self.get(c).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(names: &[&str], values: &[&str]) -> Row {
        let header = Arc::new(Header::new(names.iter().copied()));
        Row::new(header, values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn row_lookup_by_column_name() {
        let r = row(&["a", "b"], &["1", "2"]);
        assert_eq!(r.get("b"), Some("2"));
        assert_eq!(r.get("c"), None);
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn projection_keeps_only_the_six_columns() {
        let r = row(
            &["kepid", KEPLER_NAME, KOI_DISPOSITION, KOI_PRAD, KOI_SMASS, KOI_SRAD, KOI_COUNT, KOI_STEFF],
            &["10", "Kepler-1b", "CONFIRMED", "1.00", "0.90", "1.000", "2", "5700"],
        );
        let planet = FilteredPlanet::from_row(&r);
        assert_eq!(planet.keys().collect::<Vec<_>>(), PROJECTED_COLUMNS.to_vec());
        assert_eq!(planet.get(KOI_PRAD), Some("1.00"));
        assert_eq!(planet.get(KOI_DISPOSITION), None);

        let json = serde_json::to_value(&planet).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 6);
        assert_eq!(json["koi_steff"], "5700");
    }

    #[test]
    fn missing_columns_are_absent_not_defaulted() {
        let r = row(&[KEPLER_NAME, KOI_PRAD], &["Kepler-2b", "1.1"]);
        let planet = FilteredPlanet::from_row(&r);
        assert_eq!(planet.keys().collect::<Vec<_>>(), vec![KEPLER_NAME, KOI_PRAD]);
        assert_eq!(serde_json::to_string(&planet).unwrap(), r#"{"kepler_name":"Kepler-2b","koi_prad":"1.1"}"#);
    }
}
