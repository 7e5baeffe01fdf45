use std::io::Write;

use kepler::catalog::filter::{self, PLANET_RADIUS, STELLAR_MASS, STELLAR_RADIUS};
use kepler::catalog::loader;
use kepler::catalog::model::PROJECTED_COLUMNS;
use kepler::{Error, PlanetCatalog};
use tempfile::NamedTempFile;

const KOI_TABLE: &str = "\
# This file was produced by the NASA Exoplanet Archive  http://exoplanetarchive.ipac.caltech.edu
#
# COLUMN kepid:          KepID
# COLUMN kepler_name:    Kepler Name
# COLUMN koi_disposition: Exoplanet Archive Disposition
#
kepid,kepoi_name,kepler_name,koi_disposition,koi_period,koi_prad,koi_srad,koi_smass,koi_count,koi_steff
10797460,K00752.01,Kepler-227 b,CONFIRMED,9.48,2.26,0.927,0.919,2,5455
10811496,K00753.01,,CANDIDATE,19.89,1.0,1.0,1.0,1,5853
9002278,K00701.03,Kepler-62 e,CONFIRMED,122.39,1.39,1.004,0.900,5,4925
# mid-file comment,CONFIRMED,1.0,1.0,1.0
11853905,K00007.01,Kepler-4 b,CONFIRMED,3.21,not-a-number,1.005,1.000,1,5781
8311864,K00709.01,Kepler-452 b,CONFIRMED,384.84,1.09,1.006,1.037,1,5757
6521045,K00111.01,Kepler-100 b,CONFIRMED,12.8,0.5,1.0,1.0,3,5825
";

fn write_catalog(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_only_habitable_candidates_in_file_order() {
    let file = write_catalog(KOI_TABLE);
    let catalog = PlanetCatalog::load(file.path()).unwrap();

    let names: Vec<_> = catalog
        .planets()
        .iter()
        .filter_map(|p| p.kepler_name.as_deref())
        .collect();
    assert_eq!(names, vec!["Kepler-62 e", "Kepler-452 b"]);
}

#[test]
fn every_catalog_entry_satisfies_the_predicate() {
    let file = write_catalog(KOI_TABLE);
    let rows = loader::load_rows(file.path()).unwrap();
    let catalog = PlanetCatalog::from_rows(&rows);

    let survivors: Vec<_> = rows.iter().filter(|r| filter::is_habitable(r)).collect();
    assert_eq!(survivors.len(), catalog.len());

    for (row, planet) in survivors.iter().zip(catalog.planets()) {
        assert_eq!(row.get("koi_disposition"), Some("CONFIRMED"));
        assert!(PLANET_RADIUS.contains(filter::numeric(row.get("koi_prad"))));
        assert!(STELLAR_RADIUS.contains(filter::numeric(row.get("koi_srad"))));
        assert!(STELLAR_MASS.contains(filter::numeric(row.get("koi_smass"))));
        assert_eq!(planet.kepler_name.as_deref(), row.get("kepler_name"));
        assert_eq!(planet.keys().collect::<Vec<_>>(), PROJECTED_COLUMNS.to_vec());
    }
}

#[test]
fn rows_match_the_header_and_skip_comments() {
    let file = write_catalog(KOI_TABLE);
    let rows = loader::load_rows(file.path()).unwrap();

    assert_eq!(rows.len(), 6);
    let header: Vec<_> = rows[0].columns().collect();
    assert_eq!(header[0], "kepid");
    for row in &rows {
        assert_eq!(row.columns().collect::<Vec<_>>(), header);
        assert!(!row.get("kepid").unwrap().starts_with('#'));
    }
}

#[test]
fn ragged_row_fails_the_load() {
    let file = write_catalog("kepler_name,koi_prad\nKepler-1 b,1.0\nKepler-2 b\n");
    match PlanetCatalog::load(file.path()) {
        Err(Error::Parse { line, .. }) => assert_eq!(line, Some(3)),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn non_utf8_field_fails_the_load() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"kepler_name,koi_prad\nK\xff,1.0\n").unwrap();
    file.flush().unwrap();

    match PlanetCatalog::load(file.path()) {
        Err(Error::Parse { line, message, .. }) => {
            assert_eq!(line, Some(2));
            assert!(message.to_lowercase().contains("utf-8"), "{message}");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn missing_file_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlanetCatalog::load(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn empty_table_gives_empty_catalog() {
    let file = write_catalog("# nothing archived yet\n");
    assert!(PlanetCatalog::load(file.path()).unwrap().is_empty());
}
