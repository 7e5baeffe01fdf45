//! CSV catalog reader.
//!
//! The Kepler cumulative table is exported by the NASA Exoplanet Archive as
//! comma-separated text with a block of `#` comment lines (column
//! descriptions) above the header. The reader skips comment lines wherever
//! they appear, takes the first remaining line as the header and turns every
//! other line into a [`Row`].
//!
//! Parsing is strict: a data line whose field count differs from the header's
//! fails the whole load instead of being padded or truncated.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::model::{Header, Row};
use crate::error::Error;

/// Lines starting with this byte are ignored.
pub const COMMENT: u8 = b'#';

/// Reads every data row of the catalog at `path`, in file order.
///
/// The file handle lives inside the CSV reader and is closed when the reader
/// drops, on success and on every error path alike.
pub fn load_rows(path: &Path) -> Result<Vec<Row>, Error> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;

    let rows = parse_rows(file).map_err(|e| Error::from_csv(path, e))?;
    debug!(path = %path.display(), rows = rows.len(), "catalog parsed");
    Ok(rows)
}

/// Parses catalog rows from any byte source.
pub fn parse_rows<R: Read>(source: R) -> Result<Vec<Row>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .comment(Some(COMMENT))
        .has_headers(true)
        .flexible(false)
        .from_reader(source);

    let header = Arc::new(Header::new(reader.headers()?.iter()));

    reader
        .records()
        .map(|record| -> Result<Row, csv::Error> {
            let record = record?;
            let values = record.iter().map(str::to_owned).collect();
            Ok(Row::new(Arc::clone(&header), values))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<Row>, csv::Error> {
        parse_rows(text.as_bytes())
    }

    #[test]
    fn skips_comments_before_header_and_mid_file() {
        let text = "\
# This file was produced by the NASA Exoplanet Archive
# COLUMN kepid: KepID
kepid,koi_disposition
1,CONFIRMED
# interleaved note
2,FALSE POSITIVE
";
        let rows = parse(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("kepid"), Some("1"));
        assert_eq!(rows[1].get("koi_disposition"), Some("FALSE POSITIVE"));
        assert!(rows.iter().all(|r| r.iter().all(|(_, v)| !v.starts_with('#'))));
    }

    #[test]
    fn every_row_carries_the_header_columns() {
        let text = "a,b,c\n1,2,3\n4,,6\n";
        let rows = parse(text).unwrap();
        for row in &rows {
            assert_eq!(row.columns().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        }
        assert_eq!(rows[1].get("b"), Some(""));
    }

    #[test]
    fn preserves_source_order() {
        let rows = parse("n\n3\n1\n2\n").unwrap();
        let order: Vec<_> = rows.iter().filter_map(|r| r.get("n")).collect();
        assert_eq!(order, vec!["3", "1", "2"]);
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        let err = parse("a,b\n1,2\n3\n").unwrap_err();
        assert!(matches!(err.kind(), csv::ErrorKind::UnequalLengths { .. }));
    }

    #[test]
    fn header_only_yields_no_rows() {
        assert!(parse("# nothing yet\na,b\n").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_rows(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
