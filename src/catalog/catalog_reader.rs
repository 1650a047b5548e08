//! # Delimited catalog reader
//!
//! Turns a delimited text source into a [`Catalog`].
//!
//! ## Record layout
//! -----------------
//! Each non-blank, non-comment line carries exactly three fields:
//!
//! ```text
//! <id: integer> <right ascension: degrees> <declination: degrees>
//! ```
//!
//! No header row is expected.
//!
//! ## Tokenization
//! -----------------
//! Records are split by the [`csv`] crate on a single delimiter byte (a space by default).
//! Runs of the delimiter collapse: empty fields are dropped before the field count is checked,
//! so `"1   10.0  -5.0"` is a valid record. Surrounding whitespace (tabs included) is trimmed
//! from every field.
//!
//! ## Error Handling
//! -----------------
//! Every failure is fatal for the load:
//! * a field count other than three, an unparseable number, or a non-finite coordinate is
//!   reported as [`AngularError::MalformedRecord`] with the 1-based line number and a
//!   [`ParseRecordError`] payload;
//! * exceeding [`LoaderOptions::max_records`] yields [`AngularError::CatalogTooLarge`];
//! * a failed allocation while growing the catalog yields [`AngularError::AllocationFailed`].
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use crate::{
    angular_errors::AngularError,
    catalog::{Catalog, Point},
};

/// Number of fields in a well-formed record.
const RECORD_FIELDS: usize = 3;

/// Line-level parsing errors.
///
/// Variants
/// -----------------
/// * `WrongFieldCount` – The record does not have exactly three fields; payload is the count found.
/// * `InvalidField` – A field could not be parsed as the expected number type.
/// * `NonFiniteCoordinate` – Right ascension or declination parsed to `NaN` or an infinity.
#[derive(Error, Debug, PartialEq)]
pub enum ParseRecordError {
    #[error("expected 3 fields, found {0}")]
    WrongFieldCount(usize),
    #[error("invalid field: {0}")]
    InvalidField(String),
    #[error("non-finite coordinate: {0}")]
    NonFiniteCoordinate(String),
}

/// Options controlling how a catalog source is tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Field separator byte
    pub delimiter: u8,
    /// Lines starting with this byte are skipped
    pub comment: Option<u8>,
    /// Upper bound on the number of records, `None` for no limit
    pub max_records: Option<usize>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        LoaderOptions {
            delimiter: b' ',
            comment: Some(b'#'),
            max_records: None,
        }
    }
}

/// Read every record of `source` into a [`Catalog`].
///
/// Arguments
/// -----------------
/// * `source` – any byte reader positioned at the first record.
/// * `options` – tokenization options, see [`LoaderOptions`].
///
/// Return
/// ----------
/// * The catalog in source order, or the first error encountered.
pub(crate) fn read_catalog<R: Read>(
    source: R,
    options: &LoaderOptions,
) -> Result<Catalog, AngularError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(options.delimiter)
        .comment(options.comment)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(source);

    let mut points: Vec<Point> = Vec::new();
    let mut record = StringRecord::new();
    let mut fields = StringRecord::new();

    while reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |pos| pos.line());

        fields.clear();
        record
            .iter()
            .filter(|field| !field.is_empty())
            .for_each(|field| fields.push_field(field));

        // A line made only of delimiters carries no record.
        if fields.is_empty() {
            continue;
        }

        if let Some(max) = options.max_records {
            if points.len() >= max {
                return Err(AngularError::CatalogTooLarge { max });
            }
        }

        let point =
            parse_point(&fields).map_err(|error| AngularError::MalformedRecord { line, error })?;

        points
            .try_reserve(1)
            .map_err(|err| AngularError::AllocationFailed {
                what: "catalog",
                reason: err.to_string(),
            })?;
        points.push(point);
    }

    tracing::debug!(records = points.len(), "catalog source fully read");
    Ok(Catalog::from_points(points))
}

/// Parse the non-empty fields of one record into a [`Point`].
fn parse_point(fields: &StringRecord) -> Result<Point, ParseRecordError> {
    if fields.len() != RECORD_FIELDS {
        return Err(ParseRecordError::WrongFieldCount(fields.len()));
    }

    let point: Point = fields
        .deserialize(None)
        .map_err(|err| ParseRecordError::InvalidField(err.to_string()))?;

    if !point.ra.is_finite() || !point.dec.is_finite() {
        return Err(ParseRecordError::NonFiniteCoordinate(format!(
            "ra={}, dec={}",
            point.ra, point.dec
        )));
    }

    Ok(point)
}

#[cfg(test)]
mod catalog_reader_test {
    use super::*;

    fn read(text: &str) -> Result<Catalog, AngularError> {
        read_catalog(text.as_bytes(), &LoaderOptions::default())
    }

    #[test]
    fn test_parse_point_valid() {
        let fields = StringRecord::from(vec!["42", "10.5", "-3.25"]);
        assert_eq!(parse_point(&fields), Ok(Point::new(42, 10.5, -3.25)));
    }

    #[test]
    fn test_parse_point_wrong_field_count() {
        let fields = StringRecord::from(vec!["42", "10.5", "-3.25", "7"]);
        assert_eq!(
            parse_point(&fields),
            Err(ParseRecordError::WrongFieldCount(4))
        );
        let fields = StringRecord::from(vec!["42", "10.5"]);
        assert_eq!(
            parse_point(&fields),
            Err(ParseRecordError::WrongFieldCount(2))
        );
    }

    #[test]
    fn test_parse_point_invalid_number() {
        let fields = StringRecord::from(vec!["abc", "10.5", "-3.25"]);
        assert!(matches!(
            parse_point(&fields),
            Err(ParseRecordError::InvalidField(_))
        ));
        let fields = StringRecord::from(vec!["1", "ten", "-3.25"]);
        assert!(matches!(
            parse_point(&fields),
            Err(ParseRecordError::InvalidField(_))
        ));
    }

    #[test]
    fn test_parse_point_non_finite() {
        let fields = StringRecord::from(vec!["1", "NaN", "0.0"]);
        assert!(matches!(
            parse_point(&fields),
            Err(ParseRecordError::NonFiniteCoordinate(_))
        ));
        let fields = StringRecord::from(vec!["1", "0.0", "inf"]);
        assert!(matches!(
            parse_point(&fields),
            Err(ParseRecordError::NonFiniteCoordinate(_))
        ));
    }

    #[test]
    fn test_repeated_delimiters_collapse() {
        let catalog = read("1   10.0    20.0\n2 30.0\t -40.0 \n").unwrap();
        assert_eq!(
            catalog.points(),
            &[Point::new(1, 10.0, 20.0), Point::new(2, 30.0, -40.0)]
        );
    }

    #[test]
    fn test_blank_and_comment_lines_are_skipped() {
        let catalog = read("# id ra dec\n\n1 0 0\n   \n2 90 0\n").unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_malformed_record_reports_line() {
        let err = read("1 0 0\n2 90 0\n3 180 0 99\n").unwrap_err();
        assert_eq!(
            err,
            AngularError::MalformedRecord {
                line: 3,
                error: ParseRecordError::WrongFieldCount(4),
            }
        );
    }

    #[test]
    fn test_max_records() {
        let options = LoaderOptions {
            max_records: Some(2),
            ..LoaderOptions::default()
        };
        let err = read_catalog("1 0 0\n2 1 1\n3 2 2\n".as_bytes(), &options).unwrap_err();
        assert_eq!(err, AngularError::CatalogTooLarge { max: 2 });

        let ok = read_catalog("1 0 0\n2 1 1\n".as_bytes(), &options).unwrap();
        assert_eq!(ok.len(), 2);
    }

    #[test]
    fn test_comma_delimiter() {
        let options = LoaderOptions {
            delimiter: b',',
            ..LoaderOptions::default()
        };
        let catalog = read_catalog("5,1.5,2.5\n6, 3.5 ,4.5\n".as_bytes(), &options).unwrap();
        assert_eq!(
            catalog.points(),
            &[Point::new(5, 1.5, 2.5), Point::new(6, 3.5, 4.5)]
        );
    }

    #[test]
    fn test_empty_source() {
        assert!(read("").unwrap().is_empty());
    }
}
