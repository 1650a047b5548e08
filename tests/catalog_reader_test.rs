use camino::Utf8Path;
use findangular::{
    catalog::catalog_reader::ParseRecordError, AngularError, Catalog, LoaderOptions, Point,
};

#[test]
fn test_missing_file() {
    let err = Catalog::from_file(
        Utf8Path::new("tests/data/does_not_exist.txt"),
        &LoaderOptions::default(),
    )
    .unwrap_err();
    match err {
        AngularError::CatalogOpen { path, .. } => {
            assert_eq!(path, "tests/data/does_not_exist.txt")
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_malformed_file_reports_line() {
    let err = Catalog::from_file(
        Utf8Path::new("tests/data/malformed.txt"),
        &LoaderOptions::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        AngularError::MalformedRecord {
            line: 3,
            error: ParseRecordError::WrongFieldCount(2),
        }
    );
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn test_comma_delimited_reader() {
    let options = LoaderOptions {
        delimiter: b',',
        ..LoaderOptions::default()
    };
    let catalog = Catalog::from_reader("7,12.5,-3.0\n8, 200.0 ,45.5\n".as_bytes(), &options).unwrap();
    assert_eq!(
        catalog.points(),
        &[Point::new(7, 12.5, -3.0), Point::new(8, 200.0, 45.5)]
    );
}

#[test]
fn test_max_records_guard() {
    let options = LoaderOptions {
        max_records: Some(3),
        ..LoaderOptions::default()
    };
    let err = Catalog::from_file(Utf8Path::new("tests/data/tycho_sample.txt"), &options)
        .unwrap_err();
    assert_eq!(err, AngularError::CatalogTooLarge { max: 3 });
}
