//! # Star catalog
//!
//! In-memory, read-only collection of celestial positions that the pairwise engine scans.
//!
//! ## Overview
//! -----------------
//! * [`Point`] – one catalog record: integer identifier, right ascension and declination
//!   in **degrees**.
//! * [`Catalog`] – an ordered, owned sequence of [`Point`]s. A point's identity during a run
//!   is its **position** in the catalog, not its `id`.
//! * [`catalog_reader`] – delimited text ingestion (see [`Catalog::from_file`]).
//!
//! A catalog is built once and never mutated afterwards; every worker borrows it
//! immutably for the whole run.
//!
//! ## Example
//! -----------------
//! ```rust
//! use findangular::catalog::{Catalog, Point};
//!
//! let catalog = Catalog::from_points(vec![
//!     Point::new(1, 0.0, 0.0),
//!     Point::new(2, 90.0, 0.0),
//!     Point::new(3, 180.0, 0.0),
//! ]);
//! assert_eq!(catalog.len(), 3);
//! assert_eq!(catalog.pair_count(), 3);
//! ```
pub mod catalog_reader;

use std::io::Read;

use camino::Utf8Path;
use serde::Deserialize;

use crate::{
    angular_errors::AngularError,
    constants::{Degree, Radian},
    partition::unique_pairs,
    separation::angular_distance,
};

pub use catalog_reader::LoaderOptions;

/// A single catalog entry.
///
/// Field order matches the on-disk record layout (`id ra dec`) so that records
/// deserialize positionally.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub id: i64,
    /// Right ascension, degrees
    pub ra: Degree,
    /// Declination, degrees
    pub dec: Degree,
}

impl Point {
    pub fn new(id: i64, ra: Degree, dec: Degree) -> Self {
        Point { id, ra, dec }
    }

    /// Great-circle separation to `other`, in radians.
    #[inline]
    pub fn separation(&self, other: &Point) -> Radian {
        angular_distance(self.ra, self.dec, other.ra, other.dec)
    }
}

/// Ordered, immutable set of [`Point`]s; indices are dense over `[0, len)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    points: Vec<Point>,
}

impl Catalog {
    pub fn from_points(points: Vec<Point>) -> Self {
        Catalog { points }
    }

    /// Load a catalog from a delimited text file.
    ///
    /// Arguments
    /// -----------------
    /// * `path` – location of the catalog file.
    /// * `options` – delimiter, comment marker, and optional record cap.
    ///
    /// Return
    /// ----------
    /// * The loaded catalog, or an [`AngularError`] if the file cannot be opened or a record
    ///   is malformed.
    ///
    /// See also
    /// ------------
    /// * [`catalog_reader::read_catalog`] – Record-level parsing rules.
    pub fn from_file(path: &Utf8Path, options: &LoaderOptions) -> Result<Self, AngularError> {
        let file = std::fs::File::open(path).map_err(|source| AngularError::CatalogOpen {
            path: path.to_string(),
            source,
        })?;
        catalog_reader::read_catalog(file, options)
    }

    /// Load a catalog from any byte source (in-memory buffers, pipes, ...).
    pub fn from_reader<R: Read>(source: R, options: &LoaderOptions) -> Result<Self, AngularError> {
        catalog_reader::read_catalog(source, options)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Number of unordered pairs `N·(N−1)/2` a full run must visit.
    #[inline]
    pub fn pair_count(&self) -> u64 {
        unique_pairs(self.points.len())
    }
}

impl FromIterator<Point> for Catalog {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Catalog::from_points(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
