//! # Constants and type definitions for findangular
//!
//! This module centralizes the **conversion factors**, **defaults**, and **common type
//! definitions** used throughout the crate.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians)
//! - Core angle type aliases
//! - Run defaults (catalog location, worker count)
//! - [`AngleUnit`], the unit used when rendering a report

use std::{fmt, str::FromStr};

use crate::angular_errors::AngularError;

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Radians → degrees
pub const DEGRAD: f64 = 180.0 / std::f64::consts::PI;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;

// -------------------------------------------------------------------------------------------------
// Defaults
// -------------------------------------------------------------------------------------------------

/// Catalog read by the command line tool when no path is given.
pub const DEFAULT_CATALOG_PATH: &str = "data/tycho-trimmed.csv";

/// Number of workers used when none is requested.
pub const DEFAULT_WORKERS: usize = 1;

/// Unit in which angular separations are rendered.
///
/// All computations are carried out in **radians**; the unit only matters at the
/// reporting boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Express an angle given in radians in this unit.
    #[inline]
    pub fn from_radians(self, angle: Radian) -> f64 {
        match self {
            AngleUnit::Degrees => angle * DEGRAD,
            AngleUnit::Radians => angle,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "deg",
            AngleUnit::Radians => "rad",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "degrees"),
            AngleUnit::Radians => write!(f, "radians"),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = AngularError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(AngleUnit::Degrees),
            "rad" | "radian" | "radians" => Ok(AngleUnit::Radians),
            other => Err(AngularError::InvalidRunParameter(format!(
                "unknown angle unit '{other}' (expected degrees or radians)"
            ))),
        }
    }
}
