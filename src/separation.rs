//! # Great-circle angular separation
//!
//! Pure spherical-trigonometry helper used by every distance worker.
//!
//! ## Formula
//! -----------------
//! For two positions `(α₁, δ₁)` and `(α₂, δ₂)` on the celestial sphere:
//!
//! ```text
//! cos θ = sin δ₁ · sin δ₂ + cos δ₁ · cos δ₂ · cos(α₁ − α₂)
//! θ     = arccos(cos θ)
//! ```
//!
//! Inputs are in **degrees**, the result is in **radians** and lies in `[0, π]`.
//!
//! ## Numerical notes
//! -----------------
//! * Rounding can push `cos θ` slightly outside `[-1, 1]` for coincident or antipodal
//!   positions; the argument is clamped before `acos` so the result is never `NaN`.
//! * The right ascension difference is taken in absolute value, which makes the result
//!   bit-for-bit symmetric in its two arguments.
use crate::constants::{Degree, Radian, RADEG};

/// Angular separation between two celestial positions.
///
/// Arguments
/// -----------------
/// * `ra1`, `dec1` – right ascension and declination of the first position, in degrees.
/// * `ra2`, `dec2` – right ascension and declination of the second position, in degrees.
///
/// Return
/// ----------
/// * The great-circle distance in radians, within `[0, π]` for finite inputs.
#[inline]
pub fn angular_distance(ra1: Degree, dec1: Degree, ra2: Degree, dec2: Degree) -> Radian {
    let dec1 = dec1 * RADEG;
    let dec2 = dec2 * RADEG;
    let delta_ra = ((ra1 - ra2) * RADEG).abs();

    let cos_sep = dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * delta_ra.cos();
    cos_sep.clamp(-1.0, 1.0).acos()
}
