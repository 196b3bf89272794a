//! # colors-primaries
//!
//! Reference white and RGB primaries for the conversion graph.
//!
//! Every XYZ <-> CIELab and XYZ <-> CIELuv conversion normalizes against the
//! same white, [`D65`]. It is a plain `const`: read-only, no initialization
//! order to worry about.
//!
//! # Usage
//!
//! ```rust
//! use colors_primaries::{D65, SRGB_TO_XYZ};
//! use colors_math::DVec3;
//!
//! // Linear sRGB white lands on D65.
//! let white = SRGB_TO_XYZ * DVec3::ONE;
//! assert!((white.x - D65.x).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`colors-math`] - `DMat3` / `DVec3` (glam)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use colors_math::{DEGENERATE_EPSILON, DMat3, DVec3, mat3_from_rows};

// ============================================================================
// White Point
// ============================================================================

/// D65 white point as XYZ, normalized to Y = 1.
pub const D65: DVec3 = DVec3::new(0.95047, 1.0, 1.08883);

// ============================================================================
// sRGB Matrices
// ============================================================================

/// Linear sRGB to XYZ (D65), IEC 61966-2-1 coefficients.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const SRGB_TO_XYZ: DMat3 = mat3_from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ (D65) to linear sRGB.
///
/// The exact inverse of [`SRGB_TO_XYZ`] at double precision. It agrees with
/// the published `3.2404542, -1.5371385, ...` table to 1e-6, but using the
/// true inverse keeps an XYZ -> sRGB -> XYZ round trip at machine precision.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub const XYZ_TO_SRGB: DMat3 = mat3_from_rows([
    [ 3.2404548360214083,  -1.5371388501025751,  -0.49853154686848089 ],
    [-0.96926638987565372,  1.8760109288424913,   0.041556082346673524],
    [ 0.055643419604213658, -0.20402585426769815,  1.0572251624579287  ],
]);

// ============================================================================
// CIE 1976 UCS
// ============================================================================

/// `X + 15Y + 3Z`, the shared denominator of u' and v'.
#[inline]
fn ucs_denominator(xyz: DVec3) -> Option<f64> {
    let d = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    (d.abs() >= DEGENERATE_EPSILON).then_some(d)
}

/// CIE 1976 u' = 4X / (X + 15Y + 3Z).
///
/// `None` when the denominator vanishes (e.g. black).
#[inline]
pub fn u_prime(xyz: DVec3) -> Option<f64> {
    ucs_denominator(xyz).map(|d| 4.0 * xyz.x / d)
}

/// CIE 1976 v' = 9Y / (X + 15Y + 3Z).
///
/// `None` when the denominator vanishes (e.g. black).
#[inline]
pub fn v_prime(xyz: DVec3) -> Option<f64> {
    ucs_denominator(xyz).map(|d| 9.0 * xyz.y / d)
}

/// u'v' of the [`D65`] white.
///
/// ```rust
/// use colors_primaries::D65_UV_PRIME;
///
/// let (u, v) = D65_UV_PRIME;
/// assert!((u - 0.19784).abs() < 1e-4);
/// assert!((v - 0.46834).abs() < 1e-4);
/// ```
pub const D65_UV_PRIME: (f64, f64) = {
    let d = D65.x + 15.0 * D65.y + 3.0 * D65.z;
    (4.0 * D65.x / d, 9.0 * D65.y / d)
};
