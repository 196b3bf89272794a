//! CIE 1976 L*u*v*, relative to D65.

use colors_core::SpaceId;
use colors_math::solve2;
use colors_primaries::{D65, D65_UV_PRIME, u_prime, v_prime};

use super::{Space, Xyz};
use crate::error::{ColorResult, degenerate, nonzero};

/// `(6/29)^3`, the relative luminance where L* switches from linear to cube root.
const EPSILON: f64 = 216.0 / 24389.0;
/// `(29/3)^3`, slope of the linear segment.
const KAPPA: f64 = 24389.0 / 27.0;

/// CIE L*u*v*.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Luv {
    /// Lightness, 0 (black) to 100 (reference white).
    pub l: f64,
    /// u* chromaticity.
    pub u: f64,
    /// v* chromaticity.
    pub v: f64,
}

impl Luv {
    /// Creates a new Luv value.
    #[inline]
    pub const fn new(l: f64, u: f64, v: f64) -> Self {
        Self { l, u, v }
    }

    /// Luv -> XYZ.
    ///
    /// `Y` follows from `L` alone; `X` and `Z` come from the pair
    ///
    /// ```text
    /// Z = a·X + b    a = (52L / (u + 13L·u'n) - 1) / 3,  b = -5Y
    /// Z = c·X + d    c = -1/3,                           d = Y·(39L / (v + 13L·v'n) - 5)
    /// ```
    ///
    /// # Errors
    ///
    /// [`DegenerateInput`](crate::ColorError::DegenerateInput) when
    /// `u + 13L·u'n` or `v + 13L·v'n` is zero (black always is) or when the
    /// two lines are parallel.
    pub fn to_xyz(self) -> ColorResult<Xyz> {
        let (un, vn) = D65_UV_PRIME;
        let l = self.l;

        let y = if l > KAPPA * EPSILON {
            D65.y * ((l + 16.0) / 116.0).powi(3)
        } else {
            D65.y * l / KAPPA
        };

        let du = nonzero(self.u + 13.0 * l * un, SpaceId::CieLuv, "u + 13L·u'n is near zero")?;
        let dv = nonzero(self.v + 13.0 * l * vn, SpaceId::CieLuv, "v + 13L·v'n is near zero")?;

        let a = (52.0 * l / du - 1.0) / 3.0;
        let b = -5.0 * y;
        let c = -1.0 / 3.0;
        let d = y * (39.0 * l / dv - 5.0);

        // a·X - Z = -b, c·X - Z = -d
        let (x, z) = solve2(a, -1.0, c, -1.0, -b, -d)
            .ok_or_else(|| degenerate(SpaceId::CieLuv, "singular u/v system"))?;
        Ok(Xyz::new(x, y, z))
    }
}

impl Xyz {
    /// XYZ -> Luv.
    ///
    /// # Errors
    ///
    /// [`DegenerateInput`](crate::ColorError::DegenerateInput) when
    /// `X + 15Y + 3Z` is zero, which includes black.
    pub fn to_luv(self) -> ColorResult<Luv> {
        let xyz = self.to_vec();
        let yr = self.y / D65.y;
        let l = if yr > EPSILON { 116.0 * yr.cbrt() - 16.0 } else { KAPPA * yr };

        let (un, vn) = D65_UV_PRIME;
        let (up, vp) = u_prime(xyz)
            .zip(v_prime(xyz))
            .ok_or_else(|| degenerate(SpaceId::Xyz, "X + 15Y + 3Z is near zero"))?;

        Ok(Luv::new(l, 13.0 * l * (up - un), 13.0 * l * (vp - vn)))
    }
}

impl Space for Luv {
    const ID: SpaceId = SpaceId::CieLuv;

    #[inline]
    fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    #[inline]
    fn to_array(self) -> [f64; 3] {
        [self.l, self.u, self.v]
    }
}
