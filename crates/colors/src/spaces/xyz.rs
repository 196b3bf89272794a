//! CIE 1931 XYZ (the hub) and xyY.

use colors_core::SpaceId;
use colors_math::DVec3;

use super::Space;
use crate::error::{ColorResult, degenerate, nonzero};

/// CIE 1931 XYZ tristimulus values, relative to Y = 1 for the D65 white.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus.
    pub x: f64,
    /// Y tristimulus (luminance).
    pub y: f64,
    /// Z tristimulus.
    pub z: f64,
}

impl Xyz {
    /// Creates a new XYZ value.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub(crate) fn from_vec(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    #[inline]
    pub(crate) fn to_vec(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// XYZ -> xyY: `(X/s, Y/s, Y)` with `s = X + Y + Z`.
    ///
    /// # Errors
    ///
    /// [`DegenerateInput`](crate::ColorError::DegenerateInput) when `s` is
    /// exactly zero (black included) or the ratios overflow. Chromaticity does
    /// not depend on scale, so very dark colors still convert.
    ///
    /// ```rust
    /// use colors::Xyz;
    ///
    /// let xyy = Xyz::new(0.25, 0.5, 0.25).to_xyy().unwrap();
    /// assert_eq!((xyy.x, xyy.y, xyy.luminance), (0.25, 0.5, 0.5));
    /// assert!(Xyz::new(0.0, 0.0, 0.0).to_xyy().is_err());
    /// ```
    pub fn to_xyy(self) -> ColorResult<XyY> {
        let s = self.x + self.y + self.z;
        let (x, y) = (self.x / s, self.y / s);
        if s == 0.0 || !x.is_finite() || !y.is_finite() {
            return Err(degenerate(SpaceId::Xyz, "X + Y + Z is zero"));
        }
        Ok(XyY::new(x, y, self.y))
    }
}

impl Space for Xyz {
    const ID: SpaceId = SpaceId::Xyz;

    #[inline]
    fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    #[inline]
    fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// CIE xyY: chromaticity `(x, y)` plus the luminance `Y` carried over from XYZ.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct XyY {
    /// Chromaticity x.
    pub x: f64,
    /// Chromaticity y.
    pub y: f64,
    /// Luminance Y.
    pub luminance: f64,
}

impl XyY {
    /// Creates a new xyY value.
    #[inline]
    pub const fn new(x: f64, y: f64, luminance: f64) -> Self {
        Self { x, y, luminance }
    }

    /// xyY -> XYZ: `(x·Y/y, Y, (1 - x - y)·Y/y)`.
    ///
    /// # Errors
    ///
    /// [`DegenerateInput`](crate::ColorError::DegenerateInput) when `y` is zero.
    pub fn to_xyz(self) -> ColorResult<Xyz> {
        let y = nonzero(self.y, SpaceId::XyY, "chromaticity y is near zero")?;
        let scale = self.luminance / y;
        Ok(Xyz::new(self.x * scale, self.luminance, (1.0 - self.x - self.y) * scale))
    }
}

impl Space for XyY {
    const ID: SpaceId = SpaceId::XyY;

    #[inline]
    fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    #[inline]
    fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.luminance]
    }
}
