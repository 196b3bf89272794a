//! LCh: the polar form of CIELab or CIELuv.
//!
//! An [`Lch`] value does not record which Cartesian space it came from.
//! [`Lch::to_lab`] and [`Lch::to_luv`] both apply; routing through the
//! XYZ hub reads LCh as LCh(ab).

use colors_core::SpaceId;
use colors_math::{from_polar, to_polar};

use super::{Lab, Luv, Space};

/// Lightness, chroma, hue.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lch {
    /// Lightness, unchanged from the Cartesian space.
    pub l: f64,
    /// Chroma, the distance from the neutral axis.
    pub c: f64,
    /// Hue angle in degrees, `[0, 360)` when produced by a conversion.
    pub h: f64,
}

impl Lch {
    /// Creates a new LCh value.
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// LCh -> Lab.
    #[inline]
    pub fn to_lab(self) -> Lab {
        let (a, b) = from_polar(self.c, self.h);
        Lab::new(self.l, a, b)
    }

    /// LCh -> Luv.
    #[inline]
    pub fn to_luv(self) -> Luv {
        let (u, v) = from_polar(self.c, self.h);
        Luv::new(self.l, u, v)
    }
}

impl Lab {
    /// Lab -> LCh. A neutral color (zero chroma) gets hue 0.
    ///
    /// ```rust
    /// use colors::Lab;
    ///
    /// let lch = Lab::new(50.0, 0.0, -20.0).to_lch();
    /// assert_eq!(lch.c, 20.0);
    /// assert!((lch.h - 270.0).abs() < 1e-12);
    /// assert_eq!(Lab::new(50.0, 0.0, 0.0).to_lch().h, 0.0);
    /// ```
    #[inline]
    pub fn to_lch(self) -> Lch {
        let (c, h) = to_polar(self.a, self.b);
        Lch::new(self.l, c, h)
    }
}

impl Luv {
    /// Luv -> LCh. A neutral color (zero chroma) gets hue 0.
    #[inline]
    pub fn to_lch(self) -> Lch {
        let (c, h) = to_polar(self.u, self.v);
        Lch::new(self.l, c, h)
    }
}

impl Space for Lch {
    const ID: SpaceId = SpaceId::Lch;

    #[inline]
    fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    #[inline]
    fn to_array(self) -> [f64; 3] {
        [self.l, self.c, self.h]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lab_roundtrip() {
        let lab = Lab::new(53.2408, 80.0925, 67.2032);
        let back = lab.to_lch().to_lab();
        assert_abs_diff_eq!(back.l, lab.l);
        assert_abs_diff_eq!(back.a, lab.a, epsilon = 1e-12);
        assert_abs_diff_eq!(back.b, lab.b, epsilon = 1e-12);
    }

    #[test]
    fn test_luv_roundtrip() {
        let luv = Luv::new(32.297, -9.4054, -130.3423);
        let back = luv.to_lch().to_luv();
        assert_abs_diff_eq!(back.u, luv.u, epsilon = 1e-12);
        assert_abs_diff_eq!(back.v, luv.v, epsilon = 1e-12);
    }

    #[test]
    fn test_known_hue() {
        let lch = Lab::new(53.24079414130722, 80.09245959641109, 67.20319651585301).to_lch();
        assert_abs_diff_eq!(lch.c, 104.5518, epsilon = 1e-4);
        assert_abs_diff_eq!(lch.h, 39.9990, epsilon = 1e-4);
    }

    #[test]
    fn test_hue_range() {
        for i in 0..72 {
            let angle = (i as f64 * 5.0 - 180.0).to_radians();
            let lch = Lab::new(50.0, 30.0 * angle.cos(), 30.0 * angle.sin()).to_lch();
            assert!((0.0..360.0).contains(&lch.h), "h={}", lch.h);
        }
    }

    #[test]
    fn test_zero_chroma() {
        let lch = Luv::new(70.0, 0.0, -0.0).to_lch();
        assert_eq!(lch.c, 0.0);
        assert_eq!(lch.h, 0.0);
    }
}
