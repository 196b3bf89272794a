//! Gamma-encoded sRGB.

use colors_core::SpaceId;
use colors_math::DVec3;
use colors_primaries::{SRGB_TO_XYZ, XYZ_TO_SRGB};
use colors_transfer::srgb;

use super::{Space, Xyz};

/// sRGB with the standard transfer function applied, nominally in [0, 1].
///
/// Out-of-gamut results (negative or above 1) are returned as is; no
/// clipping policy is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Srgb {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
}

impl Srgb {
    /// Creates a new sRGB value.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Gamma expansion: encoded channels to linear light.
    #[inline]
    pub fn to_linear(self) -> [f64; 3] {
        srgb::eotf_rgb(self.to_array())
    }

    /// Gamma compression: linear light to encoded channels.
    #[inline]
    pub fn from_linear(linear: [f64; 3]) -> Self {
        Self::from_array(srgb::oetf_rgb(linear))
    }

    /// sRGB -> XYZ: gamma expand, then the linear matrix.
    ///
    /// ```rust
    /// use colors::Srgb;
    ///
    /// let xyz = Srgb::new(1.0, 1.0, 1.0).to_xyz();
    /// assert!((xyz.x - 0.9505).abs() < 1e-3);
    /// assert!((xyz.y - 1.0).abs() < 1e-3);
    /// assert!((xyz.z - 1.0888).abs() < 1e-3);
    /// ```
    pub fn to_xyz(self) -> Xyz {
        Xyz::from_vec(SRGB_TO_XYZ * DVec3::from_array(self.to_linear()))
    }
}

impl Xyz {
    /// XYZ -> sRGB: the linear matrix, then gamma compress.
    pub fn to_srgb(self) -> Srgb {
        Srgb::from_linear((XYZ_TO_SRGB * self.to_vec()).to_array())
    }
}

impl Space for Srgb {
    const ID: SpaceId = SpaceId::Srgb;

    #[inline]
    fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    #[inline]
    fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primaries() {
        let red = Srgb::new(1.0, 0.0, 0.0).to_xyz();
        assert_abs_diff_eq!(red.x, 0.4124564, epsilon = 1e-12);
        assert_abs_diff_eq!(red.y, 0.2126729, epsilon = 1e-12);
        assert_abs_diff_eq!(red.z, 0.0193339, epsilon = 1e-12);
    }

    #[test]
    fn test_roundtrip() {
        for rgb in [[0.2, 0.5, 0.9], [0.01, 0.02, 0.03], [1.0, 0.0, 0.5]] {
            let back = Srgb::from_array(rgb).to_xyz().to_srgb().to_array();
            for i in 0..3 {
                assert_abs_diff_eq!(back[i], rgb[i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_linear_is_a_copy() {
        let encoded = Srgb::new(0.5, 0.5, 0.5);
        let linear = encoded.to_linear();
        // The source value is untouched by expansion.
        assert_eq!(encoded, Srgb::new(0.5, 0.5, 0.5));
        assert!(linear[0] < 0.5);
        assert_eq!(Srgb::from_linear(linear).r, srgb::oetf(linear[0]));
    }

    #[test]
    fn test_out_of_gamut_kept() {
        // Saturated Lab green outside sRGB maps to a negative channel.
        let rgb = Xyz::new(0.2, 0.6, 0.05).to_srgb();
        assert!(rgb.r < 0.0 || rgb.b < 0.0);
    }
}
