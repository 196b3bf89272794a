//! HSV over gamma-encoded sRGB.

use colors_core::SpaceId;
use colors_math::{DVec3, normalize_degrees};

use super::{Space, Srgb};

/// Hue, saturation, value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees, `[0, 360)` when produced by a conversion.
    pub h: f64,
    /// Saturation, `C / V`.
    pub s: f64,
    /// Value, the largest channel.
    pub v: f64,
}

impl Hsv {
    /// Creates a new HSV value.
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// HSV -> sRGB.
    ///
    /// The hue is wrapped into `[0, 360)` first, then split into six
    /// half-open 60° sectors `[n·60, (n+1)·60)`.
    ///
    /// ```rust
    /// use colors::{Hsv, Srgb};
    ///
    /// assert_eq!(Hsv::new(0.0, 1.0, 1.0).to_srgb(), Srgb::new(1.0, 0.0, 0.0));
    /// assert_eq!(Hsv::new(120.0, 1.0, 1.0).to_srgb(), Srgb::new(0.0, 1.0, 0.0));
    /// assert_eq!(Hsv::new(240.0, 1.0, 1.0).to_srgb(), Srgb::new(0.0, 0.0, 1.0));
    /// ```
    pub fn to_srgb(self) -> Srgb {
        let c = self.v * self.s;
        let h = normalize_degrees(self.h) / 60.0;
        let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let m = self.v - c;

        let (r, g, b) = if h < 1.0 {
            (c, x, 0.0)
        } else if h < 2.0 {
            (x, c, 0.0)
        } else if h < 3.0 {
            (0.0, c, x)
        } else if h < 4.0 {
            (0.0, x, c)
        } else if h < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };
        Srgb::new(r + m, g + m, b + m)
    }
}

impl Srgb {
    /// sRGB -> HSV.
    ///
    /// Gray (zero chroma) gets hue 0; black (zero value) gets saturation 0.
    pub fn to_hsv(self) -> Hsv {
        let Srgb { r, g, b } = self;
        let rgb = DVec3::new(r, g, b);
        let max = rgb.max_element();
        let c = max - rgb.min_element();

        let h = if c == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / c).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / c + 2.0)
        } else {
            60.0 * ((r - g) / c + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { c / max };

        Hsv::new(normalize_degrees(h), s, max)
    }
}

impl Space for Hsv {
    const ID: SpaceId = SpaceId::Hsv;

    #[inline]
    fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    #[inline]
    fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }
}
