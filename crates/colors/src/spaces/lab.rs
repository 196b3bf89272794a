//! CIE 1976 L*a*b*, relative to D65.

use colors_core::SpaceId;
use colors_primaries::D65;

use super::{Space, Xyz};

/// `(6/29)^3`: below this the cube root is replaced by a line.
const EPSILON: f64 = 216.0 / 24389.0;
/// `6/29`: the same breakpoint on the other side of `f`.
const DELTA: f64 = 6.0 / 29.0;

/// CIELab forward companding.
#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        841.0 / 108.0 * t + 4.0 / 29.0
    }
}

/// Inverse of [`f`].
#[inline]
fn f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        108.0 / 841.0 * (t - 4.0 / 29.0)
    }
}

/// CIE L*a*b*.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness, 0 (black) to 100 (reference white).
    pub l: f64,
    /// Green (-) to red (+).
    pub a: f64,
    /// Blue (-) to yellow (+).
    pub b: f64,
}

impl Lab {
    /// Creates a new Lab value.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Lab -> XYZ.
    pub fn to_xyz(self) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        Xyz::new(
            D65.x * f_inv(fy + self.a / 500.0),
            D65.y * f_inv(fy),
            D65.z * f_inv(fy - self.b / 200.0),
        )
    }
}

impl Xyz {
    /// XYZ -> Lab.
    ///
    /// ```rust
    /// use colors::Xyz;
    ///
    /// // D65 is the reference white.
    /// let lab = Xyz::new(0.95047, 1.0, 1.08883).to_lab();
    /// assert!((lab.l - 100.0).abs() < 1e-9);
    /// assert!(lab.a.abs() < 1e-9 && lab.b.abs() < 1e-9);
    /// ```
    pub fn to_lab(self) -> Lab {
        let r = self.to_vec() / D65;
        let (fx, fy, fz) = (f(r.x), f(r.y), f(r.z));
        Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}

impl Space for Lab {
    const ID: SpaceId = SpaceId::CieLab;

    #[inline]
    fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    #[inline]
    fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }
}
