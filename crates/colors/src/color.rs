//! A coordinate triple tagged with its space.

use std::fmt;

use colors_core::SpaceId;

use crate::error::ColorResult;
use crate::graph;
use crate::spaces::Space;

/// Three coordinates plus the space they are expressed in.
///
/// The tag only changes through [`Color::convert_in_place`], so the values
/// and the space always agree.
///
/// ```rust
/// use colors::{Color, SpaceId};
///
/// let red = Color::make("sRGB", [1.0, 0.0, 0.0]).unwrap();
/// let lab = red.to(SpaceId::CieLab).unwrap();
/// assert_eq!(lab.space(), SpaceId::CieLab);
/// assert!((lab.values()[0] - 53.2408).abs() < 1e-4);
/// assert_eq!(red.to_string(), "sRGB(1, 0, 0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    space: SpaceId,
    values: [f64; 3],
}

impl Color {
    /// Creates a color from a space tag and its coordinates.
    #[inline]
    pub const fn new(space: SpaceId, values: [f64; 3]) -> Self {
        Self { space, values }
    }

    /// Creates a color from a space name such as `"CIELab"` or `"srgb"`.
    ///
    /// # Errors
    ///
    /// [`ColorError::UnknownSpace`](crate::ColorError::UnknownSpace) if the
    /// name is not a supported space.
    pub fn make(name: &str, values: [f64; 3]) -> ColorResult<Self> {
        let space: SpaceId = name.parse()?;
        Ok(Self::new(space, values))
    }

    /// The space tag.
    #[inline]
    pub fn space(&self) -> SpaceId {
        self.space
    }

    /// The coordinates, in component order.
    #[inline]
    pub fn values(&self) -> [f64; 3] {
        self.values
    }

    /// Replaces the coordinates. The tag is kept.
    #[inline]
    pub fn set_values(&mut self, values: [f64; 3]) {
        self.values = values;
    }

    /// Returns this color expressed in `target`.
    ///
    /// # Errors
    ///
    /// [`ColorError::DegenerateInput`](crate::ColorError::DegenerateInput) if
    /// a hop along the route divides by zero.
    pub fn to(&self, target: SpaceId) -> ColorResult<Self> {
        let values = graph::convert(self.values, self.space, target)?;
        Ok(Self::new(target, values))
    }

    /// Converts to `target` and replaces `self` with the result.
    ///
    /// On error `self` is left unchanged.
    pub fn convert_in_place(&mut self, target: SpaceId) -> ColorResult<()> {
        *self = self.to(target)?;
        Ok(())
    }

    /// Converts to the typed value of space `S`.
    ///
    /// ```rust
    /// use colors::{Color, Hsv, SpaceId};
    ///
    /// let hsv: Hsv = Color::new(SpaceId::Srgb, [0.0, 0.0, 1.0]).into_space().unwrap();
    /// assert_eq!(hsv, Hsv::new(240.0, 1.0, 1.0));
    /// ```
    pub fn into_space<S: Space>(self) -> ColorResult<S> {
        Ok(S::from_array(self.to(S::ID)?.values))
    }
}

impl<S: Space> From<S> for Color {
    #[inline]
    fn from(value: S) -> Self {
        Self::new(S::ID, value.to_array())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.values;
        match f.precision() {
            Some(p) => write!(f, "{}({a:.p$}, {b:.p$}, {c:.p$})", self.space),
            None => write!(f, "{}({a}, {b}, {c})", self.space),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColorError, Lab, Xyz};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_make() {
        let c = Color::make("cielab", [50.0, 10.0, -10.0]).unwrap();
        assert_eq!(c.space(), SpaceId::CieLab);
        assert_eq!(c.values(), [50.0, 10.0, -10.0]);

        let err = Color::make("CMYK", [0.0; 3]).unwrap_err();
        assert_eq!(err, ColorError::UnknownSpace("CMYK".into()));
    }

    #[test]
    fn test_set_values_keeps_tag() {
        let mut c = Color::new(SpaceId::Hsv, [10.0, 0.5, 0.5]);
        c.set_values([20.0, 0.1, 0.2]);
        assert_eq!(c, Color::new(SpaceId::Hsv, [20.0, 0.1, 0.2]));
    }

    #[test]
    fn test_to_same_space() {
        let c = Color::new(SpaceId::Lch, [50.0, 20.0, 400.0]);
        assert_eq!(c.to(SpaceId::Lch).unwrap(), c);
    }

    #[test]
    fn test_convert_in_place() {
        let mut c = Color::new(SpaceId::Srgb, [1.0, 1.0, 1.0]);
        c.convert_in_place(SpaceId::CieLab).unwrap();
        assert_eq!(c.space(), SpaceId::CieLab);
        assert_abs_diff_eq!(c.values()[0], 100.0, epsilon = 1e-2);
    }

    #[test]
    fn test_convert_in_place_failure_keeps_value() {
        let mut c = Color::new(SpaceId::Xyz, [0.0, 0.0, 0.0]);
        let err = c.convert_in_place(SpaceId::XyY).unwrap_err();
        assert!(matches!(err, ColorError::DegenerateInput { .. }));
        assert_eq!(c, Color::new(SpaceId::Xyz, [0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_typed_roundtrip() {
        let lab = Lab::new(60.0, -20.0, 35.0);
        let color = Color::from(lab);
        assert_eq!(color.space(), SpaceId::CieLab);

        let xyz: Xyz = color.into_space().unwrap();
        let back: Lab = Color::from(xyz).into_space().unwrap();
        assert_abs_diff_eq!(back.l, lab.l, epsilon = 1e-9);
        assert_abs_diff_eq!(back.a, lab.a, epsilon = 1e-9);
        assert_abs_diff_eq!(back.b, lab.b, epsilon = 1e-9);
    }

    #[test]
    fn test_display() {
        let c = Color::new(SpaceId::Xyz, [0.1, 0.2, 0.3]);
        assert_eq!(c.to_string(), "XYZ(0.1, 0.2, 0.3)");
        assert_eq!(format!("{c:.2}"), "XYZ(0.10, 0.20, 0.30)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json() {
        let c = Color::new(SpaceId::CieLuv, [50.0, 1.5, -2.0]);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"space":"CIELuv","values":[50.0,1.5,-2.0]}"#);
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
