//! Polar helpers for the cylindrical spaces (LCh, HSV).
//!
//! Hues are in degrees and always reported in `[0, 360)`.

/// Wraps an angle in degrees into `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative angle up to exactly `360.0`;
/// that case folds back to `0.0`. Negative zero also comes out as `0.0`.
///
/// ```rust
/// use colors_math::normalize_degrees;
///
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// assert_eq!(normalize_degrees(360.0), 0.0);
/// assert_eq!(normalize_degrees(725.0), 5.0);
/// ```
#[inline]
pub fn normalize_degrees(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    if h >= 360.0 { 0.0 } else { h + 0.0 }
}

/// Cartesian `(x, y)` to `(radius, hue_degrees)`.
///
/// The hue of a zero radius is undefined; it is reported as `0.0`.
///
/// ```rust
/// use colors_math::to_polar;
///
/// let (r, h) = to_polar(0.0, -2.0);
/// assert_eq!(r, 2.0);
/// assert!((h - 270.0).abs() < 1e-12);
/// assert_eq!(to_polar(0.0, 0.0), (0.0, 0.0));
/// ```
#[inline]
pub fn to_polar(x: f64, y: f64) -> (f64, f64) {
    let radius = x.hypot(y);
    if radius == 0.0 {
        return (0.0, 0.0);
    }
    (radius, normalize_degrees(y.atan2(x).to_degrees()))
}

/// `(radius, hue_degrees)` to Cartesian `(x, y)`.
#[inline]
pub fn from_polar(radius: f64, hue_degrees: f64) -> (f64, f64) {
    let (sin, cos) = hue_degrees.to_radians().sin_cos();
    (radius * cos, radius * sin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalize_range() {
        for i in -2000..2000 {
            let h = normalize_degrees(i as f64 * 0.731);
            assert!((0.0..360.0).contains(&h), "h={h}");
        }
        assert_eq!(normalize_degrees(-1e-17), 0.0);
        assert!(normalize_degrees(-0.0).is_sign_positive());
    }

    #[test]
    fn test_quadrants() {
        assert_abs_diff_eq!(to_polar(1.0, 0.0).1, 0.0);
        assert_abs_diff_eq!(to_polar(0.0, 1.0).1, 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(to_polar(-1.0, 0.0).1, 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(to_polar(0.0, -1.0).1, 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(to_polar(3.0, 4.0).0, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_zero_axis() {
        // atan2(-0.0, x) is -0.0; must still land on 0.
        let (_, h) = to_polar(1.0, -0.0);
        assert_eq!(h, 0.0);
        assert!(h.is_sign_positive());
    }

    #[test]
    fn test_polar_roundtrip() {
        for &(x, y) in &[(12.5, -33.0), (-0.4, 0.9), (-7.0, -7.0), (1e-6, 2e-6)] {
            let (r, h) = to_polar(x, y);
            let (bx, by) = from_polar(r, h);
            assert_abs_diff_eq!(bx, x, epsilon = 1e-9);
            assert_abs_diff_eq!(by, y, epsilon = 1e-9);
        }
    }
}
