//! Small linear systems.

use crate::DEGENERATE_EPSILON;

/// Solves the 2x2 system
///
/// ```text
/// a*x + b*y = e
/// c*x + d*y = f
/// ```
///
/// by Cramer's rule. Returns `None` when the determinant is within
/// [`DEGENERATE_EPSILON`] of zero or the result is not finite.
///
/// ```rust
/// use colors_math::solve2;
///
/// // x + y = 3, x - y = 1
/// assert_eq!(solve2(1.0, 1.0, 1.0, -1.0, 3.0, 1.0), Some((2.0, 1.0)));
/// assert_eq!(solve2(1.0, 2.0, 2.0, 4.0, 1.0, 1.0), None);
/// ```
#[inline]
pub fn solve2(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Option<(f64, f64)> {
    let det = a * d - b * c;
    if !det.is_finite() || det.abs() < DEGENERATE_EPSILON {
        return None;
    }
    let x = (e * d - b * f) / det;
    let y = (a * f - e * c) / det;
    (x.is_finite() && y.is_finite()).then_some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_solve2() {
        let (x, y) = solve2(2.0, 1.0, -1.0, 3.0, 5.0, 8.0).unwrap();
        assert_abs_diff_eq!(2.0 * x + y, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(-x + 3.0 * y, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solve2_singular() {
        assert!(solve2(0.0, 0.0, 0.0, 0.0, 1.0, 1.0).is_none());
        assert!(solve2(1.0, 1.0, 1.0, 1.0 + 1e-15, 0.0, 0.0).is_none());
        assert!(solve2(f64::NAN, 1.0, 0.0, 1.0, 0.0, 0.0).is_none());
    }
}
