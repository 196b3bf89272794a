//! sRGB transfer function.
//!
//! A linear segment near black joined to a 2.4 power curve.
//! Inputs outside [0, 1] go through the same branches; nothing is clamped.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Encoded values at or below this use the linear segment of [`eotf`].
pub const EOTF_BREAK: f64 = 0.04045;

/// Linear values at or below this use the linear segment of [`oetf`].
pub const OETF_BREAK: f64 = 0.0031308;

/// sRGB EOTF: gamma expansion from encoded sRGB to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use colors_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.001);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= EOTF_BREAK {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: gamma compression from linear light to encoded sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= OETF_BREAK {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(eotf)
}

/// Applies sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(oetf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=1000 {
            let v = i as f64 / 1000.0;
            let back = oetf(eotf(v));
            assert_abs_diff_eq!(v, back, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_roundtrip_at_breakpoints() {
        for v in [OETF_BREAK, EOTF_BREAK + 1e-9, OETF_BREAK - 1e-9] {
            assert_abs_diff_eq!(oetf(eotf(v)), v, epsilon = 1e-12);
            assert_abs_diff_eq!(eotf(oetf(v)), v, epsilon = 1e-12);
        }
        // eotf(0.04045) lands just above 0.0031308, so oetf takes the power
        // branch on the way back.
        assert_abs_diff_eq!(oetf(eotf(EOTF_BREAK)), EOTF_BREAK, epsilon = 1e-7);
        assert_abs_diff_eq!(eotf(oetf(EOTF_BREAK)), EOTF_BREAK, epsilon = 1e-12);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(1.0), 1.0, epsilon = 1e-15);
        assert_eq!(oetf(0.0), 0.0);
        assert_abs_diff_eq!(oetf(1.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_segments_meet() {
        // Both pieces agree at the breakpoint to within the standard's rounding.
        let below = EOTF_BREAK / 12.92;
        let above = ((EOTF_BREAK + 0.055) / 1.055).powf(2.4);
        assert_abs_diff_eq!(below, above, epsilon = 1e-6);
    }

    #[test]
    fn test_triplets() {
        let rgb = [0.2, 0.5, 0.9];
        let back = oetf_rgb(eotf_rgb(rgb));
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], rgb[i], epsilon = 1e-12);
        }
        assert_eq!(eotf_rgb(rgb)[1], eotf(0.5));
    }

    #[test]
    fn test_out_of_range_passes_through() {
        assert_eq!(eotf(-0.1), -0.1 / 12.92);
        assert!(oetf(2.0) > 1.0);
    }
}
