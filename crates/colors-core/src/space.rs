//! Color space identifiers.
//!
//! [`SpaceId`] tags a coordinate triple with the space that gives it meaning.
//! The set is closed: every conversion formula in the workspace is keyed on
//! these seven variants.
//!
//! # Supported Spaces
//!
//! | Id | Name | Components | Kind |
//! |----|------|------------|------|
//! | [`SpaceId::Xyz`] | `XYZ` | X, Y, Z | Tristimulus (hub) |
//! | [`SpaceId::XyY`] | `xyY` | x, y, Y | Chromaticity + luminance |
//! | [`SpaceId::CieLab`] | `CIELab` | L, a, b | Perceptually uniform |
//! | [`SpaceId::CieLuv`] | `CIELuv` | L, u, v | Perceptually uniform |
//! | [`SpaceId::Lch`] | `LCh` | L, C, h | Cylindrical (hue in degrees) |
//! | [`SpaceId::Srgb`] | `sRGB` | R, G, B | Gamma-encoded display RGB |
//! | [`SpaceId::Hsv`] | `HSV` | H, S, V | Cylindrical (hue in degrees) |
//!
//! # Usage
//!
//! ```
//! use colors_core::SpaceId;
//!
//! let id: SpaceId = "sRGB".parse().unwrap();
//! assert_eq!(id.name(), "sRGB");
//! assert_eq!(id.hub_parent(), Some(SpaceId::Xyz));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Identifier of a supported color space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpaceId {
    /// CIE 1931 XYZ tristimulus values.
    #[cfg_attr(feature = "serde", serde(rename = "XYZ"))]
    Xyz,
    /// CIE xyY: chromaticity plus luminance.
    #[cfg_attr(feature = "serde", serde(rename = "xyY"))]
    XyY,
    /// CIE 1976 L*a*b*.
    #[cfg_attr(feature = "serde", serde(rename = "CIELab"))]
    CieLab,
    /// CIE 1976 L*u*v*.
    #[cfg_attr(feature = "serde", serde(rename = "CIELuv"))]
    CieLuv,
    /// Cylindrical lightness, chroma, hue.
    #[cfg_attr(feature = "serde", serde(rename = "LCh"))]
    Lch,
    /// Gamma-encoded sRGB (IEC 61966-2-1).
    #[cfg_attr(feature = "serde", serde(rename = "sRGB"))]
    Srgb,
    /// Hue, saturation, value over sRGB.
    #[cfg_attr(feature = "serde", serde(rename = "HSV"))]
    Hsv,
}

impl SpaceId {
    /// All spaces, leaves of the conversion graph first.
    pub const ALL: [SpaceId; 7] = [
        SpaceId::Xyz,
        SpaceId::XyY,
        SpaceId::Srgb,
        SpaceId::CieLab,
        SpaceId::CieLuv,
        SpaceId::Lch,
        SpaceId::Hsv,
    ];

    /// Canonical name, as accepted by [`FromStr`] and printed by [`Display`](fmt::Display).
    pub const fn name(self) -> &'static str {
        match self {
            SpaceId::Xyz => "XYZ",
            SpaceId::XyY => "xyY",
            SpaceId::CieLab => "CIELab",
            SpaceId::CieLuv => "CIELuv",
            SpaceId::Lch => "LCh",
            SpaceId::Srgb => "sRGB",
            SpaceId::Hsv => "HSV",
        }
    }

    /// Short names of the three coordinates.
    pub const fn component_names(self) -> [&'static str; 3] {
        match self {
            SpaceId::Xyz => ["X", "Y", "Z"],
            SpaceId::XyY => ["x", "y", "Y"],
            SpaceId::CieLab => ["L", "a", "b"],
            SpaceId::CieLuv => ["L", "u", "v"],
            SpaceId::Lch => ["L", "C", "h"],
            SpaceId::Srgb => ["R", "G", "B"],
            SpaceId::Hsv => ["H", "S", "V"],
        }
    }

    /// Whether one of the coordinates is a hue angle in degrees.
    #[inline]
    pub const fn is_cylindrical(self) -> bool {
        matches!(self, SpaceId::Lch | SpaceId::Hsv)
    }

    /// The next space on the way to the XYZ hub.
    ///
    /// `None` only for XYZ itself. LCh hangs off CIELab and HSV off sRGB;
    /// everything else converts to XYZ directly.
    pub const fn hub_parent(self) -> Option<SpaceId> {
        match self {
            SpaceId::Xyz => None,
            SpaceId::XyY | SpaceId::CieLab | SpaceId::CieLuv | SpaceId::Srgb => Some(SpaceId::Xyz),
            SpaceId::Lch => Some(SpaceId::CieLab),
            SpaceId::Hsv => Some(SpaceId::Srgb),
        }
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Short names accepted besides the canonical ones.
const ALIASES: [(&str, SpaceId); 3] = [
    ("lab", SpaceId::CieLab),
    ("luv", SpaceId::CieLuv),
    ("rgb", SpaceId::Srgb),
];

impl FromStr for SpaceId {
    type Err = CoreError;

    /// Matches canonical names exactly, then falls back to a
    /// case-insensitive comparison against names and the short aliases
    /// `lab`, `luv` and `rgb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        SpaceId::ALL
            .into_iter()
            .find(|id| id.name() == name)
            .or_else(|| {
                SpaceId::ALL
                    .into_iter()
                    .find(|id| id.name().eq_ignore_ascii_case(name))
            })
            .or_else(|| {
                ALIASES
                    .into_iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
                    .map(|(_, id)| id)
            })
            .ok_or_else(|| CoreError::UnknownSpace(s.to_string()))
    }
}
