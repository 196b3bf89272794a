//! Typed coordinates for each color space, and the direct formulas between them.
//!
//! Each space gets its own `Copy` struct with named fields. Conversions are
//! inherent `to_*` methods that consume a value and return a new one; the
//! formula for an edge lives in the module of the space it produces or
//! inverts, next to that space's helpers.
//!
//! # Graph
//!
//! ```text
//!            xyY        sRGB -- HSV
//!              \        /
//!               \      /
//!                 XYZ
//!               /     \
//!              /       \
//!         CIELab       CIELuv
//!              \       /
//!                 LCh
//! ```
//!
//! Edges that can divide by zero return [`ColorResult`](crate::ColorResult).

use colors_core::SpaceId;

mod hsv;
mod lab;
mod lch;
mod luv;
mod rgb;
mod xyz;

pub use hsv::Hsv;
pub use lab::Lab;
pub use lch::Lch;
pub use luv::Luv;
pub use rgb::Srgb;
pub use xyz::{XyY, Xyz};

/// A typed color space value.
///
/// Ties a struct to its [`SpaceId`] and to the plain `[f64; 3]` form used by
/// [`Color`](crate::Color) and the routing table.
pub trait Space: Copy + std::fmt::Debug + Send + Sync + 'static {
    /// Tag of this space.
    const ID: SpaceId;

    /// Builds the value from its three coordinates, in component order.
    fn from_array(values: [f64; 3]) -> Self;

    /// The three coordinates, in component order.
    fn to_array(self) -> [f64; 3];
}
