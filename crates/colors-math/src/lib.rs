//! # colors-math
//!
//! Math primitives for the color conversion graph.
//!
//! - [`mat3_from_rows`] - `const` row-major construction of [`DMat3`]
//! - [`solve2`] - 2x2 linear solver used by the CIELuv inverse
//! - Polar helpers ([`to_polar`], [`from_polar`], [`normalize_degrees`]) for
//!   the cylindrical spaces
//!
//! # Design
//!
//! Everything is `f64`. Round trips through the perceptual spaces stack a
//! cube root, a matrix and a power curve, and single precision loses the
//! 1e-9 agreement callers expect.
//!
//! Vectors and matrices are glam's [`DVec3`] and [`DMat3`]. glam stores
//! matrices column-major; color tables are published row by row, so
//! [`mat3_from_rows`] takes them in that order:
//!
//! ```rust
//! use colors_math::{mat3_from_rows, DVec3};
//!
//! let rgb_to_xyz = mat3_from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * DVec3::new(1.0, 0.0, 0.0);
//! assert_eq!(xyz.y, 0.2126729);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - `DVec3` / `DMat3` arithmetic

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod polar;
mod solve;

pub use glam::{DMat3, DVec3};
pub use polar::*;
pub use solve::*;

/// Denominators with a smaller magnitude are treated as zero.
pub const DEGENERATE_EPSILON: f64 = 1e-12;

/// Builds a matrix from rows, the order color tables are published in.
#[rustfmt::skip]
pub const fn mat3_from_rows(rows: [[f64; 3]; 3]) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(rows[0][0], rows[1][0], rows[2][0]),
        DVec3::new(rows[0][1], rows[1][1], rows[2][1]),
        DVec3::new(rows[0][2], rows[1][2], rows[2][2]),
    )
}
