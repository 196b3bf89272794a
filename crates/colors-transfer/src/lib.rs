//! # colors-transfer
//!
//! Transfer functions between linear light and encoded signal values.
//!
//! # Terminology
//!
//! - **EOTF** (gamma expand): Encoded -> Linear
//! - **OETF** (gamma compress): Linear -> Encoded
//!
//! Both directions are pure functions that return new values; nothing is
//! rewritten in place, so a triple can be shared freely across threads.
//!
//! # Usage
//!
//! ```rust
//! use colors_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `colors` - the sRGB <-> XYZ edge

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
