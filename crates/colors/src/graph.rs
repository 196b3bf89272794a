//! Routing between arbitrary spaces.
//!
//! [`step`] is the table of direct edges. [`route`] picks the hops: a direct
//! edge when one is tabulated, otherwise up the `hub_parent` chain of each
//! end to their lowest common ancestor (XYZ at worst) and back down.
//! [`convert`] folds [`step`] over the route.
//!
//! # Example
//!
//! ```rust
//! use colors::graph::{convert, route};
//! use colors::SpaceId;
//!
//! assert_eq!(
//!     route(SpaceId::Hsv, SpaceId::CieLab),
//!     vec![SpaceId::Hsv, SpaceId::Srgb, SpaceId::Xyz, SpaceId::CieLab],
//! );
//!
//! let lab = convert([1.0, 0.0, 0.0], SpaceId::Srgb, SpaceId::CieLab).unwrap();
//! assert!((lab[0] - 53.2408).abs() < 1e-4);
//! ```

use colors_core::SpaceId;
use tracing::trace;

use crate::error::{ColorError, ColorResult};
use crate::spaces::{Hsv, Lab, Lch, Luv, Space, Srgb, XyY, Xyz};

/// Every pair with a closed-form formula, as `(from, to)`.
pub const EDGES: [(SpaceId, SpaceId); 14] = [
    (SpaceId::Xyz, SpaceId::XyY),
    (SpaceId::XyY, SpaceId::Xyz),
    (SpaceId::Xyz, SpaceId::CieLab),
    (SpaceId::CieLab, SpaceId::Xyz),
    (SpaceId::Xyz, SpaceId::CieLuv),
    (SpaceId::CieLuv, SpaceId::Xyz),
    (SpaceId::Xyz, SpaceId::Srgb),
    (SpaceId::Srgb, SpaceId::Xyz),
    (SpaceId::CieLab, SpaceId::Lch),
    (SpaceId::Lch, SpaceId::CieLab),
    (SpaceId::CieLuv, SpaceId::Lch),
    (SpaceId::Lch, SpaceId::CieLuv),
    (SpaceId::Srgb, SpaceId::Hsv),
    (SpaceId::Hsv, SpaceId::Srgb),
];

/// Whether `from -> to` has a direct formula.
#[inline]
pub fn has_edge(from: SpaceId, to: SpaceId) -> bool {
    EDGES.contains(&(from, to))
}

/// Applies the direct formula for `from -> to`.
///
/// # Errors
///
/// - [`ColorError::DegenerateInput`] if the formula divides by zero
/// - [`ColorError::UnsupportedOperation`] if the pair is not in [`EDGES`]
pub fn step(values: [f64; 3], from: SpaceId, to: SpaceId) -> ColorResult<[f64; 3]> {
    use SpaceId as S;

    let out = match (from, to) {
        (S::Xyz, S::XyY) => Xyz::from_array(values).to_xyy()?.to_array(),
        (S::XyY, S::Xyz) => XyY::from_array(values).to_xyz()?.to_array(),
        (S::Xyz, S::CieLab) => Xyz::from_array(values).to_lab().to_array(),
        (S::CieLab, S::Xyz) => Lab::from_array(values).to_xyz().to_array(),
        (S::Xyz, S::CieLuv) => Xyz::from_array(values).to_luv()?.to_array(),
        (S::CieLuv, S::Xyz) => Luv::from_array(values).to_xyz()?.to_array(),
        (S::Xyz, S::Srgb) => Xyz::from_array(values).to_srgb().to_array(),
        (S::Srgb, S::Xyz) => Srgb::from_array(values).to_xyz().to_array(),
        (S::CieLab, S::Lch) => Lab::from_array(values).to_lch().to_array(),
        (S::Lch, S::CieLab) => Lch::from_array(values).to_lab().to_array(),
        (S::CieLuv, S::Lch) => Luv::from_array(values).to_lch().to_array(),
        (S::Lch, S::CieLuv) => Lch::from_array(values).to_luv().to_array(),
        (S::Srgb, S::Hsv) => Srgb::from_array(values).to_hsv().to_array(),
        (S::Hsv, S::Srgb) => Hsv::from_array(values).to_srgb().to_array(),
        _ => {
            return Err(ColorError::UnsupportedOperation(format!(
                "no direct conversion {from} -> {to}"
            )));
        }
    };
    Ok(out)
}

/// `space` followed by each `hub_parent` up to XYZ.
fn hub_chain(space: SpaceId) -> Vec<SpaceId> {
    std::iter::successors(Some(space), |s| s.hub_parent()).collect()
}

/// The hops from `from` to `to`, both ends included.
///
/// ```rust
/// use colors::graph::route;
/// use colors::SpaceId::*;
///
/// assert_eq!(route(Srgb, Srgb), vec![Srgb]);
/// assert_eq!(route(Lch, CieLuv), vec![Lch, CieLuv]);
/// assert_eq!(route(XyY, Lch), vec![XyY, Xyz, CieLab, Lch]);
/// ```
pub fn route(from: SpaceId, to: SpaceId) -> Vec<SpaceId> {
    if from == to {
        return vec![from];
    }
    if has_edge(from, to) {
        return vec![from, to];
    }

    let up = hub_chain(from);
    let down = hub_chain(to);
    // Both chains end at XYZ, so a common ancestor always exists.
    let (i, j) = up
        .iter()
        .enumerate()
        .find_map(|(i, s)| down.iter().position(|t| t == s).map(|j| (i, j)))
        .unwrap_or((up.len() - 1, down.len() - 1));

    let mut path = up[..=i].to_vec();
    path.extend(down[..j].iter().rev());
    path
}

/// Converts `values` from one space to another along [`route`].
///
/// Converting to the same space returns the values unchanged.
///
/// # Errors
///
/// [`ColorError::DegenerateInput`] from the first hop whose formula divides
/// by zero.
pub fn convert(values: [f64; 3], from: SpaceId, to: SpaceId) -> ColorResult<[f64; 3]> {
    let path = route(from, to);
    trace!(%from, %to, hops = path.len() - 1, "convert");

    path.windows(2)
        .try_fold(values, |acc, hop| step(acc, hop[0], hop[1]))
}
