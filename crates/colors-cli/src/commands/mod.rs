//! CLI command implementations

pub mod convert;
pub mod route;
pub mod spaces;

use anyhow::{Context, Result};
use colors::SpaceId;

/// Parses a space name given on the command line.
pub fn parse_space(name: &str) -> Result<SpaceId> {
    name.parse::<SpaceId>()
        .with_context(|| format!("Invalid space: {name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_space() {
        assert_eq!(parse_space("srgb").unwrap(), SpaceId::Srgb);
        assert_eq!(parse_space("xyY").unwrap(), SpaceId::XyY);

        let err = parse_space("CMYK").unwrap_err();
        assert_eq!(err.to_string(), "Invalid space: CMYK");
        assert_eq!(err.root_cause().to_string(), "unknown color space: \"CMYK\"");
    }
}
