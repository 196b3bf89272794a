//! Convert command
//!
//! Converts one color and prints it as `SPACE(c0, c1, c2)` or JSON.

use crate::ConvertArgs;
use anyhow::{Context, Result};
use colors::Color;
use tracing::debug;

pub fn run(args: ConvertArgs) -> Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}

pub(crate) fn render(args: &ConvertArgs) -> Result<String> {
    let [c0, c1, c2] = args.values[..] else {
        anyhow::bail!("Expected 3 coordinates, got {}", args.values.len());
    };
    let color = Color::make(&args.space, [c0, c1, c2])
        .with_context(|| format!("Invalid source color: {}", args.space))?;
    let target = super::parse_space(&args.to)?;
    debug!(%color, %target, "converting");

    let converted = color
        .to(target)
        .with_context(|| format!("Cannot convert {color} to {target}"))?;

    if args.json {
        return serde_json::to_string(&converted).context("Failed to serialize color");
    }
    Ok(match args.precision {
        Some(p) => format!("{converted:.p$}"),
        None => converted.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(space: &str, values: [f64; 3], to: &str) -> ConvertArgs {
        ConvertArgs {
            space: space.into(),
            values: values.to_vec(),
            to: to.into(),
            precision: None,
            json: false,
        }
    }

    #[test]
    fn test_render_plain() {
        let mut a = args("HSV", [120.0, 1.0, 1.0], "srgb");
        assert_eq!(render(&a).unwrap(), "sRGB(0, 1, 0)");

        a.to = "CIELab".into();
        a.precision = Some(2);
        assert_eq!(render(&a).unwrap(), "CIELab(87.73, -86.18, 83.18)");
    }

    #[test]
    fn test_render_json() {
        let mut a = args("lch", [50.0, 0.0, 0.0], "LCh");
        a.json = true;
        assert_eq!(render(&a).unwrap(), r#"{"space":"LCh","values":[50.0,0.0,0.0]}"#);
    }

    #[test]
    fn test_unknown_space() {
        let err = render(&args("CMYK", [0.0; 3], "XYZ")).unwrap_err();
        assert!(err.to_string().contains("CMYK"));

        let err = render(&args("XYZ", [0.1; 3], "Lab2000")).unwrap_err();
        assert!(err.to_string().contains("Lab2000"));
    }

    #[test]
    fn test_degenerate_input() {
        let err = render(&args("XYZ", [0.0; 3], "xyY")).unwrap_err();
        assert_eq!(err.to_string(), "Cannot convert XYZ(0, 0, 0) to xyY");
        assert!(err.root_cause().to_string().starts_with("degenerate XYZ input"));
    }
}
