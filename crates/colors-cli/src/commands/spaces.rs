//! Spaces command
//!
//! Lists every supported space with its components and hub parent.

use anyhow::Result;
use colors::SpaceId;

pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

pub(crate) fn render() -> String {
    let mut out = String::new();
    for id in SpaceId::ALL {
        let [c0, c1, c2] = id.component_names();
        let parent = id.hub_parent().map_or_else(|| "-".to_string(), |p| p.to_string());
        out.push_str(&format!("{:<8} {c0:>3} {c1:>3} {c2:>3}   via {parent}\n", id.name()));
    }
    out
}
