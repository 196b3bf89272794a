//! Route command
//!
//! Prints the hops a conversion takes through the graph.

use crate::RouteArgs;
use anyhow::Result;
use colors::graph;

pub fn run(args: RouteArgs) -> Result<()> {
    println!("{}", render(&args)?);
    Ok(())
}

pub(crate) fn render(args: &RouteArgs) -> Result<String> {
    let from = super::parse_space(&args.from)?;
    let to = super::parse_space(&args.to)?;
    let hops: Vec<String> = graph::route(from, to).iter().map(ToString::to_string).collect();
    Ok(hops.join(" -> "))
}
