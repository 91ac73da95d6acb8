//! Flowchart description parser and layout engine.
//!
//! Parses a Mermaid-style `flowchart` description into an AST and lays it out
//! as positioned node boxes and routed edges, ready to be drawn as SVG. The
//! page treats [`render`] as a black box: description in, layout out.

pub mod ast;
pub mod layout;
pub mod parse;

pub use layout::{Layout, PlacedEdge, PlacedNode, Point, layout};
pub use parse::parse;

use crate::error::DiagramError;

/// Parse and lay out a diagram description.
///
/// # Errors
///
/// Returns a [`DiagramError`] if the description cannot be parsed.
pub fn render(description: &str) -> Result<Layout, DiagramError> {
    let chart = parse(description)?;
    Ok(layout(&chart))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
