//! Line-oriented parser for flowchart descriptions.

use super::ast::{Direction, Edge, EdgeStyle, Flowchart, Node, NodeShape, NodeStyle};
use crate::error::DiagramError;

/// Statements that are valid flowchart syntax but carry nothing we draw.
const IGNORED_KEYWORDS: &[&str] = &["subgraph", "end", "classDef", "class", "click", "linkStyle", "direction"];

/// Arrow patterns ordered longest-first to avoid prefix conflicts.
const ARROWS: &[(&str, EdgeStyle)] = &[
    ("-.->", EdgeStyle::Dotted),
    ("==>", EdgeStyle::Thick),
    ("-->", EdgeStyle::Solid),
    ("---", EdgeStyle::Open),
];

/// Node shape delimiters, ordered so `[(` is tried before `[`.
const SHAPES: &[(&str, &str, NodeShape)] = &[
    ("[(", ")]", NodeShape::Cylinder),
    ("[", "]", NodeShape::Rect),
    ("(", ")", NodeShape::Round),
    ("{", "}", NodeShape::Rhombus),
];

/// Parse flowchart description text into an AST.
///
/// Accepts text with or without the `flowchart` / `graph` header line; the
/// direction defaults to top-down. Unrecognized statements are skipped.
///
/// # Errors
///
/// Returns a [`DiagramError`] for malformed node shapes, edges without a
/// target, unsupported arrows or trailing text, unknown directions, or a
/// description without nodes.
pub fn parse(input: &str) -> Result<Flowchart, DiagramError> {
    let mut direction = Direction::default();
    let mut builder = Builder::default();
    let mut seen_statement = false;

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with("%%") {
            continue;
        }

        for statement in split_statements(line) {
            if !seen_statement {
                seen_statement = true;
                let header = strip_keyword(statement, "flowchart").or_else(|| strip_keyword(statement, "graph"));
                if let Some(rest) = header {
                    direction = parse_direction(rest)?;
                    continue;
                }
            }
            parse_statement(statement, line_no, &mut builder)?;
        }
    }

    builder.finish(direction)
}

/// Accumulates nodes in declaration order and edges as they appear.
#[derive(Default)]
struct Builder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    styles: Vec<(String, NodeStyle)>,
}

impl Builder {
    /// Declare a node, or relabel it if this reference carries a shape.
    fn declare(&mut self, node: NodeRef) {
        if let Some(existing) = self.nodes.iter_mut().find(|n| n.id == node.id) {
            if let Some((label, caption, shape)) = node.shape {
                existing.label = label;
                existing.caption = caption;
                existing.shape = shape;
            }
            return;
        }
        let (label, caption, shape) = node
            .shape
            .unwrap_or_else(|| (node.id.clone(), None, NodeShape::default()));
        self.nodes.push(Node { id: node.id, label, caption, shape, style: None });
    }

    fn finish(mut self, direction: Direction) -> Result<Flowchart, DiagramError> {
        if self.nodes.is_empty() {
            return Err(DiagramError::Empty);
        }
        for (id, style) in self.styles {
            if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
                node.style = Some(style);
            }
        }
        Ok(Flowchart { direction, nodes: self.nodes, edges: self.edges })
    }
}

/// A node reference inside a statement: an id plus optional shape/label.
struct NodeRef {
    id: String,
    shape: Option<(String, Option<String>, NodeShape)>,
}

fn parse_statement(statement: &str, line_no: usize, builder: &mut Builder) -> Result<(), DiagramError> {
    if let Some(rest) = strip_keyword(statement, "style") {
        if let Some((id, style)) = parse_style(rest) {
            builder.styles.push((id, style));
        }
        return Ok(());
    }
    if IGNORED_KEYWORDS.iter().any(|kw| strip_keyword(statement, kw).is_some()) {
        return Ok(());
    }

    let Some((first, mut rest)) = parse_node_ref(statement, line_no, statement)? else {
        // Not a node statement; skip.
        return Ok(());
    };
    let mut prev = first.id.clone();
    builder.declare(first);

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }
        let Some((style, after_arrow)) = try_arrow(rest) else {
            return Err(DiagramError::TrailingText {
                line: line_no,
                text: statement.to_owned(),
                rest: rest.to_owned(),
            });
        };
        let after_arrow = after_arrow.trim_start();

        let (label, after_label) = if let Some(inner) = after_arrow.strip_prefix('|') {
            let end = inner.find('|').ok_or_else(|| DiagramError::UnterminatedLabel {
                line: line_no,
                text: statement.to_owned(),
            })?;
            let label = inner[..end].trim();
            let label = (!label.is_empty()).then(|| label.to_owned());
            (label, inner[end + 1..].trim_start())
        } else {
            (None, after_arrow)
        };

        let Some((target, after_target)) = parse_node_ref(after_label, line_no, statement)? else {
            return Err(DiagramError::DanglingEdge { line: line_no, text: statement.to_owned() });
        };

        let to = target.id.clone();
        builder.declare(target);
        builder.edges.push(Edge { from: prev, to: to.clone(), label, style });
        prev = to;
        rest = after_target;
    }

    Ok(())
}

/// Parse `Id`, `Id[Label]`, `Id(Label)`, `Id[(Label)]` or `Id{Label}` at the
/// start of `input`, returning the remainder. `None` if no id is present.
fn parse_node_ref<'a>(input: &'a str, line_no: usize, statement: &str) -> Result<Option<(NodeRef, &'a str)>, DiagramError> {
    let id_len = input
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(input.len());
    if id_len == 0 {
        return Ok(None);
    }
    let id = input[..id_len].to_owned();
    let rest = &input[id_len..];

    for &(open, close, shape) in SHAPES {
        if let Some(body) = rest.strip_prefix(open) {
            let end = body.find(close).ok_or_else(|| DiagramError::UnterminatedShape {
                line: line_no,
                text: statement.to_owned(),
            })?;
            let (label, caption) = split_caption(unquote(body[..end].trim()));
            let node = NodeRef { id, shape: Some((label, caption, shape)) };
            return Ok(Some((node, &body[end + close.len()..])));
        }
    }

    Ok(Some((NodeRef { id, shape: None }, rest)))
}

fn try_arrow(input: &str) -> Option<(EdgeStyle, &str)> {
    ARROWS
        .iter()
        .find_map(|&(pattern, style)| input.strip_prefix(pattern).map(|rest| (style, rest)))
}

/// Parse `Id fill:#fff,stroke:#000,stroke-width:2px`. Unknown properties are ignored.
fn parse_style(rest: &str) -> Option<(String, NodeStyle)> {
    let (id, props) = rest.split_once(char::is_whitespace)?;
    let mut style = NodeStyle::default();
    for prop in props.split(',') {
        let Some((key, value)) = prop.split_once(':') else {
            continue;
        };
        match key.trim() {
            "fill" => style.fill = Some(value.trim().to_owned()),
            "stroke" => style.stroke = Some(value.trim().to_owned()),
            _ => {}
        }
    }
    Some((id.trim().to_owned(), style))
}

fn parse_direction(raw: &str) -> Result<Direction, DiagramError> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "" | "TD" | "TB" => Ok(Direction::TopDown),
        "BT" => Ok(Direction::BottomUp),
        "LR" => Ok(Direction::LeftRight),
        "RL" => Ok(Direction::RightLeft),
        other => Err(DiagramError::UnknownDirection(other.to_owned())),
    }
}

/// Split a line on `;` outside of brackets and edge labels.
fn split_statements(line: &str) -> Vec<&str> {
    let mut statements = Vec::new();
    let mut depth: usize = 0;
    let mut in_label = false;
    let mut start = 0;
    for (i, c) in line.char_indices() {
        match c {
            '[' | '(' | '{' if !in_label => depth += 1,
            ']' | ')' | '}' if !in_label => depth = depth.saturating_sub(1),
            '|' if depth == 0 => in_label = !in_label,
            ';' if depth == 0 && !in_label => {
                statements.push(line[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    statements.push(line[start..].trim());
    statements.retain(|s| !s.is_empty());
    statements
}

/// Split `Title<br/>caption` into a title and an optional caption.
fn split_caption(label: &str) -> (String, Option<String>) {
    for br in ["<br/>", "<br />", "<br>"] {
        if let Some((title, caption)) = label.split_once(br) {
            let caption = caption.trim();
            return (title.trim().to_owned(), (!caption.is_empty()).then(|| caption.to_owned()));
        }
    }
    (label.to_owned(), None)
}

fn unquote(label: &str) -> &str {
    label
        .strip_prefix('"')
        .and_then(|l| l.strip_suffix('"'))
        .unwrap_or(label)
}

/// Strip a keyword prefix (case-insensitive) and return the rest.
fn strip_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let head = line.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        let rest = &line[keyword.len()..];
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Some(rest.trim());
        }
    }
    None
}
