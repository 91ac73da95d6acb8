//! AST types for flowchart descriptions.

/// A parsed flowchart.
#[derive(Debug, Clone, PartialEq)]
pub struct Flowchart {
    pub direction: Direction,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Flow direction from the header line (`flowchart LR`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// `TD` or `TB`
    #[default]
    TopDown,
    /// `BT`
    BottomUp,
    /// `LR`
    LeftRight,
    /// `RL`
    RightLeft,
}

impl Direction {
    /// Whether ranks stack vertically.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::TopDown | Self::BottomUp)
    }
}

/// A declared node. The first line of a label is the title; anything after a
/// `<br/>` becomes the caption.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub caption: Option<String>,
    pub shape: NodeShape,
    pub style: Option<NodeStyle>,
}

/// Node outline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeShape {
    /// `A[text]`
    #[default]
    Rect,
    /// `A(text)`
    Round,
    /// `A[(text)]`
    Cylinder,
    /// `A{text}`
    Rhombus,
}

/// Colors from a `style` statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
}

/// A directed edge between two node ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
    pub style: EdgeStyle,
}

/// Edge line style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgeStyle {
    /// `-->` solid line with arrowhead
    #[default]
    Solid,
    /// `---` solid line without arrowhead
    Open,
    /// `-.->` dotted line with arrowhead
    Dotted,
    /// `==>` thick line with arrowhead
    Thick,
}

impl EdgeStyle {
    #[must_use]
    pub fn has_arrowhead(self) -> bool {
        !matches!(self, Self::Open)
    }
}
