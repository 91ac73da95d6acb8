//! The agent evolution explainer: one hand-drawn diagram, clickable nodes.

use crate::diagram::ast::{EdgeStyle, NodeShape};
use crate::diagram::{Layout, PlacedEdge, PlacedNode, Point};
use crate::error::RegistryError;
use crate::key::NodeKey;
use crate::record::DisplayRecord;
use crate::registry::ContentRegistry;

pub const PLACEHOLDER: &str = "Click a component in the diagram to learn more.";

/// Nodes of the evolution diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EvolutionNode {
    Director,
    Researcher,
    Engineer,
    Critic,
    Database,
}

impl NodeKey for EvolutionNode {
    const ALL: &'static [Self] = &[Self::Director, Self::Researcher, Self::Engineer, Self::Critic, Self::Database];

    fn tag(self) -> &'static str {
        match self {
            Self::Director => "Director",
            Self::Researcher => "Researcher",
            Self::Engineer => "Engineer",
            Self::Critic => "Critic",
            Self::Database => "DB",
        }
    }
}

const RECORDS: &[(EvolutionNode, DisplayRecord)] = &[
    (
        EvolutionNode::Director,
        DisplayRecord::new(
            "The Director Agent (Macro-Cycle)",
            "The highest level of strategic thinking. The Director analyzes long-term trends from the database and \
             consults the Cognition Archive to issue broad Research Mandates. It does not design or run experiments, \
             but sets the overall research agenda for the entire system.",
        ),
    ),
    (
        EvolutionNode::Researcher,
        DisplayRecord::new(
            "The Researcher & Designer Agents (Meso-Cycle)",
            "This is the scientific core of the system. The Researcher receives a Research Mandate and formulates a \
             specific, testable hypothesis. The Designer then creates a concrete 'Challenger' prompt set to test that \
             hypothesis against the current 'Champion'.",
        ),
    ),
    (
        EvolutionNode::Engineer,
        DisplayRecord::new(
            "The Engineer Agent (Micro-Cycle)",
            "The hands-on developer. The Engineer executes the fast, inner loop of coding, testing, and, crucially, \
             self-revising. It takes a prompt set and works until it produces a functionally correct, tested code \
             artifact.",
        ),
    ),
    (
        EvolutionNode::Critic,
        DisplayRecord::new(
            "The Critic & Analyst Agents",
            "The arbiters of quality and performance. The Critic provides a qualitative score for elegance and \
             novelty, while the Analyst calculates the final, composite fitness score. This ensures the system \
             evolves towards solutions that are not just correct, but genuinely superior.",
        ),
    ),
    (
        EvolutionNode::Database,
        DisplayRecord::new(
            "The Central Database",
            "The single source of truth. All agents communicate asynchronously through this database. It stores the \
             complete history of all experiments, prompts, performance logs, and qualitative assessments, providing \
             the collective memory that enables long-term, structured learning.",
        ),
    ),
];

/// Build the evolution registry.
///
/// # Errors
///
/// Returns [`RegistryError::DuplicateKey`] if the table repeats a node.
pub fn registry() -> Result<ContentRegistry<EvolutionNode>, RegistryError> {
    ContentRegistry::build(RECORDS.iter().copied())
}

/// The hand-drawn diagram on a 1200x800 canvas.
#[must_use]
pub fn diagram() -> Layout {
    let nodes = vec![
        node(EvolutionNode::Director, "Director Agent", Some("(Macro-Cycle)"), (400.0, 50.0, 400.0, 80.0), BLUE),
        node(EvolutionNode::Researcher, "Researcher & Designer", Some("(Meso-Cycle)"), (100.0, 200.0, 400.0, 80.0), BLUE),
        node(EvolutionNode::Engineer, "Engineer Agent", Some("(Micro-Cycle)"), (700.0, 200.0, 400.0, 80.0), TEAL),
        node(EvolutionNode::Critic, "Critic & Analyst Agents", None, (100.0, 350.0, 400.0, 80.0), YELLOW),
        node(
            EvolutionNode::Database,
            "Central Database",
            Some("(Experiments, Prompts, Logs)"),
            (400.0, 500.0, 400.0, 120.0),
            ORANGE,
        ),
    ];

    let edges = vec![
        edge(&[(600.0, 130.0), (600.0, 180.0), (300.0, 180.0), (300.0, 200.0)], "1. Research Mandate", (515.0, 170.0)),
        edge(&[(300.0, 280.0), (300.0, 330.0), (900.0, 330.0), (900.0, 280.0)], "2. Challenger Prompt", (670.0, 320.0)),
        edge(&[(900.0, 280.0), (900.0, 480.0), (600.0, 480.0), (600.0, 500.0)], "3. Performance Data", (815.0, 400.0)),
        edge(&[(600.0, 500.0), (600.0, 480.0), (300.0, 480.0), (300.0, 430.0)], "4. Data for Assessment", (525.0, 470.0)),
        edge(&[(300.0, 350.0), (300.0, 110.0), (400.0, 110.0)], "5. Final Analysis", (410.0, 140.0)),
    ];

    Layout { width: 1200.0, height: 800.0, nodes, edges }
}

/// Fill/stroke pairs.
type Palette = (&'static str, &'static str);

const BLUE: Palette = ("#E3F2FD", "#2196F3");
const TEAL: Palette = ("#E0F2F1", "#009688");
const YELLOW: Palette = ("#FFF9C4", "#FFEB3B");
const ORANGE: Palette = ("#FFE0B2", "#FF9800");

fn node(key: EvolutionNode, label: &str, caption: Option<&str>, rect: (f64, f64, f64, f64), palette: Palette) -> PlacedNode {
    let (x, y, width, height) = rect;
    PlacedNode {
        id: key.tag().to_owned(),
        label: label.to_owned(),
        caption: caption.map(ToOwned::to_owned),
        shape: NodeShape::Rect,
        x,
        y,
        width,
        height,
        fill: palette.0.to_owned(),
        stroke: palette.1.to_owned(),
    }
}

fn edge(points: &[(f64, f64)], label: &str, label_at: (f64, f64)) -> PlacedEdge {
    PlacedEdge {
        points: points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        label: Some(label.to_owned()),
        label_at: Some(Point::new(label_at.0, label_at.1)),
        style: EdgeStyle::Solid,
    }
}
