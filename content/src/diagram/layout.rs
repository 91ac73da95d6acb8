//! Layout engine: converts a parsed flowchart into positioned boxes and routed edges.
//!
//! Nodes are ranked by breadth-first depth from the sources, stacked rank by
//! rank along the flow direction and centered across it. Edges to the next
//! rank bend once in the gap between ranks; every other edge (back, within a
//! rank, or skipping ranks) runs through the gaps out to its own lane beside
//! the nodes.

use std::collections::{HashMap, VecDeque};
use std::fmt::Write as _;

use super::ast::{Direction, EdgeStyle, Flowchart, Node, NodeShape};

// Layout constants (in SVG user units).
const NODE_MIN_W: f64 = 140.0;
const NODE_H: f64 = 48.0;
const CAPTION_H: f64 = 20.0;
const CHAR_W: f64 = 8.5;
const NODE_PAD_X: f64 = 18.0;
const RANK_GAP: f64 = 72.0;
const NODE_GAP: f64 = 40.0;
const LANE_GAP: f64 = 28.0;
const MARGIN: f64 = 24.0;

pub const DEFAULT_FILL: &str = "#E3F2FD";
pub const DEFAULT_STROKE: &str = "#2196F3";

/// A point in SVG user units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node box ready to draw. `id` is the tag the page binds activations to.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub id: String,
    pub label: String,
    pub caption: Option<String>,
    pub shape: NodeShape,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub stroke: String,
}

impl PlacedNode {
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether two boxes share any interior area.
    #[cfg(test)]
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// A routed edge as a polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedEdge {
    pub points: Vec<Point>,
    pub label: Option<String>,
    /// Center of the label text, when there is a label.
    pub label_at: Option<Point>,
    pub style: EdgeStyle,
}

impl PlacedEdge {
    /// SVG path data (`M x,y L x,y ...`) for the polyline.
    #[must_use]
    pub fn path_data(&self) -> String {
        let mut d = String::new();
        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                d.push(' ');
            }
            let _ = write!(d, "{cmd}{},{}", p.x, p.y);
        }
        d
    }
}

/// A laid-out diagram.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<PlacedEdge>,
}

impl Layout {
    /// Find a node by its tag.
    #[cfg(test)]
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&PlacedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// SVG `viewBox` attribute value.
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Lay out a parsed flowchart.
#[must_use]
pub fn layout(chart: &Flowchart) -> Layout {
    let node_count = chart.nodes.len();
    if node_count == 0 {
        return Layout::default();
    }

    let index: HashMap<&str, usize> = chart
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id.as_str(), i))
        .collect();
    let resolved: Vec<Option<(usize, usize)>> = chart
        .edges
        .iter()
        .map(|e| Some((*index.get(e.from.as_str())?, *index.get(e.to.as_str())?)))
        .collect();
    let links: Vec<(usize, usize)> = resolved.iter().flatten().copied().collect();

    let ranks = assign_ranks(node_count, &links);
    let vertical = chart.direction.is_vertical();
    let sizes: Vec<(f64, f64)> = chart.nodes.iter().map(node_size).collect();
    let main_of = |(w, h): (f64, f64)| if vertical { h } else { w };
    let cross_of = |(w, h): (f64, f64)| if vertical { w } else { h };

    let rank_count = ranks.iter().max().map_or(0, |r| r + 1);
    let mut by_rank: Vec<Vec<usize>> = vec![Vec::new(); rank_count];
    for (i, &r) in ranks.iter().enumerate() {
        by_rank[r].push(i);
    }

    // Extent of each rank along the flow (main) axis.
    let thickness: Vec<f64> = by_rank
        .iter()
        .map(|members| members.iter().map(|&i| main_of(sizes[i])).fold(0.0, f64::max))
        .collect();
    let mut main_start = Vec::with_capacity(rank_count);
    let mut cursor = 0.0;
    for t in &thickness {
        main_start.push(cursor);
        cursor += t + RANK_GAP;
    }
    let total_main = cursor - RANK_GAP;

    // Extent of each rank across the flow.
    let spans: Vec<f64> = by_rank
        .iter()
        .map(|members| {
            let sum: f64 = members.iter().map(|&i| cross_of(sizes[i])).sum();
            #[allow(clippy::cast_precision_loss)]
            let gaps = NODE_GAP * members.len().saturating_sub(1) as f64;
            sum + gaps
        })
        .collect();
    let total_cross = spans.iter().copied().fold(0.0, f64::max);

    // Top-left corner of each node in (main, cross) space.
    let mut origin = vec![(0.0, 0.0); node_count];
    for (r, members) in by_rank.iter().enumerate() {
        let mut cross = (total_cross - spans[r]) / 2.0;
        for &i in members {
            let main = main_start[r] + (thickness[r] - main_of(sizes[i])) / 2.0;
            origin[i] = (main, cross);
            cross += cross_of(sizes[i]) + NODE_GAP;
        }
    }

    // Route edges in (main, cross) space.
    let rank_end = |r: usize| main_start[r] + thickness[r];
    let mut lanes = 0_usize;
    let mut routes: Vec<(usize, Vec<(f64, f64)>)> = Vec::with_capacity(links.len());
    for (edge_idx, link) in resolved.iter().enumerate() {
        let Some((from, to)) = *link else {
            continue;
        };
        let (fm, fc) = origin[from];
        let (tm, tc) = origin[to];
        let f_mid = fc + cross_of(sizes[from]) / 2.0;
        let t_mid = tc + cross_of(sizes[to]) / 2.0;
        let start = (fm + main_of(sizes[from]), f_mid);
        let end = (tm, t_mid);

        let points = if ranks[to] == ranks[from] + 1 {
            if (start.1 - end.1).abs() < f64::EPSILON {
                vec![start, end]
            } else {
                let mid = f64::midpoint(start.0, end.0);
                vec![start, (mid, start.1), (mid, end.1), end]
            }
        } else {
            // Leave through the gap after the source rank, travel in a lane
            // past every node, and come back through the gap before the
            // target rank.
            lanes += 1;
            #[allow(clippy::cast_precision_loss)]
            let lane = total_cross + LANE_GAP * lanes as f64;
            let exit = rank_end(ranks[from]) + RANK_GAP / 2.0;
            let entry = main_start[ranks[to]] - RANK_GAP / 2.0;
            vec![start, (exit, f_mid), (exit, lane), (entry, lane), (entry, t_mid), end]
        };
        routes.push((edge_idx, points));
    }

    // Lane routes may reach half a gap beyond the first and last rank.
    let (main_lo, main_hi) = routes
        .iter()
        .flat_map(|(_, route)| route.iter().map(|&(m, _)| m))
        .fold((0.0_f64, total_main), |(lo, hi), m| (lo.min(m), hi.max(m)));
    let main_extent = main_hi - main_lo;

    #[allow(clippy::cast_precision_loss)]
    let cross_extent = total_cross + LANE_GAP * lanes as f64;
    let direction = chart.direction;
    let to_point = |main: f64, cross: f64| -> Point {
        let main = main - main_lo;
        let (x, y) = match direction {
            Direction::TopDown => (cross, main),
            Direction::BottomUp => (cross, main_extent - main),
            Direction::LeftRight => (main, cross),
            Direction::RightLeft => (main_extent - main, cross),
        };
        Point::new(x + MARGIN, y + MARGIN)
    };

    let nodes = chart
        .nodes
        .iter()
        .enumerate()
        .map(|(i, node)| {
            let (main, cross) = origin[i];
            let a = to_point(main, cross);
            let b = to_point(main + main_of(sizes[i]), cross + cross_of(sizes[i]));
            place_node(node, a.x.min(b.x), a.y.min(b.y), (a.x - b.x).abs(), (a.y - b.y).abs())
        })
        .collect();

    let edges = routes
        .into_iter()
        .map(|(edge_idx, route)| {
            let edge = &chart.edges[edge_idx];
            let points: Vec<Point> = route.into_iter().map(|(m, c)| to_point(m, c)).collect();
            let label_at = edge.label.as_ref().map(|_| label_anchor(&points));
            PlacedEdge { points, label: edge.label.clone(), label_at, style: edge.style }
        })
        .collect();

    let (width, height) = if vertical {
        (cross_extent, main_extent)
    } else {
        (main_extent, cross_extent)
    };

    Layout { width: width + 2.0 * MARGIN, height: height + 2.0 * MARGIN, nodes, edges }
}

/// Rank nodes by breadth-first depth, starting from nodes without incoming
/// edges. Nodes only reachable through a cycle start a new search at rank 0.
fn assign_ranks(node_count: usize, links: &[(usize, usize)]) -> Vec<usize> {
    let mut has_incoming = vec![false; node_count];
    for &(from, to) in links {
        if from != to {
            has_incoming[to] = true;
        }
    }

    let mut rank: Vec<Option<usize>> = vec![None; node_count];
    let sources: Vec<usize> = (0..node_count).filter(|&i| !has_incoming[i]).collect();
    for start in sources.into_iter().chain(0..node_count) {
        if rank[start].is_some() {
            continue;
        }
        rank[start] = Some(0);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            let next = rank[current].map_or(0, |r| r + 1);
            for &(from, to) in links {
                if from == current && rank[to].is_none() {
                    rank[to] = Some(next);
                    queue.push_back(to);
                }
            }
        }
    }

    rank.into_iter().map(|r| r.unwrap_or(0)).collect()
}

fn node_size(node: &Node) -> (f64, f64) {
    let longest = node
        .caption
        .as_deref()
        .map_or(0, str::len)
        .max(node.label.len());
    #[allow(clippy::cast_precision_loss)]
    let text_w = longest as f64 * CHAR_W;
    let width = (text_w + 2.0 * NODE_PAD_X).max(NODE_MIN_W);
    let height = if node.caption.is_some() { NODE_H + CAPTION_H } else { NODE_H };
    (width, height)
}

fn place_node(node: &Node, x: f64, y: f64, width: f64, height: f64) -> PlacedNode {
    let style = node.style.clone().unwrap_or_default();
    PlacedNode {
        id: node.id.clone(),
        label: node.label.clone(),
        caption: node.caption.clone(),
        shape: node.shape,
        x,
        y,
        width,
        height,
        fill: style.fill.unwrap_or_else(|| DEFAULT_FILL.to_owned()),
        stroke: style.stroke.unwrap_or_else(|| DEFAULT_STROKE.to_owned()),
    }
}

/// Midpoint of the middle segment of a polyline.
fn label_anchor(points: &[Point]) -> Point {
    match points {
        [] => Point::default(),
        [only] => *only,
        _ => {
            let seg = (points.len() - 1) / 2;
            let (a, b) = (points[seg], points[seg + 1]);
            Point::new(f64::midpoint(a.x, b.x), f64::midpoint(a.y, b.y))
        }
    }
}
