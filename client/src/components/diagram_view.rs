//! SVG rendering of a laid-out diagram.
//!
//! DESIGN
//! ======
//! Nodes carry their tag in `data-node` rather than an element id, so the same
//! tag may appear in several diagrams on one page. When `on_select` is given,
//! every node is focusable and activates on click, Enter or Space; otherwise
//! the diagram is purely decorative.

use content::diagram::ast::NodeShape;
use content::diagram::{Layout, PlacedEdge, PlacedNode};
use leptos::prelude::*;

use crate::util::panel_view::is_activation_key;
use crate::util::svg;

/// Draw `layout` as an inline SVG.
#[component]
pub fn DiagramView(
    layout: Layout,
    /// Prefix for ids inside the SVG, unique per page.
    #[prop(into)]
    scope: String,
    /// Tag of the highlighted node, if any.
    #[prop(into)]
    active: Signal<Option<&'static str>>,
    #[prop(optional)] on_select: Option<Callback<String>>,
) -> impl IntoView {
    let marker_id = svg::marker_id(&scope);
    let marker_url = svg::marker_url(&scope);
    let view_box = layout.view_box();

    let edges = layout
        .edges
        .into_iter()
        .map(|edge| render_edge(edge, &marker_url))
        .collect::<Vec<_>>();
    let nodes = layout
        .nodes
        .into_iter()
        .map(|node| render_node(node, active, on_select))
        .collect::<Vec<_>>();

    view! {
        <svg class="diagram" viewBox=view_box preserveAspectRatio="xMidYMid meet" role="img">
            <defs>
                <marker
                    id=marker_id
                    viewBox="0 0 10 10"
                    refX="9"
                    refY="5"
                    markerWidth="8"
                    markerHeight="8"
                    orient="auto-start-reverse"
                >
                    <path class="svg-arrowhead" d="M0,0 L10,5 L0,10 Z"></path>
                </marker>
            </defs>
            <g class="svg-edges">{edges}</g>
            <g class="svg-nodes">{nodes}</g>
        </svg>
    }
}

fn render_edge(edge: PlacedEdge, marker_url: &str) -> AnyView {
    let marker_end = edge.style.has_arrowhead().then(|| marker_url.to_owned());
    let label = edge.label.clone().zip(edge.label_at).map(|(text, at)| {
        view! {
            <text class="svg-edge__label" x=at.x y=at.y text-anchor="middle">
                {text}
            </text>
        }
    });

    view! {
        <path
            class="svg-edge"
            d=edge.path_data()
            fill="none"
            stroke-width=svg::stroke_width(edge.style)
            stroke-dasharray=svg::dash_array(edge.style)
            marker-end=marker_end
        ></path>
        {label}
    }
    .into_any()
}

fn render_node(node: PlacedNode, active: Signal<Option<&'static str>>, on_select: Option<Callback<String>>) -> AnyView {
    let (label_y, caption_y) = svg::text_rows(&node);
    let center_x = node.center().x;
    let outline = render_outline(&node);
    let caption = node.caption.clone().zip(caption_y).map(|(text, y)| {
        view! {
            <text class="svg-node__caption" x=center_x y=y text-anchor="middle" dominant-baseline="middle">
                {text}
            </text>
        }
    });

    let interactive = on_select.is_some();
    let is_active = {
        let id = node.id.clone();
        move || active.get() == Some(id.as_str())
    };
    let select = {
        let id = node.id.clone();
        move || {
            if let Some(on_select) = on_select {
                on_select.run(id.clone());
            }
        }
    };
    let select_on_key = select.clone();

    view! {
        <g
            class="svg-node"
            class:svg-node--interactive=interactive
            class:svg-node--active=is_active
            attr:data-node=node.id.clone()
            tabindex=interactive.then_some("0")
            role=interactive.then_some("button")
            aria-label=interactive.then(|| node.label.clone())
            on:click=move |_ev: leptos::ev::MouseEvent| select()
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if interactive && is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    select_on_key();
                }
            }
        >
            {outline}
            <text class="svg-node__label" x=center_x y=label_y text-anchor="middle" dominant-baseline="middle">
                {node.label.clone()}
            </text>
            {caption}
        </g>
    }
    .into_any()
}

fn render_outline(node: &PlacedNode) -> AnyView {
    let fill = node.fill.clone();
    let stroke = node.stroke.clone();
    match node.shape {
        NodeShape::Rect | NodeShape::Round => {
            let radius = svg::corner_radius(node);
            view! {
                <rect
                    class="svg-node__shape"
                    x=node.x
                    y=node.y
                    width=node.width
                    height=node.height
                    rx=radius
                    ry=radius
                    fill=fill
                    stroke=stroke
                ></rect>
            }
            .into_any()
        }
        NodeShape::Cylinder => {
            view! { <path class="svg-node__shape" d=svg::cylinder_path(node) fill=fill stroke=stroke></path> }.into_any()
        }
        NodeShape::Rhombus => {
            view! { <polygon class="svg-node__shape" points=svg::rhombus_points(node) fill=fill stroke=stroke></polygon> }
                .into_any()
        }
    }
}
