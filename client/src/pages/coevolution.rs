//! Prompt/critic co-evolution page: view buttons swap diagrams and prose.
//!
//! Every view's diagram is rendered up front and hidden with a class, so
//! switching views never re-runs the layout. A description that fails to
//! render leaves its container empty; the failure is logged.

use std::sync::Arc;

use content::{Catalog, CycleView, ExplainerKind, NodeKey, diagram};
use leptos::prelude::*;

use crate::components::diagram_view::DiagramView;
use crate::components::explainer_frame::ExplainerFrame;
use crate::components::info_panel::InfoPanel;
use crate::components::view_switcher::ViewSwitcher;
use crate::state::panel::{PanelState, activate_tag};
use crate::util::panel_view::{controls, is_visible, render};

#[component]
pub fn CoevolutionPage() -> impl IntoView {
    let catalog = expect_context::<Arc<Catalog>>();
    let explainer = &catalog.coevolution;
    let state = RwSignal::new(PanelState::<CycleView>::with_default(explainer.default_view, &explainer.registry));

    let on_select = Callback::new({
        let catalog = catalog.clone();
        move |tag: String| {
            state.update(|s| *s = activate_tag(*s, &tag, &catalog.coevolution.registry));
        }
    });
    let panel = Signal::derive({
        let catalog = catalog.clone();
        move || render(state.get(), &catalog.coevolution.registry, catalog.coevolution.placeholder)
    });
    let buttons = Signal::derive(move || controls(state.get()));
    let no_highlight = Signal::derive(|| None::<&'static str>);

    let diagrams = explainer
        .diagrams
        .iter()
        .map(|&(cycle, description)| {
            let layout = match diagram::render(description) {
                Ok(layout) => Some(layout),
                Err(e) => {
                    leptos::logging::warn!("coevolution/{} diagram failed to render: {e}", cycle.tag());
                    None
                }
            };
            let body = layout.map(|layout| {
                view! {
                    <DiagramView
                        layout
                        scope=format!("coevolution-{}", cycle.tag())
                        active=no_highlight
                    />
                }
            });
            view! {
                <div
                    class="explainer__diagram"
                    class:explainer__diagram--hidden=move || !is_visible(state.get(), cycle)
                    attr:data-view=cycle.tag()
                >
                    {body}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <ExplainerFrame title=ExplainerKind::Coevolution.title()>
            <ViewSwitcher controls=buttons on_select/>
            <div class="explainer__diagrams">{diagrams}</div>
            <InfoPanel panel/>
        </ExplainerFrame>
    }
}
