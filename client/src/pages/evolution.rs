//! Agent evolution page: a single diagram whose nodes drive the info panel.

use std::sync::Arc;

use content::{Catalog, EvolutionNode, ExplainerKind};
use leptos::prelude::*;

use crate::components::diagram_view::DiagramView;
use crate::components::explainer_frame::ExplainerFrame;
use crate::components::info_panel::InfoPanel;
use crate::state::panel::{PanelState, activate_tag};
use crate::util::panel_view::{active_tag, render};

#[component]
pub fn EvolutionPage() -> impl IntoView {
    let catalog = expect_context::<Arc<Catalog>>();
    let state = RwSignal::new(PanelState::<EvolutionNode>::default());

    let on_select = Callback::new({
        let catalog = catalog.clone();
        move |tag: String| {
            state.update(|s| *s = activate_tag(*s, &tag, &catalog.evolution.registry));
        }
    });
    let panel = Signal::derive({
        let catalog = catalog.clone();
        move || render(state.get(), &catalog.evolution.registry, catalog.evolution.placeholder)
    });
    let active = Signal::derive(move || active_tag(state.get()));
    let layout = catalog.evolution.diagram.clone();

    view! {
        <ExplainerFrame title=ExplainerKind::Evolution.title()>
            <div class="explainer__diagram">
                <DiagramView layout scope="evolution" active on_select/>
            </div>
            <InfoPanel panel/>
        </ExplainerFrame>
    }
}
