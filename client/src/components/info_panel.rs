//! Display region showing the placeholder or the active record.

use leptos::prelude::*;

use crate::util::panel_view::PanelView;

/// Info panel bound to a rendered [`PanelView`].
#[component]
pub fn InfoPanel(#[prop(into)] panel: Signal<PanelView>) -> impl IntoView {
    view! {
        <aside class="info-panel" aria-live="polite">
            {move || match panel.get() {
                PanelView::Placeholder(text) => view! {
                    <h2 class="info-panel__placeholder">{text}</h2>
                }
                .into_any(),
                PanelView::Record(record) => view! {
                    <h3 class="info-panel__title">{record.title}</h3>
                    <p class="info-panel__body">{record.body}</p>
                }
                .into_any(),
            }}
        </aside>
    }
}
