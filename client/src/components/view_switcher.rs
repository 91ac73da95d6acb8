//! Row of mutually exclusive view buttons.

use leptos::prelude::*;

use crate::util::panel_view::ControlView;

/// Buttons for each view; the active one carries `view-switcher__btn--active`.
#[component]
pub fn ViewSwitcher(#[prop(into)] controls: Signal<Vec<ControlView>>, on_select: Callback<String>) -> impl IntoView {
    view! {
        <nav class="view-switcher" aria-label="Diagram views">
            {move || {
                controls
                    .get()
                    .into_iter()
                    .map(|control| {
                        let pressed = if control.active { "true" } else { "false" };
                        view! {
                            <button
                                class="view-switcher__btn"
                                class:view-switcher__btn--active=control.active
                                attr:data-node=control.tag
                                aria-pressed=pressed
                                on:click=move |_ev: leptos::ev::MouseEvent| on_select.run(control.tag.to_owned())
                            >
                                {control.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
