//! Page chrome shared by the explainer pages.

use leptos::prelude::*;

/// Header with the page title and a link back to the index.
#[component]
pub fn ExplainerFrame(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="explainer">
            <header class="explainer__header">
                <a class="explainer__back" href="/">
                    "All explainers"
                </a>
                <h1 class="explainer__title">{title}</h1>
            </header>
            <div class="explainer__body">{children()}</div>
        </div>
    }
}
