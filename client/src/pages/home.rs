//! Index page linking to each explainer.

use content::ExplainerKind;
use content::catalog::Surface;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let cards = ExplainerKind::ALL
        .iter()
        .map(|kind| {
            let hint = match kind.surface() {
                Surface::Nodes => "Click the components of the diagram.",
                Surface::Views => "Switch between views of the cycle.",
            };
            view! {
                <li class="home__item">
                    <a class="home__link" href=format!("/{}", kind.slug())>
                        <span class="home__title">{kind.title()}</span>
                        <span class="home__hint">{hint}</span>
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="home">
            <h1 class="home__heading">"Architecture Explainers"</h1>
            <ul class="home__list">{cards}</ul>
        </div>
    }
}
