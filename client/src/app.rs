//! Root application component with routing and context providers.

use std::sync::Arc;

use content::Catalog;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{coevolution::CoevolutionPage, evolution::EvolutionPage, home::HomePage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions, catalog: Arc<Catalog>) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App catalog/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Receives the prebuilt catalog and provides it to the pages as context.
#[component]
pub fn App(catalog: Arc<Catalog>) -> impl IntoView {
    provide_meta_context();
    provide_context(catalog);

    view! {
        <Stylesheet id="leptos" href="/pkg/explainer.css"/>
        <Title text="Architecture Explainers"/>

        <Router>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("evolution") view=EvolutionPage/>
                    <Route path=StaticSegment("coevolution") view=CoevolutionPage/>
                </Routes>
            </main>
        </Router>
    }
}
