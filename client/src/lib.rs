//! # client
//!
//! Leptos + WASM frontend for the architecture explainer pages.
//!
//! This crate contains the pages, the diagram and info panel components, and
//! the panel binder state. Content comes from the `content` crate; the server
//! builds the catalog once and hands it to [`app::App`], and the browser
//! builds the same catalog before hydrating.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: build the catalog and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use std::sync::Arc;

    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match content::Catalog::build() {
        Ok(catalog) => {
            let catalog = Arc::new(catalog);
            leptos::mount::hydrate_body(move || view! { <App catalog/> });
        }
        Err(e) => log::error!("explainer catalog failed to build: {e}"),
    }
}
