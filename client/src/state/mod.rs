//! Client-side page state.
//!
//! DESIGN
//! ======
//! Each explainer page owns one `RwSignal<PanelState<K>>`. All changes go
//! through [`panel::reduce`]; rendering reads the state through the pure
//! helpers in `util::panel_view`.

pub mod panel;
