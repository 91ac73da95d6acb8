//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the diagram, the info panel and the view controls from
//! signals owned by the page; they never hold panel state themselves.

pub mod diagram_view;
pub mod explainer_frame;
pub mod info_panel;
pub mod view_switcher;
