//! Pure projections from [`PanelState`] to what the page shows.
//!
//! The info panel, the control buttons and the per-view diagram containers are
//! all functions of the current state and the registry, so re-rendering after
//! a reduce always yields the same DOM for the same state.

#[cfg(test)]
#[path = "panel_view_test.rs"]
mod panel_view_test;

use content::{ContentRegistry, DisplayRecord, NodeKey};

use crate::state::panel::PanelState;

/// Contents of the info panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelView {
    /// Nothing selected yet.
    Placeholder(&'static str),
    /// Title and body of the active record.
    Record(DisplayRecord),
}

/// Render the info panel for `state`.
///
/// A selected key without a record falls back to the placeholder; [`reduce`]
/// never produces one, but the projection stays total.
///
/// [`reduce`]: crate::state::panel::reduce
#[must_use]
pub fn render<K: NodeKey>(state: PanelState<K>, registry: &ContentRegistry<K>, placeholder: &'static str) -> PanelView {
    state
        .active
        .and_then(|key| registry.lookup(key))
        .map_or(PanelView::Placeholder(placeholder), PanelView::Record)
}

/// One control button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlView {
    pub tag: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Control buttons in declaration order; at most one is active.
#[must_use]
pub fn controls<K: NodeKey>(state: PanelState<K>) -> Vec<ControlView> {
    K::ALL
        .iter()
        .map(|key| ControlView { tag: key.tag(), label: key.label(), active: state.active == Some(*key) })
        .collect()
}

/// Whether the diagram container for `view` is shown.
#[must_use]
pub fn is_visible<K: NodeKey>(state: PanelState<K>, view: K) -> bool {
    state.active == Some(view)
}

/// Tag of the active key, used to highlight diagram nodes.
#[must_use]
pub fn active_tag<K: NodeKey>(state: PanelState<K>) -> Option<&'static str> {
    state.active.map(NodeKey::tag)
}

/// Keys that activate a focused node, matching native button behavior.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
