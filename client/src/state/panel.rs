//! Panel binder state machine.
//!
//! States are "no selection" and "selected(key)". Every activation moves to
//! `selected(key)` when the registry has a record for `key`, from any state;
//! otherwise the state is left untouched. There is no terminal state.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use content::{ContentRegistry, NodeKey};

/// Which identifier the panel currently shows, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelState<K> {
    pub active: Option<K>,
}

impl<K> Default for PanelState<K> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<K: NodeKey> PanelState<K> {
    /// Initial state with `default` auto-activated, as on page load.
    #[must_use]
    pub fn with_default(default: K, registry: &ContentRegistry<K>) -> Self {
        reduce(Self::default(), Activation(default), registry)
    }
}

/// A pointer or keyboard activation of the element tagged with `K`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activation<K>(pub K);

impl<K: NodeKey> Activation<K> {
    /// Parse the tag carried by a DOM element. `None` for unknown tags.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        K::from_tag(tag).map(Self)
    }
}

/// Apply one activation.
#[must_use]
pub fn reduce<K: NodeKey>(state: PanelState<K>, activation: Activation<K>, registry: &ContentRegistry<K>) -> PanelState<K> {
    let Activation(key) = activation;
    if registry.contains(key) {
        PanelState { active: Some(key) }
    } else {
        state
    }
}

/// Apply an activation straight from a DOM tag. Unknown tags are a no-op.
#[must_use]
pub fn activate_tag<K: NodeKey>(state: PanelState<K>, tag: &str, registry: &ContentRegistry<K>) -> PanelState<K> {
    match Activation::from_tag(tag) {
        Some(activation) => reduce(state, activation, registry),
        None => state,
    }
}
