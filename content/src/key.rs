//! Typed identifiers shared between diagram elements and registry keys.
//!
//! DESIGN
//! ======
//! The DOM only hands us strings (`data-node` attributes on nodes and
//! buttons). Each explainer declares the identifiers it knows as an enum, and
//! a tag is converted through [`NodeKey::from_tag`], so an unknown tag is a
//! checked `None`.

use std::fmt::Debug;
use std::hash::Hash;

/// A known identifier of one explainer's selectable surface.
pub trait NodeKey: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every known identifier, in surface order.
    const ALL: &'static [Self];

    /// The DOM tag carried by the element for this identifier.
    fn tag(self) -> &'static str;

    /// Short label for a control button. Defaults to the tag.
    fn label(self) -> &'static str {
        self.tag()
    }

    /// Parse a DOM tag. Returns `None` for tags this explainer does not know.
    #[must_use]
    fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.tag() == tag)
    }
}
