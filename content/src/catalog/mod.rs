//! The explainers this site serves and their static content.
//!
//! DESIGN
//! ======
//! Each explainer owns an independent literal table, even where prose overlaps
//! between pages. [`Catalog::build`] constructs every registry once, up front,
//! and the result is passed by reference to whoever renders pages or answers
//! API requests.

pub mod coevolution;
pub mod evolution;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use serde::Serialize;

use crate::diagram::Layout;
use crate::error::CatalogError;
use crate::key::NodeKey;
use crate::record::DisplayRecord;
use crate::registry::ContentRegistry;

pub use coevolution::CycleView;
pub use evolution::EvolutionNode;

/// The explainer pages, addressed by URL slug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplainerKind {
    Evolution,
    Coevolution,
}

impl ExplainerKind {
    pub const ALL: &'static [Self] = &[Self::Evolution, Self::Coevolution];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Evolution => "evolution",
            Self::Coevolution => "coevolution",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Evolution => "Agent Evolution Architecture",
            Self::Coevolution => "Prompt and Critic Co-Evolution",
        }
    }

    #[must_use]
    pub fn surface(self) -> Surface {
        match self {
            Self::Evolution => Surface::Nodes,
            Self::Coevolution => Surface::Views,
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.slug() == slug)
    }
}

/// What the user clicks on an explainer page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// Nodes of a single diagram.
    Nodes,
    /// Mutually exclusive buttons, each showing its own diagram.
    Views,
}

/// Explainer whose diagram nodes are the selectable surface.
#[derive(Clone, Debug)]
pub struct NodeExplainer<K: NodeKey> {
    pub registry: ContentRegistry<K>,
    pub diagram: Layout,
    pub placeholder: &'static str,
}

/// Explainer whose control buttons switch between pre-rendered diagrams.
#[derive(Clone, Debug)]
pub struct ViewExplainer<K: NodeKey> {
    pub registry: ContentRegistry<K>,
    pub diagrams: Vec<(K, &'static str)>,
    pub default_view: K,
    pub placeholder: &'static str,
}

impl<K: NodeKey> ViewExplainer<K> {
    /// Diagram description for `view`.
    #[must_use]
    pub fn description(&self, view: K) -> Option<&'static str> {
        self.diagrams.iter().find(|(k, _)| *k == view).map(|(_, d)| *d)
    }
}

/// Every explainer's content, built once at startup.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub evolution: NodeExplainer<EvolutionNode>,
    pub coevolution: ViewExplainer<CycleView>,
}

impl Catalog {
    /// Build all registries and check that every view has a diagram.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if a literal table repeats a key or a view
    /// has no diagram description.
    pub fn build() -> Result<Self, CatalogError> {
        let evolution = NodeExplainer {
            registry: evolution::registry().map_err(|source| CatalogError::Registry {
                explainer: ExplainerKind::Evolution.slug(),
                source,
            })?,
            diagram: evolution::diagram(),
            placeholder: evolution::PLACEHOLDER,
        };

        let coevolution = ViewExplainer {
            registry: coevolution::registry().map_err(|source| CatalogError::Registry {
                explainer: ExplainerKind::Coevolution.slug(),
                source,
            })?,
            diagrams: coevolution::DIAGRAMS.to_vec(),
            default_view: CycleView::DEFAULT,
            placeholder: coevolution::PLACEHOLDER,
        };
        if let Some(view) = CycleView::ALL.iter().find(|v| coevolution.description(**v).is_none()) {
            return Err(CatalogError::MissingDiagram { explainer: ExplainerKind::Coevolution.slug(), view: view.tag() });
        }

        Ok(Self { evolution, coevolution })
    }

    /// Records of one explainer as `(tag, record)`, in declaration order.
    #[must_use]
    pub fn records(&self, kind: ExplainerKind) -> Vec<(&'static str, DisplayRecord)> {
        match kind {
            ExplainerKind::Evolution => tagged(&self.evolution.registry),
            ExplainerKind::Coevolution => tagged(&self.coevolution.registry),
        }
    }

    /// Look up a record by DOM tag. `None` for unknown tags.
    #[must_use]
    pub fn lookup(&self, kind: ExplainerKind, tag: &str) -> Option<DisplayRecord> {
        match kind {
            ExplainerKind::Evolution => self.evolution.registry.lookup_tag(tag).map(|(_, r)| r),
            ExplainerKind::Coevolution => self.coevolution.registry.lookup_tag(tag).map(|(_, r)| r),
        }
    }

    /// Every diagram description, labelled `explainer/view`, for startup checks.
    #[must_use]
    pub fn descriptions(&self) -> Vec<(String, &'static str)> {
        self.coevolution
            .diagrams
            .iter()
            .map(|(view, d)| (format!("{}/{}", ExplainerKind::Coevolution.slug(), view.tag()), *d))
            .collect()
    }
}

fn tagged<K: NodeKey>(registry: &ContentRegistry<K>) -> Vec<(&'static str, DisplayRecord)> {
    registry.iter().map(|(key, record)| (key.tag(), record)).collect()
}
