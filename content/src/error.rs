//! Error types for registry construction and diagram rendering.

/// Error returned by [`crate::ContentRegistry::build`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The same identifier was given two records.
    #[error("duplicate registry key: {0}")]
    DuplicateKey(&'static str),
}

/// Error returned by [`crate::diagram::render`] and [`crate::diagram::parse`].
///
/// Line numbers are 1-based and refer to the raw description text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagramError {
    /// The description declared no nodes.
    #[error("diagram description has no nodes")]
    Empty,
    /// The header named a direction other than `TD`, `TB`, `BT`, `LR` or `RL`.
    #[error("unknown flowchart direction `{0}`")]
    UnknownDirection(String),
    /// A node shape was opened but never closed, e.g. `A[Label`.
    #[error("line {line}: unterminated node shape in `{text}`")]
    UnterminatedShape { line: usize, text: String },
    /// An edge arrow had nothing after it, e.g. `A -->`.
    #[error("line {line}: edge has no target in `{text}`")]
    DanglingEdge { line: usize, text: String },
    /// An edge label was opened with `|` but never closed.
    #[error("line {line}: unterminated edge label in `{text}`")]
    UnterminatedLabel { line: usize, text: String },
    /// Text followed the last node reference that is not a known arrow,
    /// e.g. `A -- text --> B` or `A --> B & C`.
    #[error("line {line}: unexpected `{rest}` in `{text}`")]
    TrailingText { line: usize, text: String, rest: String },
}

/// Error returned by [`crate::Catalog::build`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("{explainer}: {source}")]
    Registry {
        explainer: &'static str,
        #[source]
        source: RegistryError,
    },
    /// A view was listed without a diagram description.
    #[error("{explainer}: view `{view}` has no diagram")]
    MissingDiagram { explainer: &'static str, view: &'static str },
}
