//! Static content model for the architecture explainer pages.
//!
//! This crate owns the data the page binds to: typed node identifiers, the
//! immutable registry of title/body records, the explainer catalog, and the
//! flowchart description language used for pre-rendered view diagrams. It
//! has no UI dependencies so both the SSR host and the WASM client share it.

pub mod catalog;
pub mod diagram;
pub mod error;
pub mod key;
pub mod record;
pub mod registry;

pub use catalog::{Catalog, CycleView, EvolutionNode, ExplainerKind};
pub use error::{CatalogError, DiagramError, RegistryError};
pub use key::NodeKey;
pub use record::DisplayRecord;
pub use registry::ContentRegistry;
