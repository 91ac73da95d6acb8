//! Title/body pair shown in the info panel.

use serde::Serialize;

/// Immutable prose shown when a node or view is activated.
///
/// Records come from literal tables and live for the whole process, so the
/// fields borrow `'static` text and the type is `Copy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub title: &'static str,
    pub body: &'static str,
}

impl DisplayRecord {
    #[must_use]
    pub const fn new(title: &'static str, body: &'static str) -> Self {
        Self { title, body }
    }
}
