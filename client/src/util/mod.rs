//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure projections of panel state and diagram geometry live here so the
//! components stay thin and the logic is testable without a browser.

pub mod panel_view;
pub mod svg;
