//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookie storage,
//! panic reporting) from page and component logic to improve reuse and
//! testability.

pub mod cookies;
pub mod error_report;
