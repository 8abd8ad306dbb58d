//! Shared client state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is the single source of truth for "who is logged in"; `messages`
//! is the flash-notice list pages write user-visible failures to. Both are
//! plain structs wrapped in `RwSignal` at the app root.

pub mod messages;
pub mod session;
