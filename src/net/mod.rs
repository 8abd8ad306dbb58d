//! Networking modules for the community-share REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `auth` drives the session lifecycle on top
//! of them, and `types` defines the wire schema shared with the server.

pub mod api;
pub mod auth;
pub mod types;
