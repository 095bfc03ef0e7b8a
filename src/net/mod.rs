//! Networking modules for the friends REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `hooks` folds their results into reactive
//! collection state, and `types` defines the shared wire schema.

pub mod api;
pub mod hooks;
pub mod types;
