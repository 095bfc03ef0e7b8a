//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presentation state lives here; fetched collection state lives with its
//! fetch logic in `net::hooks`.

pub mod ui;
