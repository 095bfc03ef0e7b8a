//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `button`, `input`, and `list_row` are the shared design-system
//! primitives; `friend_item` and `request_item` specialize `list_row` for
//! the two friends-domain row shapes. Components render and report
//! commands; pages own state and side effects.

pub mod button;
pub mod friend_item;
pub mod input;
pub mod list_row;
pub mod request_item;
