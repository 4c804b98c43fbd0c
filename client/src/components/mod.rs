//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render journal content for pages; they read no shared state.

pub mod event_card;
