//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing concerns from page logic to improve reuse
//! and testability.

pub mod auth;
