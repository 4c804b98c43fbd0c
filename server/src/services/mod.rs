//! Domain services used by the HTTP routes and the startup seeder.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on protocol translation and auth plumbing.

pub mod auth;
pub mod band_event;
pub mod password;
pub mod seed;
pub mod session;
