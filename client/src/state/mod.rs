//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the session shared through context; `sign_in` is owned by
//! the sign-in page alone.

pub mod auth;
pub mod sign_in;
