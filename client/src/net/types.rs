//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON bodies so serde round-trips stay
//! lossless. Dates travel as `YYYY-MM-DD` strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Email/password pair submitted for authentication.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

/// A signed-in user as reported by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    pub email: String,
    /// Account role, e.g. `"ADMIN"` or `"USER"`.
    pub role: String,
}

/// Authenticated session returned by a successful login.
///
/// The token is opaque to the client; components only check whether one is
/// present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// One attended concert in the journal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandEvent {
    pub id: String,
    pub band_name: String,
    pub place: String,
    /// Concert date as `YYYY-MM-DD`.
    pub date: String,
    pub rating: i32,
    pub comment: Option<String>,
}
