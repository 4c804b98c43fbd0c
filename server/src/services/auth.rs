//! Email and password login.
//!
//! DESIGN
//! ======
//! Lookup, verification and session issue are split so the decision step
//! (`check_credentials`) stays pure and testable without a database. Unknown
//! users and wrong passwords both surface as `InvalidCredentials`.

use std::sync::LazyLock;

use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::password::{self, PasswordError};
use super::session::{self, SessionUser};

pub const ROLE_ADMIN: &str = "ADMIN";

/// Hash checked when the email is unknown so both failure paths run Argon2.
static ABSENT_USER_HASH: LazyLock<Option<String>> = LazyLock::new(|| password::hash_password("absent-user").ok());

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Hash(#[from] PasswordError),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Stored user row including the password hash.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub password_hash: String,
}

impl From<UserRecord> for SessionUser {
    fn from(record: UserRecord) -> Self {
        Self { id: record.id, email: record.email, role: record.role }
    }
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

/// Decide a login attempt against an optional stored user.
///
/// # Errors
///
/// Returns `InvalidCredentials` when the user is absent or the password does
/// not match. An absent user still pays for one Argon2 verification.
pub fn check_credentials(record: Option<UserRecord>, password: &str) -> Result<SessionUser, AuthError> {
    match record {
        Some(record) if password::verify_password(password, &record.password_hash) => Ok(record.into()),
        Some(_) => Err(AuthError::InvalidCredentials),
        None => {
            if let Some(hash) = ABSENT_USER_HASH.as_deref() {
                let _ = password::verify_password(password, hash);
            }
            Err(AuthError::InvalidCredentials)
        }
    }
}

/// Look up a user by normalized email.
pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>, sqlx::Error> {
    let row = sqlx::query("SELECT id, email, role, password_hash FROM app_users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| UserRecord {
        id: r.get("id"),
        email: r.get("email"),
        role: r.get("role"),
        password_hash: r.get("password_hash"),
    }))
}

/// Insert a user with an already hashed password. Returns the new id.
pub async fn create_user(pool: &PgPool, email: &str, password_hash: &str, role: &str) -> Result<Uuid, sqlx::Error> {
    let row = sqlx::query("INSERT INTO app_users (email, password_hash, role) VALUES ($1, $2, $3) RETURNING id")
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .fetch_one(pool)
        .await?;
    Ok(row.get("id"))
}

/// Verify credentials and open a session.
///
/// # Errors
///
/// Returns `InvalidEmail` for a malformed address, `InvalidCredentials` for
/// an unknown user or wrong password, and `Db` when persistence fails.
pub async fn login(
    pool: &PgPool,
    email: &str,
    password: &str,
    ttl_days: i32,
) -> Result<(SessionUser, String), AuthError> {
    let email = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
    let record = find_user_by_email(pool, &email).await?;
    let user = check_credentials(record, password)?;
    let token = session::create_session(pool, user.id, ttl_days).await?;
    tracing::info!(user_id = %user.id, "login succeeded");
    Ok((user, token))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
