//! Concert journal entries.
//!
//! Dates cross the wire and the database boundary as `YYYY-MM-DD` strings and
//! are parsed with `time` during validation, so only well-formed calendar
//! dates reach `band_events`.

use sqlx::{PgPool, Row};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use uuid::Uuid;

pub const MAX_RATING: i32 = 5;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EventError {
    #[error("band name must not be empty")]
    EmptyBandName,
    #[error("place must not be empty")]
    EmptyPlace,
    #[error("date must be YYYY-MM-DD: {0:?}")]
    InvalidDate(String),
    #[error("rating must be between 0 and {MAX_RATING}: {0}")]
    RatingOutOfRange(i32),
}

/// Event as returned to clients.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BandEventRow {
    pub id: Uuid,
    pub band_name: String,
    pub place: String,
    pub date: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Unvalidated create payload.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NewBandEvent {
    pub band_name: String,
    pub place: String,
    pub date: String,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Create payload after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBandEvent {
    pub band_name: String,
    pub place: String,
    pub date: Date,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `InvalidDate` when the text is not a real calendar date.
pub fn parse_date(raw: &str) -> Result<Date, EventError> {
    let trimmed = raw.trim();
    Date::parse(trimmed, DATE_FORMAT).map_err(|_| EventError::InvalidDate(trimmed.to_owned()))
}

#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_default()
}

impl NewBandEvent {
    /// Trim and check every field.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(self) -> Result<ValidBandEvent, EventError> {
        let band_name = self.band_name.trim().to_owned();
        if band_name.is_empty() {
            return Err(EventError::EmptyBandName);
        }
        let place = self.place.trim().to_owned();
        if place.is_empty() {
            return Err(EventError::EmptyPlace);
        }
        let date = parse_date(&self.date)?;
        if !(0..=MAX_RATING).contains(&self.rating) {
            return Err(EventError::RatingOutOfRange(self.rating));
        }
        let comment = self
            .comment
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty());
        Ok(ValidBandEvent { band_name, place, date, rating: self.rating, comment })
    }
}

const SELECT_COLUMNS: &str = r#"id, band_name, place,
    to_char(date, 'YYYY-MM-DD') AS date,
    rating, comment,
    to_char(creation_date AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at,
    to_char(modification_date AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS updated_at"#;

fn row_to_event(row: &sqlx::postgres::PgRow) -> BandEventRow {
    BandEventRow {
        id: row.get("id"),
        band_name: row.get("band_name"),
        place: row.get("place"),
        date: row.get("date"),
        rating: row.get("rating"),
        comment: row.get("comment"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// List a user's events, newest concert first.
pub async fn list_events(pool: &PgPool, user_id: Uuid) -> Result<Vec<BandEventRow>, sqlx::Error> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} FROM band_events WHERE app_user_id = $1 ORDER BY date DESC, creation_date DESC"
    );
    let rows = sqlx::query(&sql).bind(user_id).fetch_all(pool).await?;
    Ok(rows.iter().map(row_to_event).collect())
}

/// Insert a validated event for a user.
pub async fn create_event(pool: &PgPool, user_id: Uuid, event: &ValidBandEvent) -> Result<BandEventRow, sqlx::Error> {
    let sql = format!(
        "INSERT INTO band_events (app_user_id, band_name, place, date, rating, comment)
         VALUES ($1, $2, $3, $4::date, $5, $6)
         RETURNING {SELECT_COLUMNS}"
    );
    let row = sqlx::query(&sql)
        .bind(user_id)
        .bind(&event.band_name)
        .bind(&event.place)
        .bind(format_date(event.date))
        .bind(event.rating)
        .bind(&event.comment)
        .fetch_one(pool)
        .await?;
    Ok(row_to_event(&row))
}

/// Count a user's events.
pub async fn count_events(pool: &PgPool, user_id: Uuid) -> Result<usize, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS n FROM band_events WHERE app_user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    let n: i64 = row.get("n");
    Ok(usize::try_from(n).unwrap_or(0))
}

#[cfg(test)]
#[path = "band_event_test.rs"]
mod tests;
