//! Concert CSV import.
//!
//! Input columns are `Band`, `Wo` (place) and `Wann` (date as `DD.MM.YYYY` or
//! `MM.YYYY`). Rows with an empty field are skipped; every imported concert
//! gets the top rating.

use std::io;

use serde::Deserialize;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

pub const IMPORT_RATING: i32 = 5;

const INPUT_DATE: &[BorrowedFormatItem<'static>] = format_description!("[day padding:none].[month padding:none].[year]");
const OUTPUT_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Cities that stand for the festival held there.
const PLACE_ALIASES: &[(&str, &str)] = &[
    ("Nürnberg", "Rock im Park"),
    ("Neuhausen ob Eck", "Southside Festival"),
    ("Karlsruhe", "Das Fest"),
    ("Straubenhardt", "Happiness Festival"),
];

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("csv read failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: invalid date {value:?}")]
    InvalidDate { line: u64, value: String },
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Band", default)]
    band: Option<String>,
    #[serde(rename = "Wo", default)]
    place: Option<String>,
    #[serde(rename = "Wann", default)]
    date: Option<String>,
}

/// One concert ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    pub band_name: String,
    pub place: String,
    pub date: Date,
}

impl ImportRow {
    #[must_use]
    pub fn iso_date(&self) -> String {
        self.date.format(OUTPUT_DATE).unwrap_or_default()
    }

    /// Body for `POST /api/events`.
    #[must_use]
    pub fn to_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "band_name": self.band_name,
            "place": self.place,
            "date": self.iso_date(),
            "rating": IMPORT_RATING,
        })
    }
}

#[must_use]
pub fn clean_band_name(raw: &str) -> String {
    raw.trim().trim_matches(['(', ')']).trim().to_owned()
}

#[must_use]
pub fn map_place(place: &str) -> &str {
    PLACE_ALIASES
        .iter()
        .find(|(city, _)| *city == place)
        .map_or(place, |(_, festival)| *festival)
}

/// Parse `DD.MM.YYYY`, treating `MM.YYYY` as the first of that month.
#[must_use]
pub fn parse_import_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    let expanded = if raw.split('.').count() == 2 { format!("01.{raw}") } else { raw.to_owned() };
    Date::parse(&expanded, INPUT_DATE).ok()
}

fn clean_row(record: CsvRecord, line: u64) -> Result<Option<ImportRow>, ImportError> {
    let band_name = clean_band_name(record.band.as_deref().unwrap_or_default());
    let place = map_place(record.place.as_deref().unwrap_or_default().trim()).to_owned();
    let date = record.date.as_deref().unwrap_or_default().trim().to_owned();

    if band_name.is_empty() || place.is_empty() || date.is_empty() {
        return Ok(None);
    }

    let date = parse_import_date(&date).ok_or(ImportError::InvalidDate { line, value: date })?;
    Ok(Some(ImportRow { band_name, place, date }))
}

/// Read every importable row from CSV text with a header line.
///
/// # Errors
///
/// Returns an error on malformed CSV or a date that cannot be parsed.
pub fn read_rows<R: io::Read>(input: R) -> Result<Vec<ImportRow>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(input);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    let mut skipped = 0_usize;
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let parsed: CsvRecord = record.deserialize(Some(&headers))?;
        match clean_row(parsed, line)? {
            Some(row) => rows.push(row),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, "rows with empty fields skipped");
    }
    Ok(rows)
}

/// Quote a SQL string literal.
#[must_use]
pub fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Stored account emails are trimmed and lowercased.
#[must_use]
pub fn normalize_owner_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// `INSERT` for one row, owned by the user with `owner_email`.
#[must_use]
pub fn insert_statement(row: &ImportRow, owner_email: &str) -> String {
    format!(
        "INSERT INTO band_events (band_name, place, date, app_user_id, rating) VALUES ({}, {}, {}, (SELECT id FROM app_users WHERE email = {}), {IMPORT_RATING});",
        sql_literal(&row.band_name),
        sql_literal(&row.place),
        sql_literal(&row.iso_date()),
        sql_literal(&normalize_owner_email(owner_email)),
    )
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;
