use time::macros::date;

use super::*;

fn row(band: &str, place: &str, date: Date) -> ImportRow {
    ImportRow { band_name: band.to_owned(), place: place.to_owned(), date }
}

// =============================================================================
// field cleanup
// =============================================================================

#[test]
fn clean_band_name_strips_parentheses_and_spaces() {
    assert_eq!(clean_band_name("(Muse)"), "Muse");
    assert_eq!(clean_band_name("  ((Die Ärzte)) "), "Die Ärzte");
    assert_eq!(clean_band_name("Guns N' Roses"), "Guns N' Roses");
    assert_eq!(clean_band_name("()"), "");
}

#[test]
fn map_place_replaces_festival_towns() {
    assert_eq!(map_place("Nürnberg"), "Rock im Park");
    assert_eq!(map_place("Neuhausen ob Eck"), "Southside Festival");
    assert_eq!(map_place("Karlsruhe"), "Das Fest");
    assert_eq!(map_place("Straubenhardt"), "Happiness Festival");
    assert_eq!(map_place("Berlin"), "Berlin");
}

#[test]
fn parse_import_date_full_and_month_only() {
    assert_eq!(parse_import_date("02.06.2023"), Some(date!(2023 - 06 - 02)));
    assert_eq!(parse_import_date("2.6.2023"), Some(date!(2023 - 06 - 02)));
    assert_eq!(parse_import_date("07.2019"), Some(date!(2019 - 07 - 01)));
}

#[test]
fn parse_import_date_rejects_garbage() {
    assert_eq!(parse_import_date("2023-06-02"), None);
    assert_eq!(parse_import_date("31.02.2023"), None);
    assert_eq!(parse_import_date("summer"), None);
}

// =============================================================================
// read_rows
// =============================================================================

#[test]
fn read_rows_cleans_and_maps() {
    let csv = "Band,Wo,Wann\n(Muse),Nürnberg,02.06.2023\nSeeed, Berlin ,08.2021\n";
    let rows = read_rows(csv.as_bytes()).unwrap();
    assert_eq!(
        rows,
        vec![
            row("Muse", "Rock im Park", date!(2023 - 06 - 02)),
            row("Seeed", "Berlin", date!(2021 - 08 - 01)),
        ]
    );
}

#[test]
fn read_rows_skips_rows_with_empty_fields() {
    let csv = "Band,Wo,Wann\nMuse,,02.06.2023\n,Berlin,02.06.2023\nMuse,Berlin,\nMuse,Berlin\nBeatsteaks,Berlin,01.01.2020\n";
    let rows = read_rows(csv.as_bytes()).unwrap();
    assert_eq!(rows, vec![row("Beatsteaks", "Berlin", date!(2020 - 01 - 01))]);
}

#[test]
fn read_rows_ignores_column_order_and_extra_columns() {
    let csv = "Wann,Notes,Band,Wo\n21.07.2023,great,Muse,Karlsruhe\n";
    let rows = read_rows(csv.as_bytes()).unwrap();
    assert_eq!(rows, vec![row("Muse", "Das Fest", date!(2023 - 07 - 21))]);
}

#[test]
fn read_rows_reports_bad_date_with_line() {
    let csv = "Band,Wo,Wann\nMuse,Berlin,02.06.2023\nSeeed,Berlin,someday\n";
    let err = read_rows(csv.as_bytes()).unwrap_err();
    match err {
        ImportError::InvalidDate { line, value } => {
            assert_eq!(line, 3);
            assert_eq!(value, "someday");
        }
        ImportError::Csv(e) => panic!("unexpected csv error: {e}"),
    }
}

// =============================================================================
// output
// =============================================================================

#[test]
fn sql_literal_escapes_single_quotes() {
    assert_eq!(sql_literal("Guns N' Roses"), "'Guns N'' Roses'");
}

#[test]
fn insert_statement_resolves_owner_by_email() {
    let sql = insert_statement(&row("Muse", "Das Fest", date!(2023 - 07 - 21)), "admin@example.com");
    assert_eq!(
        sql,
        "INSERT INTO band_events (band_name, place, date, app_user_id, rating) VALUES ('Muse', 'Das Fest', '2023-07-21', (SELECT id FROM app_users WHERE email = 'admin@example.com'), 5);"
    );
}

#[test]
fn insert_statement_normalizes_owner_email() {
    let sql = insert_statement(&row("Muse", "Das Fest", date!(2023 - 07 - 21)), "  Admin@Example.COM ");
    assert!(sql.contains("WHERE email = 'admin@example.com'"));
}

#[test]
fn payload_matches_event_api() {
    let payload = row("Muse", "Das Fest", date!(2023 - 07 - 21)).to_payload();
    assert_eq!(
        payload,
        serde_json::json!({ "band_name": "Muse", "place": "Das Fest", "date": "2023-07-21", "rating": 5 })
    );
}
