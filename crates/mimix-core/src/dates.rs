//! Date conversion between wire ISO-8601 and the `dd/mm/yyyy` display form.
//!
//! The backend stores promote dates as ISO-8601 timestamps; users see and
//! type them as `dd/mm/yyyy`. Parsing is strict on the literal form (the
//! calendar must validate, so `31/02/2024` is rejected) with a generic
//! fallback for ISO-shaped input.

use chrono::{DateTime, NaiveDate, Utc};

/// Format a date for display as `dd/mm/yyyy`.
///
/// `None` renders as an empty string, matching an empty edit field.
pub fn format_display(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => String::new(),
    }
}

/// Parse a user-typed date into a UTC timestamp at midnight.
///
/// Tries the literal `dd/mm/yyyy` form first (day/month/year as plain
/// integers, calendar-validated), then falls back to a generic parse of
/// RFC 3339 or `yyyy-mm-dd`. Returns `None` if every attempt fails.
pub fn parse_display(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(date) = parse_literal(input) {
        return Some(date);
    }

    parse_generic(input)
}

/// Outcome of converting a creation-form date field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormDate {
    /// Converted to an ISO timestamp.
    Iso(DateTime<Utc>),
    /// Exactly three slash-separated parts that do not form a valid
    /// calendar date. Blocks submission.
    Invalid,
    /// A free-form value no parse could handle. Submitted unchanged.
    ///
    /// Known footgun inherited from the dashboard: the form silently
    /// passes such values through to the backend instead of rejecting
    /// them. Kept as-is so client and dashboard agree on what a given
    /// form submission means.
    Verbatim(String),
}

/// Convert a non-empty creation-form date field.
///
/// Slash-form input is held to the strict literal parse; anything else
/// gets the generic parse with verbatim pass-through on failure.
pub fn convert_form_date(input: &str) -> FormDate {
    let parts: Vec<&str> = input.split('/').collect();
    if parts.len() == 3 {
        match parse_literal(input) {
            Some(date) => FormDate::Iso(date),
            None => FormDate::Invalid,
        }
    } else {
        match parse_generic(input) {
            Some(date) => FormDate::Iso(date),
            None => FormDate::Verbatim(input.to_string()),
        }
    }
}

/// Strict `dd/mm/yyyy` parse. The calendar must validate.
fn parse_literal(input: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = input.split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    let day: u32 = parts[0].trim().parse().ok()?;
    let month: u32 = parts[1].trim().parse().ok()?;
    let year: i32 = parts[2].trim().parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(midnight_utc(date))
}

/// Generic fallback parse: RFC 3339, then a bare `yyyy-mm-dd`.
fn parse_generic(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .map(midnight_utc)
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_date_as_dd_mm_yyyy() {
        let date = "2024-03-07T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_display(Some(&date)), "07/03/2024");
    }

    #[test]
    fn formats_none_as_empty() {
        assert_eq!(format_display(None), "");
    }

    #[test]
    fn parses_literal_form() {
        let date = parse_display("25/12/2023").unwrap();
        assert_eq!(date.to_rfc3339(), "2023-12-25T00:00:00+00:00");
    }

    #[test]
    fn rejects_invalid_calendar_date() {
        // 31/02 does not exist and must not roll over into March
        assert!(parse_display("31/02/2024").is_none());
    }

    #[test]
    fn rejects_non_numeric_literal() {
        assert!(parse_display("aa/bb/cccc").is_none());
    }

    #[test]
    fn falls_back_to_rfc3339() {
        let date = parse_display("2024-06-01T12:30:00Z").unwrap();
        assert_eq!(date.to_rfc3339(), "2024-06-01T12:30:00+00:00");
    }

    #[test]
    fn falls_back_to_plain_iso_date() {
        let date = parse_display("2024-06-01").unwrap();
        assert_eq!(format_display(Some(&date)), "01/06/2024");
    }

    #[test]
    fn empty_input_is_none() {
        assert!(parse_display("").is_none());
        assert!(parse_display("   ").is_none());
    }

    #[test]
    fn round_trip_preserves_calendar_date() {
        for iso in ["2024-02-29T00:00:00Z", "1999-01-01T00:00:00Z", "2031-12-31T00:00:00Z"] {
            let original = iso.parse::<DateTime<Utc>>().unwrap();
            let display = format_display(Some(&original));
            let reparsed = parse_display(&display).unwrap();
            assert_eq!(reparsed.date_naive(), original.date_naive(), "{}", iso);
        }
    }

    #[test]
    fn form_date_valid_literal() {
        match convert_form_date("01/07/2025") {
            FormDate::Iso(d) => assert_eq!(format_display(Some(&d)), "01/07/2025"),
            other => panic!("expected Iso, got {:?}", other),
        }
    }

    #[test]
    fn form_date_three_parts_invalid_blocks() {
        assert_eq!(convert_form_date("31/02/2024"), FormDate::Invalid);
        assert_eq!(convert_form_date("xx/yy/zzzz"), FormDate::Invalid);
    }

    #[test]
    fn form_date_free_form_passes_through() {
        // The dashboard submits unparseable non-slash dates as-is
        assert_eq!(
            convert_form_date("next tuesday"),
            FormDate::Verbatim("next tuesday".to_string())
        );
    }

    #[test]
    fn form_date_free_form_iso_converts() {
        match convert_form_date("2024-09-15") {
            FormDate::Iso(d) => assert_eq!(format_display(Some(&d)), "15/09/2024"),
            other => panic!("expected Iso, got {:?}", other),
        }
    }
}
