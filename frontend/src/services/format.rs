//! Display formatting for raw stored bill fields.
//!
//! Both functions are total: anything they do not recognize is returned
//! unchanged, so a malformed date or an unknown status code still renders
//! instead of being dropped.

use chrono::{Datelike, NaiveDate};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Short French display form of a stored `YYYY-MM-DD` date,
/// e.g. `2004-04-04` → `4 Avr. 04`.
///
/// Input that does not parse as a calendar date comes back unchanged.
pub fn format_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => format!(
            "{} {}. {:02}",
            date.day(),
            MONTH_ABBREVIATIONS[date.month0() as usize],
            date.year() % 100
        ),
        Err(_) => raw.to_string(),
    }
}

/// Display label for a raw status code.
///
/// The three known codes map to their labels; every other value, the empty
/// string included, maps to itself.
pub fn format_status(code: &str) -> String {
    match code {
        shared::STATUS_PENDING => "En attente".to_string(),
        shared::STATUS_ACCEPTED => "Accepté".to_string(),
        shared::STATUS_REFUSED => "Refused".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_statuses() {
        assert_eq!(format_status("pending"), "En attente");
        assert_eq!(format_status("accepted"), "Accepté");
        assert_eq!(format_status("refused"), "Refused");
    }

    #[test]
    fn unknown_status_codes_pass_through() {
        assert_eq!(format_status("archived"), "archived");
        assert_eq!(format_status(""), "");
    }

    #[test]
    fn formats_stored_dates_for_display() {
        assert_eq!(format_date("2004-04-04"), "4 Avr. 04");
        assert_eq!(format_date("2001-01-01"), "1 Jan. 01");
        assert_eq!(format_date("2003-03-03"), "3 Mar. 03");
        assert_eq!(format_date("2025-12-31"), "31 Déc. 25");
    }

    #[test]
    fn malformed_dates_pass_through() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_date(""), "");
        // Well-shaped but not a calendar date.
        assert_eq!(format_date("2004-13-01"), "2004-13-01");
        assert_eq!(format_date("2004-02-30"), "2004-02-30");
    }

    #[test]
    fn formatting_an_already_formatted_date_is_identity() {
        assert_eq!(format_date("4 Avr. 04"), "4 Avr. 04");
    }
}
