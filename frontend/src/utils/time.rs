use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today_in(time_zone: Tz) -> NaiveDate {
    Utc::now().with_timezone(&time_zone).date_naive()
}

/// `Jan 2, 2025`
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_input_date(date: NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

/// Blank input means "not set"; anything else must be a `YYYY-MM-DD` date.
pub fn parse_date_input(value: &str, error_message: &str) -> Result<Option<NaiveDate>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT)
        .map(Some)
        .map_err(|_| error_message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format_matches_short_us_style() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(format_display_date(date), "Jan 2, 2025");
        assert_eq!(format_input_date(date), "2025-01-02");
    }

    #[test]
    fn parse_date_input_accepts_blank_and_rejects_garbage() {
        assert_eq!(parse_date_input("  ", "bad"), Ok(None));
        assert_eq!(
            parse_date_input("2025-02-28", "bad"),
            Ok(NaiveDate::from_ymd_opt(2025, 2, 28))
        );
        assert_eq!(parse_date_input("28/02/2025", "bad"), Err("bad".to_string()));
    }

    #[test]
    fn today_is_computed_in_requested_zone() {
        let utc = today_in(Tz::UTC);
        let ahead = today_in(Tz::Pacific__Kiritimati);
        assert!(ahead >= utc);
    }
}
