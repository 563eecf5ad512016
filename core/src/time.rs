use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Rendered in place of an absent point in time.
pub const NO_DATA: &str = "Sin datos";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

const YEAR_FIRST_DATE_TIME: &[&str] = &["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];
const DAY_FIRST_DATE_TIME: &[&str] = &["%d/%m/%Y %H:%M"];

const FALLBACK_DATE_TIME: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];
const FALLBACK_DATE: &[&str] = &["%Y/%m/%d", "%d-%m-%Y", "%d.%m.%Y"];

/// Parses a due date typed at a prompt.
///
/// Tried in order:
/// 1. `YYYY-MM-DD` with optional ` HH:mm` (or `THH:mm`)
/// 2. `DD/MM/YYYY` with optional ` HH:mm`
/// 3. a best-effort pass over a few other common shapes (RFC 3339, RFC 2822, slashed ISO)
///
/// Wall-clock values are read in the local timezone and midnight is used when no
/// time is given. Empty input and anything unparseable yield `None`.
pub fn parse_date_time(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    parse_with(input, YEAR_FIRST_DATE_TIME, &["%Y-%m-%d"])
        .or_else(|| parse_with(input, DAY_FIRST_DATE_TIME, &["%d/%m/%Y"]))
        .or_else(|| parse_fallback(input))
}

/// Renders as `YYYY-MM-DD HH:mm` in local time, or [`NO_DATA`] when absent.
pub fn format_date_time<'a>(value: impl Into<Option<&'a DateTime<Utc>>>) -> String {
    match value.into() {
        Some(dt) => dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string(),
        None => NO_DATA.to_string(),
    }
}

fn parse_with(
    input: &str,
    date_time_formats: &[&str],
    date_formats: &[&str],
) -> Option<DateTime<Utc>> {
    date_time_formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            date_formats
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .and_then(from_local)
}

fn parse_fallback(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_with(input, FALLBACK_DATE_TIME, FALLBACK_DATE)
}

// Nonexistent local times (DST gaps) have no instant and are rejected.
fn from_local(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use rstest::rstest;

    fn local(dt: DateTime<Utc>) -> DateTime<Local> {
        dt.with_timezone(&Local)
    }

    #[test]
    fn test_year_first_and_day_first_agree() {
        let iso = parse_date_time("2025-12-01 18:00").unwrap();
        let dmy = parse_date_time("01/12/2025 18:00").unwrap();
        assert_eq!(iso, dmy);
        assert_eq!(format_date_time(&iso), "2025-12-01 18:00");
    }

    #[test]
    fn test_date_only_defaults_to_midnight() {
        let dt = local(parse_date_time("2025-03-07").unwrap());
        assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 3, 7));
        assert_eq!((dt.hour(), dt.minute()), (0, 0));

        let dt = local(parse_date_time("07/03/2025").unwrap());
        assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 3, 7));
        assert_eq!((dt.hour(), dt.minute()), (0, 0));
    }

    #[test]
    fn test_t_separator_is_accepted() {
        assert_eq!(
            parse_date_time("2025-12-01T18:00"),
            parse_date_time("2025-12-01 18:00")
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(
            format_date_time(parse_date_time("  2024-02-29 09:05 ").as_ref()),
            "2024-02-29 09:05"
        );
    }

    #[test]
    fn test_fallback_rfc3339() {
        let dt = parse_date_time("2025-12-01T18:00:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2025, 12, 1, 18, 0, 0).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("mañana")]
    #[case("2025-13-01")]
    #[case("31/02/2025")]
    #[case("2025-12-01 25:00")]
    #[case("01/12/2025 18:60")]
    fn test_invalid_input_is_absent(#[case] input: &str) {
        assert_eq!(parse_date_time(input), None);
    }

    #[test]
    fn test_format_absent_is_placeholder() {
        assert_eq!(format_date_time(None::<&DateTime<Utc>>), NO_DATA);
    }

    #[test]
    fn test_format_pads_fields() {
        let dt = parse_date_time("2025-01-02 03:04").unwrap();
        assert_eq!(format_date_time(&dt), "2025-01-02 03:04");
    }
}
