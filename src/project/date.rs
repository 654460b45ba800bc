use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

// Postgres renders timestamptz as "2024-01-05 10:00:00+00"
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// Parse an ISO-ish date string. Blank or unparseable input yields `None`.
pub fn parse_date(value: Option<&str>) -> Option<DateTime<Utc>> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Locale-style short date (`1/5/2024`), or `None` when unparseable
pub fn format_date(value: Option<&str>) -> Option<String> {
    parse_date(value).map(|dt| dt.format("%-m/%-d/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_plain_dates_and_timestamps() {
        let d = parse_date(Some("2024-01-05")).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 1, 5));

        assert!(parse_date(Some("2024-03-01T12:30:00Z")).is_some());
        assert!(parse_date(Some("2024-03-01 12:30:00.123")).is_some());
        assert!(parse_date(Some("2024-03-01 12:30:00+00")).is_some());
    }

    #[test]
    fn blank_and_garbage_are_missing() {
        assert_eq!(parse_date(None), None);
        assert_eq!(parse_date(Some("")), None);
        assert_eq!(parse_date(Some("soon")), None);
        assert_eq!(parse_date(Some("2024-13-40")), None);
    }

    #[test]
    fn formats_short_date() {
        assert_eq!(format_date(Some("2024-01-05")).as_deref(), Some("1/5/2024"));
        assert_eq!(format_date(Some("n/a")), None);
    }
}
