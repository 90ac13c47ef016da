use chrono::{DateTime, NaiveDate, NaiveDateTime};

// ---------------------------------------------------------------------------
// Permissive publish_time parser
// ---------------------------------------------------------------------------

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%Y %b %d",
    "%Y %B %d",
];

/// Year-month layouts; the day defaults to the first of the month.
const MONTH_FORMATS: &[&str] = &["%Y-%m", "%Y/%m", "%Y %b", "%Y %B", "%b %Y", "%B %Y"];

/// Parse free-form date text.
///
/// Returns `None` for anything unrecognised instead of failing, so a bad
/// cell only loses its own date.
pub fn parse_publish_time(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // chrono needs a day to build a date, so append one.
    for fmt in MONTH_FORMATS {
        let padded = format!("{s} 01");
        let padded_fmt = format!("{fmt} %d");
        if let Ok(d) = NaiveDate::parse_from_str(&padded, &padded_fmt) {
            return Some(d);
        }
    }

    // 2019
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        let year: i32 = s.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    None
}
