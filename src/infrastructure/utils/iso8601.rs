use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Returns true when `value` is an ISO 8601 date or date-time.
///
/// Accepts a bare date in extended (`2025-09-01`) or basic (`20250901`) form,
/// a date-time with `T` or space as separator down to hour precision, and an
/// optional `Z`, `±HH:MM` or `±HHMM` offset. Surrounding whitespace is
/// rejected: the stored string is compared byte-wise later on.
pub fn is_iso8601(value: &str) -> bool {
    if value.is_empty() || value.trim() != value {
        return false;
    }

    if DateTime::parse_from_rfc3339(value).is_ok() {
        return true;
    }

    let (body, offset) = match value.strip_suffix('Z').or_else(|| value.strip_suffix('z')) {
        Some(rest) => (rest, "+00:00"),
        None => split_offset(value),
    };
    let body = with_minutes(body);
    let with_offset = format!("{body}{offset}");

    (!offset.is_empty()
        && OFFSET_FORMATS
            .iter()
            .any(|fmt| DateTime::parse_from_str(&with_offset, fmt).is_ok()))
        || (offset.is_empty()
            && NAIVE_FORMATS
                .iter()
                .any(|fmt| NaiveDateTime::parse_from_str(&body, fmt).is_ok()))
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || is_basic_date(value)
}

/// Splits a trailing `±HH:MM` / `±HHMM` offset off a date-time.
fn split_offset(value: &str) -> (&str, &str) {
    let Some(time_start) = value.find(['T', ' ']) else {
        return (value, "");
    };
    match value[time_start..].rfind(['+', '-']) {
        Some(sign) => value.split_at(time_start + sign),
        None => (value, ""),
    }
}

/// `2025-09-01T08` is hour precision; pad it so the minute formats apply.
fn with_minutes(body: &str) -> String {
    match body.find(['T', ' ']) {
        Some(sep) if body.len() - sep == 3 => format!("{body}:00"),
        _ => body.to_string(),
    }
}

fn is_basic_date(value: &str) -> bool {
    value.len() == 8
        && value.bytes().all(|b| b.is_ascii_digit())
        && NaiveDate::parse_from_str(
            &format!("{}-{}-{}", &value[..4], &value[4..6], &value[6..]),
            "%Y-%m-%d",
        )
        .is_ok()
}

/// Current UTC time as a lexicographically sortable ISO 8601 string,
/// e.g. `2025-03-01T08:30:00.000000Z`.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
