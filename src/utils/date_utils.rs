use chrono::{DateTime, NaiveDate, NaiveDateTime};

// Tried in order once the compact numeric form has been ruled out
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Best-effort parse of a tournament date.
///
/// Numeric input is read as `YYYYMMDD` (the archive's native encoding, sometimes
/// carried as an integral float such as `20000117.0`). Numeric input that is not a
/// valid `YYYYMMDD` date yields `None` without trying anything else. Any other text
/// goes through a short list of ISO-like formats. Never fails: unparseable input
/// is simply an unknown date.
pub fn parse_tourney_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(compact) = compact_digits(raw) {
        return date_from_compact(compact);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|timestamp| timestamp.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        })
}

/// Reads a `YYYYMMDD` integer such as `20000117`.
pub fn date_from_compact(compact: i64) -> Option<NaiveDate> {
    if compact <= 0 {
        return None;
    }

    let year = compact / 10_000;
    let month = (compact / 100) % 100;
    let day = compact % 100;

    if !(1000..=9999).contains(&year) {
        return None;
    }

    NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
}

/// Reads a `YYYYMMDD` value that arrived as a float.
pub fn date_from_compact_float(compact: f64) -> Option<NaiveDate> {
    if !compact.is_finite() || compact.fract() != 0.0 {
        return None;
    }

    date_from_compact(compact as i64)
}

/// Returns the integer value of `raw` when it is purely numeric
/// (optionally with an all-zero fractional part).
fn compact_digits(raw: &str) -> Option<i64> {
    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (raw, None)
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if let Some(fraction) = fraction {
        if !fraction.bytes().all(|b| b == b'0') {
            return None;
        }
    }

    // A digit string too long for i64 is numeric but never a valid date
    Some(whole.parse::<i64>().unwrap_or(-1))
}
