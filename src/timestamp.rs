//! Generation timestamp for the "File Information" section.

use chrono::{DateTime, Local};

/// Layout of the rendered timestamp.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reproducible-builds override: seconds since the Unix epoch.
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

/// The timestamp for this run: `SOURCE_DATE_EPOCH` (UTC) when set to a valid
/// integer, otherwise the current local time.
pub fn now() -> String {
    if let Some(pinned) = std::env::var(SOURCE_DATE_EPOCH).ok().as_deref().and_then(from_epoch) {
        return pinned;
    }
    return Local::now().format(FORMAT).to_string();
}

/// Format an epoch-seconds string, or `None` if it isn't a valid instant.
fn from_epoch(raw: &str) -> Option<String> {
    let seconds: i64 = raw.trim().parse().ok()?;
    let instant = DateTime::from_timestamp(seconds, 0)?;
    return Some(instant.format(FORMAT).to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_formatted_in_utc() {
        assert_eq!(from_epoch("0").as_deref(), Some("1970-01-01 00:00:00"));
        assert_eq!(from_epoch(" 1700000000 ").as_deref(), Some("2023-11-14 22:13:20"));
    }

    #[test]
    fn invalid_epoch_is_ignored() {
        assert_eq!(from_epoch("yesterday"), None);
        assert_eq!(from_epoch(""), None);
    }

    #[test]
    fn current_time_has_expected_shape() {
        let stamp = Local::now().format(FORMAT).to_string();
        assert_eq!(stamp.len(), "YYYY-MM-DD HH:MM:SS".len());
    }
}
