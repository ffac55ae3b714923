use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Wall-clock layout used for every timestamp the service renders.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimezoneError {
    #[error("unknown IANA timezone '{0}'")]
    InvalidTimezone(String),
}

/// Resolve an IANA timezone name. `None` means UTC.
///
/// Lookup is case-sensitive and never panics; empty or malformed names are
/// simply not found.
pub fn resolve(name: Option<&str>) -> Result<Tz, TimezoneError> {
    match name {
        None => Ok(Tz::UTC),
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_| TimezoneError::InvalidTimezone(name.to_string())),
    }
}

/// Render `instant` as local wall-clock time in `tz`, including the zone
/// abbreviation (e.g. `2024-01-15 09:00:00 EST`).
pub fn format_instant(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format(DISPLAY_FORMAT).to_string()
}
