use chrono_tz::Tz;

use crate::server::error::{event::EventError, internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses an IANA timezone name such as `Europe/Paris`.
pub fn parse_timezone(name: &str) -> Result<Tz, EventError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| EventError::InvalidTimezone(name.to_string()))
}

/// Resolves a timezone name read back from the database, falling back to UTC.
///
/// Stored names were validated on the way in, so a failure here means the row was
/// written by something else; the value is logged rather than failing the read.
pub fn stored_timezone_or_utc(name: &str) -> Tz {
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::warn!("Unknown stored timezone {:?}, using UTC", name);
            Tz::UTC
        }
    }
}

/// Target of `/api/events/{event_ref}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventRef {
    /// `42`
    Event(i32),
    /// `42:next`
    NextOccurrence(i32),
}

/// Parses the `{id}` or `{id}:next` path segment of the event routes.
///
/// # Returns
/// - `Ok(EventRef)` - Parsed reference
/// - `Err(AppError::NotFound)` - Segment is neither form, so no such resource exists
pub fn parse_event_ref(segment: &str) -> Result<EventRef, AppError> {
    let not_found = || AppError::NotFound(format!("No event matches '{}'", segment));

    match segment.split_once(':') {
        None => segment
            .parse::<i32>()
            .map(EventRef::Event)
            .map_err(|_| not_found()),
        Some((id, "next")) => id
            .parse::<i32>()
            .map(EventRef::NextOccurrence)
            .map_err(|_| not_found()),
        Some(_) => Err(not_found()),
    }
}
