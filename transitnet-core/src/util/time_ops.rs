use crate::model::NetworkError;

pub const SECOND: i64 = 1;
pub const MINUTE: i64 = 60 * SECOND;
pub const HOUR: i64 = 60 * MINUTE;

/// parses an `HH:MM:SS` clock time into seconds since the start of the
/// service day. hours may exceed 23 for trips crossing midnight; values are
/// summed without wraparound, so `25:10:00` is 90600 seconds.
pub fn parse_clock_time(value: &str) -> Result<i64, NetworkError> {
    let invalid = || NetworkError::InvalidClockTime(value.to_string());
    let mut fields = value.splitn(3, ':');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(h), Some(m), Some(s)) => {
            let hours: i64 = h.parse().map_err(|_| invalid())?;
            let minutes: i64 = m.parse().map_err(|_| invalid())?;
            let seconds: i64 = s.parse().map_err(|_| invalid())?;
            if hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
                return Err(invalid());
            }
            Ok(hours * HOUR + minutes * MINUTE + seconds * SECOND)
        }
        _ => Err(invalid()),
    }
}
