//! Assembly of the `start`/`stop` timestamps.
//!
//! The form keeps the year apart from the "MM/DD" date fields, so a
//! timestamp is glued together from three pieces. Nothing is validated here;
//! the service rejects timestamps it cannot parse with an ERROR status.

/// Build `YYYY-MM-DDTHH:MM:00` from a year, a "MM/DD" date field and an
/// "HH:MM" time field. Seconds are always zeroed.
pub fn assemble_timestamp(year: &str, date_field: &str, time_field: &str) -> String {
    let date = date_field.trim().replace('/', "-");
    let mut parts = time_field.trim().split(':');
    let hour = parts.next().unwrap_or_default();
    let minute = parts.next().unwrap_or("00");
    format!("{}-{}T{}:{}:00", year.trim(), date, hour, minute)
}
