//! HH:MM normalization and interval arithmetic shared by the canonicalizer,
//! the rule engine, and the solver's slicing step.

use crate::error::{DomainError, DomainResult};

/// Fixed slice granularity used by the solver's time model.
pub const SLICE_MINUTES: i32 = 30;

/// Parses a loosely formatted time-of-day string ("9", "9:5", "09.05", "9 05")
/// into minutes-since-midnight, accepting `.` or space as the hour/minute separator.
pub fn to_minutes(raw: &str) -> DomainResult<i32> {
    let trimmed = raw.trim();
    let normalized = trimmed.replace('.', ":").replace(' ', ":");
    let mut parts = normalized.splitn(2, ':');
    let hour_part = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DomainError::ValidationFailure(format!("invalid time: {raw:?}")))?;
    let minute_part = parts.next().unwrap_or("0");

    let hour: i32 = hour_part
        .parse()
        .map_err(|_| DomainError::ValidationFailure(format!("invalid time: {raw:?}")))?;
    let minute: i32 = if minute_part.is_empty() {
        0
    } else {
        minute_part
            .parse()
            .map_err(|_| DomainError::ValidationFailure(format!("invalid time: {raw:?}")))?
    };

    if !(0..=24).contains(&hour) || !(0..60).contains(&minute) {
        return Err(DomainError::ValidationFailure(format!(
            "time out of range: {raw:?}"
        )));
    }
    let total = hour * 60 + minute;
    if total > 1440 {
        return Err(DomainError::ValidationFailure(format!(
            "time out of range: {raw:?}"
        )));
    }
    Ok(total)
}

/// Formats minutes-since-midnight as a zero-padded `"HH:MM"` string.
pub fn minutes_to_hhmm(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Normalizes a loosely formatted time-of-day string into canonical `"HH:MM"`.
pub fn normalize_hhmm(raw: &str) -> DomainResult<String> {
    Ok(minutes_to_hhmm(to_minutes(raw)?))
}

/// An interval `[start, end)` is valid iff `0 <= start < end <= 1440`.
pub fn is_valid_interval(start: i32, end: i32) -> bool {
    (0..=1440).contains(&start) && (0..=1440).contains(&end) && start < end
}

/// Closed-endpoint containment: `slot` contains `shift` iff
/// `slot.start <= shift.start && shift.end <= slot.end`.
pub fn contains(slot_start: i32, slot_end: i32, shift_start: i32, shift_end: i32) -> bool {
    slot_start <= shift_start && shift_end <= slot_end
}

/// Half-open overlap: `a` and `b` overlap iff `!(a.end <= b.start || b.end <= a.start)`.
pub fn overlaps(a_start: i32, a_end: i32, b_start: i32, b_end: i32) -> bool {
    !(a_end <= b_start || b_end <= a_start)
}

/// A single `[start, end)` slice of a shift, in minutes-since-midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub start: i32,
    pub end: i32,
}

impl Slice {
    pub fn duration(&self) -> i32 {
        self.end - self.start
    }
}

/// Splits `[start, end)` into fixed `SLICE_MINUTES` slices; the final slice may be
/// shorter when the interval length is not a multiple of the slice size.
pub fn slice_interval(start: i32, end: i32) -> Vec<Slice> {
    let mut slices = Vec::new();
    let mut t = start;
    while t < end {
        let t2 = (t + SLICE_MINUTES).min(end);
        slices.push(Slice { start: t, end: t2 });
        t = t2;
    }
    slices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_loose_formats() {
        assert_eq!(normalize_hhmm("9").unwrap(), "09:00");
        assert_eq!(normalize_hhmm("9:5").unwrap(), "09:05");
        assert_eq!(normalize_hhmm("09.05").unwrap(), "09:05");
        assert_eq!(normalize_hhmm("9 05").unwrap(), "09:05");
        assert_eq!(normalize_hhmm("24:00").unwrap(), "24:00");
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(normalize_hhmm("25:00").is_err());
        assert!(normalize_hhmm("12:60").is_err());
    }

    #[test]
    fn validity_matches_spec() {
        assert!(is_valid_interval(0, 1440));
        assert!(!is_valid_interval(600, 600));
        assert!(!is_valid_interval(600, 500));
        assert!(!is_valid_interval(-1, 100));
    }

    #[test]
    fn contains_is_closed() {
        assert!(contains(480, 720, 480, 720));
        assert!(contains(480, 720, 500, 700));
        assert!(!contains(480, 700, 480, 720));
    }

    #[test]
    fn overlap_is_half_open() {
        assert!(!overlaps(480, 600, 600, 720));
        assert!(overlaps(480, 610, 600, 720));
    }

    #[test]
    fn slices_cover_exactly_with_short_tail() {
        let slices = slice_interval(480, 541);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0], Slice { start: 480, end: 510 });
        assert_eq!(slices[1], Slice { start: 510, end: 540 });
        assert_eq!(slices[2], Slice { start: 540, end: 541 });
    }
}
