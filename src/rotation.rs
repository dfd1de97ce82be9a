//! Maps a calendar date onto the menu rotation.
//!
//! The menu repeats every four weeks. The cycle is anchored to a fixed
//! date; the week containing the anchor is the first week of the rotation.
//! Nothing in here reads the clock, callers pass the date in.

use crate::types::{DayKey, MenuSelection, WeekKey};
use time::macros::date;
use time::{Date, OffsetDateTime, UtcOffset};

/// Monday 6 January 2025, the first day of week one.
pub const DEFAULT_ANCHOR: Date = date!(2025 - 01 - 06);

pub const DAYS_PER_WEEK: i64 = 7;
pub const WEEKS_PER_CYCLE: i64 = 4;

pub fn resolve_day_key(now: Date) -> DayKey {
    DayKey::FROM_SUNDAY[usize::from(now.weekday().number_days_from_sunday())]
}

pub fn resolve_day_label(day: DayKey) -> &'static str {
    day.label()
}

/// Whole weeks elapsed since `epoch`, reduced onto the cycle.
///
/// Uses floor division so dates before the anchor count backwards through
/// the cycle (`epoch - 1 day` is the last week).
pub fn resolve_week_index(now: Date, epoch: Date) -> u8 {
    let elapsed_days = (now - epoch).whole_days();
    let week_offset = elapsed_days.div_euclid(DAYS_PER_WEEK);
    // rem_euclid keeps this in 0..4, the cast cannot truncate
    week_offset.rem_euclid(WEEKS_PER_CYCLE) as u8
}

pub fn resolve_week_key(now: Date, epoch: Date) -> WeekKey {
    WeekKey::from_index(resolve_week_index(now, epoch))
}

/// A rotation anchored at a specific date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    anchor: Date,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new(DEFAULT_ANCHOR)
    }
}

impl Rotation {
    pub fn new(anchor: Date) -> Self {
        Self { anchor }
    }

    /// Which menu entry applies on `now`.
    pub fn resolve(&self, now: Date) -> MenuSelection {
        let selection = MenuSelection {
            week: resolve_week_key(now, self.anchor),
            day: resolve_day_key(now),
        };
        tracing::debug!(
            date = %now,
            week = %selection.week,
            day = %selection.day,
            "resolved menu rotation"
        );
        selection
    }
}

/// Current wall clock time in the device's offset, or UTC if the offset is unknown.
pub fn local_now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    match UtcOffset::current_local_offset() {
        Ok(offset) => now.to_offset(offset),
        Err(_) => now,
    }
}

pub fn local_today() -> Date {
    local_now().date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    #[test]
    fn test_day_key_from_sunday_ordinals() {
        // 2025-01-05 is a Sunday
        let sunday = date!(2025 - 01 - 05);
        let expected = [
            (DayKey::Sunday, "Κυριακή"),
            (DayKey::Monday, "Δευτέρα"),
            (DayKey::Tuesday, "Τρίτη"),
            (DayKey::Wednesday, "Τετάρτη"),
            (DayKey::Thursday, "Πέμπτη"),
            (DayKey::Friday, "Παρασκευή"),
            (DayKey::Saturday, "Σάββατο"),
        ];
        for (offset, (key, label)) in expected.into_iter().enumerate() {
            let day = sunday + Duration::days(offset as i64);
            assert_eq!(resolve_day_key(day), key);
            assert_eq!(resolve_day_label(resolve_day_key(day)), label);
        }
    }

    #[test]
    fn test_anchor_is_first_week() {
        assert_eq!(resolve_week_index(DEFAULT_ANCHOR, DEFAULT_ANCHOR), 0);
        assert_eq!(
            resolve_week_index(DEFAULT_ANCHOR + Duration::days(6), DEFAULT_ANCHOR),
            0
        );
        assert_eq!(
            resolve_week_index(DEFAULT_ANCHOR + Duration::days(7), DEFAULT_ANCHOR),
            1
        );
    }

    #[test]
    fn test_day_before_anchor_is_last_week() {
        assert_eq!(
            resolve_week_index(DEFAULT_ANCHOR - Duration::days(1), DEFAULT_ANCHOR),
            3
        );
        assert_eq!(
            resolve_week_index(DEFAULT_ANCHOR - Duration::days(7), DEFAULT_ANCHOR),
            3
        );
        assert_eq!(
            resolve_week_index(DEFAULT_ANCHOR - Duration::days(8), DEFAULT_ANCHOR),
            2
        );
    }

    #[test]
    fn test_week_index_periodic_and_bounded() {
        for d in -400..400 {
            let now = DEFAULT_ANCHOR + Duration::days(d);
            let index = resolve_week_index(now, DEFAULT_ANCHOR);
            assert!(index < 4, "index {index} out of range for offset {d}");
            assert_eq!(
                index,
                resolve_week_index(now + Duration::days(28), DEFAULT_ANCHOR)
            );
        }
    }

    #[test]
    fn test_shifting_anchor_by_whole_cycle_changes_nothing() {
        let shifted = Rotation::new(DEFAULT_ANCHOR + Duration::days(28));
        let rotation = Rotation::default();
        for d in -60..60 {
            let now = DEFAULT_ANCHOR + Duration::days(d);
            assert_eq!(rotation.resolve(now), shifted.resolve(now));
        }
    }

    #[test]
    fn test_resolve_two_weeks_after_anchor() {
        let selection = Rotation::default().resolve(date!(2025 - 01 - 20));
        assert_eq!(selection.week, WeekKey::Week3);
        assert_eq!(selection.day, DayKey::Monday);
    }
}
