mod custody;
mod work;
pub(crate) use self::custody::custody_for;
pub(crate) use self::work::work_for;
use thiserror::Error;
use time::{macros::date, Date, Month};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum CustodyOwner {
    PrimaryParent,
    OtherParent,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum WorkStatus {
    Away,
    Off,
    Work,
    Takeoff,
    Landing,
}

/// An inclusive range of calendar days
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DateSpan {
    pub(crate) first: Date,
    pub(crate) last: Date,
}

impl DateSpan {
    pub(crate) const fn new(first: Date, last: Date) -> DateSpan {
        DateSpan { first, last }
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        self.first <= date && date <= self.last
    }
}

/// A fixed-date work status that takes priority over the interval and
/// rotation rules
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Transition {
    pub(crate) date: Date,
    pub(crate) status: WorkStatus,
}

impl Transition {
    const fn new(date: Date, status: WorkStatus) -> Transition {
        Transition { date, status }
    }
}

/// Repeating roster: the first `working_weeks` weeks of every
/// `cycle_weeks`-week cycle are worked, the rest are off.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Rotation {
    pub(crate) cycle_weeks: u8,
    pub(crate) working_weeks: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ScheduleConfig {
    /// First day of a custody week with the primary parent
    pub(crate) custody_anchor: Date,
    pub(crate) away: DateSpan,
    pub(crate) off: DateSpan,
    pub(crate) roster_start: Date,
    pub(crate) rotation: Rotation,
    /// Checked before every other work rule
    pub(crate) overrides: &'static [Transition],
    /// Only consulted for dates in the working half of a roster cycle
    pub(crate) flights: &'static [Transition],
}

pub(crate) const STANDARD_SCHEDULE: ScheduleConfig = ScheduleConfig {
    custody_anchor: date!(2025 - 07 - 25),
    away: DateSpan::new(date!(2025 - 07 - 25), date!(2025 - 08 - 13)),
    off: DateSpan::new(date!(2025 - 08 - 14), date!(2025 - 09 - 24)),
    roster_start: date!(2025 - 09 - 25),
    rotation: Rotation {
        cycle_weeks: 4,
        working_weeks: 2,
    },
    overrides: &[
        Transition::new(date!(2025 - 07 - 25), WorkStatus::Takeoff),
        Transition::new(date!(2025 - 08 - 13), WorkStatus::Landing),
        Transition::new(date!(2025 - 09 - 24), WorkStatus::Takeoff),
    ],
    flights: &[
        Transition::new(date!(2025 - 10 - 08), WorkStatus::Landing),
        Transition::new(date!(2025 - 10 - 22), WorkStatus::Takeoff),
        Transition::new(date!(2025 - 11 - 05), WorkStatus::Landing),
        Transition::new(date!(2025 - 11 - 19), WorkStatus::Takeoff),
        Transition::new(date!(2025 - 12 - 03), WorkStatus::Landing),
        Transition::new(date!(2025 - 12 - 17), WorkStatus::Takeoff),
        Transition::new(date!(2025 - 12 - 31), WorkStatus::Landing),
    ],
};

impl ScheduleConfig {
    /// Returns the last date covered by the flight table.  Working days after
    /// it are reported as plain `Work` because nothing says when the flights
    /// are.
    pub(crate) fn flights_tabulated_through(&self) -> Option<Date> {
        self.flights.iter().map(|t| t.date).max()
    }
}

impl Default for ScheduleConfig {
    fn default() -> ScheduleConfig {
        STANDARD_SCHEDULE
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum ScheduleError {
    #[error("month index {0} is outside 0..=11")]
    InvalidMonth(u8),
    #[error("{year}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u8, day: u8 },
}

/// Converts a 0-based month index (January = 0) into a `Month`
pub(crate) fn month_from_index0(index0: u8) -> Result<Month, ScheduleError> {
    index0
        .checked_add(1)
        .and_then(|n| Month::try_from(n).ok())
        .ok_or(ScheduleError::InvalidMonth(index0))
}

/// Number of calendar days from `start` to `end`; negative if `end` comes
/// first
pub(crate) fn whole_days_between(start: Date, end: Date) -> i64 {
    (end - start).whole_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_from_index0() {
        assert_eq!(month_from_index0(0), Ok(Month::January));
        assert_eq!(month_from_index0(6), Ok(Month::July));
        assert_eq!(month_from_index0(11), Ok(Month::December));
        assert_eq!(month_from_index0(12), Err(ScheduleError::InvalidMonth(12)));
        assert_eq!(
            month_from_index0(u8::MAX),
            Err(ScheduleError::InvalidMonth(u8::MAX))
        );
    }

    #[test]
    fn test_whole_days_between() {
        assert_eq!(
            whole_days_between(date!(2025 - 07 - 25), date!(2025 - 07 - 25)),
            0
        );
        assert_eq!(
            whole_days_between(date!(2025 - 07 - 25), date!(2025 - 08 - 01)),
            7
        );
        assert_eq!(
            whole_days_between(date!(2025 - 12 - 31), date!(2026 - 01 - 01)),
            1
        );
        assert_eq!(
            whole_days_between(date!(2025 - 07 - 25), date!(2025 - 07 - 24)),
            -1
        );
    }

    #[test]
    fn test_span_is_inclusive() {
        let span = STANDARD_SCHEDULE.away;
        assert!(span.contains(date!(2025 - 07 - 25)));
        assert!(span.contains(date!(2025 - 08 - 13)));
        assert!(!span.contains(date!(2025 - 07 - 24)));
        assert!(!span.contains(date!(2025 - 08 - 14)));
    }

    #[test]
    fn test_flights_tabulated_through() {
        assert_eq!(
            STANDARD_SCHEDULE.flights_tabulated_through(),
            Some(date!(2025 - 12 - 31))
        );
        let bare = ScheduleConfig {
            flights: &[],
            ..STANDARD_SCHEDULE
        };
        assert_eq!(bare.flights_tabulated_through(), None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ScheduleError::InvalidDate {
                year: 2025,
                month: 2,
                day: 30
            }
            .to_string(),
            "2025-02-30 is not a valid calendar date"
        );
        assert_eq!(
            ScheduleError::InvalidMonth(12).to_string(),
            "month index 12 is outside 0..=11"
        );
    }
}
