use super::{whole_days_between, ScheduleConfig, Transition, WorkStatus};
use time::Date;

const DAYS_IN_WEEK: i64 = 7;

/// Returns the worker's status on `date`.
///
/// Rules are tried in order and the first match wins:
///
/// 1. an exact-date override (travel days at the edges of the away period)
/// 2. the away interval
/// 3. the off interval
/// 4. the roster: the working weeks of each cycle are `Work`, except for
///    tabulated flight days; the remaining weeks are `Off`
/// 5. `Off`
pub(crate) fn work_for(config: &ScheduleConfig, date: Date) -> WorkStatus {
    if let Some(status) = lookup(config.overrides, date) {
        status
    } else if config.away.contains(date) {
        WorkStatus::Away
    } else if config.off.contains(date) {
        WorkStatus::Off
    } else if date >= config.roster_start {
        roster_status(config, date)
    } else {
        WorkStatus::Off
    }
}

fn roster_status(config: &ScheduleConfig, date: Date) -> WorkStatus {
    let week_index = whole_days_between(config.roster_start, date) / DAYS_IN_WEEK;
    let cycle_pos = week_index % i64::from(config.rotation.cycle_weeks.max(1));
    if cycle_pos < i64::from(config.rotation.working_weeks) {
        lookup(config.flights, date).unwrap_or(WorkStatus::Work)
    } else {
        WorkStatus::Off
    }
}

fn lookup(table: &[Transition], date: Date) -> Option<WorkStatus> {
    table.iter().find(|t| t.date == date).map(|t| t.status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{DateSpan, Rotation, STANDARD_SCHEDULE};
    use time::{macros::date, Duration};

    fn status(date: Date) -> WorkStatus {
        work_for(&STANDARD_SCHEDULE, date)
    }

    #[test]
    fn test_overrides() {
        assert_eq!(status(date!(2025 - 07 - 25)), WorkStatus::Takeoff);
        assert_eq!(status(date!(2025 - 08 - 13)), WorkStatus::Landing);
        assert_eq!(status(date!(2025 - 09 - 24)), WorkStatus::Takeoff);
    }

    #[test]
    fn test_overrides_are_year_specific() {
        assert_eq!(status(date!(2026 - 07 - 25)), WorkStatus::Off);
        assert_eq!(status(date!(2024 - 08 - 13)), WorkStatus::Off);
    }

    #[test]
    fn test_away_interval() {
        assert_eq!(status(date!(2025 - 07 - 26)), WorkStatus::Away);
        assert_eq!(status(date!(2025 - 08 - 01)), WorkStatus::Away);
        assert_eq!(status(date!(2025 - 08 - 12)), WorkStatus::Away);
    }

    #[test]
    fn test_off_interval() {
        assert_eq!(status(date!(2025 - 08 - 14)), WorkStatus::Off);
        assert_eq!(status(date!(2025 - 09 - 01)), WorkStatus::Off);
        assert_eq!(status(date!(2025 - 09 - 23)), WorkStatus::Off);
    }

    #[test]
    fn test_before_everything() {
        assert_eq!(status(date!(2025 - 07 - 24)), WorkStatus::Off);
        assert_eq!(status(date!(2025 - 01 - 01)), WorkStatus::Off);
    }

    #[test]
    fn test_roster_cycle_boundaries() {
        let start = STANDARD_SCHEDULE.roster_start;
        assert_eq!(status(start), WorkStatus::Work);
        assert_eq!(status(start + Duration::days(12)), WorkStatus::Work);
        assert_eq!(status(start + Duration::days(14)), WorkStatus::Off);
        assert_eq!(status(start + Duration::days(13)), WorkStatus::Landing);
        assert_eq!(status(start + Duration::days(27)), WorkStatus::Off);
        assert_eq!(status(start + Duration::days(28)), WorkStatus::Work);
        assert_eq!(status(start + Duration::days(42)), WorkStatus::Off);
    }

    #[test]
    fn test_landing_wednesdays() {
        assert_eq!(status(date!(2025 - 10 - 08)), WorkStatus::Landing);
        assert_eq!(status(date!(2025 - 11 - 05)), WorkStatus::Landing);
        assert_eq!(status(date!(2025 - 12 - 03)), WorkStatus::Landing);
        assert_eq!(status(date!(2025 - 12 - 31)), WorkStatus::Landing);
    }

    #[test]
    fn test_takeoff_wednesdays_fall_in_off_weeks() {
        // The tabulated takeoffs are the last day of an off fortnight, so the
        // rotation rule claims them before the flight table is consulted.
        assert_eq!(status(date!(2025 - 10 - 22)), WorkStatus::Off);
        assert_eq!(status(date!(2025 - 11 - 19)), WorkStatus::Off);
        assert_eq!(status(date!(2025 - 12 - 17)), WorkStatus::Off);
    }

    #[test]
    fn test_working_days_past_flight_table_have_no_markers() {
        let last = STANDARD_SCHEDULE
            .flights_tabulated_through()
            .expect("standard schedule has flights");
        // 2026-01-28 is the last day of the next working fortnight, which
        // would be a landing day if the table went that far.
        assert!(date!(2026 - 01 - 28) > last);
        assert_eq!(status(date!(2026 - 01 - 28)), WorkStatus::Work);
        assert_eq!(status(date!(2026 - 01 - 15)), WorkStatus::Work);
    }

    #[test]
    fn test_override_beats_intervals() {
        let config = ScheduleConfig {
            overrides: &[Transition {
                date: date!(2025 - 08 - 01),
                status: WorkStatus::Landing,
            }],
            ..STANDARD_SCHEDULE
        };
        assert_eq!(work_for(&config, date!(2025 - 08 - 01)), WorkStatus::Landing);
        assert_eq!(work_for(&config, date!(2025 - 07 - 25)), WorkStatus::Away);
    }

    #[test]
    fn test_alternative_rotation() {
        let config = ScheduleConfig {
            away: DateSpan::new(date!(2024 - 01 - 01), date!(2024 - 01 - 02)),
            off: DateSpan::new(date!(2024 - 01 - 03), date!(2024 - 01 - 04)),
            roster_start: date!(2025 - 01 - 01),
            rotation: Rotation {
                cycle_weeks: 3,
                working_weeks: 1,
            },
            overrides: &[],
            flights: &[],
            ..STANDARD_SCHEDULE
        };
        let start = date!(2025 - 01 - 01);
        assert_eq!(work_for(&config, start), WorkStatus::Work);
        assert_eq!(work_for(&config, start + Duration::days(6)), WorkStatus::Work);
        assert_eq!(work_for(&config, start + Duration::days(7)), WorkStatus::Off);
        assert_eq!(work_for(&config, start + Duration::days(20)), WorkStatus::Off);
        assert_eq!(work_for(&config, start + Duration::days(21)), WorkStatus::Work);
        assert_eq!(work_for(&config, date!(2024 - 12 - 31)), WorkStatus::Off);
    }
}
