use super::month::YearMonth;
use crate::schedule::{
    custody_for, work_for, CustodyOwner, ScheduleConfig, ScheduleError, WorkStatus,
};
use time::Date;

pub(crate) const DAYS_IN_WEEK: usize = 7;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DaySlot {
    /// Padding before the first day of the month
    Blank,
    Day {
        date: Date,
        custody: Option<CustodyOwner>,
        work: WorkStatus,
    },
}

impl DaySlot {
    fn annotate(config: &ScheduleConfig, date: Date) -> DaySlot {
        DaySlot::Day {
            date,
            custody: custody_for(config, date),
            work: work_for(config, date),
        }
    }

    pub(crate) fn day(&self) -> Option<u8> {
        match self {
            DaySlot::Blank => None,
            DaySlot::Day { date, .. } => Some(date.day()),
        }
    }

    pub(crate) fn custody(&self) -> Option<CustodyOwner> {
        match self {
            DaySlot::Blank => None,
            DaySlot::Day { custody, .. } => *custody,
        }
    }

    pub(crate) fn work(&self) -> Option<WorkStatus> {
        match self {
            DaySlot::Blank => None,
            DaySlot::Day { work, .. } => Some(*work),
        }
    }
}

/// Lays out the given month as a flat sequence of slots: one blank for each
/// weekday before the 1st (weeks start on Sunday), then one annotated slot
/// per day.  The final week is not padded.
pub(crate) fn build_grid(
    config: &ScheduleConfig,
    ym: YearMonth,
) -> Result<Vec<DaySlot>, ScheduleError> {
    let first_weekday = usize::from(ym.first_day()?.weekday().number_days_from_sunday());
    let days_in_month = ym.days_in_month()?;
    let mut slots = Vec::with_capacity(first_weekday + usize::from(days_in_month));
    slots.extend(std::iter::repeat(DaySlot::Blank).take(first_weekday));
    for day in 1..=days_in_month {
        slots.push(DaySlot::annotate(config, ym.day(day)?));
    }
    Ok(slots)
}
