use crate::schedule::{month_from_index0, ScheduleError};
use std::cmp::Ordering;
use std::fmt;
use time::{Date, Month};

/// A month of a specific year, as displayed by the calendar
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    pub(crate) const fn new(year: i32, month: Month) -> YearMonth {
        YearMonth { year, month }
    }

    /// Construct from a 0-based month index (January = 0)
    pub(crate) fn from_index0(year: i32, index0: u8) -> Result<YearMonth, ScheduleError> {
        Ok(YearMonth::new(year, month_from_index0(index0)?))
    }

    pub(crate) fn index0(&self) -> u8 {
        u8::from(self.month) - 1
    }

    /// The month containing `date`
    pub(crate) fn of(date: Date) -> YearMonth {
        YearMonth::new(date.year(), date.month())
    }

    /// The following month.  At the very end of `i32`'s years there is no
    /// following month, and `self` is returned unchanged.
    pub(crate) fn next(self) -> YearMonth {
        match self.month {
            Month::December => self
                .year
                .checked_add(1)
                .map_or(self, |year| YearMonth::new(year, Month::January)),
            m => YearMonth::new(self.year, m.next()),
        }
    }

    /// The preceding month, or `self` if there is none
    pub(crate) fn previous(self) -> YearMonth {
        match self.month {
            Month::January => self
                .year
                .checked_sub(1)
                .map_or(self, |year| YearMonth::new(year, Month::December)),
            m => YearMonth::new(self.year, m.previous()),
        }
    }

    pub(crate) fn day(&self, day: u8) -> Result<Date, ScheduleError> {
        Date::from_calendar_date(self.year, self.month, day).map_err(|_| {
            ScheduleError::InvalidDate {
                year: self.year,
                month: u8::from(self.month),
                day,
            }
        })
    }

    pub(crate) fn first_day(&self) -> Result<Date, ScheduleError> {
        self.day(1)
    }

    /// Length of the month, found as the day before the first of the next
    /// month
    pub(crate) fn days_in_month(&self) -> Result<u8, ScheduleError> {
        let next = self.next();
        next.first_day()?
            .previous_day()
            .map(Date::day)
            .ok_or(ScheduleError::InvalidDate {
                year: next.year,
                month: u8::from(next.month),
                day: 0,
            })
    }
}

impl Ord for YearMonth {
    fn cmp(&self, other: &YearMonth) -> Ordering {
        (self.year, u8::from(self.month)).cmp(&(other.year, u8::from(other.month)))
    }
}

impl PartialOrd for YearMonth {
    fn partial_cmp(&self, other: &YearMonth) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}
