use super::month::YearMonth;
use time::Month;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Prev,
    Next,
}

/// The month currently on display.  Moving wraps across year boundaries
/// without any limit; see `NavigationBounds` for the range the user may
/// actually visit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthCursor {
    current: YearMonth,
}

impl MonthCursor {
    pub(crate) fn new(start: YearMonth) -> MonthCursor {
        MonthCursor { current: start }
    }

    pub(crate) fn current(&self) -> YearMonth {
        self.current
    }

    pub(crate) fn advance(&mut self, direction: Direction) {
        self.current = match direction {
            Direction::Prev => self.current.previous(),
            Direction::Next => self.current.next(),
        };
    }
}

impl Default for MonthCursor {
    fn default() -> MonthCursor {
        MonthCursor::new(NavigationBounds::default().first)
    }
}

/// Inclusive range of months the calendar may display
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NavigationBounds {
    pub(crate) first: YearMonth,
    pub(crate) last: YearMonth,
}

impl NavigationBounds {
    pub(crate) fn contains(&self, ym: YearMonth) -> bool {
        self.first <= ym && ym <= self.last
    }

    /// Returns `false` if moving from `from` in `direction` would step past
    /// the corresponding bound
    pub(crate) fn permits(&self, from: YearMonth, direction: Direction) -> bool {
        match direction {
            Direction::Prev => from > self.first,
            Direction::Next => from < self.last,
        }
    }
}

impl Default for NavigationBounds {
    fn default() -> NavigationBounds {
        NavigationBounds {
            first: YearMonth::new(2025, Month::July),
            last: YearMonth::new(2025, Month::December),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_in_july_2025() {
        let cursor = MonthCursor::default();
        assert_eq!(cursor.current(), YearMonth::new(2025, Month::July));
        assert_eq!(cursor.current().index0(), 6);
    }

    #[test]
    fn test_next_wraps_into_new_year() {
        let mut cursor = MonthCursor::new(YearMonth::new(2025, Month::December));
        cursor.advance(Direction::Next);
        assert_eq!(cursor.current(), YearMonth::new(2026, Month::January));
    }

    #[test]
    fn test_prev_wraps_into_old_year() {
        let mut cursor = MonthCursor::new(YearMonth::new(2025, Month::January));
        cursor.advance(Direction::Prev);
        assert_eq!(cursor.current(), YearMonth::new(2024, Month::December));
    }

    #[test]
    fn test_cursor_ignores_bounds() {
        let mut cursor = MonthCursor::default();
        cursor.advance(Direction::Prev);
        assert_eq!(cursor.current(), YearMonth::new(2025, Month::June));
    }

    #[test]
    fn test_bounds() {
        let bounds = NavigationBounds::default();
        let july = YearMonth::new(2025, Month::July);
        let september = YearMonth::new(2025, Month::September);
        let december = YearMonth::new(2025, Month::December);
        assert!(!bounds.permits(july, Direction::Prev));
        assert!(bounds.permits(july, Direction::Next));
        assert!(bounds.permits(september, Direction::Prev));
        assert!(bounds.permits(september, Direction::Next));
        assert!(bounds.permits(december, Direction::Prev));
        assert!(!bounds.permits(december, Direction::Next));
        assert!(bounds.contains(september));
        assert!(!bounds.contains(YearMonth::new(2025, Month::June)));
        assert!(!bounds.contains(YearMonth::new(2026, Month::January)));
    }

    #[test]
    fn test_walk_whole_range() {
        let bounds = NavigationBounds::default();
        let mut cursor = MonthCursor::default();
        let mut steps = 0;
        while bounds.permits(cursor.current(), Direction::Next) {
            cursor.advance(Direction::Next);
            steps += 1;
        }
        assert_eq!(steps, 5);
        assert_eq!(cursor.current(), bounds.last);
    }

    proptest! {
        #[test]
        fn prop_round_trip(year in 1000i32..9000, index0 in 0u8..12, forwards in any::<bool>()) {
            let start = YearMonth::from_index0(year, index0).expect("index is in range");
            let mut cursor = MonthCursor::new(start);
            let (there, back) = if forwards {
                (Direction::Next, Direction::Prev)
            } else {
                (Direction::Prev, Direction::Next)
            };
            cursor.advance(there);
            prop_assert_ne!(cursor.current(), start);
            cursor.advance(back);
            prop_assert_eq!(cursor.current(), start);
        }
    }
}
