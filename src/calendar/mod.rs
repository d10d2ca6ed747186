mod grid;
mod month;
mod navigation;
mod widget;
pub(crate) use self::month::YearMonth;
pub(crate) use self::navigation::{Direction, MonthCursor, NavigationBounds};
pub(crate) use self::widget::MonthView;
