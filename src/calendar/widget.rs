use super::grid::{build_grid, DaySlot, DAYS_IN_WEEK};
use super::month::YearMonth;
use super::navigation::{Direction, NavigationBounds};
use crate::schedule::{CustodyOwner, ScheduleConfig, WorkStatus};
use crate::theme::{
    custody_glyph, custody_label, custody_style, work_glyph, work_label, BASE_STYLE,
    DISABLED_STYLE, TITLE_STYLE, WEEKDAY_STYLE, WORK_STYLE,
};
use ratatui::{prelude::*, widgets::*};
use time::{format_description::FormatItem, macros::format_description};

static HEADER: &str = " Su     Mo     Tu     We     Th     Fr     Sa ";

static SHORT_DATE_FMT: &[FormatItem<'_>] =
    format_description!("[month repr:short] [day padding:none]");

/// Width of the calendar grid in columns
const MAIN_WIDTH: u16 = 46;

/// Line on which the weekday header is drawn; the title and a blank line
/// precede it
const HEADER_LINE: u16 = 2;

/// Number of lines taken up by the title, header, and their rule
const TOP_LINES: u16 = 4;

/// Number of lines taken up by each week of the calendar
const WEEK_LINES: u16 = 2;

/// A month never spans more than this many rows of weeks
const MAX_WEEKS: u16 = 6;

/// Line on which the legend starts, fixed so that it does not jump around
/// when moving between five- and six-week months
const LEGEND_LINE: u16 = TOP_LINES + MAX_WEEKS * WEEK_LINES + 1;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 7;

const ACS_HLINE: char = '─';
const PREV_ARROW: &str = "‹";
const NEXT_ARROW: &str = "›";

/// Renders one month of the calendar, each day annotated with who has the
/// children and whether the worker is away
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthView<'a> {
    config: &'a ScheduleConfig,
    bounds: NavigationBounds,
    month: YearMonth,
}

impl<'a> MonthView<'a> {
    pub(crate) fn new(
        config: &'a ScheduleConfig,
        bounds: NavigationBounds,
        month: YearMonth,
    ) -> MonthView<'a> {
        MonthView {
            config,
            bounds,
            month,
        }
    }

    fn legend(&self) -> [Line<'static>; 3] {
        let custody = [CustodyOwner::PrimaryParent, CustodyOwner::OtherParent]
            .into_iter()
            .map(|c| (custody_glyph(Some(c)), BASE_STYLE, custody_label(c)));
        let work = [WorkStatus::Away, WorkStatus::Takeoff, WorkStatus::Landing]
            .into_iter()
            .map(|w| (work_glyph(w), WORK_STYLE, work_label(w)));
        [
            legend_line(custody),
            legend_line(work),
            Line::styled(self.summary(), BASE_STYLE),
        ]
    }

    fn summary(&self) -> String {
        let away_first = self
            .config
            .away
            .first
            .format(&SHORT_DATE_FMT)
            .unwrap_or_default();
        let away_last = self
            .config
            .away
            .last
            .format(&SHORT_DATE_FMT)
            .unwrap_or_default();
        let rotation = self.config.rotation;
        format!(
            "Handoffs every {}   Away {away_first} - {away_last}   {} weeks on, {} weeks off",
            self.config.custody_anchor.weekday(),
            rotation.working_weeks,
            rotation.cycle_weeks.saturating_sub(rotation.working_weeks),
        )
    }
}

impl Widget for MonthView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let left = area.width.saturating_sub(MAIN_WIDTH) / 2;
        let grid_area = Rect {
            x: area.x + left,
            y: area.y,
            width: MAIN_WIDTH.min(area.width),
            height: area.height,
        };
        let mut canvas = BufferCanvas::new(grid_area, buf);
        canvas.draw_title(self.month, self.bounds);
        canvas.draw_header();
        match build_grid(self.config, self.month) {
            Ok(slots) => {
                for (week_no, week) in std::iter::zip(0u16.., slots.chunks(DAYS_IN_WEEK)) {
                    for (col, slot) in std::iter::zip(0u16.., week) {
                        canvas.draw_slot(week_no, col, slot);
                    }
                }
            }
            Err(e) => canvas.mvprint(TOP_LINES, 0, e.to_string(), Some(BASE_STYLE)),
        }
        let mut canvas = BufferCanvas::new(area, buf);
        for (y, line) in std::iter::zip(LEGEND_LINE.., self.legend()) {
            canvas.center_line(y, line);
        }
    }
}

/// Joins legend entries, each glyph drawn in the style it has on the grid
fn legend_line<I>(entries: I) -> Line<'static>
where
    I: IntoIterator<Item = (&'static str, Style, &'static str)>,
{
    let mut spans = Vec::new();
    for (glyph, glyph_style, label) in entries {
        if !spans.is_empty() {
            spans.push(Span::styled("   ", BASE_STYLE));
        }
        spans.push(Span::styled(glyph, glyph_style));
        spans.push(Span::styled(format!(" {label}"), BASE_STYLE));
    }
    Line::from(spans)
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, month: YearMonth, bounds: NavigationBounds) {
        let arrow_style = |dir| {
            if bounds.permits(month, dir) {
                TITLE_STYLE
            } else {
                DISABLED_STYLE
            }
        };
        let title = month.to_string();
        let width = u16::try_from(title.len()).unwrap_or(u16::MAX);
        self.mvprint(0, 0, PREV_ARROW, Some(arrow_style(Direction::Prev)));
        self.mvprint(
            0,
            MAIN_WIDTH.saturating_sub(width) / 2,
            title,
            Some(TITLE_STYLE),
        );
        self.mvprint(
            0,
            MAIN_WIDTH - 1,
            NEXT_ARROW,
            Some(arrow_style(Direction::Next)),
        );
    }

    fn draw_header(&mut self) {
        self.mvprint(HEADER_LINE, 0, HEADER, Some(WEEKDAY_STYLE));
        self.hline(HEADER_LINE + 1, 0, ACS_HLINE, MAIN_WIDTH);
    }

    fn draw_slot(&mut self, week_no: u16, col: u16, slot: &DaySlot) {
        let Some(day) = slot.day() else {
            return;
        };
        let y = week_no * WEEK_LINES + TOP_LINES;
        let x = DAY_WIDTH * col;
        let custody = slot.custody();
        self.mvprint(y, x, format!(" {day:2} "), Some(custody_style(custody)));
        self.mvprint(y + 1, x + 1, custody_glyph(custody), Some(BASE_STYLE));
        if let Some(work) = slot.work() {
            self.mvprint(y + 1, x + 2, work_glyph(work), Some(WORK_STYLE));
        }
    }

    fn center_line(&mut self, y: u16, line: Line<'_>) {
        let width = u16::try_from(line.width()).unwrap_or(u16::MAX);
        let x = self.area.width.saturating_sub(width) / 2;
        if y < self.area.height {
            Paragraph::new(line).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // calendar's area, though we need to be sure that the Rect passed
            // to the Paragraph is entirely within the frame lest a panic
            // result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}
