use crate::calendar::{Direction, MonthCursor, MonthView, NavigationBounds, YearMonth};
use crate::help::Help;
use crate::schedule::ScheduleConfig;
use crate::theme::BASE_STYLE;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::Backend, buffer::Buffer, layout::Rect, widgets::Widget, Terminal};
use std::io::{self, Write};
use tracing::{debug, warn};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    config: ScheduleConfig,
    bounds: NavigationBounds,
    cursor: MonthCursor,
    state: AppState,
}

impl App {
    pub(crate) fn new(
        config: ScheduleConfig,
        bounds: NavigationBounds,
        cursor: MonthCursor,
    ) -> App {
        App {
            config,
            bounds,
            cursor,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        self.log_month();
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key or tried to move past
    // the displayable months
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h' | 'p') | KeyCode::Left => self.navigate(Direction::Prev),
                KeyCode::Char('l' | 'n') | KeyCode::Right => self.navigate(Direction::Next),
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn navigate(&mut self, direction: Direction) -> bool {
        let from = self.cursor.current();
        if !self.bounds.permits(from, direction) {
            debug!(month = %from, ?direction, "Refusing to move past navigation bound");
            return false;
        }
        self.cursor.advance(direction);
        self.log_month();
        true
    }

    fn log_month(&self) {
        let month = self.cursor.current();
        debug!(%month, index0 = month.index0(), "Displaying month");
        if self.extends_past_flights(month) {
            warn!(
                %month,
                "Month extends past the flight table; working days after it show no flight markers"
            );
        }
    }

    fn extends_past_flights(&self, month: YearMonth) -> bool {
        let Some(last_flight) = self.config.flights_tabulated_through() else {
            return false;
        };
        month
            .days_in_month()
            .and_then(|n| month.day(n))
            .is_ok_and(|last_day| last_day > last_flight)
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        MonthView::new(&self.config, self.bounds, self.cursor.current()).render(area, buf);
        if self.state == AppState::Helping {
            Help::new(self.bounds).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Quitting,
}
