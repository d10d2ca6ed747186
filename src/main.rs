mod app;
mod calendar;
mod help;
mod logging;
mod schedule;
mod theme;
use crate::app::App;
use crate::calendar::{MonthCursor, NavigationBounds, YearMonth};
use crate::schedule::ScheduleConfig;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::{format_description::FormatItem, macros::format_description, Date};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        start: Option<YearMonth>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut start = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if start.is_none() => {
                    let value = value.string()?;
                    // Parse as the first of the month so that `time` checks the
                    // month number
                    match Date::parse(&format!("{value}-01"), &YMD_FMT) {
                        Ok(d) => start = Some(YearMonth::of(d)),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { start, log_file })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { start, log_file } => {
                if let Some(path) = log_file {
                    logging::init(&path)?;
                }
                let config = ScheduleConfig::default();
                let bounds = NavigationBounds::default();
                let cursor = match start {
                    Some(ym) if !bounds.contains(ym) => anyhow::bail!(
                        "{ym} is outside the displayable months ({} to {})",
                        bounds.first,
                        bounds.last
                    ),
                    Some(ym) => MonthCursor::new(ym),
                    None => MonthCursor::default(),
                };
                tracing::info!(start = %cursor.current(), "Starting calendar");
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(config, bounds, cursor).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: custody-calendar [--log-file PATH] [YYYY-MM]");
                println!();
                println!("Month calendar showing custody weeks and the work roster");
                println!();
                println!("Options:");
                println!("  --log-file PATH   Write diagnostic logs to PATH");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
