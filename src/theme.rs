use crate::schedule::{CustodyOwner, WorkStatus};
use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const DISABLED_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const PRIMARY_PARENT_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::LightMagenta)
    .add_modifier(Modifier::BOLD);

pub(crate) const OTHER_PARENT_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::LightBlue)
    .add_modifier(Modifier::BOLD);

pub(crate) const WORK_STYLE: Style = BASE_STYLE.fg(Color::LightYellow);

pub(crate) fn custody_style(custody: Option<CustodyOwner>) -> Style {
    match custody {
        Some(CustodyOwner::PrimaryParent) => PRIMARY_PARENT_STYLE,
        Some(CustodyOwner::OtherParent) => OTHER_PARENT_STYLE,
        None => BASE_STYLE,
    }
}

pub(crate) fn custody_glyph(custody: Option<CustodyOwner>) -> &'static str {
    match custody {
        Some(CustodyOwner::PrimaryParent) => "♥",
        Some(CustodyOwner::OtherParent) => "⌂",
        None => " ",
    }
}

pub(crate) fn custody_label(custody: CustodyOwner) -> &'static str {
    match custody {
        CustodyOwner::PrimaryParent => "Primary parent",
        CustodyOwner::OtherParent => "Other parent",
    }
}

pub(crate) fn work_glyph(work: WorkStatus) -> &'static str {
    match work {
        WorkStatus::Away | WorkStatus::Work => "✈",
        WorkStatus::Takeoff => "↗",
        WorkStatus::Landing => "↘",
        WorkStatus::Off => " ",
    }
}

pub(crate) fn work_label(work: WorkStatus) -> &'static str {
    match work {
        WorkStatus::Away => "Away",
        WorkStatus::Work => "Working",
        WorkStatus::Takeoff => "Flying out",
        WorkStatus::Landing => "Flying home",
        WorkStatus::Off => "Off",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Span;

    #[test]
    fn test_glyphs_are_single_width() {
        let glyphs = [
            custody_glyph(Some(CustodyOwner::PrimaryParent)),
            custody_glyph(Some(CustodyOwner::OtherParent)),
            custody_glyph(None),
            work_glyph(WorkStatus::Away),
            work_glyph(WorkStatus::Off),
            work_glyph(WorkStatus::Work),
            work_glyph(WorkStatus::Takeoff),
            work_glyph(WorkStatus::Landing),
        ];
        for g in glyphs {
            assert_eq!(Span::raw(g).width(), 1, "{g:?}");
        }
    }
}
