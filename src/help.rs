use crate::calendar::NavigationBounds;
use crate::theme::BASE_STYLE;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Paragraph, Widget},
};

static COMMANDS: &[(&str, &str)] = &[
    ("h, p, LEFT", "Previous month"),
    ("l, n, RIGHT", "Next month"),
    ("?", "Show this help"),
    ("q, ESC", "Quit"),
];

/// Width of the column in which the keys are listed
const KEY_WIDTH: usize = 16;

/// Popup listing the key bindings and the range of months that can be
/// displayed
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help {
    bounds: NavigationBounds,
}

impl Help {
    pub(crate) fn new(bounds: NavigationBounds) -> Help {
        Help { bounds }
    }

    fn text(&self) -> Text<'static> {
        let mut lines = COMMANDS
            .iter()
            .map(|&(keys, action)| Line::raw(format!("{keys:KEY_WIDTH$}{action}")))
            .collect::<Vec<_>>();
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!(
            "Months {} to {} can be shown.",
            self.bounds.first, self.bounds.last
        )));
        lines.push(Line::raw("Press the Any Key to dismiss."));
        Text::from(lines)
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.text();
        // Text plus borders plus one column of padding on either side
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(area.width);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let [popup] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [popup] = Layout::vertical([height]).flex(Flex::Center).areas(popup);
        Clear.render(popup, buf);
        Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Keys ")
                    .title_alignment(Alignment::Center)
                    .padding(Padding::horizontal(1)),
            )
            .style(BASE_STYLE)
            .render(popup, buf);
    }
}
