use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::core::config::DisplaySettings;
use crate::tui::component::ListEntry;

/// Empty-state placeholder shown inside the event list when the trip has no events.
#[derive(Debug, Clone, Default)]
pub struct NoEventsView;

impl NoEventsView {
    pub const MESSAGE: &'static str = "No events yet. Add some to your trip file.";
}

impl ListEntry for NoEventsView {
    fn height(&self, _width: u16) -> u16 {
        3
    }

    fn render_entry(&self, area: Rect, buf: &mut Buffer, _focused: bool, _display: &DisplaySettings) {
        Paragraph::new(Self::MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)))
            .render(area, buf);
    }
}
