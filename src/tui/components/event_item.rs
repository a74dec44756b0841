//! # EventItemView Component
//!
//! Read-only rendering of one trip event: date, type, destination, times,
//! duration, price, favourite star and selected offers.
//!
//! Stateless apart from its props; the presenter builds a fresh view
//! whenever the event changes.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::config::DisplaySettings;
use crate::core::trip_event::{TripEvent, format_duration};
use crate::tui::component::{EventHandler, ListEntry};
use crate::tui::event::TuiEvent;

/// Top + bottom borders
const VERTICAL_OVERHEAD: u16 = 2;
/// Destinations wider than this are truncated with "...".
const MAX_DESTINATION_WIDTH: usize = 24;

/// High-level events emitted by the item view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEvent {
    /// Open the edit form (Enter, `e` or Ctrl+E).
    RollUp,
    /// Toggle the favourite star (`f`).
    FavoriteClick,
}

pub struct EventItemView {
    event: TripEvent,
}

impl EventItemView {
    pub fn new(event: TripEvent) -> Self {
        Self { event }
    }

    pub fn event(&self) -> &TripEvent {
        &self.event
    }

    fn has_selected_offers(&self) -> bool {
        self.event.offers.iter().any(|o| o.is_selected)
    }

    fn summary_line(&self, display: &DisplaySettings) -> Line<'_> {
        let e = &self.event;
        let star = if e.is_favorite {
            Span::styled(" ★", Style::default().fg(Color::Yellow))
        } else {
            Span::styled(" ☆", Style::default().fg(Color::DarkGray))
        };

        Line::from(vec![
            Span::styled(
                format!("{:<7}", e.date_from.format(&display.date_format).to_string()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{:<12}", e.kind.label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "{:<width$}",
                truncate_str(&e.destination, MAX_DESTINATION_WIDTH),
                width = MAX_DESTINATION_WIDTH + 1
            )),
            Span::raw(format!(
                "{} — {}  ",
                e.date_from.format(&display.time_format),
                e.date_to.format(&display.time_format)
            )),
            Span::styled(
                format!("{:<12}", format_duration(e.duration())),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{} {}", display.currency, e.base_price),
                Style::default().fg(Color::Green),
            ),
            star,
        ])
    }

    fn offers_line(&self, display: &DisplaySettings) -> Line<'_> {
        let offers: Vec<String> = self
            .event
            .offers
            .iter()
            .filter(|o| o.is_selected)
            .map(|o| format!("+ {} {} {}", o.title, display.currency, o.price))
            .collect();
        Line::styled(offers.join("   "), Style::default().fg(Color::DarkGray))
    }
}

impl EventHandler for EventItemView {
    type Event = ItemEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit | TuiEvent::RollUp | TuiEvent::InputChar('e') => Some(ItemEvent::RollUp),
            TuiEvent::InputChar('f') => Some(ItemEvent::FavoriteClick),
            _ => None,
        }
    }
}

impl ListEntry for EventItemView {
    fn height(&self, _width: u16) -> u16 {
        1 + u16::from(self.has_selected_offers()) + VERTICAL_OVERHEAD
    }

    fn render_entry(&self, area: Rect, buf: &mut Buffer, focused: bool, display: &DisplaySettings) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        };

        let mut lines = vec![self.summary_line(display)];
        if self.has_selected_offers() {
            lines.push(self.offers_line(display));
        }

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_style(border_style)
                    .padding(Padding::horizontal(1)),
            )
            .render(area, buf);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}
