//! # TitleBar Component
//!
//! Top status bar showing the trip at a glance.
//!
//! ## Responsibilities
//!
//! - Display the route (e.g. "Geneva — Chamonix")
//! - Display the date span and total cost
//! - Display transient status messages (e.g. "Sorted by Price")
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(&summary, "Sorted by Price", &display);
//! title_bar.render(frame, area);
//! ```
//!
//! ### Conditional Formatting
//!
//! 1. **Status message**: `"Geneva — Chamonix | Jul 10 — Jul 12 | € 1235 | Sorted by Price"`
//! 2. **No status**: `"Geneva — Chamonix | Jul 10 — Jul 12 | € 1235"`
//! 3. **Empty trip**: `"Tripboard"` plus any status

use crate::core::config::DisplaySettings;
use crate::core::summary::TripSummary;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
pub struct TitleBar<'a> {
    pub summary: &'a TripSummary,
    pub status_message: &'a str,
    pub display: &'a DisplaySettings,
}

impl<'a> TitleBar<'a> {
    pub fn new(summary: &'a TripSummary, status_message: &'a str, display: &'a DisplaySettings) -> Self {
        Self {
            summary,
            status_message,
            display,
        }
    }

    /// The plain-text title, used for rendering and tests.
    pub fn text(&self) -> String {
        let mut parts = Vec::new();
        if self.summary.route.is_empty() {
            parts.push("Tripboard".to_string());
        } else {
            parts.push(self.summary.route.clone());
            parts.push(self.summary.date_span(&self.display.date_format));
            parts.push(format!("{} {}", self.display.currency, self.summary.total_cost));
        }
        if !self.status_message.is_empty() {
            parts.push(self.status_message.to_string());
        }
        parts.join(" | ")
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::event_to;

    #[test]
    fn test_empty_trip_title() {
        let summary = TripSummary::default();
        let display = DisplaySettings::default();
        assert_eq!(TitleBar::new(&summary, "", &display).text(), "Tripboard");
        assert_eq!(
            TitleBar::new(&summary, "Deleted Rome", &display).text(),
            "Tripboard | Deleted Rome"
        );
    }

    #[test]
    fn test_title_with_route_cost_and_status() {
        let summary = TripSummary::from_events(&[
            event_to("a", 8, "Geneva"),
            event_to("b", 9, "Chamonix"),
        ]);
        let display = DisplaySettings::default();
        let text = TitleBar::new(&summary, "Sorted by Price", &display).text();
        assert_eq!(
            text,
            "Geneva — Chamonix | Jul 10 — Jul 10 | € 200 | Sorted by Price"
        );
    }
}
