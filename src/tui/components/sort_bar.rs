//! # SortBar Component
//!
//! One-line row of sort tabs. Keys `1`-`5` pick a tab; the bar only reports
//! the choice and leaves it to the trip presenter to decide whether anything
//! happens. The active tab is a prop: a sort change builds a new bar.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::sort::SortType;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortBar {
    pub active: SortType,
}

impl SortBar {
    pub fn new(active: SortType) -> Self {
        Self { active }
    }

    fn tab_style(&self, sort: SortType) -> Style {
        if sort == self.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if sort.is_sortable() {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        }
    }
}

impl EventHandler for SortBar {
    type Event = SortType;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let TuiEvent::InputChar(c) = event else {
            return None;
        };
        let index = c.to_digit(10)? as usize;
        index
            .checked_sub(1)
            .and_then(|i| SortType::ALL.get(i))
            .copied()
    }
}

impl Component for SortBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (i, sort) in SortType::ALL.iter().enumerate() {
            spans.push(Span::styled(
                format!(" {} {} ", i + 1, sort.label()),
                self.tab_style(*sort),
            ));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_select_tabs() {
        let mut bar = SortBar::new(SortType::Day);
        assert_eq!(bar.handle_event(&TuiEvent::InputChar('1')), Some(SortType::Day));
        assert_eq!(bar.handle_event(&TuiEvent::InputChar('2')), Some(SortType::Event));
        assert_eq!(bar.handle_event(&TuiEvent::InputChar('3')), Some(SortType::Time));
        assert_eq!(bar.handle_event(&TuiEvent::InputChar('4')), Some(SortType::Price));
        assert_eq!(bar.handle_event(&TuiEvent::InputChar('5')), Some(SortType::Offers));
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut bar = SortBar::new(SortType::Day);
        assert_eq!(bar.handle_event(&TuiEvent::InputChar('0')), None);
        assert_eq!(bar.handle_event(&TuiEvent::InputChar('6')), None);
        assert_eq!(bar.handle_event(&TuiEvent::InputChar('p')), None);
        assert_eq!(bar.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_selection_does_not_change_active_tab() {
        let mut bar = SortBar::new(SortType::Time);
        bar.handle_event(&TuiEvent::InputChar('4'));
        assert_eq!(bar.active, SortType::Time);
    }
}
