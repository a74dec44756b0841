use crate::core::config::DisplaySettings;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{EventList, TitleBar};
use crate::tui::presenter::TripPresenter;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const LIST_HELP: &str = "↑/↓ select · Enter edit · f favourite · 1-5 sort · q quit";
const FORM_HELP: &str =
    "Tab/⇧Tab field · ←/→ change · Space toggle offer · Enter save · Esc cancel · Ctrl+D delete";

pub fn draw_ui(
    frame: &mut Frame,
    trip: &TripPresenter,
    tui: &mut TuiState,
    display: &DisplaySettings,
) {
    let [title_area, sort_area, list_area, help_area] = screen_areas(frame.area());

    // Title bar
    let summary = trip.summary();
    TitleBar::new(&summary, trip.status(), display).render(frame, title_area);

    // Sort tabs
    if let Some(mut sort_bar) = trip.sort_bar() {
        sort_bar.render(frame, sort_area);
    }

    // Event list
    if let Some(list) = trip.list_view() {
        EventList {
            state: &mut tui.event_list,
            tree: trip.tree(),
            list,
            focused: trip.focused_view(),
            display,
        }
        .render(frame, list_area);
    }

    // Help line
    frame.render_widget(
        Span::styled(help_text(trip), Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn screen_areas(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(1), Min(0), Length(1)]).areas(area)
}

fn help_text(trip: &TripPresenter) -> &'static str {
    let editing = trip
        .focused_view()
        .and_then(|view| trip.tree().form(view))
        .is_some();
    if editing { FORM_HELP } else { LIST_HELP }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sort::SortType;
    use crate::test_support::event_to;
    use crate::tui::components::NoEventsView;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(trip: &TripPresenter) -> String {
        let mut tui = TuiState::new();
        let display = DisplaySettings::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|f| draw_ui(f, trip, &mut tui, &display))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draws_title_sort_bar_list_and_help() {
        let mut trip = TripPresenter::new(SortType::Day);
        trip.init(vec![event_to("a", 8, "Geneva"), event_to("b", 9, "Chamonix")]);
        let text = screen_text(&trip);

        assert!(text.contains("Geneva — Chamonix"));
        assert!(text.contains("1 Day"));
        assert!(text.contains("Chamonix"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_empty_trip_shows_placeholder() {
        let mut trip = TripPresenter::new(SortType::Day);
        trip.init(Vec::new());
        let text = screen_text(&trip);

        assert!(text.contains("Tripboard"));
        assert!(text.contains(NoEventsView::MESSAGE));
    }

    #[test]
    fn test_help_switches_while_editing() {
        let mut trip = TripPresenter::new(SortType::Day);
        trip.init(vec![event_to("a", 8, "Geneva")]);
        assert_eq!(help_text(&trip), LIST_HELP);

        trip.handle_input(&crate::tui::event::TuiEvent::Submit);
        assert_eq!(help_text(&trip), FORM_HELP);
    }
}
