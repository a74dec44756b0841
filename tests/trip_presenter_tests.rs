use tripboard::core::sort::SortType;
use tripboard::core::trip_event::{EventId, TripEvent};
use tripboard::core::trip_file::{self, TripFileError};
use tripboard::tui::event::TuiEvent;
use tripboard::tui::presenter::{Effect, EventAction, EventMode, TripPresenter};

// ============================================================================
// Helper Functions
// ============================================================================

/// A presenter showing the built-in sample trip.
fn sample_presenter(sort: SortType) -> TripPresenter {
    let mut trip = TripPresenter::new(sort);
    trip.init(trip_file::sample_trip());
    trip
}

fn ids(trip: &TripPresenter) -> Vec<&str> {
    trip.events().iter().map(|e| e.id.as_str()).collect()
}

fn mode(trip: &TripPresenter, id: &str) -> Option<EventMode> {
    trip.presenter(&EventId::new(id)).map(|p| p.mode())
}

fn find(trip: &TripPresenter, id: &str) -> TripEvent {
    trip.events()
        .iter()
        .find(|e| e.id.as_str() == id)
        .cloned()
        .expect("event present")
}

const TWO_EVENT_TRIP: &str = r#"[
    {
        "id": "flight",
        "type": "flight",
        "destination": "Lisbon",
        "date_from": "2026-09-01T08:00:00Z",
        "date_to": "2026-09-01T10:30:00Z",
        "base_price": 250,
        "offers": [{ "title": "Extra bag", "price": 40, "is_selected": true }]
    },
    {
        "id": "tram",
        "type": "bus",
        "destination": "Sintra",
        "date_from": "2026-09-02T09:00:00Z",
        "date_to": "2026-09-02T09:40:00Z",
        "base_price": 5
    }
]"#;

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_sample_trip_renders_in_day_order() {
    let trip = sample_presenter(SortType::Day);

    assert_eq!(
        ids(&trip),
        vec!["sample-1", "sample-2", "sample-5", "sample-4", "sample-3"]
    );
    assert_eq!(trip.presenter_count(), 5);
    for id in ids(&trip) {
        assert_eq!(mode(&trip, id), Some(EventMode::Item));
    }
}

#[test]
fn test_configured_default_sort_is_applied_on_init() {
    let trip = sample_presenter(SortType::Price);
    let prices: Vec<u32> = trip.events().iter().map(|e| e.base_price).collect();
    assert_eq!(prices, vec![20, 45, 60, 180, 400]);
}

#[test]
fn test_sort_keys_switch_order() {
    let mut trip = sample_presenter(SortType::Day);

    trip.handle_input(&TuiEvent::InputChar('3'));
    assert_eq!(trip.current_sort(), Some(SortType::Time));
    assert_eq!(
        ids(&trip),
        vec!["sample-2", "sample-4", "sample-1", "sample-5", "sample-3"]
    );

    trip.handle_input(&TuiEvent::InputChar('1'));
    assert_eq!(trip.current_sort(), Some(SortType::Day));
    assert_eq!(ids(&trip)[0], "sample-1");
    assert_eq!(trip.selected_index(), Some(0));
}

#[test]
fn test_non_sortable_tabs_change_nothing() {
    let mut trip = sample_presenter(SortType::Day);
    let before: Vec<String> = ids(&trip).iter().map(|s| s.to_string()).collect();
    let list = trip.list_view();

    trip.handle_input(&TuiEvent::InputChar('2'));
    trip.handle_input(&TuiEvent::InputChar('5'));

    assert_eq!(ids(&trip), before);
    assert_eq!(trip.list_view(), list);
    assert_eq!(trip.current_sort(), Some(SortType::Day));
    assert_eq!(trip.status(), "Sorting by Offers is not available");
}

#[test]
fn test_only_one_form_open_at_a_time() {
    let mut trip = sample_presenter(SortType::Day);

    trip.handle_input(&TuiEvent::RollUp);
    assert_eq!(mode(&trip, "sample-1"), Some(EventMode::Form));

    trip.dispatch(&EventId::new("sample-3"), EventAction::ItemRollUp);
    assert_eq!(mode(&trip, "sample-1"), Some(EventMode::Item));
    assert_eq!(mode(&trip, "sample-3"), Some(EventMode::Form));
    assert_eq!(
        trip.tree().escape_subscribers(),
        vec![EventId::new("sample-3")]
    );
}

#[test]
fn test_escape_cancels_edits() {
    let mut trip = sample_presenter(SortType::Day);
    let original = find(&trip, "sample-1");

    trip.handle_input(&TuiEvent::Submit);
    trip.handle_input(&TuiEvent::Backspace);
    trip.handle_input(&TuiEvent::Escape);
    assert_eq!(mode(&trip, "sample-1"), Some(EventMode::Item));

    // Reopening shows the committed values again
    trip.handle_input(&TuiEvent::Submit);
    trip.handle_input(&TuiEvent::Submit);
    assert_eq!(find(&trip, "sample-1"), original);
}

#[test]
fn test_edit_price_through_form() {
    let mut trip = sample_presenter(SortType::Day);

    trip.handle_input(&TuiEvent::Submit);
    // Destination → From → To → Price
    for _ in 0..3 {
        trip.handle_input(&TuiEvent::NextField);
    }
    for _ in 0..3 {
        trip.handle_input(&TuiEvent::Backspace);
    }
    trip.handle_input(&TuiEvent::InputChar('9'));
    trip.handle_input(&TuiEvent::InputChar('x'));
    trip.handle_input(&TuiEvent::Submit);

    assert_eq!(mode(&trip, "sample-1"), Some(EventMode::Item));
    assert_eq!(find(&trip, "sample-1").base_price, 9);
    // Data changes keep the current order
    assert_eq!(ids(&trip)[0], "sample-1");
}

#[test]
fn test_invalid_form_stays_open() {
    let mut trip = sample_presenter(SortType::Day);
    let original = find(&trip, "sample-1");

    trip.handle_input(&TuiEvent::Submit);
    for _ in 0..original.destination.chars().count() {
        trip.handle_input(&TuiEvent::Backspace);
    }
    trip.handle_input(&TuiEvent::Submit);

    assert_eq!(mode(&trip, "sample-1"), Some(EventMode::Form));
    assert_eq!(find(&trip, "sample-1"), original);
}

#[test]
fn test_favourite_then_delete_everything() {
    let mut trip = sample_presenter(SortType::Day);

    trip.handle_input(&TuiEvent::InputChar('f'));
    assert!(find(&trip, "sample-1").is_favorite);

    for remaining in (0..5).rev() {
        trip.handle_input(&TuiEvent::RollUp);
        trip.handle_input(&TuiEvent::DeleteEvent);
        assert_eq!(trip.events().len(), remaining);
        assert_eq!(trip.presenter_count(), remaining);
    }

    let list = trip.list_view().expect("list container stays mounted");
    assert_eq!(trip.tree().children(list), &[trip.no_events_view().unwrap()]);
    assert_eq!(trip.summary().total_cost, 0);
    assert_eq!(trip.handle_input(&TuiEvent::InputChar('q')), Effect::Quit);
}

#[test]
fn test_trip_file_round_trip_through_presenter() {
    let path = std::env::temp_dir().join(format!("tripboard-{}.json", std::process::id()));
    std::fs::write(&path, TWO_EVENT_TRIP).unwrap();
    let events = trip_file::load_or_sample(Some(&path)).unwrap();
    std::fs::remove_file(&path).ok();

    let mut trip = TripPresenter::new(SortType::Day);
    trip.init(events);

    let summary = trip.summary();
    assert_eq!(summary.route, "Lisbon — Sintra");
    assert_eq!(summary.total_cost, 250 + 40 + 5);
    assert_eq!(ids(&trip), vec!["flight", "tram"]);
}

#[test]
fn test_trip_file_rejects_inverted_dates() {
    let json = TWO_EVENT_TRIP.replace("2026-09-02T09:40:00Z", "2026-09-01T09:40:00Z");
    assert!(matches!(
        trip_file::parse_trip(&json),
        Err(TripFileError::EndsBeforeStart { .. })
    ));
}

#[test]
fn test_missing_trip_file_is_an_io_error() {
    let path = std::env::temp_dir().join("tripboard-does-not-exist.json");
    assert!(matches!(
        trip_file::load_or_sample(Some(&path)),
        Err(TripFileError::Io { .. })
    ));
}

#[test]
fn test_huge_prices_do_not_break_the_summary() {
    let json = r#"[
        {
            "id": "charter",
            "type": "flight",
            "destination": "Reykjavik",
            "date_from": "2026-10-01T08:00:00Z",
            "date_to": "2026-10-01T11:00:00Z",
            "base_price": 4294967295,
            "offers": [{ "title": "Lounge", "price": 1, "is_selected": true }]
        }
    ]"#;
    let mut trip = TripPresenter::new(SortType::Day);
    trip.init(trip_file::parse_trip(json).unwrap());

    assert_eq!(trip.summary().total_cost, u32::MAX);
    assert_eq!(trip.events()[0].total_price(), u32::MAX);
}
