//! # Sorting
//!
//! Sort modes offered by the sort bar and the comparators behind them.
//!
//! Every comparator returns a sorted copy and is stable: events with equal
//! keys keep their relative order from the input.

use serde::{Deserialize, Serialize};

use crate::core::trip_event::TripEvent;

/// Sort modes shown in the sort bar.
///
/// `Event` and `Offers` are listed for parity with the bar layout but are not
/// actionable: selecting them changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    #[default]
    Day,
    Event,
    Time,
    Price,
    Offers,
}

impl SortType {
    /// Order in which the sort bar lays out its tabs.
    pub const ALL: [SortType; 5] = [
        SortType::Day,
        SortType::Event,
        SortType::Time,
        SortType::Price,
        SortType::Offers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortType::Day => "Day",
            SortType::Event => "Event",
            SortType::Time => "Time",
            SortType::Price => "Price",
            SortType::Offers => "Offers",
        }
    }

    pub fn is_sortable(self) -> bool {
        !matches!(self, SortType::Event | SortType::Offers)
    }
}

pub fn events_by_date(events: &[TripEvent]) -> Vec<TripEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.date_from);
    sorted
}

pub fn events_by_time(events: &[TripEvent]) -> Vec<TripEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.duration());
    sorted
}

pub fn events_by_price(events: &[TripEvent]) -> Vec<TripEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.base_price);
    sorted
}

/// Sort with the comparator for `sort`. Non-sortable modes fall back to day order.
pub fn sort_events(events: &[TripEvent], sort: SortType) -> Vec<TripEvent> {
    match sort {
        SortType::Time => events_by_time(events),
        SortType::Price => events_by_price(events),
        SortType::Day | SortType::Event | SortType::Offers => events_by_date(events),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{event_at, event_with_price, ids};

    #[test]
    fn test_price_sort_ascending() {
        let events = vec![
            event_with_price("a", 30),
            event_with_price("b", 10),
            event_with_price("c", 20),
        ];
        let sorted = events_by_price(&events);
        let prices: Vec<u32> = sorted.iter().map(|e| e.base_price).collect();
        assert_eq!(prices, vec![10, 20, 30]);
    }

    #[test]
    fn test_price_sort_is_stable() {
        let events = vec![
            event_with_price("first", 20),
            event_with_price("cheap", 10),
            event_with_price("second", 20),
            event_with_price("third", 20),
        ];
        assert_eq!(
            ids(&events_by_price(&events)),
            vec!["cheap", "first", "second", "third"]
        );
    }

    #[test]
    fn test_time_sort_by_duration() {
        // (start hour, length in minutes)
        let events = vec![
            event_at("long", 8, 180),
            event_at("short", 9, 15),
            event_at("mid", 7, 60),
            event_at("mid-too", 12, 60),
        ];
        assert_eq!(
            ids(&events_by_time(&events)),
            vec!["short", "mid", "mid-too", "long"]
        );
    }

    #[test]
    fn test_day_sort_by_start() {
        let events = vec![
            event_at("noon", 12, 30),
            event_at("dawn", 6, 30),
            event_at("also-noon", 12, 90),
        ];
        assert_eq!(
            ids(&events_by_date(&events)),
            vec!["dawn", "noon", "also-noon"]
        );
    }

    #[test]
    fn test_non_sortable_modes_fall_back_to_day() {
        let events = vec![event_at("late", 20, 10), event_at("early", 5, 10)];
        assert_eq!(ids(&sort_events(&events, SortType::Event)), vec!["early", "late"]);
        assert_eq!(ids(&sort_events(&events, SortType::Offers)), vec!["early", "late"]);
    }

    #[test]
    fn test_sortable_flags() {
        assert!(SortType::Day.is_sortable());
        assert!(SortType::Time.is_sortable());
        assert!(SortType::Price.is_sortable());
        assert!(!SortType::Event.is_sortable());
        assert!(!SortType::Offers.is_sortable());
    }

    #[test]
    fn test_sort_returns_copy() {
        let events = vec![event_with_price("a", 30), event_with_price("b", 10)];
        let _ = events_by_price(&events);
        assert_eq!(ids(&events), vec!["a", "b"]);
    }
}
