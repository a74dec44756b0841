//! Trip-wide figures shown in the title bar.

use chrono::{DateTime, Utc};

use crate::core::trip_event::TripEvent;

/// Route, date span and cost of a whole trip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TripSummary {
    pub route: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub total_cost: u32,
}

/// Above this many stops the route collapses to `first — ... — last`.
const MAX_LISTED_STOPS: usize = 3;

impl TripSummary {
    /// Summarise events in chronological order regardless of the current sort.
    pub fn from_events(events: &[TripEvent]) -> Self {
        let mut chronological: Vec<&TripEvent> = events.iter().collect();
        chronological.sort_by_key(|e| e.date_from);

        let mut stops: Vec<&str> = Vec::new();
        for e in &chronological {
            if stops.last() != Some(&e.destination.as_str()) {
                stops.push(&e.destination);
            }
        }

        let route = match stops.as_slice() {
            [] => String::new(),
            [first, .., last] if stops.len() > MAX_LISTED_STOPS => {
                format!("{first} — ... — {last}")
            }
            listed => listed.join(" — "),
        };

        Self {
            route,
            starts_at: chronological.first().map(|e| e.date_from),
            ends_at: events.iter().map(|e| e.date_to).max(),
            total_cost: events
                .iter()
                .map(TripEvent::total_price)
                .fold(0, u32::saturating_add),
        }
    }

    /// Date span like `Mar 18 — Mar 20`, formatted with `date_format`.
    pub fn date_span(&self, date_format: &str) -> String {
        match (self.starts_at, self.ends_at) {
            (Some(start), Some(end)) => format!(
                "{} — {}",
                start.format(date_format),
                end.format(date_format)
            ),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{event_at, event_to, event_with_price};

    #[test]
    fn test_empty_trip() {
        let summary = TripSummary::from_events(&[]);
        assert_eq!(summary, TripSummary::default());
        assert_eq!(summary.date_span("%b %d"), "");
    }

    #[test]
    fn test_route_lists_short_trips_in_order() {
        let events = vec![
            event_to("b", 10, "Geneva"),
            event_to("a", 8, "Amsterdam"),
            event_to("c", 12, "Chamonix"),
        ];
        let summary = TripSummary::from_events(&events);
        assert_eq!(summary.route, "Amsterdam — Geneva — Chamonix");
    }

    #[test]
    fn test_route_collapses_long_trips() {
        let events = vec![
            event_to("a", 8, "Amsterdam"),
            event_to("b", 9, "Geneva"),
            event_to("c", 10, "Chamonix"),
            event_to("d", 11, "Rome"),
        ];
        assert_eq!(
            TripSummary::from_events(&events).route,
            "Amsterdam — ... — Rome"
        );
    }

    #[test]
    fn test_repeated_stops_are_merged() {
        let events = vec![
            event_to("a", 8, "Geneva"),
            event_to("b", 9, "Geneva"),
            event_to("c", 10, "Rome"),
        ];
        assert_eq!(TripSummary::from_events(&events).route, "Geneva — Rome");
    }

    #[test]
    fn test_cost_and_span() {
        let events = vec![event_at("a", 8, 60), event_at("b", 14, 120)];
        let summary = TripSummary::from_events(&events);
        assert_eq!(summary.total_cost, events[0].base_price + events[1].base_price);
        assert_eq!(summary.starts_at, Some(events[0].date_from));
        assert_eq!(summary.ends_at, Some(events[1].date_to));
    }

    #[test]
    fn test_total_cost_saturates() {
        let events = vec![event_with_price("a", u32::MAX), event_with_price("b", 10)];
        assert_eq!(TripSummary::from_events(&events).total_cost, u32::MAX);
    }
}
