//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::{Duration, TimeZone, Utc};

use crate::core::trip_event::{EventId, EventType, TripEvent};

/// A one-hour flight to "Geneva" on 2026-07-10 at 10:00 UTC, price 100.
pub fn event(id: &str) -> TripEvent {
    event_at(id, 10, 60)
}

pub fn event_with_price(id: &str, price: u32) -> TripEvent {
    TripEvent {
        base_price: price,
        ..event(id)
    }
}

/// An event starting at `hour` on the test day and lasting `minutes`.
pub fn event_at(id: &str, hour: u32, minutes: i64) -> TripEvent {
    let date_from = Utc
        .with_ymd_and_hms(2026, 7, 10, hour, 0, 0)
        .single()
        .expect("valid test timestamp");
    TripEvent {
        id: EventId::new(id),
        kind: EventType::Flight,
        destination: "Geneva".to_string(),
        date_from,
        date_to: date_from + Duration::minutes(minutes),
        base_price: 100,
        offers: Vec::new(),
        is_favorite: false,
    }
}

pub fn event_to(id: &str, hour: u32, destination: &str) -> TripEvent {
    TripEvent {
        destination: destination.to_string(),
        ..event_at(id, hour, 60)
    }
}

pub fn ids(events: &[TripEvent]) -> Vec<&str> {
    events.iter().map(|e| e.id.as_str()).collect()
}
