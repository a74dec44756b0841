//! # Trip Loading
//!
//! Reads the trip to display from a JSON file, or falls back to a built-in
//! sample trip. The file is never written back.
//!
//! ```json
//! [
//!   {
//!     "id": "1",
//!     "type": "flight",
//!     "destination": "Geneva",
//!     "date_from": "2026-07-10T10:00:00Z",
//!     "date_to": "2026-07-10T11:30:00Z",
//!     "base_price": 180,
//!     "offers": [{ "title": "Add luggage", "price": 30, "is_selected": true }],
//!     "is_favorite": false
//!   }
//! ]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, TimeZone, Utc};
use log::{debug, info, warn};

use crate::core::trip_event::{EventId, EventType, Offer, TripEvent};

#[derive(Debug, thiserror::Error)]
pub enum TripFileError {
    #[error("cannot read trip file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("trip file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("event {id} ends before it starts")]
    EndsBeforeStart { id: EventId },
    #[error("event id {id} appears more than once")]
    DuplicateId { id: EventId },
}

/// Parse and validate a trip from JSON text.
pub fn parse_trip(json: &str) -> Result<Vec<TripEvent>, TripFileError> {
    let events: Vec<TripEvent> = serde_json::from_str(json)?;
    validate(&events)?;
    Ok(events)
}

/// Load a trip from `path`.
pub fn load_trip(path: &Path) -> Result<Vec<TripEvent>, TripFileError> {
    let json = fs::read_to_string(path).map_err(|source| TripFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let events = parse_trip(&json)?;
    info!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Load from `path` when given, otherwise return [`sample_trip`].
pub fn load_or_sample(path: Option<&Path>) -> Result<Vec<TripEvent>, TripFileError> {
    match path {
        Some(p) => load_trip(p),
        None => {
            debug!("No trip file configured, using sample trip");
            Ok(sample_trip())
        }
    }
}

fn validate(events: &[TripEvent]) -> Result<(), TripFileError> {
    let mut seen = HashSet::new();
    for e in events {
        if e.date_to < e.date_from {
            warn!("Rejecting trip: event {} ends before it starts", e.id);
            return Err(TripFileError::EndsBeforeStart { id: e.id.clone() });
        }
        if !seen.insert(&e.id) {
            return Err(TripFileError::DuplicateId { id: e.id.clone() });
        }
    }
    Ok(())
}

fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn offer(title: &str, price: u32, is_selected: bool) -> Offer {
    Offer {
        title: title.to_string(),
        price,
        is_selected,
    }
}

/// A small Alpine trip shown when no trip file is configured.
pub fn sample_trip() -> Vec<TripEvent> {
    let sample = |id: &str,
                  kind: EventType,
                  destination: &str,
                  from: DateTime<Utc>,
                  minutes: i64,
                  base_price: u32,
                  offers: Vec<Offer>| TripEvent {
        id: EventId::new(id),
        kind,
        destination: destination.to_string(),
        date_from: from,
        date_to: from + Duration::minutes(minutes),
        base_price,
        offers,
        is_favorite: false,
    };

    vec![
        sample(
            "sample-3",
            EventType::Sightseeing,
            "Chamonix",
            at(12, 9, 0),
            240,
            60,
            vec![offer("Book tickets", 40, false), offer("Lunch in city", 30, true)],
        ),
        sample(
            "sample-1",
            EventType::Flight,
            "Geneva",
            at(10, 7, 45),
            95,
            180,
            vec![
                offer("Add luggage", 30, true),
                offer("Switch to comfort", 100, false),
                offer("Add meal", 15, false),
            ],
        ),
        sample(
            "sample-2",
            EventType::Taxi,
            "Geneva",
            at(10, 9, 40),
            25,
            20,
            vec![offer("Order Uber", 20, false)],
        ),
        sample(
            "sample-4",
            EventType::CheckIn,
            "Chamonix",
            at(11, 14, 0),
            30,
            400,
            Vec::new(),
        ),
        sample(
            "sample-5",
            EventType::Train,
            "Chamonix",
            at(11, 11, 10),
            150,
            45,
            vec![offer("Choose seats", 5, false)],
        ),
    ]
}
