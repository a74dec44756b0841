//! # Trip Events
//!
//! The data every other module passes around: one `TripEvent` per stop on
//! the trip. Events are plain values. Nothing in the presentation layer
//! mutates a stored event in place; a changed copy is produced and swapped
//! into the list with [`update_item`].

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier of an event. Unique within one trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id for events loaded without one.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What kind of stop an event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Taxi,
    Bus,
    Train,
    Ship,
    Drive,
    #[default]
    Flight,
    CheckIn,
    Sightseeing,
    Restaurant,
}

impl EventType {
    pub const ALL: [EventType; 9] = [
        EventType::Taxi,
        EventType::Bus,
        EventType::Train,
        EventType::Ship,
        EventType::Drive,
        EventType::Flight,
        EventType::CheckIn,
        EventType::Sightseeing,
        EventType::Restaurant,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EventType::Taxi => "Taxi",
            EventType::Bus => "Bus",
            EventType::Train => "Train",
            EventType::Ship => "Ship",
            EventType::Drive => "Drive",
            EventType::Flight => "Flight",
            EventType::CheckIn => "Check-in",
            EventType::Sightseeing => "Sightseeing",
            EventType::Restaurant => "Restaurant",
        }
    }

    /// Cycle forward through [`EventType::ALL`], wrapping at the end.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// An optional extra bought together with an event (e.g. luggage, meal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub title: String,
    pub price: u32,
    #[serde(default)]
    pub is_selected: bool,
}

/// A single stop on the trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripEvent {
    #[serde(default = "EventId::generate")]
    pub id: EventId,
    #[serde(rename = "type", default)]
    pub kind: EventType,
    pub destination: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub base_price: u32,
    #[serde(default)]
    pub offers: Vec<Offer>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl TripEvent {
    pub fn duration(&self) -> Duration {
        self.date_to - self.date_from
    }

    /// Base price plus every selected offer, saturating at `u32::MAX`.
    pub fn total_price(&self) -> u32 {
        self.offers
            .iter()
            .filter(|o| o.is_selected)
            .fold(self.base_price, |total, o| total.saturating_add(o.price))
    }

    /// A copy with the favourite flag flipped and every other field intact.
    pub fn with_favorite_toggled(&self) -> Self {
        Self {
            is_favorite: !self.is_favorite,
            ..self.clone()
        }
    }
}

/// Return a new list where the entry sharing `updated`'s id is replaced.
///
/// Entries are matched by id only. If no entry matches the list is returned
/// unchanged.
pub fn update_item(items: &[TripEvent], updated: &TripEvent) -> Vec<TripEvent> {
    items
        .iter()
        .map(|item| {
            if item.id == updated.id {
                updated.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Format a duration as `DDd HHh MMm`, dropping leading zero units.
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    if days > 0 {
        format!("{days:02}D {hours:02}H {minutes:02}M")
    } else if hours > 0 {
        format!("{hours:02}H {minutes:02}M")
    } else {
        format!("{minutes:02}M")
    }
}
