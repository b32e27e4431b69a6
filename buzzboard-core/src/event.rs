//! Event record types.
//!
//! These types model one managed event as the admin panel sees it. They
//! serialize to the same camelCase JSON shape the store persists, so a
//! round-trip through disk preserves every field.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unique event identifier, assigned at creation from a monotonic source.
pub type EventId = i64;

/// A managed event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub time: NaiveTime,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub capacity: Capacity,
    pub status: EventStatus,
    #[serde(default)]
    pub registrations: u32,
    /// Date the record was created. Display-only; edits never touch it.
    pub created_at: NaiveDate,
}

/// Lifecycle status of an event.
///
/// The serde renames match the display strings the persisted blob uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    #[serde(rename = "To Be Announced")]
    ToBeAnnounced,
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    /// The fixed status cycle, in order.
    pub const CYCLE: [EventStatus; 4] = [
        EventStatus::ToBeAnnounced,
        EventStatus::Upcoming,
        EventStatus::Ongoing,
        EventStatus::Completed,
    ];

    /// The next status in the cycle, wrapping from Completed back to
    /// To Be Announced.
    pub fn next(self) -> EventStatus {
        let i = Self::CYCLE.iter().position(|s| *s == self).unwrap_or(0);
        Self::CYCLE[(i + 1) % Self::CYCLE.len()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::ToBeAnnounced => "To Be Announced",
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Ongoing => "Ongoing",
            EventStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = String;

    /// Accepts the display strings and relaxed forms: case-insensitive,
    /// ignoring spaces, hyphens and underscores ("to-be-announced", "tba").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "tobeannounced" | "tba" => Ok(EventStatus::ToBeAnnounced),
            "upcoming" => Ok(EventStatus::Upcoming),
            "ongoing" => Ok(EventStatus::Ongoing),
            "completed" => Ok(EventStatus::Completed),
            _ => Err(format!(
                "unknown status '{s}' (expected one of: to-be-announced, upcoming, ongoing, completed)"
            )),
        }
    }
}

/// Registration capacity: a positive headcount or no limit at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Limited(u32),
    Unlimited,
}

const UNLIMITED: &str = "Unlimited";

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Limited(n) => write!(f, "{n}"),
            Capacity::Unlimited => f.write_str(UNLIMITED),
        }
    }
}

// The persisted blob stores capacity either as a plain number or as the
// string "Unlimited", so both directions need hand-written serde. Numeric
// strings ("150") also appear in legacy data and are accepted on input.
impl Serialize for Capacity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Capacity::Limited(n) => serializer.serialize_u32(*n),
            Capacity::Unlimited => serializer.serialize_str(UNLIMITED),
        }
    }
}

impl<'de> Deserialize<'de> for Capacity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CapacityVisitor;

        impl serde::de::Visitor<'_> for CapacityVisitor {
            type Value = Capacity;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a capacity number or the string \"Unlimited\"")
            }

            fn visit_u64<E: serde::de::Error>(self, n: u64) -> Result<Capacity, E> {
                u32::try_from(n)
                    .map(Capacity::Limited)
                    .map_err(|_| E::custom(format!("capacity {n} out of range")))
            }

            fn visit_i64<E: serde::de::Error>(self, n: i64) -> Result<Capacity, E> {
                u32::try_from(n)
                    .map(Capacity::Limited)
                    .map_err(|_| E::custom(format!("capacity {n} out of range")))
            }

            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Capacity, E> {
                if s.is_empty() || s.eq_ignore_ascii_case(UNLIMITED) {
                    return Ok(Capacity::Unlimited);
                }
                s.parse::<u32>()
                    .map(Capacity::Limited)
                    .map_err(|_| E::custom(format!("invalid capacity '{s}'")))
            }
        }

        deserializer.deserialize_any(CapacityVisitor)
    }
}

/// Serialize times as "HH:MM" (the form the admin panel always used),
/// accepting "HH:MM:SS" on input as well.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

/// A fresh identifier: current Unix time in milliseconds, bumped past the
/// largest existing id so creations in the same millisecond stay unique
/// and increasing.
pub fn next_event_id(events: &[EventRecord]) -> EventId {
    let now = Utc::now().timestamp_millis();
    let max = events.iter().map(|e| e.id).max().unwrap_or(0);
    now.max(max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_cycle_order() {
        assert_eq!(EventStatus::ToBeAnnounced.next(), EventStatus::Upcoming);
        assert_eq!(EventStatus::Upcoming.next(), EventStatus::Ongoing);
        assert_eq!(EventStatus::Ongoing.next(), EventStatus::Completed);
        assert_eq!(EventStatus::Completed.next(), EventStatus::ToBeAnnounced);
    }

    #[test]
    fn status_cycle_closes_after_four_steps() {
        for start in EventStatus::CYCLE {
            assert_eq!(start.next().next().next().next(), start);
        }
    }

    #[test]
    fn status_parses_relaxed_forms() {
        assert_eq!("Upcoming".parse(), Ok(EventStatus::Upcoming));
        assert_eq!("to-be-announced".parse(), Ok(EventStatus::ToBeAnnounced));
        assert_eq!("tba".parse(), Ok(EventStatus::ToBeAnnounced));
        assert_eq!("COMPLETED".parse(), Ok(EventStatus::Completed));
        assert!("cancelled".parse::<EventStatus>().is_err());
    }

    #[test]
    fn capacity_serializes_as_number_or_sentinel() {
        assert_eq!(serde_json::to_string(&Capacity::Limited(150)).unwrap(), "150");
        assert_eq!(
            serde_json::to_string(&Capacity::Unlimited).unwrap(),
            "\"Unlimited\""
        );
    }

    #[test]
    fn capacity_deserializes_legacy_shapes() {
        assert_eq!(serde_json::from_str::<Capacity>("150").unwrap(), Capacity::Limited(150));
        assert_eq!(
            serde_json::from_str::<Capacity>("\"Unlimited\"").unwrap(),
            Capacity::Unlimited
        );
        // Form inputs stored capacity as a numeric string
        assert_eq!(serde_json::from_str::<Capacity>("\"50\"").unwrap(), Capacity::Limited(50));
        assert!(serde_json::from_str::<Capacity>("\"lots\"").is_err());
        assert!(serde_json::from_str::<Capacity>("-3").is_err());
    }

    #[test]
    fn record_round_trips_with_camel_case_keys() {
        let record = EventRecord {
            id: 17,
            name: "Demo Day".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            location: "Hall A".to_string(),
            description: None,
            capacity: Capacity::Unlimited,
            status: EventStatus::Upcoming,
            registrations: 0,
            created_at: NaiveDate::from_ymd_opt(2025, 11, 30).unwrap(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"createdAt\":\"2025-11-30\""));
        assert!(json.contains("\"time\":\"09:00\""));
        assert!(json.contains("\"status\":\"Upcoming\""));
        assert!(!json.contains("description"));

        let back: EventRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn time_accepts_seconds_on_input() {
        let json = r#"{
            "id": 1, "name": "x", "date": "2025-01-01", "time": "14:30:00",
            "location": "y", "capacity": 10, "status": "Ongoing",
            "registrations": 2, "createdAt": "2025-01-01"
        }"#;
        let record: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
    }

    #[test]
    fn next_event_id_is_monotonic() {
        let mut events = Vec::new();
        let first = next_event_id(&events);
        assert!(first > 0);

        // Even with an id far in the future, the next one moves past it.
        let mut record: EventRecord = serde_json::from_str(
            r#"{
                "id": 1, "name": "x", "date": "2025-01-01", "time": "14:30",
                "location": "y", "capacity": "Unlimited", "status": "Upcoming",
                "registrations": 0, "createdAt": "2025-01-01"
            }"#,
        )
        .unwrap();
        record.id = first + 1_000_000;
        events.push(record);
        assert!(next_event_id(&events) > first + 1_000_000);
    }
}
