//! Single-slot event persistence.
//!
//! The whole collection lives in one JSON document, rewritten in full after
//! every mutation. No deltas, no conflict detection: the store has a single
//! owner for the lifetime of the process.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::BuzzboardConfig;
use crate::error::{BuzzboardError, BuzzboardResult};
use crate::event::{Capacity, EventRecord, EventStatus};

const STORE_FILE: &str = "events.json";

/// Version of the persisted document this build reads and writes.
///
/// Version 0 is the bare JSON array the original deployment wrote; it is
/// migrated to the versioned shape on first load.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    events: Vec<EventRecord>,
}

/// Handle to the on-disk event slot.
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    /// The store inside the configured data directory.
    pub fn open(config: &BuzzboardConfig) -> EventStore {
        EventStore {
            path: config.data_path().join(STORE_FILE),
        }
    }

    /// A store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> EventStore {
        EventStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted collection.
    ///
    /// An absent slot is seeded with the demo events and persisted. A bare
    /// top-level array is treated as a version-0 document and rewritten in
    /// the current shape. Anything else that fails to parse is surfaced as
    /// [`BuzzboardError::CorruptStore`]; the store never resets data on its
    /// own.
    pub fn load(&self) -> BuzzboardResult<Vec<EventRecord>> {
        if !self.path.exists() {
            let events = seed_events();
            self.save(&events)?;
            return Ok(events);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| self.corrupt(e.to_string()))?;

        match value {
            serde_json::Value::Array(_) => {
                // Version 0: migrate to the versioned document.
                let events: Vec<EventRecord> =
                    serde_json::from_value(value).map_err(|e| self.corrupt(e.to_string()))?;
                self.save(&events)?;
                Ok(events)
            }
            serde_json::Value::Object(_) => {
                let doc: StoreDocument =
                    serde_json::from_value(value).map_err(|e| self.corrupt(e.to_string()))?;
                if doc.version > SCHEMA_VERSION {
                    return Err(BuzzboardError::UnsupportedVersion {
                        found: doc.version,
                        supported: SCHEMA_VERSION,
                    });
                }
                Ok(doc.events)
            }
            _ => Err(self.corrupt("expected an array or a versioned document".to_string())),
        }
    }

    /// Serialize the entire collection, overwriting the previous content.
    pub fn save(&self, events: &[EventRecord]) -> BuzzboardResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let doc = StoreDocument {
            version: SCHEMA_VERSION,
            events: events.to_vec(),
        };
        let content = serde_json::to_string_pretty(&doc)
            .map_err(|e| BuzzboardError::Serialization(e.to_string()))?;

        // Write-then-rename so a crash mid-write can't truncate the slot.
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn corrupt(&self, reason: String) -> BuzzboardError {
        BuzzboardError::CorruptStore {
            path: self.path.clone(),
            reason,
        }
    }
}

/// The three demo events an empty deployment starts with.
pub fn seed_events() -> Vec<EventRecord> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();

    vec![
        EventRecord {
            id: 1,
            name: "Tech Talk: AI & Machine Learning".to_string(),
            date: date(2025, 11, 15),
            time: time(14, 0),
            location: "Main Auditorium".to_string(),
            description: Some("Learn about the latest trends in AI and ML".to_string()),
            capacity: Capacity::Limited(150),
            status: EventStatus::Upcoming,
            registrations: 45,
            created_at: date(2025, 11, 11),
        },
        EventRecord {
            id: 2,
            name: "Hackathon 2025".to_string(),
            date: date(2025, 11, 20),
            time: time(10, 0),
            location: "Lab Complex".to_string(),
            description: Some("24-hour coding competition".to_string()),
            capacity: Capacity::Limited(200),
            status: EventStatus::ToBeAnnounced,
            registrations: 78,
            created_at: date(2025, 11, 11),
        },
        EventRecord {
            id: 3,
            name: "Web Development Workshop".to_string(),
            date: date(2025, 11, 12),
            time: time(16, 0),
            location: "Room 301".to_string(),
            description: Some("Learn React and modern web dev".to_string()),
            capacity: Capacity::Limited(50),
            status: EventStatus::Ongoing,
            registrations: 48,
            created_at: date(2025, 11, 11),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> EventStore {
        EventStore::at(dir.path().join(STORE_FILE))
    }

    #[test]
    fn absent_slot_is_seeded_and_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let events = store.load().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].name, "Tech Talk: AI & Machine Learning");
        assert!(store.path().exists());

        // Second load reads what the first one wrote.
        let again = store.load().unwrap();
        assert_eq!(again, events);
    }

    #[test]
    fn save_then_load_round_trips_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut events = seed_events();
        events[1].capacity = Capacity::Unlimited;
        events[1].description = None;
        store.save(&events).unwrap();

        assert_eq!(store.load().unwrap(), events);
    }

    #[test]
    fn save_overwrites_prior_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&seed_events()).unwrap();
        store.save(&seed_events()[..1].to_vec()).unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn bare_array_migrates_to_versioned_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let legacy = r#"[{
            "id": 1,
            "name": "Tech Talk",
            "date": "2025-11-15",
            "time": "14:00",
            "location": "Main Auditorium",
            "capacity": 150,
            "status": "Upcoming",
            "registrations": 45,
            "createdAt": "2025-11-11"
        }]"#;
        std::fs::write(store.path(), legacy).unwrap();

        let events = store.load().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].capacity, Capacity::Limited(150));

        // The slot is now in the versioned shape.
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["version"], SCHEMA_VERSION);
        assert!(raw["events"].is_array());
    }

    #[test]
    fn unparseable_content_is_a_corrupt_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "not json at all").unwrap();
        assert!(matches!(
            store.load(),
            Err(BuzzboardError::CorruptStore { .. })
        ));

        // A JSON scalar is no better.
        std::fs::write(store.path(), "42").unwrap();
        assert!(matches!(
            store.load(),
            Err(BuzzboardError::CorruptStore { .. })
        ));
    }

    #[test]
    fn corrupt_record_inside_the_array_is_reported_not_reset() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), r#"[{"id": "not-a-number"}]"#).unwrap();
        assert!(matches!(
            store.load(),
            Err(BuzzboardError::CorruptStore { .. })
        ));

        // The bad content is still there for the user to recover.
        assert!(std::fs::read_to_string(store.path()).unwrap().contains("not-a-number"));
    }

    #[test]
    fn newer_version_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), r#"{"version": 99, "events": []}"#).unwrap();
        assert!(matches!(
            store.load(),
            Err(BuzzboardError::UnsupportedVersion { found: 99, .. })
        ));
    }
}
