//! The event form: a field-for-field snapshot of one event being created
//! or edited, decoupled from the identity and bookkeeping fields the form
//! never touches.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{BuzzboardError, BuzzboardResult};
use crate::event::{Capacity, EventId, EventRecord, EventStatus};

/// The editable fields of an event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub description: Option<String>,
    pub capacity: Capacity,
    pub status: EventStatus,
}

impl EventDraft {
    /// Populate a draft from an existing record (edit mode).
    pub fn from_record(record: &EventRecord) -> EventDraft {
        EventDraft {
            name: record.name.clone(),
            date: record.date,
            time: record.time,
            location: record.location.clone(),
            description: record.description.clone(),
            capacity: record.capacity,
            status: record.status,
        }
    }

    pub fn validate(&self) -> BuzzboardResult<()> {
        if self.name.trim().is_empty() {
            return Err(BuzzboardError::InvalidEvent("Event name is required".into()));
        }
        if self.location.trim().is_empty() {
            return Err(BuzzboardError::InvalidEvent(
                "Event location is required".into(),
            ));
        }
        if self.capacity == Capacity::Limited(0) {
            return Err(BuzzboardError::InvalidEvent(
                "Capacity must be a positive number".into(),
            ));
        }
        Ok(())
    }

    /// Merge the draft into an existing record, preserving its identity,
    /// registration count and creation date.
    pub fn apply_to(&self, record: &mut EventRecord) {
        record.name = self.name.clone();
        record.date = self.date;
        record.time = self.time;
        record.location = self.location.clone();
        record.description = self.description.clone();
        record.capacity = self.capacity;
        record.status = self.status;
    }

    /// Build a brand-new record from the draft.
    pub fn into_record(self, id: EventId, created_at: NaiveDate) -> EventRecord {
        EventRecord {
            id,
            name: self.name,
            date: self.date,
            time: self.time,
            location: self.location,
            description: self.description,
            capacity: self.capacity,
            status: self.status,
            registrations: 0,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_draft() -> EventDraft {
        EventDraft {
            name: "Demo Day".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            location: "Hall A".to_string(),
            description: None,
            capacity: Capacity::Unlimited,
            status: EventStatus::Upcoming,
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut draft = make_draft();
        draft.name = "   ".to_string();
        assert!(matches!(
            draft.validate(),
            Err(BuzzboardError::InvalidEvent(_))
        ));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut draft = make_draft();
        draft.capacity = Capacity::Limited(0);
        assert!(draft.validate().is_err());
        draft.capacity = Capacity::Limited(1);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn apply_to_preserves_identity_fields() {
        let mut record = make_draft().into_record(42, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        record.registrations = 17;

        let mut edited = make_draft();
        edited.name = "Demo Day (rescheduled)".to_string();
        edited.capacity = Capacity::Limited(80);
        edited.apply_to(&mut record);

        assert_eq!(record.name, "Demo Day (rescheduled)");
        assert_eq!(record.capacity, Capacity::Limited(80));
        assert_eq!(record.id, 42);
        assert_eq!(record.registrations, 17);
        assert_eq!(record.created_at, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn new_records_start_with_zero_registrations() {
        let record = make_draft().into_record(7, NaiveDate::from_ymd_opt(2025, 11, 30).unwrap());
        assert_eq!(record.registrations, 0);
        assert_eq!(record.id, 7);
    }

    #[test]
    fn from_record_round_trips_the_form_fields() {
        let record = make_draft().into_record(1, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(EventDraft::from_record(&record), make_draft());
    }
}
