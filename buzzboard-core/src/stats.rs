//! Derived dashboard statistics.

use crate::event::{EventRecord, EventStatus};

/// The stat-card counts shown above the event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventStats {
    pub total: usize,
    pub upcoming: usize,
    pub ongoing: usize,
    pub completed: usize,
}

impl EventStats {
    pub fn collect(events: &[EventRecord]) -> EventStats {
        let count =
            |status: EventStatus| events.iter().filter(|e| e.status == status).count();

        EventStats {
            total: events.len(),
            upcoming: count(EventStatus::Upcoming),
            ongoing: count(EventStatus::Ongoing),
            completed: count(EventStatus::Completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_events;

    #[test]
    fn counts_by_status() {
        let stats = EventStats::collect(&seed_events());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.upcoming, 1);
        assert_eq!(stats.ongoing, 1);
        assert_eq!(stats.completed, 0);
    }

    #[test]
    fn empty_collection_is_all_zeros() {
        assert_eq!(EventStats::collect(&[]), EventStats::default());
    }
}
