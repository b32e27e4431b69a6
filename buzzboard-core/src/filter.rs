//! Deriving the visible subset of events.

use std::str::FromStr;

use crate::event::{EventRecord, EventStatus};

/// Status side of the filter: everything, or one specific status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EventStatus),
}

impl StatusFilter {
    pub fn matches(self, status: EventStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<EventStatus>().map(StatusFilter::Only)
    }
}

/// Free-text query plus status filter.
///
/// A record is visible when the query is empty or matches its name or
/// location (case-insensitively), and its status passes the status filter.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub query: String,
    pub status: StatusFilter,
}

impl EventFilter {
    pub fn matches(&self, event: &EventRecord) -> bool {
        let query = self.query.trim().to_lowercase();
        let matches_query = query.is_empty()
            || event.name.to_lowercase().contains(&query)
            || event.location.to_lowercase().contains(&query);

        matches_query && self.status.matches(event.status)
    }

    /// The visible subsequence, in the collection's own order. No sort.
    pub fn apply<'a>(&self, events: &'a [EventRecord]) -> Vec<&'a EventRecord> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}
