//! Application state and the mutation cycle.
//!
//! [`App`] owns the collection, the active filter, the editing id and the
//! staged deletion. Every mutation runs the same cycle: mutate the
//! in-memory list, persist the whole collection, then push the recomputed
//! visible subset and stats through the view and emit a notification.

use chrono::Local;

use crate::editor::EventDraft;
use crate::error::{BuzzboardError, BuzzboardResult};
use crate::event::{EventId, EventRecord, EventStatus, next_event_id};
use crate::filter::EventFilter;
use crate::stats::EventStats;
use crate::store::EventStore;
use crate::view::View;

pub struct App {
    store: EventStore,
    events: Vec<EventRecord>,
    filter: EventFilter,
    editing: Option<EventId>,
    pending_delete: Option<EventId>,
}

impl App {
    /// Load the collection from the store (seeding it if absent) and start
    /// with an empty filter, nothing being edited, nothing staged.
    pub fn load(store: EventStore) -> BuzzboardResult<App> {
        let events = store.load()?;
        Ok(App {
            store,
            events,
            filter: EventFilter::default(),
            editing: None,
            pending_delete: None,
        })
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn find(&self, id: EventId) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn filter(&self) -> &EventFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: EventFilter) {
        self.filter = filter;
    }

    /// The currently visible subset, per the active filter.
    pub fn visible(&self) -> Vec<&EventRecord> {
        self.filter.apply(&self.events)
    }

    pub fn stats(&self) -> EventStats {
        EventStats::collect(&self.events)
    }

    /// Recompute the visible subset and push it through the view.
    pub fn render(&self, view: &mut dyn View) {
        let visible = self.filter.apply(&self.events);
        let stats = EventStats::collect(&self.events);
        view.render_list(&visible, &stats);
    }

    // --- Editor ---

    pub fn editing(&self) -> Option<EventId> {
        self.editing
    }

    /// Enter add mode: nothing is being edited, the form starts blank.
    pub fn open_add(&mut self) {
        self.editing = None;
    }

    /// Enter edit mode for `id`, returning the prefilled draft.
    pub fn open_edit(&mut self, id: EventId) -> BuzzboardResult<EventDraft> {
        let record = self.find(id).ok_or(BuzzboardError::EventNotFound(id))?;
        let draft = EventDraft::from_record(record);
        self.editing = Some(id);
        Ok(draft)
    }

    pub fn close_editor(&mut self) {
        self.editing = None;
    }

    /// Submit the form. In edit mode the draft is merged into the existing
    /// record, preserving id, registrations and creation date; in add mode
    /// a new record is appended with a fresh id, zero registrations and
    /// today's creation date.
    pub fn submit(&mut self, draft: EventDraft, view: &mut dyn View) -> BuzzboardResult<()> {
        draft.validate()?;

        match self.editing {
            Some(id) => {
                let record = self
                    .events
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or(BuzzboardError::EventNotFound(id))?;
                draft.apply_to(record);
            }
            None => {
                let id = next_event_id(&self.events);
                let today = Local::now().date_naive();
                self.events.push(draft.into_record(id, today));
            }
        }

        self.editing = None;
        self.commit(view, "Event saved successfully!")
    }

    // --- Status cycler ---

    /// Overwrite a record's status, then persist, re-render and notify.
    pub fn set_status(
        &mut self,
        id: EventId,
        status: EventStatus,
        view: &mut dyn View,
    ) -> BuzzboardResult<()> {
        let record = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(BuzzboardError::EventNotFound(id))?;
        record.status = status;

        self.commit(view, &format!("Status changed to {status}"))
    }

    /// Advance a record's status exactly one step along the cycle.
    pub fn advance_status(
        &mut self,
        id: EventId,
        view: &mut dyn View,
    ) -> BuzzboardResult<EventStatus> {
        let next = self
            .find(id)
            .ok_or(BuzzboardError::EventNotFound(id))?
            .status
            .next();
        self.set_status(id, next, view)?;
        Ok(next)
    }

    // --- Deletion confirmer ---

    /// Stage a deletion, replacing any prior stage (last write wins).
    pub fn stage_delete(&mut self, id: EventId) -> BuzzboardResult<&EventRecord> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or(BuzzboardError::EventNotFound(id))?;
        self.pending_delete = Some(id);
        Ok(&self.events[index])
    }

    pub fn staged_delete(&self) -> Option<&EventRecord> {
        self.pending_delete.and_then(|id| self.find(id))
    }

    /// Remove the staged record and return to idle.
    pub fn confirm_delete(&mut self, view: &mut dyn View) -> BuzzboardResult<EventRecord> {
        let id = self.pending_delete.take().ok_or(BuzzboardError::NoStagedDeletion)?;
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or(BuzzboardError::EventNotFound(id))?;
        let removed = self.events.remove(index);

        self.commit(view, "Event deleted successfully!")?;
        Ok(removed)
    }

    /// Discard the staged deletion without touching the collection.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Persist, then re-render and notify. Shared tail of every mutation.
    fn commit(&mut self, view: &mut dyn View, message: &str) -> BuzzboardResult<()> {
        self.store.save(&self.events)?;
        self.render(view);
        view.notify(message);
        Ok(())
    }
}
