//! The UI seam.
//!
//! The core never talks to a concrete surface; it drives whatever
//! implements [`View`]. The CLI provides a terminal implementation, and
//! tests substitute a recording mock.

use crate::editor::EventDraft;
use crate::error::BuzzboardResult;
use crate::event::EventRecord;
use crate::stats::EventStats;

pub trait View {
    /// Collect form values from the user, optionally prefilled (edit mode).
    /// `Ok(None)` means the form was dismissed without submitting.
    fn read_draft(&mut self, prefill: Option<&EventDraft>) -> BuzzboardResult<Option<EventDraft>>;

    /// Project the visible subset and the current stats. An empty slice
    /// means the empty-state indicator should be shown instead of a table.
    fn render_list(&mut self, events: &[&EventRecord], stats: &EventStats);

    /// Ask whether the staged deletion should go ahead.
    fn confirm_delete(&mut self, event: &EventRecord) -> BuzzboardResult<bool>;

    /// Transient acknowledgement of a completed mutation. Calls are
    /// independent; nothing is queued or coalesced.
    fn notify(&mut self, message: &str);
}
