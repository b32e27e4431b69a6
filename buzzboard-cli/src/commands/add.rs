use anyhow::Result;
use buzzboard_core::event::EventStatus;
use buzzboard_core::view::View;

use crate::view::{FieldPresets, TerminalView};

pub fn run(
    name: Option<String>,
    date: Option<String>,
    time: Option<String>,
    location: Option<String>,
    description: Option<String>,
    capacity: Option<String>,
    status: Option<EventStatus>,
) -> Result<()> {
    let mut app = super::load_app()?;
    let mut view = TerminalView::with_presets(FieldPresets {
        name,
        date,
        time,
        location,
        description,
        capacity,
        status,
    });

    app.open_add();
    if let Some(draft) = view.read_draft(None)? {
        app.submit(draft, &mut view)?;
    }
    Ok(())
}
