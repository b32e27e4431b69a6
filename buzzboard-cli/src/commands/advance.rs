use anyhow::Result;
use buzzboard_core::event::EventId;

use crate::view::TerminalView;

pub fn run(id: EventId) -> Result<()> {
    let mut app = super::load_app()?;
    let mut view = TerminalView::new();

    app.advance_status(id, &mut view)?;
    Ok(())
}
