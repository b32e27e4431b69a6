use anyhow::Result;
use buzzboard_core::event::EventId;
use buzzboard_core::view::View;

use crate::view::TerminalView;

pub fn run(id: EventId) -> Result<()> {
    let mut app = super::load_app()?;
    let mut view = TerminalView::new();

    let draft = app.open_edit(id)?;
    match view.read_draft(Some(&draft))? {
        Some(updated) => app.submit(updated, &mut view)?,
        None => app.close_editor(),
    }
    Ok(())
}
