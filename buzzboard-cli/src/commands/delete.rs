use anyhow::Result;
use buzzboard_core::event::EventId;
use buzzboard_core::view::View;
use owo_colors::OwoColorize;

use crate::view::TerminalView;

pub fn run(id: EventId, force: bool) -> Result<()> {
    let mut app = super::load_app()?;
    let mut view = TerminalView::new();

    let confirmed = {
        let staged = app.stage_delete(id)?;
        force || view.confirm_delete(staged)?
    };

    if confirmed {
        app.confirm_delete(&mut view)?;
    } else {
        app.cancel_delete();
        println!("{}", "Cancelled".dimmed());
    }
    Ok(())
}
