use anyhow::Result;
use buzzboard_core::filter::{EventFilter, StatusFilter};

use crate::view::TerminalView;

pub fn run(search: Option<String>, status: StatusFilter, json: bool) -> Result<()> {
    let mut app = super::load_app()?;
    app.set_filter(EventFilter {
        query: search.unwrap_or_default(),
        status,
    });

    if json {
        println!("{}", serde_json::to_string_pretty(&app.visible())?);
        return Ok(());
    }

    let mut view = TerminalView::new();
    app.render(&mut view);
    Ok(())
}
