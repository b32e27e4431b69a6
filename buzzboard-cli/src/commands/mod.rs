pub mod add;
pub mod advance;
pub mod delete;
pub mod edit;
pub mod list;
pub mod login;
pub mod stats;

use anyhow::Result;
use buzzboard_core::app::App;
use buzzboard_core::config::BuzzboardConfig;
use buzzboard_core::error::BuzzboardError;
use buzzboard_core::store::EventStore;

/// Load config and the event collection (seeding the slot on first run).
pub fn load_app() -> Result<App> {
    let config = BuzzboardConfig::load()?;
    let store = EventStore::open(&config);

    match App::load(store) {
        Ok(app) => Ok(app),
        Err(BuzzboardError::CorruptStore { path, reason }) => anyhow::bail!(
            "Event store at {} is corrupted: {reason}\n\n\
            Move the file aside to start fresh with the demo events.",
            path.display()
        ),
        Err(e) => Err(e.into()),
    }
}
