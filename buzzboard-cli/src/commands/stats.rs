use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let app = super::load_app()?;
    let stats = app.stats();

    println!("Total Events  {}", stats.total.to_string().bold());
    println!("Upcoming      {}", stats.upcoming.to_string().cyan());
    println!("Ongoing       {}", stats.ongoing.to_string().green());
    println!("Completed     {}", stats.completed.to_string().dimmed());
    Ok(())
}
