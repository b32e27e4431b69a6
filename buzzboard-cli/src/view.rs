//! Terminal implementation of the core view seam.
//!
//! Prompts stand in for the modal form, a y/n confirmation for the delete
//! dialog, and plain colored lines for the notification toasts.

use buzzboard_core::editor::EventDraft;
use buzzboard_core::error::{BuzzboardError, BuzzboardResult};
use buzzboard_core::event::{Capacity, EventRecord, EventStatus};
use buzzboard_core::stats::EventStats;
use buzzboard_core::view::View;
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;

use crate::datetime;
use crate::render::{self, Render};

/// Field values supplied as CLI flags. Each one short-circuits its prompt
/// in the next `read_draft`.
#[derive(Default)]
pub struct FieldPresets {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub capacity: Option<String>,
    pub status: Option<EventStatus>,
}

#[derive(Default)]
pub struct TerminalView {
    presets: FieldPresets,
}

impl TerminalView {
    pub fn new() -> TerminalView {
        TerminalView::default()
    }

    pub fn with_presets(presets: FieldPresets) -> TerminalView {
        TerminalView { presets }
    }
}

impl View for TerminalView {
    fn read_draft(&mut self, prefill: Option<&EventDraft>) -> BuzzboardResult<Option<EventDraft>> {
        let presets = std::mem::take(&mut self.presets);

        let name = text_field("  Name", presets.name, prefill.map(|d| d.name.as_str()))?;
        let date = parsed_field(
            "  Date",
            presets.date,
            prefill.map(|d| d.date.to_string()),
            |s| datetime::parse_date(s),
        )?;
        let time = parsed_field(
            "  Time",
            presets.time,
            prefill.map(|d| d.time.format("%H:%M").to_string()),
            |s| datetime::parse_time(s),
        )?;
        let location = text_field(
            "  Location",
            presets.location,
            prefill.map(|d| d.location.as_str()),
        )?;
        let description = optional_field(
            "  Description (skip)",
            presets.description,
            prefill.and_then(|d| d.description.as_deref()),
        )?;
        let capacity = parsed_field(
            "  Capacity (blank for unlimited)",
            presets.capacity,
            prefill.map(|d| d.capacity.to_string()),
            parse_capacity,
        )?;
        let status = match presets.status {
            Some(status) => status,
            None => select_status(prefill.map(|d| d.status))?,
        };

        Ok(Some(EventDraft {
            name,
            date,
            time,
            location,
            description,
            capacity,
            status,
        }))
    }

    fn render_list(&mut self, events: &[&EventRecord], stats: &EventStats) {
        if events.is_empty() {
            println!("{}", "No events found".dimmed());
        } else {
            println!("{}", render::render_table(events));
        }
        println!();
        println!("{}", stats.render());
    }

    fn confirm_delete(&mut self, event: &EventRecord) -> BuzzboardResult<bool> {
        println!("{}", event.render());
        Confirm::new()
            .with_prompt(format!("Delete \"{}\"?", event.name))
            .default(false)
            .interact()
            .map_err(prompt_err)
    }

    fn notify(&mut self, message: &str) {
        println!("{}", format!("✓ {message}").green());
    }
}

fn prompt_err(err: dialoguer::Error) -> BuzzboardError {
    BuzzboardError::Io(std::io::Error::other(err))
}

fn text_field(
    prompt: &str,
    preset: Option<String>,
    prefill: Option<&str>,
) -> BuzzboardResult<String> {
    if let Some(value) = preset {
        return Ok(value);
    }
    match prefill {
        Some(current) => Input::<String>::new()
            .with_prompt(prompt)
            .default(current.to_string())
            .interact_text(),
        None => Input::<String>::new().with_prompt(prompt).interact_text(),
    }
    .map_err(prompt_err)
}

/// An empty answer means "no value".
fn optional_field(
    prompt: &str,
    preset: Option<String>,
    prefill: Option<&str>,
) -> BuzzboardResult<Option<String>> {
    let value = match preset {
        Some(value) => value,
        None => {
            let current = prefill.unwrap_or_default();
            Input::<String>::new()
                .with_prompt(prompt)
                .default(current.to_string())
                .show_default(!current.is_empty())
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?
        }
    };

    let value = value.trim().to_string();
    Ok(if value.is_empty() { None } else { Some(value) })
}

/// Prompt with retry on parse errors; a preset that fails to parse is a
/// hard error instead (there is nobody to re-ask).
fn parsed_field<T>(
    prompt: &str,
    preset: Option<String>,
    prefill: Option<String>,
    parse: impl Fn(&str) -> anyhow::Result<T>,
) -> BuzzboardResult<T> {
    if let Some(raw) = preset {
        return parse(&raw).map_err(|e| BuzzboardError::InvalidEvent(e.to_string()));
    }

    loop {
        let input = match &prefill {
            Some(current) => Input::<String>::new()
                .with_prompt(prompt)
                .default(current.clone()),
            None => Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true),
        };
        let raw = input.interact_text().map_err(prompt_err)?;
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

fn select_status(current: Option<EventStatus>) -> BuzzboardResult<EventStatus> {
    let labels: Vec<&str> = EventStatus::CYCLE.iter().map(|s| s.as_str()).collect();
    let default_index = current
        .and_then(|status| EventStatus::CYCLE.iter().position(|s| *s == status))
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("  Status")
        .items(&labels)
        .default(default_index)
        .interact()
        .map_err(prompt_err)?;

    Ok(EventStatus::CYCLE[choice])
}

/// Blank or "unlimited" means no limit; otherwise a positive headcount.
pub fn parse_capacity(input: &str) -> anyhow::Result<Capacity> {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case("unlimited") {
        return Ok(Capacity::Unlimited);
    }
    match input.parse::<u32>() {
        Ok(n) if n > 0 => Ok(Capacity::Limited(n)),
        _ => anyhow::bail!("Capacity must be a positive number (leave blank for unlimited)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_input_shapes() {
        assert_eq!(parse_capacity("").unwrap(), Capacity::Unlimited);
        assert_eq!(parse_capacity("  ").unwrap(), Capacity::Unlimited);
        assert_eq!(parse_capacity("Unlimited").unwrap(), Capacity::Unlimited);
        assert_eq!(parse_capacity("150").unwrap(), Capacity::Limited(150));
        assert!(parse_capacity("0").is_err());
        assert!(parse_capacity("-5").is_err());
        assert!(parse_capacity("lots").is_err());
    }
}
