//! Terminal rendering for BuzzBoard types.
//!
//! Extension traits that add colored output to core types using
//! owo_colors, plus the event table the `list` view prints.

use buzzboard_core::event::{Capacity, EventRecord, EventStatus};
use buzzboard_core::stats::EventStats;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventStatus {
    fn render(&self) -> String {
        match self {
            EventStatus::ToBeAnnounced => self.as_str().magenta().to_string(),
            EventStatus::Upcoming => self.as_str().cyan().to_string(),
            EventStatus::Ongoing => self.as_str().green().to_string(),
            EventStatus::Completed => self.as_str().dimmed().to_string(),
        }
    }
}

impl Render for EventStats {
    fn render(&self) -> String {
        format!(
            "{} total · {} upcoming · {} ongoing · {} completed",
            self.total,
            self.upcoming.to_string().cyan(),
            self.ongoing.to_string().green(),
            self.completed.to_string().dimmed(),
        )
    }
}

impl Render for EventRecord {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.name.bold(),
            render_when(self),
            self.status.render()
        )
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn render_when(event: &EventRecord) -> String {
    format!("{} {}", format_date(event.date), event.time.format("%H:%M"))
}

/// Registrations over capacity, or just registrations when unlimited.
fn render_seats(event: &EventRecord) -> String {
    match event.capacity {
        Capacity::Limited(cap) => format!("{}/{}", event.registrations, cap),
        Capacity::Unlimited => event.registrations.to_string(),
    }
}

/// Render the visible events as an aligned table. Status cells are
/// colorized after padding so ANSI codes don't skew the columns.
pub fn render_table(events: &[&EventRecord]) -> String {
    let header = ["ID", "NAME", "WHEN", "LOCATION", "STATUS", "SEATS"];

    let rows: Vec<[String; 6]> = events
        .iter()
        .map(|e| {
            [
                e.id.to_string(),
                e.name.clone(),
                render_when(e),
                e.location.clone(),
                e.status.as_str().to_string(),
                render_seats(e),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::new();
    lines.push(
        header
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .dimmed()
            .to_string(),
    );

    for (row, event) in rows.iter().zip(events) {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let padded = format!("{:<width$}", cell, width = widths[i]);
                if i == 4 {
                    colorize_status(event.status, &padded)
                } else {
                    padded
                }
            })
            .collect();
        lines.push(cells.join("  "));
    }

    lines.join("\n")
}

fn colorize_status(status: EventStatus, text: &str) -> String {
    match status {
        EventStatus::ToBeAnnounced => text.magenta().to_string(),
        EventStatus::Upcoming => text.cyan().to_string(),
        EventStatus::Ongoing => text.green().to_string(),
        EventStatus::Completed => text.dimmed().to_string(),
    }
}
