//! Terminal rendering for agenda types.
//!
//! Extension traits that add colored output to agenda-core types using owo_colors.

use agenda_core::app::{COLUMNS, Row};
use agenda_core::{App, Category, Event};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Category {
    fn render(&self) -> String {
        let name = self.name();
        match self {
            Category::Meeting => name.cyan().to_string(),
            Category::Personal => name.magenta().to_string(),
            Category::Work => name.blue().to_string(),
            Category::Other => name.dimmed().to_string(),
        }
    }
}

impl Render for Event {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.title().bold(),
            format!("{} {}", self.formatted_date(), self.formatted_time()).dimmed(),
            self.category().render()
        )
    }
}

/// Render events as a table with Title, Date, Time, Location and Category columns.
pub fn render_table(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found".dimmed().to_string();
    }

    let rows = App::rows(events);
    let widths = column_widths(&rows);

    let mut lines = Vec::with_capacity(rows.len() + 1);

    let header: Vec<String> = COLUMNS
        .iter()
        .zip(widths)
        .map(|(name, width)| pad(name, width))
        .collect();
    lines.push(header.join("  ").trim_end().bold().to_string());

    for (row, event) in rows.iter().zip(events) {
        let mut cells: Vec<String> = row
            .iter()
            .zip(widths)
            .take(COLUMNS.len() - 1)
            .map(|(cell, width)| pad(cell, width))
            .collect();
        // Category goes last and unpadded so its color codes don't skew alignment
        cells.push(event.category().render());
        lines.push(cells.join("  "));
    }

    lines.join("\n")
}

fn column_widths(rows: &[Row]) -> [usize; 5] {
    let mut widths = COLUMNS.map(|name| name.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
