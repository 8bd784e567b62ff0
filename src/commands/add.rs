use agenda_core::{App, Category, EventForm};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::render::Render;

/// Add one event to the events file.
pub async fn run(
    app: &App,
    title: String,
    date: String,
    time: String,
    location: String,
    category: Category,
) -> Result<()> {
    app.load_if_exists()
        .await
        .with_context(|| format!("Failed to load events from {}", app.data_path().display()))?;

    let event = app
        .add(EventForm {
            title,
            date,
            time,
            location,
            category,
        })
        .await?;

    app.save()
        .await
        .with_context(|| format!("Failed to save events to {}", app.data_path().display()))?;

    println!("{} {}", "Created:".green(), event.render());

    Ok(())
}
