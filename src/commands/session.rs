//! Interactive session: the form, table, search and save/load controls in one
//! prompt loop, with reminders polled in the background.

use agenda_core::config::AgendaConfig;
use agenda_core::{App, Category, EventForm, SearchField};
use anyhow::Result;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::notify;
use crate::render::{Render, pluralize, render_table};

#[derive(Clone, Copy)]
enum Action {
    Add,
    ShowAll,
    Search,
    Save,
    Load,
    Quit,
}

impl Action {
    const ALL: [Action; 6] = [
        Action::Add,
        Action::ShowAll,
        Action::Search,
        Action::Save,
        Action::Load,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::Add => "Add event",
            Action::ShowAll => "Show all",
            Action::Search => "Search",
            Action::Save => "Save",
            Action::Load => "Load",
            Action::Quit => "Quit",
        }
    }
}

pub async fn run(app: &App, config: &AgendaConfig) -> Result<()> {
    let reminders = config.poller()?.spawn(app.store(), notify::from_config(config));

    println!("{}", "Event Scheduler".bold());
    println!(
        "{}",
        format!("Events file: {}", app.data_path().display()).dimmed()
    );

    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();

    loop {
        println!();
        let selection = Select::new()
            .with_prompt("  What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        let outcome = match Action::ALL[selection] {
            Action::Add => add(app).await,
            Action::ShowAll => {
                println!("{}", render_table(&app.events().await));
                Ok(())
            }
            Action::Search => search(app).await,
            Action::Save => save(app).await,
            Action::Load => load(app).await,
            Action::Quit => break,
        };

        // Nothing the user does here ends the session
        if let Err(e) = outcome {
            eprintln!("  {}", e.to_string().red());
        }
    }

    reminders.abort();
    Ok(())
}

/// Collect a fresh form and insert it.
async fn add(app: &App) -> Result<()> {
    let title = prompt("  Title")?;
    let date = prompt("  Date (dd-MM-yyyy)")?;
    let time = prompt("  Time (HH:mm)")?;
    let location = prompt("  Location")?;

    let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
    let category = Category::ALL[Select::new()
        .with_prompt("  Category")
        .items(&names)
        .default(0)
        .interact()?];

    let event = app
        .add(EventForm {
            title,
            date,
            time,
            location,
            category,
        })
        .await?;

    println!("  {} {}", "Added:".green(), event.render());
    Ok(())
}

async fn search(app: &App) -> Result<()> {
    let fields: Vec<String> = SearchField::ALL.iter().map(|f| f.to_string()).collect();
    let field = SearchField::ALL[Select::new()
        .with_prompt("  Search by")
        .items(&fields)
        .default(0)
        .interact()?];

    let keyword = prompt("  Keyword")?;
    if keyword.trim().is_empty() {
        return Ok(());
    }

    println!("{}", render_table(&app.search(field, &keyword).await));
    Ok(())
}

async fn save(app: &App) -> Result<()> {
    match app.save().await {
        Ok(count) => {
            println!(
                "  {}",
                format!("Events saved. ({} {})", count, pluralize("event", count)).green()
            );
            Ok(())
        }
        Err(e) => anyhow::bail!("Failed to save events: {}", e),
    }
}

async fn load(app: &App) -> Result<()> {
    match app.load().await {
        Ok(count) => {
            println!(
                "  {}",
                format!("Events loaded. ({} {})", count, pluralize("event", count)).green()
            );
            println!("{}", render_table(&app.events().await));
            Ok(())
        }
        Err(e) => anyhow::bail!("Failed to load events: {}", e),
    }
}

/// Free-text prompt. Empty answers are allowed so validation happens in one place.
fn prompt(label: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?)
}
