use agenda_core::App;
use agenda_core::config::AgendaConfig;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::notify;
use crate::render::pluralize;

/// Raise reminders for the saved events until Ctrl-C.
pub async fn run(app: &App, config: &AgendaConfig) -> Result<()> {
    let count = app
        .load_if_exists()
        .await
        .with_context(|| format!("Failed to load events from {}", app.data_path().display()))?;

    let poller = config.poller()?;
    println!(
        "{}",
        format!(
            "Watching {} {} (checking every {}s, Ctrl-C to stop)",
            count,
            pluralize("event", count),
            poller.period().as_secs()
        )
        .dimmed()
    );

    let handle = poller.spawn(app.store(), notify::from_config(config));

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl-C")?;
    handle.abort();

    Ok(())
}
