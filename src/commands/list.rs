use agenda_core::App;
use anyhow::{Context, Result};

use crate::render::render_table;

pub async fn run(app: &App) -> Result<()> {
    app.load_if_exists()
        .await
        .with_context(|| format!("Failed to load events from {}", app.data_path().display()))?;

    println!("{}", render_table(&app.events().await));

    Ok(())
}
