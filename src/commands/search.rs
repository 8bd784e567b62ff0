use agenda_core::{App, SearchField};
use anyhow::{Context, Result};

use crate::render::render_table;

pub async fn run(app: &App, field: SearchField, keyword: &str) -> Result<()> {
    if keyword.trim().is_empty() {
        anyhow::bail!("Enter a keyword to search for");
    }

    app.load_if_exists()
        .await
        .with_context(|| format!("Failed to load events from {}", app.data_path().display()))?;

    println!("{}", render_table(&app.search(field, keyword).await));

    Ok(())
}
