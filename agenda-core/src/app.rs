//! Application state shared by every front-end operation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::error::AgendaResult;
use crate::event::{Event, EventForm};
use crate::persist;
use crate::search::{self, SearchField};
use crate::store::EventStore;

/// One table row: title, date, time, location, category.
pub type Row = [String; 5];

pub const COLUMNS: [&str; 5] = ["Title", "Date", "Time", "Location", "Category"];

/// The running application: the event store plus the file it persists to.
///
/// The store sits behind a shared lock so a [`ReminderPoller`](crate::reminder::ReminderPoller)
/// can read it between user actions.
#[derive(Clone)]
pub struct App {
    store: Arc<RwLock<EventStore>>,
    data_path: PathBuf,
}

impl App {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        App {
            store: Arc::new(RwLock::new(EventStore::new())),
            data_path: data_path.into(),
        }
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Shared handle to the store, for the reminder poller.
    pub fn store(&self) -> Arc<RwLock<EventStore>> {
        Arc::clone(&self.store)
    }

    /// Validate and parse the form, then insert the resulting event.
    pub async fn add(&self, form: EventForm) -> AgendaResult<Event> {
        let event = form.into_event()?;
        self.store.write().await.insert(event.clone())?;
        Ok(event)
    }

    pub async fn events(&self) -> Vec<Event> {
        self.store.read().await.all().to_vec()
    }

    pub async fn search(&self, field: SearchField, keyword: &str) -> Vec<Event> {
        search::search(&*self.store.read().await, field, keyword)
    }

    /// Write the whole store to the data file. Returns the number of events saved.
    pub async fn save(&self) -> AgendaResult<usize> {
        let store = self.store.read().await;
        persist::save(&self.data_path, store.all())?;
        Ok(store.len())
    }

    /// Replace the store with the data file's content.
    ///
    /// On failure the store is left exactly as it was.
    pub async fn load(&self) -> AgendaResult<usize> {
        let events = persist::load(&self.data_path).inspect_err(|e| {
            warn!(path = %self.data_path.display(), error = %e, "load failed, keeping current events");
        })?;
        let count = events.len();
        self.store.write().await.replace_all(events);
        Ok(count)
    }

    /// Load the data file if there is one. A missing file leaves the store empty.
    pub async fn load_if_exists(&self) -> AgendaResult<usize> {
        if self.data_path.exists() {
            self.load().await
        } else {
            Ok(0)
        }
    }

    /// Render events as table rows.
    pub fn rows(events: &[Event]) -> Vec<Row> {
        events
            .iter()
            .map(|e| {
                [
                    e.title().to_string(),
                    e.formatted_date(),
                    e.formatted_time(),
                    e.location().to_string(),
                    e.category().to_string(),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AgendaError;
    use crate::event::Category;
    use tempfile::TempDir;

    fn form(title: &str, date: &str, time: &str) -> EventForm {
        EventForm {
            title: title.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            location: "HQ".to_string(),
            category: Category::Meeting,
        }
    }

    #[tokio::test]
    async fn add_rejects_without_mutating() {
        let dir = TempDir::new().unwrap();
        let app = App::new(dir.path().join("events.dat"));

        app.add(form("Sync", "15-03-2024", "09:00")).await.unwrap();

        assert!(matches!(
            app.add(form("", "15-03-2024", "10:00")).await,
            Err(AgendaError::Validation("title"))
        ));
        assert!(matches!(
            app.add(form("Bad", "15.03.2024", "10:00")).await,
            Err(AgendaError::Parse(_))
        ));
        assert!(matches!(
            app.add(form("Clash", "15-03-2024", "09:00")).await,
            Err(AgendaError::DuplicateTimestamp(_))
        ));

        assert_eq!(app.events().await.len(), 1);
    }

    #[tokio::test]
    async fn failed_load_keeps_store() {
        let dir = TempDir::new().unwrap();
        let app = App::new(dir.path().join("events.dat"));
        app.add(form("Sync", "15-03-2024", "09:00")).await.unwrap();

        assert!(matches!(app.load().await, Err(AgendaError::Io(_))));

        std::fs::write(app.data_path(), "{ garbage").unwrap();
        assert!(matches!(app.load().await, Err(AgendaError::Format(_))));

        let events = app.events().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title(), "Sync");
    }

    #[tokio::test]
    async fn load_if_exists_tolerates_missing_file() {
        let dir = TempDir::new().unwrap();
        let app = App::new(dir.path().join("events.dat"));
        assert_eq!(app.load_if_exists().await.unwrap(), 0);
    }

    #[test]
    fn rows_follow_column_order() {
        let event = form("Sync", "15-03-2024", "09:00").into_event().unwrap();
        assert_eq!(
            App::rows(&[event]),
            vec![[
                "Sync".to_string(),
                "15-03-2024".to_string(),
                "09:00".to_string(),
                "HQ".to_string(),
                "Meeting".to_string(),
            ]]
        );
    }
}
