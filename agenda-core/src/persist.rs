//! Saving and loading the whole event list.
//!
//! The file is a small JSON document:
//!
//! ```json
//! {
//!   "version": 1,
//!   "events": [
//!     { "title": "Team Sync", "location": "Room 4", "category": "Meeting", "date_time": "2024-03-15T09:00:00" }
//!   ]
//! }
//! ```
//!
//! Writes are not atomic. A failed save can leave a truncated file behind.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AgendaError, AgendaResult};
use crate::event::Event;

/// Default name of the events file.
pub const DEFAULT_FILE_NAME: &str = "events.dat";

const FILE_VERSION: u32 = 1;

#[derive(Serialize)]
struct EventsFileRef<'a> {
    version: u32,
    events: &'a [Event],
}

#[derive(Deserialize)]
struct EventsFile {
    version: u32,
    events: Vec<Event>,
}

/// Write every event, in order, to `path`, replacing its previous content.
pub fn save(path: &Path, events: &[Event]) -> AgendaResult<()> {
    let document = EventsFileRef {
        version: FILE_VERSION,
        events,
    };
    let content = serde_json::to_string_pretty(&document)
        .map_err(|e| AgendaError::Format(e.to_string()))?;

    std::fs::write(path, content)?;

    info!(path = %path.display(), count = events.len(), "saved events");
    Ok(())
}

/// Read the events stored at `path`.
///
/// Fails with [`AgendaError::Io`] if the file cannot be read and with
/// [`AgendaError::Format`] if its content is not a valid event list.
pub fn load(path: &Path) -> AgendaResult<Vec<Event>> {
    let content = std::fs::read_to_string(path)?;
    let events = decode(&content)?;

    info!(path = %path.display(), count = events.len(), "loaded events");
    Ok(events)
}

fn decode(content: &str) -> AgendaResult<Vec<Event>> {
    let document: EventsFile =
        serde_json::from_str(content).map_err(|e| AgendaError::Format(e.to_string()))?;

    if document.version != FILE_VERSION {
        return Err(AgendaError::Format(format!(
            "unsupported file version {}",
            document.version
        )));
    }

    let mut seen = HashSet::new();
    for event in &document.events {
        event
            .validate()
            .map_err(|e| AgendaError::Format(format!("event '{}': {}", event.title(), e)))?;
        if !seen.insert(event.date_time()) {
            return Err(AgendaError::Format(format!(
                "two events start at {}",
                event.date_time()
            )));
        }
    }

    Ok(document.events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample() -> Vec<Event> {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        vec![
            Event::new("Team Sync", day.and_hms_opt(9, 0, 0).unwrap(), "Room 4", Category::Meeting),
            Event::new("Gym", day.and_hms_opt(18, 30, 0).unwrap(), "Downtown", Category::Personal),
            Event::new(
                "Release",
                day.and_hms_milli_opt(23, 59, 59, 250).unwrap(),
                "Remote",
                Category::Work,
            ),
        ]
    }

    #[test]
    fn save_then_load_preserves_events_and_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        save(&path, &sample()).unwrap();
        assert_eq!(load(&path).unwrap(), sample());
    }

    #[test]
    fn empty_list_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        save(&path, &[]).unwrap();
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        save(&path, &sample()).unwrap();
        save(&path, &sample()[..1]).unwrap();
        assert_eq!(load(&path).unwrap().len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = load(&dir.path().join("nope.dat"));
        assert!(matches!(result, Err(AgendaError::Io(_))));
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = save(&dir.path().join("missing/events.dat"), &sample());
        assert!(matches!(result, Err(AgendaError::Io(_))));
    }

    #[test]
    fn corrupt_content_is_format_error() {
        assert!(matches!(decode("not json"), Err(AgendaError::Format(_))));
        assert!(matches!(decode("[]"), Err(AgendaError::Format(_))));
        assert!(matches!(
            decode(r#"{"version": 1, "events": [{"title": 3}]}"#),
            Err(AgendaError::Format(_))
        ));
    }

    #[test]
    fn unknown_category_is_format_error() {
        let content = r#"{"version": 1, "events": [
            {"title": "A", "location": "B", "category": "Holiday", "date_time": "2024-03-15T09:00:00"}
        ]}"#;
        assert!(matches!(decode(content), Err(AgendaError::Format(_))));
    }

    #[test]
    fn unsupported_version_is_format_error() {
        assert!(matches!(
            decode(r#"{"version": 2, "events": []}"#),
            Err(AgendaError::Format(_))
        ));
    }

    #[test]
    fn duplicate_timestamps_are_format_error() {
        let content = r#"{"version": 1, "events": [
            {"title": "A", "location": "B", "category": "Work", "date_time": "2024-03-15T09:00:00"},
            {"title": "C", "location": "D", "category": "Other", "date_time": "2024-03-15T09:00:00"}
        ]}"#;
        assert!(matches!(decode(content), Err(AgendaError::Format(_))));
    }

    #[test]
    fn blank_title_is_format_error() {
        let content = r#"{"version": 1, "events": [
            {"title": " ", "location": "B", "category": "Work", "date_time": "2024-03-15T09:00:00"}
        ]}"#;
        assert!(matches!(decode(content), Err(AgendaError::Format(_))));
    }
}
