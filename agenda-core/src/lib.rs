//! Core of the agenda event scheduler.
//!
//! - `event` and `store` hold the event records and the in-memory list
//! - `format` converts form text to date-times and back
//! - `search` filters the list by title, date or category
//! - `reminder` polls for events starting soon
//! - `persist` saves and loads the list as a single file
//! - `app` ties them together as one application-state object

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod persist;
pub mod reminder;
pub mod search;
pub mod store;

pub use app::App;
pub use error::{AgendaError, AgendaResult};
pub use event::{Category, Event, EventForm};
pub use search::SearchField;
