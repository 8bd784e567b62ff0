//! Keyword search over the event store.

use std::fmt;
use std::str::FromStr;

use crate::event::Event;
use crate::store::EventStore;

/// Which part of an event a keyword is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Date,
    Category,
}

impl SearchField {
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Date, SearchField::Category];

    /// Whether `event` matches an already lower-cased, non-empty keyword.
    ///
    /// Title and category match on substrings, dates only on the exact
    /// `dd-MM-yyyy` text.
    fn matches(&self, event: &Event, keyword: &str) -> bool {
        match self {
            SearchField::Title => event.title().to_lowercase().contains(keyword),
            SearchField::Date => event.formatted_date().to_lowercase() == keyword,
            SearchField::Category => event.category().name().to_lowercase().contains(keyword),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchField::Title => "Title",
            SearchField::Date => "Date",
            SearchField::Category => "Category",
        };
        f.write_str(name)
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchField::Title),
            "date" => Ok(SearchField::Date),
            "category" => Ok(SearchField::Category),
            _ => Err(format!(
                "Unknown search field '{}'. Expected one of: title, date, category",
                s
            )),
        }
    }
}

/// Return the events matching `keyword` in `field`, in store order.
///
/// The keyword is trimmed and case-folded here. An empty keyword matches
/// everything.
pub fn search(store: &EventStore, field: SearchField, keyword: &str) -> Vec<Event> {
    let keyword = keyword.trim().to_lowercase();

    if keyword.is_empty() {
        return store.all().to_vec();
    }

    store
        .iter()
        .filter(|event| field.matches(event, &keyword))
        .cloned()
        .collect()
}
