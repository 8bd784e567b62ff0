//! Event records and the raw form input they are built from.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};
use crate::format;

/// Fixed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Meeting,
    Personal,
    Work,
    Other,
}

impl Category {
    /// All categories in the order they are offered on the form.
    pub const ALL: [Category; 4] = [
        Category::Meeting,
        Category::Personal,
        Category::Work,
        Category::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Meeting => "Meeting",
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown category '{}'. Expected one of: Meeting, Personal, Work, Other",
                    s
                )
            })
    }
}

/// A scheduled event. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    title: String,
    location: String,
    category: Category,
    date_time: NaiveDateTime,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        date_time: NaiveDateTime,
        location: impl Into<String>,
        category: Category,
    ) -> Self {
        Event {
            title: title.into(),
            location: location.into(),
            category,
            date_time,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    /// Date part as shown in the table (`dd-MM-yyyy`).
    pub fn formatted_date(&self) -> String {
        format::format_date(&self.date_time)
    }

    /// Time part as shown in the table (`HH:mm`).
    pub fn formatted_time(&self) -> String {
        format::format_time(&self.date_time)
    }

    /// Check the fields a stored event must always have.
    pub(crate) fn validate(&self) -> AgendaResult<()> {
        if self.title.trim().is_empty() {
            return Err(AgendaError::Validation("title"));
        }
        if self.location.trim().is_empty() {
            return Err(AgendaError::Validation("location"));
        }
        Ok(())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}, {})",
            self.title,
            self.formatted_date(),
            self.formatted_time(),
            self.location
        )
    }
}

/// Raw text collected by the add-event form.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub category: Category,
}

impl EventForm {
    /// Trim and validate the form, then parse its date and time.
    ///
    /// Empty fields are reported before any parsing happens.
    pub fn into_event(self) -> AgendaResult<Event> {
        let title = self.title.trim();
        let date = self.date.trim();
        let time = self.time.trim();
        let location = self.location.trim();

        for (field, value) in [
            ("title", title),
            ("date", date),
            ("time", time),
            ("location", location),
        ] {
            if value.is_empty() {
                return Err(AgendaError::Validation(field));
            }
        }

        let date_time = format::parse(date, time)?;

        Ok(Event::new(title, date_time, location, self.category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form() -> EventForm {
        EventForm {
            title: "  Team Sync ".to_string(),
            date: "15-03-2024".to_string(),
            time: "10:00".to_string(),
            location: " Room 4 ".to_string(),
            category: Category::Work,
        }
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("meeting".parse::<Category>().unwrap(), Category::Meeting);
        assert_eq!("WORK".parse::<Category>().unwrap(), Category::Work);
        assert_eq!(" Other ".parse::<Category>().unwrap(), Category::Other);
        assert!("holiday".parse::<Category>().is_err());
    }

    #[test]
    fn category_defaults_to_first_form_entry() {
        assert_eq!(Category::default(), Category::ALL[0]);
    }

    #[test]
    fn form_builds_trimmed_event() {
        let event = form().into_event().unwrap();
        assert_eq!(event.title(), "Team Sync");
        assert_eq!(event.location(), "Room 4");
        assert_eq!(event.category(), Category::Work);
        assert_eq!(
            event.date_time(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn form_rejects_blank_fields() {
        let mut f = form();
        f.title = "   ".to_string();
        assert!(matches!(f.into_event(), Err(AgendaError::Validation("title"))));

        let mut f = form();
        f.time = String::new();
        assert!(matches!(f.into_event(), Err(AgendaError::Validation("time"))));

        let mut f = form();
        f.location = String::new();
        assert!(matches!(f.into_event(), Err(AgendaError::Validation("location"))));
    }

    #[test]
    fn form_reports_parse_errors() {
        let mut f = form();
        f.date = "2024-03-15".to_string();
        assert!(matches!(f.into_event(), Err(AgendaError::Parse(_))));
    }

    #[test]
    fn display_matches_table_formatting() {
        let event = form().into_event().unwrap();
        assert_eq!(event.to_string(), "Team Sync (15-03-2024 10:00, Room 4)");
    }
}
