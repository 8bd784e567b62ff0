use agenda_core::reminder::ReminderPoller;
use agenda_core::{AgendaError, App, Category, EventForm, SearchField};
use chrono::{NaiveDate, TimeDelta};
use tempfile::TempDir;

fn form(title: &str, date: &str, time: &str, category: Category) -> EventForm {
    EventForm {
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: "Main office".to_string(),
        category,
    }
}

#[tokio::test]
async fn add_search_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.dat");
    let app = App::new(&path);

    app.add(form("Team Sync", "15-03-2024", "09:00", Category::Meeting)).await.unwrap();
    app.add(form("team lunch", "15-03-2024", "12:30", Category::Personal)).await.unwrap();
    app.add(form("Budget", "15-03-2025", "14:00", Category::Work)).await.unwrap();

    let err = app
        .add(form("Other thing", "15-03-2024", "09:00", Category::Other))
        .await
        .unwrap_err();
    assert!(matches!(err, AgendaError::DuplicateTimestamp(_)));

    let by_title: Vec<_> = app
        .search(SearchField::Title, "TEAM")
        .await
        .into_iter()
        .map(|e| e.title().to_string())
        .collect();
    assert_eq!(by_title, ["Team Sync", "team lunch"]);

    let by_date = app.search(SearchField::Date, "15-03-2024").await;
    assert_eq!(by_date.len(), 2);

    assert_eq!(app.save().await.unwrap(), 3);

    let reopened = App::new(&path);
    assert_eq!(reopened.load().await.unwrap(), 3);
    assert_eq!(reopened.events().await, app.events().await);
}

#[tokio::test]
async fn load_replaces_rather_than_merges() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.dat");

    let first = App::new(&path);
    first.add(form("Saved", "01-01-2024", "08:00", Category::Work)).await.unwrap();
    first.save().await.unwrap();

    let second = App::new(&path);
    second.add(form("Unsaved", "02-01-2024", "08:00", Category::Work)).await.unwrap();
    second.load().await.unwrap();

    let titles: Vec<_> = second.events().await.into_iter().map(|e| e.title().to_string()).collect();
    assert_eq!(titles, ["Saved"]);
}

#[tokio::test]
async fn poller_reads_app_store() {
    let app = App::new("unused.dat");
    app.add(form("Review", "15-03-2024", "09:30", Category::Meeting)).await.unwrap();

    let now = NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let poller = ReminderPoller::new(std::time::Duration::from_secs(60), TimeDelta::hours(1));

    struct Print;
    impl agenda_core::reminder::Notifier for Print {
        fn notify(&self, reminder: &agenda_core::reminder::Reminder) {
            assert_eq!(reminder.message(), "Upcoming Event Reminder: Review at 09:30");
        }
    }

    let store = app.store();
    let store = store.read().await;
    assert_eq!(poller.tick(&store, now, &Print), 1);
    assert_eq!(poller.tick(&store, now + TimeDelta::minutes(45), &Print), 0);
}
