//! Upcoming-event reminders.
//!
//! A [`ReminderPoller`] wakes up on a fixed period, scans the store and hands
//! every event starting inside the lookahead window to a [`Notifier`]. Nothing
//! is remembered between ticks, so an event inside the window is announced
//! again on every tick until it starts.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime, TimeDelta};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::event::Event;
use crate::format::format_time;
use crate::store::EventStore;

/// How often the store is scanned.
pub const DEFAULT_PERIOD_SECS: u64 = 60;

/// How far ahead an event counts as upcoming.
pub const DEFAULT_LOOKAHEAD_MINUTES: i64 = 60;

/// Longest allowed scan period (one day).
pub const MAX_PERIOD_SECS: u64 = 24 * 60 * 60;

/// Longest allowed lookahead window (one week).
pub const MAX_LOOKAHEAD_MINUTES: i64 = 7 * 24 * 60;

/// A single "event starting soon" alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub title: String,
    pub date_time: NaiveDateTime,
}

impl Reminder {
    pub fn message(&self) -> String {
        format!(
            "Upcoming Event Reminder: {} at {}",
            self.title,
            format_time(&self.date_time)
        )
    }
}

/// Surface that shows reminders to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, reminder: &Reminder);
}

/// Events starting strictly after `now` and strictly before `now + lookahead`.
pub fn due_reminders<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    now: NaiveDateTime,
    lookahead: TimeDelta,
) -> Vec<Reminder> {
    events
        .into_iter()
        .filter(|event| {
            let delta = event.date_time() - now;
            delta > TimeDelta::zero() && delta < lookahead
        })
        .map(|event| Reminder {
            title: event.title().to_string(),
            date_time: event.date_time(),
        })
        .collect()
}

fn raise(due: &[Reminder], notifier: &dyn Notifier) {
    for reminder in due {
        info!(title = %reminder.title, at = %reminder.date_time, "raising reminder");
        notifier.notify(reminder);
    }
}

#[derive(Debug, Clone)]
pub struct ReminderPoller {
    period: Duration,
    lookahead: TimeDelta,
}

impl Default for ReminderPoller {
    fn default() -> Self {
        ReminderPoller {
            period: Duration::from_secs(DEFAULT_PERIOD_SECS),
            lookahead: TimeDelta::minutes(DEFAULT_LOOKAHEAD_MINUTES),
        }
    }
}

impl ReminderPoller {
    /// The period is clamped to between one second and [`MAX_PERIOD_SECS`].
    pub fn new(period: Duration, lookahead: TimeDelta) -> Self {
        ReminderPoller {
            period: period.clamp(Duration::from_secs(1), Duration::from_secs(MAX_PERIOD_SECS)),
            lookahead,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn lookahead(&self) -> TimeDelta {
        self.lookahead
    }

    /// Run one scan at `now`. Returns how many reminders were raised.
    pub fn tick(&self, store: &EventStore, now: NaiveDateTime, notifier: &dyn Notifier) -> usize {
        let due = due_reminders(store.iter(), now, self.lookahead);
        raise(&due, notifier);
        due.len()
    }

    /// Scan the shared store every period, forever.
    ///
    /// The first scan happens one full period after the call. The read lock
    /// is held only while collecting due events, never while notifying.
    pub async fn run(self, store: Arc<RwLock<EventStore>>, notifier: Arc<dyn Notifier>) {
        let mut interval = time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            let now = Local::now().naive_local();
            let (due, events) = {
                let guard = store.read().await;
                (due_reminders(guard.iter(), now, self.lookahead), guard.len())
            };

            raise(&due, notifier.as_ref());
            debug!(events, raised = due.len(), "reminder scan finished");
        }
    }

    /// Start [`ReminderPoller::run`] as a background task.
    ///
    /// The task lives until the handle is aborted or the runtime shuts down.
    pub fn spawn(self, store: Arc<RwLock<EventStore>>, notifier: Arc<dyn Notifier>) -> JoinHandle<()> {
        tokio::spawn(self.run(store, notifier))
    }
}
