//! Notification surfaces for reminders.

use std::sync::Arc;

use agenda_core::config::AgendaConfig;
use agenda_core::format::format_time;
use agenda_core::reminder::{Notifier, Reminder};
use dialoguer::console::Term;
use notify_rust::Notification;
use owo_colors::OwoColorize;
use tokio::runtime::Handle;
use tracing::warn;

/// Prints reminders to stdout.
///
/// The current line is cleared first so a reminder replaces a half-drawn
/// prompt instead of being written into it.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, reminder: &Reminder) {
        let term = Term::stdout();
        if term.is_term() {
            if let Err(e) = term.clear_line() {
                warn!(error = %e, "could not clear terminal line");
            }
        }
        if let Err(e) = term.write_line(&reminder_line(reminder)) {
            warn!(error = %e, "could not print reminder");
        }
    }
}

fn reminder_line(reminder: &Reminder) -> String {
    format!("⏰ {}", reminder.message().yellow().bold())
}

/// Shows reminders as desktop notifications.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, reminder: &Reminder) {
        let body = format!("{} at {}", reminder.title, format_time(&reminder.date_time));

        // The D-Bus call blocks, so keep it off the runtime's worker threads
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn_blocking(move || show_desktop(&body));
            }
            Err(_) => show_desktop(&body),
        }
    }
}

fn show_desktop(body: &str) {
    if let Err(e) = Notification::new()
        .appname("agenda")
        .summary("Upcoming Event Reminder")
        .body(body)
        .show()
    {
        warn!(error = %e, "could not show desktop notification");
    }
}

/// Forwards every reminder to each inner notifier in turn.
pub struct Fanout(Vec<Box<dyn Notifier>>);

impl Notifier for Fanout {
    fn notify(&self, reminder: &Reminder) {
        for notifier in &self.0 {
            notifier.notify(reminder);
        }
    }
}

/// Terminal notifications always, desktop ones when enabled in the config.
pub fn from_config(config: &AgendaConfig) -> Arc<dyn Notifier> {
    let mut notifiers: Vec<Box<dyn Notifier>> = vec![Box::new(TerminalNotifier)];
    if config.desktop_notifications {
        notifiers.push(Box::new(DesktopNotifier));
    }
    Arc::new(Fanout(notifiers))
}
