pub mod add;
pub mod list;
pub mod search;
pub mod session;
pub mod watch;
