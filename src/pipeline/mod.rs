//! Pipeline entry points for both jobs.
//!
//! - `run_events`: Harvest pull-request creation events into one JSON file
//! - `run_mailer`: Spool one notification per maintainer of new distgits

pub mod events;
pub mod mailer;

pub use events::run_events;
pub use mailer::run_mailer;
