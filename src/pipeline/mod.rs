//! Pipeline entry points for showing words.
//!
//! - `run_daily`: Fetch every due feed once per day and queue it for display

pub mod daily;
pub mod sink;

pub use daily::{DailyOutcome, run_daily, run_daily_on};
pub use sink::{ConsoleSink, MessageSink, Notification};
