// src/pipeline/daily.rs

//! Daily display run.
//!
//! Every enabled feed whose gate is still open is fetched concurrently.
//! Successes are queued on the sink and close the gate for the day;
//! failures leave it open so the next trigger tries again.

use chrono::{Local, NaiveDate};
use futures::future::join_all;

use crate::models::{Config, Feed};
use crate::pipeline::sink::{MessageSink, Notification};
use crate::services::{DailyGate, WordOfTheDayFetcher};

/// What a daily run did with each feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyOutcome {
    /// Fetched and queued
    pub shown: Vec<Feed>,
    /// Fetch failed; still pending for today
    pub failed: Vec<Feed>,
    /// Already shown today
    pub skipped: Vec<Feed>,
}

impl DailyOutcome {
    /// Whether nothing was attempted.
    pub fn is_idle(&self) -> bool {
        self.shown.is_empty() && self.failed.is_empty()
    }
}

/// Run the daily pipeline for the current local date.
pub async fn run_daily(
    config: &Config,
    fetcher: &WordOfTheDayFetcher,
    gate: &DailyGate,
    sink: &dyn MessageSink,
) -> DailyOutcome {
    run_daily_on(config, fetcher, gate, sink, Local::now().date_naive()).await
}

/// Run the daily pipeline as of `today`.
pub async fn run_daily_on(
    config: &Config,
    fetcher: &WordOfTheDayFetcher,
    gate: &DailyGate,
    sink: &dyn MessageSink,
    today: NaiveDate,
) -> DailyOutcome {
    let mut outcome = DailyOutcome::default();

    let mut due = Vec::new();
    for feed in config.enabled_feeds() {
        if gate.should_show_on(feed, today) {
            due.push(feed);
        } else {
            outcome.skipped.push(feed);
        }
    }
    if due.is_empty() {
        log::debug!("All enabled feeds already shown for {}", today);
        return outcome;
    }

    log::info!("Fetching {} feed(s) for {}", due.len(), today);
    let handles = due
        .iter()
        .map(|feed| fetcher.spawn(config.source_for(*feed)));
    let results = join_all(handles).await;

    for (feed, joined) in due.into_iter().zip(results) {
        let result = match joined {
            Ok(result) => result,
            Err(e) => {
                log::error!("{} task did not complete: {}", feed, e);
                outcome.failed.push(feed);
                continue;
            }
        };
        match result {
            Ok(word) => {
                sink.queue(Notification {
                    feed,
                    text: word.format(feed.label()),
                    color: config.feeds.message_color.clone(),
                });
                gate.mark_shown_on(feed, today);
                outcome.shown.push(feed);
            }
            // Already logged at the fetch boundary
            Err(_) => outcome.failed.push(feed),
        }
    }

    log::info!(
        "Daily run: {} shown, {} failed, {} skipped",
        outcome.shown.len(),
        outcome.failed.len(),
        outcome.skipped.len()
    );
    outcome
}
