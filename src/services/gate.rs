//! Once-per-day display gate.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{Local, NaiveDate};

use crate::models::Feed;

#[derive(Debug, Default)]
struct GateState {
    last_date: Option<NaiveDate>,
    shown: HashMap<Feed, bool>,
}

impl GateState {
    /// Forget every flag when the calendar date has moved.
    fn roll_to(&mut self, today: NaiveDate) {
        if self.last_date != Some(today) {
            if let Some(previous) = self.last_date {
                log::debug!("Day rolled over from {} to {}", previous, today);
            }
            self.shown.clear();
            self.last_date = Some(today);
        }
    }
}

/// Tracks which feeds have been shown on the current local date.
#[derive(Debug, Default)]
pub struct DailyGate {
    state: Mutex<GateState>,
}

impl DailyGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `feed` still needs showing today.
    pub fn should_show(&self, feed: Feed) -> bool {
        self.should_show_on(feed, Local::now().date_naive())
    }

    /// As [`should_show`](Self::should_show) for an explicit date.
    pub fn should_show_on(&self, feed: Feed, today: NaiveDate) -> bool {
        let mut state = self.lock();
        state.roll_to(today);
        !state.shown.get(&feed).copied().unwrap_or(false)
    }

    /// Record that `feed` was shown today.
    pub fn mark_shown(&self, feed: Feed) {
        self.mark_shown_on(feed, Local::now().date_naive());
    }

    pub fn mark_shown_on(&self, feed: Feed, today: NaiveDate) {
        let mut state = self.lock();
        state.roll_to(today);
        state.shown.insert(feed, true);
    }

    /// Clear the date and every flag.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.last_date = None;
        state.shown.clear();
    }

    fn lock(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_shows_once_per_day() {
        let gate = DailyGate::new();
        assert!(gate.should_show_on(Feed::Primary, day(1)));
        gate.mark_shown_on(Feed::Primary, day(1));
        assert!(!gate.should_show_on(Feed::Primary, day(1)));
        assert!(gate.should_show_on(Feed::Medieval, day(1)));
    }

    #[test]
    fn test_rollover_resets_every_feed() {
        let gate = DailyGate::new();
        for feed in Feed::ALL {
            gate.mark_shown_on(feed, day(1));
        }
        assert!(Feed::ALL.iter().all(|f| !gate.should_show_on(*f, day(1))));

        assert!(gate.should_show_on(Feed::Custom, day(2)));
        assert!(gate.should_show_on(Feed::Primary, day(2)));
        assert!(gate.should_show_on(Feed::Medieval, day(2)));
    }

    #[test]
    fn test_reset() {
        let gate = DailyGate::new();
        gate.mark_shown_on(Feed::Medieval, day(5));
        gate.reset();
        assert!(gate.should_show_on(Feed::Medieval, day(5)));
    }

    #[test]
    fn test_recovers_from_poisoned_lock() {
        let gate = Arc::new(DailyGate::new());
        gate.mark_shown_on(Feed::Primary, day(1));

        let poisoner = gate.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.state.lock().unwrap();
            panic!("poison the gate");
        })
        .join();

        assert!(gate.state.is_poisoned());
        assert!(!gate.should_show_on(Feed::Primary, day(1)));
    }

    #[test]
    fn test_concurrent_marks() {
        let gate = Arc::new(DailyGate::new());
        let handles: Vec<_> = Feed::ALL
            .into_iter()
            .map(|feed| {
                let gate = gate.clone();
                std::thread::spawn(move || gate.mark_shown_on(feed, day(9)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(Feed::ALL.iter().all(|f| !gate.should_show_on(*f, day(9))));
    }
}
