//! Property search form (pure state transitions).
//!
//! There is no backend. A submission waits for the configured delay and then
//! reports a random result count through the notification center.

use crate::model::NotificationKind;
use crate::state::notification::NotificationCenter;
use rand::Rng;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default time a simulated search takes.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(2000);

/// Range the simulated result count is drawn from.
pub const RESULT_COUNT_RANGE: RangeInclusive<u32> = 10..=59;

pub const MISSING_LOCATION_MESSAGE: &str = "Please enter a location to search";
pub const SEARCHING_MESSAGE: &str = "Searching exclusive properties...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Searching { location: String, ready_at: Instant },
}

/// What a submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Location was blank; a warning was shown and the field should take focus.
    MissingLocation,
    /// Simulated search started.
    Started,
    /// A search is already running; the button is disabled.
    Busy,
}

#[derive(Debug, Clone)]
pub struct SearchForm {
    status: SearchStatus,
    delay: Duration,
}

impl SearchForm {
    pub fn new(delay: Duration) -> Self {
        Self {
            status: SearchStatus::Idle,
            delay,
        }
    }

    /// Submit the form with the current field value.
    pub fn submit(
        &mut self,
        location: &str,
        now: Instant,
        notifications: &mut NotificationCenter,
    ) -> SubmitOutcome {
        if self.is_searching() {
            debug!("Submit ignored while a search is running");
            return SubmitOutcome::Busy;
        }

        let location = location.trim();
        if location.is_empty() {
            notifications.show(MISSING_LOCATION_MESSAGE, NotificationKind::Warning, now);
            return SubmitOutcome::MissingLocation;
        }

        info!(location = %location, "Search submitted");
        notifications.show(SEARCHING_MESSAGE, NotificationKind::Success, now);
        self.status = SearchStatus::Searching {
            location: location.to_string(),
            ready_at: now + self.delay,
        };
        SubmitOutcome::Started
    }

    /// Finish a running search once its delay has elapsed.
    ///
    /// Returns the reported result count when the search completes.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        now: Instant,
        rng: &mut R,
        notifications: &mut NotificationCenter,
    ) -> Option<u32> {
        let location = match &self.status {
            SearchStatus::Searching { location, ready_at } if now >= *ready_at => location.clone(),
            _ => return None,
        };

        let count = rng.random_range(RESULT_COUNT_RANGE);
        info!(location = %location, count, "Search completed");
        notifications.show(
            format!("Found {count} exclusive properties in {location}"),
            NotificationKind::Success,
            now,
        );
        self.status = SearchStatus::Idle;
        Some(count)
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.status, SearchStatus::Searching { .. })
    }
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DELAY)
    }
}
