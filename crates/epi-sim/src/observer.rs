//! Statistics sink trait for progress reporting and data collection.

use crate::{CityReport, DailySnapshot, SimError};

/// Callbacks invoked by [`Sim`][crate::Sim] as a run progresses.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl StatisticsSink for Progress {
///     fn on_day_end(&mut self, snapshot: &DailySnapshot) {
///         println!("{}: {} infected", snapshot.day, snapshot.total_current_infected);
///     }
/// }
/// ```
pub trait StatisticsSink {
    /// Called once per simulated day, after the infected counts are final.
    fn on_day_end(&mut self, _snapshot: &DailySnapshot) {}

    /// Called once after the last day with the final per-city counters.
    fn on_run_end(&mut self, _cities: &[CityReport]) {}

    /// Called instead of `on_run_end` when the run aborts.  Days already
    /// passed to `on_day_end` are not part of any outcome.
    fn on_run_failed(&mut self, _error: &SimError) {}
}

/// A [`StatisticsSink`] that does nothing.
pub struct NoopSink;

impl StatisticsSink for NoopSink {}

/// Keeps everything it receives in memory.  Handy for tests.
#[derive(Default)]
pub struct RecordingSink {
    pub days:    Vec<DailySnapshot>,
    pub finals:  Option<Vec<CityReport>>,
    pub failure: Option<String>,
}

impl StatisticsSink for RecordingSink {
    fn on_day_end(&mut self, snapshot: &DailySnapshot) {
        self.days.push(snapshot.clone());
    }

    fn on_run_end(&mut self, cities: &[CityReport]) {
        self.finals = Some(cities.to_vec());
    }

    fn on_run_failed(&mut self, error: &SimError) {
        self.failure = Some(error.to_string());
    }
}
