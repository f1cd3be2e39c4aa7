//! `OutputSink<W>`: bridges `StatisticsSink` to an `OutputWriter`.

use log::warn;

use epi_sim::{CityReport, DailySnapshot, SimError, StatisticsSink};

use crate::row::{CityDayRow, CityFinalRow, DailySummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`StatisticsSink`] that writes daily summaries, per-city daily rows,
/// and final per-city counters to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `StatisticsSink`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct OutputSink<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> OutputSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> StatisticsSink for OutputSink<W> {
    fn on_day_end(&mut self, snapshot: &DailySnapshot) {
        let result = self.writer.write_daily_summary(&DailySummaryRow::from(snapshot));
        self.store_err(result);

        let rows: Vec<CityDayRow> = snapshot
            .cities
            .iter()
            .map(|c| CityDayRow::new(snapshot.day.0, c))
            .collect();
        let result = self.writer.write_city_days(&rows);
        self.store_err(result);
    }

    fn on_run_end(&mut self, cities: &[CityReport]) {
        let rows: Vec<CityFinalRow> = cities.iter().map(CityFinalRow::from).collect();
        let result = self.writer.write_city_finals(&rows);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }

    fn on_run_failed(&mut self, error: &SimError) {
        warn!("run failed, closing output without final city rows: {error}");
        let result = self.writer.finish();
        self.store_err(result);
    }
}
