//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CityDayRow, CityFinalRow, DailySummaryRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// [`OutputSink`][crate::OutputSink] stores the first error instead of
/// propagating it; retrieve it with [`take_error`][crate::OutputSink::take_error].
pub trait OutputWriter {
    fn write_daily_summary(&mut self, row: &DailySummaryRow) -> OutputResult<()>;

    /// Write one day's rows for every city.
    fn write_city_days(&mut self, rows: &[CityDayRow]) -> OutputResult<()>;

    fn write_city_finals(&mut self, rows: &[CityFinalRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
