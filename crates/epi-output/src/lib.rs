//! `epi-output`: statistics writers for the rust_epi model.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                             |
//! |-----------|---------|-----------------------------------------------------------|
//! | *(none)*  | CSV     | `daily_summaries.csv`, `city_days.csv`, `city_final.csv`  |
//! | `sqlite`  | SQLite  | `output.db` with the same three tables                    |
//!
//! Both backends implement [`OutputWriter`] and are driven by [`OutputSink`],
//! which implements `epi_sim::StatisticsSink`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, OutputSink};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut sink = OutputSink::new(writer);
//! sim.run(&mut sink)?;
//! if let Some(e) = sink.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputSink;
pub use row::{CityDayRow, CityFinalRow, DailySummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
