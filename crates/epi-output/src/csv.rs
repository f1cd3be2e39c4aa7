//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `daily_summaries.csv`
//! - `city_days.csv`
//! - `city_final.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{CityDayRow, CityFinalRow, DailySummaryRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes run statistics to three CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    city_days: Writer<File>,
    finals:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("daily_summaries.csv"))?;
        summaries.write_record([
            "day", "current_infected", "new_infections", "susceptible", "immune",
            "travelers", "returned_home", "healed",
        ])?;

        let mut city_days = Writer::from_path(dir.join("city_days.csv"))?;
        city_days.write_record([
            "day", "city", "population", "present", "current_infected",
            "new_infections", "cumulative_infected",
        ])?;

        let mut finals = Writer::from_path(dir.join("city_final.csv"))?;
        finals.write_record([
            "city", "degree", "population", "cumulative_infected", "current_infected",
            "attack_rate",
        ])?;

        Ok(Self { summaries, city_days, finals, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_daily_summary(&mut self, row: &DailySummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.day.to_string(),
            row.current_infected.to_string(),
            row.new_infections.to_string(),
            row.susceptible.to_string(),
            row.immune.to_string(),
            row.travelers.to_string(),
            row.returned_home.to_string(),
            row.healed.to_string(),
        ])?;
        Ok(())
    }

    fn write_city_days(&mut self, rows: &[CityDayRow]) -> OutputResult<()> {
        for row in rows {
            self.city_days.write_record(&[
                row.day.to_string(),
                row.city.to_string(),
                row.population.to_string(),
                row.present.to_string(),
                row.current_infected.to_string(),
                row.new_infections.to_string(),
                row.cumulative_infected.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_city_finals(&mut self, rows: &[CityFinalRow]) -> OutputResult<()> {
        for row in rows {
            self.finals.write_record(&[
                row.city.to_string(),
                row.degree.to_string(),
                row.population.to_string(),
                row.cumulative_infected.to_string(),
                row.current_infected.to_string(),
                format!("{:.6}", row.attack_rate),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.city_days.flush()?;
        self.finals.flush()?;
        Ok(())
    }
}
