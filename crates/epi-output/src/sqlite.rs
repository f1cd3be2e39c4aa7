//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `daily_summaries`, `city_days`, and `city_final`.

use std::path::Path;

use rusqlite::Connection;

use crate::{CityDayRow, CityFinalRow, DailySummaryRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes run statistics to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS daily_summaries (
                 day              INTEGER PRIMARY KEY,
                 current_infected INTEGER NOT NULL,
                 new_infections   INTEGER NOT NULL,
                 susceptible      INTEGER NOT NULL,
                 immune           INTEGER NOT NULL,
                 travelers        INTEGER NOT NULL,
                 returned_home    INTEGER NOT NULL,
                 healed           INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS city_days (
                 day                 INTEGER NOT NULL,
                 city                INTEGER NOT NULL,
                 population          INTEGER NOT NULL,
                 present             INTEGER NOT NULL,
                 current_infected    INTEGER NOT NULL,
                 new_infections      INTEGER NOT NULL,
                 cumulative_infected INTEGER NOT NULL,
                 PRIMARY KEY (day, city)
             );
             CREATE TABLE IF NOT EXISTS city_final (
                 city                INTEGER PRIMARY KEY,
                 degree              INTEGER NOT NULL,
                 population          INTEGER NOT NULL,
                 cumulative_infected INTEGER NOT NULL,
                 current_infected    INTEGER NOT NULL,
                 attack_rate         REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_daily_summary(&mut self, row: &DailySummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO daily_summaries \
             (day, current_infected, new_infections, susceptible, immune, \
              travelers, returned_home, healed) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                row.day,
                row.current_infected,
                row.new_infections,
                row.susceptible,
                row.immune,
                row.travelers,
                row.returned_home,
                row.healed,
            ],
        )?;
        Ok(())
    }

    fn write_city_days(&mut self, rows: &[CityDayRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO city_days \
                 (day, city, population, present, current_infected, new_infections, \
                  cumulative_infected) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.day,
                    row.city,
                    row.population,
                    row.present,
                    row.current_infected,
                    row.new_infections,
                    row.cumulative_infected,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_city_finals(&mut self, rows: &[CityFinalRow]) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO city_final \
                 (city, degree, population, cumulative_infected, current_infected, attack_rate) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.city,
                    row.degree,
                    row.population,
                    row.cumulative_infected,
                    row.current_infected,
                    row.attack_rate,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
