//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `agent_records` and `tick_summaries`.  States are stored as
//! their lowercase labels.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AgentRecordRow, OutputResult, TickSummaryRow};

/// Writes simulation output to an SQLite database.
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
             CREATE TABLE IF NOT EXISTS agent_records (
                 frame    INTEGER NOT NULL,
                 agent_id INTEGER NOT NULL,
                 state    TEXT    NOT NULL,
                 x        REAL    NOT NULL,
                 y        REAL    NOT NULL,
                 PRIMARY KEY (frame, agent_id)
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 frame       INTEGER PRIMARY KEY,
                 wandering   INTEGER NOT NULL,
                 joining     INTEGER NOT NULL,
                 still       INTEGER NOT NULL,
                 leaving     INTEGER NOT NULL,
                 transitions INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_records(&mut self, rows: &[AgentRecordRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_records (frame, agent_id, state, x, y) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.frame,
                    row.agent_id,
                    row.state.as_str(),
                    row.x as f64,
                    row.y as f64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (frame, wandering, joining, still, leaving, transitions) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.frame,
                row.wandering,
                row.joining,
                row.still,
                row.leaving,
                row.transitions,
            ],
        )?;
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
