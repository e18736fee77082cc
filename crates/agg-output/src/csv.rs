//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `records.csv`        — `frame,agent_id,state,x,y`
//! - `tick_summaries.csv` — `frame,wandering,joining,still,leaving,transitions`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentRecordRow, OutputResult, TickSummaryRow};

pub const RECORD_HEADER: [&str; 5] = ["frame", "agent_id", "state", "x", "y"];

pub const SUMMARY_HEADER: [&str; 6] =
    ["frame", "wandering", "joining", "still", "leaving", "transitions"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    records:   Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut records = Writer::from_path(dir.join("records.csv"))?;
        records.write_record(RECORD_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self {
            records,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_records(&mut self, rows: &[AgentRecordRow]) -> OutputResult<()> {
        for row in rows {
            self.records.write_record(&[
                row.frame.to_string(),
                row.agent_id.to_string(),
                row.state.as_str().to_owned(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.frame.to_string(),
            row.wandering.to_string(),
            row.joining.to_string(),
            row.still.to_string(),
            row.leaving.to_string(),
            row.transitions.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.records.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
