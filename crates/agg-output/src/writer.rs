//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentRecordRow, OutputResult, TickSummaryRow};

/// Trait implemented by CSV, memory, SQLite, and Parquet writers.
///
/// Errors are returned here, but [`SimOutputObserver`][crate::SimOutputObserver]
/// stores them because observer hooks cannot fail; retrieve them with
/// `take_error` after the run.
pub trait OutputWriter {
    /// Write every agent's record for one frame.
    fn write_records(&mut self, rows: &[AgentRecordRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
