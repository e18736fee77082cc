//! In-memory backend, for tests and for callers that post-process a run
//! without touching disk.

use crate::writer::OutputWriter;
use crate::{AgentRecordRow, OutputResult, TickSummaryRow};

#[derive(Debug, Default)]
pub struct MemoryWriter {
    pub records:   Vec<AgentRecordRow>,
    pub summaries: Vec<TickSummaryRow>,
    pub finished:  bool,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records of one frame, in agent order.
    pub fn frame(&self, frame: u64) -> impl Iterator<Item = &AgentRecordRow> + '_ {
        self.records.iter().filter(move |r| r.frame == frame)
    }
}

impl OutputWriter for MemoryWriter {
    fn write_records(&mut self, rows: &[AgentRecordRow]) -> OutputResult<()> {
        self.records.extend_from_slice(rows);
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.push(*row);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.finished = true;
        Ok(())
    }
}
