//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `records.parquet`
//! - `tick_summaries.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float32Builder, StringBuilder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{AgentRecordRow, OutputResult, TickSummaryRow};

fn record_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("frame",    DataType::UInt64,  false),
        Field::new("agent_id", DataType::UInt32,  false),
        Field::new("state",    DataType::Utf8,    false),
        Field::new("x",        DataType::Float32, false),
        Field::new("y",        DataType::Float32, false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("frame",       DataType::UInt64, false),
        Field::new("wandering",   DataType::UInt64, false),
        Field::new("joining",     DataType::UInt64, false),
        Field::new("still",       DataType::UInt64, false),
        Field::new("leaving",     DataType::UInt64, false),
        Field::new("transitions", DataType::UInt64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes simulation output to two Parquet files.
///
/// Summaries are buffered and written as a single batch by `finish()`, which
/// **must** be called: files written without it have no footer and cannot be
/// opened by Parquet readers.
pub struct ParquetWriter {
    records:        Option<ArrowWriter<File>>,
    summaries:      Option<ArrowWriter<File>>,
    record_schema:  Arc<Schema>,
    summary_schema: Arc<Schema>,
    pending:        Vec<TickSummaryRow>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let record_schema = record_schema();
        let summary_schema = summary_schema();

        let records = ArrowWriter::try_new(
            File::create(dir.join("records.parquet"))?,
            Arc::clone(&record_schema),
            Some(snappy_props()),
        )?;

        let summaries = ArrowWriter::try_new(
            File::create(dir.join("tick_summaries.parquet"))?,
            Arc::clone(&summary_schema),
            Some(snappy_props()),
        )?;

        Ok(Self {
            records: Some(records),
            summaries: Some(summaries),
            record_schema,
            summary_schema,
            pending: Vec::new(),
        })
    }

    fn flush_summaries(&mut self) -> OutputResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.summaries.as_mut() else {
            return Ok(());
        };

        let mut frames      = UInt64Builder::new();
        let mut wandering   = UInt64Builder::new();
        let mut joining     = UInt64Builder::new();
        let mut still       = UInt64Builder::new();
        let mut leaving     = UInt64Builder::new();
        let mut transitions = UInt64Builder::new();

        for row in self.pending.drain(..) {
            frames.append_value(row.frame);
            wandering.append_value(row.wandering);
            joining.append_value(row.joining);
            still.append_value(row.still);
            leaving.append_value(row.leaving);
            transitions.append_value(row.transitions);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summary_schema),
            vec![
                Arc::new(frames.finish()),
                Arc::new(wandering.finish()),
                Arc::new(joining.finish()),
                Arc::new(still.finish()),
                Arc::new(leaving.finish()),
                Arc::new(transitions.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }
}

impl OutputWriter for ParquetWriter {
    fn write_records(&mut self, rows: &[AgentRecordRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.records.as_mut() else {
            return Ok(());
        };

        let mut frames    = UInt64Builder::new();
        let mut agent_ids = UInt32Builder::new();
        let mut states    = StringBuilder::new();
        let mut xs        = Float32Builder::new();
        let mut ys        = Float32Builder::new();

        for row in rows {
            frames.append_value(row.frame);
            agent_ids.append_value(row.agent_id);
            states.append_value(row.state.as_str());
            xs.append_value(row.x);
            ys.append_value(row.y);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.record_schema),
            vec![
                Arc::new(frames.finish()),
                Arc::new(agent_ids.finish()),
                Arc::new(states.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.pending.push(*row);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.flush_summaries()?;
        if let Some(w) = self.records.take() {
            w.close()?;
        }
        if let Some(w) = self.summaries.take() {
            w.close()?;
        }
        Ok(())
    }
}
