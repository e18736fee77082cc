//! `agg-output` — per-tick record writers for the rust_aggregation workspace.
//!
//! Backends, the first two always available, the rest behind Cargo features:
//!
//! | Feature   | Backend     | Files created                                   |
//! |-----------|-------------|-------------------------------------------------|
//! | *(none)*  | CSV         | `records.csv`, `tick_summaries.csv`             |
//! | *(none)*  | Memory      | —                                               |
//! | `sqlite`  | SQLite      | `output.db`                                     |
//! | `parquet` | Parquet     | `records.parquet`, `tick_summaries.parquet`     |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `agg_sim::SimObserver`.
//!
//! # Record schema
//!
//! One row per agent per recorded tick:
//!
//! ```text
//! frame,agent_id,state,x,y
//! 0,0,wandering,412.7,88.1
//! ```
//!
//! `state` is the lowercase label of the state *before* that tick's update.
//! Labels parse back with `AgentState::from_str`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use agg_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod memory;
pub mod observer;
pub mod rows;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use memory::MemoryWriter;
pub use observer::SimOutputObserver;
pub use rows::{AgentRecordRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
