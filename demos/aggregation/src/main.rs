//! aggregation — reference experiment for the rust_aggregation workspace.
//!
//! Fifty agents random-walk in an 800 × 800 window for 1 200 ticks.  Each
//! counts its neighbours within 100 units, joins clusters with a probability
//! that grows with density, freezes once its jittered join timer runs out,
//! and re-evaluates leaving every D ticks.
//!
//! ```text
//! cargo run --release -p aggregation                 # defaults
//! cargo run --release -p aggregation -- run.json     # overrides
//! RUST_LOG=debug cargo run -p aggregation            # per-tick summaries
//! ```
//!
//! `run.json` may set any subset of:
//!
//! ```json
//! {
//!   "aggregation": { "d": 20, "factor_a": 2.6, "factor_b": 2.2 },
//!   "run":         { "agent_count": 50, "total_ticks": 1200, "seed": 1 },
//!   "walk":        { "speed": 1.0, "max_turn": 0.3 },
//!   "output_dir":  "output/aggregation"
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use agg_behavior::{AgentState, AggregationBehavior};
use agg_core::{AggregationConfig, RunConfig, Tick};
use agg_mobility::RandomWalk;
use agg_output::{CsvWriter, OutputWriter, SimOutputObserver};
use agg_sim::{AgentRecord, SimBuilder, SimObserver, TickSummary};

// ── Configuration ─────────────────────────────────────────────────────────────

const PROGRESS_INTERVAL_TICKS: u64 = 200;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    aggregation: AggregationConfig,
    run:         RunConfig,
    walk:        WalkConfig,
    output_dir:  PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            aggregation: AggregationConfig::default(),
            run:         RunConfig::default(),
            walk:        WalkConfig::default(),
            output_dir:  PathBuf::from("output/aggregation"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct WalkConfig {
    speed:    f32,
    max_turn: f32,
}

impl Default for WalkConfig {
    fn default() -> Self {
        let walk = RandomWalk::default();
        Self { speed: walk.speed, max_turn: walk.max_turn }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    match path {
        None => Ok(DemoConfig::default()),
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("reading config {}", p.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", p.display()))
        }
    }
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Wraps the output observer and logs the population mix periodically.
struct ProgressObserver<W: OutputWriter> {
    inner:        SimOutputObserver<W>,
    record_rows:  usize,
    summary_rows: usize,
    last:         Option<TickSummary>,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, record_rows: 0, summary_rows: 0, last: None }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_records(&mut self, frame: Tick, records: &[AgentRecord]) {
        self.record_rows += records.len();
        self.inner.on_records(frame, records);
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.summary_rows += 1;
        self.last = Some(*summary);
        if tick.is_multiple_of(PROGRESS_INTERVAL_TICKS) {
            info!(
                tick = tick.0,
                wandering = summary.count(AgentState::Wandering),
                joining = summary.count(AgentState::Joining),
                still = summary.count(AgentState::Still),
                leaving = summary.count(AgentState::Leaving),
                "progress"
            );
        }
        self.inner.on_tick_end(tick, summary);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

/// Fails if any row was dropped during the run.
fn check_output<W: OutputWriter>(obs: &mut SimOutputObserver<W>) -> Result<()> {
    match obs.take_error() {
        Some(e) => Err(anyhow::Error::new(e).context("writing simulation output")),
        None => Ok(()),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Configuration.
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let cfg = load_config(path.as_deref())?;
    info!(
        agents = cfg.run.agent_count,
        ticks = cfg.run.total_ticks,
        d = cfg.aggregation.d,
        factor_a = cfg.aggregation.factor_a,
        factor_b = cfg.aggregation.factor_b,
        radius = cfg.aggregation.sensing_radius,
        "configuration loaded"
    );

    // 2. Build sim.
    let behavior = AggregationBehavior::new(&cfg.aggregation)?;
    let walk = RandomWalk { speed: cfg.walk.speed, max_turn: cfg.walk.max_turn };
    let mut sim = SimBuilder::new(cfg.aggregation, cfg.run, behavior, walk).build()?;

    // 3. Set up output.
    std::fs::create_dir_all(&cfg.output_dir)
        .with_context(|| format!("creating {}", cfg.output_dir.display()))?;
    let writer = CsvWriter::new(&cfg.output_dir)?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    check_output(&mut obs.inner)?;

    // 5. Summary.
    info!(
        seconds = elapsed.as_secs_f64(),
        seed = sim.state.seed,
        records = obs.record_rows,
        summaries = obs.summary_rows,
        dir = %cfg.output_dir.display(),
        "simulation complete"
    );
    if let Some(last) = obs.last {
        info!(
            still = last.count(AgentState::Still),
            of = last.total(),
            "agents still at the final tick"
        );
    }

    Ok(())
}
