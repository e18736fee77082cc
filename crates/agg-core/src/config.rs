//! Run configuration.
//!
//! Two structs:
//!
//! - [`AggregationConfig`] — parameters of the behavioral rule (leave-check
//!   interval, probability curve factors, dwell times, sensing radius).
//! - [`RunConfig`] — everything else a run needs (population size, duration,
//!   seed, window, output cadence).
//!
//! Both are plain data, typically built in code or loaded from JSON by the
//! application (with the `serde` feature), and checked once with `validate`
//! before the first tick.

use crate::{AggError, AggResult, Bounds, Tick};

// ── AggregationConfig ─────────────────────────────────────────────────────────

/// Parameters of the aggregation rule.  Immutable for a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AggregationConfig {
    /// Leave-check interval: a still agent only considers leaving on ticks
    /// where `counter % d == 0`.
    pub d: u32,

    /// Steepness of the join-probability curve.
    pub factor_a: f64,

    /// Steepness of the leave-probability curve.
    pub factor_b: f64,

    /// Base dwell time in `Joining` before an agent becomes still.  Each agent
    /// adds its own Gaussian jitter at spawn.
    pub t_join: u32,

    /// Dwell time in `Leaving` before an agent wanders again.
    pub t_leave: u32,

    /// Agents closer than this distance count as neighbours.
    pub sensing_radius: f32,

    /// Standard deviation of the spawn-time jitter added to `t_join`.
    pub join_jitter_std: f64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            d:               20,
            factor_a:        2.6,
            factor_b:        2.2,
            t_join:          50,
            t_leave:         150,
            sensing_radius:  100.0,
            join_jitter_std: 1.0,
        }
    }
}

impl AggregationConfig {
    /// Reject non-positive or non-finite parameters.
    pub fn validate(&self) -> AggResult<()> {
        if self.d == 0 {
            return Err(AggError::InvalidConfig("D must be > 0".into()));
        }
        if !(self.factor_a.is_finite() && self.factor_a > 0.0) {
            return Err(AggError::InvalidConfig(format!(
                "factor_a must be a positive number, got {}",
                self.factor_a
            )));
        }
        if !(self.factor_b.is_finite() && self.factor_b > 0.0) {
            return Err(AggError::InvalidConfig(format!(
                "factor_b must be a positive number, got {}",
                self.factor_b
            )));
        }
        if self.t_join == 0 {
            return Err(AggError::InvalidConfig("t_join must be > 0".into()));
        }
        if self.t_leave == 0 {
            return Err(AggError::InvalidConfig("t_leave must be > 0".into()));
        }
        if !(self.sensing_radius.is_finite() && self.sensing_radius > 0.0) {
            return Err(AggError::InvalidConfig(format!(
                "sensing_radius must be a positive number, got {}",
                self.sensing_radius
            )));
        }
        if !(self.join_jitter_std.is_finite() && self.join_jitter_std >= 0.0) {
            return Err(AggError::InvalidConfig(format!(
                "join_jitter_std must be finite and >= 0, got {}",
                self.join_jitter_std
            )));
        }
        Ok(())
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RunConfig {
    /// Number of agents spawned at run start.
    pub agent_count: usize,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    /// `None` draws a root seed from OS entropy once at startup.
    pub seed: Option<u64>,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Record agents every N ticks.  1 = every tick; 0 = never.
    pub output_interval_ticks: u64,

    /// World rectangle agents move in.
    pub bounds: Bounds,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            agent_count:           50,
            total_ticks:           20 * 60,
            seed:                  Some(1),
            num_threads:           None,
            output_interval_ticks: 1,
            bounds:                Bounds::default(),
        }
    }
}

impl RunConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn validate(&self) -> AggResult<()> {
        let Bounds { width, height } = self.bounds;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(AggError::InvalidConfig(format!(
                "bounds must be positive, got {width} x {height}"
            )));
        }
        if self.num_threads == Some(0) {
            return Err(AggError::InvalidConfig("num_threads must be > 0".into()));
        }
        Ok(())
    }
}
