//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = root_seed XOR stream XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! `stream` separates independent uses of randomness for the same agent
//! (behavior draws vs. movement jitter) so one never perturbs the other.
//!
//! - Agents never share RNG state: draws are independent of update order and
//!   of how Rayon splits the agent slice across workers.
//! - A fixed root seed reproduces a run exactly.

use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::StandardNormal;

use crate::{AgentId, AggError, AggResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Return `seed` if one is configured, otherwise draw a fresh root seed from
/// the OS entropy source.
///
/// # Errors
///
/// [`AggError::RngUnavailable`] if no seed is configured and the OS source
/// cannot be read.  The run must not start in that case.
pub fn resolve_seed(seed: Option<u64>) -> AggResult<u64> {
    match seed {
        Some(s) => Ok(s),
        None => {
            let mut bytes = [0u8; 8];
            OsRng
                .try_fill_bytes(&mut bytes)
                .map_err(|e| AggError::RngUnavailable(e.to_string()))?;
            Ok(u64::from_le_bytes(bytes))
        }
    }
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Create one per agent at spawn; store in a parallel `Vec<AgentRng>` next to
/// the agents so the parallel step can zip them.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's root seed and an agent ID.
    pub fn new(root_seed: u64, agent: AgentId) -> Self {
        Self::with_stream(root_seed, agent, 0)
    }

    /// Seed an independent stream for `agent`.  Different `stream` values give
    /// unrelated sequences for the same agent.
    pub fn with_stream(root_seed: u64, agent: AgentId, stream: u64) -> Self {
        let seed = root_seed ^ stream ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// One uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// One draw from the standard normal distribution N(0, 1).
    #[inline]
    pub fn standard_normal(&mut self) -> f64 {
        self.0.sample(StandardNormal)
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global, single-threaded operations such as
/// choosing initial positions.
///
/// If parallel randomness is needed, derive children with [`SimRng::child`].
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
