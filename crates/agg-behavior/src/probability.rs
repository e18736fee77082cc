//! Join and leave probabilities as functions of the neighbour count.
//!
//! ```text
//! join(n)  = 0.03 + 0.48 · (1 − e^(−factor_a · n))     ∈ [0.03, 0.51)
//! leave(n) = e^(−factor_b · n)                          ∈ (0, 1]
//! ```
//!
//! Joining gets more likely the more neighbours an agent sees, saturating
//! at 0.51; leaving is certain with no neighbours and decays with density.

use agg_core::AgentRng;
use tracing::warn;

use crate::{BehaviorError, BehaviorResult};

/// Probability of joining with no neighbours at all.
pub const JOIN_BASE: f64 = 0.03;

/// Extra join probability reachable as the neighbour count grows.
pub const JOIN_SPAN: f64 = 0.48;

/// Probability that a wandering agent starts joining, given `n` neighbours.
///
/// # Errors
///
/// [`BehaviorError::InvalidNeighborCount`] if `n < 0`.
pub fn join_probability(n: i64, factor_a: f64) -> BehaviorResult<f64> {
    let n = checked_count(n)?;
    let p = JOIN_BASE + JOIN_SPAN * (1.0 - (-factor_a * n).exp());
    Ok(clamp_probability(p, "join"))
}

/// Probability that a still agent leaves, given `n` neighbours.
///
/// Exactly `1.0` when `n == 0`.
///
/// # Errors
///
/// [`BehaviorError::InvalidNeighborCount`] if `n < 0`.
pub fn leave_probability(n: i64, factor_b: f64) -> BehaviorResult<f64> {
    let n = checked_count(n)?;
    let p = (-factor_b * n).exp();
    Ok(clamp_probability(p, "leave"))
}

/// One Bernoulli trial: a single uniform draw `u ∈ [0, 1)`, success iff
/// `u < p`.
#[inline]
pub fn bernoulli(p: f64, rng: &mut AgentRng) -> bool {
    rng.uniform() < p
}

fn checked_count(n: i64) -> BehaviorResult<f64> {
    if n < 0 {
        return Err(BehaviorError::InvalidNeighborCount(n));
    }
    Ok(n as f64)
}

/// Pin a computed probability into `[0, 1]`.  Out-of-range values (and NaN,
/// which maps to 0) are reported but never fatal.
fn clamp_probability(p: f64, which: &'static str) -> f64 {
    if (0.0..=1.0).contains(&p) {
        return p;
    }
    let clamped = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    warn!(which, raw = p, clamped, "probability outside [0, 1]; clamped");
    clamped
}

#[cfg(test)]
pub(crate) fn clamp_for_test(p: f64) -> f64 {
    clamp_probability(p, "test")
}
