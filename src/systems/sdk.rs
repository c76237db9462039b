// src/systems/sdk.rs

//! # Systems SDK
//!
//! Shared protocol for the stages of the balancing pipeline. A *system* takes
//! one [`Partition`] of a participant pool and returns a (possibly) changed
//! partition plus its score. Three ship with the crate:
//!
//! - **seed**: greedy, capacity-aware construction from a shuffled order
//! - **refine**: steepest-improvement pairwise exchange until a local optimum
//! - **spice**: a bounded number of tolerance-accepted exchanges among each
//!   team's weakest members
//!
//! Systems are composed by a genre (see `genres::multi_start`), never by each
//! other.
//!
//! ## What this SDK gives you
//! - [`SwapRule`]: a veto on candidate exchanges. Every exchange-based system
//!   consults one before scoring a candidate, so constraints live in one place
//!   instead of being repeated in each search loop.
//! - [`KeeperRetention`]: the rule the pipeline runs with by default.
//! - [`Outcome`]: the standard return (partition, score, iters, changes, converged).
//!
//! ## Determinism
//! Systems take their randomness as `&mut impl RngCore`. Same source state in,
//! same partition out.

use crate::partition::{Partition, Swap};
use crate::roster::Participant;

/// Veto on a candidate exchange, evaluated before the exchange is scored.
pub trait SwapRule: Sync {
    fn allows(&self, pool: &[Participant], partition: &Partition, swap: Swap) -> bool;
}

/// A team never gives away its only dedicated goalkeeper.
///
/// The exchange is refused when member `i` is a dedicated keeper and team `a`
/// has no other one, or symmetrically for `j` and `b`. This holds even when
/// the incoming member is also a keeper.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeeperRetention;

impl SwapRule for KeeperRetention {
    fn allows(&self, pool: &[Participant], partition: &Partition, s: Swap) -> bool {
        let sole_keeper = |t: usize, slot: usize| {
            let member = partition.member(t, slot);
            pool[member].dedicated_keeper
                && !partition
                    .team(t)
                    .iter()
                    .enumerate()
                    .any(|(k, &m)| k != slot && pool[m].dedicated_keeper)
        };
        !(sole_keeper(s.a, s.i) || sole_keeper(s.b, s.j))
    }
}

/// Accepts everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unconstrained;

impl SwapRule for Unconstrained {
    fn allows(&self, _pool: &[Participant], _partition: &Partition, _swap: Swap) -> bool {
        true
    }
}

/// Generic result of one system pass.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub partition: Partition,
    pub score: f64,
    /// Loop iterations (refine) or tries (spice) spent.
    pub iters: usize,
    /// Exchanges actually applied.
    pub changes: usize,
    /// Stopped on its own condition rather than an exhausted budget.
    pub converged: bool,
}

/// Score of `strengths` with teams `a` and `b` replaced, without touching the input.
/// `scratch` is reused across calls to avoid an allocation per candidate.
#[inline]
pub(crate) fn score_with(strengths: &[f64], scratch: &mut Vec<f64>, a: (usize, f64), b: (usize, f64)) -> f64 {
    scratch.clear();
    scratch.extend_from_slice(strengths);
    scratch[a.0] = a.1;
    scratch[b.0] = b.1;
    crate::mechanics::variance(scratch)
}
