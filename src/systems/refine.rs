//! Local search: apply the single best improving pairwise exchange until none
//! is left or the iteration budget runs out. Never accepts a worsening move.
//!
//! Cost: each iteration scores every allowed exchange between every pair of
//! teams, O(T² · P²) candidates at O(T) each (T teams of P players). That is
//! nothing at tens of participants; pools in the hundreds would want a
//! restricted candidate list instead of the full scan.

use tracing::trace;

use crate::partition::{Partition, Swap};
use crate::refine_det;
use crate::roster::Participant;
use crate::systems::sdk::{score_with, KeeperRetention, Outcome, SwapRule};

#[derive(Clone, Copy, Debug)]
pub struct Limits {
    pub max_iters: usize,
    /// An exchange must beat the best delta so far by more than this.
    pub epsilon: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_iters: 400, epsilon: 1e-9 }
    }
}

pub fn hill_climb(pool: &[Participant], partition: Partition) -> Outcome {
    hill_climb_ext(pool, partition, Limits::default(), &KeeperRetention)
}

pub fn hill_climb_ext(
    pool: &[Participant],
    mut partition: Partition,
    limits: Limits,
    rule: &dyn SwapRule,
) -> Outcome {
    let progress = refine_det(
        &mut partition,
        |part| match best_swap(pool, part, limits.epsilon, rule) {
            Some((swap, delta)) => {
                part.apply(swap);
                trace!(?swap, delta, "refine: applied exchange");
                true
            }
            None => false,
        },
        limits.max_iters,
    );

    let score = partition.score(pool);
    Outcome {
        partition,
        score,
        iters: progress.iters,
        changes: progress.improved,
        converged: progress.converged,
    }
}

/// Steepest improving exchange, or `None` at a local optimum.
/// Candidates are scored from the two changed team means only; state is untouched.
pub fn best_swap(
    pool: &[Participant],
    part: &Partition,
    epsilon: f64,
    rule: &dyn SwapRule,
) -> Option<(Swap, f64)> {
    let strengths = part.strengths(pool);
    let base = crate::mechanics::variance(&strengths);
    let mut scratch = Vec::with_capacity(strengths.len());

    let mut best = None;
    let mut best_delta = 0.0;
    for a in 0..part.len() {
        for b in (a + 1)..part.len() {
            let (la, lb) = (part.team(a).len() as f64, part.team(b).len() as f64);
            for i in 0..part.team(a).len() {
                for j in 0..part.team(b).len() {
                    let ra = pool[part.member(a, i)].rating;
                    let rb = pool[part.member(b, j)].rating;
                    if ra == rb {
                        continue;
                    }
                    let swap = Swap { a, i, b, j };
                    if !rule.allows(pool, part, swap) {
                        continue;
                    }
                    let sa = strengths[a] + (rb - ra) / la;
                    let sb = strengths[b] + (ra - rb) / lb;
                    let delta = base - score_with(&strengths, &mut scratch, (a, sa), (b, sb));
                    if delta > best_delta + epsilon {
                        best_delta = delta;
                        best = Some(swap);
                    }
                }
            }
        }
    }
    best.map(|s| (s, best_delta))
}
