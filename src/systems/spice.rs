//! Shuffle pass ("spice"): a fixed number of random exchanges between the
//! weakest members of two random teams, kept only while the score stays
//! inside a tolerance band around the score the pass started from.
//!
//! Hill-climbing alone keeps putting the same strong players together; this
//! pass re-deals the bottom of each team without materially hurting balance.

use rand_core::RngCore;
use tracing::trace;

use crate::config::SpiceConfig;
use crate::mechanics::stoch;
use crate::partition::{Partition, Swap};
use crate::roster::Participant;
use crate::systems::sdk::{score_with, KeeperRetention, Outcome, SwapRule};

pub fn spice<R: RngCore + ?Sized>(
    pool: &[Participant],
    partition: Partition,
    cfg: SpiceConfig,
    rng: &mut R,
) -> Outcome {
    spice_ext(pool, partition, cfg, &KeeperRetention, rng)
}

pub fn spice_ext<R: RngCore + ?Sized>(
    pool: &[Participant],
    mut partition: Partition,
    cfg: SpiceConfig,
    rule: &dyn SwapRule,
    rng: &mut R,
) -> Outcome {
    let baseline = partition.score(pool);
    let teams = partition.len();
    if teams < 2 || cfg.tries == 0 {
        return Outcome { partition, score: baseline, iters: 0, changes: 0, converged: true };
    }

    // Band is anchored on the input score, so accepted moves cannot compound.
    let ceiling = baseline + baseline * cfg.tolerance + cfg.base_epsilon;
    let mut strengths = partition.strengths(pool);
    let mut scratch = Vec::with_capacity(teams);
    let mut current = baseline;
    let mut accepted = 0;

    for _ in 0..cfg.tries {
        let a = stoch::below(rng, teams);
        let mut b = stoch::below(rng, teams - 1);
        if b >= a {
            b += 1;
        }
        let (Some(i), Some(j)) = (
            pick_weak(pool, partition.team(a), cfg.fraction, rng),
            pick_weak(pool, partition.team(b), cfg.fraction, rng),
        ) else {
            continue;
        };

        let swap = Swap { a, i, b, j };
        if !rule.allows(pool, &partition, swap) {
            continue;
        }

        let ra = pool[partition.member(a, i)].rating;
        let rb = pool[partition.member(b, j)].rating;
        let sa = strengths[a] + (rb - ra) / partition.team(a).len() as f64;
        let sb = strengths[b] + (ra - rb) / partition.team(b).len() as f64;
        let next = score_with(&strengths, &mut scratch, (a, sa), (b, sb));
        if next <= ceiling {
            partition.apply(swap);
            strengths = partition.strengths(pool);
            current = crate::mechanics::variance(&strengths);
            accepted += 1;
            trace!(?swap, score = current, "spice: kept exchange");
        }
    }

    Outcome { partition, score: current, iters: cfg.tries, changes: accepted, converged: true }
}

/// Random slot among the lowest-rated `ceil(len * fraction)` members (at least one).
fn pick_weak<R: RngCore + ?Sized>(
    pool: &[Participant],
    team: &[usize],
    fraction: f64,
    rng: &mut R,
) -> Option<usize> {
    if team.is_empty() {
        return None;
    }
    let mut slots: Vec<usize> = (0..team.len()).collect();
    slots.sort_by(|&x, &y| pool[team[x]].rating.total_cmp(&pool[team[y]].rating));
    let take = ((team.len() as f64 * fraction).ceil() as usize).clamp(1, team.len());
    Some(slots[stoch::below(rng, take)])
}
