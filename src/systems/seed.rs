//! Greedy seeding: spread dedicated keepers first, then place everyone else
//! strongest-first into whichever team is currently weakest.
//!
//! Placement order is the rating plus a jitter that widens for lower ratings,
//! so weak players do not land in the same teams restart after restart.

use rand_core::RngCore;

use crate::mechanics::stoch;
use crate::partition::Partition;
use crate::roster::{Participant, RATING_MAX, RATING_MIN};

#[derive(Clone, Copy, Debug)]
pub struct Params {
    /// Jitter amplitude at the bottom of the rating scale.
    pub jitter_scale: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self { jitter_scale: 0.5 }
    }
}

/// Build one partition from `order`, a (shuffled) permutation of pool indices.
///
/// Expects validated sizes: `order.len() == teams_count * per_team`.
pub fn seed_teams<R: RngCore + ?Sized>(
    pool: &[Participant],
    order: &[usize],
    teams_count: usize,
    per_team: usize,
    params: Params,
    rng: &mut R,
) -> Partition {
    debug_assert_eq!(order.len(), teams_count * per_team);
    let mut part = Partition::with_capacity(teams_count, per_team);
    let mut sums = vec![0.0_f64; teams_count];

    let (keepers, mut rest): (Vec<usize>, Vec<usize>) =
        order.iter().copied().partition(|&m| pool[m].dedicated_keeper);

    // 1) one keeper per team, in the order received; surplus joins the pool
    let mut surplus = Vec::new();
    for (k, &m) in keepers.iter().enumerate() {
        if k < teams_count && part.team(k).len() < per_team {
            part.place(k, m);
            sums[k] += pool[m].rating;
        } else {
            surplus.push(m);
        }
    }
    rest.extend(surplus);

    // 2) strongest-first by jittered rating
    let mut keyed: Vec<(f64, usize)> = rest
        .into_iter()
        .map(|m| {
            let r = pool[m].rating;
            (r + stoch::rating_jitter(rng, r, params.jitter_scale, RATING_MIN, RATING_MAX), m)
        })
        .collect();
    keyed.sort_by(|x, y| y.0.total_cmp(&x.0));

    // 3) always into the weakest team that still has room; first such team on ties
    for (_, m) in keyed {
        let mut best: Option<(usize, f64)> = None;
        for t in 0..teams_count {
            let len = part.team(t).len();
            if len >= per_team {
                continue;
            }
            let avg = if len == 0 { 0.0 } else { sums[t] / len as f64 };
            if best.is_none_or(|(_, b)| avg < b) {
                best = Some((t, avg));
            }
        }
        if let Some((t, _)) = best {
            part.place(t, m);
            sums[t] += pool[m].rating;
        }
    }

    part
}
