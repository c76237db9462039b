// src/genres/multi_start.rs

//! Multi-start orchestrator.
//!
//! Coordinates the three systems once per start:
//! - seed   → shuffled order, greedy capacity-aware placement
//! - refine → steepest-improvement pairwise exchange
//! - spice  → tolerance-bounded re-deal of each team's weakest members
//!
//! The start count scales with the pool (`BalanceConfig::runs_for`). One `u64`
//! per start is drawn from the caller's RNG before any start runs; each start
//! then owns a private `WyRand` and a private `Partition`. The winner is the
//! lowest final score, earliest start on ties, so parallel and in-order runs
//! agree exactly.

use std::collections::HashSet;

use bevy_prng::WyRand;
use rand_core::{RngCore, SeedableRng};
use tracing::{debug, warn};

use crate::config::BalanceConfig;
use crate::error::{BalanceError, Result};
use crate::genres::sdk::{pick_best, run_starts};
use crate::mechanics::stoch;
use crate::partition::Partition;
use crate::roster::Participant;
use crate::systems::sdk::KeeperRetention;
use crate::systems::{refine, seed, spice};

/// Per-start trace, in start order.
#[derive(Clone, Copy, Debug)]
pub struct RunSummary {
    pub seeded_score: f64,
    pub refined_score: f64,
    pub final_score: f64,
    pub refine_iters: usize,
    pub converged: bool,
    pub spice_accepted: usize,
}

#[derive(Clone, Debug)]
pub struct Balanced {
    pub teams: Vec<Vec<Participant>>,
    pub partition: Partition,
    pub score: f64,
    pub strengths: Vec<f64>,
    pub best_run: usize,
    pub runs: Vec<RunSummary>,
}

/// Input checks shared by every entry point.
pub fn validate(players: &[Participant], teams_count: usize, per_team: usize) -> Result<()> {
    if teams_count < 1 {
        return Err(BalanceError::NoTeams);
    }
    if per_team < 1 {
        return Err(BalanceError::EmptyTeams);
    }
    let expected = teams_count.checked_mul(per_team).unwrap_or(usize::MAX);
    if players.len() != expected {
        return Err(BalanceError::SizeMismatch { players: players.len(), expected });
    }
    let mut seen = HashSet::with_capacity(players.len());
    for p in players {
        if !p.rating.is_finite() {
            return Err(BalanceError::NonFiniteRating { id: p.id.clone() });
        }
        if !seen.insert(p.id.as_str()) {
            return Err(BalanceError::DuplicateId(p.id.clone()));
        }
    }
    Ok(())
}

/// Full pipeline with an injected RNG and explicit configuration.
pub fn balance_with<R: RngCore + ?Sized>(
    players: &[Participant],
    teams_count: usize,
    per_team: usize,
    cfg: &BalanceConfig,
    rng: &mut R,
) -> Result<Balanced> {
    cfg.validate()?;
    if let Err(e) = validate(players, teams_count, per_team) {
        warn!(error = %e, teams_count, per_team, players = players.len(), "rejected team request");
        return Err(e);
    }

    let seeds: Vec<u64> = (0..cfg.runs_for(players.len())).map(|_| rng.next_u64()).collect();
    let results = run_starts(&seeds, cfg.parallel, |k, s| {
        let (partition, summary) = single_start(players, teams_count, per_team, cfg, s);
        debug!(
            start = k,
            seeded = summary.seeded_score,
            refined = summary.refined_score,
            score = summary.final_score,
            "start finished"
        );
        (partition, summary)
    });

    let best_run = pick_best(&results, |(_, r)| r.final_score)
        .ok_or_else(|| BalanceError::InvalidConfig("no starts were run".into()))?;
    let runs: Vec<RunSummary> = results.iter().map(|(_, r)| *r).collect();
    let partition = results
        .into_iter()
        .nth(best_run)
        .map(|(p, _)| p)
        .ok_or_else(|| BalanceError::InvalidConfig("winning start went missing".into()))?;

    let strengths = partition.strengths(players);
    let score = runs[best_run].final_score;
    debug!(best_run, score, starts = runs.len(), "balanced teams");

    Ok(Balanced {
        teams: partition.materialize(players),
        partition,
        score,
        strengths,
        best_run,
        runs,
    })
}

/// One seed → refine → spice pass on a private RNG.
pub fn single_start(
    pool: &[Participant],
    teams_count: usize,
    per_team: usize,
    cfg: &BalanceConfig,
    start_seed: u64,
) -> (Partition, RunSummary) {
    let mut rng = WyRand::from_seed(start_seed.to_le_bytes());

    let mut order: Vec<usize> = (0..pool.len()).collect();
    stoch::shuffle(&mut rng, &mut order);

    let seeded = seed::seed_teams(
        pool,
        &order,
        teams_count,
        per_team,
        seed::Params { jitter_scale: cfg.jitter_scale },
        &mut rng,
    );
    let seeded_score = seeded.score(pool);

    let limits = refine::Limits { max_iters: cfg.refine_max_iters, epsilon: cfg.improvement_epsilon };
    let refined = refine::hill_climb_ext(pool, seeded, limits, &KeeperRetention);
    let spiced = spice::spice_ext(pool, refined.partition, cfg.spice, &KeeperRetention, &mut rng);

    let summary = RunSummary {
        seeded_score,
        refined_score: refined.score,
        final_score: spiced.score,
        refine_iters: refined.iters,
        converged: refined.converged,
        spice_accepted: spiced.changes,
    };
    (spiced.partition, summary)
}

/// Default configuration, caller's RNG.
pub fn try_build_balanced_teams_with<R: RngCore + ?Sized>(
    players: &[Participant],
    teams_count: usize,
    per_team: usize,
    rng: &mut R,
) -> Result<Balanced> {
    balance_with(players, teams_count, per_team, &BalanceConfig::default(), rng)
}

/// Default configuration, `WyRand` seeded from the OS.
pub fn try_build_balanced_teams(
    players: &[Participant],
    teams_count: usize,
    per_team: usize,
) -> Result<Balanced> {
    let mut rng = WyRand::from_os_rng();
    try_build_balanced_teams_with(players, teams_count, per_team, &mut rng)
}

/// `teams_count` teams of `per_team`, or an empty `Vec` if the request is invalid.
pub fn build_balanced_teams(
    players: &[Participant],
    teams_count: usize,
    per_team: usize,
) -> Vec<Vec<Participant>> {
    try_build_balanced_teams(players, teams_count, per_team)
        .map(|b| b.teams)
        .unwrap_or_default()
}

/// As [`build_balanced_teams`], reproducible from `seed`.
pub fn balance_seeded(
    players: &[Participant],
    teams_count: usize,
    per_team: usize,
    seed: u64,
) -> Vec<Vec<Participant>> {
    let mut rng = WyRand::from_seed(seed.to_le_bytes());
    try_build_balanced_teams_with(players, teams_count, per_team, &mut rng)
        .map(|b| b.teams)
        .unwrap_or_default()
}
