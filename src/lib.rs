/*!
`team_balance` — split a rated pool into equal teams with near-equal average ratings.

What it does
- Partitions `teams × per_team` participants into `teams` groups, minimizing the
  population variance of the per-team mean ratings.
- Runs a fixed pipeline per start: greedy seeding → pairwise local search →
  tolerance-bounded shuffle of each team's weakest members.
- Repeats from independent random orderings and keeps the lowest score.
- Never lets an exchange strip a team of its only dedicated goalkeeper.

How to use (call surface only)
- `build_balanced_teams(&players, teams, per_team) -> Vec<Vec<Participant>>`
  (empty on invalid input).
- `balance_seeded(&players, teams, per_team, seed)` for reproducible output.
- `balance_with(&players, teams, per_team, &cfg, &mut rng) -> Result<Balanced, _>`
  for explicit configuration, an injected `RngCore`, and per-start diagnostics.
- `report::Summary` / `report::share_message` to present the result.

What it does NOT do
- No guarantee of the global optimum; it is a bounded-time heuristic.
- No unequal team sizes, no positional balance beyond the keeper rule.
*/

pub mod config;
pub mod error;
pub mod genres;
pub mod mechanics;
pub mod partition;
pub mod report;
pub mod roster;
pub mod systems;

pub use config::{BalanceConfig, SpiceConfig};
pub use error::BalanceError;
pub use genres::multi_start::{
    Balanced, RunSummary, balance_seeded, balance_with, build_balanced_teams,
    try_build_balanced_teams, try_build_balanced_teams_with,
};
pub use partition::{Partition, Swap};
pub use roster::{MatchFormat, Participant, Role, Roster};

/// How a [`refine_det`] loop ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    /// Calls to `step`, including the final one that found nothing.
    pub iters: usize,
    /// Calls to `step` that changed the state.
    pub improved: usize,
    /// `step` reported no improvement before the budget ran out.
    pub converged: bool,
}

/// Deterministic refinement: apply `step` until it reports no change or
/// `max_iters` calls have been made. `step` returns `true` when it changed `state`.
pub fn refine_det<S, Step>(state: &mut S, mut step: Step, max_iters: usize) -> Progress
where
    Step: FnMut(&mut S) -> bool,
{
    let mut progress = Progress::default();
    while progress.iters < max_iters {
        progress.iters += 1;
        if !step(state) {
            progress.converged = true;
            return progress;
        }
        progress.improved += 1;
    }
    progress
}
