//! Index-based partition of a participant pool.
//!
//! Teams hold indices into the caller's `&[Participant]`, never the values
//! themselves, so one run owns one `Partition` and nothing is shared between
//! runs. Members only ever move by [`Partition::apply`], which keeps every
//! team at its original size.

use crate::mechanics::variance;
use crate::roster::Participant;

/// Exchange of member `i` of team `a` with member `j` of team `b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swap {
    pub a: usize,
    pub i: usize,
    pub b: usize,
    pub j: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    teams: Vec<Vec<usize>>,
}

impl Partition {
    pub fn with_capacity(teams_count: usize, per_team: usize) -> Self {
        Self { teams: (0..teams_count).map(|_| Vec::with_capacity(per_team)).collect() }
    }

    /// Build from explicit pool indices. No completeness check; see [`Partition::covers`].
    pub fn from_teams(teams: Vec<Vec<usize>>) -> Self {
        Self { teams }
    }

    pub fn teams(&self) -> &[Vec<usize>] {
        &self.teams
    }

    pub fn team(&self, t: usize) -> &[usize] {
        &self.teams[t]
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub(crate) fn place(&mut self, t: usize, member: usize) {
        self.teams[t].push(member);
    }

    /// Pool index at `(team, slot)`.
    #[inline]
    pub fn member(&self, t: usize, slot: usize) -> usize {
        self.teams[t][slot]
    }

    pub fn apply(&mut self, s: Swap) {
        let x = self.teams[s.a][s.i];
        self.teams[s.a][s.i] = self.teams[s.b][s.j];
        self.teams[s.b][s.j] = x;
    }

    pub fn rating_sums(&self, pool: &[Participant]) -> Vec<f64> {
        self.teams
            .iter()
            .map(|t| t.iter().map(|&m| pool[m].rating).sum())
            .collect()
    }

    /// Mean rating per team; 0 for an empty team.
    pub fn strengths(&self, pool: &[Participant]) -> Vec<f64> {
        self.teams
            .iter()
            .zip(self.rating_sums(pool))
            .map(|(t, sum)| if t.is_empty() { 0.0 } else { sum / t.len() as f64 })
            .collect()
    }

    /// Population variance of the team strengths. Lower is better.
    pub fn score(&self, pool: &[Participant]) -> f64 {
        variance(&self.strengths(pool))
    }

    pub fn keeper_count(&self, t: usize, pool: &[Participant]) -> usize {
        self.teams[t].iter().filter(|&&m| pool[m].dedicated_keeper).count()
    }

    /// True when every pool index appears exactly once and every team has `per_team` members.
    pub fn covers(&self, pool_len: usize, per_team: usize) -> bool {
        let mut seen = vec![false; pool_len];
        for team in &self.teams {
            if team.len() != per_team {
                return false;
            }
            for &m in team {
                if m >= pool_len || std::mem::replace(&mut seen[m], true) {
                    return false;
                }
            }
        }
        seen.into_iter().all(|s| s)
    }

    /// Resolve indices back into owned participants, team order preserved.
    pub fn materialize(&self, pool: &[Participant]) -> Vec<Vec<Participant>> {
        self.teams
            .iter()
            .map(|t| t.iter().map(|&m| pool[m].clone()).collect())
            .collect()
    }
}
