//! Presentation of a finished partition: per-team averages, overall score,
//! and the plain-text message posted to the group chat.

use std::fmt;

use rand_core::RngCore;
use serde::Serialize;

use crate::mechanics::{stoch, variance};
use crate::roster::{Participant, team_strength};

#[derive(Clone, Debug, Serialize)]
pub struct TeamSummary {
    pub index: usize,
    pub strength: f64,
    pub keepers: usize,
    pub members: Vec<Participant>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Summary {
    pub teams: Vec<TeamSummary>,
    /// Population variance of the team strengths.
    pub score: f64,
}

impl Summary {
    pub fn new(teams: &[Vec<Participant>]) -> Self {
        let teams: Vec<TeamSummary> = teams
            .iter()
            .enumerate()
            .map(|(index, members)| TeamSummary {
                index,
                strength: team_strength(members),
                keepers: members.iter().filter(|p| p.dedicated_keeper).count(),
                members: members.clone(),
            })
            .collect();
        let strengths: Vec<f64> = teams.iter().map(|t| t.strength).collect();
        Self { score: variance(&strengths), teams }
    }

    /// Strongest minus weakest team average.
    pub fn spread(&self) -> f64 {
        let (lo, hi) = self
            .teams
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| (lo.min(t.strength), hi.max(t.strength)));
        if self.teams.is_empty() { 0.0 } else { hi - lo }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.teams {
            writeln!(f, "Team {}  (avg {:.2})", t.index + 1, t.strength)?;
            for p in &t.members {
                let gk = if p.dedicated_keeper { " (GK)" } else { "" };
                writeln!(f, "  {:<20} {:>4.1}  {}{}", p.name, p.rating, p.role, gk)?;
            }
            writeln!(f)?;
        }
        write!(f, "variance {:.4}  spread {:.2}", self.score, self.spread())
    }
}

/// Team that wears the bibs; `None` when there are no teams.
pub fn pick_bib<R: RngCore + ?Sized>(rng: &mut R, teams: usize) -> Option<usize> {
    (teams > 0).then(|| stoch::below(rng, teams))
}

/// Chat-ready listing: a bold `*Team N*` header per team (bib team prefixed
/// with 🎽), one `- Name` line per member, ` (GK)` only for dedicated keepers.
pub fn share_message(teams: &[Vec<Participant>], bib: Option<usize>) -> String {
    let mut lines = Vec::new();
    for (i, team) in teams.iter().enumerate() {
        let prefix = if bib == Some(i) { "🎽 " } else { "" };
        lines.push(format!("{prefix}*Team {}*", i + 1));
        for p in team {
            if p.dedicated_keeper {
                lines.push(format!("- {} (GK)", p.name));
            } else {
                lines.push(format!("- {}", p.name));
            }
        }
        lines.push(String::new());
    }
    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Role;

    #[test]
    fn share_message_marks_bib_and_keepers() {
        let teams = vec![
            vec![Participant::new("Ed", 8.0, Role::Goalkeeper), Participant::new("Ky", 9.0, Role::Midfielder)],
            vec![Participant::new("Ant", 7.0, Role::Attacker).covers_keeper(), Participant::new("Bell", 8.0, Role::Midfielder)],
        ];
        let msg = share_message(&teams, Some(1));
        assert_eq!(msg, "*Team 1*\n- Ed (GK)\n- Ky\n\n🎽 *Team 2*\n- Ant\n- Bell");
    }

    #[test]
    fn summary_reports_strengths_and_variance() {
        let teams = vec![
            vec![Participant::new("a", 9.0, Role::Any), Participant::new("b", 3.0, Role::Any)],
            vec![Participant::new("c", 5.0, Role::Any), Participant::new("d", 5.0, Role::Any)],
        ];
        let s = Summary::new(&teams);
        assert_eq!(s.teams[0].strength, 6.0);
        assert_eq!(s.teams[1].strength, 5.0);
        assert!((s.score - 0.25).abs() < 1e-12);
        assert!((s.spread() - 1.0).abs() < 1e-12);
    }
}
